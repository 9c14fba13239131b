//! Common utilities and types shared across the pipeline model.
//!
//! It includes:
//! 1. **Constants:** Stage count, field widths, and other fixed pipeline parameters.
//! 2. **Error Handling:** Clock transition, input, and configuration errors.
//! 3. **Register Ids:** A small newtype for MIPS general-purpose register numbers.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for clock transitions, program input, and configuration.
pub mod error;

/// Register identifiers and naming.
pub mod reg;

pub use constants::STAGE_COUNT;
pub use error::{ClockError, ConfigError, InputError, Transition};
pub use reg::{Reg, RegisterNaming};
