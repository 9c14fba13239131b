//! Program loading and simulation driving.
//!
//! Provides the pieces that sit around the pipeline clock:
//! 1. **Loader:** Validates hexadecimal program text and reads program files.
//! 2. **Ticker:** Tick sources that decide when the next cycle happens.
//! 3. **Simulator:** Pairs a clock with a configuration and runs it to completion.

/// Program text validation and file loading.
pub mod loader;

/// Top-level simulation driver.
pub mod simulator;

/// Tick sources.
pub mod ticker;

pub use loader::{load_program, parse_program};
pub use simulator::{RunOutcome, Simulator, StopReason};
pub use ticker::{FreeRunningTicker, IntervalTicker, TickSource};
