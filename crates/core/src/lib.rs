//! MIPS 5-stage pipeline visualizer library.
//!
//! This crate models how a short MIPS program flows through the classic in-order pipeline
//! (IF, ID, EX, MEM, WB). It provides:
//! 1. **ISA:** Decoding of 32-bit MIPS words into structured instructions and disassembly.
//! 2. **Hazards:** Adjacent-pair RAW analysis (forwarding and load-use stalls).
//! 3. **Pipeline:** Stage occupancy projection and the cycle clock state machine.
//! 4. **Simulation:** Program loading, tick sources, and a driver loop.
//! 5. **Reporting:** Configuration, read-only snapshots, and run statistics.

/// Common types (errors, register ids, constants).
pub mod common;
/// Simulator configuration (defaults, display options, clock cadence).
pub mod config;
/// Instruction set (raw words, field extraction, decode, disassembly).
pub mod isa;
/// Pipeline model (stages, hazards, occupancy, clock, snapshot).
pub mod pipeline;
/// Program loading, tick sources, and the simulation driver.
pub mod sim;
/// Pipeline run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Decoded instruction and the raw word it came from.
pub use crate::isa::{DecodedInstruction, Mnemonic, RawInstruction, decode};
/// Pipeline clock and its observable state.
pub use crate::pipeline::{ClockState, PipelineClock, PipelineSnapshot, Stage};
/// Top-level driver; pairs a clock with a configuration.
pub use crate::sim::Simulator;
