//! System-wide constants.

/// Number of stages in the pipeline (IF, ID, EX, MEM, WB).
pub const STAGE_COUNT: usize = 5;

/// Number of hexadecimal digits in one textual instruction word.
pub const HEX_DIGITS_PER_WORD: usize = 8;

/// Number of general-purpose registers.
pub const GPR_COUNT: usize = 32;

/// Extra cycles a single instruction needs beyond its issue cycle to retire.
///
/// `n` instructions with no bubbles complete at cycle `n + PIPELINE_DRAIN_CYCLES`.
pub const PIPELINE_DRAIN_CYCLES: u64 = STAGE_COUNT as u64 - 1;
