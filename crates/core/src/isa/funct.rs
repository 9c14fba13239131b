//! MIPS R-type Function Codes.
//!
//! Defines the funct field values (bits 5-0) recognized under `OP_SPECIAL`.

/// Shift Left Logical (SLL). The all-zero word `sll $0, $0, 0` is the canonical NOP.
pub const FUNCT_SLL: u32 = 0b000000;

/// Shift Right Logical (SRL).
pub const FUNCT_SRL: u32 = 0b000010;

/// Jump Register (JR).
pub const FUNCT_JR: u32 = 0b001000;

/// Add (ADD).
pub const FUNCT_ADD: u32 = 0b100000;

/// Add Unsigned (ADDU).
pub const FUNCT_ADDU: u32 = 0b100001;

/// Subtract (SUB).
pub const FUNCT_SUB: u32 = 0b100010;

/// Subtract Unsigned (SUBU).
pub const FUNCT_SUBU: u32 = 0b100011;

/// Bitwise AND (AND).
pub const FUNCT_AND: u32 = 0b100100;

/// Bitwise OR (OR).
pub const FUNCT_OR: u32 = 0b100101;

/// Set on Less Than (SLT).
pub const FUNCT_SLT: u32 = 0b101010;

/// Set on Less Than Unsigned (SLTU).
pub const FUNCT_SLTU: u32 = 0b101011;
