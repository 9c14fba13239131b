//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction for the MIPS instruction formats, the validated textual
//! `RawInstruction`, and the structured `DecodedInstruction` produced by the decoder.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::mnemonic::Mnemonic;
use crate::common::constants::HEX_DIGITS_PER_WORD;
use crate::common::error::InputError;
use crate::common::reg::Reg;

/// Bit shift of the opcode field (bits 31-26).
const OPCODE_SHIFT: u32 = 26;
/// Bit mask for the 6-bit opcode field.
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit shift of the rs field (bits 25-21).
const RS_SHIFT: u32 = 21;
/// Bit shift of the rt field (bits 20-16).
const RT_SHIFT: u32 = 16;
/// Bit shift of the rd field (bits 15-11).
const RD_SHIFT: u32 = 11;
/// Bit shift of the shamt field (bits 10-6).
const SHAMT_SHIFT: u32 = 6;
/// Bit mask for the 5-bit shamt field.
pub const SHAMT_MASK: u32 = 0x1F;
/// Bit mask for the 6-bit funct field (bits 5-0).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the 16-bit immediate field (bits 15-0).
pub const IMM16_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump target field (bits 25-0).
pub const ADDRESS_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting MIPS instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 31-26).
    fn opcode(&self) -> u32;

    /// Extracts the first source register field (bits 25-21).
    fn rs(&self) -> Reg;

    /// Extracts the second source / I-type target register field (bits 20-16).
    fn rt(&self) -> Reg;

    /// Extracts the R-type destination register field (bits 15-11).
    fn rd(&self) -> Reg;

    /// Extracts the shift amount field (bits 10-6).
    fn shamt(&self) -> u32;

    /// Extracts the funct field (bits 5-0).
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate (bits 15-0).
    fn imm16(&self) -> u16;

    /// Extracts the 26-bit jump target (bits 25-0).
    fn address(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> Reg {
        Reg::from_field(self >> RS_SHIFT)
    }

    #[inline(always)]
    fn rt(&self) -> Reg {
        Reg::from_field(self >> RT_SHIFT)
    }

    #[inline(always)]
    fn rd(&self) -> Reg {
        Reg::from_field(self >> RD_SHIFT)
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & SHAMT_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u16 {
        (self & IMM16_MASK) as u16
    }

    #[inline(always)]
    fn address(&self) -> u32 {
        self & ADDRESS_MASK
    }
}

/// One instruction word as typed by the user: exactly eight hexadecimal digits.
///
/// The original spelling (case included) is kept for display; [`RawInstruction::word`]
/// gives the parsed 32-bit value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawInstruction {
    text: String,
    word: u32,
}

impl RawInstruction {
    /// Wraps an already-encoded word, rendering it as lowercase hex.
    pub fn from_word(word: u32) -> Self {
        Self {
            text: format!("{word:08x}"),
            word,
        }
    }

    /// The 32-bit encoding.
    #[inline]
    pub const fn word(&self) -> u32 {
        self.word
    }

    /// The hexadecimal text as supplied.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for RawInstruction {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InputError::InvalidWord { text: s.to_owned() };
        if s.len() != HEX_DIGITS_PER_WORD || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let word = u32::from_str_radix(s, 16).map_err(|_| invalid())?;
        Ok(Self {
            text: s.to_owned(),
            word,
        })
    }
}

impl From<u32> for RawInstruction {
    fn from(word: u32) -> Self {
        Self::from_word(word)
    }
}

impl fmt::Display for RawInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for RawInstruction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// Decoded instruction: mnemonic plus the operands the pipeline model cares about.
///
/// `dest` is set only for instructions that write a register (R-type `rd`, I-type `rt`
/// of loads and immediate arithmetic). Branches, stores, and jumps leave it empty.
/// `src1`/`src2` are the registers read, in assembler operand order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DecodedInstruction {
    /// Raw 32-bit instruction encoding.
    #[serde(skip)]
    pub raw: u32,
    /// Operation.
    pub mnemonic: Mnemonic,
    /// Register written, if any.
    pub dest: Option<Reg>,
    /// First register read, if any.
    pub src1: Option<Reg>,
    /// Second register read, if any.
    pub src2: Option<Reg>,
    /// Immediate, shift amount, or branch/memory offset.
    pub immediate: Option<i32>,
    /// 26-bit jump target.
    pub address: Option<u32>,
}

impl DecodedInstruction {
    /// An instruction outside the supported subset.
    pub const fn unknown(raw: u32) -> Self {
        Self {
            raw,
            mnemonic: Mnemonic::Unknown,
            dest: None,
            src1: None,
            src2: None,
            immediate: None,
            address: None,
        }
    }

    /// Register whose write can feed a later instruction.
    ///
    /// `$0` is treated as no destination: writes to it are discarded.
    pub fn written_register(&self) -> Option<Reg> {
        self.dest.filter(|r| !r.is_zero())
    }

    /// Returns `true` if `reg` is one of this instruction's source operands.
    pub fn reads(&self, reg: Reg) -> bool {
        self.src1 == Some(reg) || self.src2 == Some(reg)
    }
}
