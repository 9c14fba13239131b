//! Instruction mnemonics for the supported MIPS subset.

use std::fmt;

use serde::Serialize;

/// Encoding format of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionFormat {
    /// Register format: `opcode | rs | rt | rd | shamt | funct`.
    R,
    /// Immediate format: `opcode | rs | rt | imm16`.
    I,
    /// Jump format: `opcode | address26`.
    J,
}

/// Operation named by a decoded instruction.
///
/// Anything outside the supported subset decodes to [`Mnemonic::Unknown`], which carries
/// no operands and never participates in a hazard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mnemonic {
    /// `add rd, rs, rt`
    Add,
    /// `addu rd, rs, rt`
    Addu,
    /// `sub rd, rs, rt`
    Sub,
    /// `subu rd, rs, rt`
    Subu,
    /// `and rd, rs, rt`
    And,
    /// `or rd, rs, rt`
    Or,
    /// `slt rd, rs, rt`
    Slt,
    /// `sltu rd, rs, rt`
    Sltu,
    /// `sll rd, rt, shamt`
    Sll,
    /// `srl rd, rt, shamt`
    Srl,
    /// `jr rs`
    Jr,
    /// `addi rt, rs, imm`
    Addi,
    /// `addiu rt, rs, imm`
    Addiu,
    /// `andi rt, rs, imm` (zero-extended)
    Andi,
    /// `ori rt, rs, imm` (zero-extended)
    Ori,
    /// `slti rt, rs, imm`
    Slti,
    /// `sltiu rt, rs, imm`
    Sltiu,
    /// `lw rt, offset(rs)`
    Lw,
    /// `lb rt, offset(rs)`
    Lb,
    /// `sw rt, offset(rs)`
    Sw,
    /// `sb rt, offset(rs)`
    Sb,
    /// `beq rs, rt, offset`
    Beq,
    /// `bne rs, rt, offset`
    Bne,
    /// `j address`
    J,
    /// `jal address`
    Jal,
    /// Unsupported opcode or funct.
    Unknown,
}

impl Mnemonic {
    /// Every supported mnemonic, in decode-table order.
    pub const SUPPORTED: [Self; 25] = [
        Self::Add,
        Self::Addu,
        Self::Sub,
        Self::Subu,
        Self::And,
        Self::Or,
        Self::Slt,
        Self::Sltu,
        Self::Sll,
        Self::Srl,
        Self::Jr,
        Self::Addi,
        Self::Addiu,
        Self::Andi,
        Self::Ori,
        Self::Slti,
        Self::Sltiu,
        Self::Lw,
        Self::Lb,
        Self::Sw,
        Self::Sb,
        Self::Beq,
        Self::Bne,
        Self::J,
        Self::Jal,
    ];

    /// Lowercase assembler spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Addu => "addu",
            Self::Sub => "sub",
            Self::Subu => "subu",
            Self::And => "and",
            Self::Or => "or",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Jr => "jr",
            Self::Addi => "addi",
            Self::Addiu => "addiu",
            Self::Andi => "andi",
            Self::Ori => "ori",
            Self::Slti => "slti",
            Self::Sltiu => "sltiu",
            Self::Lw => "lw",
            Self::Lb => "lb",
            Self::Sw => "sw",
            Self::Sb => "sb",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::J => "j",
            Self::Jal => "jal",
            Self::Unknown => "unknown",
        }
    }

    /// Encoding format, or `None` for [`Mnemonic::Unknown`].
    pub const fn format(self) -> Option<InstructionFormat> {
        match self {
            Self::Add
            | Self::Addu
            | Self::Sub
            | Self::Subu
            | Self::And
            | Self::Or
            | Self::Slt
            | Self::Sltu
            | Self::Sll
            | Self::Srl
            | Self::Jr => Some(InstructionFormat::R),
            Self::J | Self::Jal => Some(InstructionFormat::J),
            Self::Unknown => None,
            _ => Some(InstructionFormat::I),
        }
    }

    /// Returns `true` for `lw`, the only producer that forces a load-use bubble.
    #[inline]
    pub const fn is_load_word(self) -> bool {
        matches!(self, Self::Lw)
    }

    /// Returns `true` for every memory load (`lw`, `lb`).
    #[inline]
    pub const fn is_load(self) -> bool {
        matches!(self, Self::Lw | Self::Lb)
    }

    /// Returns `true` for every memory store (`sw`, `sb`).
    #[inline]
    pub const fn is_store(self) -> bool {
        matches!(self, Self::Sw | Self::Sb)
    }

    /// Returns `true` for conditional branches.
    #[inline]
    pub const fn is_branch(self) -> bool {
        matches!(self, Self::Beq | Self::Bne)
    }

    /// Returns `true` for the logical-immediate forms whose immediate is zero-extended.
    #[inline]
    pub const fn zero_extends_immediate(self) -> bool {
        matches!(self, Self::Andi | Self::Ori)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
