//! MIPS Instruction Decoder.
//!
//! This module turns a 32-bit MIPS encoding into a structured `DecodedInstruction`.
//! It dispatches on the major opcode, then on funct for R-type words, and assigns
//! destination and source registers according to each instruction's operand roles.
//!
//! Decoding is total: anything outside the supported subset becomes `unknown` with no
//! operands rather than an error.

use super::funct;
use super::instruction::{DecodedInstruction, InstructionBits};
use super::mnemonic::Mnemonic;
use super::opcodes;

/// Decodes a MIPS instruction into its mnemonic and operands.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode.
///
/// # Returns
///
/// A `DecodedInstruction`; unsupported encodings yield [`Mnemonic::Unknown`].
pub fn decode(inst: u32) -> DecodedInstruction {
    match inst.opcode() {
        opcodes::OP_SPECIAL => decode_r_type(inst),

        opcodes::OP_ADDI => decode_i_arith(inst, Mnemonic::Addi),
        opcodes::OP_ADDIU => decode_i_arith(inst, Mnemonic::Addiu),
        opcodes::OP_ANDI => decode_i_arith(inst, Mnemonic::Andi),
        opcodes::OP_ORI => decode_i_arith(inst, Mnemonic::Ori),
        opcodes::OP_SLTI => decode_i_arith(inst, Mnemonic::Slti),
        opcodes::OP_SLTIU => decode_i_arith(inst, Mnemonic::Sltiu),

        opcodes::OP_LW => decode_load(inst, Mnemonic::Lw),
        opcodes::OP_LB => decode_load(inst, Mnemonic::Lb),
        opcodes::OP_SW => decode_store_or_branch(inst, Mnemonic::Sw),
        opcodes::OP_SB => decode_store_or_branch(inst, Mnemonic::Sb),

        opcodes::OP_BEQ => decode_store_or_branch(inst, Mnemonic::Beq),
        opcodes::OP_BNE => decode_store_or_branch(inst, Mnemonic::Bne),

        opcodes::OP_J => decode_jump(inst, Mnemonic::J),
        opcodes::OP_JAL => decode_jump(inst, Mnemonic::Jal),

        _ => DecodedInstruction::unknown(inst),
    }
}

/// Decodes an `OP_SPECIAL` word by its funct field.
///
/// R-type format: `opcode | rs | rt | rd | shamt | funct`
fn decode_r_type(inst: u32) -> DecodedInstruction {
    let mnemonic = match inst.funct() {
        funct::FUNCT_ADD => Mnemonic::Add,
        funct::FUNCT_ADDU => Mnemonic::Addu,
        funct::FUNCT_SUB => Mnemonic::Sub,
        funct::FUNCT_SUBU => Mnemonic::Subu,
        funct::FUNCT_AND => Mnemonic::And,
        funct::FUNCT_OR => Mnemonic::Or,
        funct::FUNCT_SLT => Mnemonic::Slt,
        funct::FUNCT_SLTU => Mnemonic::Sltu,
        funct::FUNCT_SLL | funct::FUNCT_SRL => return decode_shift(inst),
        funct::FUNCT_JR => {
            return DecodedInstruction {
                src1: Some(inst.rs()),
                ..DecodedInstruction::unknown(inst).with_mnemonic(Mnemonic::Jr)
            };
        }
        _ => return DecodedInstruction::unknown(inst),
    };

    DecodedInstruction {
        dest: Some(inst.rd()),
        src1: Some(inst.rs()),
        src2: Some(inst.rt()),
        ..DecodedInstruction::unknown(inst).with_mnemonic(mnemonic)
    }
}

/// Decodes `sll`/`srl`: `rd <- rt shifted by shamt`. `rs` is unused.
fn decode_shift(inst: u32) -> DecodedInstruction {
    let mnemonic = if inst.funct() == funct::FUNCT_SLL {
        Mnemonic::Sll
    } else {
        Mnemonic::Srl
    };
    DecodedInstruction {
        dest: Some(inst.rd()),
        src1: Some(inst.rt()),
        immediate: Some(inst.shamt() as i32),
        ..DecodedInstruction::unknown(inst).with_mnemonic(mnemonic)
    }
}

/// Decodes immediate arithmetic/logic: `rt <- rs op imm`.
///
/// `andi`/`ori` zero-extend their immediate; the rest sign-extend.
fn decode_i_arith(inst: u32, mnemonic: Mnemonic) -> DecodedInstruction {
    let immediate = if mnemonic.zero_extends_immediate() {
        i32::from(inst.imm16())
    } else {
        sign_extend_imm16(inst)
    };
    DecodedInstruction {
        dest: Some(inst.rt()),
        src1: Some(inst.rs()),
        immediate: Some(immediate),
        ..DecodedInstruction::unknown(inst).with_mnemonic(mnemonic)
    }
}

/// Decodes loads: `rt <- mem[rs + offset]`.
fn decode_load(inst: u32, mnemonic: Mnemonic) -> DecodedInstruction {
    DecodedInstruction {
        dest: Some(inst.rt()),
        src1: Some(inst.rs()),
        immediate: Some(sign_extend_imm16(inst)),
        ..DecodedInstruction::unknown(inst).with_mnemonic(mnemonic)
    }
}

/// Decodes stores (`mem[rs + offset] <- rt`) and branches (`compare rs, rt`).
///
/// Both read `rs` and `rt` and write no register.
fn decode_store_or_branch(inst: u32, mnemonic: Mnemonic) -> DecodedInstruction {
    DecodedInstruction {
        src1: Some(inst.rs()),
        src2: Some(inst.rt()),
        immediate: Some(sign_extend_imm16(inst)),
        ..DecodedInstruction::unknown(inst).with_mnemonic(mnemonic)
    }
}

/// Decodes J-type jumps. Only the 26-bit target is kept.
fn decode_jump(inst: u32, mnemonic: Mnemonic) -> DecodedInstruction {
    DecodedInstruction {
        address: Some(inst.address()),
        ..DecodedInstruction::unknown(inst).with_mnemonic(mnemonic)
    }
}

/// Sign extends the low 16 bits of `inst`.
#[inline]
fn sign_extend_imm16(inst: u32) -> i32 {
    i32::from(inst.imm16() as i16)
}

impl DecodedInstruction {
    /// Replaces the mnemonic, keeping every operand.
    #[inline]
    fn with_mnemonic(mut self, mnemonic: Mnemonic) -> Self {
        self.mnemonic = mnemonic;
        self
    }
}
