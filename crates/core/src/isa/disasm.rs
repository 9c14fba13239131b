//! Instruction Disassembler.
//!
//! Renders a `DecodedInstruction` back into assembler text for the instruction list and
//! diagnostics.
//!
//! # Usage
//!
//! ```
//! use mipsviz_core::isa::decode;
//! let text = decode(0x00221820).to_string();
//! assert_eq!(text, "add $3, $1, $2");
//! ```

use std::fmt;

use super::instruction::DecodedInstruction;
use super::mnemonic::Mnemonic;
use crate::common::reg::{Reg, RegisterNaming};

/// Disassembles a 32-bit MIPS word using numeric register names.
///
/// Returns text like `"lw $2, 8($1)"`, or `"unknown"` for unsupported encodings.
pub fn disassemble(inst: u32) -> String {
    super::decode::decode(inst).to_string()
}

/// Disassembles a decoded instruction using the requested register naming.
pub fn disassemble_with(inst: &DecodedInstruction, naming: RegisterNaming) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_instruction(&mut out, inst, naming);
    out
}

fn write_instruction<W: fmt::Write>(
    w: &mut W,
    inst: &DecodedInstruction,
    naming: RegisterNaming,
) -> fmt::Result {
    let reg = |r: Option<Reg>| r.unwrap_or(Reg::ZERO).name(naming);
    let imm = inst.immediate.unwrap_or(0);
    let m = inst.mnemonic;

    match m {
        Mnemonic::Unknown => write!(w, "{m}"),
        Mnemonic::Jr => write!(w, "{m} {}", reg(inst.src1)),
        Mnemonic::J | Mnemonic::Jal => write!(w, "{m} {}", inst.address.unwrap_or(0)),
        Mnemonic::Sll | Mnemonic::Srl => {
            write!(w, "{m} {}, {}, {imm}", reg(inst.dest), reg(inst.src1))
        }
        _ if m.is_load() => {
            write!(w, "{m} {}, {imm}({})", reg(inst.dest), reg(inst.src1))
        }
        _ if m.is_store() => {
            write!(w, "{m} {}, {imm}({})", reg(inst.src2), reg(inst.src1))
        }
        _ if m.is_branch() => {
            write!(w, "{m} {}, {}, {imm}", reg(inst.src1), reg(inst.src2))
        }
        _ => match inst.immediate {
            Some(imm) => write!(w, "{m} {}, {}, {imm}", reg(inst.dest), reg(inst.src1)),
            None => write!(
                w,
                "{m} {}, {}, {}",
                reg(inst.dest),
                reg(inst.src1),
                reg(inst.src2)
            ),
        },
    }
}

impl fmt::Display for DecodedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_instruction(f, self, RegisterNaming::Numeric)
    }
}
