//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains opcode and funct tables, field extraction, decoding, and disassembly for the
//! MIPS subset the visualizer understands.
//!
//! # Supported instructions
//!
//! * R-type: `add addu sub subu and or slt sltu sll srl jr`
//! * I-type: `addi addiu andi ori slti sltiu lw lb sw sb beq bne`
//! * J-type: `j jal`

/// Instruction decoding logic.
pub mod decode;

/// Instruction disassembler for the instruction list and diagnostics.
pub mod disasm;

/// R-type function codes.
pub mod funct;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Mnemonics and instruction classes.
pub mod mnemonic;

/// Major opcodes.
pub mod opcodes;

pub use decode::decode;
pub use disasm::{disassemble, disassemble_with};
pub use instruction::{DecodedInstruction, InstructionBits, RawInstruction};
pub use mnemonic::{InstructionFormat, Mnemonic};
