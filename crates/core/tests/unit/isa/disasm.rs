//! # Disassembler Tests
//!
//! Text forms for each instruction shape, numeric and ABI register naming.

use mipsviz_core::common::RegisterNaming;
use mipsviz_core::isa::{decode, disassemble, disassemble_with};
use rstest::rstest;

use crate::common::builder::*;

#[rstest]
#[case(add(3, 1, 2), "add $3, $1, $2")]
#[case(sub(3, 2, 1), "sub $3, $2, $1")]
#[case(sll(3, 2, 4), "sll $3, $2, 4")]
#[case(srl(3, 2, 31), "srl $3, $2, 31")]
#[case(NOP, "sll $0, $0, 0")]
#[case(jr(31), "jr $31")]
#[case(addi(2, 1, -4), "addi $2, $1, -4")]
#[case(andi(2, 1, 0xFFFF), "andi $2, $1, 65535")]
#[case(lw(2, 8, 1), "lw $2, 8($1)")]
#[case(lb(2, -1, 1), "lb $2, -1($1)")]
#[case(sw(2, -4, 29), "sw $2, -4($29)")]
#[case(beq(1, 2, -3), "beq $1, $2, -3")]
#[case(bne(4, 0, 12), "bne $4, $0, 12")]
#[case(j(1024), "j 1024")]
#[case(jal(64), "jal 64")]
#[case(0xFC00_0000, "unknown")]
fn numeric_forms(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(decode(word).to_string(), expected);
    assert_eq!(disassemble(word), expected);
}

#[rstest]
#[case(add(3, 1, 2), "add $v1, $at, $v0")]
#[case(lw(8, 4, 29), "lw $t0, 4($sp)")]
#[case(jr(31), "jr $ra")]
#[case(NOP, "sll $zero, $zero, 0")]
#[case(beq(16, 0, 2), "beq $s0, $zero, 2")]
fn abi_forms(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(disassemble_with(&decode(word), RegisterNaming::Abi), expected);
}

#[test]
fn numeric_naming_matches_display() {
    let d = decode(lw(2, 8, 1));
    assert_eq!(disassemble_with(&d, RegisterNaming::Numeric), d.to_string());
}
