//! Instruction Decode Properties.
//!
//! Verifies that `decode()` maps every supported opcode/funct to its mnemonic and assigns
//! destination and source registers by operand role.
//!
//! # Coverage Matrix
//!
//! - R-type:  add addu sub subu and or slt sltu, sll srl (shift), jr
//! - I-type:  addi addiu andi ori slti sltiu, lw lb, sw sb, beq bne
//! - J-type:  j jal

use mipsviz_core::common::Reg;
use mipsviz_core::isa::{InstructionBits, InstructionFormat, Mnemonic, decode};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::*;

fn reg(idx: u8) -> Option<Reg> {
    Reg::new(idx)
}

// ══════════════════════════════════════════════════════════
// 1. Mnemonic table
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(add(3, 1, 2), Mnemonic::Add)]
#[case(addu(3, 1, 2), Mnemonic::Addu)]
#[case(sub(3, 1, 2), Mnemonic::Sub)]
#[case(subu(3, 1, 2), Mnemonic::Subu)]
#[case(and(3, 1, 2), Mnemonic::And)]
#[case(or(3, 1, 2), Mnemonic::Or)]
#[case(slt(3, 1, 2), Mnemonic::Slt)]
#[case(sltu(3, 1, 2), Mnemonic::Sltu)]
#[case(sll(3, 2, 4), Mnemonic::Sll)]
#[case(srl(3, 2, 4), Mnemonic::Srl)]
#[case(jr(31), Mnemonic::Jr)]
#[case(addi(2, 1, 5), Mnemonic::Addi)]
#[case(addiu(2, 1, 5), Mnemonic::Addiu)]
#[case(andi(2, 1, 5), Mnemonic::Andi)]
#[case(ori(2, 1, 5), Mnemonic::Ori)]
#[case(slti(2, 1, 5), Mnemonic::Slti)]
#[case(sltiu(2, 1, 5), Mnemonic::Sltiu)]
#[case(lw(2, 0, 1), Mnemonic::Lw)]
#[case(lb(2, 0, 1), Mnemonic::Lb)]
#[case(sw(2, 0, 1), Mnemonic::Sw)]
#[case(sb(2, 0, 1), Mnemonic::Sb)]
#[case(beq(1, 2, 3), Mnemonic::Beq)]
#[case(bne(1, 2, 3), Mnemonic::Bne)]
#[case(j(1024), Mnemonic::J)]
#[case(jal(1024), Mnemonic::Jal)]
fn decodes_mnemonic(#[case] word: u32, #[case] expected: Mnemonic) {
    assert_eq!(decode(word).mnemonic, expected);
}

#[test]
fn every_supported_mnemonic_has_a_format() {
    for m in Mnemonic::SUPPORTED {
        assert!(m.format().is_some(), "{m} has no format");
    }
    assert_eq!(Mnemonic::Unknown.format(), None);
    assert_eq!(Mnemonic::Add.format(), Some(InstructionFormat::R));
    assert_eq!(Mnemonic::Lw.format(), Some(InstructionFormat::I));
    assert_eq!(Mnemonic::Jal.format(), Some(InstructionFormat::J));
}

#[test]
fn reference_words() {
    assert_eq!(decode(0x0022_1820).mnemonic, Mnemonic::Add);
    assert_eq!(decode(0x8C22_0000).mnemonic, Mnemonic::Lw);
    assert_eq!(decode(0x0000_0000).mnemonic, Mnemonic::Sll);
}

// ══════════════════════════════════════════════════════════
// 2. Operand roles
// ══════════════════════════════════════════════════════════

#[test]
fn r_type_arith_roles() {
    let d = decode(add(3, 1, 2));
    assert_eq!(d.dest, reg(3));
    assert_eq!(d.src1, reg(1));
    assert_eq!(d.src2, reg(2));
    assert_eq!(d.immediate, None);
    assert_eq!(d.raw, add(3, 1, 2));
}

#[test]
fn shift_reads_rt_not_rs() {
    let word = sll(3, 2, 4) | (7 << 21);
    let d = decode(word);
    assert_eq!(d.dest, reg(3));
    assert_eq!(d.src1, reg(2));
    assert_eq!(d.src2, None);
    assert_eq!(d.immediate, Some(4));
}

#[test]
fn jr_reads_rs_only() {
    let d = decode(jr(31));
    assert_eq!(d.dest, None);
    assert_eq!(d.src1, reg(31));
    assert_eq!(d.src2, None);
}

#[test]
fn i_arith_writes_rt() {
    let d = decode(addi(2, 1, -4));
    assert_eq!(d.dest, reg(2));
    assert_eq!(d.src1, reg(1));
    assert_eq!(d.src2, None);
    assert_eq!(d.immediate, Some(-4));
}

#[rstest]
#[case(andi(2, 1, 0xFFFF), 65535)]
#[case(ori(2, 1, 0x8000), 32768)]
#[case(addi(2, 1, 0xFFFF), -1)]
#[case(addiu(2, 1, 0x8000), -32768)]
#[case(slti(2, 1, 0xFFFE), -2)]
#[case(sltiu(2, 1, 0xFFFE), -2)]
fn immediate_extension(#[case] word: u32, #[case] expected: i32) {
    assert_eq!(decode(word).immediate, Some(expected));
}

#[test]
fn load_roles() {
    let d = decode(lw(2, 8, 1));
    assert_eq!(d.dest, reg(2));
    assert_eq!(d.src1, reg(1));
    assert_eq!(d.src2, None);
    assert_eq!(d.immediate, Some(8));
}

#[rstest]
#[case(sw(2, -4, 29))]
#[case(sb(2, -4, 29))]
#[case(beq(29, 2, -4))]
#[case(bne(29, 2, -4))]
fn store_and_branch_write_nothing(#[case] word: u32) {
    let d = decode(word);
    assert_eq!(d.dest, None);
    assert_eq!(d.src1, reg(29));
    assert_eq!(d.src2, reg(2));
    assert_eq!(d.immediate, Some(-4));
}

#[rstest]
#[case(j(0x03FF_FFFF), 0x03FF_FFFF)]
#[case(jal(1024), 1024)]
fn jumps_carry_only_address(#[case] word: u32, #[case] target: u32) {
    let d = decode(word);
    assert_eq!(d.address, Some(target));
    assert_eq!(d.dest, None);
    assert_eq!(d.src1, None);
    assert_eq!(d.src2, None);
    assert_eq!(d.immediate, None);
}

#[test]
fn field_extraction() {
    let word = 0x8C22_0010_u32;
    assert_eq!(word.opcode(), 0x23);
    assert_eq!(word.rs().index(), 1);
    assert_eq!(word.rt().index(), 2);
    assert_eq!(word.imm16(), 0x10);
    assert_eq!(add(3, 1, 2).rd().index(), 3);
    assert_eq!(sll(0, 0, 17).shamt(), 17);
}

// ══════════════════════════════════════════════════════════
// 3. Unsupported encodings
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::unknown_opcode(0xFC00_0000)]
#[case::unknown_funct(r_type(1, 2, 3, 0, 0x3F))]
#[case::lui(0x3C01_1234)]
#[case::mult(r_type(1, 2, 0, 0, 0x18))]
fn unsupported_decodes_to_unknown(#[case] word: u32) {
    let d = decode(word);
    assert_eq!(d.mnemonic, Mnemonic::Unknown);
    assert_eq!(d.dest, None);
    assert_eq!(d.src1, None);
    assert_eq!(d.src2, None);
    assert_eq!(d.immediate, None);
    assert_eq!(d.address, None);
}

#[test]
fn written_register_ignores_zero() {
    assert_eq!(decode(add(0, 1, 2)).written_register(), None);
    assert_eq!(decode(add(5, 1, 2)).written_register(), reg(5));
    assert_eq!(decode(NOP).written_register(), None);
}

// ══════════════════════════════════════════════════════════
// 4. Properties
// ══════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn decode_is_deterministic(word in any::<u32>()) {
        prop_assert_eq!(decode(word), decode(word));
    }

    #[test]
    fn unknown_has_no_operands(word in any::<u32>()) {
        let d = decode(word);
        if d.mnemonic == Mnemonic::Unknown {
            prop_assert!(d.dest.is_none() && d.src1.is_none() && d.src2.is_none());
            prop_assert!(d.immediate.is_none() && d.address.is_none());
        }
    }

    #[test]
    fn stores_branches_and_jumps_never_write(word in any::<u32>()) {
        let d = decode(word);
        let m = d.mnemonic;
        if m.is_store() || m.is_branch() || matches!(m, Mnemonic::J | Mnemonic::Jal | Mnemonic::Jr) {
            prop_assert!(d.dest.is_none());
        }
    }

    #[test]
    fn decode_keeps_raw_word(word in any::<u32>()) {
        prop_assert_eq!(decode(word).raw, word);
    }
}
