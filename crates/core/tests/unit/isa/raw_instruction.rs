//! # Raw Instruction Tests
//!
//! Validation of eight-digit hexadecimal words.

use mipsviz_core::common::InputError;
use mipsviz_core::isa::RawInstruction;
use rstest::rstest;

#[test]
fn parses_uppercase_and_lowercase() {
    let upper: RawInstruction = "8C220000".parse().unwrap();
    let lower: RawInstruction = "8c220000".parse().unwrap();
    assert_eq!(upper.word(), 0x8C22_0000);
    assert_eq!(lower.word(), 0x8C22_0000);
}

#[test]
fn keeps_original_spelling() {
    let raw: RawInstruction = "8C22abCD".parse().unwrap();
    assert_eq!(raw.as_str(), "8C22abCD");
    assert_eq!(raw.to_string(), "8C22abCD");
}

#[rstest]
#[case::too_short("8C22000")]
#[case::too_long("8C2200000")]
#[case::prefix("0x8C2200")]
#[case::sign("+1234567")]
#[case::non_hex("8C22000G")]
#[case::empty("")]
#[case::inner_space("8C22 000")]
fn rejects_malformed(#[case] text: &str) {
    let err = text.parse::<RawInstruction>().unwrap_err();
    match err {
        InputError::InvalidWord { text: t } => assert_eq!(t, text),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn from_word_renders_lowercase_padded() {
    let raw = RawInstruction::from_word(0xAB);
    assert_eq!(raw.as_str(), "000000ab");
    assert_eq!(RawInstruction::from(0x0022_1820).as_str(), "00221820");
}

#[test]
fn serializes_as_text() {
    let raw: RawInstruction = "8C220000".parse().unwrap();
    assert_eq!(serde_json::to_string(&raw).unwrap(), "\"8C220000\"");
}
