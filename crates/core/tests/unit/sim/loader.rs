//! # Program Loader Tests

use std::io::Write;

use mipsviz_core::common::InputError;
use mipsviz_core::sim::{load_program, parse_program};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

#[test]
fn parses_one_word_per_line() {
    let program = parse_program("8C220000\n00441820\n").unwrap();
    let words: Vec<u32> = program.iter().map(|r| r.word()).collect();
    assert_eq!(words, vec![0x8C22_0000, 0x0044_1820]);
}

#[test]
fn trims_and_skips_blank_lines() {
    let program = parse_program("\n  8C220000  \r\n\n\t00441820\n   \n").unwrap();
    assert_eq!(program.len(), 2);
    assert_eq!(program[0].as_str(), "8C220000");
}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(parse_program(""), Err(InputError::Empty)));
    assert!(matches!(parse_program(" \n\n \t\n"), Err(InputError::Empty)));
}

#[test]
fn reports_every_malformed_line() {
    let err = parse_program("8C220000\nzz\n\n123\n00441820\n0x441820").unwrap_err();
    match err {
        InputError::InvalidFormat { lines, texts } => {
            assert_eq!(lines, vec![2, 4, 6]);
            assert_eq!(texts, vec!["zz", "123", "0x441820"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn loads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "00221820").unwrap();
    writeln!(file, "00000000").unwrap();

    let program = load_program(file.path()).unwrap();
    assert_eq!(program.len(), 2);
    assert_eq!(program[0].word(), 0x0022_1820);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.hex");

    match load_program(&path) {
        Err(InputError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("unexpected result: {other:?}"),
    }
}
