//! Program Loader.
//!
//! This module turns user-supplied text into validated instruction words. It performs:
//! 1. **Line Handling:** Trims every line and skips blank ones.
//! 2. **Validation:** Requires each remaining line to be exactly eight hex digits, and
//!    reports every malformed line at once rather than stopping at the first.
//! 3. **File Loading:** Reads a program file from disk and validates its contents.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::error::InputError;
use crate::isa::RawInstruction;

/// Parses a program, one instruction word per line.
///
/// # Arguments
///
/// * `text` - Program text. Surrounding whitespace and blank lines are ignored.
///
/// # Returns
///
/// The instructions in program order.
///
/// # Errors
///
/// [`InputError::Empty`] if no instruction lines remain, or [`InputError::InvalidFormat`]
/// listing every malformed line.
///
/// # Examples
///
/// ```
/// use mipsviz_core::sim::parse_program;
///
/// let program = parse_program("8C220000\n\n  00441820  \n")?;
/// assert_eq!(program.len(), 2);
/// assert_eq!(program[1].word(), 0x0044_1820);
/// # Ok::<(), mipsviz_core::common::InputError>(())
/// ```
pub fn parse_program(text: &str) -> Result<Vec<RawInstruction>, InputError> {
    let mut program = Vec::new();
    let mut bad_lines = Vec::new();
    let mut bad_texts = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<RawInstruction>() {
            Ok(inst) => program.push(inst),
            Err(_) => {
                bad_lines.push(line_no + 1);
                bad_texts.push(line.to_owned());
            }
        }
    }

    if !bad_lines.is_empty() {
        return Err(InputError::InvalidFormat {
            lines: bad_lines,
            texts: bad_texts,
        });
    }
    if program.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(program)
}

/// Reads a program file and parses it with [`parse_program`].
///
/// # Errors
///
/// [`InputError::Io`] if the file cannot be read, otherwise as [`parse_program`].
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<RawInstruction>, InputError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let program = parse_program(&text)?;
    debug!(path = %path.display(), instructions = program.len(), "program loaded");
    Ok(program)
}
