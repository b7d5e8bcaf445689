//! The binary program format: one 16-character line of '0'/'1' per word.

use crate::word::Word;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProgramError {
    #[error("line {line}: expected 16 characters, found {len}")]
    WrongLength { line: usize, len: usize },
    #[error("line {line}: character {ch:?} is not '0' or '1'")]
    InvalidCharacter { line: usize, ch: char },
}

/// Parses a binary program image: one line per instruction, each exactly 16
/// characters of '0'/'1'. Blank lines (trailing newline at EOF) are ignored;
/// interior blank lines are not allowed.
pub fn parse(source: &str) -> Result<Vec<Word>, ProgramError> {
    let mut words = Vec::new();
    for (i, line) in source.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        if line.chars().count() != 16 {
            return Err(ProgramError::WrongLength {
                line: i + 1,
                len: line.chars().count(),
            });
        }
        let mut bits = [crate::signal::Signal::Inactive; 16];
        for (j, ch) in line.chars().enumerate() {
            bits[j] = match ch {
                '0' => crate::signal::Signal::Inactive,
                '1' => crate::signal::Signal::Active,
                other => return Err(ProgramError::InvalidCharacter { line: i + 1, ch: other }),
            };
        }
        words.push(Word::from_bits(bits));
    }
    Ok(words)
}

/// Renders words back to the same line-per-instruction format `parse`
/// accepts, one trailing newline after the last instruction.
pub fn render(words: &[Word]) -> String {
    let mut out = String::with_capacity(words.len() * 17);
    for word in words {
        out.push_str(&word.to_string());
        out.push('\n');
    }
    out
}
