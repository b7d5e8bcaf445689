//! Assembler failure modes. Every variant aborts the whole translation —
//! there are no partial binaries on failure.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssembleError {
    #[error("line {line}: unexpected character {ch:?}")]
    Lexical { line: usize, ch: char },

    #[error("line {line}: {detail}")]
    Syntax { line: usize, detail: String },

    #[error("line {line}: unknown comp {comp:?}")]
    UnknownComp { line: usize, comp: String },

    #[error("line {line}: invalid destination character {ch:?}")]
    InvalidDest { line: usize, ch: char },

    #[error("line {line}: unknown jump mnemonic {jump:?}")]
    UnknownJump { line: usize, jump: String },

    #[error("line {line}: label {name:?} is already defined")]
    DuplicateLabel { line: usize, name: String },
}
