//! Line commands understood by the CLI.

use checkers_core::{Cell, CellParseError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("a move needs a source and a destination cell")]
    MissingCell,
    #[error(transparent)]
    Cell(#[from] CellParseError),
}

/// One line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `[move] x,y x,y`
    Move { from: Cell, to: Cell },
    /// `board`
    Board,
    /// `forced`
    Forced,
    /// `quit`
    Quit,
    /// Blank line or `#` comment.
    Empty,
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.split('#').next().unwrap_or_default().trim();
        let mut parts = input.split_whitespace().peekable();

        match parts.peek().copied() {
            None => Ok(Command::Empty),
            Some("board") => Ok(Command::Board),
            Some("forced") => Ok(Command::Forced),
            Some("quit") => Ok(Command::Quit),
            Some("move") => {
                parts.next();
                Self::parse_move(parts)
            }
            Some(word) if word.starts_with(|c: char| c.is_ascii_digit() || c == '(' || c == '-') => {
                Self::parse_move(parts)
            }
            Some(_) => Err(CommandError::Unknown(input.to_string())),
        }
    }

    fn parse_move<'a>(mut parts: impl Iterator<Item = &'a str>) -> Result<Self, CommandError> {
        let from = parts.next().ok_or(CommandError::MissingCell)?.parse()?;
        let to = parts.next().ok_or(CommandError::MissingCell)?.parse()?;
        Ok(Command::Move { from, to })
    }
}
