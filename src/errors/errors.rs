use std::fmt::Display;

use thiserror::Error as ThisError;

use crate::Position;

/// A syntax error tied to the byte offset it was detected at.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::NoPrefixRule { .. } => "NoPrefixRule",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
        }
    }

    /// The human-readable message, e.g. for batch reporting after a parse.
    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at byte {}",
            self.internal_error, self.position.0
        )
    }
}

impl std::error::Error for Error {}

#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("illegal character {character:?}")]
    IllegalCharacter { character: String },
    #[error("no parse rule for token {token}")]
    NoPrefixRule { token: String },
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken { expected: String, found: String },
    #[error("could not parse {literal:?} as integer")]
    IntegerParseError { literal: String },
}
