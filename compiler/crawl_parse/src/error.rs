//! Parse errors.

use crawl_lexer::LexError;
use thiserror::Error;

/// A syntax error on one source line.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    /// 0-based index into the source lines.
    pub line: u32,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line: u32) -> Self {
        ParseError {
            message: message.into(),
            line,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        ParseError {
            message: error.message,
            line: error.line,
        }
    }
}

/// The `(message, line)` pair shown inline by editors.
impl From<ParseError> for (String, i32) {
    fn from(error: ParseError) -> Self {
        (error.message, i32::try_from(error.line).unwrap_or(i32::MAX))
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
