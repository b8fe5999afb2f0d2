use thiserror::Error;

/// A tokenization error on one source line.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{message}")]
pub struct LexError {
    pub message: String,
    /// 0-based source line.
    pub line: u32,
}

/// Failure reported from inside a logos callback.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) enum LexErrorKind {
    /// No pattern matched; logos' default error.
    #[default]
    UnexpectedCharacter,
    IntegerOverflow,
    InvalidNumber,
}
