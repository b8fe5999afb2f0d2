//! Lexer for crawl using logos.
//!
//! Source arrives as a sequence of already-sanitized lines. Each line is
//! scanned by a logos-generated `RawToken` scanner; the `Lexer` wrapper adds
//! the structure tokens the parser needs:
//!
//! - `Newline` at the end of every logical line
//! - `BlockStart`/`BlockEnd` from 4-space indentation
//! - `End` once all lines are consumed
//!
//! Errors never stop tokenization. They accumulate as `LexError`s and the
//! offending token is replaced by `TokenKind::Error` (or `Int(0)` for an
//! overflowing integer literal).

mod escape;
mod lex_error;
mod lexer;
mod raw_token;
mod token;

pub use lex_error::LexError;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

/// Fully tokenized source.
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

/// Tokenize every line eagerly.
pub fn lex<S: AsRef<str>>(lines: &[S]) -> LexOutput {
    let mut lexer = Lexer::new(lines);
    let tokens = lexer.by_ref().collect();
    LexOutput {
        tokens,
        errors: lexer.into_errors(),
    }
}
