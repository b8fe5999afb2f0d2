//! Indentation layer over the raw scanner.

use std::collections::VecDeque;

use logos::Logos;

use crate::escape::unescape;
use crate::lex_error::{LexError, LexErrorKind};
use crate::raw_token::RawToken;
use crate::token::{Token, TokenKind};

/// Spaces per indentation level.
const INDENT_WIDTH: usize = 4;

/// Lazy tokenizer over a line buffer.
///
/// Lines are scanned one at a time as tokens are pulled. A fresh lexer can be
/// started at any line with `starting_at`; indentation is then measured
/// relative to that line's enclosing level 0.
pub struct Lexer<'a, S> {
    lines: &'a [S],
    next_line: usize,
    depth: usize,
    paren_depth: u32,
    /// The last logical line ended with `:`.
    opens_block: bool,
    pending: VecDeque<Token>,
    errors: Vec<LexError>,
    finished: bool,
}

impl<'a, S: AsRef<str>> Lexer<'a, S> {
    pub fn new(lines: &'a [S]) -> Self {
        Self::starting_at(lines, 0)
    }

    pub fn starting_at(lines: &'a [S], line: usize) -> Self {
        Lexer {
            lines,
            next_line: line,
            depth: 0,
            paren_depth: 0,
            opens_block: false,
            pending: VecDeque::new(),
            errors: Vec::new(),
            finished: false,
        }
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    fn lex_line(&mut self) {
        let index = self.next_line;
        self.next_line += 1;
        let line = line_number(index);
        let lines = self.lines;
        let text = lines[index].as_ref();

        let body = if self.paren_depth > 0 {
            text
        } else {
            let trimmed = text.trim_start_matches(' ');
            if trimmed.trim().is_empty() || trimmed.starts_with('#') {
                return;
            }
            self.indent(text.len() - trimmed.len(), line);
            trimmed
        };

        let mut ends_with_colon = false;
        let mut raw = RawToken::lexer(body);
        while let Some(result) = raw.next() {
            let kind = match result {
                Ok(token) => self.convert(token, raw.slice(), line),
                Err(LexErrorKind::IntegerOverflow) => {
                    self.error("Integer literal overflows", line);
                    TokenKind::Int(0)
                }
                Err(LexErrorKind::InvalidNumber) => {
                    self.error(format!("Invalid number literal '{}'", raw.slice()), line);
                    TokenKind::Error
                }
                Err(LexErrorKind::UnexpectedCharacter) => {
                    self.error(format!("Unexpected character '{}'", raw.slice()), line);
                    TokenKind::Error
                }
            };
            ends_with_colon = kind == TokenKind::Colon;
            self.push(kind, line);
        }

        if self.paren_depth == 0 {
            self.push(TokenKind::Newline, line);
            self.opens_block = ends_with_colon;
        }
    }

    /// Emit block tokens for a line indented by `spaces`.
    fn indent(&mut self, spaces: usize, line: u32) {
        if spaces % INDENT_WIDTH != 0 {
            self.error("Bad indent", line);
        }
        let mut level = spaces / INDENT_WIDTH;
        let allowed = if self.opens_block {
            self.depth + 1
        } else {
            self.depth
        };
        if level > allowed {
            self.error("Unexpected indentation", line);
            level = allowed;
        }
        self.opens_block = false;

        if level > self.depth {
            self.depth = level;
            self.push(TokenKind::BlockStart, line);
        }
        while self.depth > level {
            self.depth -= 1;
            self.push(TokenKind::BlockEnd, line);
        }
    }

    fn convert(&mut self, token: RawToken, slice: &str, line: u32) -> TokenKind {
        match token {
            RawToken::Int(n) => TokenKind::Int(n),
            RawToken::Double(d) => TokenKind::Double(d),
            RawToken::Ident => TokenKind::Ident(slice.to_string()),
            RawToken::Str => match unescape(&slice[1..slice.len() - 1]) {
                Ok(text) => TokenKind::Str(text),
                Err(message) => {
                    self.error(message, line);
                    TokenKind::Error
                }
            },
            RawToken::UnterminatedStr => {
                self.error("Unterminated string literal", line);
                TokenKind::Error
            }

            RawToken::If => TokenKind::If,
            RawToken::Elsif => TokenKind::Elsif,
            RawToken::Else => TokenKind::Else,
            RawToken::While => TokenKind::While,
            RawToken::For => TokenKind::For,
            RawToken::In => TokenKind::In,
            RawToken::Fn => TokenKind::Fn,
            RawToken::Return => TokenKind::Return,
            RawToken::Break => TokenKind::Break,
            RawToken::Continue => TokenKind::Continue,
            RawToken::And => TokenKind::And,
            RawToken::Or => TokenKind::Or,
            RawToken::True => TokenKind::True,
            RawToken::False => TokenKind::False,
            RawToken::None => TokenKind::None,

            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::SlashSlash => TokenKind::SlashSlash,
            RawToken::Percent => TokenKind::Percent,
            RawToken::Amp => TokenKind::Amp,
            RawToken::Pipe => TokenKind::Pipe,
            RawToken::Caret => TokenKind::Caret,
            RawToken::Bang => TokenKind::Bang,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::Lt => TokenKind::Lt,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::Gt => TokenKind::Gt,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::Assign => TokenKind::Assign,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Colon => TokenKind::Colon,

            // Skipped by the scanner.
            RawToken::Comment => TokenKind::Error,
        }
    }

    fn push(&mut self, kind: TokenKind, line: u32) {
        match kind {
            TokenKind::LParen => self.paren_depth += 1,
            TokenKind::RParen => self.paren_depth = self.paren_depth.saturating_sub(1),
            _ => {}
        }
        self.pending.push_back(Token::new(kind, line));
    }

    /// Record an error. Only the first error on a line is kept.
    fn error(&mut self, message: impl Into<String>, line: u32) {
        if self.errors.last().is_some_and(|e| e.line == line) {
            return;
        }
        let message = message.into();
        tracing::trace!(line, %message, "lex error");
        self.errors.push(LexError { message, line });
    }

    fn finish(&mut self) {
        let line = line_number(self.lines.len().saturating_sub(1));
        if self.paren_depth > 0 {
            self.paren_depth = 0;
            self.push(TokenKind::Newline, line);
        }
        while self.depth > 0 {
            self.depth -= 1;
            self.push(TokenKind::BlockEnd, line);
        }
        self.push(TokenKind::End, line);
        self.finished = true;
    }
}

impl<S: AsRef<str>> Iterator for Lexer<'_, S> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.finished {
                return None;
            }
            if self.next_line < self.lines.len() {
                self.lex_line();
            } else {
                self.finish();
            }
        }
    }
}

fn line_number(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}
