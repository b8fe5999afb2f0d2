//! Token cursor for navigating the token stream.

use std::mem;

use crawl_lexer::{Token, TokenKind};

use crate::error::{ParseError, ParseResult};

/// Cursor over a token list that always ends with `End`.
pub struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| &t.kind) != Some(&TokenKind::End) {
            let line = tokens.last().map_or(0, |t| t.line);
            tokens.push(Token::new(TokenKind::End, line));
        }
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.current().line
    }

    /// Advance past the current token. Never moves past `End`.
    pub fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Whether the current token has the same variant as `kind`.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        mem::discriminant(self.current_kind()) == mem::discriminant(kind)
    }

    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, kind: &TokenKind, message: &str) -> ParseResult<()> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(ParseError::new(message, self.line()))
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(&TokenKind::End)
    }

    /// Whether the previous token closed a logical line.
    pub fn at_line_start(&self) -> bool {
        self.pos == 0
            || matches!(
                self.tokens[self.pos - 1].kind,
                TokenKind::Newline | TokenKind::BlockStart | TokenKind::BlockEnd
            )
    }

    /// Skip to just past the next `Newline` (or to `End`).
    pub fn skip_line(&mut self) {
        while !self.is_at_end() {
            if let TokenKind::Newline = self.advance().kind {
                return;
            }
        }
    }

    /// Skip a whole indented block, including nested blocks. The cursor
    /// must be on `BlockStart`.
    pub fn skip_block(&mut self) {
        let mut depth = 0usize;
        while !self.is_at_end() {
            match self.advance().kind {
                TokenKind::BlockStart => depth += 1,
                TokenKind::BlockEnd => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests;
