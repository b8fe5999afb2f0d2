//! Recursive descent parser for crawl.
//!
//! One statement per logical line, blocks delimited by the lexer's
//! `BlockStart`/`BlockEnd` tokens. Errors are collected rather than
//! returned early: after a failure the parser skips the rest of the line
//! (and any block the line opened) and keeps going, so one pass reports
//! every independent syntax error, at most one per line.

mod cursor;
mod error;
mod grammar;

use crawl_ir::{Ast, Interner, ParsedProgram, Stmt, StmtId, StmtKind};
use crawl_lexer::lex;

use crate::cursor::Cursor;
pub use crate::error::{ParseError, ParseResult};

/// Parse source lines into a program.
///
/// Fails iff any lexical or syntax error was recorded; the error list is
/// ordered by line.
#[tracing::instrument(level = "debug", skip_all, fields(lines = lines.len()))]
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<ParsedProgram, Vec<ParseError>> {
    let output = lex(lines);
    let lex_errors: Vec<ParseError> = output.errors.into_iter().map(ParseError::from).collect();

    let mut parser = Parser::new(Cursor::new(output.tokens), &lex_errors);
    let body = parser.parse_program();

    let mut errors = lex_errors;
    errors.append(&mut parser.errors);
    if !errors.is_empty() {
        errors.sort_by_key(|e| e.line);
        tracing::debug!(errors = errors.len(), "parse failed");
        return Err(errors);
    }

    let Parser {
        mut ast, names, ..
    } = parser;
    let range = ast.alloc_stmt_list(body);
    let entry = ast.alloc_stmt(Stmt::new(StmtKind::Global(range), 0));
    tracing::debug!(statements = ast.stmt_count(), "parsed program");
    Ok(ParsedProgram { ast, entry, names })
}

/// Parser state.
pub(crate) struct Parser {
    cursor: Cursor,
    ast: Ast,
    names: Interner,
    errors: Vec<ParseError>,
    /// Lines that already carry a lexer error.
    lex_error_lines: Vec<u32>,
    /// Most recent `if`/`elsif` at the current block level, for chaining
    /// `elsif`/`else`.
    last_if: Option<StmtId>,
}

impl Parser {
    fn new(cursor: Cursor, lex_errors: &[ParseError]) -> Self {
        Parser {
            cursor,
            ast: Ast::new(),
            names: Interner::new(),
            errors: Vec::new(),
            lex_error_lines: lex_errors.iter().map(|e| e.line).collect(),
            last_if: None,
        }
    }

    /// Record an error unless its line already has one.
    fn record(&mut self, error: ParseError) {
        let line_taken = self.lex_error_lines.contains(&error.line)
            || self.errors.iter().any(|e| e.line == error.line);
        if !line_taken {
            tracing::trace!(line = error.line, message = %error.message, "parse error");
            self.errors.push(error);
        }
    }

    /// Resynchronize after an error raised with the cursor at `start`.
    fn recover(&mut self, start: usize) {
        if self.cursor.position() == start || !self.cursor.at_line_start() {
            self.cursor.skip_line();
        }
        self.last_if = None;
        if self.cursor.check(&crawl_lexer::TokenKind::BlockStart) {
            self.cursor.skip_block();
        }
    }
}
