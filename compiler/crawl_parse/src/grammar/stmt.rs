//! Statement and block parsing.

use crawl_ir::{FlowKind, Function, Stmt, StmtId, StmtKind, StmtRange};
use crawl_lexer::TokenKind;
use crawl_stack::ensure_sufficient_stack;

use crate::error::{ParseError, ParseResult};
use crate::Parser;

impl Parser {
    /// Parse top-level statements until `End`.
    pub(crate) fn parse_program(&mut self) -> Vec<StmtId> {
        let mut body = Vec::new();
        while !self.cursor.is_at_end() {
            // Stray block markers can only follow a line that already failed.
            match self.cursor.current_kind() {
                TokenKind::BlockStart => {
                    self.cursor.skip_block();
                    continue;
                }
                TokenKind::BlockEnd => {
                    self.cursor.advance();
                    continue;
                }
                _ => {}
            }
            self.statement_into(true, &mut body);
        }
        body
    }

    /// Parse one statement, recording and recovering from any error.
    fn statement_into(&mut self, top_level: bool, body: &mut Vec<StmtId>) {
        let start = self.cursor.position();
        match self.statement(top_level) {
            Ok(Some(stmt)) => body.push(stmt),
            Ok(None) => {}
            Err(error) => {
                self.record(error);
                self.recover(start);
            }
        }
    }

    /// `NEWLINE BLOCK-START stmt* BLOCK-END`, after a header's `:`.
    fn block(&mut self, header_line: u32) -> ParseResult<StmtRange> {
        ensure_sufficient_stack(|| self.block_inner(header_line))
    }

    fn block_inner(&mut self, header_line: u32) -> ParseResult<StmtRange> {
        self.cursor.expect(&TokenKind::Newline, "Expected eol")?;
        if !self.cursor.eat(&TokenKind::BlockStart) {
            return Err(ParseError::new("Expected indented block", header_line));
        }

        let outer_if = self.last_if.take();
        let mut body = Vec::new();
        while !self.cursor.eat(&TokenKind::BlockEnd) && !self.cursor.is_at_end() {
            if self.cursor.check(&TokenKind::BlockStart) {
                self.cursor.skip_block();
                continue;
            }
            self.statement_into(false, &mut body);
        }
        self.last_if = outer_if;

        Ok(self.ast.alloc_stmt_list(body))
    }

    /// Returns `None` for `elsif`/`else` clauses, which are linked into
    /// their `if` chain rather than appended to the block.
    fn statement(&mut self, top_level: bool) -> ParseResult<Option<StmtId>> {
        let line = self.cursor.line();

        match self.cursor.current_kind() {
            TokenKind::Elsif => return self.elsif_clause(line).map(|()| None),
            TokenKind::Else => return self.else_clause(line).map(|()| None),
            _ => self.last_if = None,
        }

        let kind = match self.cursor.advance().kind {
            TokenKind::If => {
                let cond = self.expression()?;
                self.cursor.expect(&TokenKind::Colon, "Expected ':'")?;
                let body = self.block(line)?;
                let stmt = self.alloc(
                    StmtKind::If {
                        cond: Some(cond),
                        body,
                        next: None,
                    },
                    line,
                );
                self.last_if = Some(stmt);
                return Ok(Some(stmt));
            }
            TokenKind::While => {
                let cond = self.expression()?;
                self.cursor.expect(&TokenKind::Colon, "Expected ':'")?;
                let body = self.block(line)?;
                StmtKind::While { cond, body }
            }
            TokenKind::For => {
                let var = self.identifier()?;
                self.cursor.expect(&TokenKind::In, "Expected 'in'")?;
                let iter = self.expression()?;
                self.cursor.expect(&TokenKind::Colon, "Expected ':'")?;
                let body = self.block(line)?;
                StmtKind::For { var, iter, body }
            }
            TokenKind::Fn => {
                if !top_level {
                    return Err(ParseError::new(
                        "Functions can only be defined at top level",
                        line,
                    ));
                }
                self.function_definition(line)?
            }
            TokenKind::Return => {
                let value = if self.cursor.check(&TokenKind::Newline) {
                    None
                } else {
                    Some(self.expression()?)
                };
                StmtKind::Return(value)
            }
            TokenKind::Break => StmtKind::Flow(FlowKind::Break),
            TokenKind::Continue => StmtKind::Flow(FlowKind::Continue),
            TokenKind::Ident(name) => match self.cursor.current_kind() {
                TokenKind::LParen => StmtKind::Expr(self.call(&name, line)?),
                TokenKind::Assign => {
                    self.cursor.advance();
                    let target = self.names.intern(&name);
                    let value = self.expression()?;
                    StmtKind::Assign { target, value }
                }
                _ => return Err(ParseError::new("Not a statement", line)),
            },
            _ => return Err(ParseError::new("Not a statement", line)),
        };

        let header = matches!(
            kind,
            StmtKind::While { .. } | StmtKind::For { .. } | StmtKind::FnDef { .. }
        );
        if !header {
            self.cursor.expect(&TokenKind::Newline, "Expected eol")?;
        }
        Ok(Some(self.alloc(kind, line)))
    }

    fn elsif_clause(&mut self, line: u32) -> ParseResult<()> {
        let Some(target) = self.last_if else {
            return Err(ParseError::new("elsif without if", line));
        };
        self.cursor.advance();
        let cond = self.expression()?;
        self.cursor.expect(&TokenKind::Colon, "Expected ':'")?;
        let body = self.block(line)?;
        let clause = self.alloc(
            StmtKind::If {
                cond: Some(cond),
                body,
                next: None,
            },
            line,
        );
        self.ast.link_else(target, clause);
        self.last_if = Some(clause);
        Ok(())
    }

    fn else_clause(&mut self, line: u32) -> ParseResult<()> {
        let Some(target) = self.last_if else {
            return Err(ParseError::new("else without if", line));
        };
        self.cursor.advance();
        self.cursor.expect(&TokenKind::Colon, "Expected ':'")?;
        let body = self.block(line)?;
        let clause = self.alloc(
            StmtKind::If {
                cond: None,
                body,
                next: None,
            },
            line,
        );
        self.ast.link_else(target, clause);
        self.last_if = None;
        Ok(())
    }

    /// `fn name(a, b):` followed by its block; `fn` already consumed.
    fn function_definition(&mut self, line: u32) -> ParseResult<StmtKind> {
        let name = self.identifier()?;
        self.cursor.expect(&TokenKind::LParen, "Expected '('")?;
        let mut params = Vec::new();
        if !self.cursor.eat(&TokenKind::RParen) {
            loop {
                params.push(self.identifier()?);
                if self.cursor.eat(&TokenKind::RParen) {
                    break;
                }
                if !self.cursor.eat(&TokenKind::Comma) {
                    let message = match self.cursor.current_kind() {
                        TokenKind::Newline | TokenKind::End => "Missing closing ')'",
                        _ => "Expected ','",
                    };
                    return Err(ParseError::new(message, self.cursor.line()));
                }
            }
        }
        self.cursor.expect(&TokenKind::Colon, "Expected ':'")?;
        let body = self.block(line)?;

        let params = self.ast.alloc_params(params);
        let func = self.ast.alloc_function(Function { params, body });
        Ok(StmtKind::FnDef { name, func })
    }

    fn identifier(&mut self) -> ParseResult<crawl_ir::Name> {
        if let TokenKind::Ident(name) = self.cursor.current_kind() {
            let name = self.names.intern(name);
            self.cursor.advance();
            Ok(name)
        } else {
            Err(ParseError::new("Expected identifier", self.cursor.line()))
        }
    }

    fn alloc(&mut self, kind: StmtKind, line: u32) -> StmtId {
        self.ast.alloc_stmt(Stmt::new(kind, line))
    }
}
