//! Expression parsing.
//!
//! Expressions are a flat, right-recursive chain: an atom optionally
//! followed by a binary operator and another full expression. There is no
//! precedence, so `1 + 2 * 3 - 4` groups as `1 + (2 * (3 - 4))`. Unary
//! `-` and `!` likewise apply to everything that follows them.

use crawl_ir::{BinaryOp, Builtin, Expr, ExprId, ExprKind, ExprRange, Literal, UnaryOp};
use crawl_lexer::TokenKind;
use crawl_stack::ensure_sufficient_stack;

use crate::error::{ParseError, ParseResult};
use crate::Parser;

const MISSING_RPAREN: &str = "Missing closing ')'";

impl Parser {
    /// Every recursive production passes through here, so this is the one
    /// place the native stack is grown.
    pub(crate) fn expression(&mut self) -> ParseResult<ExprId> {
        ensure_sufficient_stack(|| self.expression_inner())
    }

    fn expression_inner(&mut self) -> ParseResult<ExprId> {
        let line = self.cursor.line();
        let left = self.atom()?;

        let Some(op) = binary_op(self.cursor.current_kind()) else {
            return Ok(left);
        };
        self.cursor.advance();
        let right = self.expression()?;
        Ok(self
            .ast
            .alloc_expr(Expr::new(ExprKind::Binary { op, left, right }, line)))
    }

    fn atom(&mut self) -> ParseResult<ExprId> {
        let line = self.cursor.line();
        let token = self.cursor.advance();
        let kind = match token.kind {
            TokenKind::Int(n) => ExprKind::Literal(Literal::Int(n)),
            TokenKind::Double(d) => ExprKind::Literal(Literal::Double(d)),
            TokenKind::True => ExprKind::Literal(Literal::Bool(true)),
            TokenKind::False => ExprKind::Literal(Literal::Bool(false)),
            TokenKind::None => ExprKind::Literal(Literal::None),
            TokenKind::Minus => ExprKind::Unary {
                op: UnaryOp::Neg,
                operand: self.expression()?,
            },
            TokenKind::Bang => ExprKind::Unary {
                op: UnaryOp::Not,
                operand: self.expression()?,
            },
            TokenKind::LParen => return self.parenthesized(line),
            TokenKind::Ident(name) => {
                if self.cursor.check(&TokenKind::LParen) {
                    return self.call(&name, line);
                }
                ExprKind::Variable(self.names.intern(&name))
            }
            TokenKind::Str(_) => {
                return Err(ParseError::new("String literals are not supported", line));
            }
            _ => return Err(ParseError::new("Invalid expression", line)),
        };
        Ok(self.ast.alloc_expr(Expr::new(kind, line)))
    }

    /// After `(`: a grouped expression or a tuple literal.
    fn parenthesized(&mut self, line: u32) -> ParseResult<ExprId> {
        if self.cursor.eat(&TokenKind::RParen) {
            let empty = self.ast.alloc_expr_list([]);
            return Ok(self.tuple_literal(empty, line));
        }

        let first = self.expression()?;
        if self.cursor.eat(&TokenKind::RParen) {
            return Ok(self.ast.alloc_expr(Expr::new(
                ExprKind::Unary {
                    op: UnaryOp::Paren,
                    operand: first,
                },
                line,
            )));
        }

        self.cursor.expect(&TokenKind::Comma, MISSING_RPAREN)?;
        let mut items = vec![first];
        while !self.cursor.eat(&TokenKind::RParen) {
            items.push(self.expression()?);
            if !self.cursor.check(&TokenKind::RParen) {
                self.list_separator()?;
            }
        }
        let items = self.ast.alloc_expr_list(items);
        Ok(self.tuple_literal(items, line))
    }

    fn tuple_literal(&mut self, items: ExprRange, line: u32) -> ExprId {
        self.ast
            .alloc_expr(Expr::new(ExprKind::Literal(Literal::Tuple(items)), line))
    }

    /// A call whose name has been consumed; the cursor is on `(`.
    pub(crate) fn call(&mut self, name: &str, line: u32) -> ParseResult<ExprId> {
        let args = self.arguments()?;
        let kind = match Builtin::from_name(name) {
            Some(builtin) => ExprKind::Builtin { builtin, args },
            None => ExprKind::Call {
                func: self.names.intern(name),
                args,
            },
        };
        Ok(self.ast.alloc_expr(Expr::new(kind, line)))
    }

    /// `( expr, ... )`
    fn arguments(&mut self) -> ParseResult<ExprRange> {
        self.cursor.expect(&TokenKind::LParen, "Expected '('")?;
        let mut args = Vec::new();
        if !self.cursor.eat(&TokenKind::RParen) {
            loop {
                args.push(self.expression()?);
                if self.cursor.eat(&TokenKind::RParen) {
                    break;
                }
                self.list_separator()?;
            }
        }
        Ok(self.ast.alloc_expr_list(args))
    }

    fn list_separator(&mut self) -> ParseResult<()> {
        match self.cursor.current_kind() {
            TokenKind::Comma => {
                self.cursor.advance();
                Ok(())
            }
            TokenKind::Newline | TokenKind::End => {
                Err(ParseError::new(MISSING_RPAREN, self.cursor.line()))
            }
            _ => Err(ParseError::new("Expected ','", self.cursor.line())),
        }
    }
}

fn binary_op(kind: &TokenKind) -> Option<BinaryOp> {
    let op = match kind {
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::SlashSlash => BinaryOp::FloorDiv,
        TokenKind::Percent => BinaryOp::Mod,
        TokenKind::Amp => BinaryOp::BitAnd,
        TokenKind::Pipe => BinaryOp::BitOr,
        TokenKind::Caret => BinaryOp::BitXor,
        TokenKind::And => BinaryOp::And,
        TokenKind::Or => BinaryOp::Or,
        TokenKind::EqEq => BinaryOp::Eq,
        TokenKind::NotEq => BinaryOp::NotEq,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::LtEq => BinaryOp::LtEq,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::GtEq => BinaryOp::GtEq,
        _ => return None,
    };
    Some(op)
}
