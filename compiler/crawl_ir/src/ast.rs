//! AST node kinds.
//!
//! Every node is `Copy`: children are arena ids, never owned boxes.

use crate::{Builtin, BinaryOp, ExprId, ExprRange, FuncId, Name, ParamRange, StmtId, StmtRange, UnaryOp};

/// Literal values written directly in source.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Literal {
    None,
    Bool(bool),
    Int(i64),
    Double(f64),
    /// `()`, `(a,)`, `(a, b)`; elements are evaluated into a fresh tuple.
    Tuple(ExprRange),
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum ExprKind {
    Literal(Literal),
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Variable(Name),
    /// User function call, resolved when evaluated.
    Call {
        func: Name,
        args: ExprRange,
    },
    Builtin {
        builtin: Builtin,
        args: ExprRange,
    },
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    /// 0-based source line.
    pub line: u32,
}

impl Expr {
    pub const fn new(kind: ExprKind, line: u32) -> Self {
        Expr { kind, line }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FlowKind {
    Break,
    Continue,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum StmtKind {
    Assign {
        target: Name,
        value: ExprId,
    },
    Expr(ExprId),
    /// `return` with no value returns `None`.
    Return(Option<ExprId>),
    Flow(FlowKind),
    /// `if`/`elsif` carry a condition, `else` does not.
    If {
        cond: Option<ExprId>,
        body: StmtRange,
        next: Option<StmtId>,
    },
    While {
        cond: ExprId,
        body: StmtRange,
    },
    For {
        var: Name,
        iter: ExprId,
        body: StmtRange,
    },
    FnDef {
        name: Name,
        func: FuncId,
    },
    /// Synthetic program entry wrapping every top-level statement.
    Global(StmtRange),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    /// 0-based source line.
    pub line: u32,
}

impl Stmt {
    pub const fn new(kind: StmtKind, line: u32) -> Self {
        Stmt { kind, line }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Function {
    pub params: ParamRange,
    pub body: StmtRange,
}
