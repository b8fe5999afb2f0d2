//! Flat AST storage.
//!
//! Nodes are addressed by `u32` indices and child lists live in flattened
//! side tables referenced by `(start, len)` ranges. The whole arena is owned
//! by one parse and dropped as a unit when the runtime unloads a program.

use std::fmt;

use crate::ast::{Expr, Function, Stmt, StmtKind};
use crate::Name;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

macro_rules! define_range {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                $name { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            #[inline]
            const fn bounds(self) -> std::ops::Range<usize> {
                self.start as usize..(self.start + self.len) as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    concat!(stringify!($name), "({}..{})"),
                    self.start,
                    self.start + self.len
                )
            }
        }
    };
}

define_id!(
    /// Index into the expression table.
    ExprId
);
define_id!(
    /// Index into the statement table.
    StmtId
);
define_id!(
    /// Index into the function table.
    FuncId
);

define_range!(
    /// Argument or tuple element list.
    ExprRange
);
define_range!(
    /// Block body.
    StmtRange
);
define_range!(
    /// Function parameter list.
    ParamRange
);

/// Arena holding every node produced by one parse.
#[derive(Clone, Debug, Default)]
pub struct Ast {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
    functions: Vec<Function>,
    expr_lists: Vec<ExprId>,
    stmt_lists: Vec<StmtId>,
    param_lists: Vec<Name>,
}

fn next_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("AST arena exceeds u32::MAX nodes"))
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(next_index(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(next_index(self.stmts.len()));
        self.stmts.push(stmt);
        id
    }

    pub fn alloc_function(&mut self, function: Function) -> FuncId {
        let id = FuncId::new(next_index(self.functions.len()));
        self.functions.push(function);
        id
    }

    pub fn alloc_expr_list(&mut self, items: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = next_index(self.expr_lists.len());
        self.expr_lists.extend(items);
        ExprRange::new(start, next_index(self.expr_lists.len()) - start)
    }

    pub fn alloc_stmt_list(&mut self, items: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = next_index(self.stmt_lists.len());
        self.stmt_lists.extend(items);
        StmtRange::new(start, next_index(self.stmt_lists.len()) - start)
    }

    pub fn alloc_params(&mut self, params: impl IntoIterator<Item = Name>) -> ParamRange {
        let start = next_index(self.param_lists.len());
        self.param_lists.extend(params);
        ParamRange::new(start, next_index(self.param_lists.len()) - start)
    }

    #[inline]
    pub fn expr(&self, id: ExprId) -> Expr {
        self.exprs[id.index()]
    }

    #[inline]
    pub fn stmt(&self, id: StmtId) -> Stmt {
        self.stmts[id.index()]
    }

    #[inline]
    pub fn function(&self, id: FuncId) -> Function {
        self.functions[id.index()]
    }

    #[inline]
    pub fn expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.bounds()]
    }

    #[inline]
    pub fn stmt_list(&self, range: StmtRange) -> &[StmtId] {
        &self.stmt_lists[range.bounds()]
    }

    #[inline]
    pub fn params(&self, range: ParamRange) -> &[Name] {
        &self.param_lists[range.bounds()]
    }

    /// Attach `next` as the `elsif`/`else` clause following the `if` at `clause`.
    ///
    /// Returns `false` (and changes nothing) if `clause` is not an `if` node.
    pub fn link_else(&mut self, clause: StmtId, next: StmtId) -> bool {
        match &mut self.stmts[clause.index()].kind {
            StmtKind::If { next: slot, .. } => {
                *slot = Some(next);
                true
            }
            _ => false,
        }
    }

    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }
}

#[cfg(test)]
mod tests;
