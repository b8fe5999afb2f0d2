//! Crawl IR - shared data structures for the crawl scripting language.
//!
//! This crate contains:
//! - `Name` and the per-parse `Interner` for identifiers
//! - Binary and unary operators
//! - The fixed builtin table
//! - The AST arena (`Ast`) addressed by `ExprId`/`StmtId`/`FuncId`
//! - `ParsedProgram`, the unit handed from the parser to the runtime
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers become dense `Name(u32)` ids once per parse
//! - **Flatten Everything**: no `Box<Expr>`, children are indices into the arena
//! - **Copy Nodes**: every node is `Copy`, so the evaluator reads a node and
//!   releases the arena borrow before recursing

mod arena;
mod ast;
mod builtin;
mod name;
mod operators;

pub use arena::{Ast, ExprId, ExprRange, FuncId, ParamRange, StmtId, StmtRange};
pub use ast::{Expr, ExprKind, FlowKind, Function, Literal, Stmt, StmtKind};
pub use builtin::Builtin;
pub use name::{Interner, Name};
pub use operators::{BinaryOp, UnaryOp};

/// A successfully parsed program: the arena, its entry statement and the
/// identifier table it was built with.
///
/// Ownership of this value moves into the runtime on load; the whole arena
/// is dropped as a unit when the runtime stops or reloads.
#[derive(Clone, Debug)]
pub struct ParsedProgram {
    pub ast: Ast,
    /// The synthetic `Global` statement wrapping all top-level statements.
    pub entry: StmtId,
    pub names: Interner,
}
