//! Tree-walking interpreter for crawl.
//!
//! One `Interpreter` lives for one run of a loaded program. It borrows the
//! parsed program, the run's `Control` and the host sink, and owns every
//! runtime value: globals and call scopes, the function table and the
//! tuple table. Dropping it frees all of them.
//!
//! # Suspension
//!
//! Evaluation reaches `Control::status` before every statement, before
//! every expression other than literals and parentheses, and once per loop
//! iteration. That is the only place the thread blocks on pause and the
//! only place a stop request is observed.

mod builtins;
mod function_call;
mod scope_guard;

pub use scope_guard::ScopedInterpreter;

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crawl_ir::{
    Ast, BinaryOp, ExprId, ExprKind, FlowKind, FuncId, Literal, Name, ParsedProgram, StmtId,
    StmtKind, StmtRange, UnaryOp,
};
use crawl_stack::ensure_sufficient_stack;

use crate::control::{Cancelled, Control};
use crate::errors::{
    for_requires_tuple, misplaced_flow, return_outside_function, undefined_variable, RuntimeError,
};
use crate::host::{EventIds, HostSink};
use crate::{evaluate_binary, evaluate_unary, Environment, RuntimeConfig, TupleTable, Value};

/// How a statement finished.
#[derive(Clone, Debug, PartialEq)]
pub enum Flow {
    Normal,
    Break,
    Continue,
    Return(Value),
}

/// Why evaluation stopped early.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Unwind {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

pub type ExecResult<T> = Result<T, Unwind>;

pub struct Interpreter<'a> {
    program: &'a ParsedProgram,
    control: &'a Control,
    host: &'a dyn HostSink,
    pub(crate) env: Environment,
    functions: FxHashMap<Name, FuncId>,
    tuples: TupleTable,
    events: EventIds,
    rng: Xoshiro256PlusPlus,
    /// Line of the most recent `break`/`continue`/`return`.
    flow_line: u32,
}

impl<'a> Interpreter<'a> {
    pub fn new(
        program: &'a ParsedProgram,
        control: &'a Control,
        host: &'a dyn HostSink,
        config: &RuntimeConfig,
    ) -> Self {
        let seed = config.rand_seed.unwrap_or_else(rand::random::<u64>);
        Interpreter {
            program,
            control,
            host,
            env: Environment::with_limit(config.recursion_limit),
            functions: FxHashMap::default(),
            tuples: TupleTable::new(),
            events: EventIds::default(),
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            flow_line: 0,
        }
    }

    /// Allocate tuples through `tuples`, so its live count can be observed
    /// from outside the run.
    #[must_use]
    pub fn with_tuples(mut self, tuples: TupleTable) -> Self {
        self.tuples = tuples;
        self
    }

    #[must_use]
    pub fn with_event_ids(mut self, events: EventIds) -> Self {
        self.events = events;
        self
    }

    #[inline]
    fn ast(&self) -> &'a Ast {
        &self.program.ast
    }

    #[inline]
    fn name(&self, name: Name) -> &'a str {
        self.program.names.lookup(name)
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn tuples(&self) -> &TupleTable {
        &self.tuples
    }

    #[inline]
    fn status(&self, line: u32) -> ExecResult<()> {
        Ok(self.control.status(line)?)
    }

    /// Execute the program's entry statement once.
    ///
    /// Globals and functions persist, so calling this again continues with
    /// the state the previous pass left behind.
    pub fn run_entry(&mut self) -> ExecResult<()> {
        match self.exec_stmt(self.program.entry)? {
            Flow::Normal => Ok(()),
            Flow::Return(_) => Err(return_outside_function().at(self.flow_line).into()),
            Flow::Break | Flow::Continue => Err(misplaced_flow().at(self.flow_line).into()),
        }
    }

    /// Execute one statement.
    pub fn exec_stmt(&mut self, id: StmtId) -> ExecResult<Flow> {
        ensure_sufficient_stack(|| self.exec_stmt_inner(id))
    }

    fn exec_stmt_inner(&mut self, id: StmtId) -> ExecResult<Flow> {
        let stmt = self.ast().stmt(id);
        let line = stmt.line;
        self.status(line)?;

        match stmt.kind {
            StmtKind::Assign { target, value } => {
                let value = self.eval_expr(value)?;
                self.env.assign(target, value);
                Ok(Flow::Normal)
            }
            StmtKind::Expr(expr) => {
                self.eval_expr(expr)?;
                Ok(Flow::Normal)
            }
            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Value::None,
                };
                self.flow_line = line;
                Ok(Flow::Return(value))
            }
            StmtKind::Flow(kind) => {
                self.flow_line = line;
                Ok(match kind {
                    FlowKind::Break => Flow::Break,
                    FlowKind::Continue => Flow::Continue,
                })
            }
            StmtKind::If { cond, body, next } => {
                let taken = match cond {
                    Some(cond) => self.eval_expr(cond)?.is_truthy(),
                    None => true,
                };
                if taken {
                    self.exec_block(body)
                } else if let Some(next) = next {
                    self.exec_stmt(next)
                } else {
                    Ok(Flow::Normal)
                }
            }
            StmtKind::While { cond, body } => {
                loop {
                    self.status(line)?;
                    if !self.eval_expr(cond)?.is_truthy() {
                        break;
                    }
                    match self.exec_block(body)? {
                        Flow::Break => break,
                        Flow::Normal | Flow::Continue => {}
                        ret @ Flow::Return(_) => return Ok(ret),
                    }
                }
                Ok(Flow::Normal)
            }
            StmtKind::For { var, iter, body } => {
                let Value::Tuple(items) = self.eval_expr(iter)? else {
                    return Err(for_requires_tuple().at(line).into());
                };
                for item in items.items() {
                    self.status(line)?;
                    self.env.assign(var, item.clone());
                    match self.exec_block(body)? {
                        Flow::Break => break,
                        Flow::Normal | Flow::Continue => {}
                        ret @ Flow::Return(_) => return Ok(ret),
                    }
                }
                Ok(Flow::Normal)
            }
            StmtKind::FnDef { name, func } => {
                tracing::trace!(name = self.name(name), "define function");
                self.functions.insert(name, func);
                Ok(Flow::Normal)
            }
            StmtKind::Global(body) => self.exec_block(body),
        }
    }

    /// Execute a statement list, stopping at the first non-normal flow.
    pub fn exec_block(&mut self, body: StmtRange) -> ExecResult<Flow> {
        for &stmt in self.ast().stmt_list(body) {
            match self.exec_stmt(stmt)? {
                Flow::Normal => {}
                flow => return Ok(flow),
            }
        }
        Ok(Flow::Normal)
    }

    /// Evaluate one expression.
    pub fn eval_expr(&mut self, id: ExprId) -> ExecResult<Value> {
        ensure_sufficient_stack(|| self.eval_expr_inner(id))
    }

    fn eval_expr_inner(&mut self, id: ExprId) -> ExecResult<Value> {
        let expr = self.ast().expr(id);
        let line = expr.line;

        match expr.kind {
            ExprKind::Literal(literal) => self.eval_literal(literal),
            ExprKind::Unary {
                op: UnaryOp::Paren,
                operand,
            } => self.eval_expr(operand),
            ExprKind::Unary { op, operand } => {
                self.status(line)?;
                let value = self.eval_expr(operand)?;
                Ok(evaluate_unary(value, op).map_err(|e| e.at(line))?)
            }
            ExprKind::Binary { op, left, right } => {
                self.status(line)?;
                self.eval_binary(op, left, right, line)
            }
            ExprKind::Variable(name) => {
                self.status(line)?;
                match self.env.get(name) {
                    Some(value) => Ok(value.clone()),
                    None => Err(undefined_variable(self.name(name)).at(line).into()),
                }
            }
            ExprKind::Call { func, args } => {
                self.status(line)?;
                self.call_function(func, args, line)
            }
            ExprKind::Builtin { builtin, args } => {
                self.status(line)?;
                self.call_builtin(builtin, args, line)
            }
        }
    }

    fn eval_literal(&mut self, literal: Literal) -> ExecResult<Value> {
        Ok(match literal {
            Literal::None => Value::None,
            Literal::Bool(b) => Value::Bool(b),
            Literal::Int(n) => Value::Int(n),
            Literal::Double(d) => Value::Double(d),
            Literal::Tuple(elements) => {
                let items = self.eval_args(self.ast().expr_list(elements))?;
                self.tuples.alloc(items)
            }
        })
    }

    /// `and`/`or` evaluate the right operand only when the left one does
    /// not decide the result.
    fn eval_binary(
        &mut self,
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
        line: u32,
    ) -> ExecResult<Value> {
        let left = self.eval_expr(left)?;
        match op {
            BinaryOp::And if !left.is_truthy() => Ok(Value::Bool(false)),
            BinaryOp::Or if left.is_truthy() => Ok(Value::Bool(true)),
            BinaryOp::And | BinaryOp::Or => Ok(Value::Bool(self.eval_expr(right)?.is_truthy())),
            _ => {
                let right = self.eval_expr(right)?;
                Ok(evaluate_binary(&left, &right, op, &self.tuples).map_err(|e| e.at(line))?)
            }
        }
    }

    /// Evaluate arguments left to right in the current scope.
    fn eval_args(&mut self, args: &[ExprId]) -> ExecResult<Vec<Value>> {
        let mut values = Vec::with_capacity(args.len());
        for &arg in args {
            values.push(self.eval_expr(arg)?);
        }
        Ok(values)
    }
}
