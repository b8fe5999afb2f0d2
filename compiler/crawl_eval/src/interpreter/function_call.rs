//! User function calls.

use crawl_ir::{ExprRange, Name};

use super::{ExecResult, Flow, Interpreter};
use crate::errors::{misplaced_flow, undefined_function, wrong_arg_count};
use crate::Value;

impl Interpreter<'_> {
    /// Call a user function defined by an already executed `fn` statement.
    ///
    /// Arguments are evaluated in the caller's scope, then bound to the
    /// parameters in a fresh call scope. Falling off the end returns `None`.
    #[tracing::instrument(level = "debug", skip_all, fields(func = self.name(func), line = line))]
    pub(super) fn call_function(
        &mut self,
        func: Name,
        args: ExprRange,
        line: u32,
    ) -> ExecResult<Value> {
        let Some(&id) = self.functions.get(&func) else {
            return Err(undefined_function(self.name(func)).at(line).into());
        };
        let ast = self.ast();
        let function = ast.function(id);
        let params = ast.params(function.params);
        let args = ast.expr_list(args);
        if params.len() != args.len() {
            return Err(wrong_arg_count().at(line).into());
        }

        let values = self.eval_args(args)?;
        let mut scoped = self.scoped().map_err(|e| e.at(line))?;
        for (&param, value) in params.iter().zip(values) {
            scoped.env.define_param(param, value);
        }

        match scoped.exec_block(function.body)? {
            Flow::Normal => Ok(Value::None),
            Flow::Return(value) => Ok(value),
            Flow::Break | Flow::Continue => Err(misplaced_flow().at(line).into()),
        }
    }
}
