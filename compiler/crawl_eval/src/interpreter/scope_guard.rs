//! RAII guard for call scopes.
//!
//! [`ScopedInterpreter`] pops the call scope it opened when dropped, so a
//! function body that returns, fails or is cancelled always leaves the
//! scope stack at the depth it found it.

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::errors::EvalResult;

pub struct ScopedInterpreter<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
    }
}

impl<'interp> Deref for ScopedInterpreter<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Open a call scope that is popped when the guard drops.
    ///
    /// Fails with the recursion limit error, without opening a scope, when
    /// the stack is already at its limit.
    pub fn scoped(&mut self) -> EvalResult<ScopedInterpreter<'_, 'a>> {
        self.env.push_scope()?;
        Ok(ScopedInterpreter { interpreter: self })
    }
}
