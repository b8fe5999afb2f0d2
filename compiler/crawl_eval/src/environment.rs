//! Variable storage for one run: globals plus a stack of call scopes.
//!
//! Lookup checks the innermost call scope, then globals. Scopes between
//! the innermost and globals are never visible: a callee does not see
//! its caller's locals.

use rustc_hash::FxHashMap;

use crawl_ir::Name;

use crate::errors::{recursion_limit_hit, EvalResult};
use crate::Value;

/// Default maximum number of nested call scopes.
pub const DEFAULT_RECURSION_LIMIT: usize = 1024;

type Scope = FxHashMap<Name, Value>;

#[derive(Debug)]
pub struct Environment {
    globals: Scope,
    scopes: Vec<Scope>,
    limit: usize,
}

impl Environment {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_RECURSION_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Environment {
            globals: Scope::default(),
            scopes: Vec::new(),
            limit,
        }
    }

    /// Look a variable up in the innermost call scope, then in globals.
    pub fn get(&self, name: Name) -> Option<&Value> {
        self.scopes
            .last()
            .and_then(|scope| scope.get(&name))
            .or_else(|| self.globals.get(&name))
    }

    /// Bind `name`.
    ///
    /// An existing binding in the innermost scope wins, then an existing
    /// global; otherwise the binding is created in the innermost scope, or
    /// in globals when no call is active.
    pub fn assign(&mut self, name: Name, value: Value) {
        if let Some(scope) = self.scopes.last_mut() {
            if let Some(slot) = scope.get_mut(&name) {
                *slot = value;
                return;
            }
            if let Some(slot) = self.globals.get_mut(&name) {
                *slot = value;
                return;
            }
            scope.insert(name, value);
        } else {
            self.globals.insert(name, value);
        }
    }

    /// Bind a parameter in the innermost scope, shadowing any global.
    pub fn define_param(&mut self, name: Name, value: Value) {
        match self.scopes.last_mut() {
            Some(scope) => {
                scope.insert(name, value);
            }
            None => {
                self.globals.insert(name, value);
            }
        }
    }

    /// Open a call scope. Fails without pushing once the limit is reached.
    pub fn push_scope(&mut self) -> EvalResult<()> {
        if self.scopes.len() >= self.limit {
            return Err(recursion_limit_hit());
        }
        self.scopes.push(Scope::default());
        Ok(())
    }

    /// Close the innermost call scope, dropping its values.
    pub fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    /// Number of active call scopes.
    #[inline]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn global(&self, name: Name) -> Option<&Value> {
        self.globals.get(&name)
    }

    /// Every value currently bound, globals first.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.globals
            .values()
            .chain(self.scopes.iter().flat_map(|scope| scope.values()))
    }

    /// Drop every binding.
    pub fn clear(&mut self) {
        self.scopes.clear();
        self.globals.clear();
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
