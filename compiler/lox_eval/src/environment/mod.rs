//! Environment for variable scoping in the interpreter.
//!
//! A stack of scopes, global at the bottom. Entering a block pushes a
//! scope and leaving it pops one, so an inner scope never outlives the
//! block that created it. Lookup and assignment walk from the top of the
//! stack down; declaration only touches the top.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::Value;

/// Error returned by [`Environment::assign`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AssignError {
    /// The name is bound in no scope on the stack.
    #[error("variable is not defined")]
    Undefined,
}

type Scope = FxHashMap<String, Value>;

/// Scope stack for variable bindings.
#[derive(Clone, Debug)]
pub struct Environment {
    /// Innermost scope last. Never empty.
    scopes: Vec<Scope>,
}

impl Environment {
    /// Create an environment holding only the global scope.
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::default()],
        }
    }

    /// Number of scopes, including the global one.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    #[inline]
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::default());
    }

    /// Discard the innermost scope. The global scope is never popped.
    #[inline]
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Bind `name` in the innermost scope, replacing any binding it
    /// already has there.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.into(), value);
        }
    }

    /// Look up `name`, innermost scope first.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Overwrite the innermost existing binding of `name`.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), AssignError> {
        let slot = self
            .scopes
            .iter_mut()
            .rev()
            .find_map(|scope| scope.get_mut(name))
            .ok_or(AssignError::Undefined)?;
        *slot = value;
        Ok(())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
