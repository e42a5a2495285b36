//! RAII scope guard for block execution.
//!
//! [`ScopedInterpreter`] pushes a scope on creation and pops it on drop, so
//! a block's scope is discarded whether the block completes, returns a
//! runtime error through `?`, or unwinds.

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// Guard holding the interpreter while a block scope is active.
///
/// Derefs to [`Interpreter`], so the guarded code calls interpreter methods
/// directly.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Push a scope that is popped when the returned guard drops.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_> {
        self.env.push_scope();
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` inside a new scope.
    pub fn with_env_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }
}
