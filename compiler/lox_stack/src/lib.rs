//! Stack safety for deep recursion.
//!
//! The parser recurses once per nesting level of the source (parentheses,
//! unary chains, blocks, `if`/`while` bodies) and the interpreter mirrors
//! that recursion when walking the tree. Input such as ten thousand nested
//! parentheses would overflow a default thread stack, so those recursive
//! entry points run under [`ensure_sufficient_stack`].
//!
//! - **Red zone**: 100KB. If less than this remains, the stack is grown.
//! - **Growth size**: 1MB per growth.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// On native targets, uses `stacker::maybe_grow` to allocate a new stack
/// segment when the remaining space is below the red zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
