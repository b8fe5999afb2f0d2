//! Stack growth for deep recursion.
//!
//! The parser recurses once per operator and parenthesis, and the
//! evaluator once per nested call, expression and tuple level. A
//! recursion-limited script may still nest 1024 calls, each several
//! native frames deep. `stacker` grows the stack on demand so valid
//! input never overflows the native stack.
//!
//! On wasm32 the closure is called directly.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the native stack first if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
