//! Stack growth for deep recursion.
//!
//! The parser and the evaluator are plain recursive descent over the
//! syntax tree, so a deeply nested expression or a deeply recursive Monkey
//! function recurses on the host stack. Wrapping the recursive entry points
//! in [`ensure_sufficient_stack`] moves the work onto a freshly allocated
//! segment when the current one runs low. There is no depth limit; a
//! runaway program is bounded only by memory.
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: plain call.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn eval_expression(&mut self, expr: &Expr) -> Flow<Value> {
///     ensure_sufficient_stack(|| self.eval_expression_inner(expr))
/// }
/// ```
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
