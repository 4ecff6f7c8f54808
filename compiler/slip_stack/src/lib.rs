//! Stack growth for the recursive passes.
//!
//! Parsing, type checking and evaluation all recurse once per level of list
//! nesting. An expression like `(not (not (not ... true)))` nested a few
//! hundred thousand deep would overflow the default thread stack, so every
//! recursive step goes through [`ensure_sufficient_stack`].
//!
//! On native targets the `stacker` crate allocates a new stack segment when
//! the remaining space drops below [`RED_ZONE`]. On WASM the guard is a plain
//! call.

/// Remaining stack below which a new segment is allocated (128KB).
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
pub const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if less than [`RED_ZONE`] remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
