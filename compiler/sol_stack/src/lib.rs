//! Stack growth for deeply nested source.
//!
//! Expressions like `((((((a))))))` or long `a ? b : c ? d : ...` chains
//! recurse once per nesting level in the parser. Wrapping those recursion
//! points in [`ensure_sufficient_stack`] lets adversarial input nest far
//! deeper than the main thread's stack would otherwise allow.
//!
//! On native targets this delegates to `stacker`; on WASM it is a plain call.

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment (2MB).
const NEW_SEGMENT: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, NEW_SEGMENT, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
