//! Stack growth for deeply nested Figura programs.
//!
//! Parsing `((((1))))` and evaluating nested blocks or same-name recursion both
//! recurse on the host stack. Every such recursion point goes through
//! [`ensure_sufficient_stack`], which grows the stack on native targets when
//! less than 100 KiB remains.

/// Remaining stack below which a new segment is allocated.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
#[cfg(not(target_arch = "wasm32"))]
const GROWTH: usize = 1024 * 1024;

/// Run `f`, growing the stack first if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// On wasm the runtime owns the stack; run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_depth_survives_growth() {
        fn nest(n: u32) -> u32 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { nest(n - 1) + 1 })
        }

        assert_eq!(nest(200_000), 200_000);
    }

    #[test]
    fn result_is_passed_through() {
        let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("boom"));
        assert_eq!(result, Err("boom"));
    }
}
