//! Stack safety for nested calls.
//!
//! Every closure call recurses through the evaluator. On native targets the
//! stack is grown on demand with `stacker`; an optional call-depth limit from
//! [`EvalConfig`](crate::EvalConfig) bounds runaway recursion independently of
//! stack size.

use crate::errors::{EvalError, EvalResult};

/// Minimum stack space to keep available (100KB red zone).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
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

/// Fail when entering another call would exceed `limit`.
pub(crate) fn check_call_depth(depth: usize, limit: Option<usize>) -> EvalResult<()> {
    match limit {
        Some(max) if depth >= max => Err(EvalError::RecursionLimit { depth: max }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_recursion_survives() {
        fn depth(n: u64) -> u64 {
            ensure_sufficient_stack(|| {
                if n == 0 {
                    0
                } else {
                    depth(n.saturating_sub(1)).saturating_add(1)
                }
            })
        }
        assert_eq!(depth(100_000), 100_000);
    }

    #[test]
    fn call_depth_limit() {
        assert_eq!(check_call_depth(10, None), Ok(()));
        assert_eq!(check_call_depth(3, Some(4)), Ok(()));
        assert_eq!(
            check_call_depth(4, Some(4)),
            Err(EvalError::RecursionLimit { depth: 4 })
        );
    }
}
