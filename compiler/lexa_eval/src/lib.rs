#![deny(clippy::arithmetic_side_effects)]
//! Lexa Eval - lexical scope and closure capture evaluator.
//!
//! Runs [`lexa_ir::Program`] trees: block-structured declarations, closures
//! that capture variables by reference, deferred calls, and named result
//! slots.
//!
//! # Architecture
//!
//! - [`Cell`]: one variable's mutable storage; shared, never copied
//! - [`StoreRef`]: name-to-cell map for one scope
//! - [`ScopeChain`]: persistent list of stores, innermost first
//! - [`Closure`]: function literal plus the chain live at its creation
//! - [`IterationController`]: decides whether loop variables get one cell per
//!   loop or one per iteration
//! - [`Evaluator`]: executes statements against an explicit chain
//!
//! Variables are never looked up in a "current environment". Every
//! evaluation step receives the chain it runs under, and a closure holding a
//! chain keeps every cell on it alive.

mod cell;
mod chain;
mod closure;
mod config;
pub mod errors;
mod evaluator;
mod frame;
mod iteration;
mod operators;
mod print_handler;
mod stack;
mod store;
mod value;

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

pub use cell::{Cell, CellId};
pub use chain::ScopeChain;
pub use closure::Closure;
pub use config::{EvalConfig, LoopForm};
pub use errors::{EvalError, EvalResult, ScopeError};
pub use evaluator::{Evaluator, EvaluatorBuilder};
pub use iteration::IterationController;
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintBuffer, PrintHandler, SharedPrintHandler,
};
pub use stack::ensure_sufficient_stack;
pub use store::{BindingStore, StoreRef};
pub use value::Value;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=lexa_eval=debug`, or
/// `trace` to see every loop variable cell as it is created.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
