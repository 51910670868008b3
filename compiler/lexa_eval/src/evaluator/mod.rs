//! Tree-walking evaluator.
//!
//! An [`Evaluator`] owns one global scope chain and runs program trees
//! against it. There is no ambient "current environment": every statement
//! and expression is evaluated against an explicit [`ScopeChain`], and
//! entering a scope means pushing a store onto a chain value. Closures keep
//! whatever chain was live when their literal was evaluated.
//!
//! # Modules
//!
//! - `builder`: [`EvaluatorBuilder`] (configuration, print handler, globals)
//! - `call`: closure invocation, deferred actions, named result slots
//! - `stmt`: statement execution
//! - `expr`: expression evaluation
//! - `loops`: counted and collection loops, driven by the iteration controller

mod builder;
mod call;
mod expr;
mod loops;
mod stmt;

pub use builder::EvaluatorBuilder;

use lexa_ir::{Program, SharedInterner};

use crate::chain::ScopeChain;
use crate::config::EvalConfig;
use crate::errors::{EvalError, EvalResult, ScopeError};
use crate::frame::CallFrame;
use crate::print_handler::SharedPrintHandler;
use crate::Value;

/// Outcome of executing a statement.
#[derive(Clone, Debug)]
pub(crate) enum Flow {
    Normal,
    /// `return` ran; carries the returned expression's value.
    Return(Value),
    Break,
    Continue,
}

/// Evaluator for one run of one or more programs sharing a global scope.
///
/// # Memory
///
/// Scopes are reference counted. A closure stored in a variable of the scope
/// it captured keeps that scope alive through a cycle. When a block or call
/// exits, its store is cleared if only such closures still reach it, so
/// helpers and recursive closures local to a function do not accumulate.
/// A scope whose self-referencing closure escaped the scope stays alive for
/// as long as the cycle does, which may outlive the evaluator. Globals are
/// never cleared.
pub struct Evaluator {
    interner: SharedInterner,
    globals: ScopeChain,
    config: EvalConfig,
    print_handler: SharedPrintHandler,
    /// Innermost call last. The top-level program runs in a frame too.
    frames: Vec<CallFrame>,
}

impl Evaluator {
    /// Evaluator with default configuration, printing to stdout.
    pub fn new(interner: SharedInterner) -> Self {
        EvaluatorBuilder::new(interner).build()
    }

    pub fn builder(interner: SharedInterner) -> EvaluatorBuilder {
        EvaluatorBuilder::new(interner)
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// The global scope chain (a single store).
    pub fn globals(&self) -> &ScopeChain {
        &self.globals
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Run a program's top-level statements in the global scope.
    ///
    /// The program body behaves like a function body without a named result:
    /// `defer` registers actions that run when the program finishes, and
    /// `return` ends it early.
    #[tracing::instrument(level = "debug", skip_all, fields(stmts = program.body.len()))]
    pub fn run(&mut self, program: &Program) -> EvalResult<()> {
        let chain = self.globals.clone();
        self.frames.push(CallFrame::default());
        let outcome = self.exec_block(&program.body, &chain);
        self.finish_frame(outcome).map(|_| ())
    }

    /// Current value of a global variable.
    pub fn global(&self, name: &str) -> Option<Value> {
        let name = self.interner.get(name)?;
        self.globals.resolve(name).ok().map(|cell| cell.get())
    }

    /// Call the function stored in global `name`.
    pub fn call_global(&mut self, name: &str, args: Vec<Value>) -> EvalResult {
        let callee = self
            .global(name)
            .ok_or_else(|| EvalError::UnboundName {
                name: name.to_owned(),
            })?;
        self.invoke(&callee, args)
    }

    pub(crate) fn scope_error(&self, err: ScopeError) -> EvalError {
        err.into_eval_error(&self.interner)
    }
}
