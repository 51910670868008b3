//! `EvaluatorBuilder` for creating evaluators with various configurations.

use lexa_ir::{LoopBinding, SharedInterner};

use super::Evaluator;
use crate::chain::ScopeChain;
use crate::config::EvalConfig;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::store::StoreRef;

/// Builder for [`Evaluator`].
///
/// Defaults: [`EvalConfig::default`], stdout printing, an empty global scope.
pub struct EvaluatorBuilder {
    interner: SharedInterner,
    config: EvalConfig,
    print_handler: Option<SharedPrintHandler>,
    globals: Option<ScopeChain>,
}

impl EvaluatorBuilder {
    /// `interner` must be the one the programs were built with.
    pub fn new(interner: SharedInterner) -> Self {
        EvaluatorBuilder {
            interner,
            config: EvalConfig::default(),
            print_handler: None,
            globals: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// Default binding for counted loops.
    #[must_use]
    pub fn counted_loop_binding(mut self, binding: LoopBinding) -> Self {
        self.config.counted_loop_binding = binding;
        self
    }

    /// Default binding for collection loops.
    #[must_use]
    pub fn collection_loop_binding(mut self, binding: LoopBinding) -> Self {
        self.config.collection_loop_binding = binding;
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.config.max_call_depth = depth;
        self
    }

    /// Where `print` output goes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Start from an existing global chain, e.g. one the host pre-populated.
    #[must_use]
    pub fn globals(mut self, globals: ScopeChain) -> Self {
        self.globals = Some(globals);
        self
    }

    pub fn build(self) -> Evaluator {
        Evaluator {
            interner: self.interner,
            globals: self
                .globals
                .unwrap_or_else(|| ScopeChain::root(StoreRef::new())),
            config: self.config,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            frames: Vec::new(),
        }
    }
}
