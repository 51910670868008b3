//! Evaluator configuration.

use lexa_ir::LoopBinding;

/// Which loop construct a binding policy applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopForm {
    /// `for init; cond; post`
    Counted,
    /// `for k, v := range collection`
    Collection,
}

/// Policies that change observable evaluation behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Default for counted loops without an explicit binding.
    pub counted_loop_binding: LoopBinding,
    /// Default for collection loops without an explicit binding.
    pub collection_loop_binding: LoopBinding,
    /// Maximum nesting of calls, or `None` to rely on stack growth alone.
    ///
    /// - native: `None` (`stacker` grows the stack)
    /// - WASM: 200
    pub max_call_depth: Option<usize>,
}

impl EvalConfig {
    /// One cell per loop for both loop forms.
    pub fn shared_loops() -> Self {
        EvalConfig {
            counted_loop_binding: LoopBinding::Shared,
            collection_loop_binding: LoopBinding::Shared,
            max_call_depth: default_max_call_depth(),
        }
    }

    /// A new cell per iteration for both loop forms.
    pub fn fresh_loops() -> Self {
        EvalConfig {
            counted_loop_binding: LoopBinding::FreshPerIteration,
            collection_loop_binding: LoopBinding::FreshPerIteration,
            max_call_depth: default_max_call_depth(),
        }
    }

    /// Binding used by a loop of `form`, honoring the node's own override.
    pub fn binding_for(&self, form: LoopForm, explicit: Option<LoopBinding>) -> LoopBinding {
        explicit.unwrap_or(match form {
            LoopForm::Counted => self.counted_loop_binding,
            LoopForm::Collection => self.collection_loop_binding,
        })
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self::shared_loops()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_max_call_depth() -> Option<usize> {
    None
}

#[cfg(target_arch = "wasm32")]
fn default_max_call_depth() -> Option<usize> {
    Some(200)
}
