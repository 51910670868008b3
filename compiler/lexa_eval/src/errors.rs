//! Evaluation errors.
//!
//! Every error aborts the current call and propagates to the host. Scope
//! operations report the narrower [`ScopeError`], keyed by [`Name`]; the
//! evaluator resolves the name text when lifting it into [`EvalError`].

use lexa_ir::{BinaryOp, Name, StringInterner};
use thiserror::Error;

use crate::Value;

/// Result of evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A name was declared twice in the same binding store.
    #[error("{name} redeclared in this scope")]
    Redeclaration { name: String },

    /// A name was not found anywhere along the scope chain.
    #[error("undefined: {name}")]
    UnboundName { name: String },

    /// A value of the wrong kind reached an operation.
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },

    #[error("operator `{op}` cannot be applied to {left} and {right}")]
    InvalidOperands {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },

    #[error("expected {expected} arguments, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    #[error("index {index} out of range [0:{len}]")]
    IndexOutOfBounds { index: i64, len: usize },

    #[error("integer division by zero")]
    DivisionByZero,

    #[error("integer overflow in `{op}`")]
    IntegerOverflow { op: BinaryOp },

    #[error("maximum call depth of {depth} exceeded")]
    RecursionLimit { depth: usize },

    /// `break` or `continue` escaped every enclosing loop.
    #[error("{what} is not in a loop")]
    MisplacedControl { what: &'static str },
}

impl EvalError {
    pub(crate) fn type_mismatch(expected: &'static str, got: &Value) -> Self {
        EvalError::TypeMismatch {
            expected,
            got: got.type_name(),
        }
    }
}

/// Failure of a binding store or scope chain operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeError {
    /// Name already declared in the target store.
    Redeclared(Name),
    /// Name absent from every store in the chain.
    Unbound(Name),
}

impl ScopeError {
    /// Convert to an [`EvalError`], resolving the name through `interner`.
    pub fn into_eval_error(self, interner: &StringInterner) -> EvalError {
        match self {
            ScopeError::Redeclared(name) => EvalError::Redeclaration {
                name: interner.lookup(name).to_owned(),
            },
            ScopeError::Unbound(name) => EvalError::UnboundName {
                name: interner.lookup(name).to_owned(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scope_error_resolves_name_text() {
        let interner = StringInterner::new();
        let x = interner.intern("x");
        assert_eq!(
            ScopeError::Redeclared(x).into_eval_error(&interner),
            EvalError::Redeclaration {
                name: "x".to_owned()
            }
        );
        assert_eq!(
            ScopeError::Unbound(x).into_eval_error(&interner),
            EvalError::UnboundName {
                name: "x".to_owned()
            }
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            EvalError::Redeclaration {
                name: "i".to_owned()
            }
            .to_string(),
            "i redeclared in this scope"
        );
        assert_eq!(
            EvalError::InvalidOperands {
                op: BinaryOp::Add,
                left: "int",
                right: "func",
            }
            .to_string(),
            "operator `+` cannot be applied to int and func"
        );
        assert_eq!(
            EvalError::IndexOutOfBounds { index: 3, len: 3 }.to_string(),
            "index 3 out of range [0:3]"
        );
        assert_eq!(
            EvalError::MisplacedControl { what: "break" }.to_string(),
            "break is not in a loop"
        );
    }
}
