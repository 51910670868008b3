//! Runtime values.

use std::fmt;
use std::rc::Rc;

use lexa_ir::Kind;

use crate::Closure;

/// A runtime value.
///
/// Cloning is cheap: strings and lists are reference-counted and immutable,
/// and a function value shares its captured scope chain.
#[derive(Clone, Debug)]
pub enum Value {
    /// No value: result of a function without a result, and the nil function.
    Unit,
    Int(i64),
    Bool(bool),
    Str(Rc<str>),
    Function(Closure),
    List(Rc<[Value]>),
}

impl Value {
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::Str(s.into())
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(items.into())
    }

    /// Integer value of a length or position, saturating at `i64::MAX`.
    pub fn from_len(len: usize) -> Self {
        Value::Int(i64::try_from(len).unwrap_or(i64::MAX))
    }

    /// Zero value for a declared kind.
    pub fn zero(kind: Kind) -> Self {
        match kind {
            Kind::Int => Value::Int(0),
            Kind::Str => Value::string(""),
            Kind::Bool => Value::Bool(false),
            Kind::Func => Value::Unit,
            Kind::List => Value::list(Vec::new()),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Unit => "nil",
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
            Value::Str(_) => "string",
            Value::Function(_) => "func",
            Value::List(_) => "list",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_closure(&self) -> Option<&Closure> {
        match self {
            Value::Function(c) => Some(c),
            _ => None,
        }
    }
}

/// Strings and lists compare by content, functions by identity of both the
/// literal and the captured chain.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Unit, Value::Unit) => true,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::List(a), Value::List(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => f.write_str("nil"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => f.write_str(s),
            Value::Function(c) => write!(f, "func@{:p}", c.func_ptr()),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
mod tests;
