//! Statement and expression tree.
//!
//! Function literals are held behind `Arc` so closure values created from the
//! same literal share one body instead of cloning the subtree.

use std::fmt;
use std::sync::Arc;

use crate::Name;

/// A whole program: top-level statements run in order in the global scope.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn new(body: Vec<Stmt>) -> Self {
        Program { body }
    }
}

/// Declared kind of a zero-initialized binding.
///
/// Only used to pick the zero value for `var` declarations and named results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Int,
    Str,
    Bool,
    /// Function-typed binding; its zero value is the nil function.
    Func,
    List,
}

/// How a loop binds its iteration variables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LoopBinding {
    /// One cell per loop, reassigned every iteration.
    #[default]
    Shared,
    /// A new cell per iteration.
    FreshPerIteration,
}

/// Binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOp {
    /// Get the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Named result binding of a function (`func() (i int)`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NamedResult {
    pub name: Name,
    pub kind: Kind,
}

/// A function literal.
///
/// Parameters, the named result, and top-level declarations of `body` all
/// live in the same per-call scope.
#[derive(Clone, Debug, PartialEq)]
pub struct FuncLit {
    pub params: Vec<Name>,
    pub result: Option<NamedResult>,
    pub body: Vec<Stmt>,
}

/// Counted loop: `for init; cond; post { body }`.
#[derive(Clone, Debug, PartialEq)]
pub struct ForLoop {
    /// Header variable and its initializer, evaluated in the enclosing scope.
    pub init: Option<(Name, Expr)>,
    /// Missing condition loops until `break` or `return`.
    pub cond: Option<Expr>,
    pub post: Option<Stmt>,
    pub body: Vec<Stmt>,
    /// Overrides the evaluator's default for counted loops.
    pub binding: Option<LoopBinding>,
}

impl ForLoop {
    #[must_use]
    pub fn with_binding(mut self, binding: LoopBinding) -> Self {
        self.binding = Some(binding);
        self
    }
}

/// Collection loop: `for key, value := range collection { body }`.
///
/// Over a list the key is the index and the value the element; over an
/// integer `n` both are `0..n`.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeLoop {
    pub key: Option<Name>,
    pub value: Option<Name>,
    pub collection: Expr,
    pub body: Vec<Stmt>,
    /// Overrides the evaluator's default for collection loops.
    pub binding: Option<LoopBinding>,
}

impl RangeLoop {
    #[must_use]
    pub fn with_binding(mut self, binding: LoopBinding) -> Self {
        self.binding = Some(binding);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// `name := init`
    Let { name: Name, init: Expr },
    /// `var name kind`, bound to the kind's zero value.
    Var { name: Name, kind: Kind },
    /// `name = value`, writes through the resolved cell.
    Assign { name: Name, value: Expr },
    Expr(Expr),
    /// Nested block with its own scope.
    Block(Vec<Stmt>),
    If {
        cond: Expr,
        then_branch: Vec<Stmt>,
        else_branch: Vec<Stmt>,
    },
    For(Box<ForLoop>),
    Range(Box<RangeLoop>),
    /// Register `callee(args)` to run when the enclosing function exits.
    /// The callee and arguments are evaluated at registration.
    Defer { callee: Expr, args: Vec<Expr> },
    Return(Option<Expr>),
    Break,
    Continue,
    /// Write the values, space separated, to the print handler.
    Print(Vec<Expr>),
}

impl From<ForLoop> for Stmt {
    fn from(l: ForLoop) -> Self {
        Stmt::For(Box::new(l))
    }
}

impl From<RangeLoop> for Stmt {
    fn from(l: RangeLoop) -> Self {
        Stmt::Range(Box::new(l))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Int(i64),
    Str(String),
    Bool(bool),
    Ident(Name),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Func(Arc<FuncLit>),
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    List(Vec<Expr>),
    Len(Box<Expr>),
    /// A new list with `items` added to the end; the operand is unchanged.
    Append {
        list: Box<Expr>,
        items: Vec<Expr>,
    },
    Index {
        target: Box<Expr>,
        index: Box<Expr>,
    },
    /// Identity of the cell `name` resolves to.
    Addr(Name),
}
