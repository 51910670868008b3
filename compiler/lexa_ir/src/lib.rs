//! Lexa IR - program representation for the lexa evaluator.
//!
//! The evaluator never sees source text. Hosts hand it a [`Program`]: a tree
//! of [`Stmt`] and [`Expr`] nodes whose identifiers are interned [`Name`]s.
//!
//! # Modules
//!
//! - `name` / `interner`: compact identifiers and the table that owns their text
//! - `ast`: statements, expressions, function literals, loop nodes
//! - `builder`: [`ProgramBuilder`], shorthand for constructing trees

mod ast;
mod builder;
mod interner;
mod name;

pub use ast::{
    BinaryOp, Expr, ForLoop, FuncLit, Kind, LoopBinding, NamedResult, Program, RangeLoop, Stmt,
};
pub use builder::ProgramBuilder;
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
