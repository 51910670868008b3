//! Shorthand for building program trees.
//!
//! Hosts without a front end (and every test in the workspace) construct
//! programs through this builder. Identifiers are passed as text and interned
//! on the way in.
//!
//! ```text
//! let b = ProgramBuilder::new(&interner);
//! let program = b.program(vec![
//!     b.let_("x", b.int(1)),
//!     b.print(vec![b.ident("x")]),
//! ]);
//! ```

use std::sync::Arc;

use crate::{
    BinaryOp, Expr, ForLoop, FuncLit, Kind, Name, NamedResult, Program, RangeLoop, Stmt,
    StringInterner,
};

pub struct ProgramBuilder<'a> {
    interner: &'a StringInterner,
}

impl<'a> ProgramBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        ProgramBuilder { interner }
    }

    pub fn name(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    pub fn program(&self, body: Vec<Stmt>) -> Program {
        Program::new(body)
    }

    // Expressions

    pub fn int(&self, value: i64) -> Expr {
        Expr::Int(value)
    }

    pub fn str(&self, value: &str) -> Expr {
        Expr::Str(value.to_owned())
    }

    pub fn bool(&self, value: bool) -> Expr {
        Expr::Bool(value)
    }

    pub fn ident(&self, name: &str) -> Expr {
        Expr::Ident(self.name(name))
    }

    pub fn binary(&self, op: BinaryOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn add(&self, left: Expr, right: Expr) -> Expr {
        self.binary(BinaryOp::Add, left, right)
    }

    pub fn lt(&self, left: Expr, right: Expr) -> Expr {
        self.binary(BinaryOp::Lt, left, right)
    }

    /// Function literal without a named result.
    pub fn func(&self, params: &[&str], body: Vec<Stmt>) -> Expr {
        Expr::Func(Arc::new(FuncLit {
            params: params.iter().map(|p| self.name(p)).collect(),
            result: None,
            body,
        }))
    }

    /// Function literal with a named result slot of the given kind.
    pub fn func_named(&self, params: &[&str], result: (&str, Kind), body: Vec<Stmt>) -> Expr {
        Expr::Func(Arc::new(FuncLit {
            params: params.iter().map(|p| self.name(p)).collect(),
            result: Some(NamedResult {
                name: self.name(result.0),
                kind: result.1,
            }),
            body,
        }))
    }

    pub fn call(&self, callee: Expr, args: Vec<Expr>) -> Expr {
        Expr::Call {
            callee: Box::new(callee),
            args,
        }
    }

    /// Call of a function bound to `name`.
    pub fn call_named(&self, name: &str, args: Vec<Expr>) -> Expr {
        self.call(self.ident(name), args)
    }

    pub fn list(&self, items: Vec<Expr>) -> Expr {
        Expr::List(items)
    }

    pub fn len(&self, target: Expr) -> Expr {
        Expr::Len(Box::new(target))
    }

    pub fn append(&self, list: Expr, items: Vec<Expr>) -> Expr {
        Expr::Append {
            list: Box::new(list),
            items,
        }
    }

    pub fn index(&self, target: Expr, index: Expr) -> Expr {
        Expr::Index {
            target: Box::new(target),
            index: Box::new(index),
        }
    }

    pub fn addr(&self, name: &str) -> Expr {
        Expr::Addr(self.name(name))
    }

    // Statements

    pub fn let_(&self, name: &str, init: Expr) -> Stmt {
        Stmt::Let {
            name: self.name(name),
            init,
        }
    }

    pub fn var(&self, name: &str, kind: Kind) -> Stmt {
        Stmt::Var {
            name: self.name(name),
            kind,
        }
    }

    pub fn assign(&self, name: &str, value: Expr) -> Stmt {
        Stmt::Assign {
            name: self.name(name),
            value,
        }
    }

    /// `name += by`
    pub fn add_assign(&self, name: &str, by: Expr) -> Stmt {
        self.assign(name, self.add(self.ident(name), by))
    }

    /// `name++`
    pub fn incr(&self, name: &str) -> Stmt {
        self.add_assign(name, self.int(1))
    }

    pub fn expr(&self, expr: Expr) -> Stmt {
        Stmt::Expr(expr)
    }

    pub fn block(&self, body: Vec<Stmt>) -> Stmt {
        Stmt::Block(body)
    }

    pub fn if_(&self, cond: Expr, then_branch: Vec<Stmt>, else_branch: Vec<Stmt>) -> Stmt {
        Stmt::If {
            cond,
            then_branch,
            else_branch,
        }
    }

    /// `for var := start; var < limit; var++ { body }`
    pub fn counted(&self, var: &str, start: Expr, limit: Expr, body: Vec<Stmt>) -> ForLoop {
        ForLoop {
            init: Some((self.name(var), start)),
            cond: Some(self.lt(self.ident(var), limit)),
            post: Some(self.incr(var)),
            body,
            binding: None,
        }
    }

    /// `for key, value := range collection { body }`; pass `None` to omit a variable.
    pub fn range(
        &self,
        key: Option<&str>,
        value: Option<&str>,
        collection: Expr,
        body: Vec<Stmt>,
    ) -> RangeLoop {
        RangeLoop {
            key: key.map(|k| self.name(k)),
            value: value.map(|v| self.name(v)),
            collection,
            body,
            binding: None,
        }
    }

    pub fn defer(&self, callee: Expr, args: Vec<Expr>) -> Stmt {
        Stmt::Defer { callee, args }
    }

    pub fn ret(&self, value: Expr) -> Stmt {
        Stmt::Return(Some(value))
    }

    pub fn ret_bare(&self) -> Stmt {
        Stmt::Return(None)
    }

    pub fn print(&self, values: Vec<Expr>) -> Stmt {
        Stmt::Print(values)
    }
}
