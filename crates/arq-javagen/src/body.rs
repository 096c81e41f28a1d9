//! Expression and statement nodes for method bodies.
//!
//! Bodies are trees, not strings: the scaffolders compose calls and control
//! flow structurally and the renderer turns the tree into Java text. This
//! keeps synthesized output a pure function of its inputs and avoids quoting
//! mistakes when class or field names flow into generated code.

/// A single link in a fluent call chain: `.name(args)`.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodCall {
    pub name: String,
    pub args: Vec<Expr>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Eq,
    NotEq,
    Plus,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A bare identifier reference.
    Ident(String),
    /// A quoted string literal.
    Str(String),
    Bool(bool),
    Int(i64),
    Null,
    /// A class literal such as `Widget.class`.
    ClassLiteral(String),
    /// An array element access such as `args[0]`.
    Index { target: Box<Expr>, index: usize },
    /// An object allocation: `new File(...)`.
    New { type_name: String, args: Vec<Expr> },
    /// A cast: `(Archive<?>) expr`.
    Cast { type_name: String, expr: Box<Expr> },
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// A single method call, optionally on a receiver.
    Call {
        receiver: Option<Box<Expr>>,
        method: String,
        args: Vec<Expr>,
    },
    /// A fluent chain of calls on a head expression. Chains with more than
    /// one link render one link per continuation line.
    Chain {
        head: Box<Expr>,
        links: Vec<MethodCall>,
    },
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn str_lit(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }

    pub fn class_literal(type_name: impl Into<String>) -> Self {
        Expr::ClassLiteral(type_name.into())
    }

    pub fn index(target: Expr, index: usize) -> Self {
        Expr::Index {
            target: Box::new(target),
            index,
        }
    }

    pub fn new_instance(type_name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::New {
            type_name: type_name.into(),
            args,
        }
    }

    pub fn cast(type_name: impl Into<String>, expr: Expr) -> Self {
        Expr::Cast {
            type_name: type_name.into(),
            expr: Box::new(expr),
        }
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn not_null(expr: Expr) -> Self {
        Expr::binary(BinOp::NotEq, expr, Expr::Null)
    }

    pub fn is_null(expr: Expr) -> Self {
        Expr::binary(BinOp::Eq, expr, Expr::Null)
    }

    /// A static or bare call: `Class.forName(..)` when `receiver` is given.
    pub fn call(receiver: Option<Expr>, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            receiver: receiver.map(Box::new),
            method: method.into(),
            args,
        }
    }

    /// An instance call on a receiver expression.
    pub fn invoke(receiver: Expr, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::call(Some(receiver), method, args)
    }

    /// Starts a fluent chain on this expression.
    pub fn chain(self, method: impl Into<String>, args: Vec<Expr>) -> Self {
        let link = MethodCall {
            name: method.into(),
            args,
        };
        match self {
            Expr::Chain { head, mut links } => {
                links.push(link);
                Expr::Chain { head, links }
            },
            other => Expr::Chain {
                head: Box::new(other),
                links: vec![link],
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// A local declaration, optionally initialized: `Method m = null;`.
    Local {
        type_name: String,
        name: String,
        init: Option<Expr>,
    },
    /// A plain assignment to an already-declared name.
    Assign { target: String, value: Expr },
    /// An expression evaluated for its effect.
    Expr(Expr),
    Return(Expr),
    Throw(Expr),
    Break,
    If { cond: Expr, then: Vec<Stmt> },
    ForEach {
        type_name: String,
        var: String,
        iterable: Expr,
        body: Vec<Stmt>,
    },
    TryCatch {
        body: Vec<Stmt>,
        exception_type: String,
        var: String,
        handler: Vec<Stmt>,
    },
}

impl Stmt {
    pub fn local(type_name: impl Into<String>, name: impl Into<String>, init: Expr) -> Self {
        Stmt::Local {
            type_name: type_name.into(),
            name: name.into(),
            init: Some(init),
        }
    }

    pub fn local_uninit(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Stmt::Local {
            type_name: type_name.into(),
            name: name.into(),
            init: None,
        }
    }

    pub fn assign(target: impl Into<String>, value: Expr) -> Self {
        Stmt::Assign {
            target: target.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_extends_existing_chain_instead_of_nesting() {
        let expr = Expr::ident("a")
            .chain("b", vec![])
            .chain("c", vec![Expr::Null]);

        match expr {
            Expr::Chain { head, links } => {
                assert_eq!(*head, Expr::ident("a"));
                assert_eq!(links.len(), 2);
                assert_eq!(links[0].name, "b");
                assert_eq!(links[1].name, "c");
            },
            other => panic!("expected chain, got {:?}", other),
        }
    }

    #[test]
    fn same_inputs_build_equal_trees() {
        let build = || {
            Expr::invoke(Expr::ident("Assert"), "assertNotNull", vec![Expr::ident("widget")])
        };
        assert_eq!(build(), build());
    }
}
