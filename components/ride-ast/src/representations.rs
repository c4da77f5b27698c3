use std::collections::BTreeMap;

/// A node in a parsed script's expression tree.
///
/// Every pass over a script dispatches on these tags and must handle the
/// full set exhaustively. `Object` and `Unit` carry only identity: they
/// are produced for values whose structure is opaque to static analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// String literal.
    String(String),
    /// 64-bit signed integer literal.
    Long(i64),
    /// Boolean literal.
    Boolean(bool),
    /// Byte-vector literal.
    Bytes(Vec<u8>),
    /// Ordered sequence of expressions, e.g. a call's argument list.
    Exprs(Vec<Expr>),
    /// `let` declaration whose binding is visible only inside `body`.
    Block {
        let_name: String,
        let_value: Box<Expr>,
        body: Box<Expr>,
    },
    /// Reference to a let-bound or environment identifier.
    Ref(String),
    /// Conditional; both branches are carried unevaluated.
    If {
        cond: Box<Expr>,
        if_true: Box<Expr>,
        if_false: Box<Expr>,
    },
    /// Wrapper the parser places around a callable node.
    FunctionCall(Box<Expr>),
    /// Call of a built-in function addressed by numeric opcode.
    Native { function_id: i16, args: Vec<Expr> },
    /// Call of a built-in or library function addressed by name.
    User { name: String, args: Vec<Expr> },
    /// Field access on an object value.
    Getter { object: Box<Expr>, field: String },
    /// Object instance.
    Object(BTreeMap<String, Expr>),
    /// The unit value.
    Unit,
}

impl Expr {
    pub fn string(value: impl Into<String>) -> Expr {
        Expr::String(value.into())
    }

    pub fn long(value: i64) -> Expr {
        Expr::Long(value)
    }

    pub fn boolean(value: bool) -> Expr {
        Expr::Boolean(value)
    }

    pub fn bytes(value: impl Into<Vec<u8>>) -> Expr {
        Expr::Bytes(value.into())
    }

    pub fn exprs(items: Vec<Expr>) -> Expr {
        Expr::Exprs(items)
    }

    pub fn block(let_name: impl Into<String>, let_value: Expr, body: Expr) -> Expr {
        Expr::Block {
            let_name: let_name.into(),
            let_value: Box::new(let_value),
            body: Box::new(body),
        }
    }

    pub fn reference(name: impl Into<String>) -> Expr {
        Expr::Ref(name.into())
    }

    pub fn if_else(cond: Expr, if_true: Expr, if_false: Expr) -> Expr {
        Expr::If {
            cond: Box::new(cond),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
        }
    }

    pub fn function_call(callable: Expr) -> Expr {
        Expr::FunctionCall(Box::new(callable))
    }

    pub fn native_call(function_id: i16, args: Vec<Expr>) -> Expr {
        Expr::Native { function_id, args }
    }

    pub fn user_call(name: impl Into<String>, args: Vec<Expr>) -> Expr {
        Expr::User {
            name: name.into(),
            args,
        }
    }

    pub fn getter(object: Expr, field: impl Into<String>) -> Expr {
        Expr::Getter {
            object: Box::new(object),
            field: field.into(),
        }
    }

    pub fn empty_object() -> Expr {
        Expr::Object(BTreeMap::new())
    }
}

/// A parsed script container.
///
/// The verifier expression governs transaction acceptance and is the
/// entry point subjected to static analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub verifier: Expr,
}

impl Script {
    pub fn new(verifier: Expr) -> Script {
        Script { verifier }
    }
}
