//! Abstract syntax tree produced by the parser.
//!
//! Nodes form a pure tree: every composite node exclusively owns its
//! children and nothing holds a reference back to its parent. The `Display`
//! implementations render canonical source text, with explicit grouping
//! parentheses around every binary operation so that precedence is visible
//! in the output.

use std::fmt;

use crate::token::Token;

/// A whole program: an ordered sequence of statements.
///
/// This is the sole product of the parser. A `Root` may be partial; callers
/// must consult the accumulated errors to decide whether it is trustworthy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Root {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A `let` binding (e.g. `let x = 5;`).
    Let { ident: String, value: Expr },
    ReturnStmt(Expr),
    ExprStmt(Expr),
    Block(Vec<Stmt>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An identifier (e.g. `foo`).
    Identifier(String),
    IntegerLit(i64),
    BoolLit(bool),
    /// A prefix operator expression (e.g. `!ok`, `-5`). The operator is one
    /// of the fixed operator tokens, never arbitrary text.
    Prefix { op: Token, right: Box<Expr> },
    /// A binary operator expression (e.g. `1 + 1`).
    Infix {
        left: Box<Expr>,
        op: Token,
        right: Box<Expr>,
    },
    /// An `if` expression. `alternative` is present iff the source contained
    /// an `else` clause.
    If {
        condition: Box<Expr>,
        consequence: Vec<Stmt>,
        alternative: Option<Vec<Stmt>>,
    },
    /// A function literal (e.g. `fn(x, y) { x + y; }`). Parameters preserve
    /// declaration order and may be empty.
    Function { params: Vec<String>, body: Vec<Stmt> },
    /// A call expression. Arguments preserve call-site order and may be empty.
    Call { callee: Box<Expr>, args: Vec<Expr> },
}

/// Renders a brace-delimited statement block.
fn fmt_block(f: &mut fmt::Formatter<'_>, statements: &[Stmt]) -> fmt::Result {
    write!(f, "{{")?;
    for stmt in statements {
        write!(f, "{}", stmt)?;
    }
    write!(f, "}}")
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }

        Ok(())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let { ident, value } => write!(f, "let {} = {};", ident, value),
            Stmt::ReturnStmt(value) => write!(f, "return {};", value),
            Stmt::ExprStmt(expr) => write!(f, "{}", expr),
            Stmt::Block(statements) => fmt_block(f, statements),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(name) => write!(f, "{}", name),
            Expr::IntegerLit(value) => write!(f, "{}", value),
            Expr::BoolLit(value) => write!(f, "{}", value),
            Expr::Prefix { op, right } => write!(f, "{}{}", op, right),
            Expr::Infix { left, op, right } => write!(f, "({} {} {})", left, op, right),
            Expr::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if {} ", condition)?;
                fmt_block(f, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, " else ")?;
                    fmt_block(f, alternative)?;
                }

                Ok(())
            }
            Expr::Function { params, body } => {
                write!(f, "fn({}) ", params.join(", "))?;
                fmt_block(f, body)
            }
            Expr::Call { callee, args } => {
                write!(f, "{}(", callee)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
