//! Expression tree definitions.

use num_bigint::BigInt;
use std::fmt;

/// A parsed S-expression: an atom or an ordered sequence of expressions.
///
/// The tree is logically immutable after parsing; evaluation never mutates
/// it, only environments.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Integer literal, arbitrary precision.
    Int(BigInt),
    /// Floating-point literal.
    Float(f64),
    /// An identifier.
    Symbol(String),
    /// A parenthesized form.
    List(Vec<Expr>),
}

impl Expr {
    /// Build a symbol atom.
    pub fn symbol(name: impl Into<String>) -> Expr {
        Expr::Symbol(name.into())
    }

    /// Build a small integer atom.
    pub fn int(n: i64) -> Expr {
        Expr::Int(BigInt::from(n))
    }

    /// The symbol's name, if this expression is a symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Expr::Symbol(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Expr::List(_))
    }
}

/// Renders surface syntax: atoms in their natural textual form, lists as
/// space-joined parenthesized elements.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Int(n) => write!(f, "{}", n),
            Expr::Float(x) => write!(f, "{:?}", x),
            Expr::Symbol(name) => write!(f, "{}", name),
            Expr::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}
