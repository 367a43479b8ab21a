//! Runtime values.

use crate::Environment;
use crate::eval::EvalError;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::fmt;
use std::rc::Rc;
use vesper_syntax::Expr;

/// A runtime value.
///
/// Quoted data and evaluated results share this representation: a quoted
/// list is an ordinary `List` value, structurally identical to its source
/// expression.
#[derive(Clone)]
pub enum Value {
    /// Integer, arbitrary precision.
    Int(BigInt),
    /// Float.
    Float(f64),
    /// Symbol (only ever produced by `quote`).
    Symbol(String),
    /// List. `Rc`-shared so identity (`eq?`) is observable.
    List(Rc<Vec<Value>>),
    /// User-defined procedure (closure).
    Procedure(Rc<Procedure>),
    /// Native procedure.
    Builtin(BuiltinFn),
    /// The "no value" result of `define` and `set!`.
    Unit,
}

/// A user-defined procedure: parameter names and body paired with the
/// environment frame that was active at its definition.
pub struct Procedure {
    pub params: Vec<String>,
    pub body: Vec<Expr>,
    pub env: Environment,
}

/// A native procedure. Arity checking is the function's own business;
/// several of the standard builtins are variadic.
#[derive(Clone, Copy)]
pub struct BuiltinFn {
    pub name: &'static str,
    pub func: fn(&[Value]) -> Result<Value, EvalError>,
}

impl Value {
    /// The empty list, the only falsy value.
    pub fn empty_list() -> Value {
        Value::List(Rc::new(Vec::new()))
    }

    /// The conventional truth encoding: `1` for true, `()` for false.
    /// No distinct boolean type exists in this language subset.
    pub fn from_bool(b: bool) -> Value {
        if b {
            Value::Int(BigInt::from(1))
        } else {
            Value::empty_list()
        }
    }

    /// Everything is truthy except the empty list.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::List(items) => !items.is_empty(),
            _ => true,
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Procedure(_) | Value::Builtin(_))
    }

    /// Identity equality (`eq?`): atoms by value, lists and procedures by
    /// the object they point at.
    pub fn identical(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::List(a), Value::List(b)) => Rc::ptr_eq(a, b),
            (Value::Procedure(a), Value::Procedure(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
            _ => self == other,
        }
    }
}

/// Quoting: an expression lifted, unevaluated, into a value.
impl From<&Expr> for Value {
    fn from(expr: &Expr) -> Value {
        match expr {
            Expr::Int(n) => Value::Int(n.clone()),
            Expr::Float(x) => Value::Float(*x),
            Expr::Symbol(name) => Value::Symbol(name.clone()),
            Expr::List(items) => Value::List(Rc::new(items.iter().map(Value::from).collect())),
        }
    }
}

/// Structural equality (`equal?`). Mixed int/float numbers compare
/// numerically; callables are only equal to themselves.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                a.to_f64() == Some(*b)
            }
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Procedure(a), Value::Procedure(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
            (Value::Unit, Value::Unit) => true,
            _ => false,
        }
    }
}

/// Renders a value back to surface syntax (`to_text`).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Symbol(name) => write!(f, "{}", name),
            Value::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
            Value::Procedure(_) => write!(f, "<procedure>"),
            Value::Builtin(b) => write!(f, "<builtin:{}>", b.name),
            Value::Unit => Ok(()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "<unit>"),
            _ => fmt::Display::fmt(self, f),
        }
    }
}
