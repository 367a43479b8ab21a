//! Arithmetic and comparison builtins.

use num_bigint::BigInt;
use num_traits::{FromPrimitive, One, Pow, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use vesper_eval::value::{BuiltinFn, Value};
use vesper_eval::EvalError;

pub fn builtins() -> Vec<(&'static str, Value)> {
    vec![
        (
            "+",
            Value::Builtin(BuiltinFn {
                name: "+",
                func: |args| {
                    let mut acc = Value::Int(BigInt::zero());
                    for arg in args {
                        acc = binary_numeric("+", &acc, arg, |x, y| x + y, |x, y| x + y)?;
                    }
                    Ok(acc)
                },
            }),
        ),
        (
            "-",
            Value::Builtin(BuiltinFn {
                name: "-",
                func: |args| match args {
                    [] => Err(arity("-", "at least 1 argument", 0)),
                    [only] => {
                        binary_numeric("-", &Value::Int(BigInt::zero()), only, |x, y| x - y, |x, y| {
                            x - y
                        })
                    }
                    [first, rest @ ..] => {
                        let mut acc = first.clone();
                        for arg in rest {
                            acc = binary_numeric("-", &acc, arg, |x, y| x - y, |x, y| x - y)?;
                        }
                        Ok(acc)
                    }
                },
            }),
        ),
        (
            "*",
            Value::Builtin(BuiltinFn {
                name: "*",
                func: |args| {
                    let mut acc = Value::Int(BigInt::one());
                    for arg in args {
                        acc = binary_numeric("*", &acc, arg, |x, y| x * y, |x, y| x * y)?;
                    }
                    Ok(acc)
                },
            }),
        ),
        (
            "/",
            Value::Builtin(BuiltinFn {
                name: "/",
                func: |args| match args {
                    [a, b] => divide(a, b),
                    _ => Err(arity("/", "2 arguments", args.len())),
                },
            }),
        ),
        (
            "quotient",
            Value::Builtin(BuiltinFn {
                name: "quotient",
                func: |args| match args {
                    [Value::Int(x), Value::Int(y)] => {
                        if y.is_zero() {
                            Err(EvalError::TypeError("quotient: division by zero".into()))
                        } else {
                            Ok(Value::Int(floor_div(x, y)))
                        }
                    }
                    [_, _] => Err(EvalError::TypeError("quotient expects two integers".into())),
                    _ => Err(arity("quotient", "2 arguments", args.len())),
                },
            }),
        ),
        (
            "<",
            Value::Builtin(BuiltinFn {
                name: "<",
                func: |args| match args {
                    [a, b] => Ok(Value::from_bool(compare("<", a, b)?.is_lt())),
                    _ => Err(arity("<", "2 arguments", args.len())),
                },
            }),
        ),
        (
            ">",
            Value::Builtin(BuiltinFn {
                name: ">",
                func: |args| match args {
                    [a, b] => Ok(Value::from_bool(compare(">", a, b)?.is_gt())),
                    _ => Err(arity(">", "2 arguments", args.len())),
                },
            }),
        ),
        (
            "<=",
            Value::Builtin(BuiltinFn {
                name: "<=",
                func: |args| match args {
                    [a, b] => Ok(Value::from_bool(compare("<=", a, b)?.is_le())),
                    _ => Err(arity("<=", "2 arguments", args.len())),
                },
            }),
        ),
        (
            ">=",
            Value::Builtin(BuiltinFn {
                name: ">=",
                func: |args| match args {
                    [a, b] => Ok(Value::from_bool(compare(">=", a, b)?.is_ge())),
                    _ => Err(arity(">=", "2 arguments", args.len())),
                },
            }),
        ),
        (
            "=",
            Value::Builtin(BuiltinFn {
                name: "=",
                func: |args| match args {
                    [a, b] => Ok(Value::from_bool(a == b)),
                    _ => Err(arity("=", "2 arguments", args.len())),
                },
            }),
        ),
        (
            "abs",
            Value::Builtin(BuiltinFn {
                name: "abs",
                func: |args| match args {
                    [Value::Int(n)] => Ok(Value::Int(n.abs())),
                    [Value::Float(x)] => Ok(Value::Float(x.abs())),
                    [other] => Err(EvalError::TypeError(format!("abs expects a number, got {other}"))),
                    _ => Err(arity("abs", "1 argument", args.len())),
                },
            }),
        ),
        (
            "max",
            Value::Builtin(BuiltinFn {
                name: "max",
                func: |args| extremum("max", args, Ordering::Greater),
            }),
        ),
        (
            "min",
            Value::Builtin(BuiltinFn {
                name: "min",
                func: |args| extremum("min", args, Ordering::Less),
            }),
        ),
        (
            "round",
            Value::Builtin(BuiltinFn {
                name: "round",
                func: |args| match args {
                    [Value::Int(n)] => Ok(Value::Int(n.clone())),
                    [Value::Float(x)] => BigInt::from_f64(x.round())
                        .map(Value::Int)
                        .ok_or_else(|| EvalError::TypeError(format!("round: cannot round {x:?}"))),
                    [other] => {
                        Err(EvalError::TypeError(format!("round expects a number, got {other}")))
                    }
                    _ => Err(arity("round", "1 argument", args.len())),
                },
            }),
        ),
        (
            "sqrt",
            Value::Builtin(BuiltinFn {
                name: "sqrt",
                func: |args| match args {
                    [v] => Ok(Value::Float(as_f64("sqrt", v)?.sqrt())),
                    _ => Err(arity("sqrt", "1 argument", args.len())),
                },
            }),
        ),
        (
            "expt",
            Value::Builtin(BuiltinFn {
                name: "expt",
                func: |args| match args {
                    [Value::Int(base), Value::Int(exp)] if !exp.is_negative() => {
                        let exp = exp
                            .to_u32()
                            .ok_or_else(|| EvalError::TypeError("expt: exponent too large".into()))?;
                        Ok(Value::Int(Pow::pow(base, exp)))
                    }
                    [a, b] => Ok(Value::Float(as_f64("expt", a)?.powf(as_f64("expt", b)?))),
                    _ => Err(arity("expt", "2 arguments", args.len())),
                },
            }),
        ),
        ("pi", Value::Float(std::f64::consts::PI)),
    ]
}

fn arity(name: &str, wanted: &str, got: usize) -> EvalError {
    EvalError::TypeError(format!("{name} expects {wanted}, got {got}"))
}

fn as_f64(name: &str, value: &Value) -> Result<f64, EvalError> {
    match value {
        Value::Int(n) => Ok(big_to_f64(n)),
        Value::Float(x) => Ok(*x),
        other => Err(EvalError::TypeError(format!("{name} expects a number, got {other}"))),
    }
}

fn big_to_f64(n: &BigInt) -> f64 {
    // Magnitudes beyond the float range come back as infinity.
    n.to_f64().unwrap_or(f64::INFINITY)
}

/// Apply a binary operation, staying exact when both operands are
/// integers and promoting to float otherwise.
fn binary_numeric(
    name: &str,
    a: &Value,
    b: &Value,
    int_op: fn(&BigInt, &BigInt) -> BigInt,
    float_op: fn(f64, f64) -> f64,
) -> Result<Value, EvalError> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Ok(Value::Int(int_op(x, y))),
        (Value::Float(x), Value::Float(y)) => Ok(Value::Float(float_op(*x, *y))),
        (Value::Int(x), Value::Float(y)) => Ok(Value::Float(float_op(big_to_f64(x), *y))),
        (Value::Float(x), Value::Int(y)) => Ok(Value::Float(float_op(*x, big_to_f64(y)))),
        _ => Err(EvalError::TypeError(format!("{name} expects numbers"))),
    }
}

/// `/` stays exact when an integer division is exact, and falls back to
/// float division otherwise, so unbounded-precision results survive.
fn divide(a: &Value, b: &Value) -> Result<Value, EvalError> {
    if let (Value::Int(x), Value::Int(y)) = (a, b) {
        if y.is_zero() {
            return Err(EvalError::TypeError("/: division by zero".into()));
        }
        if (x % y).is_zero() {
            return Ok(Value::Int(x / y));
        }
        return Ok(Value::Float(big_to_f64(x) / big_to_f64(y)));
    }
    let (x, y) = (as_f64("/", a)?, as_f64("/", b)?);
    if y == 0.0 {
        return Err(EvalError::TypeError("/: division by zero".into()));
    }
    Ok(Value::Float(x / y))
}

/// Floor division, rounding toward negative infinity.
fn floor_div(x: &BigInt, y: &BigInt) -> BigInt {
    let q = x / y;
    let r = x % y;
    if !r.is_zero() && (r.is_negative() != y.is_negative()) {
        q - 1
    } else {
        q
    }
}

fn compare(name: &str, a: &Value, b: &Value) -> Result<Ordering, EvalError> {
    let ordering = match (a, b) {
        (Value::Int(x), Value::Int(y)) => Some(x.cmp(y)),
        (Value::Float(x), Value::Float(y)) => x.partial_cmp(y),
        (Value::Int(x), Value::Float(y)) => big_to_f64(x).partial_cmp(y),
        (Value::Float(x), Value::Int(y)) => x.partial_cmp(&big_to_f64(y)),
        _ => {
            return Err(EvalError::TypeError(format!(
                "{name} expects numbers, got {a} and {b}"
            )));
        }
    };
    ordering.ok_or_else(|| EvalError::TypeError(format!("{name}: cannot compare NaN")))
}

fn extremum(name: &'static str, args: &[Value], keep: Ordering) -> Result<Value, EvalError> {
    let [first, rest @ ..] = args else {
        return Err(arity(name, "at least 1 argument", 0));
    };
    let mut best = first.clone();
    for arg in rest {
        if compare(name, arg, &best)? == keep {
            best = arg.clone();
        }
    }
    Ok(best)
}
