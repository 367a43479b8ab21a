//! Predicate builtins. True is `1`, false is `()`.

use vesper_eval::value::{BuiltinFn, Value};
use vesper_eval::EvalError;

pub fn builtins() -> Vec<(&'static str, Value)> {
    vec![
        (
            "null?",
            Value::Builtin(BuiltinFn {
                name: "null?",
                func: |args| match args {
                    [Value::List(items)] => Ok(Value::from_bool(items.is_empty())),
                    [_] => Ok(Value::from_bool(false)),
                    _ => Err(arity("null?", args.len())),
                },
            }),
        ),
        (
            "list?",
            Value::Builtin(BuiltinFn {
                name: "list?",
                func: |args| match args {
                    [v] => Ok(Value::from_bool(matches!(v, Value::List(_)))),
                    _ => Err(arity("list?", args.len())),
                },
            }),
        ),
        (
            "number?",
            Value::Builtin(BuiltinFn {
                name: "number?",
                func: |args| match args {
                    [v] => Ok(Value::from_bool(matches!(v, Value::Int(_) | Value::Float(_)))),
                    _ => Err(arity("number?", args.len())),
                },
            }),
        ),
        (
            "symbol?",
            Value::Builtin(BuiltinFn {
                name: "symbol?",
                func: |args| match args {
                    [v] => Ok(Value::from_bool(matches!(v, Value::Symbol(_)))),
                    _ => Err(arity("symbol?", args.len())),
                },
            }),
        ),
        (
            "procedure?",
            Value::Builtin(BuiltinFn {
                name: "procedure?",
                func: |args| match args {
                    [v] => Ok(Value::from_bool(v.is_callable())),
                    _ => Err(arity("procedure?", args.len())),
                },
            }),
        ),
        (
            "eq?",
            Value::Builtin(BuiltinFn {
                name: "eq?",
                func: |args| match args {
                    [a, b] => Ok(Value::from_bool(a.identical(b))),
                    _ => Err(arity("eq?", args.len())),
                },
            }),
        ),
        (
            "equal?",
            Value::Builtin(BuiltinFn {
                name: "equal?",
                func: |args| match args {
                    [a, b] => Ok(Value::from_bool(a == b)),
                    _ => Err(arity("equal?", args.len())),
                },
            }),
        ),
        (
            "not",
            Value::Builtin(BuiltinFn {
                name: "not",
                func: |args| match args {
                    [v] => Ok(Value::from_bool(!v.is_truthy())),
                    _ => Err(arity("not", args.len())),
                },
            }),
        ),
    ]
}

fn arity(name: &str, got: usize) -> EvalError {
    EvalError::TypeError(format!("{name}: wrong number of arguments ({got})"))
}
