//! List builtins, including the higher-order ones that feed values back
//! into the evaluator.

use num_bigint::BigInt;
use std::rc::Rc;
use vesper_eval::value::{BuiltinFn, Value};
use vesper_eval::{apply, EvalError};

pub fn builtins() -> Vec<(&'static str, Value)> {
    vec![
        (
            "car",
            Value::Builtin(BuiltinFn {
                name: "car",
                func: |args| match args {
                    [Value::List(items)] => items.first().cloned().ok_or_else(|| {
                        EvalError::TypeError("car expects a non-empty list".into())
                    }),
                    [other] => Err(EvalError::TypeError(format!("car expects a list, got {other}"))),
                    _ => Err(arity("car", 1, args.len())),
                },
            }),
        ),
        (
            "cdr",
            Value::Builtin(BuiltinFn {
                name: "cdr",
                func: |args| match args {
                    [Value::List(items)] => {
                        Ok(Value::List(Rc::new(items.iter().skip(1).cloned().collect())))
                    }
                    [other] => Err(EvalError::TypeError(format!("cdr expects a list, got {other}"))),
                    _ => Err(arity("cdr", 1, args.len())),
                },
            }),
        ),
        (
            "cons",
            Value::Builtin(BuiltinFn {
                name: "cons",
                func: |args| match args {
                    [head, Value::List(tail)] => {
                        let mut items = Vec::with_capacity(tail.len() + 1);
                        items.push(head.clone());
                        items.extend(tail.iter().cloned());
                        Ok(Value::List(Rc::new(items)))
                    }
                    [_, other] => {
                        Err(EvalError::TypeError(format!("cons expects a list tail, got {other}")))
                    }
                    _ => Err(arity("cons", 2, args.len())),
                },
            }),
        ),
        (
            "append",
            Value::Builtin(BuiltinFn {
                name: "append",
                func: |args| {
                    let mut items = Vec::new();
                    for arg in args {
                        match arg {
                            Value::List(part) => items.extend(part.iter().cloned()),
                            other => {
                                return Err(EvalError::TypeError(format!(
                                    "append expects lists, got {other}"
                                )));
                            }
                        }
                    }
                    Ok(Value::List(Rc::new(items)))
                },
            }),
        ),
        (
            "list",
            Value::Builtin(BuiltinFn {
                name: "list",
                func: |args| Ok(Value::List(Rc::new(args.to_vec()))),
            }),
        ),
        (
            "length",
            Value::Builtin(BuiltinFn {
                name: "length",
                func: |args| match args {
                    [Value::List(items)] => Ok(Value::Int(BigInt::from(items.len()))),
                    [other] => {
                        Err(EvalError::TypeError(format!("length expects a list, got {other}")))
                    }
                    _ => Err(arity("length", 1, args.len())),
                },
            }),
        ),
        (
            "apply",
            Value::Builtin(BuiltinFn {
                name: "apply",
                func: |args| match args {
                    [func, Value::List(call_args)] => apply(func, call_args),
                    [_, other] => Err(EvalError::TypeError(format!(
                        "apply expects an argument list, got {other}"
                    ))),
                    _ => Err(arity("apply", 2, args.len())),
                },
            }),
        ),
        (
            "map",
            Value::Builtin(BuiltinFn {
                name: "map",
                func: |args| match args {
                    [func, Value::List(items)] => {
                        let mapped: Result<Vec<Value>, EvalError> = items
                            .iter()
                            .map(|item| apply(func, std::slice::from_ref(item)))
                            .collect();
                        Ok(Value::List(Rc::new(mapped?)))
                    }
                    [_, other] => {
                        Err(EvalError::TypeError(format!("map expects a list, got {other}")))
                    }
                    _ => Err(arity("map", 2, args.len())),
                },
            }),
        ),
        (
            "filter",
            Value::Builtin(BuiltinFn {
                name: "filter",
                func: |args| match args {
                    [pred, Value::List(items)] => {
                        let mut kept = Vec::new();
                        for item in items.iter() {
                            if apply(pred, std::slice::from_ref(item))?.is_truthy() {
                                kept.push(item.clone());
                            }
                        }
                        Ok(Value::List(Rc::new(kept)))
                    }
                    [_, other] => {
                        Err(EvalError::TypeError(format!("filter expects a list, got {other}")))
                    }
                    _ => Err(arity("filter", 2, args.len())),
                },
            }),
        ),
    ]
}

fn arity(name: &str, wanted: usize, got: usize) -> EvalError {
    EvalError::TypeError(format!("{name} expects {wanted} argument(s), got {got}"))
}
