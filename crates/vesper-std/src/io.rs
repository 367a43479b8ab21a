//! Output builtins.
//!
//! `display` is the only impure builtin: a synchronous, unbuffered write
//! that returns immediately.

use std::io::Write;
use vesper_eval::value::{BuiltinFn, Value};
use vesper_eval::EvalError;

pub fn builtins() -> Vec<(&'static str, Value)> {
    vec![(
        "display",
        Value::Builtin(BuiltinFn {
            name: "display",
            func: |args| match args {
                [v] => {
                    let mut out = std::io::stdout();
                    let _ = writeln!(out, "{v}");
                    let _ = out.flush();
                    Ok(Value::Unit)
                }
                _ => Err(EvalError::TypeError(format!(
                    "display expects 1 argument, got {}",
                    args.len()
                ))),
            },
        }),
    )]
}
