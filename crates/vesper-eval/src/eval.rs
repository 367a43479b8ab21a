//! Expression evaluation and special-form dispatch.

use crate::value::{Procedure, Value};
use crate::Environment;
use std::rc::Rc;
use thiserror::Error;
use vesper_common::Span;
use vesper_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode};
use vesper_syntax::Expr;

/// Evaluation errors. None are recovered inside the core; every failure
/// propagates unchanged to the caller. Bindings committed before the
/// failure stay committed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A symbol reference or `set!` target with no binding anywhere in
    /// the environment chain.
    #[error("unbound symbol: {0}")]
    UnboundSymbol(String),

    /// A special form with the wrong shape or arity, named in full.
    #[error("malformed form: {0}")]
    MalformedForm(String),

    /// A procedure applied to the wrong kind or number of values.
    #[error("type error: {0}")]
    TypeError(String),
}

impl EvalError {
    /// Diagnostic rendering for front ends. Runtime errors carry no
    /// source span, so the report is message-only.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let code = match self {
            EvalError::UnboundSymbol(_) => ErrorCode::UnboundSymbol,
            EvalError::MalformedForm(_) => ErrorCode::MalformedForm,
            EvalError::TypeError(_) => ErrorCode::TypeOrArity,
        };
        Diagnostic::error(DiagnosticKind::Eval, Span::DUMMY, self.to_string()).with_code(code)
    }
}

/// Evaluate an expression in an environment.
///
/// Each call dispatches once on the shape of `expr`; there is no evaluator
/// state beyond the environment. Special forms recurse into `evaluate` for
/// their sub-parts.
pub fn evaluate(expr: &Expr, env: &Environment) -> Result<Value, EvalError> {
    match expr {
        Expr::Int(n) => Ok(Value::Int(n.clone())),
        Expr::Float(x) => Ok(Value::Float(*x)),
        Expr::Symbol(name) => env
            .get(name)
            .ok_or_else(|| EvalError::UnboundSymbol(name.clone())),
        Expr::List(items) => {
            if items.is_empty() {
                return Ok(Value::empty_list());
            }
            match items[0].as_symbol() {
                Some("quote") => eval_quote(items),
                Some("if") => eval_if(items, env),
                Some("define") => eval_define(items, env),
                Some("lambda") => eval_lambda(items, env),
                Some("set!") => eval_set(items, env),
                Some("begin") => eval_begin(items, env),
                _ => eval_application(items, env),
            }
        }
    }
}

/// Invoke a callable with already-evaluated argument values.
///
/// Public so that builtins (`apply`, `map`, `filter`) can feed values back
/// into user procedures.
pub fn apply(func: &Value, args: &[Value]) -> Result<Value, EvalError> {
    match func {
        Value::Builtin(builtin) => (builtin.func)(args),
        Value::Procedure(proc) => {
            let frame = proc.env.child();
            // Positional binding truncated to the shorter list: extra
            // arguments are dropped, missing parameters stay unbound.
            for (param, arg) in proc.params.iter().zip(args) {
                frame.define(param.clone(), arg.clone());
            }
            let mut result = Value::Unit;
            for expr in &proc.body {
                result = evaluate(expr, &frame)?;
            }
            Ok(result)
        }
        other => Err(EvalError::TypeError(format!("{} is not callable", other))),
    }
}

/// `(quote x)`: x, unevaluated.
fn eval_quote(items: &[Expr]) -> Result<Value, EvalError> {
    match items {
        [_, quoted] => Ok(Value::from(quoted)),
        _ => Err(malformed(items)),
    }
}

/// `(if test conseq alt)`: exactly one branch is evaluated.
fn eval_if(items: &[Expr], env: &Environment) -> Result<Value, EvalError> {
    match items {
        [_, test, conseq, alt] => {
            if evaluate(test, env)?.is_truthy() {
                evaluate(conseq, env)
            } else {
                evaluate(alt, env)
            }
        }
        _ => Err(malformed(items)),
    }
}

/// `(define symbol value)` and the `(define (name params...) body...)`
/// function-definition sugar. Always binds in the innermost frame.
fn eval_define(items: &[Expr], env: &Environment) -> Result<Value, EvalError> {
    match items {
        [_, Expr::Symbol(name), value_expr] => {
            let value = evaluate(value_expr, env)?;
            env.define(name.clone(), value);
            Ok(Value::Unit)
        }
        [_, Expr::List(signature), body @ ..] if !body.is_empty() => {
            let (name, params) = split_signature(signature).ok_or_else(|| malformed(items))?;
            let proc = Procedure {
                params,
                body: body.to_vec(),
                env: env.clone(),
            };
            env.define(name, Value::Procedure(Rc::new(proc)));
            Ok(Value::Unit)
        }
        _ => Err(malformed(items)),
    }
}

/// `(lambda (params...) body...)`: closes over the current environment.
/// A body with zero expressions is a construction-time error.
fn eval_lambda(items: &[Expr], env: &Environment) -> Result<Value, EvalError> {
    match items {
        [_, Expr::List(params), body @ ..] if !body.is_empty() => {
            let params = symbol_names(params).ok_or_else(|| malformed(items))?;
            Ok(Value::Procedure(Rc::new(Procedure {
                params,
                body: body.to_vec(),
                env: env.clone(),
            })))
        }
        _ => Err(malformed(items)),
    }
}

/// `(set! symbol value)`: rewrites the nearest existing binding; never
/// creates one.
fn eval_set(items: &[Expr], env: &Environment) -> Result<Value, EvalError> {
    match items {
        [_, Expr::Symbol(name), value_expr] => {
            let value = evaluate(value_expr, env)?;
            if env.assign(name, value) {
                Ok(Value::Unit)
            } else {
                Err(EvalError::UnboundSymbol(name.clone()))
            }
        }
        _ => Err(malformed(items)),
    }
}

/// `(begin expr...)`: evaluates all sub-expressions, returns the last.
fn eval_begin(items: &[Expr], env: &Environment) -> Result<Value, EvalError> {
    let [_, body @ ..] = items else {
        return Err(malformed(items));
    };
    if body.is_empty() {
        return Err(malformed(items));
    }
    let mut result = Value::Unit;
    for expr in body {
        result = evaluate(expr, env)?;
    }
    Ok(result)
}

/// `(op arg...)`: evaluate the operator and every argument, then apply.
fn eval_application(items: &[Expr], env: &Environment) -> Result<Value, EvalError> {
    let func = evaluate(&items[0], env)?;
    let mut args = Vec::with_capacity(items.len() - 1);
    for arg in &items[1..] {
        args.push(evaluate(arg, env)?);
    }
    apply(&func, &args)
}

fn malformed(items: &[Expr]) -> EvalError {
    EvalError::MalformedForm(Expr::List(items.to_vec()).to_string())
}

/// `(name param...)` from a define signature; every element must be a
/// symbol.
fn split_signature(signature: &[Expr]) -> Option<(String, Vec<String>)> {
    let (head, rest) = signature.split_first()?;
    let name = head.as_symbol()?.to_owned();
    let params = symbol_names(rest)?;
    Some((name, params))
}

fn symbol_names(exprs: &[Expr]) -> Option<Vec<String>> {
    exprs
        .iter()
        .map(|e| e.as_symbol().map(str::to_owned))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vesper_parser::parse;

    fn eval_str(source: &str, env: &Environment) -> Result<Value, EvalError> {
        evaluate(&parse(source).expect("parse"), env)
    }

    #[test]
    fn literals_evaluate_to_themselves() {
        let env = Environment::new();
        assert_eq!(eval_str("7", &env), Ok(Value::Int(7.into())));
        assert_eq!(eval_str("1.5", &env), Ok(Value::Float(1.5)));
        assert_eq!(eval_str("()", &env), Ok(Value::empty_list()));
    }

    #[test]
    fn quote_returns_the_form_unevaluated() {
        let env = Environment::new();
        let got = eval_str("(quote (no such symbols))", &env).unwrap();
        assert_eq!(got.to_string(), "(no such symbols)");
    }

    #[test]
    fn define_binds_in_the_innermost_frame_only() {
        let outer = Environment::new();
        let inner = outer.child();
        eval_str("(define x 1)", &inner).unwrap();
        assert_eq!(inner.get("x"), Some(Value::Int(1.into())));
        assert_eq!(outer.get("x"), None);
    }

    #[test]
    fn set_rewrites_an_outer_binding() {
        let outer = Environment::new();
        outer.define("x", Value::Int(1.into()));
        let inner = outer.child();
        eval_str("(set! x 2)", &inner).unwrap();
        assert_eq!(outer.get("x"), Some(Value::Int(2.into())));
    }

    #[test]
    fn set_on_unbound_symbol_fails() {
        let env = Environment::new();
        assert_eq!(
            eval_str("(set! ghost 1)", &env),
            Err(EvalError::UnboundSymbol("ghost".into()))
        );
    }

    #[test]
    fn malformed_special_forms_name_the_form() {
        let env = Environment::new();
        assert_eq!(
            eval_str("(lambda (x))", &env),
            Err(EvalError::MalformedForm("(lambda (x))".into()))
        );
        assert!(matches!(
            eval_str("(if 1 2)", &env),
            Err(EvalError::MalformedForm(_))
        ));
        assert!(matches!(
            eval_str("(begin)", &env),
            Err(EvalError::MalformedForm(_))
        ));
    }

    #[test]
    fn extra_arguments_are_silently_dropped() {
        let env = Environment::new();
        eval_str("(define second (lambda (a b) b))", &env).unwrap();
        assert_eq!(
            eval_str("(second 1 2 3 4)", &env),
            Ok(Value::Int(2.into()))
        );
    }

    #[test]
    fn missing_arguments_leave_parameters_unbound() {
        let env = Environment::new();
        eval_str("(define second (lambda (a b) b))", &env).unwrap();
        assert_eq!(
            eval_str("(second 1)", &env),
            Err(EvalError::UnboundSymbol("b".into()))
        );
    }

    #[test]
    fn applying_a_non_callable_is_a_type_error() {
        let env = Environment::new();
        eval_str("(define three 3)", &env).unwrap();
        assert!(matches!(
            eval_str("(three 1 2)", &env),
            Err(EvalError::TypeError(_))
        ));
    }
}
