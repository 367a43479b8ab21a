//! Integration tests for vesper-eval: special forms, closures, and
//! failure propagation.

use std::sync::atomic::{AtomicUsize, Ordering};
use vesper_eval::value::BuiltinFn;
use vesper_eval::{evaluate, Environment, EvalError, Value};
use vesper_parser::{parse, parse_all};
use vesper_std::standard_env;

/// Evaluate a whole program against one environment, returning the last
/// value.
fn run(env: &Environment, source: &str) -> Result<Value, EvalError> {
    let mut result = Value::Unit;
    for expr in parse_all(source).expect("parse") {
        result = evaluate(&expr, env)?;
    }
    Ok(result)
}

fn run_str(env: &Environment, source: &str) -> String {
    run(env, source).unwrap().to_string()
}

// ============================================================================
// Dispatch basics
// ============================================================================

#[test]
fn test_literals() {
    let env = standard_env();
    assert_eq!(run_str(&env, "7"), "7");
    assert_eq!(run_str(&env, "3.3"), "3.3");
    assert_eq!(run_str(&env, "()"), "()");
}

#[test]
fn test_symbol_lookup_walks_the_chain() {
    let outer = standard_env();
    outer.define("x", Value::Int(10.into()));
    let inner = outer.child().child();
    assert_eq!(run_str(&inner, "x"), "10");
}

#[test]
fn test_unbound_symbol_names_the_symbol() {
    let env = standard_env();
    assert_eq!(
        run(&env, "ni!"),
        Err(EvalError::UnboundSymbol("ni!".into()))
    );
}

#[test]
fn test_quote_is_unevaluated() {
    let env = standard_env();
    assert_eq!(run_str(&env, "(quote no-such-name)"), "no-such-name");
    assert_eq!(run_str(&env, "(quote (/ 10 0))"), "(/ 10 0)");
    assert_eq!(
        run_str(&env, "(quote (testing 1 (2.0) -3.14e159))"),
        "(testing 1 (2.0) -3.14e159)"
    );
}

// ============================================================================
// if: truthiness and single-branch evaluation
// ============================================================================

#[test]
fn test_if_selects_on_truthiness() {
    let env = standard_env();
    assert_eq!(run_str(&env, "(if (> 6 5) (+ 1 1) (+ 2 2))"), "2");
    assert_eq!(run_str(&env, "(if (< 6 5) (+ 1 1) (+ 2 2))"), "4");
    // Only the empty list is falsy.
    assert_eq!(run_str(&env, "(if (quote ()) 1 2)"), "2");
    assert_eq!(run_str(&env, "(if 0 1 2)"), "1");
}

static PROBE_CALLS: AtomicUsize = AtomicUsize::new(0);

fn probe(_args: &[Value]) -> Result<Value, EvalError> {
    PROBE_CALLS.fetch_add(1, Ordering::SeqCst);
    Ok(Value::Unit)
}

#[test]
fn test_if_never_evaluates_the_untaken_branch() {
    let env = standard_env();
    env.define(
        "probe",
        Value::Builtin(BuiltinFn {
            name: "probe",
            func: probe,
        }),
    );

    run(&env, "(if 1 (quote ok) (probe))").unwrap();
    run(&env, "(if (quote ()) (probe) (quote ok))").unwrap();
    assert_eq!(PROBE_CALLS.load(Ordering::SeqCst), 0);

    run(&env, "(if 1 (probe) (quote ok))").unwrap();
    assert_eq!(PROBE_CALLS.load(Ordering::SeqCst), 1);
}

// ============================================================================
// define / set! / begin
// ============================================================================

#[test]
fn test_define_then_reference() {
    let env = standard_env();
    assert_eq!(run(&env, "(define x 3)"), Ok(Value::Unit));
    assert_eq!(run_str(&env, "x"), "3");
    assert_eq!(run_str(&env, "(+ x x)"), "6");
}

#[test]
fn test_define_sugar_builds_a_procedure() {
    let env = standard_env();
    run(&env, "(define (max2 a b) (if (>= a b) a b))").unwrap();
    assert!(matches!(env.get("max2"), Some(Value::Procedure(_))));
    assert_eq!(run_str(&env, "(max2 22 11)"), "22");
}

#[test]
fn test_set_mutates_the_nearest_existing_binding() {
    let env = standard_env();
    run(&env, "(define n 1)").unwrap();
    run(&env, "(set! n (+ n 10))").unwrap();
    assert_eq!(run_str(&env, "n"), "11");
}

#[test]
fn test_set_never_creates_a_binding() {
    let env = standard_env();
    assert_eq!(
        run(&env, "(set! ghost 1)"),
        Err(EvalError::UnboundSymbol("ghost".into()))
    );
    assert_eq!(env.get("ghost"), None);
}

#[test]
fn test_begin_returns_the_last_value() {
    let env = standard_env();
    assert_eq!(run_str(&env, "(begin (define x (* 2 3)) (* x 7))"), "42");
}

#[test]
fn test_committed_effects_survive_a_later_failure() {
    let env = standard_env();
    let result = run(&env, "(begin (define x 1) (set! x 2) (boom))");
    assert_eq!(result, Err(EvalError::UnboundSymbol("boom".into())));
    // No rollback: both effects before the failure stay in place.
    assert_eq!(run_str(&env, "x"), "2");
}

// ============================================================================
// Closures
// ============================================================================

#[test]
fn test_lambda_application() {
    let env = standard_env();
    assert_eq!(run_str(&env, "((lambda (x) (+ x x)) 5)"), "10");
}

#[test]
fn test_closure_captures_its_defining_frame() {
    let env = standard_env();
    run(
        &env,
        "(define (make-adder inc) (lambda (x) (+ inc x)))
         (define add1 (make-adder 1))",
    )
    .unwrap();
    assert_eq!(run_str(&env, "(add1 99)"), "100");
}

#[test]
fn test_counter_shares_one_captured_frame_across_calls() {
    let env = standard_env();
    run(
        &env,
        "(define (make-counter)
           (define n 0)
           (lambda () (set! n (+ n 1)) n))
         (define tally (make-counter))",
    )
    .unwrap();
    assert_eq!(run_str(&env, "(tally)"), "1");
    assert_eq!(run_str(&env, "(tally)"), "2");
    assert_eq!(run_str(&env, "(tally)"), "3");
}

#[test]
fn test_counters_are_independent() {
    let env = standard_env();
    run(
        &env,
        "(define (make-counter)
           (define n 0)
           (lambda () (set! n (+ n 1)) n))
         (define a (make-counter))
         (define b (make-counter))",
    )
    .unwrap();
    assert_eq!(run_str(&env, "(a)"), "1");
    assert_eq!(run_str(&env, "(a)"), "2");
    assert_eq!(run_str(&env, "(b)"), "1");
}

#[test]
fn test_parameters_shadow_outer_bindings() {
    let env = standard_env();
    run(&env, "(define x 100)").unwrap();
    assert_eq!(run_str(&env, "((lambda (x) x) 1)"), "1");
    assert_eq!(run_str(&env, "x"), "100");
}

#[test]
fn test_if_can_choose_the_operator() {
    let env = standard_env();
    run(&env, "(define flip (lambda (n) ((if (> n 0) + -) 0 n)))").unwrap();
    assert_eq!(run_str(&env, "(flip -3)"), "3");
    assert_eq!(run_str(&env, "(flip 3)"), "3");
}

// ============================================================================
// Renderer
// ============================================================================

#[test]
fn test_to_text_of_callables() {
    let env = standard_env();
    assert_eq!(run_str(&env, "(lambda (x) x)"), "<procedure>");
    assert_eq!(run_str(&env, "car"), "<builtin:car>");
}
