//! Standard environment for Vesper.
//!
//! This crate provides `standard_env()`: a pre-populated top-level
//! environment holding the native procedures the evaluator depends on
//! but does not implement.

mod io;
mod list;
mod math;
mod predicate;

use vesper_eval::{Environment, Value};

/// All builtin bindings, name first.
pub fn builtins() -> Vec<(&'static str, Value)> {
    let mut bindings = Vec::new();
    bindings.extend(math::builtins());
    bindings.extend(list::builtins());
    bindings.extend(predicate::builtins());
    bindings.extend(io::builtins());
    bindings
}

/// An environment with the standard procedures as its root frame.
pub fn standard_env() -> Environment {
    let env = Environment::new();
    for (name, value) in builtins() {
        env.define(name, value);
    }
    env
}
