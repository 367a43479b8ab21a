//! Evaluator for Vesper.
//!
//! This crate implements the tree-walking evaluator: runtime values,
//! lexically-scoped mutable environments, closures, and the special-form
//! dispatch. The pre-populated global environment lives in `vesper-std`.

mod env;
mod eval;
pub mod value;

pub use env::Environment;
pub use eval::{EvalError, apply, evaluate};
pub use value::{BuiltinFn, Procedure, Value};
