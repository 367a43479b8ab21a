//! Vesper: a minimal Scheme-family interpreter.
//!
//! This facade crate re-exports the entry points a front end consumes:
//! read with [`parse`]/[`parse_all`], evaluate with [`evaluate`] against a
//! [`standard_env`], and render results back to surface syntax via
//! [`Value`]'s `Display`.
//!
//! ```
//! use vesper::{evaluate, parse, standard_env};
//!
//! let env = standard_env();
//! let expr = parse("(+ (* 2 100) (* 1 10))").unwrap();
//! let value = evaluate(&expr, &env).unwrap();
//! assert_eq!(value.to_string(), "210");
//! ```

pub use vesper_eval::{apply, evaluate, Environment, EvalError, Value};
pub use vesper_parser::{parse, parse_all, ReadError, Reader};
pub use vesper_std::standard_env;
pub use vesper_syntax::Expr;
