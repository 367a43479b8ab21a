//! S-expression syntax tree for Vesper.
//!
//! This crate defines `Expr`, the tree produced by the reader and consumed
//! by the evaluator, together with its surface-syntax rendering.

mod expr;

pub use expr::Expr;
