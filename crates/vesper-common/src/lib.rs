//! Common types for the Vesper interpreter.
//!
//! This crate provides `Span` and `BytePos`, the source-location types
//! threaded through tokens, reader errors, and diagnostics.

mod span;

pub use span::{BytePos, Span};
