//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Accumulates indented lines
//! - [`Scope`] - Guard that opens a braced block and closes it on drop

mod code_builder;

pub use code_builder::{CodeBuilder, Scope, TAB};
