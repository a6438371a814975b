//! Core utilities for the graphgen SDK generator.
//!
//! This crate provides the string helpers and file-writing primitives shared
//! by the model, codegen and CLI crates.

mod file;
mod utils;

// File operations
pub use file::{GeneratedFile, WriteResult};
// String utilities
pub use utils::{capitalize, lower_first, split_words, titleize_namespace};
