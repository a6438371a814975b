//! Shared code generation utilities for graphgen.
//!
//! This crate derives everything about a generated SDK that does not depend
//! on the target language: which artifacts exist for each model element,
//! what they are called, what they depend on, and how wide an enumeration's
//! backing integer must be. Language crates (e.g. `graphgen-codegen-cpp`)
//! supply the spelling.
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-tracking text builder with scoped braces
//! - [`entity`] - Roles, descriptors, name derivation and factory binding
//! - [`generation`] - Per-entity dependency sets
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper, etc.)

pub mod builder;
pub mod entity;
pub mod generation;
pub mod language;

mod error;

pub use error::{Error, Result};
