//! Abstract data model consumed by graphgen.
//!
//! A model is the already-abstracted service graph: classes with
//! properties and navigation relationships, and enumerations with their
//! members. It is loaded from a TOML or JSON model file and validated
//! just enough to guarantee that names are present and unique and that
//! base classes resolve without cycles.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod model;
mod parse;

pub use error::{Error, Result, SourceContext};
pub use model::{ClassKind, Model, ModelClass, ModelEnum, ModelEnumMember, ModelProperty};
pub use parse::{Format, parse_file, parse_str, parse_str_with_filename};
