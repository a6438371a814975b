//! C++ header generation for graphgen.
//!
//! Every model element is bound to the roles it is rendered as, and each
//! (element, role) pair becomes one self-contained header: an include block
//! followed by a declaration inside the model's namespace.

mod entities;
mod generator;
mod includes;
mod naming;
mod target;
mod type_mapper;

pub mod files;

pub use entities::{Entity, RenderContext, render};
pub use generator::{DEFAULT_SERVICE_URL, Generator};
pub use graphgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use includes::IncludeBlock;
pub use naming::{CPP_KEYWORDS, CPP_NAMING};
pub use target::CppTarget;
pub use type_mapper::CppTypeMapper;
