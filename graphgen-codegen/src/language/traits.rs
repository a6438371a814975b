//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for generating an SDK in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "cpp")
    fn language(&self) -> &'static str;

    /// File extension for generated files (e.g., "h")
    fn file_extension(&self) -> &'static str;

    /// Render every generated file without writing to disk
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files whose content was written
    pub written: Vec<String>,
    /// Files that already had identical content
    pub unchanged: Vec<String>,
}

impl GenerateResult {
    /// Total number of generated files.
    pub fn total(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Whether a resolved type is built into the target or generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// Found in the primitive table.
    Primitive,
    /// Not a primitive; refers to a generated model type.
    UserDefined,
}

/// A model type name resolved to its target-language spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    pub spelling: String,
    pub kind: TypeKind,
}

impl ResolvedType {
    pub fn primitive(spelling: impl Into<String>) -> Self {
        Self {
            spelling: spelling.into(),
            kind: TypeKind::Primitive,
        }
    }

    pub fn user_defined(spelling: impl Into<String>) -> Self {
        Self {
            spelling: spelling.into(),
            kind: TypeKind::UserDefined,
        }
    }

    pub fn is_primitive(&self) -> bool {
        self.kind == TypeKind::Primitive
    }
}

/// Trait for mapping model type names to language-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Resolve a primitive or model type name.
    ///
    /// Names missing from the primitive table are treated as generated
    /// model types.
    fn resolve(&self, type_name: &str) -> ResolvedType;

    /// Wrap an element type in the language's sequence container.
    fn sequence_of(&self, element: &str) -> String;
}
