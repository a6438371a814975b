//! Dependency collection for generated entities.

use std::collections::BTreeSet;

use crate::language::ResolvedType;

/// What a generated entity needs declared before it.
///
/// System symbols are target-language or framework spellings that map to a
/// header or module; user names are other generated (or framework-provided)
/// entities. Both are deduplicated and kept sorted so the rendered
/// include/import block is identical across runs.
///
/// # Example
///
/// ```
/// use graphgen_codegen::generation::Dependencies;
///
/// let mut deps = Dependencies::new("User");
/// deps.add_user("DirectoryObject");
/// deps.add_user("User");
/// deps.add_system("std::wstring");
///
/// assert_eq!(deps.user().collect::<Vec<_>>(), ["DirectoryObject"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies {
    owner: String,
    system: BTreeSet<String>,
    user: BTreeSet<String>,
}

impl Dependencies {
    /// Create an empty set for the entity named `owner`.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            ..Self::default()
        }
    }

    /// Name of the entity these dependencies belong to.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Add a system symbol.
    pub fn add_system(&mut self, symbol: &str) -> &mut Self {
        if !symbol.is_empty() {
            self.system.insert(symbol.to_string());
        }
        self
    }

    /// Add a generated entity. The owner itself is never recorded.
    pub fn add_user(&mut self, name: &str) -> &mut Self {
        if !name.is_empty() && name != self.owner {
            self.user.insert(name.to_string());
        }
        self
    }

    /// Add a resolved member type to the matching category.
    pub fn add_resolved(&mut self, resolved: &ResolvedType) -> &mut Self {
        if resolved.is_primitive() {
            self.add_system(&resolved.spelling)
        } else {
            self.add_user(&resolved.spelling)
        }
    }

    /// Merge another set into this one, keeping this owner.
    pub fn merge(&mut self, other: &Dependencies) -> &mut Self {
        for symbol in &other.system {
            self.add_system(symbol);
        }
        for name in &other.user {
            self.add_user(name);
        }
        self
    }

    /// System symbols in sorted order.
    pub fn system(&self) -> impl Iterator<Item = &str> {
        self.system.iter().map(String::as_str)
    }

    /// Generated entity names in sorted order.
    pub fn user(&self) -> impl Iterator<Item = &str> {
        self.user.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.system.is_empty() && self.user.is_empty()
    }
}
