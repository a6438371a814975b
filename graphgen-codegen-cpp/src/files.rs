//! Generated header files.

use std::path::{Path, PathBuf};

use graphgen_core::GeneratedFile;

/// One rendered `{Name}.h`, written flat into the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFile {
    pub name: String,
    pub content: String,
}

impl HeaderFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl GeneratedFile for HeaderFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.name)
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
