use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for model loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the model file content and name so error factories don't need
/// both threaded through every call.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Find the span of the `nth` quoted occurrence of `name` in the source.
    ///
    /// Model files quote every name in both TOML and JSON, so matching on
    /// `"name"` avoids hitting substrings of longer identifiers.
    pub fn find_span(&self, name: &str, nth: usize) -> Option<SourceSpan> {
        if name.is_empty() {
            return None;
        }
        let needle = format!("\"{}\"", name);
        self.src
            .match_indices(&needle)
            .nth(nth)
            .map(|(pos, _)| SourceSpan::from((pos + 1, name.len())))
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a JSON error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 1)));
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at `name` when it can be found.
    pub fn validation_error(&self, message: impl Into<String>, name: &str) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: self.find_span(name, 0),
            message: message.into(),
        })
    }

    /// Create a duplicate name error labelling both declarations.
    pub fn duplicate_name_error(&self, name: &str, kind: &'static str) -> Box<Error> {
        Box::new(Error::DuplicateName {
            src: self.named_source(),
            first_span: self.find_span(name, 0),
            second_span: self.find_span(name, 1),
            name: name.to_string(),
            kind,
        })
    }

    /// Create an unknown base error.
    pub fn unknown_base_error(&self, class: &str, base: &str) -> Box<Error> {
        Box::new(Error::UnknownBase {
            src: self.named_source(),
            span: self.find_span(base, 0),
            class: class.to_string(),
            base: base.to_string(),
        })
    }

    /// Create a base cycle error.
    pub fn base_cycle_error(&self, class: &str, chain: &[&str]) -> Box<Error> {
        Box::new(Error::BaseCycle {
            src: self.named_source(),
            span: self.find_span(class, 0),
            class: class.to_string(),
            chain: chain.join(" -> "),
        })
    }
}

/// Convert a 1-based line/column pair into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (index, text) in src.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            let column = column.saturating_sub(1).min(text.len());
            return Some(offset + column);
        }
        offset += text.len();
    }
    None
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(graphgen::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model file")]
    #[diagnostic(code(graphgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse model file")]
    #[diagnostic(code(graphgen::json_error))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(graphgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("duplicate {kind} name '{name}'")]
    #[diagnostic(
        code(graphgen::duplicate_name),
        help("every {kind} in a model must have a unique name")
    )]
    DuplicateName {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        name: String,
        kind: &'static str,
    },

    #[error("class '{class}' derives from unknown class '{base}'")]
    #[diagnostic(
        code(graphgen::unknown_base),
        help("declare '{base}' under [[classes]] or remove the base")
    )]
    UnknownBase {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a class in this model")]
        span: Option<SourceSpan>,
        class: String,
        base: String,
    },

    #[error("class '{class}' is part of a base class cycle")]
    #[diagnostic(code(graphgen::base_cycle), help("cycle: {chain}"))]
    BaseCycle {
        #[source_code]
        src: NamedSource<String>,
        #[label("cycle starts here")]
        span: Option<SourceSpan>,
        class: String,
        chain: String,
    },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_span_skips_substrings() {
        let ctx = SourceContext::new(r#"name = "userPhoto"
name = "user""#, "model.toml");
        let span = ctx.find_span("user", 0).unwrap();
        assert_eq!(span.offset(), 27);
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn test_find_span_nth() {
        let ctx = SourceContext::new(r#"["a", "b", "a"]"#, "model.json");
        assert_eq!(ctx.find_span("a", 0).unwrap().offset(), 2);
        assert_eq!(ctx.find_span("a", 1).unwrap().offset(), 12);
        assert!(ctx.find_span("a", 2).is_none());
        assert!(ctx.find_span("", 0).is_none());
    }

    #[test]
    fn test_offset_of() {
        let src = "{\n  \"a\": 1,\n  x\n}";
        assert_eq!(offset_of(src, 1, 1), Some(0));
        assert_eq!(offset_of(src, 3, 3), Some(14));
        assert_eq!(offset_of(src, 0, 0), None);
        assert_eq!(offset_of(src, 9, 1), None);
    }
}
