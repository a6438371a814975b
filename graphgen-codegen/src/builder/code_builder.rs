//! Code builder utility for generating properly indented code.

use std::ops::{Deref, DerefMut};

/// One level of indentation in generated C++.
pub const TAB: &str = "\t";

/// Mutable API for building code with proper indentation.
///
/// Braced blocks are opened with [`CodeBuilder::scope`], which returns a
/// guard. The closing brace is written when the guard is dropped, so every
/// exit path out of a generator (including `?` and early `return`) leaves
/// the output balanced.
///
/// # Example
///
/// ```
/// use graphgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::cpp();
/// builder.push_line("int main()");
/// {
///     let mut body = builder.scope();
///     body.push_line("return 0;");
/// }
/// assert_eq!(builder.build(), "int main()\n{\n\treturn 0;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    /// Text written once per indentation level.
    indent: &'static str,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder writing `indent` once per level.
    pub fn new(indent: &'static str) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with tab indentation.
    pub fn cpp() -> Self {
        Self::new(TAB)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a line indented one level deeper than the current one, for
    /// continuations such as base clauses and member initializers.
    pub fn push_continuation(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(self.indent);
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a line one level shallower than the current one, for access
    /// specifiers and labels.
    pub fn push_label(&mut self, s: &str) -> &mut Self {
        let level = self.indent_level;
        self.indent_level = level.saturating_sub(1);
        self.push_line(s);
        self.indent_level = level;
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add pre-rendered text, re-indenting each non-empty line to the
    /// current level.
    pub fn push_text(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            if line.is_empty() {
                self.push_blank();
            } else {
                self.push_line(line);
            }
        }
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Open a `{ ... }` block closed by `}` when the guard drops.
    pub fn scope(&mut self) -> Scope<'_> {
        self.scope_with_close("}")
    }

    /// Open a `{` block closed by `close` when the guard drops
    /// (e.g. `};` for class declarations).
    pub fn scope_with_close(&mut self, close: &'static str) -> Scope<'_> {
        self.push_line("{");
        self.push_indent();
        Scope {
            builder: self,
            close,
        }
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::cpp()
    }
}

/// An open braced block of a [`CodeBuilder`].
///
/// Dereferences to the builder so the body can be written through the guard.
/// Dropping it restores the enclosing indentation and emits the close.
#[derive(Debug)]
pub struct Scope<'a> {
    builder: &'a mut CodeBuilder,
    close: &'static str,
}

impl Deref for Scope<'_> {
    type Target = CodeBuilder;

    fn deref(&self) -> &Self::Target {
        self.builder
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.builder
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        self.builder.push_dedent();
        self.builder.push_line(self.close);
    }
}
