//! Assembly of complete generated Java source files.

use chrono::NaiveDateTime;
use gridconf_core::main_comment;

use crate::JavaBuilder;

/// A structured representation of one generated Java source file.
///
/// Organizes output into four sections rendered in order: provenance
/// comment, package declaration, import block, and body. Non-empty
/// sections are separated by a single blank line.
///
/// # Example
///
/// ```ignore
/// let source = JavaFile::new()
///     .package("org.example.config")
///     .with_builder(builder)
///     .render();
/// ```
#[derive(Debug, Clone, Default)]
pub struct JavaFile {
    comment: Option<String>,
    package: Option<String>,
    imports: String,
    body: String,
}

impl JavaFile {
    /// Create a new empty file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header comment text (rendered as a Javadoc block).
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.comment = Some(text.into());
        self
    }

    /// Set the header comment to the standard provenance line for the
    /// given generation time.
    pub fn provenance(self, generated_at: &NaiveDateTime) -> Self {
        self.comment(main_comment(generated_at))
    }

    /// Set the package declaration.
    pub fn package(mut self, name: impl Into<String>) -> Self {
        self.package = Some(name.into());
        self
    }

    /// Set the pre-rendered import block.
    pub fn imports(mut self, block: impl Into<String>) -> Self {
        self.imports = block.into();
        self
    }

    /// Set the body text.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Take the import block and body from a finished builder.
    pub fn with_builder(self, builder: JavaBuilder) -> Self {
        let imports = builder.render_imports();
        self.imports(imports).body(builder.build())
    }

    /// Check if the file has no content in any section.
    pub fn is_empty(&self) -> bool {
        self.comment.is_none()
            && self.package.is_none()
            && self.imports.is_empty()
            && self.body.is_empty()
    }

    /// Render the complete file.
    pub fn render(&self) -> String {
        let mut sections: Vec<String> = Vec::new();

        if let Some(comment) = &self.comment {
            sections.push(format!("/**\n * {}\n */", comment));
        }

        if let Some(package) = &self.package {
            sections.push(format!("package {};", package));
        }

        if !self.imports.is_empty() {
            sections.push(self.imports.clone());
        }

        if !self.body.is_empty() {
            // The body already carries its own trailing newline.
            sections.push(self.body.trim_end_matches('\n').to_string());
        }

        if sections.is_empty() {
            return String::new();
        }

        let mut out = sections.join("\n\n");
        out.push('\n');
        out
    }
}
