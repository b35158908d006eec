//! Indentation-aware builder for generated Java configuration source.

use crate::ImportRegistry;

/// One indentation level in generated output.
const INDENT_UNIT: &str = "    ";

/// Accumulates generated Java source with block-structured indentation and
/// a deduplicating import registry.
///
/// One builder is created per generation pass, mutated through its own
/// methods, and discarded once the text has been extracted with
/// [`build`](Self::build). It holds no external resources and is not meant
/// to be shared between generation tasks.
///
/// # Example
///
/// ```
/// use gridconf_codegen::JavaBuilder;
///
/// let mut b = JavaBuilder::new();
/// b.start_block("class X {").line("int y;").end_block("}");
///
/// assert_eq!(b.as_str(), "class X {\n    int y;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct JavaBuilder {
    buffer: String,
    depth: usize,
    at_line_start: bool,
    imports: ImportRegistry,
    /// Set by the caller after emitting a section that should be separated
    /// from whatever follows; consumed by
    /// [`empty_line_if_needed`](Self::empty_line_if_needed).
    pub need_empty_line: bool,
}

impl JavaBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            depth: 0,
            at_line_start: true,
            imports: ImportRegistry::new(),
            need_empty_line: false,
        }
    }

    /// Append a fragment at the current position, emitting indentation
    /// first when at the start of a line. Indentation is deferred until the
    /// first real write of each line so blank lines carry no trailing
    /// whitespace.
    pub fn append(&mut self, fragment: &str) -> &mut Self {
        if self.at_line_start {
            for _ in 0..self.depth {
                self.buffer.push_str(INDENT_UNIT);
            }

            self.at_line_start = false;
        }

        self.buffer.push_str(fragment);
        self
    }

    /// Append a fragment (when non-empty) and terminate the line.
    pub fn line(&mut self, fragment: &str) -> &mut Self {
        if !fragment.is_empty() {
            self.append(fragment);
        }

        self.buffer.push('\n');
        self.at_line_start = true;
        self
    }

    /// Emit a blank line.
    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    /// Emit the block header (when non-empty) and indent the following
    /// lines one level deeper.
    pub fn start_block(&mut self, header: &str) -> &mut Self {
        self.line(header);
        self.depth += 1;
        self
    }

    /// Close the innermost block: the footer line (when non-empty) is
    /// emitted at the outer indentation level.
    ///
    /// # Panics
    ///
    /// Panics when called without a matching [`start_block`](Self::start_block);
    /// unbalanced blocks are a caller bug, not a recoverable error.
    pub fn end_block(&mut self, footer: &str) -> &mut Self {
        assert!(self.depth > 0, "end_block without a matching start_block");
        self.depth -= 1;
        self.line(footer)
    }

    /// Consume the pending-empty-line flag: emit one blank line and return
    /// true when it was set, otherwise emit nothing and return false.
    pub fn empty_line_if_needed(&mut self) -> bool {
        if self.need_empty_line {
            self.blank();
            self.need_empty_line = false;

            return true;
        }

        false
    }

    /// Register a fully-qualified class name for the import block and
    /// return the name to use at the call site.
    ///
    /// See [`ImportRegistry::register`] for the short-name collision policy.
    pub fn register_import(&mut self, qualified_name: &str) -> String {
        self.imports.register(qualified_name)
    }

    /// Render the sorted, deduplicated import block.
    pub fn render_imports(&self) -> String {
        self.imports.render()
    }

    /// Get the current indentation level.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Get a reference to the accumulated text.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the builder and return the accumulated text.
    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for JavaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
