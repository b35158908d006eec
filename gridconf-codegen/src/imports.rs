//! Import registration and deduplication by short class name.

use indexmap::IndexMap;

/// Classes in this namespace are visible without an import statement.
const IMPLICIT_PREFIX: &str = "java.lang.";

/// Tracks `import` declarations for one generated file, deduplicated by
/// short class name.
///
/// Two distinct classes can share a short name (`a.b.Foo` and `c.d.Foo`).
/// The first registration wins the short name; later conflicting
/// registrations are rejected and the caller is told to spell out the
/// fully-qualified name at the use site instead.
#[derive(Debug, Clone, Default)]
pub struct ImportRegistry {
    /// Short name -> fully-qualified name.
    entries: IndexMap<String, String>,
}

impl ImportRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fully-qualified class name and return the name to use at
    /// the call site.
    ///
    /// Returns the short name when this class owns it (first registration,
    /// or a repeat of the same class). Returns `qualified_name` unchanged
    /// when another class already owns the short name; the registry is left
    /// untouched in that case.
    pub fn register(&mut self, qualified_name: &str) -> String {
        let short = short_name(qualified_name);

        match self.entries.get(short) {
            Some(existing) if existing == qualified_name => short.to_string(),
            Some(_) => qualified_name.to_string(),
            None => {
                self.entries
                    .insert(short.to_string(), qualified_name.to_string());
                short.to_string()
            }
        }
    }

    /// Check if a short name is already taken.
    pub fn contains(&self, short: &str) -> bool {
        self.entries.contains_key(short)
    }

    /// Get the number of registered classes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the `import` block: one `import <fqn>;` line per registered
    /// class, sorted lexicographically and joined with newlines.
    ///
    /// Classes under `java.lang.` are skipped since they need no import.
    /// Output depends only on the final registry contents, never on
    /// insertion order.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = self
            .entries
            .values()
            .filter(|fqn| !fqn.starts_with(IMPLICIT_PREFIX))
            .map(|fqn| format!("import {};", fqn))
            .collect();

        lines.sort();
        lines.join("\n")
    }
}

/// The trailing component of a dotted fully-qualified name, or the whole
/// name when there is no qualifying prefix.
fn short_name(qualified: &str) -> &str {
    match qualified.rfind('.') {
        Some(idx) if idx > 0 => &qualified[idx + 1..],
        _ => qualified,
    }
}
