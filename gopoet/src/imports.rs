//! Import collection and deduplication for Go files.

use gopoet_core::Import;
use indexmap::IndexMap;
use tracing::trace;

/// Alias written in front of imports kept only for their side effects.
pub const BLANK_IDENTIFIER: &str = "_";

/// Tracks the imports of a file and deduplicates them.
///
/// Two imports are the same when they share package path and alias.
/// Insertion order is kept for deterministic output.
///
/// # Example
///
/// ```
/// use gopoet::{Import, ImportCollector};
///
/// let mut imports = ImportCollector::new();
/// imports.add(Import::new("fmt"));
/// imports.add(Import::new("fmt"));
/// imports.add(Import::new("golang.org/x/net/context").with_alias("ctx"));
///
/// let lines: Vec<String> = imports.iter().map(Import::import_line).collect();
/// assert_eq!(lines, ["\"fmt\"", "ctx \"golang.org/x/net/context\""]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    imports: IndexMap<(String, String), Import>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import. Returns `false` when it was already present or has
    /// an empty package path.
    pub fn add(&mut self, import: Import) -> bool {
        if import.package().is_empty() {
            return false;
        }

        let key = (import.package().to_string(), import.alias().to_string());
        if self.imports.contains_key(&key) {
            trace!(package = %key.0, alias = %key.1, "skipping duplicate import");
            return false;
        }

        self.imports.insert(key, import);
        true
    }

    /// Add an import that is only needed for its initialization side
    /// effects; it is written as `_ "package"` whatever its alias.
    pub fn add_side_effect(&mut self, import: &Import) -> bool {
        self.add(Import::new(import.package()).with_alias(BLANK_IDENTIFIER))
    }

    /// Add every import of an iterator, in order.
    pub fn extend(&mut self, imports: impl IntoIterator<Item = Import>) {
        for import in imports {
            self.add(import);
        }
    }

    pub fn contains(&self, package: &str, alias: &str) -> bool {
        self.imports
            .contains_key(&(package.to_string(), alias.to_string()))
    }

    /// Iterate over the unique imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Import> {
        self.imports.values()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    pub fn into_vec(self) -> Vec<Import> {
        self.imports.into_values().collect()
    }
}
