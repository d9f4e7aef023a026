//! Go package imports.

use serde::{Deserialize, Serialize};

/// A reference to an imported Go package.
///
/// Imports are value objects: two imports with the same package and alias
/// produce the same import line, whatever code requested them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Import {
    package: String,
    #[serde(default)]
    alias: String,
    #[serde(default = "qualified_default")]
    qualified: bool,
}

fn qualified_default() -> bool {
    true
}

impl Import {
    /// Create a qualified import for a package path.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            alias: String::new(),
            qualified: true,
        }
    }

    /// Refer to the package through `alias` instead of its base name.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Set whether names from this package are rendered with a qualifier.
    pub fn qualified(mut self, qualified: bool) -> Self {
        self.qualified = qualified;
        self
    }

    /// The import path, e.g. `golang.org/x/net/context`.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The alias, empty when the package is imported under its own name.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn is_qualified(&self) -> bool {
        self.qualified
    }

    /// The access qualifier prepended to names from this package
    /// (`alias.` or `base.`), or an empty string when unqualified or
    /// without a package.
    pub fn qualifier(&self) -> String {
        self.qualifier_with(None)
    }

    /// Like [`Import::qualifier`], but `alias` takes precedence over the
    /// import's own alias when present.
    pub fn qualifier_with(&self, alias: Option<&str>) -> String {
        if !self.qualified || self.package.is_empty() {
            return String::new();
        }

        let name = match alias.filter(|a| !a.is_empty()) {
            Some(alias) => alias,
            None if !self.alias.is_empty() => &self.alias,
            // the package may contain slashes, only its base name is usable
            None => self.base_name(),
        };
        format!("{}.", name)
    }

    /// The last path segment of the package.
    pub fn base_name(&self) -> &str {
        self.package
            .rsplit('/')
            .next()
            .unwrap_or(self.package.as_str())
    }

    /// The line written inside an `import ( ... )` block, without indentation.
    pub fn import_line(&self) -> String {
        if self.alias.is_empty() {
            format!("\"{}\"", self.package)
        } else {
            format!("{} \"{}\"", self.alias, self.package)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_import() {
        let imp = Import::new("bytes");
        assert_eq!(imp.qualifier(), "bytes.");
    }

    #[test]
    fn test_unqualified_import() {
        let imp = Import::new("bytes").qualified(false);
        assert_eq!(imp.qualifier(), "");
    }

    #[test]
    fn test_aliased_import() {
        let imp = Import::new("bytes").with_alias("blah");
        assert_eq!(imp.alias(), "blah");
        assert_eq!(imp.package(), "bytes");
        assert_eq!(imp.qualifier(), "blah.");
    }

    #[test]
    fn test_nested_package_uses_base_name() {
        let imp = Import::new("golang.org/x/net/context");
        assert_eq!(imp.base_name(), "context");
        assert_eq!(imp.qualifier(), "context.");
    }

    #[test]
    fn test_qualifier_override() {
        let imp = Import::new("bytes").with_alias("b");
        assert_eq!(imp.qualifier_with(Some("other")), "other.");
        assert_eq!(imp.qualifier_with(Some("")), "b.");
        assert_eq!(imp.qualifier_with(None), "b.");
    }

    #[test]
    fn test_empty_package_has_no_qualifier() {
        assert_eq!(Import::new("").qualifier(), "");
        assert_eq!(Import::new("").with_alias("x").qualifier(), "");
        assert_eq!(Import::new("").qualifier_with(Some("y")), "");
    }

    #[test]
    fn test_import_line() {
        assert_eq!(Import::new("bytes").import_line(), "\"bytes\"");
        assert_eq!(
            Import::new("bytes").with_alias("blah").import_line(),
            "blah \"bytes\""
        );
    }

    #[test]
    fn test_deserialize_defaults() {
        let imp: Import = toml::from_str("package = \"io\"").unwrap();
        assert_eq!(imp, Import::new("io"));
    }
}
