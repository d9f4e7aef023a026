//! Go line comments.

use gopoet_core::{CodeBlock, CodeWriter, Import, Indent, Result, Statement};

/// A comment block. Every line is prefixed with `// `; empty lines are
/// written as a bare `//`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment(String);

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The comment as statements, one per line.
    pub fn statements(&self) -> Vec<Statement> {
        Statement::comment_lines(&self.0)
    }
}

impl CodeBlock for Comment {
    fn render_with_indent(&self, indent: Indent) -> Result<String> {
        let mut writer = CodeWriter::new(indent);
        writer.write_statements(&self.statements())?;
        Ok(writer.build())
    }

    fn imports(&self) -> Vec<Import> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_comment() {
        let comment = Comment::new("");
        assert_eq!(comment.render().unwrap(), "");
        assert!(comment.imports().is_empty());
    }

    #[test]
    fn test_single_line() {
        let comment = Comment::new("this is a comment");
        assert_eq!(comment.render().unwrap(), "// this is a comment\n");
    }

    #[test]
    fn test_multi_line_keeps_leading_spaces() {
        let comment = Comment::new("this\nis\n a\n  comment");
        assert_eq!(
            comment.render().unwrap(),
            "// this\n// is\n//  a\n//   comment\n"
        );
    }

    #[test]
    fn test_empty_lines() {
        let comment = Comment::new("this is\n\na comment");
        assert_eq!(comment.render().unwrap(), "// this is\n//\n// a comment\n");
    }
}
