//! Templated, indent-adjusting lines of code.

use crate::{Arg, Import, Result, render_template};

/// A single templated line of code.
///
/// `before_indent` is applied to the writer before the line is written
/// (e.g. `-1` for a closing brace), `after_indent` once it has been written
/// (e.g. `1` after an opening brace).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statement {
    format: String,
    args: Vec<Arg>,
    before_indent: i32,
    after_indent: i32,
}

impl Statement {
    pub fn new(
        before_indent: i32,
        after_indent: i32,
        format: impl Into<String>,
        args: Vec<Arg>,
    ) -> Self {
        Self {
            format: format.into(),
            args,
            before_indent,
            after_indent,
        }
    }

    /// A line with no indent change.
    pub fn line(format: impl Into<String>, args: Vec<Arg>) -> Self {
        Self::new(0, 0, format, args)
    }

    /// An empty line.
    pub fn blank() -> Self {
        Self::default()
    }

    /// `format {`, indenting everything that follows.
    pub fn block_start(format: impl Into<String>, args: Vec<Arg>) -> Self {
        let mut format = format.into();
        format.push_str(" {");
        Self::new(0, 1, format, args)
    }

    /// `}`, closing the innermost block.
    pub fn block_end() -> Self {
        Self::new(-1, 0, "}", Vec::new())
    }

    /// Comment lines, each prefixed with `// `; empty lines become `//`.
    pub fn comment_lines(text: &str) -> Vec<Statement> {
        if text.is_empty() {
            return Vec::new();
        }

        text.split('\n')
            .map(|line| {
                if line.is_empty() {
                    Self::line("//", Vec::new())
                } else {
                    Self::line("// $L", vec![Arg::from(line)])
                }
            })
            .collect()
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    pub fn before_indent(&self) -> i32 {
        self.before_indent
    }

    pub fn after_indent(&self) -> i32 {
        self.after_indent
    }

    /// Whether this statement has no format text.
    pub fn is_empty(&self) -> bool {
        self.format.is_empty()
    }

    /// Render the format string with the arguments.
    pub fn render(&self) -> Result<String> {
        render_template(&self.format, &self.args)
    }

    /// Imports required by the type arguments of this statement.
    pub fn imports(&self) -> Vec<Import> {
        self.args.iter().flat_map(Arg::imports).collect()
    }

    /// Join two statements into one line.
    ///
    /// Formats and arguments are concatenated; before deltas are summed, as
    /// are after deltas. An empty side leaves the other unchanged.
    pub fn append(self, other: Statement) -> Statement {
        if other.is_empty() {
            return self;
        }
        if self.is_empty() {
            return other;
        }

        let mut args = self.args;
        args.extend(other.args);

        Statement {
            format: self.format + &other.format,
            args,
            before_indent: self.before_indent + other.before_indent,
            after_indent: self.after_indent + other.after_indent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TypeRef, args};

    #[test]
    fn test_render() {
        let s = Statement::line("$L $L $L $L", args!["this", "is", "a", "test"]);
        assert_eq!(s.render().unwrap(), "this is a test");
    }

    #[test]
    fn test_block_helpers() {
        let start = Statement::block_start("for i := 0; i < $L; i++", args![5]);
        assert_eq!(start.render().unwrap(), "for i := 0; i < 5; i++ {");
        assert_eq!(start.after_indent(), 1);

        let end = Statement::block_end();
        assert_eq!(end.render().unwrap(), "}");
        assert_eq!(end.before_indent(), -1);
    }

    #[test]
    fn test_append() {
        let assignment = Statement::line("var $L $T = ", args!["a", TypeRef::int()]);
        let value = Statement::line("$L", args![5]);
        let joined = assignment.append(value);

        assert_eq!(joined.render().unwrap(), "var a int = 5");
        assert_eq!(joined.args().len(), 3);
    }

    #[test]
    fn test_append_sums_indents() {
        let a = Statement::new(-1, 0, "} else", Vec::new());
        let b = Statement::new(0, 1, " {", Vec::new());
        let joined = a.append(b);

        assert_eq!(joined.format(), "} else {");
        assert_eq!(joined.before_indent(), -1);
        assert_eq!(joined.after_indent(), 1);
    }

    #[test]
    fn test_append_empty_side() {
        let a = Statement::new(0, 1, "x", Vec::new());
        assert_eq!(a.clone().append(Statement::blank()), a);
        assert_eq!(Statement::blank().append(a.clone()), a);
    }

    #[test]
    fn test_comment_lines() {
        let lines: Vec<String> = Statement::comment_lines("this is\n\na comment")
            .iter()
            .map(|s| s.render().unwrap())
            .collect();
        assert_eq!(lines, vec!["// this is", "//", "// a comment"]);
        assert!(Statement::comment_lines("").is_empty());
    }

    #[test]
    fn test_imports_from_type_args() {
        let println = TypeRef::function_path("fmt.Println").unwrap();
        let s = Statement::line("$T($S)", args![println, "x"]);
        assert_eq!(s.imports(), vec![Import::new("fmt")]);
    }
}
