//! Indentation-tracking writer for generated code.

use tracing::trace;

use crate::{CodeBlock, Indent, Result, Statement};

/// Accumulates code while tracking the current indentation level.
///
/// Every statement is rendered through the template engine and written on
/// its own line. Statements carry indent deltas applied before and after
/// the line, so blocks open and close without explicit indent calls.
///
/// # Example
///
/// ```
/// use gopoet_core::{args, CodeWriter, Statement, TypeRef};
///
/// let println = TypeRef::function_path("fmt.Println").unwrap();
///
/// let mut writer = CodeWriter::go();
/// writer
///     .write_statement(&Statement::block_start("func main()", args![]))?
///     .write_statement(&Statement::line("$T($S)", args![println, "Hello"]))?
///     .write_statement(&Statement::block_end())?;
///
/// assert_eq!(writer.build(), "func main() {\n\tfmt.Println(\"Hello\")\n}\n");
/// # Ok::<(), gopoet_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CodeWriter {
    indent_level: i32,
    indent: Indent,
    buffer: String,
}

impl CodeWriter {
    /// Create a new CodeWriter with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeWriter with tab indentation.
    pub fn go() -> Self {
        Self::new(Indent::GO)
    }

    /// Write code at the current indentation, without a trailing newline.
    pub fn write_code(&mut self, code: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(code);
        self
    }

    /// Write a statement on its own line.
    ///
    /// The before delta is applied first, so a closing brace is written at
    /// the outer level; the after delta applies to subsequent lines.
    pub fn write_statement(&mut self, statement: &Statement) -> Result<&mut Self> {
        let line = statement.render()?;

        self.indent_level += statement.before_indent();
        if self.indent_level < 0 {
            trace!(
                level = self.indent_level,
                format = statement.format(),
                "indent level below zero"
            );
        }

        if line.is_empty() {
            self.buffer.push('\n');
        } else {
            self.write_code(&line);
            self.buffer.push('\n');
        }

        self.indent_level += statement.after_indent();
        Ok(self)
    }

    /// Write several statements in order.
    pub fn write_statements<'a>(
        &mut self,
        statements: impl IntoIterator<Item = &'a Statement>,
    ) -> Result<&mut Self> {
        for statement in statements {
            self.write_statement(statement)?;
        }
        Ok(self)
    }

    /// Write comment lines (`// text`) at the current indentation.
    pub fn write_comment(&mut self, text: &str) -> Result<&mut Self> {
        self.write_statements(&Statement::comment_lines(text))
    }

    /// Splice an already rendered block, indenting each of its non-empty
    /// lines to the current level. The text is not templated again.
    pub fn write_block(&mut self, block: &dyn CodeBlock) -> Result<&mut Self> {
        let code = block.render_with_indent(self.indent)?;
        for line in code.split_inclusive('\n') {
            if line != "\n" {
                self.write_indent();
            }
            self.buffer.push_str(line);
        }
        Ok(self)
    }

    /// Add a blank line (no indentation).
    pub fn blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> i32 {
        self.indent_level
    }

    /// The indentation unit this writer uses.
    pub fn indent(&self) -> Indent {
        self.indent
    }

    /// Consume the writer and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        self.buffer.push_str(&self.indent.prefix(self.indent_level));
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::go()
    }
}
