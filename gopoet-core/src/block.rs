//! The CodeBlock trait shared by every declaration.

use crate::{Import, Indent, Result};

/// A block of code that can be included in a Go file.
///
/// Implementors render themselves to text and report the imports their
/// text needs. Duplicate imports are allowed here; the file deduplicates.
pub trait CodeBlock {
    /// Render the block with the given indentation unit, ending with a newline.
    fn render_with_indent(&self, indent: Indent) -> Result<String>;

    /// Render the block with tab indentation.
    fn render(&self) -> Result<String> {
        self.render_with_indent(Indent::GO)
    }

    /// Imports required by this block, in order of appearance.
    fn imports(&self) -> Vec<Import>;
}

impl<T: CodeBlock + ?Sized> CodeBlock for &T {
    fn render_with_indent(&self, indent: Indent) -> Result<String> {
        (*self).render_with_indent(indent)
    }

    fn imports(&self) -> Vec<Import> {
        (*self).imports()
    }
}

impl<T: CodeBlock + ?Sized> CodeBlock for Box<T> {
    fn render_with_indent(&self, indent: Indent) -> Result<String> {
        self.as_ref().render_with_indent(indent)
    }

    fn imports(&self) -> Vec<Import> {
        self.as_ref().imports()
    }
}
