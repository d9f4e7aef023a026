//! Fluent builders for generating Go source code.
//!
//! Declarations are assembled from templated statements (see
//! [`render_template`]) and type references (see [`TypeRef`]); a
//! [`FileSpec`] gathers the imports every declaration needs and writes a
//! single deduplicated import block.
//!
//! ```
//! use gopoet::{args, CodeBlock, FileSpec, FuncSpec, StructSpec, TypeDescriptor, TypeRef};
//!
//! let buffer = TypeRef::from_descriptor(&TypeDescriptor::pointer(
//!     TypeDescriptor::named("bytes", "Buffer"),
//! ))?;
//!
//! let user = StructSpec::new("User").field("Name", TypeRef::string());
//! let write = user
//!     .method("WriteTo", "u", true)
//!     .parameter("b", buffer)
//!     .statement("b.WriteString(u.Name)", args![]);
//!
//! let file = FileSpec::new("models").code_block(user.attach_method(write));
//! let source = file.render()?;
//!
//! assert!(source.starts_with("package models\n\nimport (\n\t\"bytes\"\n)\n\n"));
//! assert!(source.contains("func (u *User) WriteTo(b *bytes.Buffer) {\n"));
//! # Ok::<(), gopoet::Error>(())
//! ```

pub mod ast;
mod file;
mod imports;

pub use ast::{
    Comment, Field, FuncSpec, InterfaceSpec, Param, Receiver, StructSpec, TypeAliasSpec, Variable,
    VariableGrouping,
};
pub use file::FileSpec;
pub use imports::{BLANK_IDENTIFIER, ImportCollector};

pub use gopoet_core::{
    AliasedRef, Arg, ChanDir, CodeBlock, CodeWriter, CustomNameRef, Error, FuncRef, Import, Indent,
    MapRef, NamedKind, Primitive, Result, Statement, TEMPLATING_CHAR, TypeDescriptor, TypeRef,
    TypeReference, UNQUALIFIED_PREFIX, ValueRef, args, render_template,
};
