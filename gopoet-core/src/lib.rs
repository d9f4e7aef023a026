//! Core machinery for generating Go source code.
//!
//! This crate provides the language plumbing that the declaration builders
//! in `gopoet` are composed from.
//!
//! # Module Organization
//!
//! - [`template`] - `$L`/`$S`/`$T` format strings ([`render_template`], [`Arg`])
//! - [`statement`] - Templated lines with indent deltas ([`Statement`])
//! - [`code_writer`] - Indentation-tracking output buffer ([`CodeWriter`])
//! - [`types`] - Type descriptors and references ([`TypeDescriptor`], [`TypeRef`])
//! - [`import`] - Imported packages ([`Import`])
//! - [`block`] - The [`CodeBlock`] trait implemented by declarations

pub mod block;
pub mod code_writer;
pub mod error;
pub mod import;
pub mod indent;
pub mod statement;
pub mod template;
pub mod types;

pub use block::CodeBlock;
pub use code_writer::CodeWriter;
pub use error::{Error, Result};
pub use import::Import;
pub use indent::Indent;
pub use statement::Statement;
pub use template::{Arg, TEMPLATING_CHAR, render_template};
pub use types::{
    AliasedRef, ChanDir, CustomNameRef, FuncRef, MapRef, NamedKind, Primitive, TypeDescriptor,
    TypeRef, TypeReference, UNQUALIFIED_PREFIX, ValueRef,
};
