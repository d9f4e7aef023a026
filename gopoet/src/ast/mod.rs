//! Go declaration builders for functions, methods, structs, interfaces,
//! type declarations, variables and comments.
//!
//! Every builder implements [`CodeBlock`](gopoet_core::CodeBlock), so it can
//! be rendered on its own or added to a [`FileSpec`](crate::FileSpec).

mod aliases;
mod comment;
mod fns;
mod interfaces;
mod structs;
mod vars;

pub use aliases::TypeAliasSpec;
pub use comment::Comment;
pub use fns::{FuncSpec, Param, Receiver};
pub use interfaces::InterfaceSpec;
pub use structs::{Field, StructSpec};
pub use vars::{Variable, VariableGrouping};
