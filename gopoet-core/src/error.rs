use miette::Diagnostic;
use thiserror::Error;

/// Result type for gopoet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while building or rendering Go code.
///
/// Every variant is a caller bug rather than a transient condition, so
/// nothing here is worth retrying.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum Error {
    #[error("unrecognized directive '${directive}' in format string '{format}'")]
    #[diagnostic(
        code(gopoet::template::unknown_directive),
        help("supported directives are $L (literal), $S (string) and $T (type)")
    )]
    UnknownDirective { format: String, directive: char },

    #[error("not enough arguments for format string '{format}', got {given}")]
    #[diagnostic(code(gopoet::template::not_enough_arguments))]
    NotEnoughArguments { format: String, given: usize },

    #[error("$T in format string '{format}' must be a type reference, got {found}")]
    #[diagnostic(
        code(gopoet::template::type_mismatch),
        help("wrap the argument with `Arg::ty` or pass a `TypeRef`")
    )]
    TypeMismatch { format: String, found: String },

    #[error("cannot derive a type reference from a descriptor without a type name")]
    #[diagnostic(code(gopoet::types::untyped))]
    UntypedSample,

    #[error("function identity '{identity}' has no package qualifier")]
    #[diagnostic(
        code(gopoet::types::unqualifiable_function),
        help("use the fully qualified form, e.g. 'fmt.Println'")
    )]
    UnqualifiableFunction { identity: String },

    #[error("init function must be named 'init', got '{name}'")]
    #[diagnostic(code(gopoet::file::invalid_init_name))]
    InvalidInitName { name: String },

    #[error("function '{function}' mixes named and unnamed result parameters")]
    #[diagnostic(
        code(gopoet::function::mixed_result_names),
        help("either name every result parameter or none of them")
    )]
    MixedResultNames { function: String },
}
