//! Format-string templating for generated code.
//!
//! A format string may contain three directives, each consuming the next
//! positional argument:
//!
//! - `$L` - the argument as a literal (numbers, identifiers, expressions)
//! - `$S` - the argument as a double-quoted Go string literal
//! - `$T` - the argument's qualified type name; it must be a type reference
//!
//! ```
//! use gopoet_core::{args, render_template, TypeRef};
//!
//! let println = TypeRef::function_path("fmt.Println").unwrap();
//! let code = render_template("$T($S, $L)", &args![println, "n =", 42]).unwrap();
//! assert_eq!(code, "fmt.Println(\"n =\", 42)");
//! ```

use std::fmt;

use crate::{Error, Import, Result, TypeRef, TypeReference};

/// The character that starts a directive.
pub const TEMPLATING_CHAR: char = '$';

/// A positional argument for a format string.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// A value already converted to its textual form.
    Literal(String),
    /// A type or function reference.
    Type(TypeRef),
}

impl Arg {
    /// A literal argument from anything displayable.
    pub fn literal(value: impl fmt::Display) -> Self {
        Self::Literal(value.to_string())
    }

    /// A type argument.
    pub fn ty(ty: impl Into<TypeRef>) -> Self {
        Self::Type(ty.into())
    }

    /// The type reference, for type arguments.
    pub fn type_ref(&self) -> Option<&TypeRef> {
        match self {
            Self::Type(ty) => Some(ty),
            Self::Literal(_) => None,
        }
    }

    /// Imports required by this argument.
    pub fn imports(&self) -> Vec<Import> {
        self.type_ref().map(|t| t.imports()).unwrap_or_default()
    }

    fn text(&self) -> String {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Type(ty) => ty.name(),
        }
    }
}

impl From<TypeRef> for Arg {
    fn from(ty: TypeRef) -> Self {
        Self::Type(ty)
    }
}

impl From<&TypeRef> for Arg {
    fn from(ty: &TypeRef) -> Self {
        Self::Type(ty.clone())
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Self::Literal(value.clone())
    }
}

macro_rules! literal_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Self::Literal(value.to_string())
                }
            }
        )*
    };
}

literal_from!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// Build a `Vec<Arg>` from heterogeneous values.
///
/// ```
/// use gopoet_core::{args, Arg};
///
/// let args: Vec<Arg> = args!["a", 1, true];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        vec![$($crate::Arg::from($arg)),+]
    };
}

/// Substitute the directives of `format` with `args`, left to right.
///
/// A trailing `$` with nothing after it is copied as-is. Arguments left over
/// once every directive has been filled are ignored.
pub fn render_template(format: &str, args: &[Arg]) -> Result<String> {
    let mut buffer = String::with_capacity(format.len());
    let mut remaining = args.iter();
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        if c != TEMPLATING_CHAR {
            buffer.push(c);
            continue;
        }

        let Some(directive) = chars.next() else {
            buffer.push(c);
            break;
        };

        if !matches!(directive, 'L' | 'S' | 'T') {
            return Err(Error::UnknownDirective {
                format: format.to_string(),
                directive,
            });
        }

        let arg = remaining.next().ok_or_else(|| Error::NotEnoughArguments {
            format: format.to_string(),
            given: args.len(),
        })?;

        match directive {
            'L' => buffer.push_str(&arg.text()),
            'S' => buffer.push_str(&quote(&arg.text())),
            _ => match arg {
                Arg::Type(ty) => buffer.push_str(&ty.name()),
                Arg::Literal(value) => {
                    return Err(Error::TypeMismatch {
                        format: format.to_string(),
                        found: format!("literal {:?}", value),
                    });
                }
            },
        }
    }

    Ok(buffer)
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn println() -> TypeRef {
        TypeRef::function_path("fmt.Println").unwrap()
    }

    fn render(format: &str, args: Vec<Arg>) -> Result<String> {
        render_template(format, &args)
    }

    #[test]
    fn test_type_with_name() {
        let actual = render("$T()", args![println()]).unwrap();
        assert_eq!(actual, "fmt.Println()");
    }

    #[test]
    fn test_with_string() {
        let actual = render("$T($S)", args![println(), "Hello World"]).unwrap();
        assert_eq!(actual, "fmt.Println(\"Hello World\")");
    }

    #[test]
    fn test_int_literals() {
        let args = args![1, 2, TypeRef::int()];
        let actual = render("literal $L string $S type $T", args).unwrap();
        assert_eq!(actual, "literal 1 string \"2\" type int");
    }

    #[test]
    fn test_quotes_are_escaped() {
        let actual = render("$S", args!["say \"hi\""]).unwrap();
        assert_eq!(actual, "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_literal_of_type_renders_name() {
        let actual = render("$L", args![TypeRef::string()]).unwrap();
        assert_eq!(actual, "string");
    }

    #[test]
    fn test_no_directives() {
        let actual = render_template("return nil", &[]).unwrap();
        assert_eq!(actual, "return nil");
    }

    #[test]
    fn test_trailing_sentinel_is_literal() {
        let actual = render("cost $L$", args![5]).unwrap();
        assert_eq!(actual, "cost 5$");
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let actual = render("$L", args!["a", "b"]).unwrap();
        assert_eq!(actual, "a");
    }

    #[test]
    fn test_not_enough_arguments() {
        let err = render("$L $L", args!["a"]).unwrap_err();
        assert_eq!(
            err,
            Error::NotEnoughArguments {
                format: "$L $L".to_string(),
                given: 1,
            }
        );
    }

    #[test]
    fn test_unknown_directive() {
        let err = render("$X", args!["a"]).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownDirective {
                format: "$X".to_string(),
                directive: 'X',
            }
        );
    }

    #[test]
    fn test_type_mismatch() {
        let err = render("var a $T", args!["int"]).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_arg_imports() {
        assert_eq!(Arg::from(println()).imports(), vec![Import::new("fmt")]);
        assert!(Arg::from("x").imports().is_empty());
    }
}
