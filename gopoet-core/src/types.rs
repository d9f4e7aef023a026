//! Type references for generated Go code.
//!
//! A [`TypeDescriptor`] describes a Go type structurally: primitives, named
//! types from a package, and the pointer/slice/channel/map wrappers around
//! them. [`TypeRef::from_descriptor`] turns a descriptor into a [`TypeRef`],
//! which knows how to render the qualified type name and which imports the
//! name requires.
//!
//! ```
//! use gopoet_core::{TypeDescriptor, TypeRef, TypeReference};
//!
//! let buffers = TypeDescriptor::pointer(TypeDescriptor::slice(TypeDescriptor::pointer(
//!     TypeDescriptor::named("bytes", "Buffer"),
//! )));
//! let ty = TypeRef::from_descriptor(&buffers).unwrap();
//!
//! assert_eq!(ty.name(), "*[]*bytes.Buffer");
//! assert_eq!(ty.imports()[0].package(), "bytes");
//! ```

use serde::{Deserialize, Serialize};

use crate::{Error, Import, Result};

/// Named types whose name starts with this prefix are rendered without a
/// package qualifier, and with the prefix stripped from the name.
pub const UNQUALIFIED_PREFIX: &str = "_unqualified";

/// Built-in Go types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    String,
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
    /// Alias of `uint8`.
    Byte,
    /// Alias of `int32`.
    Rune,
    /// The built-in `error` interface.
    Error,
}

impl Primitive {
    /// The Go spelling of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uintptr => "uintptr",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::Byte => "byte",
            Self::Rune => "rune",
            Self::Error => "error",
        }
    }

    /// The type this primitive is an alias of, if any.
    pub fn underlying(&self) -> Primitive {
        match self {
            Self::Byte => Self::Uint8,
            Self::Rune => Self::Int32,
            other => *other,
        }
    }

    pub fn is_interface(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// Direction of a channel type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChanDir {
    #[default]
    Both,
    Send,
    Recv,
}

impl ChanDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Both => "chan",
            Self::Send => "chan<-",
            Self::Recv => "<-chan",
        }
    }
}

/// Whether a named type is a struct or an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedKind {
    #[default]
    Struct,
    Interface,
}

/// A structural description of a Go type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDescriptor {
    Primitive(Primitive),
    Named {
        package: String,
        name: String,
        #[serde(default)]
        kind: NamedKind,
    },
    Pointer(Box<TypeDescriptor>),
    Slice(Box<TypeDescriptor>),
    Map {
        key: Box<TypeDescriptor>,
        value: Box<TypeDescriptor>,
    },
    Chan {
        #[serde(default)]
        dir: ChanDir,
        elem: Box<TypeDescriptor>,
    },
    Function {
        package: String,
        name: String,
    },
}

impl TypeDescriptor {
    pub fn primitive(ty: Primitive) -> Self {
        Self::Primitive(ty)
    }

    /// A named struct type declared in `package`.
    pub fn named(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Named {
            package: package.into(),
            name: name.into(),
            kind: NamedKind::Struct,
        }
    }

    /// A named interface type declared in `package`.
    pub fn interface(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Named {
            package: package.into(),
            name: name.into(),
            kind: NamedKind::Interface,
        }
    }

    pub fn pointer(inner: TypeDescriptor) -> Self {
        Self::Pointer(Box::new(inner))
    }

    pub fn slice(inner: TypeDescriptor) -> Self {
        Self::Slice(Box::new(inner))
    }

    pub fn map(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn chan(dir: ChanDir, elem: TypeDescriptor) -> Self {
        Self::Chan {
            dir,
            elem: Box::new(elem),
        }
    }

    /// A package-level function.
    pub fn function(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Function {
            package: package.into(),
            name: name.into(),
        }
    }

    /// A package-level function from its qualified identity, e.g.
    /// `fmt.Println` or `golang.org/x/net/context.Background`.
    ///
    /// The identity is split at its last `.`.
    pub fn function_path(identity: &str) -> Result<Self> {
        match identity.rsplit_once('.') {
            Some((package, name)) if !package.is_empty() => Ok(Self::function(package, name)),
            _ => Err(Error::UnqualifiableFunction {
                identity: identity.to_string(),
            }),
        }
    }

    /// Whether values of this type are already reference-like, so that a
    /// pointer to it is rendered without `*`.
    pub fn is_interface(&self) -> bool {
        match self {
            Self::Named { kind, .. } => *kind == NamedKind::Interface,
            Self::Primitive(p) => p.is_interface(),
            _ => false,
        }
    }
}

impl From<Primitive> for TypeDescriptor {
    fn from(ty: Primitive) -> Self {
        Self::Primitive(ty)
    }
}

/// Capability shared by everything that can stand in a type position:
/// a renderable name plus the imports that name depends on.
pub trait TypeReference {
    /// The Go-syntax name, including prefixes and package qualifier.
    fn name(&self) -> String;
    /// Imports required to use this name. May be empty.
    fn imports(&self) -> Vec<Import>;
}

/// A named, primitive or local type behind zero or more pointer, slice and
/// channel markers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueRef {
    prefix: String,
    name: String,
    import: Option<Import>,
}

impl ValueRef {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The unqualified name without prefix.
    pub fn bare_name(&self) -> &str {
        &self.name
    }

    pub fn import(&self) -> Option<&Import> {
        self.import.as_ref()
    }

    fn render_name(&self, alias: Option<&str>) -> String {
        let qualifier = self
            .import
            .as_ref()
            .map(|i| i.qualifier_with(alias))
            .unwrap_or_default();
        format!("{}{}{}", self.prefix, qualifier, self.name)
    }
}

impl TypeReference for ValueRef {
    fn name(&self) -> String {
        self.render_name(None)
    }

    fn imports(&self) -> Vec<Import> {
        self.import.iter().cloned().collect()
    }
}

/// A package-level function.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FuncRef {
    import: Import,
    name: String,
}

impl FuncRef {
    pub fn bare_name(&self) -> &str {
        &self.name
    }

    pub fn import(&self) -> &Import {
        &self.import
    }

    fn render_name(&self, alias: Option<&str>) -> String {
        format!("{}{}", self.import.qualifier_with(alias), self.name)
    }
}

impl TypeReference for FuncRef {
    fn name(&self) -> String {
        self.render_name(None)
    }

    fn imports(&self) -> Vec<Import> {
        vec![self.import.clone()]
    }
}

/// A map type, possibly behind pointer/slice/channel markers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapRef {
    prefix: String,
    key: Box<TypeRef>,
    value: Box<TypeRef>,
}

impl MapRef {
    pub fn key(&self) -> &TypeRef {
        &self.key
    }

    pub fn value(&self) -> &TypeRef {
        &self.value
    }
}

impl TypeReference for MapRef {
    fn name(&self) -> String {
        format!(
            "{}map[{}]{}",
            self.prefix,
            self.key.name(),
            self.value.name()
        )
    }

    fn imports(&self) -> Vec<Import> {
        let mut imports = self.key.imports();
        imports.extend(self.value.imports());
        imports
    }
}

/// Overrides the rendered name of another reference, keeping its imports.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomNameRef {
    name: String,
    inner: Box<TypeRef>,
}

impl CustomNameRef {
    pub fn inner(&self) -> &TypeRef {
        &self.inner
    }
}

impl TypeReference for CustomNameRef {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn imports(&self) -> Vec<Import> {
        self.inner.imports()
    }
}

/// Overrides the alias of the owning import of another reference.
///
/// Map references have no owning import, so the alias leaves them unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AliasedRef {
    alias: String,
    inner: Box<TypeRef>,
}

impl AliasedRef {
    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn inner(&self) -> &TypeRef {
        &self.inner
    }
}

impl TypeReference for AliasedRef {
    fn name(&self) -> String {
        match self.inner.as_ref() {
            TypeRef::Value(v) => v.render_name(Some(&self.alias)),
            TypeRef::Function(f) => f.render_name(Some(&self.alias)),
            other => other.name(),
        }
    }

    fn imports(&self) -> Vec<Import> {
        match self.inner.as_ref() {
            TypeRef::Value(v) => v
                .import
                .iter()
                .map(|i| i.clone().with_alias(self.alias.clone()))
                .collect(),
            TypeRef::Function(f) => vec![f.import.clone().with_alias(self.alias.clone())],
            other => other.imports(),
        }
    }
}

/// A reference to a Go type or package-level function.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Value(ValueRef),
    Function(FuncRef),
    Map(MapRef),
    CustomName(CustomNameRef),
    Aliased(AliasedRef),
}

impl TypeRef {
    /// Derive a reference from a type descriptor.
    ///
    /// Pointer, slice and channel layers are peeled off in order, each
    /// contributing its marker to the prefix, before the innermost type is
    /// inspected. A pointer to an interface adds no `*`. A bare primitive
    /// yields the same reference as [`TypeRef::primitive`], and a named type
    /// with an empty package is local to the generated package.
    pub fn from_descriptor(desc: &TypeDescriptor) -> Result<Self> {
        if let TypeDescriptor::Function { package, name } = desc {
            return Self::function(package, name);
        }

        let mut prefix = String::new();
        let mut current = desc;

        loop {
            match current {
                TypeDescriptor::Pointer(inner) => {
                    if !inner.is_interface() {
                        prefix.push('*');
                    }
                    current = inner;
                }
                TypeDescriptor::Slice(inner) => {
                    prefix.push_str("[]");
                    current = inner;
                }
                TypeDescriptor::Chan { dir, elem } => {
                    prefix.push_str(dir.as_str());
                    prefix.push(' ');
                    current = elem;
                }
                TypeDescriptor::Named { package, name, .. } => {
                    if name.is_empty() {
                        return Err(Error::UntypedSample);
                    }
                    let (name, qualified) = match name.strip_prefix(UNQUALIFIED_PREFIX) {
                        Some(stripped) => (stripped, false),
                        None => (name.as_str(), true),
                    };
                    // no owning package: a type of the generated package itself
                    let import = (!package.is_empty())
                        .then(|| Import::new(package.as_str()).qualified(qualified));
                    return Ok(Self::Value(ValueRef {
                        prefix,
                        name: name.to_string(),
                        import,
                    }));
                }
                TypeDescriptor::Map { key, value } => {
                    return Ok(Self::Map(MapRef {
                        prefix,
                        key: Box::new(Self::from_descriptor(key)?),
                        value: Box::new(Self::from_descriptor(value)?),
                    }));
                }
                TypeDescriptor::Primitive(p) if prefix.is_empty() => {
                    return Ok(Self::primitive(*p));
                }
                TypeDescriptor::Primitive(p) => {
                    return Ok(Self::Value(ValueRef {
                        prefix,
                        name: p.as_str().to_string(),
                        import: None,
                    }));
                }
                // a function behind a pointer or slice still names a
                // package-level function
                TypeDescriptor::Function { package, name } => {
                    return match Self::function(package, name)? {
                        Self::Function(f) => Ok(Self::Value(ValueRef {
                            prefix,
                            name: f.name,
                            import: Some(f.import),
                        })),
                        other => Ok(other),
                    };
                }
            }
        }
    }

    /// Derive a reference whose owning package is referred to through `alias`.
    pub fn with_alias(desc: &TypeDescriptor, alias: impl Into<String>) -> Result<Self> {
        Ok(Self::Aliased(AliasedRef {
            alias: alias.into(),
            inner: Box::new(Self::from_descriptor(desc)?),
        }))
    }

    /// Derive a reference rendered as `name` regardless of the descriptor,
    /// e.g. for type aliases such as `byte`.
    pub fn with_custom_name(desc: &TypeDescriptor, name: impl Into<String>) -> Result<Self> {
        Ok(Self::custom_name(Self::from_descriptor(desc)?, name))
    }

    /// Wrap an existing reference with a custom rendered name.
    pub fn custom_name(inner: TypeRef, name: impl Into<String>) -> Self {
        Self::CustomName(CustomNameRef {
            name: name.into(),
            inner: Box::new(inner),
        })
    }

    /// A package-level function, e.g. `("fmt", "Println")`.
    pub fn function(package: &str, name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::UntypedSample);
        }
        if package.is_empty() {
            return Err(Error::UnqualifiableFunction {
                identity: name.to_string(),
            });
        }
        Ok(Self::Function(FuncRef {
            import: Import::new(package),
            name: name.to_string(),
        }))
    }

    /// A package-level function from its qualified identity, e.g. `fmt.Println`.
    pub fn function_path(identity: &str) -> Result<Self> {
        Self::from_descriptor(&TypeDescriptor::function_path(identity)?)
    }

    /// A type declared in the generated package itself: no import, no qualifier.
    pub fn local(name: impl Into<String>) -> Self {
        Self::Value(ValueRef {
            prefix: String::new(),
            name: name.into(),
            import: None,
        })
    }

    /// A pointer to a type declared in the generated package itself.
    pub fn local_pointer(name: impl Into<String>) -> Self {
        Self::Value(ValueRef {
            prefix: "*".to_string(),
            name: name.into(),
            import: None,
        })
    }

    pub fn primitive(ty: Primitive) -> Self {
        match ty {
            Primitive::Byte | Primitive::Rune => {
                Self::custom_name(Self::primitive(ty.underlying()), ty.as_str())
            }
            other => Self::local(other.as_str()),
        }
    }

    pub fn string() -> Self {
        Self::primitive(Primitive::String)
    }

    pub fn bool() -> Self {
        Self::primitive(Primitive::Bool)
    }

    pub fn int() -> Self {
        Self::primitive(Primitive::Int)
    }

    pub fn int8() -> Self {
        Self::primitive(Primitive::Int8)
    }

    pub fn int16() -> Self {
        Self::primitive(Primitive::Int16)
    }

    pub fn int32() -> Self {
        Self::primitive(Primitive::Int32)
    }

    pub fn int64() -> Self {
        Self::primitive(Primitive::Int64)
    }

    pub fn uint() -> Self {
        Self::primitive(Primitive::Uint)
    }

    pub fn uint8() -> Self {
        Self::primitive(Primitive::Uint8)
    }

    pub fn uint16() -> Self {
        Self::primitive(Primitive::Uint16)
    }

    pub fn uint32() -> Self {
        Self::primitive(Primitive::Uint32)
    }

    pub fn uint64() -> Self {
        Self::primitive(Primitive::Uint64)
    }

    pub fn uintptr() -> Self {
        Self::primitive(Primitive::Uintptr)
    }

    pub fn float32() -> Self {
        Self::primitive(Primitive::Float32)
    }

    pub fn float64() -> Self {
        Self::primitive(Primitive::Float64)
    }

    pub fn complex64() -> Self {
        Self::primitive(Primitive::Complex64)
    }

    pub fn complex128() -> Self {
        Self::primitive(Primitive::Complex128)
    }

    pub fn byte() -> Self {
        Self::primitive(Primitive::Byte)
    }

    pub fn rune() -> Self {
        Self::primitive(Primitive::Rune)
    }

    pub fn error() -> Self {
        Self::primitive(Primitive::Error)
    }
}

impl TypeReference for TypeRef {
    fn name(&self) -> String {
        match self {
            Self::Value(r) => r.name(),
            Self::Function(r) => r.name(),
            Self::Map(r) => r.name(),
            Self::CustomName(r) => r.name(),
            Self::Aliased(r) => r.name(),
        }
    }

    fn imports(&self) -> Vec<Import> {
        match self {
            Self::Value(r) => r.imports(),
            Self::Function(r) => r.imports(),
            Self::Map(r) => r.imports(),
            Self::CustomName(r) => r.imports(),
            Self::Aliased(r) => r.imports(),
        }
    }
}

impl From<Primitive> for TypeRef {
    fn from(ty: Primitive) -> Self {
        Self::primitive(ty)
    }
}
