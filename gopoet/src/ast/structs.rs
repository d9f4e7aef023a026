//! Go struct builder.

use gopoet_core::{
    Arg, CodeBlock, CodeWriter, Import, Indent, Result, Statement, TypeRef, TypeReference,
};

use super::FuncSpec;

/// A field in a Go struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    ty: TypeRef,
    tag: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            tag: None,
        }
    }

    /// Attach a struct tag, written between backticks.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    fn statement(&self) -> Statement {
        let mut args = vec![Arg::from(&self.name), Arg::from(&self.ty)];
        match self.tag.as_deref().filter(|t| !t.is_empty()) {
            Some(tag) => {
                args.push(Arg::from(tag));
                Statement::line("$L $T `$L`", args)
            }
            None => Statement::line("$L $T", args),
        }
    }
}

/// Builder for Go structs.
///
/// Methods attached with [`StructSpec::attach_method`] are rendered right
/// after the type declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct StructSpec {
    name: String,
    comment: Option<String>,
    fields: Vec<Field>,
    methods: Vec<FuncSpec>,
}

impl StructSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        self.fields.push(Field::new(name, ty));
        self
    }

    pub fn field_with_tag(
        mut self,
        name: impl Into<String>,
        ty: impl Into<TypeRef>,
        tag: impl Into<String>,
    ) -> Self {
        self.fields.push(Field::new(name, ty).tag(tag));
        self
    }

    pub fn push_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// A new method with this struct, or a pointer to it, as receiver.
    ///
    /// The method is not attached; pass it to [`StructSpec::attach_method`]
    /// or add it to a file on its own.
    pub fn method(
        &self,
        name: impl Into<String>,
        receiver_name: impl Into<String>,
        pointer_receiver: bool,
    ) -> FuncSpec {
        FuncSpec::method(name, receiver_name, self.receiver_type(pointer_receiver))
    }

    /// Turn an existing function into a method on this struct.
    pub fn method_from_function(
        &self,
        receiver_name: impl Into<String>,
        pointer_receiver: bool,
        function: FuncSpec,
    ) -> FuncSpec {
        function.receiver(super::Receiver::new(
            receiver_name,
            self.receiver_type(pointer_receiver),
        ))
    }

    pub fn attach_method(mut self, method: FuncSpec) -> Self {
        self.methods.push(method);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn methods(&self) -> &[FuncSpec] {
        &self.methods
    }

    /// A reference to this struct type.
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::local(&self.name)
    }

    /// A reference to a pointer to this struct type.
    pub fn pointer_type_ref(&self) -> TypeRef {
        TypeRef::local_pointer(&self.name)
    }

    fn receiver_type(&self, pointer: bool) -> TypeRef {
        if pointer {
            self.pointer_type_ref()
        } else {
            self.type_ref()
        }
    }
}

impl CodeBlock for StructSpec {
    fn render_with_indent(&self, indent: Indent) -> Result<String> {
        let mut writer = CodeWriter::new(indent);

        if let Some(comment) = &self.comment {
            writer.write_comment(comment)?;
        }

        writer.write_statement(&Statement::block_start(
            "type $L struct",
            vec![Arg::from(&self.name)],
        ))?;
        for field in &self.fields {
            writer.write_statement(&field.statement())?;
        }
        writer.write_statement(&Statement::block_end())?;

        for method in &self.methods {
            writer.blank().write_block(method)?;
        }

        Ok(writer.build())
    }

    fn imports(&self) -> Vec<Import> {
        let mut imports: Vec<Import> = self.fields.iter().flat_map(|f| f.ty.imports()).collect();
        imports.extend(self.methods.iter().flat_map(CodeBlock::imports));
        imports
    }
}

impl TypeReference for StructSpec {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn imports(&self) -> Vec<Import> {
        Vec::new()
    }
}

impl From<&StructSpec> for TypeRef {
    fn from(spec: &StructSpec) -> Self {
        spec.type_ref()
    }
}
