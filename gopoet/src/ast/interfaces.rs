//! Go interface builder.

use gopoet_core::{
    Arg, CodeBlock, CodeWriter, Import, Indent, Result, Statement, TypeRef, TypeReference,
};

use super::FuncSpec;

/// Builder for Go interfaces.
///
/// Methods are given as [`FuncSpec`]s; only their comment and signature are
/// rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceSpec {
    name: String,
    comment: Option<String>,
    embedded: Vec<TypeRef>,
    methods: Vec<FuncSpec>,
}

impl InterfaceSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            embedded: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn method(mut self, method: FuncSpec) -> Self {
        self.methods.push(method);
        self
    }

    pub fn embed_interface(mut self, interface: impl Into<TypeRef>) -> Self {
        self.embedded.push(interface.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn methods(&self) -> &[FuncSpec] {
        &self.methods
    }

    pub fn embedded(&self) -> &[TypeRef] {
        &self.embedded
    }

    pub fn type_ref(&self) -> TypeRef {
        TypeRef::local(&self.name)
    }
}

impl CodeBlock for InterfaceSpec {
    fn render_with_indent(&self, indent: Indent) -> Result<String> {
        let mut writer = CodeWriter::new(indent);

        if let Some(comment) = &self.comment {
            writer.write_comment(comment)?;
        }

        writer.write_statement(&Statement::block_start(
            "type $L interface",
            vec![Arg::from(&self.name)],
        ))?;

        for embedded in &self.embedded {
            writer.write_statement(&Statement::line("$T", vec![Arg::from(embedded)]))?;
        }

        for method in &self.methods {
            if let Some(comment) = method.comment_text() {
                writer.write_comment(comment)?;
            }
            let (signature, args) = method.signature()?;
            writer.write_statement(&Statement::line(signature, args))?;
        }

        writer.write_statement(&Statement::block_end())?;
        Ok(writer.build())
    }

    fn imports(&self) -> Vec<Import> {
        let mut imports: Vec<Import> = self
            .methods
            .iter()
            .flat_map(FuncSpec::signature_imports)
            .collect();
        imports.extend(self.embedded.iter().flat_map(TypeReference::imports));
        imports
    }
}

impl TypeReference for InterfaceSpec {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn imports(&self) -> Vec<Import> {
        Vec::new()
    }
}

impl From<&InterfaceSpec> for TypeRef {
    fn from(spec: &InterfaceSpec) -> Self {
        spec.type_ref()
    }
}
