//! Go type declarations (`type Name Underlying`).

use gopoet_core::{
    Arg, CodeBlock, CodeWriter, Import, Indent, Result, Statement, TypeRef, TypeReference,
};

/// Builder for a type declaration naming another type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAliasSpec {
    name: String,
    underlying: TypeRef,
    comment: Option<String>,
}

impl TypeAliasSpec {
    pub fn new(name: impl Into<String>, underlying: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            underlying: underlying.into(),
            comment: None,
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn underlying(&self) -> &TypeRef {
        &self.underlying
    }

    pub fn type_ref(&self) -> TypeRef {
        TypeRef::local(&self.name)
    }
}

impl CodeBlock for TypeAliasSpec {
    fn render_with_indent(&self, indent: Indent) -> Result<String> {
        let mut writer = CodeWriter::new(indent);
        if let Some(comment) = &self.comment {
            writer.write_comment(comment)?;
        }
        writer.write_statement(&Statement::line(
            "type $L $T",
            vec![Arg::from(&self.name), Arg::from(&self.underlying)],
        ))?;
        Ok(writer.build())
    }

    fn imports(&self) -> Vec<Import> {
        self.underlying.imports()
    }
}

impl TypeReference for TypeAliasSpec {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn imports(&self) -> Vec<Import> {
        Vec::new()
    }
}

impl From<&TypeAliasSpec> for TypeRef {
    fn from(spec: &TypeAliasSpec) -> Self {
        spec.type_ref()
    }
}
