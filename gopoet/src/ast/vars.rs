//! Package-level variables and constants.

use gopoet_core::{
    Arg, CodeBlock, CodeWriter, Import, Indent, Result, Statement, TypeRef, TypeReference,
};

/// A `var` or `const` declaration.
///
/// The value is a templated statement; an empty format leaves the
/// declaration without a value (`var name type`).
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
    ty: TypeRef,
    comment: Option<String>,
    value: Statement,
    constant: bool,
    in_group: bool,
}

impl Variable {
    /// A `var` declaration.
    pub fn var(
        name: impl Into<String>,
        ty: impl Into<TypeRef>,
        format: impl Into<String>,
        args: Vec<Arg>,
    ) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            comment: None,
            value: Statement::line(format, args),
            constant: false,
            in_group: false,
        }
    }

    /// A `const` declaration.
    pub fn constant(
        name: impl Into<String>,
        ty: impl Into<TypeRef>,
        format: impl Into<String>,
        args: Vec<Arg>,
    ) -> Self {
        Self {
            constant: true,
            ..Self::var(name, ty, format, args)
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    pub fn is_constant(&self) -> bool {
        self.constant
    }

    /// The comment lines followed by the declaration.
    pub fn statements(&self) -> Vec<Statement> {
        let mut statements = self
            .comment
            .as_deref()
            .map(Statement::comment_lines)
            .unwrap_or_default();
        statements.push(self.declaration());
        statements
    }

    fn declaration(&self) -> Statement {
        let keyword = match (self.in_group, self.constant) {
            (true, _) => "",
            (false, true) => "const ",
            (false, false) => "var ",
        };
        let args = vec![
            Arg::from(keyword),
            Arg::from(&self.name),
            Arg::from(&self.ty),
        ];

        if self.value.is_empty() {
            Statement::line("$L$L $T", args)
        } else {
            Statement::line("$L$L $T = ", args).append(self.value.clone())
        }
    }
}

impl CodeBlock for Variable {
    fn render_with_indent(&self, indent: Indent) -> Result<String> {
        let mut writer = CodeWriter::new(indent);
        writer.write_statements(&self.statements())?;
        Ok(writer.build())
    }

    fn imports(&self) -> Vec<Import> {
        let mut imports = self.ty.imports();
        imports.extend(self.value.imports());
        imports
    }
}

/// Variables and constants rendered as `const ( ... )` and `var ( ... )`
/// groups, constants first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableGrouping {
    variables: Vec<Variable>,
}

impl VariableGrouping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variable(
        self,
        name: impl Into<String>,
        ty: impl Into<TypeRef>,
        format: impl Into<String>,
        args: Vec<Arg>,
    ) -> Self {
        self.push(Variable::var(name, ty, format, args))
    }

    pub fn constant(
        self,
        name: impl Into<String>,
        ty: impl Into<TypeRef>,
        format: impl Into<String>,
        args: Vec<Arg>,
    ) -> Self {
        self.push(Variable::constant(name, ty, format, args))
    }

    /// Add a prebuilt declaration; it loses its own `var`/`const` keyword.
    pub fn push(mut self, mut variable: Variable) -> Self {
        variable.in_group = true;
        self.variables.push(variable);
        self
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn statements(&self) -> Vec<Statement> {
        let (constants, variables): (Vec<&Variable>, Vec<&Variable>) =
            self.variables.iter().partition(|v| v.constant);

        let mut statements = group("const", &constants);
        if !constants.is_empty() && !variables.is_empty() {
            statements.push(Statement::blank());
        }
        statements.extend(group("var", &variables));
        statements
    }
}

fn group(keyword: &str, members: &[&Variable]) -> Vec<Statement> {
    if members.is_empty() {
        return Vec::new();
    }

    let mut statements = vec![Statement::new(0, 1, "$L (", vec![Arg::from(keyword)])];
    statements.extend(members.iter().flat_map(|v| v.statements()));
    statements.push(Statement::new(-1, 0, ")", Vec::new()));
    statements
}

impl CodeBlock for VariableGrouping {
    fn render_with_indent(&self, indent: Indent) -> Result<String> {
        let mut writer = CodeWriter::new(indent);
        writer.write_statements(&self.statements())?;
        Ok(writer.build())
    }

    fn imports(&self) -> Vec<Import> {
        self.variables.iter().flat_map(CodeBlock::imports).collect()
    }
}
