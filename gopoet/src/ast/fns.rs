//! Go function and method builder.

use gopoet_core::{
    Arg, CodeBlock, CodeWriter, Error, Import, Indent, Result, Statement, TypeRef, TypeReference,
};

/// A parameter (or result parameter) of a Go function.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    name: String,
    ty: TypeRef,
    variadic: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            variadic: false,
        }
    }

    /// Mark the parameter as variadic (`name ...type`).
    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }
}

/// The receiver clause of a method, `(name Type)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Receiver {
    name: String,
    ty: TypeRef,
}

impl Receiver {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }
}

/// Builder for Go functions and methods.
///
/// A function with a [`Receiver`] renders as a method.
///
/// # Example
///
/// ```
/// use gopoet::{args, CodeBlock, FuncSpec, TypeRef};
///
/// let println = TypeRef::function_path("fmt.Println")?;
/// let main = FuncSpec::new("main").statement("$T($S)", args![println, "Hello"]);
///
/// assert_eq!(main.render()?, "func main() {\n\tfmt.Println(\"Hello\")\n}\n");
/// # Ok::<(), gopoet::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FuncSpec {
    name: String,
    comment: Option<String>,
    receiver: Option<Receiver>,
    params: Vec<Param>,
    results: Vec<Param>,
    body: Vec<Statement>,
}

impl FuncSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            receiver: None,
            params: Vec::new(),
            results: Vec::new(),
            body: Vec::new(),
        }
    }

    /// A method on `receiver_ty`, bound to `receiver_name` in its body.
    pub fn method(
        name: impl Into<String>,
        receiver_name: impl Into<String>,
        receiver_ty: impl Into<TypeRef>,
    ) -> Self {
        Self::new(name).receiver(Receiver::new(receiver_name, receiver_ty))
    }

    /// Set (or replace) the receiver, turning the function into a method.
    pub fn receiver(mut self, receiver: Receiver) -> Self {
        self.receiver = Some(receiver);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn parameter(mut self, name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        self.params.push(Param::new(name, ty));
        self
    }

    pub fn variadic_parameter(mut self, name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        self.params.push(Param::new(name, ty).variadic());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Add a result parameter. An empty name leaves the result unnamed.
    pub fn result_parameter(mut self, name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        self.results.push(Param::new(name, ty));
        self
    }

    /// Add a line to the function body.
    pub fn statement(mut self, format: impl Into<String>, args: Vec<Arg>) -> Self {
        self.body.push(Statement::line(format, args));
        self
    }

    /// Add a line ending in `{`; following statements are indented.
    pub fn block_start(mut self, format: impl Into<String>, args: Vec<Arg>) -> Self {
        self.body.push(Statement::block_start(format, args));
        self
    }

    /// Close the innermost block opened with [`FuncSpec::block_start`].
    pub fn block_end(mut self) -> Self {
        self.body.push(Statement::block_end());
        self
    }

    /// Add a prebuilt statement, keeping its indent deltas.
    pub fn push_statement(mut self, statement: Statement) -> Self {
        self.body.push(statement);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment_text(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn receiver_clause(&self) -> Option<&Receiver> {
        self.receiver.as_ref()
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn results(&self) -> &[Param] {
        &self.results
    }

    pub fn statements(&self) -> &[Statement] {
        &self.body
    }

    pub fn is_method(&self) -> bool {
        self.receiver.is_some()
    }

    /// The signature without the `func` keyword or receiver, as a format
    /// string and its arguments: `name(a int, b ...string) (n int, err error)`.
    ///
    /// Fails when only some of several result parameters are named.
    pub fn signature(&self) -> Result<(String, Vec<Arg>)> {
        let mut format = String::from("$L(");
        let mut args = vec![Arg::from(&self.name)];

        let params: Vec<&str> = self
            .params
            .iter()
            .map(|p| if p.variadic { "$L ...$T" } else { "$L $T" })
            .collect();
        format.push_str(&params.join(", "));
        format.push(')');
        for param in &self.params {
            args.push(Arg::from(&param.name));
            args.push(Arg::from(&param.ty));
        }

        match self.results.as_slice() {
            [] => {}
            [single] if single.name.is_empty() => {
                format.push_str(" $T");
                args.push(Arg::from(&single.ty));
            }
            results => {
                let named = results.iter().filter(|r| !r.name.is_empty()).count();
                if named != 0 && named != results.len() {
                    return Err(Error::MixedResultNames {
                        function: self.name.clone(),
                    });
                }

                let mut parts = Vec::with_capacity(results.len());
                for result in results {
                    if result.name.is_empty() {
                        parts.push("$T");
                    } else {
                        parts.push("$L $T");
                        args.push(Arg::from(&result.name));
                    }
                    args.push(Arg::from(&result.ty));
                }
                format.push_str(" (");
                format.push_str(&parts.join(", "));
                format.push(')');
            }
        }

        Ok((format, args))
    }

    /// Imports used by [`FuncSpec::signature`]: parameter types, then
    /// result types. Body and receiver are not included.
    pub fn signature_imports(&self) -> Vec<Import> {
        self.params
            .iter()
            .chain(&self.results)
            .flat_map(|p| p.ty.imports())
            .collect()
    }

    /// The opening line: `func [(recv T) ]signature {`.
    fn header(&self) -> Result<Statement> {
        let (signature, signature_args) = self.signature()?;

        let (prefix, mut args) = match &self.receiver {
            Some(receiver) => (
                "func ($L $T) ",
                vec![Arg::from(&receiver.name), Arg::from(&receiver.ty)],
            ),
            None => ("func ", Vec::new()),
        };
        args.extend(signature_args);

        Ok(Statement::block_start(format!("{prefix}{signature}"), args))
    }
}

impl CodeBlock for FuncSpec {
    fn render_with_indent(&self, indent: Indent) -> Result<String> {
        let mut writer = CodeWriter::new(indent);

        if let Some(comment) = &self.comment {
            writer.write_comment(comment)?;
        }

        writer
            .write_statement(&self.header()?)?
            .write_statements(&self.body)?
            .write_statement(&Statement::block_end())?;

        Ok(writer.build())
    }

    fn imports(&self) -> Vec<Import> {
        let mut imports: Vec<Import> = self.body.iter().flat_map(Statement::imports).collect();
        imports.extend(self.signature_imports());
        if let Some(receiver) = &self.receiver {
            imports.extend(receiver.ty.imports());
        }
        imports
    }
}
