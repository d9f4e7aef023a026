//! Whole Go source files.

use gopoet_core::{Arg, CodeBlock, Error, Import, Indent, Result, Statement, TypeRef};
use tracing::debug;

use crate::ImportCollector;
use crate::ast::{Comment, FuncSpec, Variable, VariableGrouping};

/// The only name Go accepts for a package initializer.
const INIT_FUNCTION: &str = "init";

/// A `.go` source file: package clause, import block and declarations.
///
/// Imports are gathered from every declaration when the file is rendered,
/// so declarations never need to list them by hand.
///
/// # Example
///
/// ```
/// use gopoet::{args, CodeBlock, FileSpec, FuncSpec, TypeRef};
///
/// let println = TypeRef::function_path("fmt.Println")?;
/// let file = FileSpec::new("main")
///     .code_block(FuncSpec::new("main").statement("$T($S)", args![println, "Hello"]));
///
/// assert_eq!(
///     file.render()?,
///     "package main\n\nimport (\n\t\"fmt\"\n)\n\nfunc main() {\n\tfmt.Println(\"Hello\")\n}\n\n"
/// );
/// # Ok::<(), gopoet::Error>(())
/// ```
#[derive(Default)]
pub struct FileSpec {
    package: String,
    comment: Option<String>,
    init_imports: Vec<Import>,
    init: Option<FuncSpec>,
    blocks: Vec<Box<dyn CodeBlock>>,
}

impl FileSpec {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }

    /// A comment written above the package clause.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Add a declaration to the file.
    pub fn code_block(mut self, block: impl CodeBlock + 'static) -> Self {
        self.blocks.push(Box::new(block));
        self
    }

    /// Import a package only for its side effects (`_ "package"`).
    pub fn initialization_import(mut self, import: Import) -> Self {
        self.init_imports.push(import);
        self
    }

    /// Set the package initializer, rendered before every other declaration.
    pub fn init_function(mut self, function: FuncSpec) -> Result<Self> {
        if function.name() != INIT_FUNCTION {
            return Err(Error::InvalidInitName {
                name: function.name().to_string(),
            });
        }
        self.init = Some(function);
        Ok(self)
    }

    /// Add `var name type = value`. An empty format declares no value.
    pub fn global_variable(
        self,
        name: impl Into<String>,
        ty: impl Into<TypeRef>,
        format: impl Into<String>,
        args: Vec<Arg>,
    ) -> Self {
        self.code_block(Variable::var(name, ty, format, args))
    }

    /// Add `const name type = value`.
    pub fn global_constant(
        self,
        name: impl Into<String>,
        ty: impl Into<TypeRef>,
        format: impl Into<String>,
        args: Vec<Arg>,
    ) -> Self {
        self.code_block(Variable::constant(name, ty, format, args))
    }

    /// Add a grouping of variables and constants, filled in by `build`.
    ///
    /// ```
    /// use gopoet::{args, CodeBlock, FileSpec, TypeRef};
    ///
    /// let file = FileSpec::new("config").variable_grouping(|g| {
    ///     g.constant("Port", TypeRef::int(), "$L", args![8080])
    ///         .variable("host", TypeRef::string(), "$S", args!["localhost"])
    /// });
    /// assert!(file.render()?.contains("const (\n\tPort int = 8080\n)\n\nvar ("));
    /// # Ok::<(), gopoet::Error>(())
    /// ```
    pub fn variable_grouping(
        self,
        build: impl FnOnce(VariableGrouping) -> VariableGrouping,
    ) -> Self {
        self.code_block(build(VariableGrouping::new()))
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn init(&self) -> Option<&FuncSpec> {
        self.init.as_ref()
    }

    /// The deduplicated imports of the file: side-effect imports first,
    /// then the init function's, then each declaration's in order.
    pub fn collect_imports(&self) -> ImportCollector {
        let mut imports = ImportCollector::new();
        for import in &self.init_imports {
            imports.add_side_effect(import);
        }
        if let Some(init) = &self.init {
            imports.extend(init.imports());
        }
        for block in &self.blocks {
            imports.extend(block.imports());
        }
        imports
    }

    fn declarations(&self) -> impl Iterator<Item = &dyn CodeBlock> {
        self.init
            .iter()
            .map(|init| init as &dyn CodeBlock)
            .chain(
                self.blocks
                    .iter()
                    .map(|block| block.as_ref() as &dyn CodeBlock),
            )
    }

    fn render_import_block(&self, imports: &ImportCollector, indent: Indent) -> String {
        if imports.is_empty() {
            return String::new();
        }

        debug!(
            package = %self.package,
            imports = imports.len(),
            "writing import block"
        );

        let mut block = String::from("import (\n");
        for import in imports.iter() {
            block.push_str(indent.as_str());
            block.push_str(&import.import_line());
            block.push('\n');
        }
        block.push_str(")\n\n");
        block
    }
}

impl CodeBlock for FileSpec {
    fn render_with_indent(&self, indent: Indent) -> Result<String> {
        let mut output = String::new();

        if let Some(comment) = &self.comment {
            output.push_str(&Comment::new(comment.as_str()).render_with_indent(indent)?);
        }

        output.push_str(&Statement::line("package $L", vec![Arg::from(&self.package)]).render()?);
        output.push_str("\n\n");

        output.push_str(&self.render_import_block(&self.collect_imports(), indent));

        for declaration in self.declarations() {
            output.push_str(&declaration.render_with_indent(indent)?);
            output.push('\n');
        }

        Ok(output)
    }

    fn imports(&self) -> Vec<Import> {
        self.collect_imports().into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{InterfaceSpec, StructSpec, TypeAliasSpec};
    use gopoet_core::{TypeDescriptor, args};

    fn named(package: &str, name: &str) -> TypeRef {
        TypeRef::from_descriptor(&TypeDescriptor::named(package, name)).unwrap()
    }

    #[test]
    fn test_empty_file() {
        let file = FileSpec::new("empty");
        assert_eq!(file.render().unwrap(), "package empty\n\n");
        assert!(file.imports().is_empty());
    }

    #[test]
    fn test_no_import_block_without_external_types() {
        let file = FileSpec::new("foo")
            .code_block(FuncSpec::new("foo").parameter("a", TypeRef::string()));
        assert_eq!(
            file.render().unwrap(),
            "package foo\n\nfunc foo(a string) {\n}\n\n"
        );
    }

    #[test]
    fn test_import_block_for_external_parameter() {
        let file = FileSpec::new("foo")
            .code_block(FuncSpec::new("foo").parameter("b", named("bytes", "Buffer")));
        assert_eq!(
            file.render().unwrap(),
            "package foo\n\nimport (\n\t\"bytes\"\n)\n\nfunc foo(b bytes.Buffer) {\n}\n\n"
        );
    }

    #[test]
    fn test_imports_deduplicated_across_blocks() {
        let file = FileSpec::new("foo")
            .code_block(FuncSpec::new("a").parameter("b", named("bytes", "Buffer")))
            .code_block(FuncSpec::new("b").parameter("b", named("bytes", "Buffer")))
            .code_block(StructSpec::new("S").field("b", named("bytes", "Buffer")));

        let rendered = file.render().unwrap();
        assert_eq!(rendered.matches("\"bytes\"").count(), 1);
        assert_eq!(file.imports(), vec![Import::new("bytes")]);
    }

    #[test]
    fn test_aliased_imports_kept_apart() {
        let buffer = TypeDescriptor::named("bytes", "Buffer");
        let aliased = TypeRef::with_alias(&buffer, "b2").unwrap();
        let file = FileSpec::new("foo")
            .code_block(FuncSpec::new("a").parameter("x", named("bytes", "Buffer")))
            .code_block(FuncSpec::new("b").parameter("y", aliased));

        assert_eq!(
            file.render().unwrap(),
            "package foo\n\n\
             import (\n\t\"bytes\"\n\tb2 \"bytes\"\n)\n\n\
             func a(x bytes.Buffer) {\n}\n\n\
             func b(y b2.Buffer) {\n}\n\n"
        );
    }

    #[test]
    fn test_initialization_imports_first() {
        let file = FileSpec::new("db")
            .initialization_import(Import::new("github.com/lib/pq"))
            .code_block(FuncSpec::new("open").parameter("b", named("bytes", "Buffer")));

        assert_eq!(
            file.render().unwrap(),
            "package db\n\nimport (\n\t_ \"github.com/lib/pq\"\n\t\"bytes\"\n)\n\n\
             func open(b bytes.Buffer) {\n}\n\n"
        );
    }

    #[test]
    fn test_init_function_must_be_named_init() {
        let result = FileSpec::new("foo").init_function(FuncSpec::new("setup"));
        assert!(matches!(
            result,
            Err(Error::InvalidInitName { name }) if name == "setup"
        ));
    }

    #[test]
    fn test_init_function_rendered_first() {
        let println = TypeRef::function_path("fmt.Println").unwrap();
        let file = FileSpec::new("main")
            .code_block(FuncSpec::new("main"))
            .init_function(FuncSpec::new("init").statement("$T($S)", args![println, "ready"]))
            .unwrap();

        assert_eq!(
            file.render().unwrap(),
            "package main\n\nimport (\n\t\"fmt\"\n)\n\n\
             func init() {\n\tfmt.Println(\"ready\")\n}\n\n\
             func main() {\n}\n\n"
        );
    }

    #[test]
    fn test_file_comment() {
        let file = FileSpec::new("foo").comment("Code generated by gopoet. DO NOT EDIT.");
        assert_eq!(
            file.render().unwrap(),
            "// Code generated by gopoet. DO NOT EDIT.\npackage foo\n\n"
        );
    }

    #[test]
    fn test_globals() {
        let file = FileSpec::new("foo")
            .global_constant("Max", TypeRef::int(), "$L", args![3])
            .global_variable("name", TypeRef::string(), "$S", args!["x"]);

        assert_eq!(
            file.render().unwrap(),
            "package foo\n\nconst Max int = 3\n\nvar name string = \"x\"\n\n"
        );
    }

    #[test]
    fn test_variable_grouping() {
        let file = FileSpec::new("foo").variable_grouping(|g| {
            g.variable("b", TypeRef::string(), "$S", args!["x"])
                .constant("a", TypeRef::int(), "$L", args![1])
        });

        assert_eq!(
            file.render().unwrap(),
            "package foo\n\nconst (\n\ta int = 1\n)\n\nvar (\n\tb string = \"x\"\n)\n\n"
        );
    }

    #[test]
    fn test_mixed_declarations() {
        let reader = TypeRef::from_descriptor(&TypeDescriptor::interface("io", "Reader")).unwrap();
        let file = FileSpec::new("shapes")
            .code_block(TypeAliasSpec::new("Meters", TypeRef::float64()))
            .code_block(InterfaceSpec::new("Source").embed_interface(reader))
            .code_block(Comment::new("end of declarations"));

        assert_eq!(
            file.render().unwrap(),
            "package shapes\n\nimport (\n\t\"io\"\n)\n\n\
             type Meters float64\n\n\
             type Source interface {\n\tio.Reader\n}\n\n\
             // end of declarations\n\n"
        );
    }

    #[test]
    fn test_spaces_indent() {
        let file = FileSpec::new("foo").code_block(
            FuncSpec::new("foo")
                .parameter("b", named("bytes", "Buffer"))
                .statement("b.Reset()", args![]),
        );

        assert_eq!(
            file.render_with_indent(Indent::Spaces(4)).unwrap(),
            "package foo\n\nimport (\n    \"bytes\"\n)\n\nfunc foo(b bytes.Buffer) {\n    b.Reset()\n}\n\n"
        );
    }

    #[test]
    fn test_render_errors_propagate() {
        let file = FileSpec::new("foo").code_block(
            FuncSpec::new("foo")
                .result_parameter("n", TypeRef::int())
                .result_parameter("", TypeRef::error()),
        );
        assert!(matches!(file.render(), Err(Error::MixedResultNames { .. })));
    }
}
