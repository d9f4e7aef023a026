//! Snapshot tests for whole generated Go files.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use eyre::Result;
use gopoet::{
    ChanDir, CodeBlock, FileSpec, FuncSpec, Import, Indent, InterfaceSpec, Primitive, StructSpec,
    TypeAliasSpec, TypeDescriptor, TypeRef, args,
};

#[test]
fn test_struct_with_attached_method() -> Result<()> {
    let time = TypeRef::from_descriptor(&TypeDescriptor::named("time", "Time"))?;
    let buffer = TypeRef::from_descriptor(&TypeDescriptor::pointer(TypeDescriptor::named(
        "bytes", "Buffer",
    )))?;
    let sprintf = TypeRef::function_path("fmt.Sprintf")?;

    let user = StructSpec::new("User")
        .comment("User is a registered account.")
        .field_with_tag("Name", TypeRef::string(), r#"json:"name""#)
        .field_with_tag("CreatedAt", time, r#"json:"created_at""#);

    let write = user
        .method("WriteTo", "u", true)
        .comment("WriteTo writes a summary of the user to b.")
        .parameter("b", buffer)
        .result_parameter("", TypeRef::error())
        .statement(
            "_, err := b.WriteString($T($S, u.Name))",
            args![sprintf, "user %s"],
        )
        .statement("return err", args![]);

    let file = FileSpec::new("models")
        .comment("Code generated by gopoet. DO NOT EDIT.")
        .code_block(user.attach_method(write));

    let models = file.render()?;
    insta::assert_snapshot!("models_file", models);
    Ok(())
}

#[test]
fn test_init_function_and_groupings() -> Result<()> {
    let context = TypeRef::from_descriptor(&TypeDescriptor::interface("context", "Context"))?;
    let db = TypeRef::from_descriptor(&TypeDescriptor::pointer(TypeDescriptor::named(
        "database/sql",
        "DB",
    )))?;
    let open = TypeRef::function_path("database/sql.Open")?;

    let init = FuncSpec::new("init")
        .statement("var err error", args![])
        .statement("db, err = $T($S, dsn)", args![open, "postgres"])
        .block_start("if err != nil", args![])
        .statement("panic(err)", args![])
        .block_end();

    let store = InterfaceSpec::new("Store")
        .comment("Store loads users.")
        .method(
            FuncSpec::new("Find")
                .comment("Find returns the user named name.")
                .parameter("ctx", context)
                .parameter("name", TypeRef::string())
                .result_parameter("", TypeRef::local_pointer("User"))
                .result_parameter("", TypeRef::error()),
        );

    let file = FileSpec::new("store")
        .initialization_import(Import::new("github.com/lib/pq"))
        .init_function(init)?
        .variable_grouping(|g| {
            g.constant(
                "dsn",
                TypeRef::string(),
                "$S",
                args!["postgres://localhost/app"],
            )
            .variable("db", db, "", args![])
        })
        .code_block(store);

    let store = file.render()?;
    insta::assert_snapshot!("store_file", store);
    Ok(())
}

#[test]
fn test_type_declarations_with_spaces() -> Result<()> {
    let headers = TypeRef::from_descriptor(&TypeDescriptor::map(
        Primitive::String.into(),
        TypeDescriptor::slice(Primitive::String.into()),
    ))?;
    let inbox = TypeRef::from_descriptor(&TypeDescriptor::chan(
        ChanDir::Recv,
        TypeDescriptor::pointer(TypeDescriptor::named("net/http", "Request")),
    ))?;
    let id = TypeRef::with_alias(
        &TypeDescriptor::named("github.com/google/uuid", "UUID"),
        "guuid",
    )?;

    let inbox = TypeAliasSpec::new("Inbox", inbox);
    let drain = FuncSpec::new("drain")
        .parameter("in", &inbox)
        .block_start("for req := range in", args![])
        .statement("_ = req", args![])
        .block_end();

    let file = FileSpec::new("types")
        .code_block(TypeAliasSpec::new("Headers", headers).comment("Headers maps names to values."))
        .code_block(inbox)
        .code_block(TypeAliasSpec::new("ID", id))
        .code_block(drain);

    let types = file.render_with_indent(Indent::Spaces(2))?;
    insta::assert_snapshot!("types_file", types);
    Ok(())
}

#[test]
fn test_render_is_idempotent() -> Result<()> {
    let buffer = TypeRef::from_descriptor(&TypeDescriptor::named("bytes", "Buffer"))?;
    let file = FileSpec::new("foo")
        .code_block(FuncSpec::new("a").parameter("b", buffer.clone()))
        .code_block(FuncSpec::new("b").parameter("b", buffer));

    assert_eq!(file.render()?, file.render()?);
    assert_eq!(file.imports(), vec![Import::new("bytes")]);
    Ok(())
}
