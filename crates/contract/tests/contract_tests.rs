//! End-to-end checks from introspection JSON to outcome.

use graphql_contract::{
    check, check_with_options, CheckOptions, CheckOutcome, ContractError, DiscrepancyKind,
    SchemaSide, SchemaSource, SourcePosition,
};
use graphql_test_utils::fixtures::{field, IntrospectionBuilder, BASIC_SCHEMA};
use graphql_test_utils::{format_messages, init_tracing, insta};

fn user_schema(id_type: &str) -> String {
    IntrospectionBuilder::new()
        .object("Query", [field("user", "User")])
        .object("User", [field("id", id_type)])
        .to_json()
}

fn search_schema(limit_type: &str) -> String {
    IntrospectionBuilder::new()
        .object(
            "Query",
            [field("search", "[Item]").arg("limit", limit_type)],
        )
        .object("Item", [field("name", "String")])
        .to_json()
}

#[test]
fn unchanged_schema_succeeds() -> anyhow::Result<()> {
    init_tracing();
    let schema = user_schema("ID");

    let outcome = check("{ user { id } }", &schema, &schema)?;

    assert_eq!(outcome, CheckOutcome::Success);
    Ok(())
}

#[test]
fn changed_field_type_is_a_compatibility_failure() -> anyhow::Result<()> {
    init_tracing();
    let outcome = check("{ user { id } }", &user_schema("ID"), &user_schema("String"))?;

    let discrepancies = outcome.discrepancies();
    assert_eq!(discrepancies.len(), 1);
    assert_eq!(discrepancies[0].subject, "id");
    assert_eq!(
        discrepancies[0].kind,
        DiscrepancyKind::FieldTypeMismatch {
            old: "ID".to_string(),
            current: "String".to_string(),
        }
    );
    assert_eq!(discrepancies[0].position, Some(SourcePosition::new(1, 10)));
    Ok(())
}

#[test]
fn changed_argument_type_is_a_compatibility_failure() -> anyhow::Result<()> {
    init_tracing();
    let outcome = check(
        "{ search(limit: 5) { name } }",
        &search_schema("Int"),
        &search_schema("Float"),
    )?;

    insta::assert_snapshot!(
        format_messages(outcome.discrepancies()),
        @"[1] Different argument types for argument limit: Int vs Float"
    );
    Ok(())
}

#[test]
fn unparsable_query_is_a_syntax_error() -> anyhow::Result<()> {
    init_tracing();
    let schema = user_schema("ID");

    let outcome = check("{ user { ", &schema, &schema)?;

    let error = outcome.syntax_error().expect("expected a syntax error");
    assert!(error.position.is_some());
    assert!(error.to_string().starts_with("Syntax error at 1:"), "{error}");
    Ok(())
}

#[test]
fn field_missing_from_current_is_a_validation_failure() -> anyhow::Result<()> {
    init_tracing();
    let outcome = check("{ user { id } }", &user_schema("ID"), &search_schema("Int"))?;

    let errors = outcome.validation_errors();
    assert!(!errors.is_empty(), "{outcome:?}");
    assert!(
        errors.iter().any(|error| error.message.contains("user")),
        "{}",
        format_messages(errors)
    );
    Ok(())
}

#[test]
fn syntax_errors_win_over_validation_errors() -> anyhow::Result<()> {
    let outcome = check("{ missing { ", &user_schema("ID"), &user_schema("ID"))?;
    assert!(outcome.syntax_error().is_some());
    Ok(())
}

#[test]
fn field_added_in_current_is_unknown_in_old() -> anyhow::Result<()> {
    let old = user_schema("ID");
    let current = IntrospectionBuilder::new()
        .object("Query", [field("user", "User")])
        .object("User", [field("id", "ID"), field("email", "String")])
        .to_response_json();

    let outcome = check("{ user { id email } }", &old, &current)?;

    insta::assert_snapshot!(
        format_messages(outcome.discrepancies()),
        @"[1] Unknown type for field email"
    );
    assert_eq!(outcome.discrepancies()[0].path, ["user", "email"]);
    Ok(())
}

#[test]
fn discrepancies_are_reported_in_document_order() -> anyhow::Result<()> {
    let old = IntrospectionBuilder::new()
        .object(
            "Query",
            [
                field("viewer", "User"),
                field("feed", "[Post]").arg("first", "Int"),
            ],
        )
        .object("User", [field("id", "ID"), field("age", "Int")])
        .object("Post", [field("title", "String")])
        .to_json();
    let current = IntrospectionBuilder::new()
        .object(
            "Query",
            [
                field("viewer", "User"),
                field("feed", "[Post]").arg("first", "Float"),
            ],
        )
        .object("User", [field("id", "String"), field("age", "Float")])
        .object("Post", [field("title", "ID")])
        .to_json();
    let query = r"
        query Home {
          feed(first: 10) { title }
          viewer { ...Profile }
        }

        fragment Profile on User {
          age
          id
        }
    ";

    let outcome = check(query, &old, &current)?;

    insta::assert_snapshot!(format_messages(outcome.discrepancies()), @r"
    [1] Different argument types for argument first: Int vs Float
    [2] Different types for field title: String vs ID
    [3] Different types for field age: Int vs Float
    [4] Different types for field id: ID vs String
    ");
    assert_eq!(outcome, check(query, &old, &current)?);
    Ok(())
}

#[test]
fn directive_arguments_are_compared() -> anyhow::Result<()> {
    let schema = |ttl: &str| {
        IntrospectionBuilder::new()
            .object("Query", [field("name", "String")])
            .directive("cached", &["FIELD"], &[("ttl", ttl)])
            .to_json()
    };

    let outcome = check("{ name @cached(ttl: 60) }", &schema("Int"), &schema("Float"))?;

    insta::assert_snapshot!(
        format_messages(outcome.discrepancies()),
        @"[1] Different argument types for argument ttl: Int vs Float"
    );
    Ok(())
}

#[test]
fn input_object_arguments_compare_by_name() -> anyhow::Result<()> {
    let schema = |input: &str| {
        IntrospectionBuilder::new()
            .object("Query", [field("search", "[String]").arg("filter", input)])
            .input_object("Filter", &[("term", "String")])
            .input_object("SearchFilter", &[("term", "String")])
            .to_json()
    };

    let outcome = check(
        "{ search(filter: { term: \"a\" }) }",
        &schema("Filter"),
        &schema("SearchFilter"),
    )?;

    insta::assert_snapshot!(
        format_messages(outcome.discrepancies()),
        @"[1] Different argument types for argument filter: Filter vs SearchFilter"
    );
    Ok(())
}

#[test]
fn mutations_resolve_against_the_mutation_root() -> anyhow::Result<()> {
    let schema = |result: &str| {
        IntrospectionBuilder::new()
            .mutation_type("Mutation")
            .object("Query", [field("ok", "Boolean")])
            .object("Mutation", [field("rename", result).arg("name", "String!")])
            .to_json()
    };

    let unchanged = check(
        "mutation { rename(name: \"x\") }",
        &schema("Boolean"),
        &schema("Boolean"),
    )?;
    assert!(unchanged.is_success());

    let changed = check(
        "mutation { rename(name: \"x\") }",
        &schema("Boolean"),
        &schema("String"),
    )?;
    insta::assert_snapshot!(
        format_messages(changed.discrepancies()),
        @"[1] Different types for field rename: Boolean vs String"
    );
    Ok(())
}

#[test]
fn mutation_type_that_is_not_the_root_is_a_validation_failure() -> anyhow::Result<()> {
    let schema = IntrospectionBuilder::new()
        .object("Query", [field("ok", "Boolean")])
        .object("Mutation", [field("rename", "Boolean")])
        .to_json();

    let outcome = check("mutation { rename }", &schema, &schema)?;

    assert!(!outcome.validation_errors().is_empty(), "{outcome:?}");
    Ok(())
}

fn cached_schema(with_directive: bool) -> String {
    let builder = IntrospectionBuilder::new().object("Query", [field("name", "String")]);
    let builder = if with_directive {
        builder.directive("cached", &["FIELD"], &[("ttl", "Int")])
    } else {
        builder
    };
    builder.to_json()
}

#[test]
fn directive_added_in_current_is_unknown_in_old() -> anyhow::Result<()> {
    let outcome = check(
        "{ name @cached(ttl: 60) }",
        &cached_schema(false),
        &cached_schema(true),
    )?;

    insta::assert_snapshot!(
        format_messages(outcome.discrepancies()),
        @"[1] Unknown directive @cached"
    );
    assert_eq!(outcome.discrepancies()[0].path, ["name"]);
    Ok(())
}

#[test]
fn directive_removed_from_current_is_a_validation_failure() -> anyhow::Result<()> {
    let outcome = check(
        "{ name @cached(ttl: 60) }",
        &cached_schema(true),
        &cached_schema(false),
    )?;

    let errors = outcome.validation_errors();
    assert!(
        errors.iter().any(|error| error.message.contains("cached")),
        "{outcome:?}"
    );
    Ok(())
}

fn user_type_schema(type_name: &str) -> String {
    IntrospectionBuilder::new()
        .object("Query", [field("user", type_name)])
        .object(type_name, [field("id", "ID")])
        .to_json()
}

#[test]
fn fragment_type_added_in_current_is_unknown_in_old() -> anyhow::Result<()> {
    let outcome = check(
        "{ user { ... on User { id } } }",
        &user_type_schema("Person"),
        &user_type_schema("User"),
    )?;

    insta::assert_snapshot!(format_messages(outcome.discrepancies()), @r"
    [1] Different types for field user: Person vs User
    [2] Unknown type for field id
    ");
    Ok(())
}

#[test]
fn fragment_type_removed_from_current_is_a_validation_failure() -> anyhow::Result<()> {
    let outcome = check(
        "{ user { ... on User { id } } }",
        &user_type_schema("User"),
        &user_type_schema("Person"),
    )?;

    assert!(!outcome.validation_errors().is_empty(), "{outcome:?}");
    Ok(())
}

#[test]
fn custom_root_type_names() -> anyhow::Result<()> {
    let schema = IntrospectionBuilder::new()
        .query_type("RootQuery")
        .object("RootQuery", [field("version", "String")])
        .scalar("Date")
        .to_json();

    assert!(check("{ version }", &schema, &schema)?.is_success());
    Ok(())
}

#[test]
fn wrapper_comparison_is_opt_in() -> anyhow::Result<()> {
    let old = user_schema("ID");
    let current = user_schema("ID!");

    assert!(check("{ user { id } }", &old, &current)?.is_success());

    let options = CheckOptions::from_yaml_str("compareWrappers: true")?;
    let outcome = check_with_options(
        "{ user { id } }",
        SchemaSource::Introspection(&old),
        SchemaSource::Introspection(&current),
        &options,
    )?;
    insta::assert_snapshot!(
        format_messages(outcome.discrepancies()),
        @"[1] Different types for field id: ID vs ID!"
    );
    Ok(())
}

#[test]
fn sdl_and_introspection_sources_mix() -> anyhow::Result<()> {
    let current = IntrospectionBuilder::new()
        .object("Query", [field("user", "User").arg("id", "ID!")])
        .object(
            "User",
            [
                field("id", "ID!"),
                field("name", "String!"),
                field("email", "String!"),
            ],
        )
        .to_json();

    let outcome = check_with_options(
        "query ($id: ID!) { user(id: $id) { id name email } }",
        SchemaSource::Sdl(BASIC_SCHEMA),
        SchemaSource::Introspection(&current),
        &CheckOptions::default(),
    )?;

    assert!(outcome.is_success(), "{outcome:?}");
    Ok(())
}

#[test]
fn broken_old_schema_is_an_error() {
    let err = check("{ user { id } }", "{ not json", &user_schema("ID")).unwrap_err();

    assert_eq!(err.side(), Some(SchemaSide::Old));
    assert!(matches!(err, ContractError::Introspection { .. }));
}

#[test]
fn introspection_errors_are_reported_for_current() {
    let response = r#"{"data": null, "errors": [{"message": "forbidden"}]}"#;

    let err = check("{ user { id } }", &user_schema("ID"), response).unwrap_err();

    assert_eq!(err.side(), Some(SchemaSide::Current));
}

#[test]
fn identical_schemas_never_report_discrepancies() -> anyhow::Result<()> {
    let schema = IntrospectionBuilder::new()
        .object(
            "Query",
            [
                field("user", "User").arg("id", "ID!"),
                field("users", "[User!]!").arg("first", "Int"),
            ],
        )
        .object(
            "User",
            [
                field("id", "ID!"),
                field("friends", "[User]").arg("first", "Int"),
            ],
        )
        .to_json();
    let queries = [
        "{ user(id: 1) { id } }",
        "{ users(first: 2) { id friends(first: 3) { id } } }",
        "{ a: user(id: 1) { ... on User { id } } b: users { __typename } }",
        "query Q { users { ...F } } fragment F on User { friends { id } }",
    ];

    for query in queries {
        let outcome = check(query, &schema, &schema)?;
        assert!(outcome.is_success(), "{query}: {outcome:?}");
    }
    Ok(())
}
