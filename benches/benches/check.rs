use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use graphql_contract::{
    build_type_graph, check, check_compatibility, parse_query, CheckOptions, SchemaSide,
    SchemaSource,
};
use graphql_test_utils::fixtures::{field, IntrospectionBuilder, NESTED_SCHEMA};
use std::hint::black_box;

// Operation touching every level of the schema below
const SAMPLE_OPERATION: &str = r"
query Feed($first: Int) {
  users(first: $first) {
    ...UserFields
    posts(first: 3) {
      id
      title
      author { id name }
      comments { id text }
    }
  }
}

fragment UserFields on User {
  id
  name
  email
}
";

fn schema_json(post_id: &str) -> String {
    IntrospectionBuilder::new()
        .object(
            "Query",
            [
                field("users", "[User!]!").arg("first", "Int").arg("after", "String"),
                field("post", "Post").arg("id", "ID!"),
            ],
        )
        .object(
            "User",
            [
                field("id", "ID!"),
                field("name", "String!"),
                field("email", "String!"),
                field("posts", "[Post!]!").arg("first", "Int"),
            ],
        )
        .object(
            "Post",
            [
                field("id", post_id),
                field("title", "String!"),
                field("author", "User!"),
                field("comments", "[Comment!]!"),
            ],
        )
        .object("Comment", [field("id", "ID!"), field("text", "String!")])
        .to_json()
}

/// End to end, including introspection decoding and schema building
fn bench_check_cold(c: &mut Criterion) {
    let old = schema_json("ID!");
    let current = schema_json("String!");

    c.bench_function("check_cold", |b| {
        b.iter(|| black_box(check(SAMPLE_OPERATION, &old, &current)));
    });
}

/// The dual walk alone, with both graphs built up front
fn bench_compatibility_walk(c: &mut Criterion) {
    let old = build_type_graph(SchemaSource::Sdl(NESTED_SCHEMA), SchemaSide::Old)
        .expect("old schema builds");
    let current = build_type_graph(SchemaSource::Sdl(NESTED_SCHEMA), SchemaSide::Current)
        .expect("current schema builds");
    let document = parse_query(SAMPLE_OPERATION).expect("operation parses");
    let options = CheckOptions::default();

    c.bench_function("compatibility_walk", |b| {
        b.iter(|| black_box(check_compatibility(&document, &old, &current, &options)));
    });
}

fn bench_introspection_to_sdl(c: &mut Criterion) {
    c.bench_function("introspection_to_sdl", |b| {
        b.iter_batched(
            || schema_json("ID!"),
            |json| black_box(graphql_introspect::introspection_json_to_sdl(&json)),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_check_cold,
    bench_compatibility_walk,
    bench_introspection_to_sdl,
);

criterion_main!(benches);
