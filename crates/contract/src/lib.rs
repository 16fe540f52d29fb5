//! Query contract checking between two GraphQL schema snapshots.
//!
//! Given a client query, the schema it was published against ("old") and a
//! newly generated schema ("current"), [`check`] verifies that every field
//! and argument the query touches resolves to the same type in both. Schema
//! evolution that keeps the query valid but changes what it returns shows up
//! as a [`CheckOutcome::CompatibilityFailure`].
//!
//! Checking runs in phases, and the first phase that fails decides the
//! outcome:
//!
//! 1. both schemas are built ([`build_type_graph`]); failures are errors
//! 2. the query is parsed ([`parse_query`]) → [`CheckOutcome::SyntaxError`]
//! 3. the query is validated against the current schema ([`validate`])
//!    → [`CheckOutcome::ValidationFailure`]
//! 4. both schemas are walked in lockstep ([`check_compatibility`])
//!    → [`CheckOutcome::CompatibilityFailure`] or [`CheckOutcome::Success`]
//!
//! # Example
//!
//! ```
//! use graphql_contract::{check_with_options, CheckOptions, SchemaSource};
//!
//! let outcome = check_with_options(
//!     "{ user { id } }",
//!     SchemaSource::Sdl("type Query { user: User } type User { id: ID }"),
//!     SchemaSource::Sdl("type Query { user: User } type User { id: String }"),
//!     &CheckOptions::default(),
//! )
//! .unwrap();
//!
//! let messages: Vec<String> = outcome.discrepancies().iter().map(ToString::to_string).collect();
//! assert_eq!(messages, ["Different types for field id: ID vs String"]);
//! ```

mod checker;
mod context;
mod diagnostics;
mod document;
mod error;
mod options;
mod outcome;
mod schema;

pub use checker::{check_compatibility, Discrepancy, DiscrepancyKind};
pub use context::TraversalContext;
pub use diagnostics::{SourcePosition, SyntaxError, ValidationError};
pub use document::{parse_query, validate, QueryDocument};
pub use error::{ContractError, Result, SchemaSide};
pub use options::CheckOptions;
pub use outcome::CheckOutcome;
pub use schema::{build_type_graph, SchemaSource, TypeGraph};

/// Checks a query against two introspection results with default options.
///
/// `old_schema_json` and `current_schema_json` are introspection query
/// results, with or without the `{"data": ...}` envelope.
pub fn check(
    query: &str,
    old_schema_json: &str,
    current_schema_json: &str,
) -> Result<CheckOutcome> {
    check_with_options(
        query,
        SchemaSource::Introspection(old_schema_json),
        SchemaSource::Introspection(current_schema_json),
        &CheckOptions::default(),
    )
}

/// Checks a query against two schema snapshots.
///
/// Only schema construction errors are returned as `Err`; every problem with
/// the query itself is reported through the [`CheckOutcome`].
#[tracing::instrument(skip_all, fields(query_size = query.len()))]
pub fn check_with_options(
    query: &str,
    old: SchemaSource<'_>,
    current: SchemaSource<'_>,
    options: &CheckOptions,
) -> Result<CheckOutcome> {
    let old = build_type_graph(old, SchemaSide::Old)?;
    let current = build_type_graph(current, SchemaSide::Current)?;

    let document = match parse_query(query) {
        Ok(document) => document,
        Err(error) => return Ok(CheckOutcome::SyntaxError(error)),
    };

    let errors = validate(&document, &current);
    if !errors.is_empty() {
        return Ok(CheckOutcome::ValidationFailure(errors));
    }

    let outcome =
        CheckOutcome::from_discrepancies(check_compatibility(&document, &old, &current, options));
    tracing::info!(outcome = outcome.label(), "Contract check complete");
    Ok(outcome)
}
