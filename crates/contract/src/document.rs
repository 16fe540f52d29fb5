//! Query parsing and validation against a single schema.

use crate::diagnostics::{validation_errors, SyntaxError, ValidationError};
use crate::schema::TypeGraph;
use apollo_compiler::{ast, ExecutableDocument};

/// Path reported by `apollo-compiler` diagnostics for the query.
const QUERY_SOURCE_NAME: &str = "query.graphql";

/// A parsed query, shared read-only by both traversals.
#[derive(Debug)]
pub struct QueryDocument {
    ast: ast::Document,
    source: String,
}

impl QueryDocument {
    /// Definitions in source order, with the source map for positions.
    #[must_use]
    pub const fn ast(&self) -> &ast::Document {
        &self.ast
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Parses query text without consulting any schema.
#[tracing::instrument(skip(query), fields(size = query.len()))]
pub fn parse_query(query: &str) -> Result<QueryDocument, SyntaxError> {
    match ast::Document::parse(query, QUERY_SOURCE_NAME) {
        Ok(ast) => {
            tracing::debug!(definitions = ast.definitions.len(), "Parsed query");
            Ok(QueryDocument {
                ast,
                source: query.to_string(),
            })
        }
        Err(with_errors) => {
            let error = SyntaxError::from_diagnostics(&with_errors.errors);
            tracing::debug!(%error, "Query failed to parse");
            Err(error)
        }
    }
}

/// Validates a parsed query against one type graph.
///
/// Returns every error `apollo-compiler` reports, in its order. An empty list
/// means the query is a valid executable document for that schema.
#[must_use]
#[tracing::instrument(skip_all, fields(side = %graph.side()))]
pub fn validate(document: &QueryDocument, graph: &TypeGraph) -> Vec<ValidationError> {
    match ExecutableDocument::parse_and_validate(
        graph.schema(),
        document.source(),
        QUERY_SOURCE_NAME,
    ) {
        Ok(_) => Vec::new(),
        Err(with_errors) => {
            let errors = validation_errors(&with_errors.errors);
            tracing::debug!(errors = errors.len(), "Query failed validation");
            errors
        }
    }
}
