//! Schema graph construction.
//!
//! A [`TypeGraph`] is a validated `apollo-compiler` schema built from one
//! serialized snapshot. It is introspectable only: nothing is ever executed
//! against it, so no resolvers or type resolvers exist to be wired.

use crate::diagnostics::join_messages;
use crate::error::{ContractError, Result, SchemaSide};
use apollo_compiler::validation::Valid;
use apollo_compiler::Schema;

/// A serialized schema snapshot.
#[derive(Debug, Clone, Copy)]
pub enum SchemaSource<'a> {
    /// JSON result of the introspection query, with or without the
    /// `{"data": ...}` response envelope.
    Introspection(&'a str),
    /// Schema Definition Language text.
    Sdl(&'a str),
}

/// An immutable type graph for one schema snapshot.
#[derive(Debug)]
pub struct TypeGraph {
    side: SchemaSide,
    schema: Valid<Schema>,
}

impl TypeGraph {
    #[must_use]
    pub const fn side(&self) -> SchemaSide {
        self.side
    }

    #[must_use]
    pub const fn schema(&self) -> &Valid<Schema> {
        &self.schema
    }
}

/// Builds the type graph for one side of the comparison.
#[tracing::instrument(skip(source))]
pub fn build_type_graph(source: SchemaSource<'_>, side: SchemaSide) -> Result<TypeGraph> {
    let sdl = match source {
        SchemaSource::Introspection(json) => graphql_introspect::introspection_json_to_sdl(json)
            .map_err(|source| ContractError::Introspection { side, source })?,
        SchemaSource::Sdl(text) => text.to_string(),
    };

    let schema = Schema::parse_and_validate(sdl, side.source_name()).map_err(|with_errors| {
        ContractError::InvalidSchema {
            side,
            message: join_messages(&with_errors.errors),
        }
    })?;

    tracing::debug!(types = schema.types.len(), "Built type graph");
    Ok(TypeGraph { side, schema })
}
