use graphql_introspect::IntrospectionError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContractError>;

/// Which of the two schema snapshots a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaSide {
    /// The previously published schema the query was written against.
    Old,
    /// The newly generated schema being proposed.
    Current,
}

impl SchemaSide {
    /// Path reported by `apollo-compiler` diagnostics for this side.
    #[must_use]
    pub const fn source_name(self) -> &'static str {
        match self {
            Self::Old => "old-schema.graphql",
            Self::Current => "current-schema.graphql",
        }
    }
}

impl std::fmt::Display for SchemaSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Old => f.write_str("old"),
            Self::Current => f.write_str("current"),
        }
    }
}

/// Failures that abort a check before any query is looked at.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("Failed to read {side} schema introspection result")]
    Introspection {
        side: SchemaSide,
        #[source]
        source: IntrospectionError,
    },

    #[error("Invalid {side} schema: {message}")]
    InvalidSchema { side: SchemaSide, message: String },

    #[error("Invalid check options: {0}")]
    InvalidOptions(String),
}

impl ContractError {
    /// The schema side this error refers to, if any.
    #[must_use]
    pub const fn side(&self) -> Option<SchemaSide> {
        match self {
            Self::Introspection { side, .. } | Self::InvalidSchema { side, .. } => Some(*side),
            Self::InvalidOptions(_) => None,
        }
    }
}
