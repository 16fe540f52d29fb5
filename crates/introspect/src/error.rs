use thiserror::Error;

pub type Result<T> = std::result::Result<T, IntrospectionError>;

#[derive(Debug, Error)]
pub enum IntrospectionError {
    #[error("Failed to parse introspection result: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid introspection result: {0}")]
    Invalid(String),
}
