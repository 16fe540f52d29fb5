//! GraphQL introspection result decoding and SDL conversion.
//!
//! Schema registries usually store a published schema as the JSON result of
//! the standard introspection query. This crate decodes that JSON into typed
//! structures and renders it back to Schema Definition Language so it can be
//! handed to `apollo-compiler`.
//!
//! # Example
//!
//! ```
//! use graphql_introspect::introspection_json_to_sdl;
//!
//! let json = r#"{"__schema": {
//!     "queryType": {"name": "Query"},
//!     "types": [{"kind": "OBJECT", "name": "Query", "interfaces": [], "fields": [
//!         {"name": "hello", "args": [], "type": {"kind": "SCALAR", "name": "String"}}
//!     ]}]
//! }}"#;
//!
//! let sdl = introspection_json_to_sdl(json).unwrap();
//! assert_eq!(sdl, "type Query {\n  hello: String\n}");
//! ```

mod decode;
mod error;
mod sdl;
mod types;

pub use decode::parse_introspection;
pub use error::{IntrospectionError, Result};
pub use sdl::introspection_to_sdl;
pub use types::*;

/// Decodes an introspection result and converts it to SDL in one step.
///
/// # Errors
///
/// Returns an error if the text is not JSON or does not have the shape of an
/// introspection result.
pub fn introspection_json_to_sdl(json: &str) -> Result<String> {
    let introspection = parse_introspection(json)?;
    Ok(introspection_to_sdl(&introspection))
}
