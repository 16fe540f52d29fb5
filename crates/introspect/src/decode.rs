//! Decoding of introspection results from JSON text.

use crate::{IntrospectionData, IntrospectionError, IntrospectionResponse, Result};
use serde_json::{Map, Value};

/// Decodes an introspection result.
///
/// Accepts either a complete GraphQL response (`{"data": {"__schema": ...}}`)
/// or the bare data object (`{"__schema": ...}`) as stored by most schema
/// registries.
#[tracing::instrument(skip(json), fields(size = json.len()))]
pub fn parse_introspection(json: &str) -> Result<IntrospectionResponse> {
    let value: Value = serde_json::from_str(json)?;

    let data = if value.get("__schema").is_some() {
        value
    } else {
        let Value::Object(mut map) = value else {
            return Err(IntrospectionError::Invalid(
                "expected a JSON object".to_string(),
            ));
        };
        match map.remove("data") {
            Some(data) if !data.is_null() => data,
            _ => return Err(missing_schema(&map)),
        }
    };

    let data: IntrospectionData = serde_json::from_value(data)?;
    if data.schema.query_type.is_none() {
        return Err(IntrospectionError::Invalid(
            "schema has no query type".to_string(),
        ));
    }

    tracing::debug!(types = data.schema.types.len(), "Decoded introspection result");
    Ok(IntrospectionResponse { data })
}

fn missing_schema(response: &Map<String, Value>) -> IntrospectionError {
    match response.get("errors") {
        Some(errors) => IntrospectionError::Invalid(format!("response carries errors: {errors}")),
        None => IntrospectionError::Invalid("missing `__schema`".to_string()),
    }
}
