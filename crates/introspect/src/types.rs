//! Type definitions for GraphQL introspection results.
//!
//! These types mirror the JSON produced by the standard introspection query.
//! List-valued fields tolerate `null` (servers emit `"interfaces": null` or
//! omit `directives` entirely), so decoding is deliberately lenient about
//! shape while still rejecting unknown `kind` tags.

use serde::{Deserialize, Deserializer, Serialize};

/// Top-level introspection response wrapper (`{"data": {"__schema": ...}}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntrospectionResponse {
    pub data: IntrospectionData,
}

/// Data field of the introspection response containing the schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntrospectionData {
    #[serde(rename = "__schema")]
    pub schema: IntrospectionSchema,
}

/// Complete schema information from introspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema {
    pub query_type: Option<IntrospectionTypeRef>,
    #[serde(default)]
    pub mutation_type: Option<IntrospectionTypeRef>,
    #[serde(default)]
    pub subscription_type: Option<IntrospectionTypeRef>,
    pub types: Vec<IntrospectionType>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub directives: Vec<IntrospectionDirective>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntrospectionTypeRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum IntrospectionType {
    #[serde(rename = "SCALAR")]
    Scalar(IntrospectionScalarType),
    #[serde(rename = "OBJECT")]
    Object(IntrospectionObjectType),
    #[serde(rename = "INTERFACE")]
    Interface(IntrospectionInterfaceType),
    #[serde(rename = "UNION")]
    Union(IntrospectionUnionType),
    #[serde(rename = "ENUM")]
    Enum(IntrospectionEnumType),
    #[serde(rename = "INPUT_OBJECT")]
    InputObject(IntrospectionInputObjectType),
}

impl IntrospectionType {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(t) => &t.name,
            Self::Object(t) => &t.name,
            Self::Interface(t) => &t.name,
            Self::Union(t) => &t.name,
            Self::Enum(t) => &t.name,
            Self::InputObject(t) => &t.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionScalarType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionObjectType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub fields: Vec<IntrospectionField>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub interfaces: Vec<IntrospectionTypeRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionInterfaceType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub fields: Vec<IntrospectionField>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub interfaces: Vec<IntrospectionTypeRef>,
    #[serde(default)]
    pub possible_types: Option<Vec<IntrospectionTypeRef>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionUnionType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub possible_types: Vec<IntrospectionTypeRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionEnumType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub enum_values: Vec<IntrospectionEnumValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionInputObjectType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub input_fields: Vec<IntrospectionInputValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionField {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub args: Vec<IntrospectionInputValue>,
    #[serde(rename = "type")]
    pub type_ref: IntrospectionTypeRefFull,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionInputValue {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub type_ref: IntrospectionTypeRefFull,
    #[serde(default)]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionEnumValue {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionDirective {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub locations: Vec<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub args: Vec<IntrospectionInputValue>,
    #[serde(default)]
    pub is_repeatable: bool,
}

/// A possibly wrapped type reference, e.g. `NON_NULL(LIST(SCALAR String))`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionTypeRefFull {
    pub kind: TypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<IntrospectionTypeRefFull>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl IntrospectionTypeRefFull {
    /// Renders the reference as GraphQL type syntax, e.g. `[String!]!`.
    ///
    /// ```
    /// # use graphql_introspect::{IntrospectionTypeRefFull, TypeKind};
    /// let type_ref = IntrospectionTypeRefFull {
    ///     kind: TypeKind::NonNull,
    ///     name: None,
    ///     of_type: Some(Box::new(IntrospectionTypeRefFull {
    ///         kind: TypeKind::Scalar,
    ///         name: Some("String".to_string()),
    ///         of_type: None,
    ///     })),
    /// };
    /// assert_eq!(type_ref.to_type_string(), "String!");
    /// ```
    #[must_use]
    pub fn to_type_string(&self) -> String {
        match self.kind {
            TypeKind::NonNull => self.of_type.as_ref().map_or_else(
                || "!".to_string(),
                |of_type| format!("{}!", of_type.to_type_string()),
            ),
            TypeKind::List => self.of_type.as_ref().map_or_else(
                || "[]".to_string(),
                |of_type| format!("[{}]", of_type.to_type_string()),
            ),
            _ => self.name.clone().unwrap_or_default(),
        }
    }
}

impl std::fmt::Display for IntrospectionTypeRefFull {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_type_string())
    }
}

fn nullable_vec<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
