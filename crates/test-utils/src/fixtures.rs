//! Shared test fixtures for GraphQL schemas.
//!
//! Schemas arrive at the checker as introspection results, which are tedious
//! to write by hand. [`IntrospectionBuilder`] assembles them from type
//! strings instead; the SDL constants cover tests where the schema format
//! does not matter.
//!
//! # Guidelines
//!
//! - **Use shared fixtures** when the specific schema doesn't matter, just that
//!   it's valid and has nested types with arguments.
//! - **Use inline fixtures** when the test is about a specific schema change,
//!   so the old and current schema can be read side by side.

use serde_json::{json, Value};

/// Minimal schema with just Query and a User type.
pub const BASIC_SCHEMA: &str = r#"
type Query {
    user(id: ID!): User
    users: [User!]!
}

type User {
    id: ID!
    name: String!
    email: String!
}
"#;

/// Schema with nested object types and arguments on several levels.
pub const NESTED_SCHEMA: &str = r#"
type Query {
    user(id: ID!): User
    users(first: Int, after: String): [User!]!
    post(id: ID!): Post
    posts: [Post!]!
}

type User {
    id: ID!
    name: String!
    email: String!
    posts(first: Int): [Post!]!
}

type Post {
    id: ID!
    title: String!
    content: String!
    author: User!
    comments: [Comment!]!
}

type Comment {
    id: ID!
    text: String!
    author: User!
}
"#;

const BUILTIN_SCALARS: &[&str] = &["String", "Int", "Float", "Boolean", "ID"];

/// Builds a type reference from GraphQL type syntax, e.g. `[ID!]!`.
///
/// Named types are given kind `SCALAR` for the built-in scalars and `OBJECT`
/// otherwise; the checker only reads names from references.
pub fn type_ref(ty: &str) -> Value {
    let ty = ty.trim();
    if let Some(inner) = ty.strip_suffix('!') {
        return json!({ "kind": "NON_NULL", "name": null, "ofType": type_ref(inner) });
    }
    if let Some(inner) = ty.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        return json!({ "kind": "LIST", "name": null, "ofType": type_ref(inner) });
    }
    let kind = if BUILTIN_SCALARS.contains(&ty) {
        "SCALAR"
    } else {
        "OBJECT"
    };
    json!({ "kind": kind, "name": ty, "ofType": null })
}

/// A field with its arguments, as added to an object type.
#[derive(Debug, Clone)]
pub struct FieldFixture {
    name: String,
    ty: String,
    args: Vec<(String, String)>,
}

/// Starts a field fixture: `field("friends", "[User!]!")`.
pub fn field(name: &str, ty: &str) -> FieldFixture {
    FieldFixture {
        name: name.to_string(),
        ty: ty.to_string(),
        args: Vec::new(),
    }
}

impl FieldFixture {
    pub fn arg(mut self, name: &str, ty: &str) -> Self {
        self.args.push((name.to_string(), ty.to_string()));
        self
    }

    fn into_value(self) -> Value {
        json!({
            "name": self.name,
            "description": null,
            "args": input_values(&self.args),
            "type": type_ref(&self.ty),
            "isDeprecated": false,
            "deprecationReason": null,
        })
    }
}

fn input_values(args: &[(String, String)]) -> Value {
    args.iter()
        .map(|(name, ty)| {
            json!({
                "name": name,
                "description": null,
                "type": type_ref(ty),
                "defaultValue": null,
            })
        })
        .collect()
}

/// Builder for introspection results.
///
/// # Example
///
/// ```
/// use graphql_test_utils::fixtures::{field, IntrospectionBuilder};
///
/// let json = IntrospectionBuilder::new()
///     .object("Query", [field("search", "[String]").arg("limit", "Int")])
///     .to_response_json();
/// assert!(json.starts_with("{\"data\""));
/// ```
#[derive(Debug, Clone)]
pub struct IntrospectionBuilder {
    query_type: String,
    mutation_type: Option<String>,
    types: Vec<Value>,
    directives: Vec<Value>,
}

impl Default for IntrospectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IntrospectionBuilder {
    /// Creates an empty schema whose query root is `Query`.
    pub fn new() -> Self {
        Self {
            query_type: "Query".to_string(),
            mutation_type: None,
            types: Vec::new(),
            directives: Vec::new(),
        }
    }

    pub fn query_type(mut self, name: &str) -> Self {
        self.query_type = name.to_string();
        self
    }

    pub fn mutation_type(mut self, name: &str) -> Self {
        self.mutation_type = Some(name.to_string());
        self
    }

    pub fn scalar(mut self, name: &str) -> Self {
        self.types.push(json!({ "kind": "SCALAR", "name": name }));
        self
    }

    pub fn object(mut self, name: &str, fields: impl IntoIterator<Item = FieldFixture>) -> Self {
        let fields: Vec<Value> = fields.into_iter().map(FieldFixture::into_value).collect();
        self.types.push(json!({
            "kind": "OBJECT",
            "name": name,
            "fields": fields,
            "interfaces": [],
        }));
        self
    }

    pub fn input_object(mut self, name: &str, fields: &[(&str, &str)]) -> Self {
        let fields: Vec<(String, String)> = fields
            .iter()
            .map(|(name, ty)| ((*name).to_string(), (*ty).to_string()))
            .collect();
        self.types.push(json!({
            "kind": "INPUT_OBJECT",
            "name": name,
            "inputFields": input_values(&fields),
        }));
        self
    }

    /// Adds a custom directive with the given arguments.
    pub fn directive(mut self, name: &str, locations: &[&str], args: &[(&str, &str)]) -> Self {
        let args: Vec<(String, String)> = args
            .iter()
            .map(|(name, ty)| ((*name).to_string(), (*ty).to_string()))
            .collect();
        self.directives.push(json!({
            "name": name,
            "locations": locations,
            "args": input_values(&args),
            "isRepeatable": false,
        }));
        self
    }

    /// The bare data object: `{"__schema": ...}`.
    pub fn build(&self) -> Value {
        let mutation_type = self
            .mutation_type
            .as_ref()
            .map(|name| json!({ "name": name }));
        json!({
            "__schema": {
                "queryType": { "name": self.query_type },
                "mutationType": mutation_type,
                "subscriptionType": null,
                "types": self.types,
                "directives": self.directives,
            }
        })
    }

    pub fn to_json(&self) -> String {
        self.build().to_string()
    }

    /// A complete GraphQL response: `{"data": {"__schema": ...}}`.
    pub fn to_response_json(&self) -> String {
        json!({ "data": self.build() }).to_string()
    }
}
