//! SDL (Schema Definition Language) rendering of introspection results.

use crate::types::{
    IntrospectionDirective, IntrospectionField, IntrospectionInputValue, IntrospectionResponse,
    IntrospectionSchema, IntrospectionType, IntrospectionTypeRef,
};
use std::fmt::{self, Display, Formatter, Write};

/// Scalars every GraphQL implementation defines implicitly.
const BUILTIN_SCALARS: &[&str] = &["Int", "Float", "String", "Boolean", "ID"];

/// Directives `apollo-compiler` defines implicitly.
const BUILTIN_DIRECTIVES: &[&str] = &["skip", "include", "deprecated", "specifiedBy", "oneOf"];

/// Converts an introspection response to SDL.
///
/// Built-in scalars, built-in directives and introspection types (`__*`) are
/// left out. A `schema { ... }` block is only emitted when a root operation
/// type does not use its conventional name, or when a type carries a
/// conventional root name without being that root; without the block,
/// `apollo-compiler` would treat it as one. Object, interface, enum and
/// input types without members are rendered without braces so the output
/// always parses.
#[must_use]
#[tracing::instrument(skip(introspection), fields(
    types = introspection.data.schema.types.len(),
    directives = introspection.data.schema.directives.len()
))]
pub fn introspection_to_sdl(introspection: &IntrospectionResponse) -> String {
    let sdl = SchemaSdl(&introspection.data.schema).to_string();
    tracing::debug!(sdl_length = sdl.len(), "SDL generation complete");
    sdl.trim_end().to_string()
}

struct SchemaSdl<'a>(&'a IntrospectionSchema);

impl Display for SchemaSdl<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let schema = self.0;

        let roots = [
            ("query", schema.query_type.as_ref(), "Query"),
            ("mutation", schema.mutation_type.as_ref(), "Mutation"),
            ("subscription", schema.subscription_type.as_ref(), "Subscription"),
        ];
        let declares_type = |name: &str| schema.types.iter().any(|t| t.name() == name);
        let needs_schema_def = roots.iter().any(|(_, root, conventional)| match root {
            Some(root) => root.name != *conventional,
            None => declares_type(conventional),
        });

        if needs_schema_def {
            f.write_str("schema {\n")?;
            for (operation, root, _) in roots {
                if let Some(root) = root {
                    writeln!(f, "  {operation}: {}", root.name)?;
                }
            }
            f.write_str("}\n\n")?;
        }

        for directive in &schema.directives {
            if BUILTIN_DIRECTIVES.contains(&directive.name.as_str()) {
                continue;
            }
            write_directive(f, directive)?;
            f.write_str("\n\n")?;
        }

        for type_def in &schema.types {
            let name = type_def.name();
            if name.starts_with("__") || BUILTIN_SCALARS.contains(&name) {
                continue;
            }
            write_type(f, type_def)?;
            f.write_str("\n\n")?;
        }

        Ok(())
    }
}

fn write_directive(f: &mut Formatter<'_>, directive: &IntrospectionDirective) -> fmt::Result {
    write_description(f, directive.description.as_deref(), 0)?;
    write!(f, "directive @{}", directive.name)?;
    write_arguments(f, &directive.args)?;
    if directive.is_repeatable {
        f.write_str(" repeatable")?;
    }
    write!(f, " on {}", directive.locations.join(" | "))
}

fn write_type(f: &mut Formatter<'_>, type_def: &IntrospectionType) -> fmt::Result {
    match type_def {
        IntrospectionType::Scalar(t) => {
            write_description(f, t.description.as_deref(), 0)?;
            write!(f, "scalar {}", t.name)
        }
        IntrospectionType::Object(t) => {
            write_description(f, t.description.as_deref(), 0)?;
            write!(f, "type {}", t.name)?;
            write_implements(f, &t.interfaces)?;
            write_fields(f, &t.fields)
        }
        IntrospectionType::Interface(t) => {
            write_description(f, t.description.as_deref(), 0)?;
            write!(f, "interface {}", t.name)?;
            write_implements(f, &t.interfaces)?;
            write_fields(f, &t.fields)
        }
        IntrospectionType::Union(t) => {
            write_description(f, t.description.as_deref(), 0)?;
            write!(f, "union {}", t.name)?;
            for (i, member) in t.possible_types.iter().enumerate() {
                f.write_str(if i == 0 { " = " } else { " | " })?;
                f.write_str(&member.name)?;
            }
            Ok(())
        }
        IntrospectionType::Enum(t) => {
            write_description(f, t.description.as_deref(), 0)?;
            write!(f, "enum {}", t.name)?;
            if t.enum_values.is_empty() {
                return Ok(());
            }
            f.write_str(" {\n")?;
            for value in &t.enum_values {
                write_description(f, value.description.as_deref(), 1)?;
                write!(f, "  {}", value.name)?;
                if value.is_deprecated {
                    write_deprecated(f, value.deprecation_reason.as_deref())?;
                }
                f.write_char('\n')?;
            }
            f.write_char('}')
        }
        IntrospectionType::InputObject(t) => {
            write_description(f, t.description.as_deref(), 0)?;
            write!(f, "input {}", t.name)?;
            if t.input_fields.is_empty() {
                return Ok(());
            }
            f.write_str(" {\n")?;
            for field in &t.input_fields {
                write_description(f, field.description.as_deref(), 1)?;
                f.write_str("  ")?;
                write_input_value(f, field)?;
                f.write_char('\n')?;
            }
            f.write_char('}')
        }
    }
}

fn write_implements(f: &mut Formatter<'_>, interfaces: &[IntrospectionTypeRef]) -> fmt::Result {
    for (i, interface) in interfaces.iter().enumerate() {
        f.write_str(if i == 0 { " implements " } else { " & " })?;
        f.write_str(&interface.name)?;
    }
    Ok(())
}

fn write_fields(f: &mut Formatter<'_>, fields: &[IntrospectionField]) -> fmt::Result {
    if fields.is_empty() {
        return Ok(());
    }
    f.write_str(" {\n")?;
    for field in fields {
        write_description(f, field.description.as_deref(), 1)?;
        write!(f, "  {}", field.name)?;
        write_arguments(f, &field.args)?;
        write!(f, ": {}", field.type_ref)?;
        if field.is_deprecated {
            write_deprecated(f, field.deprecation_reason.as_deref())?;
        }
        f.write_char('\n')?;
    }
    f.write_char('}')
}

fn write_arguments(f: &mut Formatter<'_>, args: &[IntrospectionInputValue]) -> fmt::Result {
    if args.is_empty() {
        return Ok(());
    }
    f.write_char('(')?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_input_value(f, arg)?;
    }
    f.write_char(')')
}

fn write_input_value(f: &mut Formatter<'_>, value: &IntrospectionInputValue) -> fmt::Result {
    write!(f, "{}: {}", value.name, value.type_ref)?;
    if let Some(default) = &value.default_value {
        write!(f, " = {default}")?;
    }
    Ok(())
}

fn write_deprecated(f: &mut Formatter<'_>, reason: Option<&str>) -> fmt::Result {
    match reason {
        Some(reason) => write!(f, " @deprecated(reason: \"{}\")", escape_string(reason)),
        None => f.write_str(" @deprecated"),
    }
}

fn write_description(f: &mut Formatter<'_>, description: Option<&str>, indent: usize) -> fmt::Result {
    let Some(desc) = description else {
        return Ok(());
    };
    let indent_str = "  ".repeat(indent);
    let has_line_break = desc.contains(['\n', '\r']);
    let needs_escapes = desc
        .chars()
        .any(|c| c.is_control() && !matches!(c, '\n' | '\r' | '\t'));
    if has_line_break && !needs_escapes {
        let desc = desc.replace("\"\"\"", "\\\"\"\"");
        writeln!(f, "{indent_str}\"\"\"\n{desc}\n{indent_str}\"\"\"")
    } else {
        writeln!(f, "{indent_str}\"{}\"", escape_string(desc))
    }
}

fn escape_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(escaped, "\\u{:04X}", u32::from(c));
            }
            c => escaped.push(c),
        }
    }
    escaped
}
