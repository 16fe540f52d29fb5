// Positions and diagnostics surfaced by the parse and validation phases.

use apollo_compiler::parser::LineColumn;
use apollo_compiler::validation::DiagnosticList;

/// A position in the query text. Both fields are 1-based, matching
/// `apollo-compiler`'s `LineColumn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}

impl SourcePosition {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl From<LineColumn> for SourcePosition {
    fn from(value: LineColumn) -> Self {
        Self {
            line: value.line,
            column: value.column,
        }
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The query text could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Message of the first syntax error reported by the parser.
    pub message: String,
    /// Where the first error occurred, when the parser could tell.
    pub position: Option<SourcePosition>,
}

impl SyntaxError {
    pub(crate) fn from_diagnostics(errors: &DiagnosticList) -> Self {
        errors.iter().next().map_or_else(
            || Self {
                message: "invalid query syntax".to_string(),
                position: None,
            },
            |first| Self {
                message: first.error.to_string(),
                position: first.line_column_range().map(|range| range.start.into()),
            },
        )
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(position) => write!(f, "Syntax error at {position}: {}", self.message),
            None => write!(f, "Syntax error: {}", self.message),
        }
    }
}

/// A general well-formedness error of the query against the current schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    pub position: Option<SourcePosition>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(position) => write!(f, "{position}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Converts apollo-compiler diagnostics, keeping their order.
pub(crate) fn validation_errors(errors: &DiagnosticList) -> Vec<ValidationError> {
    errors
        .iter()
        .map(|diag| ValidationError {
            message: diag.error.to_string(),
            position: diag.line_column_range().map(|range| range.start.into()),
        })
        .collect()
}

/// Joins diagnostic messages into one line, for errors that carry a single message.
pub(crate) fn join_messages(errors: &DiagnosticList) -> String {
    validation_errors(errors)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
