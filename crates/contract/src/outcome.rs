use crate::checker::Discrepancy;
use crate::diagnostics::{SyntaxError, ValidationError};

/// Result of checking one query against an old and a current schema.
///
/// Exactly one variant is produced per check. Earlier phases win: a query
/// that does not parse never reports validation errors, and a query that
/// does not validate against the current schema is never compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    SyntaxError(SyntaxError),
    ValidationFailure(Vec<ValidationError>),
    /// The query is valid but would be served with different types.
    CompatibilityFailure(Vec<Discrepancy>),
    Success,
}

impl CheckOutcome {
    pub(crate) fn from_discrepancies(discrepancies: Vec<Discrepancy>) -> Self {
        if discrepancies.is_empty() {
            Self::Success
        } else {
            Self::CompatibilityFailure(discrepancies)
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    #[must_use]
    pub const fn syntax_error(&self) -> Option<&SyntaxError> {
        match self {
            Self::SyntaxError(error) => Some(error),
            _ => None,
        }
    }

    #[must_use]
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::ValidationFailure(errors) => errors,
            _ => &[],
        }
    }

    #[must_use]
    pub fn discrepancies(&self) -> &[Discrepancy] {
        match self {
            Self::CompatibilityFailure(discrepancies) => discrepancies,
            _ => &[],
        }
    }

    /// Short label for logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SyntaxError(_) => "syntax-error",
            Self::ValidationFailure(_) => "validation-failure",
            Self::CompatibilityFailure(_) => "compatibility-failure",
            Self::Success => "success",
        }
    }
}
