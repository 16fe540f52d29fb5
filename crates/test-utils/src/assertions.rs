//! Snapshot testing assertions for check results
//!
//! Messages are numbered one per line so snapshots stay readable and diff
//! cleanly when a single entry changes.

use std::fmt::Display;

/// Format a list of displayable items (discrepancies, validation errors)
/// for snapshot testing.
///
/// # Example
///
/// ```ignore
/// use graphql_test_utils::assertions::format_messages;
///
/// let outcome = check(query, &old, &current)?;
/// insta::assert_snapshot!(format_messages(outcome.discrepancies()));
/// ```
pub fn format_messages<T: Display>(items: &[T]) -> String {
    if items.is_empty() {
        return String::from("(no messages)");
    }

    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("[{}] {item}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
