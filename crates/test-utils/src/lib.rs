//! # GraphQL Test Utilities
//!
//! Shared test infrastructure for the contract crates.

// Test utilities are less strict than production code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::needless_raw_string_hashes)]
//!
//! ## Modules
//!
//! - [`fixtures`] - Schema fixtures, in SDL and as introspection results
//! - [`assertions`] - Formatting helpers for snapshot tests
//!
//! ## Quick Start
//!
//! ```
//! use graphql_test_utils::fixtures::{field, IntrospectionBuilder};
//!
//! let json = IntrospectionBuilder::new()
//!     .object("Query", [field("user", "User")])
//!     .object("User", [field("id", "ID!")])
//!     .to_json();
//! assert!(json.contains("\"__schema\""));
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::format_messages;
pub use fixtures::{field, type_ref, FieldFixture, IntrospectionBuilder};

// Re-export insta for snapshot testing
pub use insta;

/// Installs a tracing subscriber that writes through the test harness.
///
/// Filtered by `RUST_LOG`, silent when unset. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_test_writer()
        .try_init();
}
