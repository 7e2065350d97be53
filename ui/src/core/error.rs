//! Error types for the navigation core.

use thiserror::Error;

/// A route table that cannot be used to build the shell.
///
/// These are construction-time defects: the shipped table is validated once
/// at startup and by the test suite.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("route table has no routes")]
    Empty,

    #[error("route `{label}` has no path")]
    MissingPath { label: &'static str },

    #[error("route `{label}` has malformed path `{path}` (expected `/` or `/segment` without trailing slash)")]
    MalformedPath {
        label: &'static str,
        path: &'static str,
    },

    #[error("path `{path}` is registered more than once")]
    DuplicatePath { path: &'static str },
}
