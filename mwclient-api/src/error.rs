//! Error types for response classification
//!
//! Re-exports mwclient-error and provides classifier-specific constructors.

pub use mwclient_error::{BoxError, Error, ErrorKind, Errors, MultiError, Result};

use crate::tree::NodeKind;

// =============================================================================
// Classifier-specific error constructors
// =============================================================================

/// A node was present but had the wrong JSON type
pub fn unexpected_node(
    operation: &'static str,
    path: impl Into<String>,
    expected: NodeKind,
    found: NodeKind,
) -> Error {
    Error::malformed_response(path, format!("expected {}, found {}", expected, found))
        .with_operation(operation)
        .with_context("expected", expected.as_str())
        .with_context("found", found.as_str())
}

/// A required field was absent from an object node
pub fn missing_field(operation: &'static str, path: impl Into<String>, field: &str) -> Error {
    Error::malformed_response(path, format!("missing field '{}'", field))
        .with_operation(operation)
        .with_context("field", field)
}

/// An invalid classifier configuration value
pub fn config_invalid(message: impl Into<String>) -> Error {
    Error::config_invalid(message).with_operation("config::validate")
}
