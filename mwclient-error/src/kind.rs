//! Error kinds for mwclient operations

use std::fmt;

/// The kind of internal error that occurred.
///
/// These categorize failures raised by mwclient itself, as opposed to
/// problems reported by the remote API (those are separate error types).
/// Users can match on ErrorKind to decide how to handle specific error cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// Invalid configuration or parameters
    ConfigInvalid,

    // =========================================================================
    // Response errors
    // =========================================================================
    /// A trouble-signaling section of a response had an unexpected shape
    MalformedResponse,

    /// Failed to parse input
    ParseFailed,

    // =========================================================================
    // IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ConfigInvalid => "ConfigInvalid",

            ErrorKind::MalformedResponse => "MalformedResponse",
            ErrorKind::ParseFailed => "ParseFailed",

            ErrorKind::FileNotFound => "FileNotFound",
            ErrorKind::PermissionDenied => "PermissionDenied",
            ErrorKind::IoFailed => "IoFailed",
        }
    }

    /// Check if this kind describes a problem with the response itself
    /// rather than with local input or the environment
    pub fn is_response_problem(&self) -> bool {
        matches!(self, ErrorKind::MalformedResponse)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
