//! Problems reported by the API itself.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a caller should treat a reported problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The request was rejected
    Fatal,
    /// The request was processed, with a caveat
    Advisory,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Fatal => "fatal",
            Severity::Advisory => "advisory",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::ApiError {}
    impl Sealed for super::ApiWarning {}
}

/// Capability shared by every API-originated problem.
///
/// Sealed: [`ApiError`] and [`ApiWarning`] are the only implementors, and
/// [`crate::introspect::as_api_problem`] recognizes both whether stored
/// directly or behind a `Box`.
pub trait ApiProblem: sealed::Sealed + std::error::Error + Send + Sync {
    fn severity(&self) -> Severity;

    /// The module that reported the problem, when the API names one
    fn module(&self) -> Option<&str>;

    /// Human-readable text as sent by the server
    fn info(&self) -> &str;
}

/// The `error` object of a response: the server rejected the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("API error {code}: {info}")]
pub struct ApiError {
    code: String,
    info: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            info: info.into(),
        }
    }

    /// Machine-readable error code, e.g. `nouser`
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl ApiProblem for ApiError {
    fn severity(&self) -> Severity {
        Severity::Fatal
    }

    fn module(&self) -> Option<&str> {
        None
    }

    fn info(&self) -> &str {
        &self.info
    }
}

/// One warning line reported by one API module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("API warning from module '{module}': {info}")]
pub struct ApiWarning {
    module: String,
    info: String,
}

impl ApiWarning {
    pub fn new(module: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            info: info.into(),
        }
    }
}

impl ApiProblem for ApiWarning {
    fn severity(&self) -> Severity {
        Severity::Advisory
    }

    fn module(&self) -> Option<&str> {
        Some(&self.module)
    }

    fn info(&self) -> &str {
        &self.info
    }
}
