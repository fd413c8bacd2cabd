//! # mwclient API response classification
//!
//! Finds every problem a MediaWiki API response reports and hands them back
//! as one aggregate error value.
//!
//! ## Core Concepts
//! - **ResponseNode**: Read-only view of a decoded JSON response tree
//! - **ApiError**: The single `error` object of a rejected request (fatal)
//! - **ApiWarning**: One line of one module's `warnings` message (advisory)
//! - **Classifier**: Walks `error` and `warnings` and collects a `MultiError`
//! - **Introspection**: `is_api_err` answers whether an aggregate holds only
//!   API-originated problems
//!
//! ## Usage
//!
//! ```rust
//! use mwclient_api::{extract_api_errors, is_api_err};
//! use serde_json::json;
//!
//! let resp = json!({
//!     "warnings": {
//!         "tokens": { "*": "Action 'a' is not allowed\nAction 'b' is not allowed" }
//!     }
//! });
//!
//! let (_, err) = extract_api_errors(&resp);
//! let err = err.expect("two warnings");
//! assert_eq!(err.len(), 2);
//! assert!(is_api_err(&err));
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod introspect;
pub mod problem;
pub mod tree;

pub use config::{ClassifierConfig, MalformedPolicy};
pub use error::{BoxError, Error, ErrorKind, Errors, MultiError, Result};
pub use extract::{extract_api_errors, Classifier};
pub use introspect::{api_problems, as_api_problem, has_fatal, is_api_err};
pub use problem::{ApiError, ApiProblem, ApiWarning, Severity};
pub use tree::{NodeKind, ResponseNode};
