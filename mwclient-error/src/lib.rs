//! # mwclient-error
//!
//! Error handling for mwclient, the MediaWiki API client.
//!
//! ## Design Philosophy
//!
//! - **MultiError**: One error value standing for an ordered, non-empty set of
//!   independent problems (an API error plus any number of warnings)
//! - **Errors**: Accumulator that collapses to "no error" when nothing was pushed
//! - **ErrorKind**: Know what internal failure occurred (e.g., MalformedResponse)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use mwclient_error::{Error, ErrorKind, Errors};
//!
//! assert!(Errors::new().err().is_none());
//!
//! let mut errs = Errors::new();
//! errs.push(
//!     Error::new(ErrorKind::MalformedResponse, "missing string field 'code'")
//!         .with_operation("extract::error")
//!         .with_context("path", "error.code"),
//! );
//! let multi = errs.err().unwrap();
//! assert_eq!(multi.len(), 1);
//! ```
//!
//! ## Principles
//!
//! - An empty set of problems is never returned as an error value
//! - Aggregates preserve discovery order and never drop elements
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context

mod error;
mod kind;
mod multi;

pub use error::Error;
pub use kind::ErrorKind;
pub use multi::{BoxError, Errors, MultiError};

/// Result type alias using mwclient Error
pub type Result<T> = std::result::Result<T, Error>;
