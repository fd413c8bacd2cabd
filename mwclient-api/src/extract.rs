//! # Response classification
//!
//! Walks the trouble-signaling parts of a response and turns each distinct
//! problem into its own error value:
//!
//! - `error` → at most one [`ApiError`]
//! - `warnings.<module>.<field>` → one [`ApiWarning`] per non-empty line
//!
//! Everything found is returned as a single [`MultiError`], error first, then
//! warnings in module order and line order. A response with no problems
//! yields `None`.

use tracing::{debug, warn};

use crate::config::{ClassifierConfig, MalformedPolicy};
use crate::error::{self, Error, Errors, MultiError, Result};
use crate::problem::{ApiError, ApiWarning};
use crate::tree::{NodeKind, ResponseNode};

const OP_ERROR: &str = "extract::error";
const OP_WARNINGS: &str = "extract::warnings";

/// Classify a response with the default configuration.
///
/// The response is only borrowed and is handed back unchanged next to the
/// problems found in it.
///
/// # Example
///
/// ```rust
/// use mwclient_api::{extract_api_errors, ApiError};
/// use serde_json::json;
///
/// let resp = json!({"error": {"code": "nouser", "info": "The user parameter must be set"}});
/// let (_, err) = extract_api_errors(&resp);
///
/// let err = err.unwrap();
/// assert_eq!(err.len(), 1);
/// assert_eq!(
///     err.errors()[0].downcast_ref::<ApiError>(),
///     Some(&ApiError::new("nouser", "The user parameter must be set"))
/// );
/// ```
pub fn extract_api_errors<N: ResponseNode + ?Sized>(resp: &N) -> (&N, Option<MultiError>) {
    Classifier::default().extract(resp)
}

/// Extracts API errors and warnings from response trees.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    /// Create a classifier from a validated configuration
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Collect every problem the response reports.
    pub fn extract<'a, N: ResponseNode + ?Sized>(
        &self,
        resp: &'a N,
    ) -> (&'a N, Option<MultiError>) {
        let mut errs = Errors::new();

        if let Some(node) = resp.get("error") {
            self.collect_error(node, &mut errs);
        }
        if let Some(node) = resp.get("warnings") {
            self.collect_warnings(node, &mut errs);
        }

        debug!(problems = errs.len(), "classified API response");
        (resp, errs.err())
    }

    /// Like [`Classifier::extract`], but `Ok` only when nothing was found
    pub fn check<'a, N: ResponseNode + ?Sized>(
        &self,
        resp: &'a N,
    ) -> std::result::Result<&'a N, MultiError> {
        match self.extract(resp) {
            (resp, None) => Ok(resp),
            (_, Some(multi)) => Err(multi),
        }
    }

    fn collect_error<N: ResponseNode + ?Sized>(&self, node: &N, errs: &mut Errors) {
        match parse_api_error(node) {
            Ok(api_err) => {
                debug!(code = api_err.code(), "found API error");
                errs.push(api_err);
            }
            Err(e) => self.malformed(e, errs),
        }
    }

    fn collect_warnings<N: ResponseNode + ?Sized>(&self, node: &N, errs: &mut Errors) {
        let Some(modules) = node.entries() else {
            let e = error::unexpected_node(OP_WARNINGS, "warnings", NodeKind::Object, node.kind());
            self.malformed(e, errs);
            return;
        };

        for (module, entry) in modules {
            let text = match self.warning_text(module, entry) {
                Ok(text) => text,
                Err(e) => {
                    self.malformed(e, errs);
                    continue;
                }
            };

            for line in text.split('\n').filter(|line| !line.is_empty()) {
                debug!(api_module = module, "found API warning");
                errs.push(ApiWarning::new(module, line));
            }
        }
    }

    fn warning_text<'n, N: ResponseNode + ?Sized>(
        &self,
        module: &str,
        entry: &'n N,
    ) -> Result<&'n str> {
        let path = format!("warnings.{}", module);
        if !entry.is_object() {
            return Err(error::unexpected_node(OP_WARNINGS, path, NodeKind::Object, entry.kind()));
        }

        for field in &self.config.warning_fields {
            if let Some(msg) = entry.get(field) {
                return msg.as_str().ok_or_else(|| {
                    error::unexpected_node(
                        OP_WARNINGS,
                        format!("{}.{}", path, field),
                        NodeKind::String,
                        msg.kind(),
                    )
                });
            }
        }

        Err(error::missing_field(OP_WARNINGS, path, &self.config.warning_fields.join("|")))
    }

    fn malformed(&self, err: Error, errs: &mut Errors) {
        match self.config.malformed {
            MalformedPolicy::Report => {
                debug!(error = %err, "reporting malformed response section");
                errs.push(err);
            }
            MalformedPolicy::Skip => {
                warn!(error = %err, "skipping malformed response section");
            }
        }
    }
}

fn parse_api_error<N: ResponseNode + ?Sized>(node: &N) -> Result<ApiError> {
    if !node.is_object() {
        return Err(error::unexpected_node(OP_ERROR, "error", NodeKind::Object, node.kind()));
    }
    let code = required_str(node, "code")?;
    let info = required_str(node, "info")?;
    Ok(ApiError::new(code, info))
}

fn required_str<'n, N: ResponseNode + ?Sized>(node: &'n N, field: &str) -> Result<&'n str> {
    let value = node
        .get(field)
        .ok_or_else(|| error::missing_field(OP_ERROR, "error", field))?;
    value.as_str().ok_or_else(|| {
        error::unexpected_node(
            OP_ERROR,
            format!("error.{}", field),
            NodeKind::String,
            value.kind(),
        )
    })
}
