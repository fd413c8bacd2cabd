//! Classifier configuration

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{self, Error, Result};

/// Message key used by `formatversion=1` responses
pub const LEGACY_WARNING_FIELD: &str = "*";

/// Message key used by `formatversion=2` responses
pub const WARNING_FIELD: &str = "warnings";

/// What to do with a trouble-signaling section that has an unexpected shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Add a `MalformedResponse` error to the aggregate
    #[default]
    Report,
    /// Log a warning and leave the section out
    Skip,
}

/// Configuration for the response classifier
///
/// # Example
///
/// ```rust
/// use mwclient_api::{ClassifierConfig, MalformedPolicy};
///
/// let config = ClassifierConfig::from_json_str(r#"{"malformed": "skip"}"#).unwrap();
/// assert_eq!(config.malformed, MalformedPolicy::Skip);
/// assert_eq!(config.warning_fields, vec!["*", "warnings"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Keys tried, in order, for the message of each `warnings` module
    pub warning_fields: Vec<String>,
    /// Handling of malformed `error`/`warnings` sections
    pub malformed: MalformedPolicy,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            warning_fields: vec![LEGACY_WARNING_FIELD.to_string(), WARNING_FIELD.to_string()],
            malformed: MalformedPolicy::Report,
        }
    }
}

impl ClassifierConfig {
    pub fn with_warning_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.warning_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_malformed(mut self, policy: MalformedPolicy) -> Self {
        self.malformed = policy;
        self
    }

    /// Check that the configuration can classify anything at all
    pub fn validate(&self) -> Result<()> {
        if self.warning_fields.is_empty() {
            return Err(error::config_invalid("warning_fields must not be empty"));
        }
        if let Some(pos) = self.warning_fields.iter().position(|f| f.is_empty()) {
            return Err(error::config_invalid("warning field names must not be empty")
                .with_context("index", pos.to_string()));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration document
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            Error::config_invalid(format!("invalid classifier config: {}", e))
                .with_operation("config::parse")
                .set_source(e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|e| {
            Error::from(e)
                .with_operation("config::load")
                .with_context("path", path.display().to_string())
        })?;
        Self::from_json_str(&input)
            .map_err(|e| e.with_context("path", path.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ClassifierConfig::default();
        assert_eq!(config.warning_fields, vec!["*", "warnings"]);
        assert_eq!(config.malformed, MalformedPolicy::Report);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = ClassifierConfig::default()
            .with_warning_fields(["warnings"])
            .with_malformed(MalformedPolicy::Skip);
        assert_eq!(config.warning_fields, vec!["warnings"]);
        assert_eq!(config.malformed, MalformedPolicy::Skip);
    }

    #[test]
    fn test_empty_fields_rejected() {
        let err = ClassifierConfig::default()
            .with_warning_fields(Vec::<String>::new())
            .validate()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);

        let err = ClassifierConfig::from_json_str(r#"{"warning_fields": ["*", ""]}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert_eq!(err.context_value("index"), Some("1"));
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let err = ClassifierConfig::from_json_str(r#"{"malformed": "ignore"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert_eq!(err.operation(), "config::parse");
        assert!(err.source_ref().is_some());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"warning_fields": ["warnings"], "malformed": "skip"}}"#).unwrap();

        let config = ClassifierConfig::from_path(file.path()).unwrap();
        assert_eq!(config.warning_fields, vec!["warnings"]);
        assert_eq!(config.malformed, MalformedPolicy::Skip);
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClassifierConfig::from_path(dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert_eq!(err.operation(), "config::load");
        assert!(err.context_value("path").unwrap().ends_with("absent.json"));
    }
}
