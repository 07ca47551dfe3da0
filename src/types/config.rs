use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::RuleTreeError;

/// Serializable description of a [`NameRegistry`](super::NameRegistry).
///
/// ```yaml
/// names: [and, or, user, service]
/// max_depth: 3
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub max_depth: Option<i64>,
}

impl RegistryConfig {
    /// # Errors
    ///
    /// Returns [`RuleTreeError::Yaml`] if the input is not a valid config document.
    pub fn from_yaml_str(input: &str) -> Result<Self, RuleTreeError> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// # Errors
    ///
    /// Returns [`RuleTreeError::Json`] if the input is not a valid config document.
    pub fn from_json_str(input: &str) -> Result<Self, RuleTreeError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Read a config file; `.json` files are decoded as JSON, anything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`RuleTreeError`] on I/O or decode failure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RuleTreeError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading registry config");
        if crate::document::is_json_path(path) {
            Self::from_json_str(&input)
        } else {
            Self::from_yaml_str(&input)
        }
    }
}
