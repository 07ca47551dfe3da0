use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::parse::kind_of;
use crate::{NameRegistry, RuleNode, RuleTreeError};

/// Envelope key used when none is configured.
pub const DEFAULT_RULE_KEY: &str = "rule";

/// Loads a rule expression out of a YAML or JSON document.
///
/// The document must be a mapping; the value under the configured key is
/// handed to [`parse()`](crate::parse::parse).
///
/// # Example
///
/// ```
/// use rule_tree::{NameRegistry, RuleDocument};
///
/// let registry = NameRegistry::with_names(["and", "user", "service"]);
/// let tree = RuleDocument::new()
///     .key("policy")
///     .parse_yaml("policy:\n  and:\n    - user\n    - service\n", &registry)
///     .unwrap();
///
/// assert_eq!(tree.to_string(), "and(user, service)");
/// ```
#[derive(Debug, Clone)]
pub struct RuleDocument {
    key: String,
}

impl Default for RuleDocument {
    fn default() -> Self {
        Self {
            key: DEFAULT_RULE_KEY.to_owned(),
        }
    }
}

impl RuleDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different envelope key than `rule`.
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// # Errors
    ///
    /// Returns [`RuleTreeError`] if the YAML is invalid, the key is missing,
    /// or the rule expression fails to parse.
    pub fn parse_yaml(&self, input: &str, registry: &NameRegistry) -> Result<RuleNode, RuleTreeError> {
        let document: Value = serde_yaml::from_str(input)?;
        debug!(format = "yaml", key = %self.key, "decoded rule document");
        self.parse_document(document, registry)
    }

    /// # Errors
    ///
    /// Returns [`RuleTreeError`] if the JSON is invalid, the key is missing,
    /// or the rule expression fails to parse.
    pub fn parse_json(&self, input: &str, registry: &NameRegistry) -> Result<RuleNode, RuleTreeError> {
        let document: Value = serde_json::from_str(input)?;
        debug!(format = "json", key = %self.key, "decoded rule document");
        self.parse_document(document, registry)
    }

    /// Read and parse a document file. `.json` files are decoded as JSON,
    /// anything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`RuleTreeError`] on I/O, decode, or parse failure.
    pub fn parse_file(
        &self,
        path: impl AsRef<Path>,
        registry: &NameRegistry,
    ) -> Result<RuleNode, RuleTreeError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading rule document");
        if is_json_path(path) {
            self.parse_json(&input, registry)
        } else {
            self.parse_yaml(&input, registry)
        }
    }

    fn parse_document(&self, document: Value, registry: &NameRegistry) -> Result<RuleNode, RuleTreeError> {
        let mut envelope = match document {
            Value::Object(map) => map,
            other => {
                return Err(RuleTreeError::InvalidDocument {
                    found: kind_of(&other),
                })
            }
        };
        let expression = envelope
            .remove(&self.key)
            .ok_or_else(|| RuleTreeError::MissingRule {
                key: self.key.clone(),
            })?;

        let tree = crate::parse::parse(&expression, registry)?;
        debug!(root = tree.name(), nodes = tree.node_count(), "parsed rule expression");
        Ok(tree)
    }
}

/// Parse the `rule` field of a YAML document.
///
/// # Errors
///
/// See [`RuleDocument::parse_yaml()`].
pub fn from_yaml_str(input: &str, registry: &NameRegistry) -> Result<RuleNode, RuleTreeError> {
    RuleDocument::new().parse_yaml(input, registry)
}

/// Parse the `rule` field of a JSON document.
///
/// # Errors
///
/// See [`RuleDocument::parse_json()`].
pub fn from_json_str(input: &str, registry: &NameRegistry) -> Result<RuleNode, RuleTreeError> {
    RuleDocument::new().parse_json(input, registry)
}

/// Parse the `rule` field of a YAML or JSON file.
///
/// # Errors
///
/// See [`RuleDocument::parse_file()`].
pub fn from_file(path: impl AsRef<Path>, registry: &NameRegistry) -> Result<RuleNode, RuleTreeError> {
    RuleDocument::new().parse_file(path, registry)
}

pub(crate) fn is_json_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
