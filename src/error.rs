use thiserror::Error;

use crate::parse::ParseError;

/// Unified error type covering document decoding, I/O and parsing.
///
/// Returned by the document layer ([`from_yaml_str()`](crate::from_yaml_str),
/// [`RuleDocument`](crate::RuleDocument)) and by config loading.
#[derive(Debug, Error)]
pub enum RuleTreeError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("document has no '{key}' field")]
    MissingRule { key: String },

    #[error("document must be a mapping, found {found}")]
    InvalidDocument { found: &'static str },
}

impl RuleTreeError {
    /// The wrapped [`ParseError`], if this failure came from the rule expression itself.
    #[must_use]
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            RuleTreeError::Parse(err) => Some(err),
            _ => None,
        }
    }
}
