use std::fmt;

use thiserror::Error;

/// The family kind of a [`ParseError`].
///
/// Every parse failure belongs to the same rule-object family; the kind lets
/// callers branch on the class of failure without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Undefined,
    NotAcceptable,
    NotFound,
    MaxDepthExceeded,
    Malformed,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Undefined => write!(f, "undefined"),
            ErrorKind::NotAcceptable => write!(f, "not acceptable"),
            ErrorKind::NotFound => write!(f, "not found"),
            ErrorKind::MaxDepthExceeded => write!(f, "max depth exceeded"),
            ErrorKind::Malformed => write!(f, "malformed"),
        }
    }
}

/// Errors produced when turning a rule expression into a [`RuleNode`](crate::RuleNode) tree.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("parameter undefined: {reason}")]
    Undefined { reason: String },

    #[error("parameter not acceptable: {reason}, please choose one")]
    NotAcceptable { reason: String },

    #[error("'{name}' parameter not found")]
    NotFound { name: String },

    #[error("parameter max depth limit ({limit}) exceeded at level {level}")]
    MaxDepthExceeded { limit: i64, level: usize },

    #[error("parameter malformed: unexpected {found} at level {level}")]
    Malformed { level: usize, found: &'static str },

    #[error("parameter malformed: {0}")]
    Syntax(#[from] serde_json::Error),
}

impl ParseError {
    pub(crate) fn undefined(reason: impl Into<String>) -> Self {
        Self::Undefined {
            reason: reason.into(),
        }
    }

    pub(crate) fn not_acceptable(reason: impl Into<String>) -> Self {
        Self::NotAcceptable {
            reason: reason.into(),
        }
    }

    /// The family kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Undefined { .. } => ErrorKind::Undefined,
            ParseError::NotAcceptable { .. } => ErrorKind::NotAcceptable,
            ParseError::NotFound { .. } => ErrorKind::NotFound,
            ParseError::MaxDepthExceeded { .. } => ErrorKind::MaxDepthExceeded,
            ParseError::Malformed { .. } | ParseError::Syntax(_) => ErrorKind::Malformed,
        }
    }
}
