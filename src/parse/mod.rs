mod error;
mod shape;

pub use error::{ErrorKind, ParseError};
pub(crate) use shape::kind_of;

use crate::{NameRegistry, RuleNode};

/// Parse a rule expression value into a [`RuleNode`] tree.
///
/// `value` is the value bound to the rule key of the surrounding document.
/// Every name is checked against `registry`, and no node may sit deeper than
/// the registry's depth limit.
///
/// # Errors
///
/// Returns [`ParseError`] on the first invalid shape, unknown name or depth
/// violation. No partial tree is returned.
pub fn parse(value: &serde_json::Value, registry: &NameRegistry) -> Result<RuleNode, ParseError> {
    shape::parse_root(value, registry)
}

/// Decode JSON text, then [`parse`] it.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] if `input` is not valid JSON, otherwise as [`parse`].
pub fn parse_str(input: &str, registry: &NameRegistry) -> Result<RuleNode, ParseError> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    parse(&value, registry)
}
