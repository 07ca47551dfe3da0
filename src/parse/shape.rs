use serde_json::{Map, Value};

use crate::{NameRegistry, RuleNode};

use super::ParseError;

/// The structural form of a rule expression value.
#[derive(Debug)]
enum Shape<'v> {
    /// `"user"`; a null below the root reads as the empty name.
    Name(&'v str),
    /// `{"and": [...]}`; a null list counts as empty.
    List(&'v str, &'v [Value]),
    /// `{"location": {...}}`
    Object(&'v str, &'v Value),
}

// -- Root -------------------------------------------------------------------

pub(super) fn parse_root(value: &Value, registry: &NameRegistry) -> Result<RuleNode, ParseError> {
    match value {
        Value::Null => return Err(ParseError::undefined("object is null object")),
        Value::String(s) if s.is_empty() => {
            return Err(ParseError::undefined("object has empty string"));
        }
        Value::Array(_) => return Err(ParseError::not_acceptable(value.to_string())),
        _ => {}
    }
    parse_node(value, 0, registry)
}

// -- Recursion --------------------------------------------------------------

fn parse_node(value: &Value, level: usize, registry: &NameRegistry) -> Result<RuleNode, ParseError> {
    if !registry.allows_level(level) {
        return Err(ParseError::MaxDepthExceeded {
            limit: registry.max_depth_limit(),
            level,
        });
    }

    match classify(value, level)? {
        Shape::Name(name) => {
            registry.check(name)?;
            Ok(RuleNode::leaf(name, level))
        }
        Shape::List(name, items) => {
            registry.check(name)?;
            let children = items
                .iter()
                .map(|item| parse_node(item, level + 1, registry))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(RuleNode::with_children(name, level, children))
        }
        Shape::Object(name, args) => {
            registry.check(name)?;
            Ok(RuleNode::with_arguments(name, level, args.clone()))
        }
    }
}

// -- Classification ---------------------------------------------------------

/// Pick the shape by the value's own type tag. Priority is string, then a map
/// bound to a list, then a map bound to anything else.
fn classify(value: &Value, level: usize) -> Result<Shape<'_>, ParseError> {
    match value {
        Value::String(name) => Ok(Shape::Name(name.as_str())),
        Value::Null => Ok(Shape::Name("")),
        Value::Object(map) => {
            let (name, bound) = single_entry(map)?;
            match bound {
                Value::Array(items) => Ok(Shape::List(name, items.as_slice())),
                Value::Null => Ok(Shape::List(name, &[])),
                other => Ok(Shape::Object(name, other)),
            }
        }
        other => Err(ParseError::Malformed {
            level,
            found: kind_of(other),
        }),
    }
}

fn single_entry(map: &Map<String, Value>) -> Result<(&str, &Value), ParseError> {
    let mut entries = map.iter();
    match (entries.next(), entries.next()) {
        (Some((name, bound)), None) => Ok((name.as_str(), bound)),
        (None, _) => Err(ParseError::undefined("object has no name")),
        (Some(_), Some(_)) => {
            let names: Vec<&str> = map.keys().map(String::as_str).collect();
            Err(ParseError::not_acceptable(format!(
                "multiple names [{}]",
                names.join(", ")
            )))
        }
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
