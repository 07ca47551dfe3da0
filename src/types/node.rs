use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// What a [`RuleNode`] carries besides its name.
///
/// The three source shapes are mutually exclusive, so a node holds children,
/// arguments, or neither, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeBody {
    /// Bare name, e.g. `user`.
    Leaf,
    /// Name bound to a list, e.g. `and: [user, service]`.
    Children(Vec<RuleNode>),
    /// Name bound to anything else, captured verbatim.
    Arguments(serde_json::Value),
}

/// A parsed rule expression node.
///
/// Produced by [`parse()`](crate::parse::parse). Nodes are immutable once built;
/// the root sits at level 0 and every child is one level below its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleNode {
    name: String,
    level: usize,
    body: NodeBody,
}

impl RuleNode {
    pub(crate) fn leaf(name: impl Into<String>, level: usize) -> Self {
        Self {
            name: name.into(),
            level,
            body: NodeBody::Leaf,
        }
    }

    pub(crate) fn with_children(
        name: impl Into<String>,
        level: usize,
        children: Vec<RuleNode>,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            body: NodeBody::Children(children),
        }
    }

    pub(crate) fn with_arguments(
        name: impl Into<String>,
        level: usize,
        arguments: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            body: NodeBody::Arguments(arguments),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Zero-based nesting depth of this node.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    #[must_use]
    pub fn body(&self) -> &NodeBody {
        &self.body
    }

    /// Child nodes in source order. Empty unless the node was bound to a list.
    #[must_use]
    pub fn children(&self) -> &[RuleNode] {
        match &self.body {
            NodeBody::Children(children) => children,
            NodeBody::Leaf | NodeBody::Arguments(_) => &[],
        }
    }

    /// The verbatim argument value. `None` unless the node was bound to an object or scalar.
    #[must_use]
    pub fn arguments(&self) -> Option<&serde_json::Value> {
        match &self.body {
            NodeBody::Arguments(args) => Some(args),
            NodeBody::Leaf | NodeBody::Children(_) => None,
        }
    }

    /// Compact JSON serialization of the arguments. Object keys come out sorted.
    #[must_use]
    pub fn arguments_json(&self) -> Option<String> {
        self.arguments().map(serde_json::Value::to_string)
    }

    /// Whether the node carries neither children nor arguments.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children().is_empty() && self.arguments().is_none()
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// The deepest level reached in this subtree.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.iter().map(RuleNode::level).max().unwrap_or(self.level)
    }

    /// Pre-order traversal of this subtree.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// Node names in pre-order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.iter().map(RuleNode::name)
    }
}

/// Pre-order iterator over a [`RuleNode`] subtree.
#[derive(Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a RuleNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a RuleNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

impl<'a> IntoIterator for &'a RuleNode {
    type Item = &'a RuleNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for RuleNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            NodeBody::Leaf => write!(f, "{}", self.name),
            NodeBody::Children(children) => {
                write!(f, "{}(", self.name)?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, ")")
            }
            NodeBody::Arguments(args) => write!(f, "{}{args}", self.name),
        }
    }
}

impl Serialize for RuleNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RuleNode", 4)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("level", &self.level)?;
        state.serialize_field("children", self.children())?;
        state.serialize_field("arguments", &self.arguments())?;
        state.end()
    }
}
