//! Parses nested YAML/JSON rule expressions into a typed, depth-bounded tree of
//! [`RuleNode`]s.
//!
//! A rule expression takes one of three shapes: a bare name (`user`), a name
//! bound to a list of child expressions (`and: [user, service]`), or a name
//! bound to free-form arguments (`location: {region: uk}`). Every name must be
//! registered in a [`NameRegistry`].
//!
//! ```
//! use rule_tree::{from_yaml_str, NameRegistry};
//!
//! let registry = NameRegistry::with_names(["or", "and", "user", "service", "opening-hours"]);
//! let yaml = r#"
//! rule:
//!   or:
//!     - user
//!     - and:
//!         - service
//!         - opening-hours:
//!             opening: "10:00"
//!             closing: "20:00"
//! "#;
//!
//! let tree = from_yaml_str(yaml, &registry).unwrap();
//! assert_eq!(tree.name(), "or");
//! assert_eq!(tree.children()[1].children()[1].level(), 2);
//! ```

mod document;
mod error;
pub mod parse;
mod types;

pub use document::{from_file, from_json_str, from_yaml_str, RuleDocument, DEFAULT_RULE_KEY};
pub use error::RuleTreeError;
pub use parse::{ErrorKind, ParseError};
pub use types::{Iter, NameRegistry, NodeBody, RegistryConfig, RuleNode, DEFAULT_MAX_DEPTH};
