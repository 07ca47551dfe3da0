mod config;
mod node;
mod registry;

pub use config::RegistryConfig;
pub use node::{Iter, NodeBody, RuleNode};
pub use registry::{NameRegistry, DEFAULT_MAX_DEPTH};
