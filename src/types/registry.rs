use tracing::debug;
use unicase::UniCase;

use crate::parse::ParseError;
use crate::RuleNode;

use super::config::RegistryConfig;

/// Default maximum node level. The root sits at level 0.
pub const DEFAULT_MAX_DEPTH: i64 = 2;

/// The set of rule names the parser accepts, plus the nesting limit.
///
/// Built once by the embedding application and passed by reference into every
/// [`parse()`](crate::parse::parse) call. Lookups are exact (case-sensitive);
/// [`remove()`](Self::remove) matches case-insensitively.
///
/// # Example
///
/// ```
/// use rule_tree::NameRegistry;
///
/// let registry = NameRegistry::new()
///     .names(["and", "or", "user"])
///     .max_depth(3);
///
/// assert!(registry.is_supported("user"));
/// assert!(!registry.is_supported("User"));
/// assert_eq!(registry.max_depth_limit(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct NameRegistry {
    names: Vec<String>,
    max_depth: i64,
}

impl Default for NameRegistry {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl NameRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the given names and the default depth limit.
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new().names(names)
    }

    /// Build a registry from a deserialized [`RegistryConfig`].
    #[must_use]
    pub fn from_config(config: RegistryConfig) -> Self {
        Self {
            names: config.names,
            max_depth: config.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
        }
    }

    /// Builder form of [`add()`](Self::add).
    #[must_use]
    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add(names);
        self
    }

    /// Builder form of [`set_max_depth()`](Self::set_max_depth).
    #[must_use]
    pub fn max_depth(mut self, limit: i64) -> Self {
        self.set_max_depth(limit);
        self
    }

    /// Append names to the accepted set. Duplicates are kept.
    pub fn add<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.names.len();
        self.names.extend(names.into_iter().map(Into::into));
        if self.names.len() > before {
            debug!(
                added = self.names.len() - before,
                total = self.names.len(),
                "registered rule names"
            );
        }
    }

    /// Remove every entry equal to `name` under Unicode case folding.
    /// Absent names are ignored.
    pub fn remove(&mut self, name: &str) {
        let folded = UniCase::new(name);
        let before = self.names.len();
        self.names.retain(|n| UniCase::new(n.as_str()) != folded);
        debug!(
            rule = name,
            removed = before - self.names.len(),
            "unregistered rule name"
        );
    }

    /// Set the maximum node level. Not validated: 0 accepts only a root,
    /// a negative limit rejects the root as well.
    pub fn set_max_depth(&mut self, limit: i64) {
        debug!(limit, "max depth limit changed");
        self.max_depth = limit;
    }

    #[must_use]
    pub fn max_depth_limit(&self) -> i64 {
        self.max_depth
    }

    /// Exact, case-sensitive membership test.
    #[must_use]
    pub fn is_supported(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Like [`is_supported()`](Self::is_supported), reporting absence as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NotFound`] if `name` is not registered.
    pub fn check(&self, name: &str) -> Result<(), ParseError> {
        if self.is_supported(name) {
            Ok(())
        } else {
            Err(ParseError::NotFound {
                name: name.to_owned(),
            })
        }
    }

    /// Parse a rule expression against this registry.
    ///
    /// Shorthand for [`parse()`](crate::parse::parse).
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the expression is invalid.
    pub fn parse(&self, value: &serde_json::Value) -> Result<RuleNode, ParseError> {
        crate::parse::parse(value, self)
    }

    /// Whether a node at `level` is within the depth limit.
    #[must_use]
    pub(crate) fn allows_level(&self, level: usize) -> bool {
        i64::try_from(level).is_ok_and(|level| level <= self.max_depth)
    }

    /// Registered names in insertion order, duplicates included.
    #[must_use]
    pub fn registered(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_lookup() {
        let mut reg = NameRegistry::new();
        reg.add(["user", "service"]);
        assert!(reg.is_supported("user"));
        assert!(reg.is_supported("service"));
        assert!(!reg.is_supported("location"));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn add_empty_is_noop() {
        let mut reg = NameRegistry::with_names(["user"]);
        reg.add(Vec::<String>::new());
        assert_eq!(reg.registered(), ["user"]);
    }

    #[test]
    fn add_keeps_duplicates() {
        let mut reg = NameRegistry::new();
        reg.add(["user", "user"]);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let reg = NameRegistry::with_names(["user"]);
        assert!(!reg.is_supported("USER"));
        assert!(!reg.is_supported("User"));
    }

    #[test]
    fn remove_is_case_insensitive_and_removes_all() {
        let mut reg = NameRegistry::with_names(["user", "USER", "service", "User"]);
        reg.remove("uSeR");
        assert_eq!(reg.registered(), ["service"]);
    }

    #[test]
    fn remove_folds_final_sigma() {
        let mut reg = NameRegistry::with_names(["οδοσ", "οδος", "user"]);
        reg.remove("ΟΔΟΣ");
        assert_eq!(reg.registered(), ["user"]);
    }

    #[test]
    fn remove_absent_is_ignored() {
        let mut reg = NameRegistry::with_names(["user"]);
        reg.remove("location");
        assert_eq!(reg.registered(), ["user"]);
    }

    #[test]
    fn check_reports_missing_name() {
        let reg = NameRegistry::with_names(["user"]);
        assert!(reg.check("user").is_ok());
        let err = reg.check("invalid").unwrap_err();
        assert!(matches!(err, ParseError::NotFound { ref name } if name == "invalid"));
    }

    #[test]
    fn default_max_depth() {
        let reg = NameRegistry::new();
        assert_eq!(reg.max_depth_limit(), DEFAULT_MAX_DEPTH);
        assert!(reg.allows_level(2));
        assert!(!reg.allows_level(3));
    }

    #[test]
    fn zero_and_negative_limits() {
        let mut reg = NameRegistry::new().max_depth(0);
        assert!(reg.allows_level(0));
        assert!(!reg.allows_level(1));

        reg.set_max_depth(-1);
        assert!(!reg.allows_level(0));
    }

    #[test]
    fn empty_registry() {
        let reg = NameRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
    }

    #[test]
    fn from_config_defaults_depth() {
        let config = RegistryConfig {
            names: vec!["and".into(), "or".into()],
            max_depth: None,
        };
        let reg = NameRegistry::from_config(config);
        assert_eq!(reg.registered(), ["and", "or"]);
        assert_eq!(reg.max_depth_limit(), DEFAULT_MAX_DEPTH);
    }
}
