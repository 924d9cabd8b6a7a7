//! Rule registry
//!
//! Two name-keyed tables: shared simple rules, referenced as `name`, and
//! factories, referenced as `name:params`. A name lives in at most one table.

use std::collections::HashMap;
use std::sync::Arc;

use crate::foundation::{ConfigurationError, Rule, RuleFactory};

/// Name-keyed store of the rules a rule string may reference.
///
/// A registry is populated up front and then handed to
/// [`Validator::new`](crate::Validator::new), which only ever reads it.
///
/// # Example
///
/// ```rust
/// use dsl_validator::prelude::*;
/// use dsl_validator::rules::IsString;
///
/// let mut registry = RuleRegistry::new();
/// registry.register(IsString).unwrap();
///
/// assert!(registry.has("string"));
/// assert!(!registry.has("min:3"));
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Arc<dyn Rule>>,
    factories: HashMap<String, Arc<dyn RuleFactory>>,
}

impl RuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in catalog.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::rules::install(&mut registry);
        registry
    }

    /// Register a simple rule under its [`Rule::name`]. Overwrites any
    /// existing rule with the same name.
    pub fn register<R: Rule + 'static>(&mut self, rule: R) -> Result<(), ConfigurationError> {
        self.register_shared(Arc::new(rule))
    }

    /// Register an already shared simple rule.
    pub fn register_shared(&mut self, rule: Arc<dyn Rule>) -> Result<(), ConfigurationError> {
        let name = rule.name().to_owned();
        check_name(&name)?;
        if self.factories.contains_key(&name) {
            return Err(ConfigurationError::RuleNameConflict {
                name,
                existing: "factory",
            });
        }
        self.insert_rule(rule);
        Ok(())
    }

    /// Register a factory under `name`. Overwrites any existing factory with
    /// the same name.
    pub fn register_factory<F>(
        &mut self,
        name: impl Into<String>,
        factory: F,
    ) -> Result<(), ConfigurationError>
    where
        F: RuleFactory + 'static,
    {
        self.register_factory_shared(name, Arc::new(factory))
    }

    /// Register an already shared factory under `name`.
    pub fn register_factory_shared(
        &mut self,
        name: impl Into<String>,
        factory: Arc<dyn RuleFactory>,
    ) -> Result<(), ConfigurationError> {
        let name = name.into();
        check_name(&name)?;
        if self.rules.contains_key(&name) {
            return Err(ConfigurationError::RuleNameConflict {
                name,
                existing: "rule",
            });
        }
        self.insert_factory(name, factory);
        Ok(())
    }

    pub(crate) fn insert_rule(&mut self, rule: Arc<dyn Rule>) {
        let name = rule.name().to_owned();
        if self.rules.insert(name.clone(), rule).is_some() {
            tracing::debug!(rule = %name, "replaced registered rule");
        }
    }

    pub(crate) fn insert_factory(&mut self, name: String, factory: Arc<dyn RuleFactory>) {
        if self.factories.insert(name.clone(), factory).is_some() {
            tracing::debug!(factory = %name, "replaced registered factory");
        }
    }

    /// Whether a rule string segment would resolve.
    ///
    /// A segment containing a colon is looked up by its pre-colon prefix in
    /// the factory table; anything else in the simple-rule table.
    pub fn has(&self, segment: &str) -> bool {
        match segment.split_once(':') {
            Some((name, _)) => self.factories.contains_key(name),
            None => self.rules.contains_key(segment),
        }
    }

    /// Look up a simple rule.
    pub fn rule(&self, name: &str) -> Option<&Arc<dyn Rule>> {
        self.rules.get(name)
    }

    /// Look up a factory.
    pub fn factory(&self, name: &str) -> Option<&Arc<dyn RuleFactory>> {
        self.factories.get(name)
    }

    /// Sorted names of the registered simple rules.
    pub fn rule_names(&self) -> Vec<&str> {
        sorted_keys(&self.rules)
    }

    /// Sorted names of the registered factories.
    pub fn factory_names(&self) -> Vec<&str> {
        sorted_keys(&self.factories)
    }

    /// Number of registered rules and factories.
    pub fn len(&self) -> usize {
        self.rules.len() + self.factories.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.factories.is_empty()
    }
}

fn sorted_keys<V>(table: &HashMap<String, V>) -> Vec<&str> {
    let mut names: Vec<&str> = table.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}

fn check_name(name: &str) -> Result<(), ConfigurationError> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.contains(['|', ':', ',']) {
        "name contains a rule string delimiter"
    } else if name.trim() != name {
        "name has surrounding whitespace"
    } else {
        return Ok(());
    };
    Err(ConfigurationError::InvalidRuleName {
        name: name.to_owned(),
        reason,
    })
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rule_names())
            .field("factories", &self.factory_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Outcome, Record, Value};
    use crate::rules::{IsString, Required, min_factory};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    struct Named(&'static str, &'static str);

    impl Rule for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn validate(&self, _value: Option<&Value>, _field: &str, _data: &Record) -> Outcome {
            Outcome::invalid()
        }

        fn message(&self, _field: &str) -> String {
            self.1.to_owned()
        }
    }

    #[test]
    fn empty_registry() {
        let reg = RuleRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
        assert!(!reg.has("string"));
        assert!(reg.rule("string").is_none());
    }

    #[test]
    fn builtins_are_installed() {
        let reg = RuleRegistry::with_builtins();
        assert_eq!(reg.len(), 25);
        assert!(reg.has("required"));
        assert!(reg.has("min:8"));
        assert!(!reg.has("between:08:00,17:00"));
    }

    #[test]
    fn has_checks_the_matching_table() {
        let mut reg = RuleRegistry::new();
        reg.register(IsString).unwrap();
        reg.register_factory("min", min_factory).unwrap();

        assert!(reg.has("string"));
        assert!(!reg.has("string:1"));
        assert!(reg.has("min:3"));
        assert!(reg.has("min:"));
        assert!(!reg.has("min"));
    }

    #[test]
    fn overwrite_existing() {
        let mut reg = RuleRegistry::new();
        reg.register(Named("custom", "first")).unwrap();
        reg.register(Named("custom", "second")).unwrap();

        assert_eq!(reg.len(), 1);
        assert_eq!(reg.rule("custom").unwrap().message("f"), "second");
    }

    #[test]
    fn rejects_cross_table_conflicts() {
        let mut reg = RuleRegistry::new();
        reg.register(Required).unwrap();
        reg.register_factory("min", min_factory).unwrap();

        assert_eq!(
            reg.register_factory("required", min_factory).unwrap_err(),
            ConfigurationError::RuleNameConflict {
                name: "required".into(),
                existing: "rule",
            }
        );
        assert_eq!(
            reg.register(Named("min", "")).unwrap_err(),
            ConfigurationError::RuleNameConflict {
                name: "min".into(),
                existing: "factory",
            }
        );
        assert_eq!(reg.len(), 2);
    }

    #[rstest]
    #[case::empty("")]
    #[case::pipe("a|b")]
    #[case::colon("a:b")]
    #[case::comma("a,b")]
    #[case::leading_space(" a")]
    #[case::trailing_space("a\t")]
    fn rejects_unreachable_names(#[case] name: &'static str) {
        let mut reg = RuleRegistry::new();
        let err = reg.register(Named(name, "")).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidRuleName { .. }));
        assert!(reg.register_factory(name, min_factory).is_err());
        assert!(reg.is_empty());
    }

    #[test]
    fn closure_factory() {
        let mut reg = RuleRegistry::new();
        reg.register_factory(
            "never",
            |_: &[String]| -> Result<Arc<dyn Rule>, ConfigurationError> {
                Ok(Arc::new(Named("never", "never valid")))
            },
        )
        .unwrap();

        let rule = reg.factory("never").unwrap().make(&[]).unwrap();
        assert_eq!(rule.message("f"), "never valid");
    }

    #[test]
    fn names_are_sorted() {
        let reg = RuleRegistry::with_builtins();
        let names = reg.rule_names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(names.contains(&"alpha_dash"));
    }

    #[test]
    fn debug_format() {
        let mut reg = RuleRegistry::new();
        reg.register(IsString).unwrap();
        reg.register_factory("min", min_factory).unwrap();
        assert_eq!(
            format!("{reg:?}"),
            r#"RuleRegistry { rules: ["string"], factories: ["min"] }"#
        );
    }
}
