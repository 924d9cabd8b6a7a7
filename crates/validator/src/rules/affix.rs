//! Prefix and suffix rules
//!
//! `starts_with:a,b` and `ends_with:a,b` accept text matching *any* of the
//! given literals. A rejection names every accepted literal, quoted, in the
//! order the rule string gave them.

use std::sync::Arc;

use crate::foundation::{ConfigurationError, Outcome, Record, Rule, Value};

fn quoted_list(literals: &[String]) -> String {
    literals
        .iter()
        .map(|s| format!("\"{s}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

fn check_affix(
    value: Option<&Value>,
    literals: &[String],
    matches: fn(&str, &str) -> bool,
    describe: impl FnOnce() -> String,
) -> Outcome {
    match value {
        None | Some(Value::Null) => Outcome::Valid,
        Some(Value::String(s)) if literals.iter().any(|lit| matches(s, lit)) => Outcome::Valid,
        Some(_) => Outcome::invalid_with(describe()),
    }
}

// ============================================================================
// STARTS WITH
// ============================================================================

/// Text starting with at least one of `prefixes`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StartsWith {
    /// Accepted prefixes, in declaration order.
    pub prefixes: Vec<String>,
}

impl StartsWith {
    /// Creates the rule from a list of accepted prefixes.
    #[must_use]
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }
}

impl Rule for StartsWith {
    fn name(&self) -> &str {
        "starts_with"
    }

    fn validate(&self, value: Option<&Value>, field: &str, _data: &Record) -> Outcome {
        check_affix(value, &self.prefixes, |s, lit| s.starts_with(lit), || self.message(field))
    }

    fn message(&self, field: &str) -> String {
        format!(
            "The {field} field must start with one of: {}",
            quoted_list(&self.prefixes)
        )
    }
}

/// Factory for `starts_with:<prefix>[,<prefix>...]`.
pub fn starts_with_factory(params: &[String]) -> Result<Arc<dyn Rule>, ConfigurationError> {
    if params.is_empty() {
        return Err(ConfigurationError::missing_parameter(
            "starts_with",
            "starts_with:http,https",
        ));
    }
    Ok(Arc::new(StartsWith::new(params.to_vec())))
}

// ============================================================================
// ENDS WITH
// ============================================================================

/// Text ending with at least one of `suffixes`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndsWith {
    /// Accepted suffixes, in declaration order.
    pub suffixes: Vec<String>,
}

impl EndsWith {
    /// Creates the rule from a list of accepted suffixes.
    #[must_use]
    pub fn new(suffixes: Vec<String>) -> Self {
        Self { suffixes }
    }
}

impl Rule for EndsWith {
    fn name(&self) -> &str {
        "ends_with"
    }

    fn validate(&self, value: Option<&Value>, field: &str, _data: &Record) -> Outcome {
        check_affix(value, &self.suffixes, |s, lit| s.ends_with(lit), || self.message(field))
    }

    fn message(&self, field: &str) -> String {
        format!(
            "The {field} field must end with one of: {}",
            quoted_list(&self.suffixes)
        )
    }
}

/// Factory for `ends_with:<suffix>[,<suffix>...]`.
pub fn ends_with_factory(params: &[String]) -> Result<Arc<dyn Rule>, ConfigurationError> {
    if params.is_empty() {
        return Err(ConfigurationError::missing_parameter(
            "ends_with",
            "ends_with:.com,.org",
        ));
    }
    Ok(Arc::new(EndsWith::new(params.to_vec())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    type RuleFactoryFn = fn(&[String]) -> Result<Arc<dyn Rule>, ConfigurationError>;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn starts_with_any_prefix() {
        let rule = StartsWith::new(strings(&["http", "https"]));
        let data = Record::new();
        assert!(rule.validate(Some(&json!("http://x")), "site", &data).is_valid());
        assert!(rule.validate(Some(&json!("https://x")), "site", &data).is_valid());
        assert!(rule.validate(None, "site", &data).is_valid());
    }

    #[test]
    fn starts_with_lists_prefixes_in_order() {
        let rule = StartsWith::new(strings(&["http", "https"]));
        let outcome = rule.validate(Some(&json!("ftp://x")), "site", &Record::new());
        assert_eq!(
            outcome,
            Outcome::invalid_with(r#"The site field must start with one of: "http", "https""#)
        );
    }

    #[test]
    fn ends_with_any_suffix() {
        let rule = EndsWith::new(strings(&[".com", ".org"]));
        let data = Record::new();
        assert!(rule.validate(Some(&json!("example.org")), "domain", &data).is_valid());
        assert_eq!(
            rule.validate(Some(&json!("example.net")), "domain", &data),
            Outcome::invalid_with(r#"The domain field must end with one of: ".com", ".org""#)
        );
    }

    #[rstest]
    #[case::prefix_hit(starts_with_factory as RuleFactoryFn, &["ab", "x"], "abc", true)]
    #[case::prefix_second(starts_with_factory as RuleFactoryFn, &["ab", "x"], "xyz", true)]
    #[case::prefix_is_suffix(starts_with_factory as RuleFactoryFn, &["ab"], "cab", false)]
    #[case::prefix_longer(starts_with_factory as RuleFactoryFn, &["abcd"], "abc", false)]
    #[case::suffix_hit(ends_with_factory as RuleFactoryFn, &[".com", ".org"], "site.com", true)]
    #[case::suffix_miss(ends_with_factory as RuleFactoryFn, &[".com", ".org"], "site.net", false)]
    #[case::suffix_is_prefix(ends_with_factory as RuleFactoryFn, &[".com"], ".com.au", false)]
    #[case::multibyte(ends_with_factory as RuleFactoryFn, &["ë"], "Zoë", true)]
    fn affix_matching(
        #[case] factory: RuleFactoryFn,
        #[case] literals: &[&str],
        #[case] input: &str,
        #[case] valid: bool,
    ) {
        let rule = factory(&strings(literals)).unwrap();
        let outcome = rule.validate(Some(&json!(input)), "f", &Record::new());
        assert_eq!(outcome.is_valid(), valid, "{} {literals:?} on {input:?}", rule.name());
    }

    #[test]
    fn non_text_is_rejected() {
        let rule = EndsWith::new(strings(&["1"]));
        assert!(!rule.validate(Some(&json!(1)), "n", &Record::new()).is_valid());
    }

    #[test]
    fn empty_literal_matches_everything() {
        let rule = starts_with_factory(&strings(&[""])).unwrap();
        assert!(rule.validate(Some(&json!("anything")), "f", &Record::new()).is_valid());
    }

    #[test]
    fn factories_require_a_literal() {
        let err = starts_with_factory(&[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "starts_with rule requires a parameter (e.g., starts_with:http,https)"
        );
        assert!(ends_with_factory(&[]).is_err());
        assert_eq!(ends_with_factory(&strings(&[".rs"])).unwrap().name(), "ends_with");
    }
}
