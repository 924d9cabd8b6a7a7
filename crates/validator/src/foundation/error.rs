//! Schema configuration errors.
//!
//! A [`ConfigurationError`] means the schema (or the registry it is resolved
//! against) is broken. It is raised while rule strings are compiled, before
//! any rule looks at data, and never shows up inside a validation result.

use thiserror::Error;

/// Errors raised while registering rules or compiling rule strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A parameterless segment names no registered rule.
    #[error("unknown validation rule: {name}")]
    UnknownRule {
        /// The unresolved segment.
        name: String,
    },

    /// A parameterized segment names no registered factory.
    #[error("unknown parameterized rule: {name}. Did you forget to register the factory?")]
    UnknownFactory {
        /// The text before the first colon.
        name: String,
    },

    /// A factory was given no usable parameter.
    #[error("{rule} rule requires a parameter (e.g., {example})")]
    MissingParameter {
        /// Rule being built.
        rule: String,
        /// Example of a well-formed segment.
        example: String,
    },

    /// A factory parameter could not be interpreted.
    #[error("{rule} rule requires a {expected} parameter, got: {value}")]
    InvalidParameter {
        /// Rule being built.
        rule: String,
        /// What the factory expected, e.g. "numeric".
        expected: String,
        /// The offending parameter text.
        value: String,
    },

    /// A rule or factory name the DSL could never reference.
    #[error("invalid rule name {name:?}: {reason}")]
    InvalidRuleName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A name is already taken by the other registry table.
    #[error("rule name {name:?} is already registered as a {existing}")]
    RuleNameConflict {
        /// The contested name.
        name: String,
        /// Kind of the existing registration ("rule" or "factory").
        existing: &'static str,
    },
}

impl ConfigurationError {
    /// Creates an [`UnknownRule`](Self::UnknownRule) error.
    pub fn unknown_rule(name: impl Into<String>) -> Self {
        Self::UnknownRule { name: name.into() }
    }

    /// Creates an [`UnknownFactory`](Self::UnknownFactory) error.
    pub fn unknown_factory(name: impl Into<String>) -> Self {
        Self::UnknownFactory { name: name.into() }
    }

    /// Creates a [`MissingParameter`](Self::MissingParameter) error.
    pub fn missing_parameter(rule: impl Into<String>, example: impl Into<String>) -> Self {
        Self::MissingParameter {
            rule: rule.into(),
            example: example.into(),
        }
    }

    /// Creates an [`InvalidParameter`](Self::InvalidParameter) error for a
    /// parameter that should have been a number.
    pub fn not_numeric(rule: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            rule: rule.into(),
            expected: "numeric".to_string(),
            value: value.into(),
        }
    }

    /// Name of the rule or factory this error is about.
    pub fn rule_name(&self) -> &str {
        match self {
            Self::UnknownRule { name }
            | Self::UnknownFactory { name }
            | Self::InvalidRuleName { name, .. }
            | Self::RuleNameConflict { name, .. } => name,
            Self::MissingParameter { rule, .. } | Self::InvalidParameter { rule, .. } => rule,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_rule_display() {
        let err = ConfigurationError::unknown_rule("bogus");
        assert_eq!(err.to_string(), "unknown validation rule: bogus");
        assert_eq!(err.rule_name(), "bogus");
    }

    #[test]
    fn unknown_factory_display() {
        let err = ConfigurationError::unknown_factory("between");
        assert!(err.to_string().starts_with("unknown parameterized rule: between."));
    }

    #[test]
    fn missing_parameter_display() {
        let err = ConfigurationError::missing_parameter("min", "min:8");
        assert_eq!(err.to_string(), "min rule requires a parameter (e.g., min:8)");
    }

    #[test]
    fn not_numeric_display() {
        let err = ConfigurationError::not_numeric("gt", "ten");
        assert_eq!(err.to_string(), "gt rule requires a numeric parameter, got: ten");
        assert_eq!(err.rule_name(), "gt");
    }

    #[test]
    fn conflict_display() {
        let err = ConfigurationError::RuleNameConflict {
            name: "min".into(),
            existing: "factory",
        };
        assert_eq!(err.to_string(), "rule name \"min\" is already registered as a factory");
    }
}
