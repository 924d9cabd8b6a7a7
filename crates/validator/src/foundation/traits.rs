//! Core traits for the validation system
//!
//! This module defines the contract every rule implements and the contract
//! for parameterized rule constructors.

use std::sync::Arc;

use crate::foundation::{ConfigurationError, Record, Value};

// ============================================================================
// OUTCOME
// ============================================================================

/// Result of running one rule against one value.
///
/// A rejection either defers to [`Rule::message`] (`Invalid(None)`) or carries
/// its own text (`Invalid(Some(..))`), which lets a rule describe the failure
/// in terms of its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    /// The value satisfies the rule.
    #[default]
    Valid,
    /// The value is rejected, optionally with a message overriding the default.
    Invalid(Option<String>),
}

impl Outcome {
    /// Rejection that uses the rule's default message.
    pub const fn invalid() -> Self {
        Self::Invalid(None)
    }

    /// Rejection with a context-specific message.
    pub fn invalid_with(message: impl Into<String>) -> Self {
        Self::Invalid(Some(message.into()))
    }

    /// Returns `true` for [`Outcome::Valid`].
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl From<bool> for Outcome {
    fn from(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid(None) }
    }
}

// ============================================================================
// RULE
// ============================================================================

/// A single named check that can appear in a rule string.
///
/// Implementations must be immutable once constructed: simple rules are shared
/// by every validation call, and parameterized rules are bound to their
/// parameters when the factory builds them.
///
/// `value` is `None` when the record has no such key and `Some(Value::Null)`
/// for an explicit null. `data` is the whole record being validated, so a rule
/// may look at sibling fields.
pub trait Rule: Send + Sync {
    /// Identity used for registration, e.g. `"string"` or `"min"`.
    fn name(&self) -> &str;

    /// Checks `value` (the content of `field` inside `data`).
    fn validate(&self, value: Option<&Value>, field: &str, data: &Record) -> Outcome;

    /// Default message for a rejection of `field`.
    fn message(&self, field: &str) -> String;

    /// Resolves an outcome to the message the caller should report, if any.
    fn failure_message(&self, outcome: Outcome, field: &str) -> Option<String> {
        match outcome {
            Outcome::Valid => None,
            Outcome::Invalid(Some(message)) => Some(message),
            Outcome::Invalid(None) => Some(self.message(field)),
        }
    }
}

impl std::fmt::Debug for dyn Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Rule").field(&self.name()).finish()
    }
}

// ============================================================================
// RULE FACTORY
// ============================================================================

/// Builds a parameter-bound rule from the parameters of one DSL segment.
///
/// For `min:8` the factory registered under `"min"` receives `["8"]`.
/// Construction failures are schema bugs and surface as [`ConfigurationError`].
///
/// Any `Fn(&[String]) -> Result<Arc<dyn Rule>, ConfigurationError>` closure
/// is a factory.
pub trait RuleFactory: Send + Sync {
    /// Creates a fresh rule bound to `params`.
    fn make(&self, params: &[String]) -> Result<Arc<dyn Rule>, ConfigurationError>;
}

impl<F> RuleFactory for F
where
    F: Fn(&[String]) -> Result<Arc<dyn Rule>, ConfigurationError> + Send + Sync,
{
    fn make(&self, params: &[String]) -> Result<Arc<dyn Rule>, ConfigurationError> {
        self(params)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysFails;

    impl Rule for AlwaysFails {
        fn name(&self) -> &str {
            "always_fails"
        }

        fn validate(&self, _value: Option<&Value>, _field: &str, _data: &Record) -> Outcome {
            Outcome::invalid()
        }

        fn message(&self, field: &str) -> String {
            format!("The {field} field always fails")
        }
    }

    #[test]
    fn outcome_from_bool() {
        assert_eq!(Outcome::from(true), Outcome::Valid);
        assert_eq!(Outcome::from(false), Outcome::Invalid(None));
        assert!(Outcome::default().is_valid());
    }

    #[test]
    fn failure_message_prefers_custom_text() {
        let rule = AlwaysFails;
        assert_eq!(rule.failure_message(Outcome::Valid, "name"), None);
        assert_eq!(
            rule.failure_message(Outcome::invalid(), "name").as_deref(),
            Some("The name field always fails")
        );
        assert_eq!(
            rule.failure_message(Outcome::invalid_with("custom"), "name")
                .as_deref(),
            Some("custom")
        );
    }

    #[test]
    fn closures_are_factories() {
        let factory = |params: &[String]| -> Result<Arc<dyn Rule>, ConfigurationError> {
            if params.is_empty() {
                Err(ConfigurationError::missing_parameter("always_fails", "always_fails:x"))
            } else {
                Ok(Arc::new(AlwaysFails))
            }
        };

        let rule = factory.make(&["x".to_string()]).unwrap();
        assert_eq!(rule.name(), "always_fails");
        assert!(factory.make(&[]).is_err());
    }

    #[test]
    fn debug_shows_name() {
        let rule: Arc<dyn Rule> = Arc::new(AlwaysFails);
        assert_eq!(format!("{rule:?}"), "Rule(\"always_fails\")");
    }
}
