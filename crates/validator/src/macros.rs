//! Macros for creating rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`] - Create a complete optional-by-default rule (struct + `Rule` impl)
//!
//! # Examples
//!
//! ```rust
//! use dsl_validator::rule;
//!
//! // Unit rule (no fields)
//! rule! {
//!     pub Even => "even";
//!     check(value) { value.as_i64().is_some_and(|n| n % 2 == 0) }
//!     message(field) { format!("The {field} field must be even") }
//! }
//!
//! // Struct with fields, bound by a factory
//! rule! {
//!     pub MultipleOf { step: i64 } => "multiple_of";
//!     check(self, value) { value.as_i64().is_some_and(|n| n % self.step == 0) }
//!     message(self, field) { format!("The {field} field must be a multiple of {}", self.step) }
//! }
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete rule: struct definition and [`Rule`] implementation.
///
/// The generated `validate` accepts absent and `null` values and otherwise
/// maps the `check` block (a `bool` over the present `&Value`) to an
/// [`Outcome`]. Rules that need custom failure text, or that reject missing
/// values, implement [`Rule`] by hand instead.
///
/// `#[derive(Debug, Clone)]` is always applied; unit rules also get
/// `Copy, Default, PartialEq, Eq, Hash`.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// rule! {
///     pub Boolean => "boolean";
///     check(value) { value.is_boolean() }
///     message(field) { format!("The {field} field must be a boolean") }
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// rule! {
///     #[derive(Copy, PartialEq)]
///     pub GreaterThan { threshold: f64 } => "gt";
///     check(self, value) { value.as_f64().is_some_and(|n| n > self.threshold) }
///     message(self, field) { format!("The {field} field must be greater than {}", self.threshold) }
/// }
/// ```
///
/// [`Rule`]: crate::foundation::Rule
/// [`Outcome`]: crate::foundation::Outcome
#[macro_export]
macro_rules! rule {
    // ── Variant 1: Unit rule (no fields) ─────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $ty:ident => $name:literal;
        check($value:ident) $check:block
        message($field:ident) $message:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $ty;

        impl $crate::foundation::Rule for $ty {
            fn name(&self) -> &str {
                $name
            }

            fn validate(
                &self,
                value: ::std::option::Option<&$crate::foundation::Value>,
                _field: &str,
                _data: &$crate::foundation::Record,
            ) -> $crate::foundation::Outcome {
                match value {
                    None | Some($crate::foundation::Value::Null) => $crate::foundation::Outcome::Valid,
                    Some($value) => $crate::foundation::Outcome::from($check),
                }
            }

            fn message(&self, $field: &str) -> ::std::string::String $message
        }
    };

    // ── Variant 2: Struct with fields + auto new ─────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $ty:ident { $($fname:ident: $fty:ty),+ $(,)? } => $name:literal;
        check($self_:ident, $value:ident) $check:block
        message($self2:ident, $field:ident) $message:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $ty {
            $(pub $fname: $fty,)+
        }

        impl $ty {
            #[must_use]
            pub fn new($($fname: $fty),+) -> Self {
                Self { $($fname),+ }
            }
        }

        impl $crate::foundation::Rule for $ty {
            fn name(&self) -> &str {
                $name
            }

            fn validate(
                &$self_,
                value: ::std::option::Option<&$crate::foundation::Value>,
                _field: &str,
                _data: &$crate::foundation::Record,
            ) -> $crate::foundation::Outcome {
                match value {
                    None | Some($crate::foundation::Value::Null) => $crate::foundation::Outcome::Valid,
                    Some($value) => $crate::foundation::Outcome::from($check),
                }
            }

            fn message(&$self2, $field: &str) -> ::std::string::String $message
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{Outcome, Record, Rule};
    use serde_json::json;

    rule! {
        /// A test unit rule.
        TestText => "test_text";
        check(value) { value.is_string() }
        message(field) { format!("{field} must be text") }
    }

    rule! {
        #[derive(Copy, PartialEq, Eq)]
        TestAtLeast { min: i64 } => "test_at_least";
        check(self, value) { value.as_i64().is_some_and(|n| n >= self.min) }
        message(self, field) { format!("{field} must be at least {}", self.min) }
    }

    #[test]
    fn unit_rule_checks_present_values() {
        let data = Record::new();
        assert_eq!(TestText.name(), "test_text");
        assert_eq!(TestText.validate(Some(&json!("x")), "f", &data), Outcome::Valid);
        assert_eq!(TestText.validate(Some(&json!(1)), "f", &data), Outcome::invalid());
        assert_eq!(TestText.message("f"), "f must be text");
    }

    #[test]
    fn unit_rule_skips_missing_values() {
        let data = Record::new();
        assert!(TestText.validate(None, "f", &data).is_valid());
        assert!(TestText.validate(Some(&json!(null)), "f", &data).is_valid());
    }

    #[test]
    fn struct_rule_uses_fields() {
        let data = Record::new();
        let rule = TestAtLeast::new(3);
        assert_eq!(rule.name(), "test_at_least");
        assert!(rule.validate(Some(&json!(3)), "n", &data).is_valid());
        assert!(!rule.validate(Some(&json!(2)), "n", &data).is_valid());
        assert!(rule.validate(None, "n", &data).is_valid());
        assert_eq!(rule.message("n"), "n must be at least 3");
    }

    #[test]
    fn struct_rule_extra_derives() {
        assert_eq!(TestAtLeast::new(1), TestAtLeast { min: 1 });
    }
}
