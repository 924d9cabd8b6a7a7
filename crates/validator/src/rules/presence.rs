//! Presence rule
//!
//! `required` is the only built-in that rejects absent values; every other
//! rule is optional by default and relies on `required` being composed in
//! front of it.

use crate::foundation::{Outcome, Record, Rule, Value};

/// Rejects absent keys, `null`, and text that is empty after trimming.
///
/// Any other present value, including `0`, `false`, `[]` and `{}`, counts as
/// present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Required;

impl Rule for Required {
    fn name(&self) -> &str {
        "required"
    }

    fn validate(&self, value: Option<&Value>, _field: &str, _data: &Record) -> Outcome {
        let present = match value {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        };
        Outcome::from(present)
    }

    fn message(&self, field: &str) -> String {
        format!("The {field} field is required")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::zero(json!(0))]
    #[case::false_(json!(false))]
    #[case::text(json!("x"))]
    #[case::padded_text(json!("  x  "))]
    #[case::empty_array(json!([]))]
    #[case::empty_object(json!({}))]
    fn present_values(#[case] value: Value) {
        assert!(Required.validate(Some(&value), "f", &Record::new()).is_valid());
    }

    #[rstest]
    #[case::empty(json!(""))]
    #[case::spaces(json!("   "))]
    #[case::tabs_and_newlines(json!("\t\n"))]
    #[case::null(json!(null))]
    fn blank_values(#[case] value: Value) {
        assert_eq!(
            Required.validate(Some(&value), "f", &Record::new()),
            Outcome::invalid()
        );
    }

    #[test]
    fn absent_key() {
        assert!(!Required.validate(None, "email", &Record::new()).is_valid());
        assert_eq!(Required.message("email"), "The email field is required");
    }
}
