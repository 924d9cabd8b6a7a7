//! Primitive type rules
//!
//! Each rule checks the JSON type of a present value. `integer` and
//! `decimal` split numbers by whether they have a fractional part.

use crate::foundation::value::{is_integral, number_of};

crate::rule! {
    /// Accepts text.
    pub IsString => "string";
    check(value) { value.is_string() }
    message(field) { format!("The {field} field must be a string") }
}

crate::rule! {
    /// Accepts any number.
    pub IsNumber => "number";
    check(value) { number_of(value).is_some_and(|n| !n.is_nan()) }
    message(field) { format!("The {field} field must be a number") }
}

crate::rule! {
    /// Alias of [`IsNumber`] registered under `numeric`.
    pub IsNumeric => "numeric";
    check(value) { number_of(value).is_some_and(|n| !n.is_nan()) }
    message(field) { format!("The {field} field must be a number") }
}

crate::rule! {
    /// Accepts `true` and `false`.
    pub IsBoolean => "boolean";
    check(value) { value.is_boolean() }
    message(field) { format!("The {field} field must be a boolean") }
}

crate::rule! {
    /// Accepts numbers with no fractional part. Numeric text is rejected.
    pub IsInteger => "integer";
    check(value) { is_integral(value) }
    message(field) { format!("The {field} field must be an integer") }
}

crate::rule! {
    /// Accepts numbers that do have a fractional part.
    pub IsDecimal => "decimal";
    check(value) { value.is_number() && !is_integral(value) }
    message(field) { format!("The {field} field must be a decimal number") }
}

crate::rule! {
    /// Accepts sequences; objects and text are rejected.
    pub IsArray => "array";
    check(value) { value.is_array() }
    message(field) { format!("The {field} field must be an array") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Record, Rule, Value};
    use rstest::rstest;
    use serde_json::json;

    fn check(rule: &dyn Rule, value: &Value) -> bool {
        rule.validate(Some(value), "field", &Record::new()).is_valid()
    }

    #[rstest]
    #[case(&IsString, json!("text"), true)]
    #[case(&IsString, json!(""), true)]
    #[case(&IsString, json!(123), false)]
    #[case(&IsNumber, json!(25), true)]
    #[case(&IsNumber, json!(-2.5), true)]
    #[case(&IsNumber, json!("twenty-five"), false)]
    #[case(&IsNumeric, json!(0), true)]
    #[case(&IsNumeric, json!("0"), false)]
    #[case(&IsBoolean, json!(true), true)]
    #[case(&IsBoolean, json!("yes"), false)]
    #[case(&IsBoolean, json!(1), false)]
    #[case(&IsInteger, json!(42), true)]
    #[case(&IsInteger, json!(42.0), true)]
    #[case(&IsInteger, json!(42.5), false)]
    #[case(&IsInteger, json!("42"), false)]
    #[case(&IsDecimal, json!(19.99), true)]
    #[case(&IsDecimal, json!(20), false)]
    #[case(&IsDecimal, json!("19.99"), false)]
    #[case(&IsArray, json!([1, 2]), true)]
    #[case(&IsArray, json!([]), true)]
    #[case(&IsArray, json!({"0": 1}), false)]
    #[case(&IsArray, json!("[1, 2]"), false)]
    fn type_checks(#[case] rule: &dyn Rule, #[case] value: Value, #[case] expected: bool) {
        assert_eq!(check(rule, &value), expected, "{} on {value}", rule.name());
    }

    #[test]
    fn messages() {
        assert_eq!(IsString.message("name"), "The name field must be a string");
        assert_eq!(IsNumber.message("age"), "The age field must be a number");
        assert_eq!(IsNumeric.message("age"), "The age field must be a number");
        assert_eq!(IsBoolean.message("active"), "The active field must be a boolean");
        assert_eq!(IsInteger.message("n"), "The n field must be an integer");
        assert_eq!(IsDecimal.message("n"), "The n field must be a decimal number");
        assert_eq!(IsArray.message("tags"), "The tags field must be an array");
    }
}
