//! Comparison rules and their factories
//!
//! - `min:n` / `max:n` compare the *length* of text and sequences and the
//!   *value* of numbers, inclusively. Other present values pass.
//! - `gt`, `gte`, `lt`, `lte` compare numbers only; anything else fails.

use std::sync::Arc;

use crate::foundation::value::{length_of, number_of};
use crate::foundation::{ConfigurationError, Rule, Value};

/// Integer limit for `min` / `max`. Fractional text such as `8.5` is rejected.
fn integer_param(rule: &str, params: &[String]) -> Result<i64, ConfigurationError> {
    let raw = params
        .first()
        .ok_or_else(|| ConfigurationError::missing_parameter(rule, format!("{rule}:8")))?;
    raw.parse::<i64>()
        .map_err(|_| ConfigurationError::not_numeric(rule, raw.as_str()))
}

/// Numeric threshold for `gt` and friends. Infinite values are allowed, NaN is not.
fn float_param(rule: &str, params: &[String]) -> Result<f64, ConfigurationError> {
    let raw = params
        .first()
        .ok_or_else(|| ConfigurationError::missing_parameter(rule, format!("{rule}:10")))?;
    raw.parse::<f64>()
        .ok()
        .filter(|n| !n.is_nan())
        .ok_or_else(|| ConfigurationError::not_numeric(rule, raw.as_str()))
}

/// Compares length or value against `limit`; other kinds pass.
fn measure_cmp(value: &Value, limit: i64, cmp: fn(f64, f64) -> bool) -> bool {
    if let Some(len) = length_of(value) {
        cmp(len as f64, limit as f64)
    } else if let Some(n) = number_of(value) {
        cmp(n, limit as f64)
    } else {
        true
    }
}

// ============================================================================
// MIN / MAX
// ============================================================================

crate::rule! {
    /// Lower bound on length (text, sequences) or value (numbers).
    ///
    /// Text length counts Unicode scalar values (`char`s), not UTF-16 code
    /// units, so `"😀"` has length 1 and `"e\u{301}"` has length 2.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min { limit: i64 } => "min";
    check(self, value) { measure_cmp(value, self.limit, |a, b| a >= b) }
    message(self, field) { format!("The {field} field must be at least {} in length", self.limit) }
}

crate::rule! {
    /// Upper bound on length (text, sequences) or value (numbers).
    ///
    /// Text length counts Unicode scalar values (`char`s), not UTF-16 code
    /// units, so `"😀"` has length 1 and `"e\u{301}"` has length 2.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max { limit: i64 } => "max";
    check(self, value) { measure_cmp(value, self.limit, |a, b| a <= b) }
    message(self, field) { format!("The {field} field must be less than {} in length", self.limit) }
}

/// Factory for `min:<integer>`.
pub fn min_factory(params: &[String]) -> Result<Arc<dyn Rule>, ConfigurationError> {
    Ok(Arc::new(Min::new(integer_param("min", params)?)))
}

/// Factory for `max:<integer>`.
pub fn max_factory(params: &[String]) -> Result<Arc<dyn Rule>, ConfigurationError> {
    Ok(Arc::new(Max::new(integer_param("max", params)?)))
}

// ============================================================================
// STRICT NUMERIC COMPARISONS
// ============================================================================

crate::rule! {
    /// Number strictly greater than `threshold`.
    #[derive(Copy, PartialEq)]
    pub GreaterThan { threshold: f64 } => "gt";
    check(self, value) { number_of(value).is_some_and(|n| n > self.threshold) }
    message(self, field) { format!("The {field} field must be greater than {}", self.threshold) }
}

crate::rule! {
    /// Number greater than or equal to `threshold`.
    #[derive(Copy, PartialEq)]
    pub GreaterThanOrEqual { threshold: f64 } => "gte";
    check(self, value) { number_of(value).is_some_and(|n| n >= self.threshold) }
    message(self, field) {
        format!("The {field} field must be greater than or equal to {}", self.threshold)
    }
}

crate::rule! {
    /// Number strictly less than `threshold`.
    #[derive(Copy, PartialEq)]
    pub LessThan { threshold: f64 } => "lt";
    check(self, value) { number_of(value).is_some_and(|n| n < self.threshold) }
    message(self, field) { format!("The {field} field must be less than {}", self.threshold) }
}

crate::rule! {
    /// Number less than or equal to `threshold`.
    #[derive(Copy, PartialEq)]
    pub LessThanOrEqual { threshold: f64 } => "lte";
    check(self, value) { number_of(value).is_some_and(|n| n <= self.threshold) }
    message(self, field) {
        format!("The {field} field must be less than or equal to {}", self.threshold)
    }
}

/// Factory for `gt:<number>`.
pub fn gt_factory(params: &[String]) -> Result<Arc<dyn Rule>, ConfigurationError> {
    Ok(Arc::new(GreaterThan::new(float_param("gt", params)?)))
}

/// Factory for `gte:<number>`.
pub fn gte_factory(params: &[String]) -> Result<Arc<dyn Rule>, ConfigurationError> {
    Ok(Arc::new(GreaterThanOrEqual::new(float_param("gte", params)?)))
}

/// Factory for `lt:<number>`.
pub fn lt_factory(params: &[String]) -> Result<Arc<dyn Rule>, ConfigurationError> {
    Ok(Arc::new(LessThan::new(float_param("lt", params)?)))
}

/// Factory for `lte:<number>`.
pub fn lte_factory(params: &[String]) -> Result<Arc<dyn Rule>, ConfigurationError> {
    Ok(Arc::new(LessThanOrEqual::new(float_param("lte", params)?)))
}
