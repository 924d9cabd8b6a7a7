//! Validation orchestration
//!
//! [`Validator::validate`] compiles every field of a schema first, so a
//! broken rule string fails the call before any rule sees data. It then runs
//! each field's rules in order without short-circuiting and collects every
//! rejection message.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::foundation::{ConfigurationError, Record, Rule};
use crate::parser::RuleParser;
use crate::registry::RuleRegistry;
use crate::schema::Schema;

// ============================================================================
// FIELD ERRORS
// ============================================================================

/// Rejection messages per field, in schema order then rule order.
///
/// Only fields with at least one failure have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(IndexMap<String, Vec<String>>);

impl FieldErrors {
    /// Messages recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Names of the failing fields.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `(field, messages)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, field: &str, message: String) {
        self.0.entry(field.to_owned()).or_default().push(message);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed for {} field(s)", self.0.len())?;
        for (field, messages) in &self.0 {
            write!(f, "; {field}: {}", messages.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// Outcome of validating one record.
///
/// Exactly one of `data` and `errors` is present: the untouched input record
/// when `valid`, the failing fields otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether every rule accepted its field.
    pub valid: bool,
    /// The whole input record, present iff `valid`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Record>,
    /// Per-field messages, present iff not `valid`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ValidationResult {
    fn from_errors(data: &Record, errors: FieldErrors) -> Self {
        if errors.is_empty() {
            Self {
                valid: true,
                data: Some(data.clone()),
                errors: None,
            }
        } else {
            Self {
                valid: false,
                data: None,
                errors: Some(errors),
            }
        }
    }

    /// Converts into `Ok(record)` or `Err(field_errors)`.
    pub fn into_result(self) -> Result<Record, FieldErrors> {
        match self.errors {
            Some(errors) if !self.valid => Err(errors),
            _ => Ok(self.data.unwrap_or_default()),
        }
    }
}

// ============================================================================
// COMPILED SCHEMA
// ============================================================================

/// A schema whose rule strings have been resolved to rules.
///
/// Produced by [`Validator::compile`]; borrows field names from the schema.
#[derive(Debug)]
pub struct CompiledSchema<'s> {
    fields: Vec<(&'s str, Vec<Arc<dyn Rule>>)>,
}

impl<'s> CompiledSchema<'s> {
    /// `(field, rules)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'s str, &[Arc<dyn Rule>])> {
        self.fields.iter().map(|(field, rules)| (*field, rules.as_slice()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the schema had no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Runs every rule against `data`.
    pub fn run(&self, data: &Record) -> ValidationResult {
        let mut errors = FieldErrors::default();

        for (field, rules) in &self.fields {
            let value = data.get(*field);
            for rule in rules {
                let outcome = rule.validate(value, field, data);
                if let Some(message) = rule.failure_message(outcome, field) {
                    tracing::trace!(field = %field, rule = rule.name(), %message, "rule rejected value");
                    errors.push(field, message);
                }
            }
        }

        tracing::debug!(
            fields = self.fields.len(),
            failed = errors.len(),
            "validation finished"
        );
        ValidationResult::from_errors(data, errors)
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates records against schemas using the rules of one registry.
///
/// The registry is fixed at construction. A validator is `Send + Sync` and
/// can serve concurrent `validate` calls.
///
/// # Example
///
/// ```rust
/// use dsl_validator::prelude::*;
/// use serde_json::json;
///
/// let validator = Validator::default();
/// let schema = Schema::new()
///     .field("username", "required|alpha_dash|min:3")
///     .field("age", "integer|gte:18");
///
/// let record = json!({ "username": "jo", "age": 17 }).as_object().cloned().unwrap();
/// let result = validator.validate(&record, &schema).unwrap();
///
/// assert!(!result.valid);
/// let errors = result.errors.unwrap();
/// assert_eq!(errors.get("username").unwrap(), ["The username field must be at least 3 in length"]);
/// assert_eq!(errors.get("age").unwrap(), ["The age field must be greater than or equal to 18"]);
/// ```
#[derive(Debug)]
pub struct Validator {
    registry: RuleRegistry,
}

impl Validator {
    /// Creates a validator over `registry`.
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// The registry rule strings are resolved against.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// A parser over this validator's registry.
    pub fn parser(&self) -> RuleParser<'_> {
        RuleParser::new(&self.registry)
    }

    /// Resolves every rule string of `schema`.
    ///
    /// # Errors
    ///
    /// The first field, in schema order, whose rule string does not compile.
    pub fn compile<'s>(&self, schema: &'s Schema) -> Result<CompiledSchema<'s>, ConfigurationError> {
        let parser = self.parser();
        let fields = schema
            .iter()
            .map(|(field, rules)| {
                parser.parse(rules).map(|rules| (field, rules)).inspect_err(|err| {
                    tracing::debug!(field = %field, error = %err, "rule string does not compile");
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(fields = fields.len(), "schema compiled");
        Ok(CompiledSchema { fields })
    }

    /// Checks that every rule string of `schema` compiles, without any data.
    pub fn check_schema(&self, schema: &Schema) -> Result<(), ConfigurationError> {
        self.compile(schema).map(|_| ())
    }

    /// Validates `data` against `schema`.
    ///
    /// Rule strings are compiled on every call. Rejections are returned in
    /// the result, never as an error.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError`] if any rule string of `schema` does not compile;
    /// no rule has run in that case.
    pub fn validate(
        &self,
        data: &Record,
        schema: &Schema,
    ) -> Result<ValidationResult, ConfigurationError> {
        Ok(self.compile(schema)?.run(data))
    }
}

impl Default for Validator {
    /// A validator over the built-in catalog.
    fn default() -> Self {
        Self::new(RuleRegistry::with_builtins())
    }
}
