//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Rule`], [`RuleFactory`]
//! - **Outcomes**: [`Outcome`], the tri-state result of a single rule check
//! - **Errors**: [`ConfigurationError`], raised when a schema cannot be compiled
//! - **Values**: [`Record`], [`Value`] and the helpers rules share
//!
//! # Architecture
//!
//! ## 1. Optional by default
//!
//! Every rule except `required` accepts an absent key or an explicit `null`.
//! Presence is opt-in by putting `required` at the front of a chain:
//!
//! ```rust
//! use dsl_validator::prelude::*;
//! use serde_json::json;
//!
//! let record = json!({ "bio": null }).as_object().cloned().unwrap();
//! let validator = Validator::default();
//!
//! let result = validator.validate(&record, &Schema::new().field("bio", "string")).unwrap();
//! assert!(result.valid);
//!
//! let result = validator.validate(&record, &Schema::new().field("bio", "required|string")).unwrap();
//! assert!(!result.valid);
//! ```
//!
//! ## 2. Two error kinds
//!
//! A rule rejecting a value is *data*: it ends up as a message in
//! [`FieldErrors`](crate::FieldErrors). A schema naming a rule that does not
//! exist, or passing `min` a non-numeric limit, is a *bug*: it surfaces as
//! [`ConfigurationError`] before any rule runs.

pub mod error;
pub mod traits;
pub mod value;

pub use error::ConfigurationError;
pub use traits::{Outcome, Rule, RuleFactory};
pub use value::{Record, Value, is_missing, length_of};

/// Common imports for implementing custom rules.
///
/// ```rust
/// use dsl_validator::foundation::prelude::*;
///
/// struct Even;
///
/// impl Rule for Even {
///     fn name(&self) -> &str {
///         "even"
///     }
///
///     fn validate(&self, value: Option<&Value>, _field: &str, _data: &Record) -> Outcome {
///         match value {
///             None | Some(Value::Null) => Outcome::Valid,
///             Some(v) => Outcome::from(v.as_i64().is_some_and(|n| n % 2 == 0)),
///         }
///     }
///
///     fn message(&self, field: &str) -> String {
///         format!("The {field} field must be even")
///     }
/// }
/// ```
pub mod prelude {
    pub use super::{ConfigurationError, Outcome, Record, Rule, RuleFactory, Value};
}
