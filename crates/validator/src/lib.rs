//! # dsl-validator
//!
//! Validates flat key-value records against schemas written in a compact rule
//! DSL: every field maps to a pipe-separated list of named rules, some of
//! them parameterized.
//!
//! ## Quick Start
//!
//! ```rust
//! use dsl_validator::prelude::*;
//! use serde_json::json;
//!
//! let validator = Validator::default();
//! let schema = Schema::new()
//!     .field("email", "required|email")
//!     .field("password", "required|string|min:8");
//!
//! let record = json!({ "email": "user@example.com", "password": "hunter2" })
//!     .as_object()
//!     .cloned()
//!     .unwrap();
//!
//! let result = validator.validate(&record, &schema).unwrap();
//! assert!(!result.valid);
//! assert_eq!(
//!     result.errors.unwrap().get("password").unwrap(),
//!     ["The password field must be at least 8 in length"]
//! );
//! ```
//!
//! ## Rule strings
//!
//! `required|string|min:8` is three segments. A segment with a colon is
//! built by the factory registered under the text before the colon, with
//! the comma-separated text after it as parameters. See [`parser`].
//!
//! ## Extending the DSL
//!
//! Implement [`Rule`] by hand, or use the [`rule!`] macro, and register it
//! on a [`RuleRegistry`] before handing the registry to [`Validator::new`].
//! Parameterized rules are registered as a [`RuleFactory`]; any matching
//! closure qualifies.
//!
//! ## Built-in Rules
//!
//! - **Presence**: [`Required`](rules::Required)
//! - **Types**: `string`, `number`, `numeric`, `boolean`, `integer`, `decimal`, `array`
//! - **Characters**: `alpha`, `alpha_num`, `alpha_dash`, `lowercase`, `uppercase`
//! - **Formats**: `email`, `url`, `json`, `date`
//! - **Comparisons**: `min:n`, `max:n`, `gt:n`, `gte:n`, `lt:n`, `lte:n`
//! - **Affixes**: `starts_with:a,b`, `ends_with:a,b`

mod macros;

pub mod foundation;
pub mod parser;
pub mod prelude;
pub mod registry;
pub mod rules;
pub mod schema;
pub mod validator;

pub use foundation::{ConfigurationError, Outcome, Record, Rule, RuleFactory, Value};
pub use parser::{RuleParser, RuleSpec};
pub use registry::RuleRegistry;
pub use schema::Schema;
pub use validator::{CompiledSchema, FieldErrors, ValidationResult, Validator};
