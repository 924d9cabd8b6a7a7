//! Prelude module for convenient imports.
//!
//! Provides a single `use dsl_validator::prelude::*;` import that brings in
//! the validator, schemas, the registry and everything needed to write a
//! custom rule.
//!
//! # Examples
//!
//! ```rust
//! use dsl_validator::prelude::*;
//!
//! let mut registry = RuleRegistry::with_builtins();
//! registry
//!     .register_factory("size", |params: &[String]| -> Result<std::sync::Arc<dyn Rule>, ConfigurationError> {
//!         let n = params.first().and_then(|p| p.parse().ok()).unwrap_or(0);
//!         Ok(std::sync::Arc::new(Max::new(n)))
//!     })
//!     .unwrap();
//!
//! let validator = Validator::new(registry);
//! assert!(validator.check_schema(&Schema::new().field("tags", "array|size:3")).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Traits, outcomes, errors, values
// ============================================================================

pub use crate::foundation::{
    ConfigurationError, Outcome, Record, Rule, RuleFactory, Value, is_missing, length_of,
};

// ============================================================================
// ENGINE: Registry, parser, schema, validator
// ============================================================================

pub use crate::parser::{RuleParser, RuleSpec};
pub use crate::registry::RuleRegistry;
pub use crate::schema::Schema;
pub use crate::validator::{CompiledSchema, FieldErrors, ValidationResult, Validator};

// ============================================================================
// RULES: The built-in catalog
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::rules::*;
