//! Rule string parser
//!
//! Grammar:
//!
//! ```text
//! rule_string := segment ("|" segment)*
//! segment     := name [":" params]
//! params      := param ("," param)*
//! ```
//!
//! Segments and parameters are trimmed. Everything after the *first* colon
//! of a segment is the parameter list, so `between:08:00,17:00` yields the
//! parameters `["08:00", "17:00"]`. A parameter holding both a colon and a
//! comma cannot be expressed.

use std::sync::Arc;

use crate::foundation::{ConfigurationError, Rule};
use crate::registry::RuleRegistry;

/// One decomposed segment of a rule string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    /// Rule or factory name.
    pub name: String,
    /// Parameters; `None` for a segment without a colon.
    pub params: Option<Vec<String>>,
}

impl RuleSpec {
    /// Decomposes a single segment. The segment is trimmed; the name is the
    /// text before the first colon, taken as is.
    pub fn parse(segment: &str) -> Self {
        let segment = segment.trim();
        match segment.split_once(':') {
            Some((name, rest)) => Self {
                name: name.to_owned(),
                params: Some(rest.split(',').map(|p| p.trim().to_owned()).collect()),
            },
            None => Self {
                name: segment.to_owned(),
                params: None,
            },
        }
    }

    /// Returns `true` if the segment carried a parameter list.
    pub fn is_parameterized(&self) -> bool {
        self.params.is_some()
    }

    /// Resolves the segment against `registry`.
    ///
    /// Simple rules come back as the registry's shared instance; parameterized
    /// segments get a fresh rule from their factory.
    pub fn resolve(&self, registry: &RuleRegistry) -> Result<Arc<dyn Rule>, ConfigurationError> {
        match &self.params {
            Some(params) => registry
                .factory(&self.name)
                .ok_or_else(|| ConfigurationError::unknown_factory(&self.name))?
                .make(params),
            None => registry
                .rule(&self.name)
                .cloned()
                .ok_or_else(|| ConfigurationError::unknown_rule(&self.name)),
        }
    }
}

/// Turns rule strings into ordered rule sequences.
#[derive(Debug, Clone, Copy)]
pub struct RuleParser<'r> {
    registry: &'r RuleRegistry,
}

impl<'r> RuleParser<'r> {
    /// Creates a parser resolving names against `registry`.
    pub fn new(registry: &'r RuleRegistry) -> Self {
        Self { registry }
    }

    /// Splits a rule string into its segments, without resolving them.
    pub fn segments(rule_string: &str) -> Vec<RuleSpec> {
        rule_string.split('|').map(RuleSpec::parse).collect()
    }

    /// Parses `rule_string` into rules, in segment order.
    ///
    /// # Errors
    ///
    /// The first segment that names no registered rule or factory, or whose
    /// factory rejects its parameters, aborts the whole parse.
    pub fn parse(&self, rule_string: &str) -> Result<Vec<Arc<dyn Rule>>, ConfigurationError> {
        rule_string
            .split('|')
            .map(|segment| RuleSpec::parse(segment).resolve(self.registry))
            .collect()
    }

    /// The registry this parser resolves against.
    pub fn registry(&self) -> &'r RuleRegistry {
        self.registry
    }
}
