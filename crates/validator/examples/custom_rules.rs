//! Registering custom rules and factories

use std::sync::Arc;

use dsl_validator::prelude::*;
use dsl_validator::rule;
use serde_json::json;

rule! {
    /// Text without surrounding whitespace.
    pub Trimmed => "trimmed";
    check(value) { value.as_str().is_some_and(|s| s.trim() == s) }
    message(field) { format!("The {field} field must not start or end with whitespace") }
}

rule! {
    /// Text equal to one of the listed choices.
    pub OneOf { choices: Vec<String> } => "in";
    check(self, value) { value.as_str().is_some_and(|s| self.choices.iter().any(|c| c == s)) }
    message(self, field) { format!("The {field} field must be one of: {}", self.choices.join(", ")) }
}

fn one_of(params: &[String]) -> Result<Arc<dyn Rule>, ConfigurationError> {
    if params.iter().all(String::is_empty) {
        return Err(ConfigurationError::missing_parameter("in", "in:admin,editor"));
    }
    Ok(Arc::new(OneOf::new(params.to_vec())))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let mut registry = RuleRegistry::with_builtins();
    registry.register(Trimmed)?;
    registry.register_factory("in", one_of)?;
    println!("{registry:?}");

    let validator = Validator::new(registry);
    let schema = Schema::from_json_str(
        r#"{
            "name": "required|string|trimmed",
            "role": "required|in:admin,editor,viewer",
            "shift": "in:08:00,17:00"
        }"#,
    )?;

    let record = json!({ "name": " Grace ", "role": "owner", "shift": "08:00" })
        .as_object()
        .cloned()
        .unwrap_or_default();

    match validator.validate(&record, &schema)?.into_result() {
        Ok(data) => println!("accepted: {}", Value::Object(data)),
        Err(errors) => println!("rejected: {errors}"),
    }

    Ok(())
}
