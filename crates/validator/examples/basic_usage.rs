//! Basic usage example for dsl-validator

use dsl_validator::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ConfigurationError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let validator = Validator::default();
    let schema = Schema::new()
        .field("username", "required|string|alpha_dash|min:3|max:20")
        .field("email", "required|email")
        .field("age", "integer|gte:18")
        .field("website", "url|starts_with:https");

    let good = json!({
        "username": "ada_lovelace",
        "email": "ada@example.com",
        "age": 36,
    });
    let bad = json!({
        "username": "a",
        "email": "ada@",
        "age": 16.5,
        "website": "http://example.com",
    });

    for (label, data) in [("good", good), ("bad", bad)] {
        let record = data.as_object().cloned().unwrap_or_default();
        let result = validator.validate(&record, &schema)?;

        println!("{label}: valid = {}", result.valid);
        if let Some(errors) = &result.errors {
            for (field, messages) in errors.iter() {
                for message in messages {
                    println!("  ✗ {field}: {message}");
                }
            }
        }
    }

    // A broken schema is reported before any data is looked at
    match validator.check_schema(&Schema::new().field("age", "min:eighteen")) {
        Ok(()) => println!("schema ok"),
        Err(e) => println!("schema error: {e}"),
    }

    Ok(())
}
