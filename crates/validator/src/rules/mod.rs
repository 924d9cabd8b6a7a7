//! Built-in rule catalog
//!
//! Rules are grouped by family. Simple rules are zero-sized and shared by
//! every validation call; parameterized rules are built by the factories in
//! [`compare`] and [`affix`] each time a rule string is compiled.
//!
//! | Family      | Simple rules                                             | Factories                     |
//! |-------------|----------------------------------------------------------|-------------------------------|
//! | presence    | `required`                                               |                               |
//! | types       | `string` `number` `numeric` `boolean` `integer` `decimal` `array` |                      |
//! | chars       | `alpha` `alpha_num` `alpha_dash` `lowercase` `uppercase` |                               |
//! | format      | `email` `url` `json` `date`                              |                               |
//! | compare     |                                                          | `min` `max` `gt` `gte` `lt` `lte` |
//! | affix       |                                                          | `starts_with` `ends_with`     |

pub mod affix;
pub mod chars;
pub mod compare;
pub mod format;
pub mod presence;
pub mod types;

pub use affix::{EndsWith, StartsWith, ends_with_factory, starts_with_factory};
pub use chars::{Alpha, AlphaDash, AlphaNum, Lowercase, Uppercase};
pub use compare::{
    GreaterThan, GreaterThanOrEqual, LessThan, LessThanOrEqual, Max, Min, gt_factory,
    gte_factory, lt_factory, lte_factory, max_factory, min_factory,
};
pub use format::{Date, Email, Json, Url, parses_as_date};
pub use presence::Required;
pub use types::{IsArray, IsBoolean, IsDecimal, IsInteger, IsNumber, IsNumeric, IsString};

use std::sync::Arc;

use crate::foundation::{ConfigurationError, Rule, RuleFactory};
use crate::registry::RuleRegistry;

fn simple_rules() -> [Arc<dyn Rule>; 17] {
    [
        Arc::new(Required),
        Arc::new(IsString),
        Arc::new(IsNumber),
        Arc::new(IsNumeric),
        Arc::new(IsBoolean),
        Arc::new(IsInteger),
        Arc::new(IsDecimal),
        Arc::new(IsArray),
        Arc::new(Alpha),
        Arc::new(AlphaNum),
        Arc::new(AlphaDash),
        Arc::new(Lowercase),
        Arc::new(Uppercase),
        Arc::new(Email),
        Arc::new(Url),
        Arc::new(Json),
        Arc::new(Date),
    ]
}

fn factories() -> [(&'static str, Arc<dyn RuleFactory>); 8] {
    [
        ("min", Arc::new(min_factory)),
        ("max", Arc::new(max_factory)),
        ("gt", Arc::new(gt_factory)),
        ("gte", Arc::new(gte_factory)),
        ("lt", Arc::new(lt_factory)),
        ("lte", Arc::new(lte_factory)),
        ("starts_with", Arc::new(starts_with_factory)),
        ("ends_with", Arc::new(ends_with_factory)),
    ]
}

/// Registers the whole catalog (17 simple rules, 8 factories) into `registry`.
///
/// Fails only if `registry` already holds one of the catalog names in the
/// opposite table, e.g. a custom simple rule called `min`.
pub fn register_builtins(registry: &mut RuleRegistry) -> Result<(), ConfigurationError> {
    for rule in simple_rules() {
        registry.register_shared(rule)?;
    }
    for (name, factory) in factories() {
        registry.register_factory_shared(name, factory)?;
    }
    Ok(())
}

/// Fills an empty registry. Catalog names are valid and disjoint, so no
/// check can fail here.
pub(crate) fn install(registry: &mut RuleRegistry) {
    for rule in simple_rules() {
        registry.insert_rule(rule);
    }
    for (name, factory) in factories() {
        registry.insert_factory(name.to_owned(), factory);
    }
}
