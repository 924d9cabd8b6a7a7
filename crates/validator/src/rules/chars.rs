//! Character-class and case rules
//!
//! The character-class rules are Unicode-aware: "letters" are `\p{L}` plus
//! combining marks `\p{M}`, "numbers" are `\p{N}`. They only accept
//! non-empty text.

use std::sync::LazyLock;

use regex::Regex;

static ALPHA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{M}]+$").expect("alpha pattern is valid"));

static ALPHA_NUM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{M}\p{N}]+$").expect("alpha_num pattern is valid"));

static ALPHA_DASH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}\p{M}\p{N}_-]+$").expect("alpha_dash pattern is valid")
});

fn matches_text(pattern: &Regex, value: &serde_json::Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| !s.is_empty() && pattern.is_match(s))
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

crate::rule! {
    /// Letters and combining marks only.
    pub Alpha => "alpha";
    check(value) { matches_text(&ALPHA_REGEX, value) }
    message(field) { format!("The {field} field must contain only alphabetic characters") }
}

crate::rule! {
    /// Letters, combining marks and digits.
    pub AlphaNum => "alpha_num";
    check(value) { matches_text(&ALPHA_NUM_REGEX, value) }
    message(field) { format!("The {field} field must contain only letters and numbers") }
}

crate::rule! {
    /// Letters, combining marks, digits, `-` and `_`.
    pub AlphaDash => "alpha_dash";
    check(value) { matches_text(&ALPHA_DASH_REGEX, value) }
    message(field) {
        format!("The {field} field must contain only letters, numbers, dashes, and underscores")
    }
}

// ============================================================================
// CASE
// ============================================================================

crate::rule! {
    /// Text that is unchanged by lowercasing.
    pub Lowercase => "lowercase";
    check(value) { value.as_str().is_some_and(|s| s == s.to_lowercase()) }
    message(field) { format!("The {field} field must be lowercase") }
}

crate::rule! {
    /// Text that is unchanged by uppercasing.
    pub Uppercase => "uppercase";
    check(value) { value.as_str().is_some_and(|s| s == s.to_uppercase()) }
    message(field) { format!("The {field} field must be uppercase") }
}
