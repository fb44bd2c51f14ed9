//! Denylist-based SQL injection mitigation.
//!
//! Strips a fixed set of characters that can break out of a quoted string in
//! SQL text. This is removal, not escaping or parameterization: it does not
//! block keyword-only injection, and it silently drops the denylisted
//! characters from legitimate values too.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static DENYLIST_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[+;=<>|`'"/\\]"#).expect("DENYLIST_REGEX pattern is valid")
});

/// Remove every occurrence of a denylisted character from the input.
/// Returns the input borrowed when nothing matches.
pub fn sanitize_str(value: &str) -> Cow<'_, str> {
    DENYLIST_REGEX.replace_all(value, "")
}

/// Sanitize a JSON value: strings are stripped, everything else passes
/// through unchanged.
pub fn sanitize_value(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(sanitize_str(&s).into_owned()),
        other => other,
    }
}
