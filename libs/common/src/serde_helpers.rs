//! Shared Serde deserializers
//!
//! Environment variables arrive as strings, numbers or booleans depending on
//! the provider; these helpers accept all of them.

use serde::{Deserialize, Deserializer};

/// Custom deserializer for boolean flags that supports multiple input formats
///
/// - boolean: true, false
/// - integer: 0 (false), 1 (true)
/// - string: "1"/"0", "true"/"false", "yes"/"no", "on"/"off" (case-insensitive),
///   empty string is false
pub fn deserialize_bool_flexible<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrStringOrInt {
        Bool(bool),
        Int(i64),
        String(String),
    }

    match BoolOrStringOrInt::deserialize(deserializer)? {
        BoolOrStringOrInt::Bool(b) => Ok(b),
        BoolOrStringOrInt::Int(0) => Ok(false),
        BoolOrStringOrInt::Int(1) => Ok(true),
        BoolOrStringOrInt::Int(i) => Err(D::Error::custom(format!(
            "Invalid integer value {}, expected 0 or 1",
            i
        ))),
        BoolOrStringOrInt::String(s) => parse_flag(&s).ok_or_else(|| {
            D::Error::custom(format!(
                "Invalid boolean value '{}', expected: 1/0, true/false, yes/no, on/off",
                s
            ))
        }),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    let t = raw.trim();
    const TRUTHY: [&str; 4] = ["1", "true", "yes", "on"];
    const FALSY: [&str; 4] = ["0", "false", "no", "off"];

    if TRUTHY.iter().any(|v| t.eq_ignore_ascii_case(v)) {
        Some(true)
    } else if t.is_empty() || FALSY.iter().any(|v| t.eq_ignore_ascii_case(v)) {
        Some(false)
    } else {
        None
    }
}
