//! Serde helper functions for request deserialization.
//!
//! Browser forms submit blank inputs as empty strings. These helpers treat
//! blank values as absent so that optional fields stay `None` and required
//! fields fail validation with a field message instead of a parse error.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty strings as None.
/// Non-empty values are trimmed.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}

/// Deserialize a string that may be null or missing, trimming whitespace.
///
/// Pair with `#[serde(default)]`: absent and `null` both become `""`.
pub fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim().to_string()).unwrap_or_default())
}
