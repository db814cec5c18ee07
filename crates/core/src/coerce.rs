//! Lenient field deserializers for create payloads.
//!
//! Optional payload fields never fail deserialization: a value of the wrong
//! JSON type collapses to the field's empty value (`None` or `false`) and
//! the row is inserted with that instead. Required text fields use
//! [`required_text`] or [`trimmed_text`], which accept only strings, and are
//! then rejected by the schema validator when empty.
//!
//! Use with `#[serde(default, deserialize_with = "...")]` so absent keys
//! take the same path as explicit nulls.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text field: non-empty strings pass through, numbers are rendered in
/// decimal, everything else becomes `None`.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_from(value))
}

/// Required text: only a non-empty JSON string counts. A number is not a
/// name, so it reads as missing.
pub fn required_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(string_from(value))
}

/// Like [`required_text`], but surrounding whitespace is removed first and
/// a blank result becomes `None`.
pub fn trimmed_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(string_from(value).and_then(|s| {
        let trimmed = s.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }))
}

/// Boolean flag: only a JSON boolean counts, anything else is `false`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(matches!(value, Value::Bool(true)))
}

/// 32-bit integer: JSON integers within range pass, everything else
/// (strings, fractions, overflow) is `None`.
pub fn optional_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_i64().and_then(|n| i32::try_from(n).ok()))
}

/// Foreign-key reference: any JSON integer representable as `i64`.
pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_i64())
}

fn text_from(value: Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        other => string_from(other),
    }
}

fn string_from(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}
