//! Lenient Field Decoders
//!
//! Backend records are loosely typed (ids arrive as strings, numbers or
//! populated objects; prices as numbers or strings). These decoders accept
//! what they recognize and yield `None` for anything else, so one odd field
//! never rejects a whole record.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Extract an id from a string, a number, or an object carrying `_id`/`id`
pub(crate) fn id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_blank(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map
            .get("_id")
            .or_else(|| map.get("id"))
            .and_then(id_from_value),
        _ => None,
    }
}

pub(crate) fn string_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_blank(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub(crate) fn number_from_value(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub(crate) fn opt_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(id_from_value(&value))
}

pub(crate) fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(string_from_value(&value))
}

pub(crate) fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(opt_string(d)?.unwrap_or_default())
}

pub(crate) fn opt_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(number_from_value(&value))
}

/// Booleans, 0/1 and "true"/"false"; anything else is `None`
pub(crate) fn opt_flag<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(match value {
        Value::Bool(b) => Some(b),
        Value::Number(n) => n.as_f64().map(|n| n != 0.0),
        Value::String(s) if s.trim().eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.trim().eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    })
}

/// Array of strings, or of objects carrying `url`; anything else is empty
pub(crate) fn string_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(d)?;
    let Value::Array(entries) = value else {
        return Ok(Vec::new());
    };
    Ok(entries
        .iter()
        .filter_map(|entry| match entry {
            Value::Object(map) => map.get("url").and_then(string_from_value),
            other => string_from_value(other),
        })
        .collect())
}

/// Array whose undecodable entries are skipped; non-arrays are empty
pub(crate) fn list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(d)?;
    let Value::Array(entries) = value else {
        return Ok(Vec::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}

/// `null` becomes `T::default()`; other shapes must decode as `T`
pub(crate) fn or_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(d)?;
    if value.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(value).map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_shapes() {
        assert_eq!(id_from_value(&json!("abc")), Some("abc".to_string()));
        assert_eq!(id_from_value(&json!(42)), Some("42".to_string()));
        assert_eq!(id_from_value(&json!({"_id": "x1", "title": "t"})), Some("x1".to_string()));
        assert_eq!(id_from_value(&json!({"id": 7})), Some("7".to_string()));
        assert_eq!(id_from_value(&json!("  ")), None);
        assert_eq!(id_from_value(&json!([1, 2])), None);
        assert_eq!(id_from_value(&Value::Null), None);
    }

    #[test]
    fn test_number_shapes() {
        assert_eq!(number_from_value(&json!(12.5)), Some(12.5));
        assert_eq!(number_from_value(&json!(" 30 ")), Some(30.0));
        assert_eq!(number_from_value(&json!("free")), None);
        assert_eq!(number_from_value(&json!("NaN")), None);
        assert_eq!(number_from_value(&json!({"amount": 3})), None);
    }
}
