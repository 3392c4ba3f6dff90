use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A user profile as served by the profile service.
///
/// The structure belongs to the backend, so fields are kept as raw JSON in
/// server order and rendered as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UserProfile(Map<String, Value>);

impl<'de> Deserialize<'de> for UserProfile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(serde::de::Error::custom(format!(
                "user profile must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

impl UserProfile {
    pub fn username(&self) -> Option<&str> {
        self.text("username")
    }

    /// Title for the overlay: `name`, then `fullName`, then `username`.
    pub fn display_name(&self) -> &str {
        ["name", "fullName", "username"]
            .into_iter()
            .find_map(|key| self.text(key))
            .unwrap_or("User profile")
    }

    /// Top-level fields as `(key, display value)` pairs, skipping nulls.
    pub fn fields(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.clone(), display_value(v)))
            .collect()
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::Array(items) if items.iter().all(|v| !v.is_object() && !v.is_array()) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
