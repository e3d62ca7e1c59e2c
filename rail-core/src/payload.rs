use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Untyped request body handed to an operation.
///
/// Handlers pull the fields they need by name; a missing or non-string field reads as "".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn str_field(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or_default()
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Anything other than a JSON object becomes an empty payload.
impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::new(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Payload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_and_non_string_fields_read_empty() {
        let payload = Payload::from(json!({ "pnr": 1234567890, "from": "NDLS" }));
        assert_eq!(payload.str_field("from"), "NDLS");
        assert_eq!(payload.str_field("pnr"), "");
        assert_eq!(payload.str_field("to"), "");
    }

    #[test]
    fn test_non_object_becomes_empty() {
        assert_eq!(Payload::from(json!(["login"])), Payload::new());
        assert_eq!(Payload::from(Value::Null), Payload::new());
    }

    #[test]
    fn test_builder_and_iterator() {
        let built = Payload::new().with("username", "demo123").with("password", "Demo@123");
        let collected: Payload = [("username", "demo123"), ("password", "Demo@123")]
            .into_iter()
            .collect();
        assert_eq!(built, collected);
        assert_eq!(built.str_field("password"), "Demo@123");
    }
}
