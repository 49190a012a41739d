use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// Key spellings accepted for a player's display name, in lookup order.
pub const PLAYER_NAME_KEYS: [&str; 4] = ["Name", "name", "Player", "PLAYER"];

/// A single cell of a schema-less roster row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn empty() -> Self {
        Self::Text(String::new())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }

    /// Empty text, zero and NaN count as "no value" (JS truthiness).
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
        }
    }
}

impl<'de> Deserialize<'de> for CellValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Number(n) => n
                .as_f64()
                .map(Self::Number)
                .unwrap_or_else(|| Self::Text(n.to_string())),
            Value::Bool(b) => Self::Text(b.to_string()),
            Value::Null => Self::empty(),
            other => Self::Text(other.to_string()),
        }
    }
}

impl From<CellValue> for Value {
    fn from(value: CellValue) -> Self {
        match value {
            CellValue::Text(text) => Value::String(text),
            CellValue::Number(n) => Number::from_f64(n).map_or(Value::Null, Value::Number),
        }
    }
}

/// Ordered column -> value mapping. Column order is first-seen insertion order,
/// which is what the table uses for its column set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

/// Roster rows are plain records; columns are discovered at runtime.
pub type Player = Record;

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Overwrite in place when the key exists, otherwise append.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    /// First truthy value among `keys`, rendered as text.
    pub fn first_text(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .filter_map(|key| self.get(key))
            .find(|value| value.is_truthy())
            .map(ToString::to_string)
    }

    /// Display name of a roster row; empty when no name column is filled.
    pub fn display_name(&self) -> String {
        self.first_text(&PLAYER_NAME_KEYS).unwrap_or_default()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Record> for Map<String, Value> {
    fn from(record: Record) -> Self {
        record
            .fields
            .into_iter()
            .map(|(key, value)| (key, Value::from(value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{CellValue, Record};
    use serde_json::json;

    #[test]
    fn deserializes_preserving_column_order() {
        let record: Record =
            serde_json::from_value(json!({ "Name": "Ann", "Rank": "Admiral", "Power": 1200 }))
                .expect("record should parse");

        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["Name", "Rank", "Power"]);
        assert_eq!(record.get("Power"), Some(&CellValue::Number(1200.0)));
    }

    #[test]
    fn non_scalar_json_values_become_text() {
        let record: Record =
            serde_json::from_value(json!({ "a": null, "b": true, "c": [1, 2] }))
                .expect("record should parse");

        assert_eq!(record.get("a"), Some(&CellValue::empty()));
        assert_eq!(record.get("b"), Some(&CellValue::text("true")));
        assert_eq!(record.get("c"), Some(&CellValue::text("[1,2]")));
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut record: Record = [("Name", "Ann"), ("score", "1"), ("Rank", "Premier")]
            .into_iter()
            .collect();
        record.insert("score", "5");
        record.insert("tasks", "3");

        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["Name", "score", "Rank", "tasks"]);
        assert_eq!(record.get("score"), Some(&CellValue::text("5")));
    }

    #[test]
    fn display_name_uses_first_filled_spelling() {
        let record: Record = [("Name", ""), ("Player", "Bob")].into_iter().collect();
        assert_eq!(record.display_name(), "Bob");
        assert_eq!(Record::new().display_name(), "");
    }

    #[test]
    fn integral_numbers_display_without_fraction() {
        assert_eq!(CellValue::Number(10.0).to_string(), "10");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
    }

    #[test]
    fn serializes_back_to_object() {
        let record: Record = [("Name", CellValue::text("Ann")), ("Power", 3.0.into())]
            .into_iter()
            .collect();
        let value = serde_json::to_value(&record).expect("record should serialize");
        assert_eq!(value, json!({ "Name": "Ann", "Power": 3.0 }));
    }
}
