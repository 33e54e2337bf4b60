use crate::error::ParseError;
use crate::utils::error_helpers::value_kind;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::Index;

static NULL: Value = Value::Null;

/// A parsed YAML/JSON mapping with key lookup and attribute-style accessors.
///
/// `doc["key"]` and [`Document::get`] look up a single key. Attribute-style
/// access goes through dotted paths: [`Document::lookup`] returns the raw
/// value, [`Document::field`] deserializes it into a concrete type and
/// [`Document::section`] returns a nested mapping as another `Document`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    entries: Map<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a parsed value. The value must be a mapping; `origin` names the
    /// source in errors.
    pub fn from_value(value: Value, origin: &str) -> Result<Self, ParseError> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            Value::Null => Err(ParseError::EmptyDocument {
                path: origin.to_string(),
            }),
            other => Err(ParseError::NotAMapping {
                path: origin.to_string(),
                found: value_kind(&other),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Follow a dotted path such as `training.params.epochs`.
    ///
    /// Numeric segments index into sequences.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.entries.get(first)?;
        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Typed accessor for the value at a dotted path.
    pub fn field<T: DeserializeOwned>(&self, path: &str) -> Result<T, ParseError> {
        let value = self.lookup(path).ok_or_else(|| ParseError::MissingField {
            field: path.to_string(),
        })?;
        T::deserialize(value).map_err(|source| ParseError::FieldType {
            field: path.to_string(),
            source,
        })
    }

    /// Nested mapping at a dotted path, as its own `Document`.
    pub fn section(&self, path: &str) -> Result<Document, ParseError> {
        match self.lookup(path) {
            Some(Value::Object(entries)) => Ok(Document {
                entries: entries.clone(),
            }),
            Some(other) => Err(ParseError::NotAMapping {
                path: path.to_string(),
                found: value_kind(other),
            }),
            None => Err(ParseError::MissingField {
                field: path.to_string(),
            }),
        }
    }

    /// Deserialize the whole mapping into a typed configuration struct.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, ParseError> {
        T::deserialize(&self.to_value()).map_err(|source| ParseError::FieldType {
            field: "<root>".to_string(),
            source,
        })
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.entries.clone())
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.entries
    }
}

impl From<Map<String, Value>> for Document {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

impl Index<&str> for Document {
    type Output = Value;

    /// Missing keys index to `Value::Null`, as `serde_json::Value` does.
    fn index(&self, key: &str) -> &Value {
        self.entries.get(key).unwrap_or(&NULL)
    }
}
