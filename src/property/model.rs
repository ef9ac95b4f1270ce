use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identity of a property within its journey.
///
/// The id never changes once the property exists; the human-facing `key`
/// may be renamed. Structural fields that reference a property (headers in
/// property mode) hold this id, not the key, so renames cannot orphan them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(String);

impl PropertyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The value type a property carries at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PropertyType {
    String,
    Boolean,
    Date,
    Number,
    Timestamp,
    Range,
    List,
    Map,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::String => "STRING",
            PropertyType::Boolean => "BOOLEAN",
            PropertyType::Date => "DATE",
            PropertyType::Number => "NUMBER",
            PropertyType::Timestamp => "TIMESTAMP",
            PropertyType::Range => "RANGE",
            PropertyType::List => "LIST",
            PropertyType::Map => "MAP",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed named variable scoped to a journey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    /// Unique within the owning journey.
    pub key: String,
    #[serde(rename = "type")]
    pub ty: PropertyType,
}

impl Property {
    pub fn new(key: impl Into<String>, ty: PropertyType) -> Self {
        Self {
            id: PropertyId::generate(),
            key: key.into(),
            ty,
        }
    }
}
