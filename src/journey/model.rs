use crate::function::FunctionStore;
use crate::property::{Property, PropertyRegistry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JourneyId(String);

impl JourneyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JourneyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A node placed on the journey canvas. Opaque to the function core, which
/// only needs nodes to exist and be countable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub description: String,
    pub x: f64,
    pub y: f64,
}

/// A directed connection between two canvas nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// A named container of graph nodes/edges, typed properties and functions.
/// This is the unit the journey store persists and retrieves whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journey {
    pub id: JourneyId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub nodes: Vec<JourneyNode>,
    #[serde(default)]
    pub edges: Vec<JourneyEdge>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub functions: FunctionStore,
}

impl Journey {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: JourneyId::generate(),
            name: name.into(),
            description: description.into(),
            is_active: false,
            created_at: now,
            updated_at: now,
            nodes: Vec::new(),
            edges: Vec::new(),
            properties: Vec::new(),
            functions: FunctionStore::new(),
        }
    }

    /// Updates the two fields of the journey detail form and bumps the
    /// modification timestamp.
    pub fn set_details(&mut self, name: &str, description: &str) {
        self.name = name.to_string();
        self.description = description.to_string();
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Builds the property registry the function editor resolves against.
    pub fn registry(&self) -> PropertyRegistry {
        PropertyRegistry::new(self.properties.clone())
    }

    pub fn summary(&self) -> JourneySummary {
        JourneySummary {
            name: self.name.clone(),
            is_active: self.is_active,
            node_count: self.nodes.len(),
            edge_count: self.edges.len(),
            property_count: self.properties.len(),
            function_count: self.functions.len(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// The counts and flags the journey overview renders per card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneySummary {
    pub name: String,
    pub is_active: bool,
    pub node_count: usize,
    pub edge_count: usize,
    pub property_count: usize,
    pub function_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
