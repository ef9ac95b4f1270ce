use super::model::{Property, PropertyId};
use ahash::AHashMap;

/// Read-only lookup over a journey's property set.
///
/// The registry is the identity source of truth for the function editor:
/// header and request-body bindings are resolved against it, and it is never
/// mutated from the function side. Backed by the journey's insertion-ordered
/// property list with id and key indexes on top.
#[derive(Debug, Clone, Default)]
pub struct PropertyRegistry {
    properties: Vec<Property>,
    by_id: AHashMap<PropertyId, usize>,
    by_key: AHashMap<String, usize>,
}

impl PropertyRegistry {
    pub fn new(properties: Vec<Property>) -> Self {
        let mut by_id = AHashMap::with_capacity(properties.len());
        let mut by_key = AHashMap::with_capacity(properties.len());
        for (index, property) in properties.iter().enumerate() {
            by_id.insert(property.id.clone(), index);
            by_key.insert(property.key.clone(), index);
        }
        Self {
            properties,
            by_id,
            by_key,
        }
    }

    pub fn lookup_by_id(&self, id: &PropertyId) -> Option<&Property> {
        self.by_id.get(id).map(|&index| &self.properties[index])
    }

    pub fn lookup_by_key(&self, key: &str) -> Option<&Property> {
        self.by_key.get(key).map(|&index| &self.properties[index])
    }

    /// All properties in journey insertion order.
    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl From<&[Property]> for PropertyRegistry {
    fn from(properties: &[Property]) -> Self {
        Self::new(properties.to_vec())
    }
}
