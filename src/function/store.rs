use super::model::{Function, FunctionId, FunctionSummary};
use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use tracing::info;

/// The committed functions of one journey, in insertion order.
///
/// Serializes transparently as the plain function list embedded in the
/// persisted journey record. Failed operations leave the store unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FunctionStore {
    entries: Vec<Function>,
}

impl FunctionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new function and returns its id.
    pub fn create(&mut self, function: Function) -> FunctionId {
        let id = function.id.clone();
        info!(%id, name = %function.name, "function created");
        self.entries.push(function);
        id
    }

    /// Replaces the function with the given id in place, keeping its
    /// position in the list.
    pub fn replace(&mut self, id: &FunctionId, function: Function) -> Result<(), StoreError> {
        let Some(slot) = self.entries.iter_mut().find(|f| f.id == *id) else {
            return Err(StoreError::NotFound { id: id.clone() });
        };
        info!(%id, name = %function.name, "function replaced");
        *slot = function;
        Ok(())
    }

    /// Removes and returns the function with the given id.
    pub fn remove(&mut self, id: &FunctionId) -> Result<Function, StoreError> {
        let Some(index) = self.entries.iter().position(|f| f.id == *id) else {
            return Err(StoreError::NotFound { id: id.clone() });
        };
        info!(%id, "function removed");
        Ok(self.entries.remove(index))
    }

    pub fn get(&self, id: &FunctionId) -> Option<&Function> {
        self.entries.iter().find(|f| f.id == *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Function> {
        self.entries.iter()
    }

    /// The per-entry digests the function list view renders.
    pub fn summaries(&self) -> Vec<FunctionSummary> {
        self.entries.iter().map(Function::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a FunctionStore {
    type Item = &'a Function;
    type IntoIter = std::slice::Iter<'a, Function>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
