//! Mutation operations over a draft's mapped-field collections (headers and
//! request-body rows) and the synchronization that keeps the derived
//! property maps consistent with them.
//!
//! All operations are tolerant: out-of-range indexes, unknown row ids and
//! unresolvable property references are logged no-ops, never errors. The
//! editor constrains what is selectable; the model degrades gracefully when
//! state drifts (e.g. a property deleted after a header was bound to it).

use super::model::{EntryId, FunctionDraft, HeaderEntry, HeaderKind, HeaderValue, RequestBodyEntry};
use crate::property::{PropertyId, PropertyRegistry, PropertyType};
use ahash::AHashMap;
use itertools::Itertools;
use std::collections::BTreeMap;
use tracing::debug;

/// Rebuilds the declared input contract from the current references.
///
/// The result is the union of registry properties referenced by
/// property-bound headers and by request-body rows, deduplicated by key.
/// Reference counting is uniform across both collections: a key survives as
/// long as any reference to it survives, and disappears with the last one.
/// Unresolvable references contribute nothing.
pub fn recompute_input_properties(
    headers: &[HeaderEntry],
    request_body: &[RequestBodyEntry],
    registry: &PropertyRegistry,
) -> BTreeMap<String, PropertyType> {
    let from_headers = headers
        .iter()
        .filter_map(|header| header.value.property_id())
        .filter_map(|id| registry.lookup_by_id(id));
    let from_body = request_body
        .iter()
        .filter(|entry| !entry.property_key.is_empty())
        .filter_map(|entry| registry.lookup_by_key(&entry.property_key));

    from_headers
        .chain(from_body)
        .unique_by(|property| property.key.clone())
        .map(|property| (property.key.clone(), property.ty))
        .collect()
}

/// Rebuilds the header-parameter map from the property-bound headers alone.
pub fn recompute_header_params(
    headers: &[HeaderEntry],
    registry: &PropertyRegistry,
) -> BTreeMap<String, PropertyType> {
    headers
        .iter()
        .filter_map(|header| header.value.property_id())
        .filter_map(|id| registry.lookup_by_id(id))
        .unique_by(|property| property.key.clone())
        .map(|property| (property.key.clone(), property.ty))
        .collect()
}

/// Runs both reducers against the draft. Called after every structural
/// mutation to headers or request-body rows.
pub(crate) fn refresh_derived_maps(draft: &mut FunctionDraft, registry: &PropertyRegistry) {
    draft.config.header_params = recompute_header_params(&draft.config.headers, registry);
    draft.input_properties =
        recompute_input_properties(&draft.config.headers, &draft.config.request_body, registry);
}

pub(crate) fn add_header(draft: &mut FunctionDraft) {
    draft.config.headers.push(HeaderEntry::empty());
}

pub(crate) fn set_header_key(draft: &mut FunctionDraft, index: usize, key: &str) {
    let Some(header) = draft.config.headers.get_mut(index) else {
        debug!(index, "header index out of range, ignoring key edit");
        return;
    };
    header.key = key.to_string();
}

/// Switches a header between constant and property mode.
///
/// Switching always resets the value side: a property binding must be
/// re-selected, and a constant starts out empty. The derived maps are
/// refreshed because a binding may have been dropped.
pub(crate) fn set_header_kind(
    draft: &mut FunctionDraft,
    registry: &PropertyRegistry,
    index: usize,
    kind: HeaderKind,
) {
    let Some(header) = draft.config.headers.get_mut(index) else {
        debug!(index, "header index out of range, ignoring kind switch");
        return;
    };
    if header.value.kind() == kind {
        return;
    }
    header.value = match kind {
        HeaderKind::Constant => HeaderValue::Constant(String::new()),
        HeaderKind::Property => HeaderValue::Property(None),
    };
    refresh_derived_maps(draft, registry);
}

pub(crate) fn set_header_constant(draft: &mut FunctionDraft, index: usize, text: &str) {
    let Some(header) = draft.config.headers.get_mut(index) else {
        debug!(index, "header index out of range, ignoring value edit");
        return;
    };
    match &mut header.value {
        HeaderValue::Constant(value) => *value = text.to_string(),
        HeaderValue::Property(_) => {
            debug!(index, "header is in property mode, ignoring constant edit");
        }
    }
}

/// Binds a property-mode header to a registry property by id.
///
/// The id is stored as given even when it does not resolve; an unresolvable
/// binding simply contributes nothing to the derived maps.
pub(crate) fn bind_header_property(
    draft: &mut FunctionDraft,
    registry: &PropertyRegistry,
    index: usize,
    id: PropertyId,
) {
    let Some(header) = draft.config.headers.get_mut(index) else {
        debug!(index, "header index out of range, ignoring binding");
        return;
    };
    match &mut header.value {
        HeaderValue::Property(binding) => {
            if registry.lookup_by_id(&id).is_none() {
                debug!(%id, "binding header to unknown property id, stored as-is");
            }
            *binding = Some(id);
            refresh_derived_maps(draft, registry);
        }
        HeaderValue::Constant(_) => {
            debug!(index, "header is in constant mode, ignoring property binding");
        }
    }
}

pub(crate) fn remove_header(draft: &mut FunctionDraft, registry: &PropertyRegistry, index: usize) {
    if index >= draft.config.headers.len() {
        debug!(index, "header index out of range, ignoring removal");
        return;
    }
    draft.config.headers.remove(index);
    refresh_derived_maps(draft, registry);
}

pub(crate) fn add_body_field(draft: &mut FunctionDraft) -> EntryId {
    let entry = RequestBodyEntry::empty();
    let id = entry.id.clone();
    draft.config.request_body.push(entry);
    id
}

pub(crate) fn set_body_api_field(
    draft: &mut FunctionDraft,
    registry: &PropertyRegistry,
    id: &EntryId,
    value: &str,
) {
    let Some(entry) = draft.config.request_body.iter_mut().find(|e| e.id == *id) else {
        debug!(%id, "unknown request-body row, ignoring api-field edit");
        return;
    };
    entry.api_field = value.to_string();
    refresh_derived_maps(draft, registry);
}

pub(crate) fn bind_body_property(
    draft: &mut FunctionDraft,
    registry: &PropertyRegistry,
    id: &EntryId,
    property_key: &str,
) {
    let Some(entry) = draft.config.request_body.iter_mut().find(|e| e.id == *id) else {
        debug!(%id, "unknown request-body row, ignoring property binding");
        return;
    };
    if !property_key.is_empty() && registry.lookup_by_key(property_key).is_none() {
        debug!(property_key, "binding body row to unknown property key, stored as-is");
    }
    entry.property_key = property_key.to_string();
    refresh_derived_maps(draft, registry);
}

pub(crate) fn remove_body_field(draft: &mut FunctionDraft, registry: &PropertyRegistry, id: &EntryId) {
    let before = draft.config.request_body.len();
    draft.config.request_body.retain(|entry| entry.id != *id);
    if draft.config.request_body.len() == before {
        debug!(%id, "unknown request-body row, ignoring removal");
        return;
    }
    refresh_derived_maps(draft, registry);
}

/// The maps and lists whose keys can be renamed through the stage-then-blur
/// protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenameTarget {
    HeaderKeys,
    HeaderParams,
    InputProperties,
    OutputProperties,
}

/// Staged key renames, keyed by `(target, old_key)`.
///
/// A rename is staged on every keystroke and committed only on blur, so a
/// half-typed key never splits a map entry. Renames of different keys are
/// independent.
#[derive(Debug, Clone, Default)]
pub struct RenameStages {
    staged: AHashMap<(RenameTarget, String), String>,
}

impl RenameStages {
    pub fn stage(&mut self, target: RenameTarget, old_key: &str, pending: &str) {
        self.staged
            .insert((target, old_key.to_string()), pending.to_string());
    }

    /// The pending replacement for a key, if a rename is staged.
    pub fn pending(&self, target: RenameTarget, old_key: &str) -> Option<&str> {
        self.staged
            .get(&(target, old_key.to_string()))
            .map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.staged.clear();
    }

    /// Commits the staged rename for `old_key`, if any.
    ///
    /// A commit with an empty or unchanged pending key is a no-op; either
    /// way the stage entry is cleared.
    pub(crate) fn commit(&mut self, target: RenameTarget, old_key: &str, draft: &mut FunctionDraft) {
        let Some(pending) = self.staged.remove(&(target, old_key.to_string())) else {
            return;
        };
        if pending.trim().is_empty() || pending == old_key {
            return;
        }
        match target {
            RenameTarget::HeaderKeys => {
                if let Some(header) = draft.config.headers.iter_mut().find(|h| h.key == old_key) {
                    header.key = pending;
                }
            }
            RenameTarget::HeaderParams => rename_map_key(&mut draft.config.header_params, old_key, pending),
            RenameTarget::InputProperties => rename_map_key(&mut draft.input_properties, old_key, pending),
            RenameTarget::OutputProperties => rename_map_key(&mut draft.output_properties, old_key, pending),
        }
    }
}

fn rename_map_key<V>(map: &mut BTreeMap<String, V>, old_key: &str, new_key: String) {
    if let Some(value) = map.remove(old_key) {
        map.insert(new_key, value);
    }
}
