use super::canonical::{CanonicalFunction, canonicalize};
use super::mapping;
use super::mapping::{RenameStages, RenameTarget};
use super::model::{
    EntryId, Function, FunctionDraft, FunctionId, FunctionType, HeaderKind, Method,
    RequestBodyEntry,
};
use super::store::FunctionStore;
use crate::error::{SubmitError, ValidationError};
use crate::property::{PropertyId, PropertyRegistry, PropertyType};

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionMode {
    New,
    Edit(FunctionId),
}

/// One open function editor.
///
/// The session owns the draft exclusively; there is no shared edit state, so
/// several sessions can exist side by side without cross-talk. The registry
/// is passed into each operation that resolves property references, since
/// the journey owns it. Dropping the session discards the draft.
#[derive(Debug, Clone)]
pub struct DraftSession {
    draft: FunctionDraft,
    mode: SessionMode,
    renames: RenameStages,
}

impl Default for DraftSession {
    fn default() -> Self {
        Self::start_new()
    }
}

impl DraftSession {
    /// Opens an empty draft (method defaults to GET, all collections empty).
    pub fn start_new() -> Self {
        Self {
            draft: FunctionDraft::default(),
            mode: SessionMode::New,
            renames: RenameStages::default(),
        }
    }

    /// Opens a committed function for editing.
    ///
    /// Optional collections absent from older persisted functions come back
    /// as empty defaults through deserialization; request-body rows get
    /// fresh local ids since those are never persisted. The persisted
    /// input-property map is kept verbatim until the first structural
    /// mutation recomputes it from the current references.
    pub fn start_edit(function: &Function) -> Self {
        let mut draft = FunctionDraft {
            name: function.name.clone(),
            kind: Some(function.kind),
            config: function.config.clone(),
            input_properties: function.input_properties.clone(),
            output_properties: function.output_properties.clone(),
        };
        for entry in &mut draft.config.request_body {
            entry.id = EntryId::generate();
        }
        Self {
            draft,
            mode: SessionMode::Edit(function.id.clone()),
            renames: RenameStages::default(),
        }
    }

    pub fn draft(&self) -> &FunctionDraft {
        &self.draft
    }

    /// The id of the function being edited, when in edit mode.
    pub fn editing_id(&self) -> Option<&FunctionId> {
        match &self.mode {
            SessionMode::Edit(id) => Some(id),
            SessionMode::New => None,
        }
    }

    // Plain field setters.

    pub fn set_name(&mut self, name: &str) {
        self.draft.name = name.to_string();
    }

    pub fn set_kind(&mut self, kind: FunctionType) {
        self.draft.kind = Some(kind);
    }

    pub fn set_host(&mut self, host: &str) {
        self.draft.config.host = host.to_string();
    }

    pub fn set_path(&mut self, path: &str) {
        self.draft.config.path = path.to_string();
    }

    /// Sets the HTTP method. The request-body section of the editor is only
    /// shown for non-GET methods, but that is a presentation gate: existing
    /// rows are kept and still canonicalized under GET.
    pub fn set_method(&mut self, method: Method) {
        self.draft.config.method = method;
    }

    // Header rows.

    pub fn add_header(&mut self) {
        mapping::add_header(&mut self.draft);
    }

    pub fn set_header_key(&mut self, index: usize, key: &str) {
        mapping::set_header_key(&mut self.draft, index, key);
    }

    pub fn set_header_kind(&mut self, registry: &PropertyRegistry, index: usize, kind: HeaderKind) {
        mapping::set_header_kind(&mut self.draft, registry, index, kind);
    }

    pub fn set_header_constant(&mut self, index: usize, text: &str) {
        mapping::set_header_constant(&mut self.draft, index, text);
    }

    pub fn bind_header_property(
        &mut self,
        registry: &PropertyRegistry,
        index: usize,
        id: PropertyId,
    ) {
        mapping::bind_header_property(&mut self.draft, registry, index, id);
    }

    pub fn remove_header(&mut self, registry: &PropertyRegistry, index: usize) {
        mapping::remove_header(&mut self.draft, registry, index);
    }

    // Request-body rows.

    pub fn add_body_field(&mut self) -> EntryId {
        mapping::add_body_field(&mut self.draft)
    }

    pub fn set_body_api_field(&mut self, registry: &PropertyRegistry, id: &EntryId, value: &str) {
        mapping::set_body_api_field(&mut self.draft, registry, id, value);
    }

    pub fn bind_body_property(
        &mut self,
        registry: &PropertyRegistry,
        id: &EntryId,
        property_key: &str,
    ) {
        mapping::bind_body_property(&mut self.draft, registry, id, property_key);
    }

    pub fn remove_body_field(&mut self, registry: &PropertyRegistry, id: &EntryId) {
        mapping::remove_body_field(&mut self.draft, registry, id);
    }

    // Output contract. Declared by the user; keys need not exist as
    // registry properties.

    pub fn set_output_property(&mut self, key: &str, ty: PropertyType) {
        self.draft.output_properties.insert(key.to_string(), ty);
    }

    pub fn remove_output_property(&mut self, key: &str) {
        self.draft.output_properties.remove(key);
    }

    // Key renames, staged per keystroke and committed on blur.

    pub fn stage_key_rename(&mut self, target: RenameTarget, old_key: &str, pending: &str) {
        self.renames.stage(target, old_key, pending);
    }

    pub fn commit_key_rename(&mut self, target: RenameTarget, old_key: &str) {
        self.renames.commit(target, old_key, &mut self.draft);
    }

    pub fn pending_key_rename(&self, target: RenameTarget, old_key: &str) -> Option<&str> {
        self.renames.pending(target, old_key)
    }

    /// The live canonical preview of the draft.
    pub fn preview(&self, registry: &PropertyRegistry) -> CanonicalFunction {
        canonicalize(&self.draft, registry)
    }

    /// Validates and commits the draft.
    ///
    /// Name and type are required; everything else is optional. On success
    /// the draft is written to the store (replacing the original in edit
    /// mode, creating a new entry otherwise) and the session resets to a
    /// fresh draft. On failure the draft is retained untouched so the user
    /// can correct it.
    pub fn submit(&mut self, store: &mut FunctionStore) -> Result<FunctionId, SubmitError> {
        if self.draft.name.trim().is_empty() {
            return Err(ValidationError::MissingRequiredField { field: "name" }.into());
        }
        let Some(kind) = self.draft.kind else {
            return Err(ValidationError::MissingRequiredField { field: "type" }.into());
        };

        let id = match &self.mode {
            SessionMode::Edit(id) => id.clone(),
            SessionMode::New => FunctionId::generate(),
        };
        let function = Function {
            id: id.clone(),
            name: self.draft.name.clone(),
            kind,
            config: self.draft.config.clone(),
            input_properties: self.draft.input_properties.clone(),
            output_properties: self.draft.output_properties.clone(),
        };

        match &self.mode {
            SessionMode::Edit(_) => store.replace(&id, function)?,
            SessionMode::New => {
                store.create(function);
            }
        }

        *self = Self::start_new();
        Ok(id)
    }

    /// Discards the draft unconditionally. No store mutation.
    pub fn cancel(&mut self) {
        *self = Self::start_new();
    }

    /// The request-body rows, for rendering. Row identity is the local
    /// [`EntryId`].
    pub fn body_fields(&self) -> &[RequestBodyEntry] {
        &self.draft.config.request_body
    }
}
