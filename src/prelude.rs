//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the keiro crate so a single
//! `use keiro::prelude::*;` covers the typical editing workflow.

// Draft editing and canonicalization
pub use crate::function::{
    CanonicalConfig, CanonicalFunction, DraftSession, EntryId, Function, FunctionDraft,
    FunctionId, FunctionStore, FunctionSummary, FunctionType, HeaderEntry, HeaderKind,
    HeaderValue, Method, RenameTarget, RequestBodyEntry, canonicalize,
};

// Journey container and persistence boundary
pub use crate::journey::{
    Journey, JourneyArchive, JourneyEdge, JourneyId, JourneyNode, JourneyStore,
    JourneySummary, MemoryJourneyStore,
};

// Property registry
pub use crate::property::{Property, PropertyId, PropertyRegistry, PropertyType};

// Error types
pub use crate::error::{ArchiveError, StoreError, SubmitError, ValidationError};

// Standard library re-exports commonly used with this crate
pub use std::collections::BTreeMap;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
