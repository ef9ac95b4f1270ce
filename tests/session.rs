//! Tests for the draft session lifecycle: validation, submit, edit mode and
//! the function store contract.
mod common;
use common::*;
use keiro::prelude::*;

#[test]
fn test_submit_requires_name() {
    let mut store = FunctionStore::new();
    let mut session = DraftSession::start_new();
    session.set_kind(FunctionType::Api);

    let result = session.submit(&mut store);
    assert_eq!(
        result,
        Err(SubmitError::Validation(
            ValidationError::MissingRequiredField { field: "name" }
        ))
    );
    // Store untouched, draft retained for correction.
    assert!(store.is_empty());
    assert_eq!(session.draft().kind, Some(FunctionType::Api));
}

#[test]
fn test_submit_requires_kind() {
    let mut store = FunctionStore::new();
    let mut session = DraftSession::start_new();
    session.set_name("Send email");

    let result = session.submit(&mut store);
    assert_eq!(
        result,
        Err(SubmitError::Validation(
            ValidationError::MissingRequiredField { field: "type" }
        ))
    );
    assert!(store.is_empty());
    assert_eq!(session.draft().name, "Send email");
}

#[test]
fn test_whitespace_name_is_rejected() {
    let mut store = FunctionStore::new();
    let mut session = DraftSession::start_new();
    session.set_name("   ");
    session.set_kind(FunctionType::Kafka);

    assert!(session.submit(&mut store).is_err());
    assert!(store.is_empty());
}

#[test]
fn test_submit_creates_and_resets() {
    let registry = sample_registry();
    let mut store = FunctionStore::new();
    let id = commit_sample_function(&registry, &mut store);

    assert_eq!(store.len(), 1);
    let committed = store.get(&id).expect("function should be committed");
    assert_eq!(committed.name, "Create user");
    assert_eq!(committed.kind, FunctionType::Api);
    assert_eq!(
        committed.input_properties.get("userId"),
        Some(&PropertyType::Number)
    );
}

#[test]
fn test_submit_resets_session() {
    let mut store = FunctionStore::new();
    let mut session = DraftSession::start_new();
    session.set_name("Create user");
    session.set_kind(FunctionType::Api);
    session.set_method(Method::Put);
    session.submit(&mut store).unwrap();

    assert_eq!(session.draft(), &FunctionDraft::default());
    assert!(session.editing_id().is_none());
}

#[test]
fn test_edit_resubmit_is_idempotent() {
    let registry = sample_registry();
    let mut store = FunctionStore::new();
    let id = commit_sample_function(&registry, &mut store);
    let before = serde_json::to_value(store.get(&id).unwrap()).unwrap();

    let mut session = DraftSession::start_edit(store.get(&id).unwrap());
    let resubmitted = session.submit(&mut store).expect("resubmit should succeed");

    assert_eq!(resubmitted, id);
    assert_eq!(store.len(), 1);
    let after = serde_json::to_value(store.get(&id).unwrap()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_edit_replaces_in_place() {
    let registry = sample_registry();
    let mut store = FunctionStore::new();
    let id = commit_sample_function(&registry, &mut store);

    let mut session = DraftSession::start_edit(store.get(&id).unwrap());
    assert_eq!(session.editing_id(), Some(&id));
    session.set_name("Create account");
    let resubmitted = session.submit(&mut store).unwrap();

    assert_eq!(resubmitted, id);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(&id).unwrap().name, "Create account");
}

#[test]
fn test_cancel_discards_draft() {
    let registry = sample_registry();
    let mut store = FunctionStore::new();
    let id = commit_sample_function(&registry, &mut store);

    let mut session = DraftSession::start_edit(store.get(&id).unwrap());
    session.set_name("Scratched");
    session.cancel();

    assert_eq!(session.draft(), &FunctionDraft::default());
    assert!(session.editing_id().is_none());
    assert_eq!(store.get(&id).unwrap().name, "Create user");
}

#[test]
fn test_start_edit_defaults_missing_collections() {
    // Older persisted functions predate the header/body editors and lack
    // those fields entirely.
    let legacy: Function = serde_json::from_value(serde_json::json!({
        "id": "legacy-1",
        "name": "Legacy call",
        "type": "API",
        "config": {
            "host": "https://legacy.example.com",
            "path": "/ping",
            "method": "GET"
        }
    }))
    .expect("legacy function should deserialize");

    let session = DraftSession::start_edit(&legacy);
    let draft = session.draft();
    assert!(draft.config.headers.is_empty());
    assert!(draft.config.request_body.is_empty());
    assert!(draft.config.request_body_path.is_empty());
    assert!(draft.config.header_params.is_empty());
    assert!(draft.input_properties.is_empty());
}

#[test]
fn test_store_replace_unknown_id_fails() {
    let registry = sample_registry();
    let mut store = FunctionStore::new();
    let id = commit_sample_function(&registry, &mut store);
    let function = store.get(&id).unwrap().clone();

    let ghost = FunctionId::new("ghost");
    let result = store.replace(&ghost, function);
    assert_eq!(result, Err(StoreError::NotFound { id: ghost }));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_store_remove_unknown_id_fails() {
    let mut store = FunctionStore::new();
    let ghost = FunctionId::new("ghost");
    assert_eq!(
        store.remove(&ghost),
        Err(StoreError::NotFound { id: ghost })
    );
}

#[test]
fn test_store_preserves_insertion_order() {
    let mut store = FunctionStore::new();
    for name in ["first", "second", "third"] {
        let mut session = DraftSession::start_new();
        session.set_name(name);
        session.set_kind(FunctionType::Kafka);
        session.submit(&mut store).unwrap();
    }

    let names: Vec<_> = store.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["first", "second", "third"]);
}

#[test]
fn test_store_remove_returns_function() {
    let registry = sample_registry();
    let mut store = FunctionStore::new();
    let id = commit_sample_function(&registry, &mut store);

    let removed = store.remove(&id).unwrap();
    assert_eq!(removed.name, "Create user");
    assert!(store.is_empty());
}

#[test]
fn test_function_summary_counts() {
    let registry = sample_registry();
    let mut store = FunctionStore::new();
    let id = commit_sample_function(&registry, &mut store);

    let summary = store.get(&id).unwrap().summary();
    assert_eq!(summary.endpoint, "https://api.example.com/api/v1/users");
    assert_eq!(summary.method, Method::Post);
    assert_eq!(summary.header_count, 0);
    assert_eq!(summary.input_count, 1);
    assert_eq!(summary.output_count, 0);
}
