//! Tests for the canonicalizer: output shape, graceful resolution fallback
//! and determinism.
mod common;
use common::*;
use keiro::prelude::*;

/// Builds a draft exercising every canonical section.
fn populated_session(registry: &PropertyRegistry) -> DraftSession {
    let mut session = DraftSession::start_new();
    session.set_name("Create user");
    session.set_kind(FunctionType::Api);
    session.set_host("https://api.example.com");
    session.set_path("/api/v1/users");
    session.set_method(Method::Post);

    session.add_header();
    session.set_header_key(0, "Content-Type");
    session.set_header_constant(0, "application/json");
    session.add_header();
    session.set_header_key(1, "X-Session");
    session.set_header_kind(registry, 1, HeaderKind::Property);
    session.bind_header_property(registry, 1, property_id(registry, "sessionToken"));

    let row = session.add_body_field();
    session.set_body_api_field(registry, &row, "user_id");
    session.bind_body_property(registry, &row, "userId");

    session.set_output_property("created", PropertyType::Boolean);
    session
}

#[test]
fn test_canonical_shape() {
    let registry = sample_registry();
    let session = populated_session(&registry);
    let canonical = session.preview(&registry);

    assert_eq!(canonical.name, "Create user");
    assert_eq!(canonical.kind, "API");
    assert_eq!(canonical.config.method, Method::Post);
    assert_eq!(canonical.config.req_body, r#"{"user_id":"userId"}"#);
    assert_eq!(
        canonical.config.req_body_path.get("userId"),
        Some(&"$.user_id".to_string())
    );
    assert_eq!(
        canonical.config.headers.get("Content-Type"),
        Some(&"application/json".to_string())
    );
    // Property headers resolve to the property key, not its id.
    assert_eq!(
        canonical.config.headers.get("X-Session"),
        Some(&"sessionToken".to_string())
    );
    assert_eq!(
        canonical.config.header_param.get("sessionToken"),
        Some(&PropertyType::String)
    );
    assert_eq!(
        canonical.input_properties.get("userId"),
        Some(&PropertyType::Number)
    );
    assert_eq!(
        canonical.output_properties.get("created"),
        Some(&PropertyType::Boolean)
    );
}

#[test]
fn test_canonicalize_is_deterministic() {
    let registry = sample_registry();
    let session = populated_session(&registry);

    let first = session.preview(&registry);
    let second = session.preview(&registry);
    assert_eq!(first, second);
    assert_eq!(
        first.to_pretty_json().unwrap(),
        second.to_pretty_json().unwrap()
    );
}

#[test]
fn test_incomplete_body_rows_are_skipped() {
    let registry = sample_registry();
    let mut session = DraftSession::start_new();
    session.set_method(Method::Post);

    let bound = session.add_body_field();
    session.set_body_api_field(&registry, &bound, "user_id");
    session.bind_body_property(&registry, &bound, "userId");
    let unbound = session.add_body_field();
    session.set_body_api_field(&registry, &unbound, "orphan_field");

    let canonical = session.preview(&registry);
    assert_eq!(canonical.config.req_body, r#"{"user_id":"userId"}"#);
    assert_eq!(canonical.config.req_body_path.len(), 1);
}

#[test]
fn test_get_method_still_emits_request_body() {
    let registry = sample_registry();
    let mut session = DraftSession::start_new();
    // Visibility of the body editor is a presentation gate; the data model
    // canonicalizes whatever rows exist.
    assert_eq!(session.draft().config.method, Method::Get);

    let row = session.add_body_field();
    session.set_body_api_field(&registry, &row, "user_id");
    session.bind_body_property(&registry, &row, "userId");

    let canonical = session.preview(&registry);
    assert_eq!(canonical.config.req_body, r#"{"user_id":"userId"}"#);
    assert_eq!(
        canonical.config.req_body_path.get("userId"),
        Some(&"$.user_id".to_string())
    );
}

#[test]
fn test_header_resolution_falls_back_to_raw_value() {
    let registry = sample_registry();
    let mut session = DraftSession::start_new();

    session.add_header();
    session.set_header_key(0, "X-Stale");
    session.set_header_kind(&registry, 0, HeaderKind::Property);
    session.bind_header_property(&registry, 0, PropertyId::new("deleted-property"));

    session.add_header();
    session.set_header_key(1, "X-Unselected");
    session.set_header_kind(&registry, 1, HeaderKind::Property);

    let canonical = session.preview(&registry);
    assert_eq!(
        canonical.config.headers.get("X-Stale"),
        Some(&"deleted-property".to_string())
    );
    assert_eq!(
        canonical.config.headers.get("X-Unselected"),
        Some(&String::new())
    );
}

#[test]
fn test_headers_without_keys_are_skipped() {
    let registry = sample_registry();
    let mut session = DraftSession::start_new();
    session.add_header();
    session.set_header_constant(0, "orphan value");

    let canonical = session.preview(&registry);
    assert!(canonical.config.headers.is_empty());
}

#[test]
fn test_empty_draft_canonical_defaults() {
    let registry = sample_registry();
    let session = DraftSession::start_new();
    let canonical = session.preview(&registry);

    assert_eq!(canonical.name, "");
    assert_eq!(canonical.kind, "");
    assert_eq!(canonical.config.method, Method::Get);
    assert_eq!(canonical.config.req_body, "{}");
    assert!(canonical.config.req_body_path.is_empty());
}

#[test]
fn test_pretty_json_uses_backend_field_names() {
    let registry = sample_registry();
    let session = populated_session(&registry);
    let json = session.preview(&registry).to_pretty_json().unwrap();

    assert!(json.contains("\"req_body\""));
    assert!(json.contains("\"req_body_path\""));
    assert!(json.contains("\"header_param\""));
    assert!(json.contains("\"inputProperties\""));
    assert!(json.contains("\"outputProperties\""));
    assert!(json.contains("\"type\": \"API\""));
}
