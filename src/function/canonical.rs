//! The pure transform from a draft to the canonical JSON function
//! definition handed to the execution backend.
//!
//! Canonicalization is recomputed on every draft mutation for the live
//! preview and again at submit time; it never mutates the draft and never
//! fails. Every emitted map is a `BTreeMap`, so repeated invocations on an
//! unmutated draft are byte-identical.

use super::model::{FunctionDraft, HeaderValue, Method};
use crate::property::{PropertyRegistry, PropertyType};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// The normalized representation of a function, in the shape the execution
/// backend consumes. Field names follow the backend contract, not the
/// editor model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalFunction {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub config: CanonicalConfig,
    #[serde(rename = "inputProperties")]
    pub input_properties: BTreeMap<String, PropertyType>,
    #[serde(rename = "outputProperties")]
    pub output_properties: BTreeMap<String, PropertyType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalConfig {
    pub host: String,
    pub path: String,
    pub method: Method,
    /// JSON-encoded object mapping outgoing API field -> property key.
    pub req_body: String,
    /// Property key -> JSONPath of the outgoing field carrying it.
    pub req_body_path: BTreeMap<String, String>,
    pub header_param: BTreeMap<String, PropertyType>,
    pub headers: BTreeMap<String, String>,
}

impl CanonicalFunction {
    /// The two-space-indented preview string shown alongside the editor.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Canonicalizes a draft against the journey's property registry.
pub fn canonicalize(draft: &FunctionDraft, registry: &PropertyRegistry) -> CanonicalFunction {
    // Only rows with both sides filled in make it into the body contract.
    let bound_body_rows: Vec<_> = draft
        .config
        .request_body
        .iter()
        .filter(|entry| !entry.api_field.is_empty() && !entry.property_key.is_empty())
        .collect();

    let mut req_body = serde_json::Map::new();
    for entry in &bound_body_rows {
        req_body.insert(
            entry.api_field.clone(),
            Value::String(entry.property_key.clone()),
        );
    }

    let req_body_path = bound_body_rows
        .iter()
        .map(|entry| (entry.property_key.clone(), format!("$.{}", entry.api_field)))
        .collect();

    let headers = draft
        .config
        .headers
        .iter()
        .filter(|header| !header.key.is_empty())
        .map(|header| (header.key.clone(), resolve_header_value(&header.value, registry)))
        .collect();

    CanonicalFunction {
        name: draft.name.clone(),
        kind: draft.kind.map(|k| k.as_str().to_string()).unwrap_or_default(),
        config: CanonicalConfig {
            host: draft.config.host.clone(),
            path: draft.config.path.clone(),
            method: draft.config.method,
            req_body: Value::Object(req_body).to_string(),
            req_body_path,
            header_param: draft.config.header_params.clone(),
            headers,
        },
        input_properties: draft.input_properties.clone(),
        output_properties: draft.output_properties.clone(),
    }
}

/// Constants pass through; property bindings resolve to the property key,
/// falling back to the raw stored id when the property is gone.
fn resolve_header_value(value: &HeaderValue, registry: &PropertyRegistry) -> String {
    match value {
        HeaderValue::Constant(text) => text.clone(),
        HeaderValue::Property(None) => String::new(),
        HeaderValue::Property(Some(id)) => registry
            .lookup_by_id(id)
            .map(|property| property.key.clone())
            .unwrap_or_else(|| id.as_str().to_string()),
    }
}
