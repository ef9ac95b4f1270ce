use crate::property::{PropertyId, PropertyType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Stable identity of a committed function within its journey.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FunctionId(String);

impl FunctionId {
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

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Local identity of a request-body entry.
///
/// Exists only so individual rows can be addressed while editing; it is
/// never persisted and is regenerated whenever a function is loaded into a
/// draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EntryId(String);

impl EntryId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The kind of external call a function performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FunctionType {
    Api,
    Kafka,
}

impl FunctionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionType::Api => "API",
            FunctionType::Kafka => "KAFKA",
        }
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP method of the outgoing call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminant of a header's value mode, as shown in the editor dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderKind {
    Constant,
    Property,
}

/// The value side of a header entry.
///
/// A constant carries literal text; a property binding carries the id of a
/// registry property (`None` until the user has picked one). The two modes
/// are distinct variants so a stale constant string can never be misread as
/// a property id, or vice versa.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    Constant(String),
    Property(Option<PropertyId>),
}

impl HeaderValue {
    pub fn kind(&self) -> HeaderKind {
        match self {
            HeaderValue::Constant(_) => HeaderKind::Constant,
            HeaderValue::Property(_) => HeaderKind::Property,
        }
    }

    /// The property id this value is bound to, if any.
    pub fn property_id(&self) -> Option<&PropertyId> {
        match self {
            HeaderValue::Property(id) => id.as_ref(),
            HeaderValue::Constant(_) => None,
        }
    }
}

/// One row of the header editor. Order is display-significant only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawHeaderEntry", into = "RawHeaderEntry")]
pub struct HeaderEntry {
    pub key: String,
    pub value: HeaderValue,
}

impl HeaderEntry {
    /// A fresh empty row, as appended by the "+ Add Header" action.
    pub fn empty() -> Self {
        Self {
            key: String::new(),
            value: HeaderValue::Constant(String::new()),
        }
    }
}

/// Wire shape of a header entry: `{key, type, value}` with a single value
/// column shared between the two modes, as the journey format persists it.
#[derive(Serialize, Deserialize)]
struct RawHeaderEntry {
    key: String,
    #[serde(rename = "type")]
    kind: HeaderKind,
    #[serde(default)]
    value: Option<String>,
}

impl From<RawHeaderEntry> for HeaderEntry {
    fn from(raw: RawHeaderEntry) -> Self {
        let value = match raw.kind {
            HeaderKind::Constant => HeaderValue::Constant(raw.value.unwrap_or_default()),
            HeaderKind::Property => {
                HeaderValue::Property(raw.value.filter(|id| !id.is_empty()).map(PropertyId::new))
            }
        };
        Self {
            key: raw.key,
            value,
        }
    }
}

impl From<HeaderEntry> for RawHeaderEntry {
    fn from(entry: HeaderEntry) -> Self {
        let (kind, value) = match entry.value {
            HeaderValue::Constant(text) => (HeaderKind::Constant, Some(text)),
            HeaderValue::Property(id) => (
                HeaderKind::Property,
                Some(id.map(|id| id.as_str().to_string()).unwrap_or_default()),
            ),
        };
        Self {
            key: entry.key,
            kind,
            value,
        }
    }
}

/// One row of the request-body editor: outgoing API field `api_field` is
/// populated from the journey property named `property_key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBodyEntry {
    #[serde(skip)]
    pub id: EntryId,
    #[serde(rename = "apiField")]
    pub api_field: String,
    #[serde(rename = "property")]
    pub property_key: String,
}

impl RequestBodyEntry {
    pub fn empty() -> Self {
        Self {
            id: EntryId::generate(),
            api_field: String::new(),
            property_key: String::new(),
        }
    }
}

/// The structural call configuration of a function.
///
/// `header_params` is derived from the property-bound headers and
/// `request_body_path` is regenerated at canonicalization time; both are
/// kept here because committed functions persist them. Field names mirror
/// the persisted journey format, which mixes naming styles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionConfig {
    pub host: String,
    pub path: String,
    pub method: Method,
    #[serde(default)]
    pub header_params: BTreeMap<String, PropertyType>,
    #[serde(default)]
    pub headers: Vec<HeaderEntry>,
    #[serde(rename = "requestBody", default)]
    pub request_body: Vec<RequestBodyEntry>,
    #[serde(rename = "requestBodyPath", default)]
    pub request_body_path: BTreeMap<String, String>,
}

/// The in-progress, uncommitted edit state of a function.
///
/// `input_properties` is never authored directly: it is recomputed from the
/// header and request-body references after every structural mutation.
/// `output_properties` is declared by the user and carries no registry
/// invariant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionDraft {
    pub name: String,
    pub kind: Option<FunctionType>,
    pub config: FunctionConfig,
    pub input_properties: BTreeMap<String, PropertyType>,
    pub output_properties: BTreeMap<String, PropertyType>,
}

/// A committed, reusable external call definition owned by a journey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub id: FunctionId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FunctionType,
    pub config: FunctionConfig,
    #[serde(default)]
    pub input_properties: BTreeMap<String, PropertyType>,
    #[serde(default)]
    pub output_properties: BTreeMap<String, PropertyType>,
}

/// The one-line digest the function list renders per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSummary {
    pub name: String,
    pub kind: FunctionType,
    pub method: Method,
    pub endpoint: String,
    pub header_count: usize,
    pub input_count: usize,
    pub output_count: usize,
}

impl Function {
    pub fn summary(&self) -> FunctionSummary {
        FunctionSummary {
            name: self.name.clone(),
            kind: self.kind,
            method: self.config.method,
            endpoint: format!("{}{}", self.config.host, self.config.path),
            header_count: self.config.headers.len(),
            input_count: self.input_properties.len(),
            output_count: self.output_properties.len(),
        }
    }
}

impl fmt::Display for FunctionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} {} (headers: {}, inputs: {}, outputs: {})",
            self.name,
            self.kind,
            self.method,
            self.endpoint,
            self.header_count,
            self.input_count,
            self.output_count
        )
    }
}
