//! Request payload types for the mutating endpoints.
//!
//! # Design
//! Only payloads with omission rules get a named struct; single-field
//! bodies are assembled inline with `serde_json::json!` at the call site.
//! Optional fields use `skip_serializing_if` so an absent value never
//! reaches the wire as `null` — the key is simply not sent.

use serde::{Deserialize, Serialize};

/// Payload for creating a scalet.
///
/// `new` fills the documented defaults; callers override fields before
/// passing the value to `build_create_server`. `password` is dropped from
/// the body when unset *or* empty — the remote API treats an empty
/// password as malformed, so it is never sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerCreate {
    pub make_from: String,
    pub rplan: String,
    pub do_start: bool,
    pub name: String,
    pub location: String,
    #[serde(skip_serializing_if = "none_or_empty")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<String>>,
}

impl ServerCreate {
    pub fn new(name: &str) -> Self {
        Self {
            make_from: "ubuntu_14.04_64_002_master".to_string(),
            rplan: "medium".to_string(),
            do_start: false,
            name: name.to_string(),
            location: "spb0".to_string(),
            password: None,
            keys: None,
        }
    }
}

/// Payload shared by add-tag and update-tag.
///
/// When `scalets` is unset the body contains only `name`; when set, the
/// list is serialized in the order supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scalets: Option<Vec<u64>>,
}

fn none_or_empty(value: &Option<String>) -> bool {
    match value {
        None => true,
        Some(s) => s.is_empty(),
    }
}
