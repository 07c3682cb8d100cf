//! Response envelopes.
//!
//! Every endpoint has exactly one documented body shape. Anything else is a
//! [`PanelError::Envelope`].

use serde::de::DeserializeOwned;
use serde_json::Value as Json;

use crate::error::{PanelError, Result};

pub const REGISTRANTS_KEY: &str = "accommodations";
pub const HOSTELS_KEY: &str = "hostels";
pub const BEDS_KEY: &str = "beds";
pub const LOGS_KEY: &str = "logs";
pub const INSIDE_CAMPUS_KEY: &str = "inside_campus_summary";
pub const LIVE_BEDS_KEY: &str = "live_beds_summary";

fn envelope_error(endpoint: &str, message: impl Into<String>) -> PanelError {
    PanelError::Envelope {
        endpoint: endpoint.to_string(),
        message: message.into(),
    }
}

fn field(endpoint: &str, key: &str, body: &str) -> Result<Json> {
    let root: Json = serde_json::from_str(body)
        .map_err(|e| envelope_error(endpoint, format!("invalid JSON: {e}")))?;
    match root {
        Json::Object(mut map) => map
            .remove(key)
            .ok_or_else(|| envelope_error(endpoint, format!("missing `{key}`"))),
        _ => Err(envelope_error(endpoint, "expected a JSON object")),
    }
}

/// Extracts `{"<key>": [...]}`.
pub fn unwrap_list<T: DeserializeOwned>(endpoint: &str, key: &str, body: &str) -> Result<Vec<T>> {
    let value = field(endpoint, key, body)?;
    if !value.is_array() {
        return Err(envelope_error(endpoint, format!("`{key}` is not an array")));
    }
    serde_json::from_value(value)
        .map_err(|e| envelope_error(endpoint, format!("bad `{key}` entry: {e}")))
}

/// Extracts `{"<key>": {...}}`.
pub fn unwrap_object<T: DeserializeOwned>(endpoint: &str, key: &str, body: &str) -> Result<T> {
    let value = field(endpoint, key, body)?;
    if !value.is_object() {
        return Err(envelope_error(endpoint, format!("`{key}` is not an object")));
    }
    serde_json::from_value(value).map_err(|e| envelope_error(endpoint, format!("bad `{key}`: {e}")))
}

/// Parses a bare (unwrapped) body.
pub fn parse<T: DeserializeOwned>(endpoint: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| envelope_error(endpoint, e.to_string()))
}
