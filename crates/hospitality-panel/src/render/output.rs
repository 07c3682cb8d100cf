//! Output mode control and structured serialization.
//!
//! Structured modes (JSON, YAML, CSV) serialize the view directly and skip
//! templates entirely.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use serde_json::Value as Json;

use crate::error::{PanelError, Result};

/// Controls how output is rendered (the `--output` flag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputMode {
    /// Terminal styling on a TTY, plain text otherwise
    #[default]
    Auto,
    /// Always use terminal styling
    Term,
    /// Plain text
    Text,
    Json,
    Yaml,
    /// Flattened page items
    Csv,
}

impl OutputMode {
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json | OutputMode::Yaml | OutputMode::Csv)
    }

    /// Resolves `Auto` to `Term` or `Text` from stdout TTY detection.
    pub fn resolve_auto(&self) -> OutputMode {
        match self {
            OutputMode::Auto => {
                if console::Term::stdout().is_term() {
                    OutputMode::Term
                } else {
                    OutputMode::Text
                }
            }
            other => *other,
        }
    }

    /// `true` when text output should carry ANSI styles.
    pub fn is_styled(&self) -> bool {
        matches!(self.resolve_auto(), OutputMode::Term)
    }
}

/// Serializes `data` for a structured mode.
pub fn serialize_structured<T: Serialize + ?Sized>(data: &T, mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputMode::Yaml => Ok(serde_yaml::to_string(data)?),
        OutputMode::Csv => serialize_csv(data),
        other => Err(PanelError::Render(format!("{other:?} is not a structured output mode"))),
    }
}

/// Serializes to CSV.
///
/// A view with an `items` array exports one line per item; anything else is a
/// single line. Nested objects flatten to dotted keys.
pub fn serialize_csv<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    let value = serde_json::to_value(data)?;
    let rows = match &value {
        Json::Object(map) => match map.get("items") {
            Some(Json::Array(items)) => items.iter().collect(),
            _ => vec![&value],
        },
        Json::Array(items) => items.iter().collect(),
        _ => vec![&value],
    };
    let (headers, data) = flatten_for_csv(&rows);

    let mut wtr = csv::Writer::from_writer(Vec::new());
    let csv_err = |e: csv::Error| PanelError::Render(format!("CSV serialization failed: {e}"));
    if !headers.is_empty() {
        wtr.write_record(&headers).map_err(csv_err)?;
    }
    for row in data {
        wtr.write_record(&row).map_err(csv_err)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| PanelError::Render(format!("CSV serialization failed: {e}")))?;
    String::from_utf8(bytes).map_err(|e| PanelError::Render(e.to_string()))
}

fn flatten_for_csv(rows: &[&Json]) -> (Vec<String>, Vec<Vec<String>>) {
    let flat: Vec<BTreeMap<String, String>> = rows
        .iter()
        .map(|row| {
            let mut acc = BTreeMap::new();
            flatten_recursive(row, "", &mut acc);
            acc
        })
        .collect();

    let headers: Vec<String> = flat
        .iter()
        .flat_map(|row| row.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let data = flat
        .into_iter()
        .map(|row| {
            headers
                .iter()
                .map(|h| row.get(h).cloned().unwrap_or_default())
                .collect()
        })
        .collect();
    (headers, data)
}

fn flatten_recursive(value: &Json, prefix: &str, acc: &mut BTreeMap<String, String>) {
    let key = if prefix.is_empty() { "value" } else { prefix };
    match value {
        Json::Null => {}
        Json::String(s) => {
            acc.insert(key.to_string(), s.clone());
        }
        Json::Bool(_) | Json::Number(_) | Json::Array(_) => {
            acc.insert(key.to_string(), value.to_string());
        }
        Json::Object(map) => {
            for (k, v) in map {
                let nested = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten_recursive(v, &nested, acc);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn explicit_modes_do_not_resolve() {
        assert_eq!(OutputMode::Json.resolve_auto(), OutputMode::Json);
        assert_eq!(OutputMode::Text.resolve_auto(), OutputMode::Text);
        assert!(OutputMode::Term.is_styled());
        assert!(!OutputMode::Text.is_styled());
        assert!(OutputMode::Csv.is_structured());
        assert!(!OutputMode::Auto.is_structured());
    }

    #[test]
    fn json_and_yaml() {
        let data = json!({"title": "Hostels", "total_count": 2});
        let out = serialize_structured(&data, OutputMode::Json).unwrap();
        assert!(out.contains("\"total_count\": 2"));
        let out = serialize_structured(&data, OutputMode::Yaml).unwrap();
        assert!(out.contains("title: Hostels"));
        assert!(serialize_structured(&data, OutputMode::Term).is_err());
    }

    #[test]
    fn csv_exports_items() {
        let view = json!({
            "title": "Allotments",
            "total_count": 2,
            "items": [
                {"id": "b1", "student_name": "Asha", "meta": {"floor": 2}},
                {"id": "b2", "student_name": "Ravi, K", "extra": true}
            ]
        });
        let out = serialize_csv(&view).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "extra,id,meta.floor,student_name");
        assert_eq!(lines[1], ",b1,2,Asha");
        assert_eq!(lines[2], "true,b2,,\"Ravi, K\"");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn csv_single_object() {
        let out = serialize_csv(&json!({"name": "Warden", "email": "w@example.com"})).unwrap();
        assert_eq!(out, "email,name\nw@example.com,Warden\n");
    }
}
