//! StatsBomb-style JSON events.
//!
//! A source is one JSON array of event objects. Labels live under
//! `<descriptor>.name` (`type`, `team`, `player`), the pitch location is a
//! two-element `location` array, and category details hang off keys such as
//! `pass` or `shot`.

use serde_json::{Map, Value};

use super::{render_description, MissingField, SourceAdapter, SourceFormat, DETAIL_FIELDS};

/// One decoded event object, in document key order.
pub type JsonRecord = Map<String, Value>;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEventAdapter;

impl JsonEventAdapter {
    pub fn new() -> Self {
        Self
    }
}

fn required_label(
    record: &JsonRecord,
    descriptor: &'static str,
    path: &'static str,
) -> Result<String, MissingField> {
    let value = record.get(descriptor).ok_or(MissingField(descriptor))?;
    value.get("name").and_then(Value::as_str).map(str::to_owned).ok_or(MissingField(path))
}

fn detail_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl SourceAdapter for JsonEventAdapter {
    type Record = JsonRecord;

    fn format(&self) -> SourceFormat {
        SourceFormat::Json
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<JsonRecord>, String> {
        serde_json::from_slice(bytes).map_err(|e| e.to_string())
    }

    fn extract_player(&self, record: &JsonRecord) -> Option<String> {
        record
            .get("player")
            .and_then(|player| player.get("name"))
            .and_then(Value::as_str)
            .map(str::to_owned)
    }

    fn extract_description(&self, record: &JsonRecord) -> String {
        let mut details: Vec<(String, String)> = Vec::new();

        for field in DETAIL_FIELDS {
            let Some(Value::Object(entries)) = record.get(field) else {
                continue;
            };
            for (key, value) in entries {
                let Some(name) = value.get("name") else {
                    continue;
                };
                let name = detail_text(name);
                // a key seen under an earlier category keeps its slot
                match details.iter_mut().find(|(seen, _)| seen == key) {
                    Some(slot) => slot.1 = name,
                    None => details.push((key.clone(), name)),
                }
            }
        }

        render_description(&details)
    }

    fn extract_location(&self, record: &JsonRecord) -> (Option<f64>, Option<f64>) {
        let Some(location) = record.get("location") else {
            return (None, None);
        };
        if let Some([x, y]) = location.as_array().map(Vec::as_slice) {
            if let (Some(x), Some(y)) = (x.as_f64(), y.as_f64()) {
                return (Some(x), Some(y));
            }
        }
        tracing::warn!("Ignoring location {} (expected two numbers)", location);
        (None, None)
    }

    fn extract_timestamp(&self, record: &JsonRecord) -> Result<String, MissingField> {
        record
            .get("timestamp")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or(MissingField("timestamp"))
    }

    fn extract_event_type(&self, record: &JsonRecord) -> Result<String, MissingField> {
        required_label(record, "type", "type.name")
    }

    fn extract_team(&self, record: &JsonRecord) -> Result<String, MissingField> {
        required_label(record, "team", "team.name")
    }
}
