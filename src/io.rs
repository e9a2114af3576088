//! Participant list import and export.
//!
//! Two payload shapes are accepted, matching what event tools commonly
//! emit: a bare array of records, or an envelope object
//! `{"meta": {…}, "participants": […]}`. Records are normalized on the
//! way in (see [`crate::normalize`]); export always writes the envelope
//! form.
//!
//! This is the validation layer: shape problems are reported here so the
//! layout core downstream never has to fail.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::LanyardError;
use crate::model::Participant;
use crate::normalize::normalize_list;

/// The outcome of a participant import.
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    pub participants: Vec<Participant>,
    /// Envelope metadata, when the payload carried any.
    pub meta: Map<String, Value>,
}

/// Parse a participant payload (bare array or envelope) and normalize
/// every record.
pub fn import_participants(json: &str) -> Result<ImportResult, LanyardError> {
    let parsed: Value = serde_json::from_str(json)?;
    match parsed {
        Value::Array(items) => Ok(ImportResult {
            participants: normalize_list(&as_records(items)?),
            meta: Map::new(),
        }),
        Value::Object(mut envelope) => {
            let items = match envelope.remove("participants") {
                Some(Value::Array(items)) => items,
                Some(_) => {
                    return Err(LanyardError::Import(
                        "`participants` must be an array of records".to_string(),
                    ))
                }
                None => {
                    return Err(LanyardError::Import(
                        "expected an array of participants or an object with a `participants` array"
                            .to_string(),
                    ))
                }
            };
            let meta = match envelope.remove("meta") {
                Some(Value::Object(meta)) => meta,
                _ => Map::new(),
            };
            Ok(ImportResult {
                participants: normalize_list(&as_records(items)?),
                meta,
            })
        }
        _ => Err(LanyardError::Import(
            "expected an array of participants or an object with a `participants` array".to_string(),
        )),
    }
}

/// Serialize participants to the envelope form, pretty printed.
pub fn export_participants(
    participants: &[Participant],
    meta: &Map<String, Value>,
) -> Result<String, LanyardError> {
    #[derive(Serialize)]
    struct Envelope<'a> {
        meta: &'a Map<String, Value>,
        participants: &'a [Participant],
    }
    Ok(serde_json::to_string_pretty(&Envelope {
        meta,
        participants,
    })?)
}

fn as_records(items: Vec<Value>) -> Result<Vec<Map<String, Value>>, LanyardError> {
    items
        .into_iter()
        .map(|item| match item {
            Value::Object(map) => Ok(map),
            other => Err(LanyardError::Import(format!(
                "participant records must be objects, found {}",
                value_kind(&other)
            ))),
        })
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imports_bare_array() {
        let result = import_participants(
            r#"[{"name": "Ada Lovelace", "role": "Engineer"}, {"name": "Grace Hopper"}]"#,
        )
        .unwrap();
        assert_eq!(result.participants.len(), 2);
        assert_eq!(result.participants[0].display_name.as_deref(), Some("Ada Lovelace"));
        assert!(result.meta.is_empty());
    }

    #[test]
    fn imports_envelope_with_meta() {
        let result = import_participants(
            r#"{"meta": {"event": "RustConf"}, "participants": [{"name": "Ada"}]}"#,
        )
        .unwrap();
        assert_eq!(result.participants.len(), 1);
        assert_eq!(
            result.meta.get("event"),
            Some(&Value::String("RustConf".to_string()))
        );
    }

    #[test]
    fn rejects_wrong_shapes() {
        assert!(matches!(
            import_participants("42"),
            Err(LanyardError::Import(_))
        ));
        assert!(matches!(
            import_participants(r#"{"participants": "nope"}"#),
            Err(LanyardError::Import(_))
        ));
        assert!(matches!(
            import_participants(r#"[1, 2]"#),
            Err(LanyardError::Import(_))
        ));
        assert!(matches!(
            import_participants("{not json"),
            Err(LanyardError::Parse { .. })
        ));
    }

    #[test]
    fn export_import_round_trip() {
        let imported = import_participants(
            r#"[{"id": "p1", "name": "Ada", "company": "AEL"}, {"id": "p2", "name": "Grace"}]"#,
        )
        .unwrap();
        let json = export_participants(&imported.participants, &imported.meta).unwrap();
        let back = import_participants(&json).unwrap();
        assert_eq!(back.participants, imported.participants);
    }
}
