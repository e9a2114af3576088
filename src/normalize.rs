//! Participant record normalization.
//!
//! Imported records arrive with whatever header spellings the source file
//! used — `First Name`, `first_name`, `organisation`, `qrcode`. A fixed
//! alias table folds those onto the canonical participant fields; values
//! are trimmed and stringified; every participant leaves here with a
//! display name and an id.

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::model::Participant;

/// Normalize one raw imported record.
///
/// Keys are matched case-insensitively after trimming. Unrecognized keys
/// survive in `extra` under their lowercased spelling.
pub fn normalize_participant(raw: &Map<String, Value>) -> Participant {
    let mut participant = Participant::default();

    for (key, value) in raw {
        let text = clean_value(value);
        match key.trim().to_lowercase().as_str() {
            "id" => participant.id = text,
            "firstname" | "first name" | "first_name" => participant.first_name = Some(text),
            "lastname" | "last name" | "last_name" => participant.last_name = Some(text),
            "displayname" | "display name" | "fullname" | "name" => {
                participant.display_name = Some(text)
            }
            "role" => participant.role = Some(text),
            "company" | "organization" | "organisation" => participant.company = Some(text),
            "title" | "jobtitle" => participant.title = Some(text),
            "email" | "mail" => participant.email = Some(text),
            "qr" | "qrcode" | "qrvalue" => participant.qr_value = Some(text),
            "country" => participant.country = Some(text),
            "city" => participant.city = Some(text),
            "phone" => participant.phone = Some(text),
            "badge" | "badgetype" => participant.badge_type = Some(text),
            "note" => participant.note = Some(text),
            "eventname" => participant.event_name = Some(text),
            "eventdate" | "event_date" => participant.event_date = Some(text),
            "eventlocation" => participant.event_location = Some(text),
            "eventlogo" => participant.event_logo = Some(text),
            "sponsorlogo" => participant.sponsor_logo = Some(text),
            other => {
                participant
                    .extra
                    .insert(other.to_string(), Value::String(text));
            }
        }
    }

    if participant
        .display_name
        .as_deref()
        .is_none_or(|name| name.is_empty())
    {
        participant.display_name = Some(fallback_display_name(&participant));
    }
    if participant.id.is_empty() {
        participant.id = Uuid::new_v4().to_string();
    }

    participant
}

/// Normalize a whole imported list, preserving order.
pub fn normalize_list(raw: &[Map<String, Value>]) -> Vec<Participant> {
    raw.iter().map(normalize_participant).collect()
}

/// Fallback chain for the badge's display name:
/// "first last" → company → email → "Guest".
fn fallback_display_name(participant: &Participant) -> String {
    let full_name = [
        participant.first_name.as_deref(),
        participant.last_name.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ");

    if !full_name.is_empty() {
        return full_name;
    }
    for candidate in [&participant.company, &participant.email] {
        if let Some(value) = candidate.as_deref() {
            if !value.is_empty() {
                return value.to_string();
            }
        }
    }
    "Guest".to_string()
}

/// Trim and stringify an imported value. Null becomes the empty string;
/// arrays join their cleaned elements with commas.
fn clean_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(clean_value)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn aliases_fold_onto_canonical_fields() {
        let raw = record(json!({
            "First Name": "  Ada ",
            "last_name": "Lovelace",
            "Organisation": "Analytical Engines Ltd",
            "qrcode": "https://example.org/ada",
            "jobtitle": "Engineer"
        }));
        let participant = normalize_participant(&raw);
        assert_eq!(participant.first_name.as_deref(), Some("Ada"));
        assert_eq!(participant.last_name.as_deref(), Some("Lovelace"));
        assert_eq!(participant.company.as_deref(), Some("Analytical Engines Ltd"));
        assert_eq!(participant.qr_value.as_deref(), Some("https://example.org/ada"));
        assert_eq!(participant.title.as_deref(), Some("Engineer"));
    }

    #[test]
    fn display_name_falls_back_to_full_name() {
        let raw = record(json!({"firstname": "Ada", "lastname": "Lovelace"}));
        let participant = normalize_participant(&raw);
        assert_eq!(participant.display_name.as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn display_name_falls_back_through_company_and_email() {
        let company_only = normalize_participant(&record(json!({"company": "Acme"})));
        assert_eq!(company_only.display_name.as_deref(), Some("Acme"));

        let email_only = normalize_participant(&record(json!({"email": "x@example.org"})));
        assert_eq!(email_only.display_name.as_deref(), Some("x@example.org"));

        let nothing = normalize_participant(&record(json!({})));
        assert_eq!(nothing.display_name.as_deref(), Some("Guest"));
    }

    #[test]
    fn explicit_display_name_wins() {
        let raw = record(json!({"name": "The Countess", "firstname": "Ada"}));
        let participant = normalize_participant(&raw);
        assert_eq!(participant.display_name.as_deref(), Some("The Countess"));
    }

    #[test]
    fn missing_id_is_minted() {
        let participant = normalize_participant(&record(json!({"name": "Ada"})));
        assert!(!participant.id.is_empty());

        let kept = normalize_participant(&record(json!({"id": "p-1", "name": "Ada"})));
        assert_eq!(kept.id, "p-1");
    }

    #[test]
    fn minted_ids_are_distinct() {
        let a = normalize_participant(&record(json!({"name": "A"})));
        let b = normalize_participant(&record(json!({"name": "B"})));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn values_are_cleaned() {
        let raw = record(json!({
            "name": "Ada",
            "table": 7,
            "vip": true,
            "sponsorlogo": ["a.svg", "b.svg"],
            "blank": null
        }));
        let participant = normalize_participant(&raw);
        assert_eq!(participant.sponsor_logo.as_deref(), Some("a.svg,b.svg"));
        assert_eq!(
            participant.extra.get("table"),
            Some(&Value::String("7".to_string()))
        );
        assert_eq!(
            participant.extra.get("vip"),
            Some(&Value::String("true".to_string()))
        );
        assert_eq!(
            participant.extra.get("blank"),
            Some(&Value::String(String::new()))
        );
    }

    #[test]
    fn list_order_is_preserved() {
        let raw: Vec<Map<String, Value>> = (0..5)
            .map(|i| record(json!({"id": format!("p{i}"), "name": format!("P {i}")})))
            .collect();
        let normalized = normalize_list(&raw);
        let ids: Vec<&str> = normalized.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p0", "p1", "p2", "p3", "p4"]);
    }
}
