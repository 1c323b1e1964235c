// ==========================================
// Chor-Jahresplaner - Roh-Ereignis
// ==========================================
// Ein manuell eingetragener Einzeltermin, wie er in der
// Jahresdatei steht. Optionale Felder bleiben hier roh;
// die Anreicherung mit Defaults geschieht im Assembler.
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// RawEvent - Ereigniseintrag der Jahresdatei
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>, // extern vergebene ID (optional)
    pub title: String,        // Anzeigetitel
    pub date: String,         // "YYYY-MM-DD"
    pub start_time: String,   // "HH:MM"
    pub end_time: String,     // "HH:MM"
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>, // Kategorie-String, Default "event"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl RawEvent {
    /// Eintrags-ID, ersatzweise aus der Listenposition abgeleitet
    pub fn id_or_index(&self, index: usize) -> String {
        match &self.id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => format!("e-{}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_event() {
        let json = r#"{
            "title": "Sommerkonzert",
            "date": "2025-06-28",
            "startTime": "18:00",
            "endTime": "21:00"
        }"#;
        let event: RawEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.title, "Sommerkonzert");
        assert_eq!(event.event_type, None);
        assert_eq!(event.id_or_index(3), "e-3");
    }

    #[test]
    fn test_type_field_rename() {
        let json = r#"{
            "id": "k1",
            "title": "Konzert",
            "date": "2025-06-28",
            "startTime": "18:00",
            "endTime": "21:00",
            "type": "event"
        }"#;
        let event: RawEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.event_type.as_deref(), Some("event"));
        assert_eq!(event.id_or_index(0), "k1");
    }
}
