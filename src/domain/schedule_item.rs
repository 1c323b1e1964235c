// ==========================================
// Chor-Jahresplaner - Terminplan-Eintrag
// ==========================================
// Der Ausgabetyp der Plan-Generierung. Einträge sind
// Wertobjekte und gehören nach Rückgabe dem Aufrufer.
// ==========================================

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::types::ItemCategory;

// ==========================================
// ScheduleItem - Kalendereintrag
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub id: String,                 // eindeutig innerhalb eines Plans
    pub title: String,              // Anzeigetitel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub date: String,               // "YYYY-MM-DD"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>, // "HH:MM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,   // "HH:MM"
    pub category: ItemCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_name: Option<String>, // nur bei category == birthday
}

impl ScheduleItem {
    /// Chronologische Ordnung: Datum aufsteigend, bei gleichem Datum
    /// Startzeit lexikografisch ("HH:MM" ist dafür korrekt).
    ///
    /// Einträge ohne vergleichbare Startzeit bleiben untereinander in
    /// Eingangsreihenfolge (stabile Sortierung vorausgesetzt).
    pub fn chronological(a: &ScheduleItem, b: &ScheduleItem) -> Ordering {
        a.date.cmp(&b.date).then_with(|| match (&a.start_time, &b.start_time) {
            (Some(x), Some(y)) => x.cmp(y),
            _ => Ordering::Equal,
        })
    }
}
