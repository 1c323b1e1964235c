// ==========================================
// Chor-Jahresplaner - Domänentypen
// ==========================================
// Zuständigkeit: Kategorien und Datums-/Zeitformat-Hilfen
// Format-Vertrag: Datum "YYYY-MM-DD", Uhrzeit "HH:MM" (24h)
// ==========================================

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Datumsformat des gesamten Datenaustauschs
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Uhrzeitformat des gesamten Datenaustauschs (24h, ohne Sekunden)
pub const TIME_FORMAT: &str = "%H:%M";

// ==========================================
// ItemCategory - Terminkategorie
// ==========================================
// Serialisierung: lowercase (wie im Dateiformat)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Rehearsal, // Wöchentliche Chorprobe
    Event,     // Manuell eingetragener Einzeltermin
    Birthday,  // Projizierter Geburtstag eines Mitglieds
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemCategory::Rehearsal => write!(f, "rehearsal"),
            ItemCategory::Event => write!(f, "event"),
            ItemCategory::Birthday => write!(f, "birthday"),
        }
    }
}

impl FromStr for ItemCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rehearsal" => Ok(ItemCategory::Rehearsal),
            "event" => Ok(ItemCategory::Event),
            "birthday" => Ok(ItemCategory::Birthday),
            _ => Err(()),
        }
    }
}

// ==========================================
// Parse-Hilfen (nachsichtige Randbehandlung)
// ==========================================
// Rohdaten kommen als Strings; fehlerhafte Werte ergeben None
// und werden vom Aufrufer entschieden (überspringen oder melden).

/// Kalenderdatum aus "YYYY-MM-DD" lesen
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Uhrzeit aus "HH:MM" lesen
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).ok()
}

/// Kalenderdatum als "YYYY-MM-DD" ausgeben
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Prüft das strikte Format "YYYY-MM-DD" (inkl. Kalendervalidität)
pub fn is_valid_date_str(value: &str) -> bool {
    parse_date(value).is_some()
}

/// Prüft das strikte Format "HH:MM"
pub fn is_valid_time_str(value: &str) -> bool {
    // chrono akzeptiert auch "H:M"; der Vertrag verlangt feste Breite
    if value.len() != 5 || value.as_bytes()[2] != b':' {
        return false;
    }
    parse_time(value).is_some()
}

// ==========================================
// Tests
// ==========================================
