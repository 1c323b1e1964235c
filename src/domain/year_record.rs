// ==========================================
// Chor-Jahresplaner - Jahres-Rohdaten
// ==========================================
// Kanonische Dateiform:
//   { "events": [...], "exceptionalDates": [...],
//     "exceptionalTimespans": [{ "start", "end" }] }
// Fehlende Felder werden genau einmal, an dieser
// Konstruktionsgrenze, zu leeren Folgen normalisiert.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::event::RawEvent;
use crate::domain::types::parse_date;

// ==========================================
// ExceptionRange - Ausnahmezeitraum (inklusiv)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionRange {
    pub start: String, // "YYYY-MM-DD", einschließlich
    pub end: String,   // "YYYY-MM-DD", einschließlich
}

impl ExceptionRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Beide Endpunkte als Kalenderdaten, None bei unlesbaren Strings
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((parse_date(&self.start)?, parse_date(&self.end)?))
    }
}

// ==========================================
// RawYearData - Dateiform der Jahresdaten
// ==========================================
// Alle Folgen defaulten auf leer, damit auch knappe
// Dateien (z. B. nur "events") einlesbar bleiben.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawYearData {
    #[serde(default)]
    pub events: Vec<RawEvent>,
    #[serde(default, rename = "exceptionalDates")]
    pub exceptional_dates: Vec<String>,
    #[serde(default, rename = "exceptionalTimespans")]
    pub exceptional_timespans: Vec<ExceptionRange>,
}

// ==========================================
// RawYearRecord - Jahresdatensatz
// ==========================================
// Unveränderliches Wertobjekt; das Jahr kommt aus dem
// Dateischlüssel (Dateiname), nicht aus dem Dateiinhalt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawYearRecord {
    pub year: i32,                          // Kalenderjahr des Datensatzes
    pub events: Vec<RawEvent>,              // Einzeltermine
    pub exception_dates: Vec<String>,       // Einzelne Ausnahmetage
    pub exception_ranges: Vec<ExceptionRange>, // Ausnahmezeiträume
}

impl RawYearRecord {
    /// Datensatz aus der Dateiform konstruieren
    pub fn new(year: i32, data: RawYearData) -> Self {
        Self {
            year,
            events: data.events,
            exception_dates: data.exceptional_dates,
            exception_ranges: data.exceptional_timespans,
        }
    }

    /// Leerer Datensatz für ein Jahr
    pub fn empty(year: i32) -> Self {
        Self::new(year, RawYearData::default())
    }
}
