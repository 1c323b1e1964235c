// ==========================================
// Chor-Jahresplaner - Plan-Konfiguration
// ==========================================
// Feste Größen der Generierung: Probentag, Probenzeit,
// Titel und Ort. Defaults entsprechen dem Chorbetrieb
// (dienstags 19:00-20:30, "Chorprobe").
// ==========================================

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::engine::error::{ScheduleError, ScheduleResult};

/// Plan-Konfiguration (persistierbares Objekt)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleConfig {
    /// Wochentag der Probe
    pub rehearsal_weekday: Weekday,

    /// Probenbeginn "HH:MM"
    pub rehearsal_start: String,

    /// Probenende "HH:MM"
    pub rehearsal_end: String,

    /// Titel des Probeneintrags
    pub rehearsal_title: String,

    /// Beschreibung des Probeneintrags
    pub rehearsal_description: String,

    /// Ort des Probeneintrags
    pub rehearsal_location: String,

    /// Titelpräfix für Geburtstagseinträge
    pub birthday_title_prefix: String,

    /// Beschreibung für Geburtstagseinträge
    pub birthday_description: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            rehearsal_weekday: Weekday::Tue,
            rehearsal_start: "19:00".to_string(),
            rehearsal_end: "20:30".to_string(),
            rehearsal_title: "Chorprobe".to_string(),
            rehearsal_description: "Wöchentliche Chorprobe".to_string(),
            rehearsal_location: "Gemeindehaus".to_string(),
            birthday_title_prefix: "Geburtstag".to_string(),
            birthday_description: "Alles Gute zum Geburtstag! 🎂".to_string(),
        }
    }
}

impl ScheduleConfig {
    /// Konfiguration aus einer JSON-Datei laden
    ///
    /// # Rückgabe
    /// - Ok(ScheduleConfig): Datei gelesen und geparst
    /// - Err: Lese- oder Parse-Fehler
    pub fn from_file(path: &Path) -> ScheduleResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| ScheduleError::ConfigError(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&text)
            .map_err(|e| ScheduleError::ConfigError(format!("{}: {}", path.display(), e)))
    }

    /// Konfiguration laden, bei fehlender Datei Defaults verwenden
    pub fn load_or_default(path: &Path) -> ScheduleResult<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}
