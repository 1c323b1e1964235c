// ==========================================
// Chor-Jahresplaner - Jahresdaten-Store
// ==========================================
// Vertrag: fetch_raw_year_record(jahr) liefert Ok(None),
// wenn für das Jahr keine Daten existieren; echte
// I/O-/Parse-Fehler werden als Err gemeldet und von der
// Engine nicht abgefangen.
// ==========================================
// Ablageform: eine JSON-Datei pro Jahr (<datenordner>/<jahr>.json),
// Dateiinhalt in der kanonischen Jahresform.
// ==========================================

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::year_record::{RawYearData, RawYearRecord};
use crate::repository::error::{RepositoryError, RepositoryResult};

// ==========================================
// YearRecordStore - Trait
// ==========================================

/// Lieferant der Jahres-Rohdaten
#[async_trait]
pub trait YearRecordStore: Send + Sync {
    /// Jahresdatensatz abrufen
    ///
    /// # Rückgabe
    /// - Ok(Some(RawYearRecord)): Datensatz vorhanden
    /// - Ok(None): kein Datensatz für dieses Jahr (kein Fehler)
    /// - Err: echter I/O- oder Parse-Fehler
    async fn fetch_raw_year_record(&self, year: i32) -> RepositoryResult<Option<RawYearRecord>>;
}

// ==========================================
// JsonYearStore - Datei-pro-Jahr-Implementierung
// ==========================================

/// Jahresdaten-Store über JSON-Dateien
pub struct JsonYearStore {
    data_dir: PathBuf, // Ordner mit <jahr>.json
}

impl JsonYearStore {
    /// Store über einem Datenordner anlegen
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Dateipfad für ein Jahr
    pub fn path_for_year(&self, year: i32) -> PathBuf {
        self.data_dir.join(format!("{}.json", year))
    }

    /// Jahresdatensatz in die Ablage schreiben (Datenpflege/Export)
    pub async fn write_year_record(&self, record: &RawYearRecord) -> RepositoryResult<()> {
        let data = RawYearData {
            events: record.events.clone(),
            exceptional_dates: record.exception_dates.clone(),
            exceptional_timespans: record.exception_ranges.clone(),
        };
        let path = self.path_for_year(record.year);
        let text = serde_json::to_string_pretty(&data)
            .map_err(|e| json_error(&path, e.to_string()))?;
        fs::write(&path, text)
            .await
            .map_err(|e| read_error(&path, e.to_string()))?;
        debug!(jahr = record.year, pfad = %path.display(), "Jahresdatei geschrieben");
        Ok(())
    }
}

#[async_trait]
impl YearRecordStore for JsonYearStore {
    async fn fetch_raw_year_record(&self, year: i32) -> RepositoryResult<Option<RawYearRecord>> {
        let path = self.path_for_year(year);

        // Fehlende Datei ist der definierte Nicht-vorhanden-Fall
        if !path.exists() {
            debug!(jahr = year, "Keine Jahresdatei vorhanden");
            return Ok(None);
        }

        let text = fs::read_to_string(&path)
            .await
            .map_err(|e| read_error(&path, e.to_string()))?;
        let data: RawYearData =
            serde_json::from_str(&text).map_err(|e| json_error(&path, e.to_string()))?;

        debug!(
            jahr = year,
            ereignisse = data.events.len(),
            ausnahmetage = data.exceptional_dates.len(),
            zeitspannen = data.exceptional_timespans.len(),
            "Jahresdatei gelesen"
        );
        Ok(Some(RawYearRecord::new(year, data)))
    }
}

fn read_error(path: &Path, message: String) -> RepositoryError {
    RepositoryError::FileReadError {
        path: path.display().to_string(),
        message,
    }
}

fn json_error(path: &Path, message: String) -> RepositoryError {
    RepositoryError::JsonParseError {
        path: path.display().to_string(),
        message,
    }
}
