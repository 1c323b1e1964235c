// ==========================================
// Chor-Jahresplaner - Engine-Fehlertypen
// ==========================================
// Werkzeug: thiserror-Ableitungsmakro
// ==========================================

use thiserror::Error;

use crate::repository::error::RepositoryError;

/// Fehlertyp der Plan-Generierung
#[derive(Error, Debug)]
pub enum ScheduleError {
    // ===== Vorbedingungen =====
    #[error("Ungültiges Zieljahr: {0}")]
    InvalidYear(i32),

    // ===== Konfiguration =====
    #[error("Konfiguration unlesbar: {0}")]
    ConfigError(String),

    // ===== Mitarbeitergrenze (Storage) =====
    // Fehler der Datenlieferanten werden unverändert durchgereicht;
    // Wiederholungs-/Ausweichstrategie liegt beim Aufrufer.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result-Alias der Engine-Schicht
pub type ScheduleResult<T> = Result<T, ScheduleError>;
