// ==========================================
// Chor-Jahresplaner - Storage-Fehlertypen
// ==========================================
// Werkzeug: thiserror-Ableitungsmakro
// Vertrag: "kein Datensatz vorhanden" ist KEIN Fehler,
// sondern Ok(None) an der Trait-Grenze.
// ==========================================

use thiserror::Error;

/// Fehlertyp der Storage-Schicht
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== Dateifehler =====
    #[error("Datei unlesbar ({path}): {message}")]
    FileReadError { path: String, message: String },

    #[error("JSON-Parsing fehlgeschlagen ({path}): {message}")]
    JsonParseError { path: String, message: String },

    #[error("CSV-Parsing fehlgeschlagen ({path}): {message}")]
    CsvParseError { path: String, message: String },

    // ===== Datenqualität =====
    #[error("Feldwert fehlerhaft (Feld {field}): {message}")]
    FieldValueError { field: String, message: String },

    // ===== Allgemein =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result-Alias der Storage-Schicht
pub type RepositoryResult<T> = Result<T, RepositoryError>;
