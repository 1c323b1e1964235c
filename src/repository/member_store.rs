// ==========================================
// Chor-Jahresplaner - Mitglieder-Store
// ==========================================
// Ablageform: CSV-Mitgliederliste mit Kopfzeile
//   name,birthday[,id]
// Zeilen ohne lesbaren Namen sind ein Fehler; eine
// fehlende ID wird beim Einlesen generiert.
// ==========================================

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

use crate::domain::member::MemberRecord;
use crate::repository::error::{RepositoryError, RepositoryResult};

// ==========================================
// MemberStore - Trait
// ==========================================

/// Lieferant der Mitgliedsdatensätze
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Alle Mitglieder abrufen
    async fn fetch_all_members(&self) -> RepositoryResult<Vec<MemberRecord>>;
}

// ==========================================
// CsvMemberStore - CSV-Implementierung
// ==========================================

/// CSV-Spaltenbild einer Mitgliederzeile
#[derive(Debug, serde::Deserialize)]
struct MemberRow {
    name: String,
    birthday: String,
    #[serde(default)]
    id: Option<String>,
}

/// Mitglieder-Store über eine CSV-Datei
pub struct CsvMemberStore {
    path: PathBuf,
}

impl CsvMemberStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MemberStore for CsvMemberStore {
    async fn fetch_all_members(&self) -> RepositoryResult<Vec<MemberRecord>> {
        let path = self.path.clone();

        // csv liest synchron; Datei vorher asynchron in den Speicher holen
        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| RepositoryError::FileReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let mut members = Vec::new();
        for (line, result) in reader.deserialize::<MemberRow>().enumerate() {
            let row = result.map_err(|e| RepositoryError::CsvParseError {
                path: path.display().to_string(),
                message: format!("Zeile {}: {}", line + 2, e),
            })?;

            if row.name.is_empty() {
                return Err(RepositoryError::FieldValueError {
                    field: "name".to_string(),
                    message: format!("Zeile {}: leerer Mitgliedsname", line + 2),
                });
            }

            let member = match row.id {
                Some(id) if !id.is_empty() => MemberRecord::new(id, row.name, row.birthday),
                _ => MemberRecord::with_generated_id(row.name, row.birthday),
            };
            members.push(member);
        }

        debug!(anzahl = members.len(), pfad = %path.display(), "Mitgliederliste gelesen");
        Ok(members)
    }
}
