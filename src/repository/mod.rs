// ==========================================
// Chor-Jahresplaner - Storage-Schicht
// ==========================================
// Zuständigkeit: Datenzugriff hinter Traits, keine Geschäftslogik
// Grenzvertrag: fehlender Jahresdatensatz => Ok(None), kein Fehler
// ==========================================

pub mod error;
pub mod member_store;
pub mod memory;
pub mod year_store;

// Wiederausfuhr der Kern-Typen
pub use error::{RepositoryError, RepositoryResult};
pub use member_store::{CsvMemberStore, MemberStore};
pub use memory::{InMemoryMemberStore, InMemoryYearStore};
pub use year_store::{JsonYearStore, YearRecordStore};
