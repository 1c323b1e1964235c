// ==========================================
// Chor-Jahresplaner - Kernbibliothek
// ==========================================
// Aufbau: Domänenmodell + Stores + Engines
// Ein Aufruf erzeugt aus drei Roheingaben (Einzeltermine,
// Geburtstage, wöchentliche Probe mit Ausnahmeregeln)
// den geordneten Jahresplan.
// ==========================================

// ==========================================
// Moduldeklarationen
// ==========================================

// Domänenschicht - Wertobjekte und Typen
pub mod domain;

// Storage-Schicht - Datenzugriff hinter Traits
pub mod repository;

// Engine-Schicht - Geschäftsregeln
pub mod engine;

// Konfigurationsschicht
pub mod config;

// Logging
pub mod logging;

// ==========================================
// Wiederausfuhr der Kern-Typen
// ==========================================

// Domänentypen
pub use domain::{
    ExceptionRange, ItemCategory, MemberRecord, RawEvent, RawYearData, RawYearRecord,
    ScheduleItem,
};

// Engines
pub use engine::{
    BirthdayProjector, ExceptionMatcher, RecurrenceGenerator, ScheduleAssembler,
    ScheduleError, ScheduleResult, ScheduleValidator, ValidationReport,
};

// Stores
pub use repository::{
    CsvMemberStore, InMemoryMemberStore, InMemoryYearStore, JsonYearStore, MemberStore,
    RepositoryError, RepositoryResult, YearRecordStore,
};

// Konfiguration
pub use config::ScheduleConfig;

// ==========================================
// Konstanten
// ==========================================

// Systemversion
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Systemname
pub const APP_NAME: &str = "Chor-Jahresplaner";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
