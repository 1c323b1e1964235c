// ==========================================
// Chor-Jahresplaner - Domänenmodell
// ==========================================
// Zuständigkeit: Wertobjekte und Typen des Jahresplans
// Grundsatz: keine Datenzugriffslogik, keine Engine-Logik
// ==========================================

pub mod event;
pub mod member;
pub mod schedule_item;
pub mod types;
pub mod year_record;

// Wiederausfuhr der Kern-Typen
pub use event::RawEvent;
pub use member::MemberRecord;
pub use schedule_item::ScheduleItem;
pub use types::ItemCategory;
pub use year_record::{ExceptionRange, RawYearData, RawYearRecord};
