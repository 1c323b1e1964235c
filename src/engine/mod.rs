// ==========================================
// Chor-Jahresplaner - Engine-Schicht
// ==========================================
// Zuständigkeit: Geschäftsregeln der Plan-Generierung
// Grundsatz: Engines lesen keine Dateien; Datenzugriff
// läuft ausschließlich über die Store-Traits.
// ==========================================

pub mod assembler;
pub mod birthday;
pub mod error;
pub mod exception;
pub mod recurrence;
pub mod validator;

// Wiederausfuhr der Kern-Engines
pub use assembler::ScheduleAssembler;
pub use birthday::BirthdayProjector;
pub use error::{ScheduleError, ScheduleResult};
pub use exception::ExceptionMatcher;
pub use recurrence::RecurrenceGenerator;
pub use validator::{ScheduleValidator, ValidationReport};
