// ==========================================
// Chor-Jahresplaner - Konfigurationsschicht
// ==========================================
// Zuständigkeit: einstellbare Plan-Konstanten
// Ablage: optionale JSON-Datei, sonst Defaults
// ==========================================

pub mod schedule_config;

pub use schedule_config::ScheduleConfig;
