// ==========================================
// Chor-Jahresplaner - Logging-Initialisierung
// ==========================================
// Werkzeuge: tracing und tracing-subscriber
// Loglevel per Umgebungsvariable steuerbar
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Logging initialisieren
///
/// # Umgebungsvariablen
/// - RUST_LOG: Filter für das Loglevel (Default: info)
///   z. B. RUST_LOG=debug oder RUST_LOG=chorplan=trace
///
/// # Beispiel
/// ```no_run
/// use chorplan::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Logging für Tests initialisieren
///
/// Ausführlicheres Level, Ausgabe über den Test-Writer
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
