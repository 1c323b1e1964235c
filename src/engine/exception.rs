// ==========================================
// Chor-Jahresplaner - Ausnahme-Prädikat
// ==========================================
// Zuständigkeit: reine Unterdrückungslogik für Probentermine
// Grundsatz: zustandslos, keine Seiteneffekte, kein I/O
// Vergleich auf Kalendertags-Granularität, keine Zeitzonen
// ==========================================

use chrono::NaiveDate;

use crate::domain::types::parse_date;
use crate::domain::year_record::ExceptionRange;

// ==========================================
// ExceptionMatcher - reine Funktionsbibliothek
// ==========================================
pub struct ExceptionMatcher;

impl ExceptionMatcher {
    /// Entscheidet, ob ein Datum von der Probengenerierung
    /// ausgenommen ist
    ///
    /// # Regeln
    /// - Treffer, wenn das Datum exakt in exception_dates steht
    /// - Treffer, wenn das Datum in [start, end] (beide inklusiv)
    ///   eines Zeitraums liegt
    /// - leere Eingaben ergeben für jedes Datum false
    ///
    /// Unlesbare Datums-Strings in den Eingaben treffen nie;
    /// Formatprüfung ist Sache des Validators, nicht dieses Prädikats.
    pub fn is_suppressed(
        date: NaiveDate,
        exception_dates: &[String],
        exception_ranges: &[ExceptionRange],
    ) -> bool {
        if Self::matches_date(date, exception_dates) {
            return true;
        }
        Self::matches_range(date, exception_ranges)
    }

    /// Exakter Treffer in der Ausnahmetag-Liste
    fn matches_date(date: NaiveDate, exception_dates: &[String]) -> bool {
        exception_dates
            .iter()
            .filter_map(|s| parse_date(s))
            .any(|d| d == date)
    }

    /// Treffer in einem inklusiven Ausnahmezeitraum
    fn matches_range(date: NaiveDate, exception_ranges: &[ExceptionRange]) -> bool {
        exception_ranges
            .iter()
            .filter_map(|r| r.bounds())
            .any(|(start, end)| start <= date && date <= end)
    }
}

// ==========================================
// Tests
// ==========================================
