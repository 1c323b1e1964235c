// ==========================================
// Chor-Jahresplaner - Jahresdaten-Validierung
// ==========================================
// Zuständigkeit: Struktur- und Formatprüfung der rohen
// Jahresdaten gegen den Dateivertrag.
// Ablauf: erst Strukturprüfung (bei Verstoß ein einzelner
// blockierender Fehler, keine Feldprüfungen mehr), dann
// Feldprüfungen über alle Einträge hinweg.
// Jahresabweichungen sind Warnungen, nie Fehler.
// ==========================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::types::{is_valid_date_str, is_valid_time_str, parse_date};

// ==========================================
// ValidationReport - Prüfergebnis
// ==========================================

/// Ergebnis einer Jahresdaten-Prüfung
///
/// is_valid ist genau dann wahr, wenn errors leer ist;
/// Warnungen beeinflussen is_valid nie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_findings(warnings: Vec<String>, errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            warnings,
            errors,
        }
    }
}

// ==========================================
// ScheduleValidator
// ==========================================

pub struct ScheduleValidator;

impl ScheduleValidator {
    /// Rohe Jahresdaten gegen den Dateivertrag prüfen
    ///
    /// # Parameter
    /// - raw: ungeparste Jahresdaten (JSON-Wert)
    /// - target_year: Referenzjahr für die Abweichungswarnungen
    pub fn validate(raw: &Value, target_year: i32) -> ValidationReport {
        let mut warnings = Vec::new();
        let mut errors = Vec::new();

        // Strukturprüfung: Objekt mit allen drei Folgen
        let Some(object) = raw.as_object() else {
            return Self::structural_failure();
        };
        let sequences = ["events", "exceptionalDates", "exceptionalTimespans"]
            .map(|key| object.get(key).and_then(Value::as_array));
        let [Some(events), Some(dates), Some(ranges)] = sequences else {
            return Self::structural_failure();
        };

        for (index, event) in events.iter().enumerate() {
            Self::check_event(event, index, target_year, &mut warnings, &mut errors);
        }
        for (index, date) in dates.iter().enumerate() {
            Self::check_exception_date(date, index, target_year, &mut warnings, &mut errors);
        }
        for (index, range) in ranges.iter().enumerate() {
            Self::check_exception_range(range, index, target_year, &mut warnings, &mut errors);
        }

        ValidationReport::from_findings(warnings, errors)
    }

    fn structural_failure() -> ValidationReport {
        ValidationReport::from_findings(
            Vec::new(),
            vec![
                "Ungültige Datenstruktur: erwartet wird ein Objekt mit den Feldern \
                 'events', 'exceptionalDates' und 'exceptionalTimespans' (jeweils Listen)"
                    .to_string(),
            ],
        )
    }

    /// Einzelnen Ereigniseintrag prüfen
    fn check_event(
        event: &Value,
        index: usize,
        target_year: i32,
        warnings: &mut Vec<String>,
        errors: &mut Vec<String>,
    ) {
        // Bezeichnung für Meldungen: Titel, ersatzweise Position
        let title = event.get("title").and_then(Value::as_str).unwrap_or("");
        let label = if title.is_empty() {
            format!("Ereignis an Position {}", index + 1)
        } else {
            format!("Ereignis \"{}\"", title)
        };

        if !event.is_object() {
            errors.push(format!("{}: kein Objekt", label));
            return;
        }

        if title.is_empty() {
            errors.push(format!("{}: Titel fehlt oder ist leer", label));
        }

        match event.get("date").and_then(Value::as_str) {
            Some(date) if is_valid_date_str(date) => {
                if let Some(parsed) = parse_date(date) {
                    Self::warn_year_mismatch(parsed, target_year, &label, warnings);
                }
            }
            Some(date) => {
                errors.push(format!(
                    "{}: Datum \"{}\" entspricht nicht dem Format YYYY-MM-DD",
                    label, date
                ));
            }
            None => errors.push(format!("{}: Datum fehlt", label)),
        }

        for field in ["startTime", "endTime"] {
            match event.get(field).and_then(Value::as_str) {
                Some(time) if is_valid_time_str(time) => {}
                Some(time) => errors.push(format!(
                    "{}: Uhrzeit \"{}\" ({}) entspricht nicht dem Format HH:MM",
                    label, time, field
                )),
                None => errors.push(format!("{}: Feld {} fehlt", label, field)),
            }
        }
    }

    /// Einzelnen Ausnahmetag prüfen
    fn check_exception_date(
        date: &Value,
        index: usize,
        target_year: i32,
        warnings: &mut Vec<String>,
        errors: &mut Vec<String>,
    ) {
        let label = format!("Ausnahmetag an Position {}", index + 1);
        match date.as_str() {
            Some(value) if is_valid_date_str(value) => {
                if let Some(parsed) = parse_date(value) {
                    Self::warn_year_mismatch(parsed, target_year, &label, warnings);
                }
            }
            Some(value) => errors.push(format!(
                "{}: \"{}\" entspricht nicht dem Format YYYY-MM-DD",
                label, value
            )),
            None => errors.push(format!("{}: kein Datums-String", label)),
        }
    }

    /// Einzelnen Ausnahmezeitraum prüfen
    ///
    /// Beide Endpunkte werden unabhängig geprüft; zusätzlich ist
    /// ein verdrehter Zeitraum (start > end) ein Fehler.
    fn check_exception_range(
        range: &Value,
        index: usize,
        target_year: i32,
        warnings: &mut Vec<String>,
        errors: &mut Vec<String>,
    ) {
        let label = format!("Ausnahmezeitraum an Position {}", index + 1);

        let mut endpoint = |field: &str| -> Option<chrono::NaiveDate> {
            match range.get(field).and_then(Value::as_str) {
                Some(value) if is_valid_date_str(value) => {
                    let parsed = parse_date(value)?;
                    Self::warn_year_mismatch(parsed, target_year, &format!("{} ({})", label, field), warnings);
                    Some(parsed)
                }
                Some(value) => {
                    errors.push(format!(
                        "{}: {} \"{}\" entspricht nicht dem Format YYYY-MM-DD",
                        label, field, value
                    ));
                    None
                }
                None => {
                    errors.push(format!("{}: Feld {} fehlt", label, field));
                    None
                }
            }
        };

        let start = endpoint("start");
        let end = endpoint("end");

        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                errors.push(format!(
                    "{}: Beginn {} liegt nach dem Ende {}",
                    label, start, end
                ));
            }
        }
    }

    fn warn_year_mismatch(
        date: chrono::NaiveDate,
        target_year: i32,
        label: &str,
        warnings: &mut Vec<String>,
    ) {
        use chrono::Datelike;
        if date.year() != target_year {
            warnings.push(format!(
                "{}: Jahr {} weicht vom Zieljahr {} ab",
                label,
                date.year(),
                target_year
            ));
        }
    }
}

// ==========================================
// Tests
// ==========================================
