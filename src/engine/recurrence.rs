// ==========================================
// Chor-Jahresplaner - Wochenwiederkehr-Engine
// ==========================================
// Zuständigkeit: erzeugt die wöchentlichen Probentermine
// eines Zieljahres und überspringt kollidierende oder
// ausgenommene Tage.
// Invariante: Schrittweite exakt 7 Tage ab einem geprüften
// Wochentagsanker; nie Monatsarithmetik. Damit liegt jeder
// Schritt garantiert auf demselben Wochentag, auch in
// Schaltjahren.
// ==========================================

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashSet;
use tracing::{debug, trace};

use crate::config::ScheduleConfig;
use crate::domain::schedule_item::ScheduleItem;
use crate::domain::types::{format_date, ItemCategory};
use crate::domain::year_record::ExceptionRange;
use crate::engine::exception::ExceptionMatcher;

// ==========================================
// RecurrenceGenerator
// ==========================================

pub struct RecurrenceGenerator {
    config: ScheduleConfig,
}

impl RecurrenceGenerator {
    pub fn new(config: ScheduleConfig) -> Self {
        Self { config }
    }

    /// Wöchentliche Probentermine eines Jahres erzeugen
    ///
    /// # Parameter
    /// - target_year: Zieljahr (vom Aufrufer bereits geprüft)
    /// - explicit_event_dates: Tage mit manuell eingetragenen Terminen;
    ///   an diesen Tagen hat der Einzeltermin Vorrang vor der Probe
    /// - exception_dates: einzelne Ausnahmetage des Zieljahres
    /// - exception_ranges: wirksame Ausnahmezeiträume (inkl. Übertrag
    ///   aus dem Vorjahr, vom Assembler bereits zusammengeführt)
    ///
    /// # Rückgabe
    /// - Vec<ScheduleItem> der Kategorie rehearsal, chronologisch
    ///
    /// Die Eintrags-ID ist deterministisch aus dem Datum abgeleitet
    /// ("p-YYYY-MM-DD"); wiederholte Generierung ist idempotent.
    pub fn generate_weekly_occurrences(
        &self,
        target_year: i32,
        explicit_event_dates: &HashSet<String>,
        exception_dates: &[String],
        exception_ranges: &[ExceptionRange],
    ) -> Vec<ScheduleItem> {
        let Some(anchor) = self.first_weekday_of_year(target_year) else {
            // chrono kann das Jahr nicht darstellen; der Assembler
            // hat das Jahr vorab geprüft, hier nur leise leer liefern
            return Vec::new();
        };

        let mut items = Vec::new();
        let mut current = anchor;

        while current.year() == target_year {
            let date_str = format_date(current);

            if explicit_event_dates.contains(&date_str) {
                trace!(datum = %date_str, "Probe übersprungen: Einzeltermin hat Vorrang");
            } else if ExceptionMatcher::is_suppressed(current, exception_dates, exception_ranges) {
                trace!(datum = %date_str, "Probe übersprungen: Ausnahmeregel");
            } else {
                items.push(self.rehearsal_item(date_str));
            }

            // exakt 7 Tage, nie "plus ein Monat minus x"
            current += Duration::days(7);
        }

        debug!(
            jahr = target_year,
            anzahl = items.len(),
            wochentag = %self.config.rehearsal_weekday,
            "Probentermine erzeugt"
        );
        items
    }

    /// Erstes Vorkommen des Probentags am oder nach dem 1. Januar
    fn first_weekday_of_year(&self, year: i32) -> Option<NaiveDate> {
        let mut date = NaiveDate::from_ymd_opt(year, 1, 1)?;
        while date.weekday() != self.config.rehearsal_weekday {
            date += Duration::days(1);
        }
        Some(date)
    }

    /// Einzelnen Probeneintrag bauen
    fn rehearsal_item(&self, date: String) -> ScheduleItem {
        ScheduleItem {
            id: format!("p-{}", date),
            title: self.config.rehearsal_title.clone(),
            description: Some(self.config.rehearsal_description.clone()),
            location: Some(self.config.rehearsal_location.clone()),
            date,
            start_time: Some(self.config.rehearsal_start.clone()),
            end_time: Some(self.config.rehearsal_end.clone()),
            category: ItemCategory::Rehearsal,
            member_name: None,
        }
    }
}

// ==========================================
// Tests
// ==========================================
