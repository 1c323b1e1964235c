// ==========================================
// Chor-Jahresplaner - Plan-Assembler
// ==========================================
// Zuständigkeit: orchestriert Stores und Engines zur
// Erzeugung des geordneten Jahresplans.
// Ablauf: Jahresdaten holen -> Vorjahres-Zeiträume übernehmen
// -> Mitglieder holen -> Einzeltermine + Proben + Geburtstage
// -> chronologisch sortieren.
// ==========================================
// Jede Generierung ist eine reine Funktion ihrer beiden
// geholten Eingaben; nichts wird gecacht oder mutiert.
// ==========================================

use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::ScheduleConfig;
use crate::domain::event::RawEvent;
use crate::domain::schedule_item::ScheduleItem;
use crate::domain::types::ItemCategory;
use crate::domain::year_record::{ExceptionRange, RawYearRecord};
use crate::engine::birthday::BirthdayProjector;
use crate::engine::error::{ScheduleError, ScheduleResult};
use crate::engine::recurrence::RecurrenceGenerator;
use crate::repository::member_store::MemberStore;
use crate::repository::year_store::YearRecordStore;

// ==========================================
// ScheduleAssembler
// ==========================================

/// Plan-Assembler
///
/// Bekommt seine Datenlieferanten explizit injiziert (keine
/// globalen Instanzen), damit Tests und parallele Aufrufer
/// eigene Stores verwenden können.
pub struct ScheduleAssembler {
    year_store: Arc<dyn YearRecordStore>,
    member_store: Arc<dyn MemberStore>,
    recurrence: RecurrenceGenerator,
    birthdays: BirthdayProjector,
}

impl ScheduleAssembler {
    /// Assembler mit Stores und Konfiguration anlegen
    pub fn new(
        year_store: Arc<dyn YearRecordStore>,
        member_store: Arc<dyn MemberStore>,
        config: ScheduleConfig,
    ) -> Self {
        Self {
            year_store,
            member_store,
            recurrence: RecurrenceGenerator::new(config.clone()),
            birthdays: BirthdayProjector::new(config),
        }
    }

    /// Vollständigen, chronologisch geordneten Jahresplan erzeugen
    ///
    /// # Parameter
    /// - target_year: Zieljahr (vierstellig)
    ///
    /// # Rückgabe
    /// - Ok(Vec<ScheduleItem>): geordneter Plan; leer, wenn für das
    ///   Jahr kein Datensatz existiert (harter Kurzschluss, es wird
    ///   dann auch kein Mitgliederabruf ausgeführt)
    /// - Err(ScheduleError::InvalidYear): Jahr außerhalb des
    ///   Formatvertrags, keine Teilarbeit
    /// - Err(ScheduleError::Repository): Store-Fehler, unverändert
    ///   durchgereicht
    pub async fn generate_yearly_schedule(
        &self,
        target_year: i32,
    ) -> ScheduleResult<Vec<ScheduleItem>> {
        // Vorbedingung: Datums-Strings sind fest vierstellig
        if !(1..=9999).contains(&target_year) {
            return Err(ScheduleError::InvalidYear(target_year));
        }

        // 1. Jahresdatensatz; ohne ihn gibt es nichts zu generieren
        let Some(record) = self.year_store.fetch_raw_year_record(target_year).await? else {
            info!(jahr = target_year, "Kein Jahresdatensatz, leerer Plan");
            return Ok(Vec::new());
        };

        // 2. Vorjahres-Zeiträume übernehmen (nur Zeiträume; einzelne
        //    Ausnahmetage gelten nicht über den Jahreswechsel hinaus)
        let prior = self.year_store.fetch_raw_year_record(target_year - 1).await?;
        let merged_ranges = merge_exception_ranges(prior.as_ref(), &record);

        // 3. Mitglieder
        let members = self.member_store.fetch_all_members().await?;

        // 4. Einzeltermine anreichern
        let event_items: Vec<ScheduleItem> = record
            .events
            .iter()
            .enumerate()
            .map(|(index, raw)| enrich_event(raw, index))
            .collect();
        let explicit_dates: HashSet<String> =
            record.events.iter().map(|e| e.date.clone()).collect();

        // 5. Proben
        let rehearsal_items = self.recurrence.generate_weekly_occurrences(
            target_year,
            &explicit_dates,
            &record.exception_dates,
            &merged_ranges,
        );

        // 6. Geburtstage
        let birthday_items = self.birthdays.project_birthdays(&members, target_year);

        // 7. Zusammenführen und stabil sortieren
        let mut items = Vec::with_capacity(
            event_items.len() + rehearsal_items.len() + birthday_items.len(),
        );
        items.extend(event_items);
        items.extend(rehearsal_items);
        items.extend(birthday_items);
        items.sort_by(ScheduleItem::chronological);

        debug!(
            jahr = target_year,
            eintraege = items.len(),
            "Jahresplan zusammengesetzt"
        );
        Ok(items)
    }
}

/// Wirksame Ausnahmezeitraum-Folge bilden
///
/// Vorjahres-Zeiträume stehen wörtlich vor den Zeiträumen des
/// Zieljahres; fehlt das Vorjahr, gelten nur die eigenen.
fn merge_exception_ranges(
    prior: Option<&RawYearRecord>,
    current: &RawYearRecord,
) -> Vec<ExceptionRange> {
    let mut merged = Vec::new();
    if let Some(prior) = prior {
        merged.extend(prior.exception_ranges.iter().cloned());
    }
    merged.extend(current.exception_ranges.iter().cloned());
    merged
}

/// Einzeltermin zum Plan-Eintrag anreichern
///
/// Fehlende optionale Felder erhalten hier ihre Defaults:
/// Kategorie event, leere Beschreibung, leerer Ort.
fn enrich_event(raw: &RawEvent, index: usize) -> ScheduleItem {
    let category = raw
        .event_type
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or(ItemCategory::Event);

    ScheduleItem {
        id: raw.id_or_index(index),
        title: raw.title.clone(),
        description: Some(raw.description.clone().unwrap_or_default()),
        location: Some(raw.location.clone().unwrap_or_default()),
        date: raw.date.clone(),
        start_time: Some(raw.start_time.clone()),
        end_time: Some(raw.end_time.clone()),
        category,
        member_name: None,
    }
}

// ==========================================
// Tests (Einheit; Integrationsfälle in tests/)
// ==========================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_puts_prior_ranges_first() {
        let mut prior = RawYearRecord::empty(2024);
        prior.exception_ranges = vec![ExceptionRange::new("2024-12-30", "2024-12-31")];
        let mut current = RawYearRecord::empty(2025);
        current.exception_ranges = vec![ExceptionRange::new("2025-07-07", "2025-07-29")];

        let merged = merge_exception_ranges(Some(&prior), &current);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].start, "2024-12-30");
        assert_eq!(merged[1].start, "2025-07-07");
    }

    #[test]
    fn test_enrich_event_defaults() {
        let raw = RawEvent {
            id: None,
            title: "Sommerkonzert".to_string(),
            date: "2025-06-28".to_string(),
            start_time: "18:00".to_string(),
            end_time: "21:00".to_string(),
            event_type: None,
            description: None,
            location: None,
        };
        let item = enrich_event(&raw, 0);
        assert_eq!(item.category, ItemCategory::Event);
        assert_eq!(item.description.as_deref(), Some(""));
        assert_eq!(item.location.as_deref(), Some(""));
        assert_eq!(item.id, "e-0");
    }
}
