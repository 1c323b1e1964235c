// ==========================================
// Chor-Jahresplaner - Geburtstags-Projektion
// ==========================================
// Zuständigkeit: projiziert die Monat/Tag-Geburtstage der
// Mitglieder in das Zieljahr. Geburtstage unterliegen
// keiner Ausnahmeregel und werden nie unterdrückt.
// ==========================================

use tracing::{debug, warn};

use crate::config::ScheduleConfig;
use crate::domain::member::MemberRecord;
use crate::domain::schedule_item::ScheduleItem;
use crate::domain::types::ItemCategory;

// ==========================================
// BirthdayProjector
// ==========================================

pub struct BirthdayProjector {
    config: ScheduleConfig,
}

impl BirthdayProjector {
    pub fn new(config: ScheduleConfig) -> Self {
        Self { config }
    }

    /// Geburtstage aller Mitglieder in das Zieljahr projizieren
    ///
    /// # Parameter
    /// - members: Mitgliederliste (leer => leeres Ergebnis)
    /// - target_year: Zieljahr
    ///
    /// # Rückgabe
    /// - ein ScheduleItem der Kategorie birthday je Mitglied,
    ///   datiert "<Zieljahr>-MM-TT", ganztägig (00:00-23:59)
    ///
    /// Mitglieder mit unlesbarem Geburtstagsfeld werden mit
    /// Warnung übersprungen. Das Datum wird wörtlich aus Monat
    /// und Tag gebaut; ein 29.02. bleibt auch in Nicht-Schalt-
    /// jahren als String erhalten (Sortierung bleibt korrekt).
    pub fn project_birthdays(
        &self,
        members: &[MemberRecord],
        target_year: i32,
    ) -> Vec<ScheduleItem> {
        let mut items = Vec::new();

        for member in members {
            let Some((month, day)) = member.birthday_month_day() else {
                warn!(
                    mitglied = %member.name,
                    geburtstag = %member.birthday,
                    "Geburtstag unlesbar, Mitglied übersprungen"
                );
                continue;
            };

            items.push(ScheduleItem {
                id: format!("g-{}-{}", target_year, member.id),
                title: format!("{} {}", self.config.birthday_title_prefix, member.name),
                description: Some(self.config.birthday_description.clone()),
                location: None,
                date: format!("{:04}-{:02}-{:02}", target_year, month, day),
                start_time: Some("00:00".to_string()),
                end_time: Some("23:59".to_string()),
                category: ItemCategory::Birthday,
                member_name: Some(member.name.clone()),
            });
        }

        debug!(jahr = target_year, anzahl = items.len(), "Geburtstage projiziert");
        items
    }
}

// ==========================================
// Tests
// ==========================================
