// ==========================================
// Chor-Jahresplaner - Mitgliedsdatensatz
// ==========================================
// Geburtstag als "YYYY-MM-DD" oder "MM-DD"; semantisch
// zählen nur Monat und Tag (Jahresprojektion).
// ==========================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// MemberRecord - Chormitglied
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub id: String,       // opake Kennung (geliefert oder generiert)
    pub name: String,     // Anzeigename, nicht leer
    pub birthday: String, // "YYYY-MM-DD" oder "MM-DD"
}

impl MemberRecord {
    /// Mitglied mit gelieferter ID
    pub fn new(id: impl Into<String>, name: impl Into<String>, birthday: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birthday: birthday.into(),
        }
    }

    /// Mitglied ohne gelieferte ID; die Kennung wird aus dem Namen
    /// plus Zufallssuffix abgeleitet (nicht laufübergreifend stabil)
    pub fn with_generated_id(name: impl Into<String>, birthday: impl Into<String>) -> Self {
        let name = name.into();
        let id = generate_member_id(&name);
        Self {
            id,
            name,
            birthday: birthday.into(),
        }
    }

    /// Monat und Tag des Geburtstags, None bei unlesbarem Feld
    ///
    /// Akzeptiert "YYYY-MM-DD" und "MM-DD"; die letzten beiden
    /// Segmente werden als Monat/Tag gelesen.
    pub fn birthday_month_day(&self) -> Option<(u32, u32)> {
        let parts: Vec<&str> = self.birthday.split('-').collect();
        let (month_str, day_str) = match parts.as_slice() {
            [_, month, day] => (*month, *day),
            [month, day] => (*month, *day),
            _ => return None,
        };
        let month: u32 = month_str.parse().ok()?;
        let day: u32 = day_str.parse().ok()?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        Some((month, day))
    }
}

/// Namensbasierte Kennung mit Zufallssuffix
fn generate_member_id(name: &str) -> String {
    let slug: String = name
        .chars()
        .filter(|c| c.is_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("m-{}-{}", slug, &suffix[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_month_day_full_and_short_form() {
        let anna = MemberRecord::new("m1", "Anna", "1992-05-28");
        assert_eq!(anna.birthday_month_day(), Some((5, 28)));

        let kurz = MemberRecord::new("m2", "Jonas", "12-03");
        assert_eq!(kurz.birthday_month_day(), Some((12, 3)));
    }

    #[test]
    fn test_birthday_month_day_rejects_garbage() {
        let kaputt = MemberRecord::new("m3", "X", "irgendwann");
        assert_eq!(kaputt.birthday_month_day(), None);

        let unmonat = MemberRecord::new("m4", "Y", "1990-13-05");
        assert_eq!(unmonat.birthday_month_day(), None);
    }

    #[test]
    fn test_generated_id_is_name_derived() {
        let member = MemberRecord::with_generated_id("Anna Müller", "05-28");
        assert!(member.id.starts_with("m-annamüller-"));
        assert!(!member.id.is_empty());
    }
}
