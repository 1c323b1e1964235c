// ==========================================
// Chor-Jahresplaner - In-Memory-Stores
// ==========================================
// Zuständigkeit: Stores ohne Dateisystem, für Tests und
// für Aufrufer, die ihre Daten bereits im Speicher halten.
// ==========================================

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::member::MemberRecord;
use crate::domain::year_record::RawYearRecord;
use crate::repository::error::RepositoryResult;
use crate::repository::member_store::MemberStore;
use crate::repository::year_store::YearRecordStore;

// ==========================================
// InMemoryYearStore
// ==========================================

/// Jahresdaten-Store über einer Jahr->Datensatz-Tabelle
#[derive(Default)]
pub struct InMemoryYearStore {
    records: HashMap<i32, RawYearRecord>,
}

impl InMemoryYearStore {
    pub fn new(records: impl IntoIterator<Item = RawYearRecord>) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.year, r)).collect(),
        }
    }

    /// Leerer Store (jede Abfrage liefert Ok(None))
    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl YearRecordStore for InMemoryYearStore {
    async fn fetch_raw_year_record(&self, year: i32) -> RepositoryResult<Option<RawYearRecord>> {
        Ok(self.records.get(&year).cloned())
    }
}

// ==========================================
// InMemoryMemberStore
// ==========================================

/// Mitglieder-Store über einer festen Liste
///
/// Zählt die Abrufe mit, damit Tests das Kurzschlussverhalten
/// des Assemblers (kein Mitgliederabruf ohne Jahresdaten)
/// nachweisen können.
#[derive(Default)]
pub struct InMemoryMemberStore {
    members: Vec<MemberRecord>,
    fetch_count: AtomicUsize,
}

impl InMemoryMemberStore {
    pub fn new(members: Vec<MemberRecord>) -> Self {
        Self {
            members,
            fetch_count: AtomicUsize::new(0),
        }
    }

    /// Anzahl der bisherigen fetch_all_members-Aufrufe
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MemberStore for InMemoryMemberStore {
    async fn fetch_all_members(&self) -> RepositoryResult<Vec<MemberRecord>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.members.clone())
    }
}
