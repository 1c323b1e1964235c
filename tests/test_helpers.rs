// ==========================================
// Testhilfen
// ==========================================
// Zuständigkeit: Bausteine für Jahresdaten, Mitglieder
// und einen Assembler über In-Memory-Stores
// ==========================================

use std::sync::Arc;

use chorplan::{
    ExceptionRange, InMemoryMemberStore, InMemoryYearStore, MemberRecord, RawEvent,
    RawYearRecord, ScheduleAssembler, ScheduleConfig,
};

/// Einzeltermin bauen
pub fn event(title: &str, date: &str, start: &str, end: &str) -> RawEvent {
    RawEvent {
        id: None,
        title: title.to_string(),
        date: date.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        event_type: None,
        description: None,
        location: None,
    }
}

/// Jahresdatensatz bauen
pub fn year_record(
    year: i32,
    events: Vec<RawEvent>,
    exception_dates: Vec<&str>,
    exception_ranges: Vec<(&str, &str)>,
) -> RawYearRecord {
    let mut record = RawYearRecord::empty(year);
    record.events = events;
    record.exception_dates = exception_dates.into_iter().map(String::from).collect();
    record.exception_ranges = exception_ranges
        .into_iter()
        .map(|(s, e)| ExceptionRange::new(s, e))
        .collect();
    record
}

/// Mitglied bauen
pub fn member(id: &str, name: &str, birthday: &str) -> MemberRecord {
    MemberRecord::new(id, name, birthday)
}

/// Assembler über In-Memory-Stores; der Mitglieder-Store wird
/// mit zurückgegeben, damit Tests seine Abrufe zählen können
pub fn assembler_with_stores(
    years: Vec<RawYearRecord>,
    members: Vec<MemberRecord>,
) -> (ScheduleAssembler, Arc<InMemoryMemberStore>) {
    let member_store = Arc::new(InMemoryMemberStore::new(members));
    let assembler = ScheduleAssembler::new(
        Arc::new(InMemoryYearStore::new(years)),
        member_store.clone(),
        ScheduleConfig::default(),
    );
    (assembler, member_store)
}
