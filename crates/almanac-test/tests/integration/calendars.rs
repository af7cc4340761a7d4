//! Calendar bookkeeping around event registration.

use almanac_test::component::model::{Calendar, Event};
use almanac_test::component::store::{CalendarStore, MemoryStore, StoreError};
use uuid::Uuid;

use super::helpers::{daily_standup, kickoff};

#[test_log::test]
fn registration_without_a_calendar_ensures_the_default_once() {
    let standup = daily_standup();
    let one_off = kickoff();
    let mut store = MemoryStore::new();

    let first = store.register_event(&standup, None).expect("register");
    let second = store.register_event(&one_off, None).expect("register");

    assert_eq!(first.slug, "default");
    assert_eq!(first.id, second.id);
    assert_eq!(store.calendar_count(), 1);
}

#[test_log::test]
fn named_calendars_are_slugged_and_reused() {
    let standup = daily_standup();
    let one_off = kickoff();
    let mut store = MemoryStore::new();

    let created = store
        .register_event(&standup, Some("Team Offsite!"))
        .expect("register");
    assert_eq!(created.slug, "team-offsite");
    assert_eq!(created.name, "Team Offsite!");

    let reused = store
        .register_event(&one_off, Some("Team Offsite!"))
        .expect("register");
    assert_eq!(created.id, reused.id);
    assert_eq!(store.calendar_count(), 1);
}

#[test_log::test]
fn ensure_default_calendar_is_idempotent() {
    let mut store = MemoryStore::new();

    let first = store.ensure_default_calendar().expect("ensure");
    let second = store.ensure_default_calendar().expect("ensure");

    assert_eq!(first.id, second.id);
    assert_eq!(first.slug, "default");
    assert_eq!(store.calendar_count(), 1);
}

#[test_log::test]
fn require_calendar_reports_missing_slugs() {
    let store = MemoryStore::new();

    let err = store
        .require_calendar("nowhere")
        .expect_err("missing calendar");

    assert!(matches!(err, StoreError::CalendarNotFound(slug) if slug == "nowhere"));
}

#[test_log::test]
fn events_resolve_back_to_their_calendar() {
    let standup = daily_standup();
    let mut store = MemoryStore::new();
    store
        .register_event(&standup, Some("Engineering"))
        .expect("register");

    let calendar: Calendar = store.calendar_of(standup.id()).expect("assigned calendar");
    assert_eq!(calendar.slug, "engineering");
    assert!(store.calendar_of(Uuid::now_v7()).is_none());
}
