//! Merge-order and laziness tests for the combined agenda stream.

use almanac_test::component::EngineError;
use almanac_test::component::merge::EventList;
use almanac_test::component::model::Occurrence;
use almanac_test::component::schedule::ScheduledEvent;
use almanac_test::component::store::{MemoryStore, OccurrenceStore, StoreError, StoreResult};
use chrono::TimeDelta;
use uuid::Uuid;

use super::helpers::{
    MONDAY_MORNING, daily_standup, kickoff, seeded_store, starts, utc, weekly_review,
};

#[test_log::test]
fn merged_agenda_interleaves_sources_in_start_order() {
    let standup = daily_standup();
    let review = weekly_review();
    let one_off = kickoff();
    let store = seeded_store(&[&standup, &review, &one_off]);

    let list = EventList::new(vec![&standup, &review, &one_off]);
    let merged = list
        .occurrences_after(&store, utc(MONDAY_MORNING))
        .expect("merge");
    let week: Vec<Occurrence> = merged.take(8).collect();

    assert_eq!(
        starts(&week),
        vec![
            utc("2026-03-02T09:15:00Z"),
            utc("2026-03-03T09:15:00Z"),
            utc("2026-03-03T10:00:00Z"), // kickoff between standups
            utc("2026-03-04T09:15:00Z"),
            utc("2026-03-05T09:15:00Z"),
            utc("2026-03-06T09:15:00Z"),
            utc("2026-03-06T14:00:00Z"), // Friday review
            utc("2026-03-09T09:15:00Z"), // next Monday
        ]
    );
}

#[test_log::test]
fn merged_output_is_non_decreasing_far_into_the_stream() {
    let standup = daily_standup();
    let review = weekly_review();
    let store = seeded_store(&[&standup, &review]);

    let list = EventList::new(vec![&standup, &review]);
    let merged = list
        .occurrences_after(&store, utc(MONDAY_MORNING))
        .expect("merge");
    let horizon: Vec<Occurrence> = merged.take(400).collect();

    assert_eq!(horizon.len(), 400);
    for pair in horizon.windows(2) {
        assert!(
            pair[0].start <= pair[1].start,
            "order regressed at {}",
            pair[1].start
        );
    }
}

#[test_log::test]
fn identical_starts_yield_in_registration_order() {
    let first = ScheduledEvent::once(
        "First registered",
        utc("2026-03-03T10:00:00Z"),
        utc("2026-03-03T10:30:00Z"),
    )
    .expect("event");
    let second = ScheduledEvent::once(
        "Second registered",
        utc("2026-03-03T10:00:00Z"),
        utc("2026-03-03T11:00:00Z"),
    )
    .expect("event");
    let store = seeded_store(&[&first, &second]);

    let list = EventList::new(vec![&first, &second]);
    let titles: Vec<String> = list
        .occurrences_after(&store, utc(MONDAY_MORNING))
        .expect("merge")
        .map(|occurrence| occurrence.title)
        .collect();

    assert_eq!(titles, vec!["First registered", "Second registered"]);
}

#[test_log::test]
fn empty_event_list_yields_empty_stream() {
    let store = MemoryStore::new();
    let list = EventList::new(Vec::new());

    let mut merged = list
        .occurrences_after(&store, utc(MONDAY_MORNING))
        .expect("merge");

    assert!(merged.next().is_none());
    assert!(merged.next().is_none());
}

#[test_log::test]
fn count_limited_rules_exhaust_cleanly() {
    // Built from an externally parsed rule set to cover the typed constructor.
    let set = "DTSTART:20260302T120000Z\nRRULE:FREQ=DAILY;COUNT=3"
        .parse::<rrule::RRuleSet>()
        .expect("rule set");
    let lunch = ScheduledEvent::recurring("Lunch sync", set, TimeDelta::minutes(30)).expect("event");
    let store = seeded_store(&[&lunch]);

    let list = EventList::new(vec![&lunch]);
    let merged = list
        .occurrences_after(&store, utc(MONDAY_MORNING))
        .expect("merge");
    let all: Vec<Occurrence> = merged.collect();

    assert_eq!(
        starts(&all),
        vec![
            utc("2026-03-02T12:00:00Z"),
            utc("2026-03-03T12:00:00Z"),
            utc("2026-03-04T12:00:00Z"),
        ]
    );
}

#[test_log::test]
fn upcoming_anchors_at_the_current_instant() {
    let far_future = ScheduledEvent::once(
        "Centennial",
        utc("2999-01-01T00:00:00Z"),
        utc("2999-01-01T01:00:00Z"),
    )
    .expect("event");
    let past = ScheduledEvent::once(
        "Moon landing",
        utc("1969-07-20T20:17:00Z"),
        utc("1969-07-20T21:00:00Z"),
    )
    .expect("event");
    let store = seeded_store(&[&far_future, &past]);

    let list = EventList::new(vec![&far_future, &past]);
    let titles: Vec<String> = list
        .upcoming(&store)
        .expect("merge")
        .map(|occurrence| occurrence.title)
        .collect();

    assert_eq!(titles, vec!["Centennial"]);
}

/// Store whose snapshot query always fails.
struct FaultyStore;

impl OccurrenceStore for FaultyStore {
    fn for_events(&self, _event_ids: &[Uuid]) -> StoreResult<Vec<Occurrence>> {
        Err(StoreError::CalendarNotFound("archived-agenda".to_string()))
    }
}

#[test_log::test]
fn store_failure_propagates_unchanged() {
    let standup = daily_standup();
    let list = EventList::new(vec![&standup]);

    let Err(err) = list.occurrences_after(&FaultyStore, utc(MONDAY_MORNING)) else {
        panic!("a failing snapshot query must not produce a stream");
    };
    assert!(matches!(err, EngineError::StoreError(_)));
    // the storage message crosses the engine boundary verbatim
    assert_eq!(err.to_string(), "Calendar not found: archived-agenda");
}
