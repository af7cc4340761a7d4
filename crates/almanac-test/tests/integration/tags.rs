//! Template-tag parsing and context-entry resolution.

use almanac_test::component::store::{CalendarStore, MemoryStore};
use almanac_test::component::tag::{CALENDAR_TAG_NAME, CalendarTag};

use super::helpers::kickoff;

#[test_log::test]
fn four_token_tag_resolves_a_context_entry() {
    let one_off = kickoff();
    let mut store = MemoryStore::new();
    store
        .register_event(&one_off, Some("Projects"))
        .expect("register");

    let tag = CalendarTag::parse(&format!(
        "{CALENDAR_TAG_NAME} project as project_calendar"
    ))
    .expect("parse");
    let calendar = store.require_calendar("projects").expect("calendar");
    let (var_name, entry) = tag.entry(calendar);

    assert_eq!(var_name, "project_calendar");
    assert_eq!(entry.slug, "projects");
}

#[test_log::test]
fn five_token_tag_carries_the_distinction() {
    let tag = CalendarTag::parse("get_calendar_for_object project team as cal").expect("parse");

    assert_eq!(tag.object_ref, "project");
    assert_eq!(tag.distinction.as_deref(), Some("team"));
    assert_eq!(tag.var_name, "cal");
}

#[test_log::test]
fn malformed_tags_are_rejected() {
    for input in [
        "get_calendar_for_object",
        "get_calendar_for_object project",
        "get_calendar_for_object project into cal",
        "get_calendar_for_object project team extra as cal",
        "other_tag project as cal",
    ] {
        assert!(CalendarTag::parse(input).is_err(), "accepted {input:?}");
    }
}
