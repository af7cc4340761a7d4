//! Seeds an in-memory working set and prints the merged agenda.
//!
//! Runs against a fixed reference instant so repeated invocations print
//! the same listing regardless of wall-clock time.

use almanac_core::config::Settings;
use almanac_engine::{CalendarTag, EventList, ScheduledEvent};
use almanac_store::model::{Event, Occurrence};
use almanac_store::store::{CalendarStore, MemoryStore};
use chrono::{DateTime, TimeDelta, Utc};

/// Fixed agenda anchor, a Monday morning.
const DEMO_NOW: &str = "2026-03-02T08:00:00Z";

/// ## Summary
/// Seeds the store with a working week, merges the event streams and
/// prints the agenda window described by `settings`.
///
/// ## Errors
/// Fails when seeding produces an invalid event or schedule, or when a
/// seeded calendar cannot be resolved.
pub fn run(settings: &Settings) -> anyhow::Result<()> {
    let now: DateTime<Utc> = DEMO_NOW.parse()?;

    let standup = ScheduledEvent::parse_recurring(
        "Standup",
        "DTSTART:20260302T091500Z\nRRULE:FREQ=DAILY;BYDAY=MO,TU,WE,TH,FR",
        TimeDelta::minutes(15),
    )?;
    let review = ScheduledEvent::parse_recurring(
        "Weekly review",
        "DTSTART:20260306T140000Z\nRRULE:FREQ=WEEKLY;BYDAY=FR",
        TimeDelta::hours(1),
    )?;
    let kickoff = ScheduledEvent::once(
        "Project kickoff",
        "2026-03-03T10:00:00Z".parse()?,
        "2026-03-03T11:30:00Z".parse()?,
    )?;

    let mut store = MemoryStore::new();
    store.register_event(&standup, None)?;
    store.register_event(&review, None)?;
    store.register_event(&kickoff, Some("Projects"))?;

    // Tuesday's standup slides to the afternoon.
    let mut rescheduled = Occurrence::generated(
        standup.id(),
        standup.title(),
        "2026-03-03T09:15:00Z".parse()?,
        "2026-03-03T09:30:00Z".parse()?,
    );
    rescheduled.move_to(
        "2026-03-03T15:00:00Z".parse()?,
        "2026-03-03T15:15:00Z".parse()?,
    );
    store.save_occurrence(rescheduled);

    // Wednesday's standup is off.
    let mut scrapped = Occurrence::generated(
        standup.id(),
        standup.title(),
        "2026-03-04T09:15:00Z".parse()?,
        "2026-03-04T09:30:00Z".parse()?,
    );
    scrapped.cancel();
    store.save_occurrence(scrapped);

    // Last Friday's review was pushed into this week. Its generated slot
    // predates the agenda anchor, so only the window scan below finds it.
    let mut carried = Occurrence::generated(
        review.id(),
        review.title(),
        "2026-02-27T14:00:00Z".parse()?,
        "2026-02-27T15:00:00Z".parse()?,
    );
    carried.move_to(
        "2026-03-04T14:00:00Z".parse()?,
        "2026-03-04T15:00:00Z".parse()?,
    );
    store.save_occurrence(carried);

    let list = EventList::new(vec![&standup, &review, &kickoff]);
    let mut merged = list.occurrences_after(&store, now)?;

    println!(
        "Agenda from {now}, next {} occurrences:",
        settings.agenda.limit
    );
    let upcoming: Vec<Occurrence> = merged.by_ref().take(settings.agenda.limit).collect();
    for occurrence in &upcoming {
        println!("  {}", format_line(occurrence));
    }

    let horizon = now + TimeDelta::days(i64::from(settings.agenda.horizon_days));
    let recovered = merged.replacer().remaining_in_range(now, horizon);
    if !recovered.is_empty() {
        println!("Moved into the next {} days:", settings.agenda.horizon_days);
        for occurrence in &recovered {
            println!("  {}", format_line(occurrence));
        }
    }

    // The lookup a calendar tag performs for template rendering.
    let tag = CalendarTag::parse("get_calendar_for_object kickoff as kickoff_calendar")?;
    let calendar = store.require_calendar("projects")?;
    let (var_name, calendar) = tag.entry(calendar);
    println!("Context entry {var_name:?} holds calendar {:?}", calendar.slug);

    tracing::info!(
        shown = upcoming.len(),
        recovered = recovered.len(),
        "demo agenda complete"
    );
    Ok(())
}

fn format_line(occurrence: &Occurrence) -> String {
    let marker = if occurrence.cancelled {
        "  (cancelled)"
    } else if occurrence.moved() {
        "  (moved)"
    } else {
        ""
    };
    format!(
        "{} to {}  {}{marker}",
        occurrence.start.format("%a %Y-%m-%d %H:%M"),
        occurrence.end.format("%H:%M"),
        occurrence.title
    )
}
