//! In-memory store backing the demo binary and the test suite.

use std::collections::HashMap;

use almanac_core::util::slug::slugify;
use tracing::debug;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::model::{Calendar, Event, Occurrence, OccurrenceKey};
use crate::store::{CalendarStore, OccurrenceStore};

/// Single-threaded in-memory store.
///
/// Occurrences are indexed by natural key and calendars by slug. A
/// deployment's relational store is expected to satisfy the same contracts;
/// nothing downstream depends on this implementation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    occurrences: HashMap<OccurrenceKey, Occurrence>,
    calendars: HashMap<String, Calendar>,
    event_calendars: HashMap<Uuid, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts a persisted occurrence by natural key.
    ///
    /// This is the persistence path for user edits: take a generated
    /// occurrence, reschedule or cancel it, then save it.
    pub fn save_occurrence(&mut self, occurrence: Occurrence) {
        debug!(key = %occurrence.key(), moved = occurrence.moved(), cancelled = occurrence.cancelled, "saving occurrence");
        self.occurrences.insert(occurrence.key(), occurrence);
    }

    /// Point lookup by natural key.
    #[must_use]
    pub fn occurrence(&self, key: &OccurrenceKey) -> Option<&Occurrence> {
        self.occurrences.get(key)
    }

    #[must_use]
    pub fn occurrence_count(&self) -> usize {
        self.occurrences.len()
    }

    /// Records an event's calendar assignment.
    ///
    /// With `calendar_name` absent, the default calendar is ensured and
    /// used. Registration is the one place calendar attachment happens;
    /// there is no implicit hook on other writes.
    ///
    /// ## Errors
    /// Fails when the named calendar cannot be created.
    pub fn register_event(
        &mut self,
        event: &dyn Event,
        calendar_name: Option<&str>,
    ) -> StoreResult<Calendar> {
        let calendar = match calendar_name {
            Some(name) => self.ensure_calendar(name)?,
            None => self.ensure_default_calendar()?,
        };
        self.event_calendars.insert(event.id(), calendar.slug.clone());
        Ok(calendar)
    }

    /// The calendar an event was registered on, if any.
    #[must_use]
    pub fn calendar_of(&self, event_id: Uuid) -> Option<Calendar> {
        self.event_calendars
            .get(&event_id)
            .and_then(|slug| self.calendars.get(slug))
            .cloned()
    }

    #[must_use]
    pub fn calendar_count(&self) -> usize {
        self.calendars.len()
    }
}

impl OccurrenceStore for MemoryStore {
    fn for_events(&self, event_ids: &[Uuid]) -> StoreResult<Vec<Occurrence>> {
        Ok(self
            .occurrences
            .values()
            .filter(|occ| event_ids.contains(&occ.event_id))
            .cloned()
            .collect())
    }
}

impl CalendarStore for MemoryStore {
    fn ensure_calendar(&mut self, name: &str) -> StoreResult<Calendar> {
        let slug = slugify(name);
        if let Some(existing) = self.calendars.get(&slug) {
            return Ok(existing.clone());
        }
        let calendar = Calendar::new(name)?;
        debug!(name, slug = %calendar.slug, "creating calendar");
        self.calendars.insert(calendar.slug.clone(), calendar.clone());
        Ok(calendar)
    }

    fn calendar_by_slug(&self, slug: &str) -> Option<Calendar> {
        self.calendars.get(slug).cloned()
    }
}
