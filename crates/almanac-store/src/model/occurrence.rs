//! Models for event occurrences.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Natural key of an occurrence.
///
/// Identity is the owning event plus the window the schedule originally
/// generated for it. The current window never participates: a rescheduled
/// occurrence keeps its key, which is what lets a persisted edit find the
/// generated candidate it stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OccurrenceKey {
    pub event_id: Uuid,
    pub original_start: DateTime<Utc>,
    pub original_end: DateTime<Utc>,
}

impl std::fmt::Display for OccurrenceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}@{}/{}",
            self.event_id, self.original_start, self.original_end
        )
    }
}

/// A single concrete instance of an event.
///
/// Generated occurrences are produced on the fly from an event's schedule
/// and are never stored. An occurrence is persisted only once a user edits
/// it: rescheduling, retitling, or cancelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Owning event.
    pub event_id: Uuid,
    /// Display title, projected from the event at generation time. A
    /// persisted record may carry an edited title.
    pub title: String,
    /// Current start, reflecting any reschedule.
    pub start: DateTime<Utc>,
    /// Current end, reflecting any reschedule.
    pub end: DateTime<Utc>,
    /// Start the schedule generated. Fixed for the life of the occurrence.
    pub original_start: DateTime<Utc>,
    /// End the schedule generated. Fixed for the life of the occurrence.
    pub original_end: DateTime<Utc>,
    /// Cancelled occurrences stay addressable by key but are excluded from
    /// window recovery.
    pub cancelled: bool,
}

impl Occurrence {
    /// Creates a freshly generated occurrence. The current window equals the
    /// original window and the occurrence is not cancelled.
    #[must_use]
    pub fn generated(
        event_id: Uuid,
        title: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id,
            title: title.to_string(),
            start,
            end,
            original_start: start,
            original_end: end,
            cancelled: false,
        }
    }

    #[must_use]
    pub fn key(&self) -> OccurrenceKey {
        OccurrenceKey {
            event_id: self.event_id,
            original_start: self.original_start,
            original_end: self.original_end,
        }
    }

    /// True when the occurrence was rescheduled away from its generated
    /// window.
    #[must_use]
    pub fn moved(&self) -> bool {
        self.start != self.original_start || self.end != self.original_end
    }

    /// Reschedules the occurrence. The natural key is untouched.
    pub fn move_to(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) {
        self.start = start;
        self.end = end;
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn restore(&mut self) {
        self.cancelled = false;
    }

    /// Tests the current window against a period: starts before `end` and
    /// ends at or after `start`.
    #[must_use]
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start < end && self.end >= start
    }
}
