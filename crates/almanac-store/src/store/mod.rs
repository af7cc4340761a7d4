//! Storage contracts and the in-memory implementation.

mod memory;

pub use memory::MemoryStore;

use almanac_core::constants::DEFAULT_CALENDAR_NAME;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::model::{Calendar, Occurrence};

/// Read access to persisted occurrences.
pub trait OccurrenceStore {
    /// Snapshot of every persisted occurrence owned by any of `event_ids`.
    ///
    /// The returned records are detached: writes made after this call
    /// returns are not visible through them.
    ///
    /// ## Errors
    /// Implementations surface their own failures; callers propagate them
    /// unmodified.
    fn for_events(&self, event_ids: &[Uuid]) -> StoreResult<Vec<Occurrence>>;
}

/// Calendar bookkeeping.
pub trait CalendarStore {
    /// Get-or-create by the slug derived from `name`. Idempotent: names
    /// that slugify identically resolve to one record.
    ///
    /// ## Errors
    /// Fails when `name` cannot produce a valid slug or the store cannot be
    /// written.
    fn ensure_calendar(&mut self, name: &str) -> StoreResult<Calendar>;

    /// Get-or-create the well-known default calendar. Idempotent.
    ///
    /// ## Errors
    /// Fails only when the store cannot be written.
    fn ensure_default_calendar(&mut self) -> StoreResult<Calendar> {
        self.ensure_calendar(DEFAULT_CALENDAR_NAME)
    }

    fn calendar_by_slug(&self, slug: &str) -> Option<Calendar>;

    /// Like [`CalendarStore::calendar_by_slug`], but a missing calendar is
    /// an error.
    ///
    /// ## Errors
    /// [`StoreError::CalendarNotFound`] when no calendar has `slug`.
    fn require_calendar(&self, slug: &str) -> StoreResult<Calendar> {
        self.calendar_by_slug(slug)
            .ok_or_else(|| StoreError::CalendarNotFound(slug.to_string()))
    }
}
