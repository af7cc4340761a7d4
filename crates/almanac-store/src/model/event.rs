//! The event capability: anything that can enumerate its occurrences in
//! order.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::occurrence::Occurrence;

/// Lazy stream of occurrences for one event.
pub type OccurrenceGen<'a> = Box<dyn Iterator<Item = Occurrence> + 'a>;

/// An event that can produce its own occurrences.
///
/// Implementations guarantee that [`Event::occurrences_after`] yields
/// occurrences in strictly increasing start order, finite or not, and that
/// calling it again starts a fresh stream. Whether "after" admits an
/// occurrence already in progress at the cutoff is the implementation's
/// choice; consumers rely only on the ordering.
pub trait Event {
    /// Stable identity; persisted occurrences reference it.
    fn id(&self) -> Uuid;

    /// Starts a fresh ordered stream of occurrences relevant from `after`
    /// onward.
    fn occurrences_after(&self, after: DateTime<Utc>) -> OccurrenceGen<'_>;
}
