//! Occurrence generation and merging: recurrence-backed events, the
//! persisted-record replacer, the k-way merge over per-event occurrence
//! streams, and the calendar tag parser.

pub mod error;
pub mod merge;
pub mod replacer;
pub mod schedule;
pub mod tag;

pub use merge::{EventList, MergedOccurrences};
pub use replacer::OccurrenceReplacer;
pub use schedule::ScheduledEvent;
pub use tag::CalendarTag;
