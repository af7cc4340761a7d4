//! Domain model shared by the store and the occurrence engine.

pub mod calendar;
pub mod event;
pub mod occurrence;

pub use calendar::Calendar;
pub use event::{Event, OccurrenceGen};
pub use occurrence::{Occurrence, OccurrenceKey};
