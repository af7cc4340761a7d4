//! End-to-end agenda tests over the in-memory store.

mod calendars;
mod merge;
mod tags;
