//! Domain model and storage contracts for almanac: occurrences and their
//! natural keys, calendars, the event capability, and the in-memory store
//! used by the binary and the test suite.

pub mod error;
pub mod model;
pub mod store;
