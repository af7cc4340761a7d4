//! Shared foundation for the almanac workspace: settings, the core error
//! type, calendar defaults, and small utilities with no domain dependencies.

pub mod config;
pub mod constants;
pub mod error;
pub mod util;
