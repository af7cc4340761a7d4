//! Small shared utilities with no domain dependencies.

pub mod dateparts;
pub mod slug;
