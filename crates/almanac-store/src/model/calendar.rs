//! Models for calendars, the named groupings events are registered on.

use almanac_core::constants::{DEFAULT_CALENDAR_NAME, DEFAULT_CALENDAR_SLUG};
use almanac_core::error::{CoreError, CoreResult};
use almanac_core::util::slug::slugify;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named grouping of events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    /// UUID v7 primary key.
    pub id: Uuid,
    /// Display name as entered.
    pub name: String,
    /// URL-safe identifier derived from the name at creation. Stable under
    /// rename.
    pub slug: String,
}

impl Calendar {
    /// Creates a calendar with a slug derived from its name.
    ///
    /// ## Errors
    /// A name with no alphanumeric characters produces an empty slug and is
    /// rejected.
    pub fn new(name: &str) -> CoreResult<Self> {
        let slug = slugify(name);
        if slug.is_empty() {
            return Err(CoreError::ValidationError(format!(
                "calendar name {name:?} produces an empty slug"
            )));
        }
        Ok(Self {
            id: Uuid::now_v7(),
            name: name.to_string(),
            slug,
        })
    }

    /// The well-known calendar used for events registered without one.
    #[must_use]
    pub fn default_calendar() -> Self {
        Self {
            id: Uuid::now_v7(),
            name: DEFAULT_CALENDAR_NAME.to_string(),
            slug: DEFAULT_CALENDAR_SLUG.to_string(),
        }
    }
}
