//! Parsing of the calendar lookup tag into a typed render-context entry.

use almanac_store::model::Calendar;

use crate::error::{EngineError, EngineResult};

/// Leading token every calendar lookup tag starts with.
pub const CALENDAR_TAG_NAME: &str = "get_calendar_for_object";

/// Parsed form of the calendar lookup tag.
///
/// Exactly two arities are accepted:
/// - `get_calendar_for_object <object> as <variable>`
/// - `get_calendar_for_object <object> <distinction> as <variable>`
///
/// Resolution of the object to a calendar belongs to the hosting
/// application; this type only carries the parsed configuration and shapes
/// the final context entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarTag {
    /// Name of the object whose calendar is looked up.
    pub object_ref: String,
    /// Optional qualifier distinguishing several calendars related to the
    /// same object.
    pub distinction: Option<String>,
    /// Context variable the calendar is bound to.
    pub var_name: String,
}

impl CalendarTag {
    /// Parses tag text into its typed form.
    ///
    /// ## Errors
    /// Anything but the two fixed arities, with the right leading token and
    /// the `as` keyword in place, is a syntax error naming the accepted
    /// forms.
    pub fn parse(input: &str) -> EngineResult<Self> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        match tokens.as_slice() {
            [CALENDAR_TAG_NAME, object_ref, "as", var_name] => Ok(Self {
                object_ref: (*object_ref).to_string(),
                distinction: None,
                var_name: (*var_name).to_string(),
            }),
            [CALENDAR_TAG_NAME, object_ref, distinction, "as", var_name] => Ok(Self {
                object_ref: (*object_ref).to_string(),
                distinction: Some((*distinction).to_string()),
                var_name: (*var_name).to_string(),
            }),
            _ => Err(EngineError::TagSyntaxError(format!(
                "expected '{CALENDAR_TAG_NAME} <object> [distinction] as <variable>', got {input:?}"
            ))),
        }
    }

    /// The typed render-context entry: the variable name paired with the
    /// resolved calendar.
    #[must_use]
    pub fn entry(&self, calendar: Calendar) -> (String, Calendar) {
        (self.var_name.clone(), calendar)
    }
}
