//! Coercion of loose date parts, as found in query strings, into a timestamp.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{CoreError, CoreResult};

const DATE_PART_KEYS: [&str; 6] = ["year", "month", "day", "hour", "minute", "second"];

/// Fill-in values for parts past the provided prefix.
const DATE_PART_MINIMUMS: [i32; 6] = [1, 1, 1, 0, 0, 0];

/// Coerce loose `year`/`month`/../`second` parameters into a timestamp.
///
/// Consumes the keys in calendar order and stops at the first absent one;
/// parts past the prefix take their minimum values, and parts after a gap
/// are ignored even when present. Returns `Ok(None)` when `year` itself is
/// absent.
///
/// ## Errors
/// A present value that does not parse as an integer, or a prefix naming an
/// impossible date or time, is an error. Absence stops the scan; garbage
/// does not.
pub fn coerce_date_parts(params: &HashMap<String, String>) -> CoreResult<Option<NaiveDateTime>> {
    let mut parts = DATE_PART_MINIMUMS;
    let mut provided = 0;

    for (slot, key) in DATE_PART_KEYS.iter().enumerate() {
        let Some(raw) = params.get(*key) else { break };
        parts[slot] = raw
            .parse()
            .map_err(|err| CoreError::ParseError(format!("{key} value {raw:?}: {err}")))?;
        provided = slot + 1;
    }

    if provided == 0 {
        return Ok(None);
    }

    let [year, month, day, hour, minute, second] = parts;
    let date = NaiveDate::from_ymd_opt(year, part_u32("month", month)?, part_u32("day", day)?)
        .ok_or_else(|| {
            CoreError::ValidationError(format!("impossible date {year}-{month:02}-{day:02}"))
        })?;
    let time = NaiveTime::from_hms_opt(
        part_u32("hour", hour)?,
        part_u32("minute", minute)?,
        part_u32("second", second)?,
    )
    .ok_or_else(|| {
        CoreError::ValidationError(format!("impossible time {hour:02}:{minute:02}:{second:02}"))
    })?;

    Ok(Some(NaiveDateTime::new(date, time)))
}

fn part_u32(key: &str, value: i32) -> CoreResult<u32> {
    u32::try_from(value)
        .map_err(|err| CoreError::ValidationError(format!("{key} {value} out of range: {err}")))
}
