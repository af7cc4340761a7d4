//! Recurrence-backed events producing ordered occurrence streams.

use chrono::{DateTime, TimeDelta, Utc};
use rrule::{RRuleSet, Tz};
use std::collections::VecDeque;
use uuid::Uuid;

use almanac_store::model::{Event, Occurrence, OccurrenceGen};

use crate::error::{EngineError, EngineResult};

/// How many instances one expansion round asks the rule set for.
const EXPANSION_CHUNK: u16 = 128;

/// An event whose occurrences come from a schedule: a single fixed window,
/// or a recurrence rule set expanded on demand.
///
/// Rule expansion itself is delegated to the `rrule` crate; this type only
/// stitches the expanded instants into [`Occurrence`] values with the
/// event's duration attached.
#[derive(Debug, Clone)]
pub struct ScheduledEvent {
    id: Uuid,
    title: String,
    schedule: Schedule,
}

#[derive(Debug, Clone)]
enum Schedule {
    Once {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    Recurring {
        rrule_set: RRuleSet,
        duration: TimeDelta,
    },
}

impl ScheduledEvent {
    /// Creates a non-recurring event occupying a single window.
    ///
    /// ## Errors
    /// The window must not end before it starts.
    pub fn once(title: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::ValidationError(format!(
                "event {title:?} ends before it starts"
            )));
        }
        Ok(Self {
            id: Uuid::now_v7(),
            title: title.to_string(),
            schedule: Schedule::Once { start, end },
        })
    }

    /// Creates a recurring event from a validated rule set. Every instance
    /// runs for `duration` from its expanded start.
    ///
    /// ## Errors
    /// The duration must not be negative.
    pub fn recurring(title: &str, rrule_set: RRuleSet, duration: TimeDelta) -> EngineResult<Self> {
        if duration < TimeDelta::zero() {
            return Err(EngineError::ValidationError(format!(
                "event {title:?} has a negative duration"
            )));
        }
        Ok(Self {
            id: Uuid::now_v7(),
            title: title.to_string(),
            schedule: Schedule::Recurring {
                rrule_set,
                duration,
            },
        })
    }

    /// Creates a recurring event from rule set text, e.g.
    /// `"DTSTART:20260302T090000Z\nRRULE:FREQ=DAILY"`.
    ///
    /// ## Errors
    /// Fails on unparsable or invalid rule text, or a negative duration.
    pub fn parse_recurring(
        title: &str,
        rruleset: &str,
        duration: TimeDelta,
    ) -> EngineResult<Self> {
        let rrule_set = rruleset
            .parse::<RRuleSet>()
            .map_err(|err| EngineError::ValidationError(err.to_string()))?;
        Self::recurring(title, rrule_set, duration)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Event for ScheduledEvent {
    fn id(&self) -> Uuid {
        self.id
    }

    /// Occurrences whose end falls strictly after `after`, in start order.
    /// An occurrence already in progress at the cutoff is included.
    fn occurrences_after(&self, after: DateTime<Utc>) -> OccurrenceGen<'_> {
        tracing::trace!(event_id = %self.id, %after, "starting occurrence stream");
        match &self.schedule {
            Schedule::Once { start, end } => {
                if *end > after {
                    Box::new(std::iter::once(Occurrence::generated(
                        self.id,
                        &self.title,
                        *start,
                        *end,
                    )))
                } else {
                    Box::new(std::iter::empty())
                }
            }
            Schedule::Recurring {
                rrule_set,
                duration,
            } => Box::new(RecurringCursor::new(
                self.id,
                &self.title,
                rrule_set,
                *duration,
                after,
            )),
        }
    }
}

/// Resumable cursor over one rule set.
///
/// Expands in bounded rounds through [`RRuleSet::all`], moving the lower
/// bound past the last start it buffered. Chunking keeps unbounded rules
/// lazy; the strict-monotonicity filter makes the stream independent of
/// whether the bound is applied inclusively and collapses the duplicate
/// instants `rrule` emits when an RDATE repeats or coincides with a rule
/// instance.
struct RecurringCursor<'a> {
    event_id: Uuid,
    title: &'a str,
    set: &'a RRuleSet,
    duration: TimeDelta,
    after: DateTime<Utc>,
    bound: DateTime<Utc>,
    buffer: VecDeque<DateTime<Utc>>,
    last_start: Option<DateTime<Utc>>,
    final_chunk: bool,
}

impl<'a> RecurringCursor<'a> {
    fn new(
        event_id: Uuid,
        title: &'a str,
        set: &'a RRuleSet,
        duration: TimeDelta,
        after: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id,
            title,
            set,
            duration,
            after,
            // earliest start whose occurrence can still end after the cutoff
            bound: after - duration,
            buffer: VecDeque::new(),
            last_start: None,
            final_chunk: false,
        }
    }

    fn refill(&mut self) {
        let result = self
            .set
            .clone()
            .after(self.bound.with_timezone(&Tz::UTC))
            .all(EXPANSION_CHUNK);
        tracing::trace!(
            event_id = %self.event_id,
            fetched = result.dates.len(),
            limited = result.limited,
            "expanded recurrence chunk"
        );
        for date in result.dates {
            let start = date.with_timezone(&Utc);
            // rrule does not collapse RDATE duplicates or RDATE/rule
            // collisions, so compare against the buffer tail as well
            let newest = self.buffer.back().copied().or(self.last_start);
            if newest.is_none_or(|seen| start > seen) {
                self.buffer.push_back(start);
            }
        }
        if let Some(latest) = self.buffer.back() {
            self.bound = *latest;
        }
        self.final_chunk = !result.limited;
    }

    fn next_start(&mut self) -> Option<DateTime<Utc>> {
        loop {
            if let Some(start) = self.buffer.pop_front() {
                self.last_start = Some(start);
                return Some(start);
            }
            if self.final_chunk {
                return None;
            }
            self.refill();
        }
    }
}

impl Iterator for RecurringCursor<'_> {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Occurrence> {
        loop {
            let start = self.next_start()?;
            let end = start + self.duration;
            if end > self.after {
                return Some(Occurrence::generated(self.event_id, self.title, start, end));
            }
        }
    }
}
