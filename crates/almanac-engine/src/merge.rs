//! Continuous merging of per-event occurrence streams against persisted
//! records.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use almanac_store::model::{Event, Occurrence, OccurrenceGen};
use almanac_store::store::OccurrenceStore;

use crate::error::EngineResult;
use crate::replacer::OccurrenceReplacer;

/// An ordered working set of events queried as a group.
///
/// The list is stateless across queries; every call to
/// [`EventList::occurrences_after`] builds a fresh merge run. List order
/// doubles as the tie-break: when two events generate occurrences with the
/// same start, the earlier-listed event's occurrence is emitted first.
pub struct EventList<'a> {
    events: Vec<&'a dyn Event>,
}

impl<'a> EventList<'a> {
    #[must_use]
    pub fn new(events: Vec<&'a dyn Event>) -> Self {
        Self { events }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Merged stream of every member's occurrences from `after` onward,
    /// persisted records substituted for their generated candidates.
    ///
    /// Queries `store` exactly once, up front, for the persisted records of
    /// the whole membership; that snapshot belongs to this run. The stream
    /// is lazy and single-pass: each `next` advances exactly one underlying
    /// generator. With an infinite member the stream is infinite, and
    /// bounding it is the caller's business.
    ///
    /// Ordering: non-decreasing in *generated* start. A rescheduled
    /// persisted record is emitted where its original slot falls, not where
    /// its new window lies; use
    /// [`OccurrenceReplacer::remaining_in_range`] on the run's replacer to
    /// recover records moved into a period from outside it.
    ///
    /// ## Errors
    /// Fails when the snapshot query fails; no stream exists in that case.
    pub fn occurrences_after(
        &self,
        store: &dyn OccurrenceStore,
        after: DateTime<Utc>,
    ) -> EngineResult<MergedOccurrences<'a>> {
        let event_ids: Vec<Uuid> = self.events.iter().map(|event| event.id()).collect();
        let replacer = OccurrenceReplacer::new(store.for_events(&event_ids)?);

        let mut sources: Vec<OccurrenceGen<'a>> = Vec::with_capacity(self.events.len());
        let mut heap = BinaryHeap::with_capacity(self.events.len());
        for event in &self.events {
            let mut generator = event.occurrences_after(after);
            // events with nothing to produce are dropped on the spot
            if let Some(candidate) = generator.next() {
                let source = sources.len();
                sources.push(generator);
                heap.push(Reverse(HeapEntry { candidate, source }));
            }
        }

        debug!(
            events = self.events.len(),
            live = sources.len(),
            persisted = replacer.len(),
            %after,
            "merge run started"
        );

        Ok(MergedOccurrences {
            sources,
            heap,
            replacer,
        })
    }

    /// [`EventList::occurrences_after`] from the current instant.
    ///
    /// ## Errors
    /// Same failure mode as [`EventList::occurrences_after`].
    pub fn upcoming(&self, store: &dyn OccurrenceStore) -> EngineResult<MergedOccurrences<'a>> {
        self.occurrences_after(store, Utc::now())
    }
}

/// One in-flight candidate and the source that produced it.
///
/// Ordered by candidate start, then source registration index; wrapped in
/// [`Reverse`] so the max-heap behaves as a min-heap. At most one entry per
/// source is in flight, which makes the pair a total order over live
/// entries.
struct HeapEntry {
    candidate: Occurrence,
    source: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.candidate.start == other.candidate.start && self.source == other.source
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.candidate
            .start
            .cmp(&other.candidate.start)
            .then_with(|| self.source.cmp(&other.source))
    }
}

/// Lazy merged stream over one run, obtained from
/// [`EventList::occurrences_after`]. Single-pass; drop it to abandon the
/// run.
pub struct MergedOccurrences<'a> {
    sources: Vec<OccurrenceGen<'a>>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    replacer: OccurrenceReplacer,
}

impl MergedOccurrences<'_> {
    /// The run's replacer, for window recovery alongside the stream.
    #[must_use]
    pub fn replacer(&self) -> &OccurrenceReplacer {
        &self.replacer
    }
}

impl Iterator for MergedOccurrences<'_> {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Occurrence> {
        let Reverse(entry) = self.heap.pop()?;
        // refill from the source that just went ahead; exhausted sources
        // simply never re-enter the heap
        if let Some(successor) = self.sources[entry.source].next() {
            self.heap.push(Reverse(HeapEntry {
                candidate: successor,
                source: entry.source,
            }));
        }
        Some(self.replacer.replace(entry.candidate))
    }
}
