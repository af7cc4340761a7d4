//! Substitution of persisted occurrences for their generated candidates.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, trace, warn};

use almanac_store::model::{Occurrence, OccurrenceKey};

/// Index of persisted occurrences by natural key, scoped to one merge run.
///
/// Built once from a store snapshot and discarded with the run. Each
/// persisted record stands in for at most one generated candidate;
/// [`OccurrenceReplacer::replace`] consumes the entry it returns.
#[derive(Debug)]
pub struct OccurrenceReplacer {
    lookup: HashMap<OccurrenceKey, Occurrence>,
}

impl OccurrenceReplacer {
    /// Builds the index from a snapshot of persisted occurrences.
    ///
    /// Two records sharing a natural key indicate a dirty snapshot; the
    /// later record wins and the collision is logged rather than failing
    /// the whole run.
    #[must_use]
    pub fn new(persisted: Vec<Occurrence>) -> Self {
        let mut lookup = HashMap::with_capacity(persisted.len());
        for occurrence in persisted {
            if let Some(displaced) = lookup.insert(occurrence.key(), occurrence) {
                warn!(key = %displaced.key(), "duplicate persisted occurrence, keeping the later record");
            }
        }
        debug!(persisted = lookup.len(), "replacer ready");
        Self { lookup }
    }

    /// Swaps `candidate` for its persisted record, if one exists.
    ///
    /// A hit consumes the entry, so a later candidate with the same key
    /// passes through untouched. The returned record carries every user
    /// edit including cancellation; cancelled occurrences are emitted on
    /// purpose and consumers decide how to render them.
    #[must_use]
    pub fn replace(&mut self, candidate: Occurrence) -> Occurrence {
        match self.lookup.remove(&candidate.key()) {
            Some(persisted) => {
                trace!(key = %persisted.key(), "substituted persisted occurrence");
                persisted
            }
            None => candidate,
        }
    }

    /// Non-consuming test for a persisted record matching `candidate`.
    #[must_use]
    pub fn has_persisted(&self, candidate: &Occurrence) -> bool {
        self.lookup.contains_key(&candidate.key())
    }

    /// Records not yet consumed by [`OccurrenceReplacer::replace`] whose
    /// current window overlaps the period, cancelled ones excluded, ordered
    /// by current start.
    ///
    /// This recovers occurrences rescheduled into the period from an
    /// original slot outside it; the generators will never produce those
    /// there. Does not mutate the index.
    #[must_use]
    pub fn remaining_in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<Occurrence> {
        let mut recovered: Vec<Occurrence> = self
            .lookup
            .values()
            .filter(|occ| occ.overlaps(start, end) && !occ.cancelled)
            .cloned()
            .collect();
        recovered.sort_by_key(|occ| occ.start);
        recovered
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}
