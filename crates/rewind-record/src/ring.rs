//! Fixed-capacity FIFO history ring.
//!
//! [`HistoryRing`] stores the most recent `capacity` entries of a
//! history stream. A full ring is normal steady state: recording past
//! capacity evicts the oldest entry, so the tail of history is always
//! available for rewind.

use std::collections::VecDeque;

use rewind_core::StoreError;

/// A bounded, time-ordered ring of history entries, newest last.
///
/// Single-owner, single-threaded. Index 0 is the oldest retained entry
/// and [`latest_index`](HistoryRing::latest_index) the newest; indices
/// shift as old entries are evicted, so a cursor into the ring is only
/// meaningful while no further entries are recorded — the phase machine
/// guarantees that by never recording while a rewind is in progress.
#[derive(Debug)]
pub struct HistoryRing<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> HistoryRing<T> {
    /// Create an empty ring with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero — a zero-capacity history can never
    /// hold anything to rewind to.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "HistoryRing capacity must be > 0");
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest first when full.
    ///
    /// No error conditions: eviction is the designed steady state.
    pub fn record(&mut self, entry: T) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Remove all entries. Called when a recording phase (re)starts.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Index of the newest entry, or `None` if the ring is empty.
    pub fn latest_index(&self) -> Option<usize> {
        self.entries.len().checked_sub(1)
    }

    /// Random access by position, oldest at 0.
    ///
    /// Out-of-range access is a programming error and is surfaced as
    /// [`StoreError::IndexOutOfRange`], never clamped.
    pub fn at(&self, index: usize) -> Result<&T, StoreError> {
        self.entries.get(index).ok_or(StoreError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ring is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate entries oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_ring_is_empty() {
        let ring: HistoryRing<u32> = HistoryRing::new(4);
        assert!(ring.is_empty());
        assert_eq!(ring.len(), 0);
        assert_eq!(ring.capacity(), 4);
        assert_eq!(ring.latest_index(), None);
    }

    #[test]
    #[should_panic(expected = "capacity must be > 0")]
    fn zero_capacity_panics() {
        let _ = HistoryRing::<u32>::new(0);
    }

    #[test]
    fn record_and_random_access() {
        let mut ring = HistoryRing::new(4);
        ring.record(10);
        ring.record(20);
        assert_eq!(ring.latest_index(), Some(1));
        assert_eq!(*ring.at(0).unwrap(), 10);
        assert_eq!(*ring.at(1).unwrap(), 20);
    }

    #[test]
    fn out_of_range_access_is_an_error() {
        let mut ring = HistoryRing::new(4);
        ring.record(1);
        match ring.at(3) {
            Err(StoreError::IndexOutOfRange { index: 3, len: 1 }) => {}
            other => panic!("expected IndexOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn eviction_is_strict_fifo() {
        // Capacity 3; record t=0,1,2,3 -> retains 1,2,3.
        let mut ring = HistoryRing::new(3);
        for t in 0..=3 {
            ring.record(t);
        }
        assert_eq!(ring.len(), 3);
        assert_eq!(*ring.at(0).unwrap(), 1);
        assert_eq!(*ring.at(1).unwrap(), 2);
        assert_eq!(*ring.at(2).unwrap(), 3);
    }

    #[test]
    fn clear_empties_the_ring() {
        let mut ring = HistoryRing::new(2);
        ring.record(1);
        ring.record(2);
        ring.clear();
        assert!(ring.is_empty());
        assert_eq!(ring.latest_index(), None);
    }

    #[test]
    fn iter_runs_oldest_to_newest() {
        let mut ring = HistoryRing::new(3);
        for t in 0..5 {
            ring.record(t);
        }
        let collected: Vec<_> = ring.iter().copied().collect();
        assert_eq!(collected, vec![2, 3, 4]);
    }

    proptest! {
        /// FIFO eviction law: for any record sequence, the ring never
        /// exceeds capacity and always retains the most recent entries.
        #[test]
        fn fifo_eviction_law(
            capacity in 1usize..32,
            values in proptest::collection::vec(any::<u64>(), 0..200),
        ) {
            let mut ring = HistoryRing::new(capacity);
            for &v in &values {
                ring.record(v);
            }
            prop_assert!(ring.len() <= capacity);
            prop_assert_eq!(ring.len(), values.len().min(capacity));

            let expected_tail: Vec<u64> = values
                .iter()
                .copied()
                .skip(values.len().saturating_sub(capacity))
                .collect();
            let actual: Vec<u64> = ring.iter().copied().collect();
            prop_assert_eq!(actual, expected_tail);
        }
    }
}
