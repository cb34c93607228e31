//! # Task Pool and Pending List
//!
//! The only storage for deferred work: a fixed arena of `N` task slots
//! plus a singly index-linked, ascending-priority view over the occupied
//! ones. The pending list is the single shared mutable structure in the
//! system; callers serialize every operation here under the global
//! critical section (see [`Scheduler`](crate::scheduler::Scheduler)).
//!
//! ## Ordering
//!
//! Insertion walks from the head and places the new task before the
//! first node whose priority is greater than or equal to its own. Among
//! equal priorities the most recent submission therefore runs first
//! (LIFO within a tier); dispatch order across distinct priorities is
//! strictly ascending. Extraction removes the head-most node inside the
//! queried band's range, skipping nodes that belong to other bands.
//!
//! ## Invariants
//!
//! - Occupied slots never exceed `N`; a submission that finds no free
//!   slot reports [`Fault::PoolExhausted`] with no other state change.
//! - The linked chain plus any slots currently held by executing workers
//!   equals exactly the set of occupied slots.

use core::ops::Range;

use crate::fault::Fault;
use crate::task::{TaskFn, TaskSlot};

// ---------------------------------------------------------------------------
// Diagnostic counters
// ---------------------------------------------------------------------------

/// Occupancy counters. Observation-only; never affect control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    /// Slots currently occupied (queued or executing).
    pub occupied: usize,
    /// Historical maximum of `occupied` since construction.
    pub peak: usize,
}

// ---------------------------------------------------------------------------
// Pending list
// ---------------------------------------------------------------------------

/// A task unlinked from the pending list, owned by one worker until it
/// is recycled. The slot stays occupied while the callback runs.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Pulled {
    /// Pool index to hand back to [`PendingList::recycle`].
    pub(crate) slot: u8,
    /// The callback to execute.
    pub(crate) work: TaskFn,
    /// Priority the task was submitted with.
    #[allow(dead_code)] // diagnostic value; asserted on in tests
    pub(crate) prio: u8,
}

/// Fixed-capacity task pool with a priority-ordered pending chain.
pub(crate) struct PendingList<const N: usize> {
    slots: [TaskSlot; N],
    /// Most urgent pending task, or `None` when the list is empty.
    head: Option<u8>,
    stats: PoolStats,
}

impl<const N: usize> PendingList<N> {
    pub(crate) const fn new() -> Self {
        assert!(N > 0 && N <= 256, "pool depth must fit u8 index links");
        Self {
            slots: [TaskSlot::FREE; N],
            head: None,
            stats: PoolStats {
                occupied: 0,
                peak: 0,
            },
        }
    }

    /// Claim the first free slot and link it in ascending-priority order.
    ///
    /// The walk stops at the first node with `prio >= ` the new task's
    /// priority, so a later submission lands ahead of earlier ones of
    /// equal priority.
    pub(crate) fn insert(&mut self, work: TaskFn, prio: u8) -> Result<(), Fault> {
        let slot = match self.slots.iter().position(TaskSlot::is_free) {
            Some(idx) => idx as u8,
            None => return Err(Fault::PoolExhausted),
        };
        self.slots[slot as usize].claim(work, prio);

        // find the insertion point
        let mut prev: Option<u8> = None;
        let mut cursor = self.head;
        while let Some(cur) = cursor {
            if self.slots[cur as usize].prio >= prio {
                break;
            }
            prev = cursor;
            cursor = self.slots[cur as usize].next;
        }

        // splice in before `cursor`
        self.slots[slot as usize].next = cursor;
        match prev {
            None => self.head = Some(slot),
            Some(p) => self.slots[p as usize].next = Some(slot),
        }

        self.stats.occupied += 1;
        if self.stats.occupied > self.stats.peak {
            self.stats.peak = self.stats.occupied;
        }
        Ok(())
    }

    /// Unlink and return the head-most task whose priority lies in
    /// `range`, or `None` if no pending task matches. The returned slot
    /// remains occupied until [`recycle`](Self::recycle).
    pub(crate) fn take_in_range(&mut self, range: Range<u8>) -> Option<Pulled> {
        let mut prev: Option<u8> = None;
        let mut cursor = self.head;
        while let Some(cur) = cursor {
            let node = self.slots[cur as usize];
            if range.contains(&node.prio) {
                if let Some(work) = node.work {
                    match prev {
                        None => self.head = node.next,
                        Some(p) => self.slots[p as usize].next = node.next,
                    }
                    self.slots[cur as usize].next = None;
                    return Some(Pulled {
                        slot: cur,
                        work,
                        prio: node.prio,
                    });
                }
            }
            prev = cursor;
            cursor = node.next;
        }
        None
    }

    /// Return a slot to the free pool after its callback has run.
    pub(crate) fn recycle(&mut self, slot: u8) {
        self.slots[slot as usize].release();
        self.stats.occupied -= 1;
    }

    pub(crate) fn stats(&self) -> PoolStats {
        self.stats
    }
}

// ---------------------------------------------------------------------------
// Unit tests (host-only)
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    fn noop() {}

    /// The whole legal priority domain, as a take range.
    const ANY: Range<u8> = 0..u8::MAX;

    #[test]
    fn test_insert_orders_by_ascending_priority() {
        let mut list: PendingList<8> = PendingList::new();
        for prio in [9, 3, 11, 6, 0] {
            list.insert(noop, prio).unwrap();
        }

        let mut drained = Vec::new();
        while let Some(pulled) = list.take_in_range(ANY) {
            drained.push(pulled.prio);
            list.recycle(pulled.slot);
        }
        assert_eq!(drained, [0, 3, 6, 9, 11]);
    }

    #[test]
    fn test_equal_priority_is_lifo() {
        let mut list: PendingList<4> = PendingList::new();
        // Submission order claims slots 0, 1, 2 in turn; the later
        // submission of an equal priority must come off the list first.
        list.insert(noop, 5).unwrap();
        list.insert(noop, 5).unwrap();
        list.insert(noop, 5).unwrap();

        let order: [u8; 3] = core::array::from_fn(|_| {
            let pulled = list.take_in_range(ANY).unwrap();
            list.recycle(pulled.slot);
            pulled.slot
        });
        assert_eq!(order, [2, 1, 0]);
    }

    #[test]
    fn test_equal_priority_newcomer_goes_ahead_of_tier_not_ahead_of_urgent() {
        let mut list: PendingList<4> = PendingList::new();
        list.insert(noop, 2).unwrap(); // slot 0
        list.insert(noop, 5).unwrap(); // slot 1
        list.insert(noop, 5).unwrap(); // slot 2: ahead of slot 1, behind slot 0

        let first = list.take_in_range(ANY).unwrap();
        assert_eq!((first.slot, first.prio), (0, 2));
        list.recycle(first.slot);

        let second = list.take_in_range(ANY).unwrap();
        assert_eq!((second.slot, second.prio), (2, 5));
    }

    #[test]
    fn test_overflow_reports_exhaustion_and_changes_nothing() {
        let mut list: PendingList<2> = PendingList::new();
        list.insert(noop, 1).unwrap();
        list.insert(noop, 2).unwrap();

        assert_eq!(list.insert(noop, 3), Err(Fault::PoolExhausted));

        // no state change: both originals still drain, in order
        let stats = list.stats();
        assert_eq!((stats.occupied, stats.peak), (2, 2));
        assert_eq!(list.take_in_range(ANY).unwrap().prio, 1);
        assert_eq!(list.take_in_range(ANY).unwrap().prio, 2);
    }

    #[test]
    fn test_take_skips_nodes_of_other_bands() {
        let mut list: PendingList<4> = PendingList::new();
        list.insert(noop, 1).unwrap();
        list.insert(noop, 5).unwrap();
        list.insert(noop, 9).unwrap();

        // the app-range query must walk past the more urgent 1 and 5
        let pulled = list.take_in_range(8..13).unwrap();
        assert_eq!(pulled.prio, 9);
        list.recycle(pulled.slot);

        // the remaining chain is intact
        assert_eq!(list.take_in_range(ANY).unwrap().prio, 1);
        assert_eq!(list.take_in_range(ANY).unwrap().prio, 5);
    }

    #[test]
    fn test_take_with_no_match_returns_none() {
        let mut list: PendingList<4> = PendingList::new();
        assert!(list.take_in_range(ANY).is_none());

        list.insert(noop, 9).unwrap();
        assert!(list.take_in_range(0..4).is_none());
        // the miss must not disturb the pending task
        assert_eq!(list.take_in_range(8..13).unwrap().prio, 9);
    }

    #[test]
    fn test_slot_stays_occupied_until_recycled() {
        let mut list: PendingList<1> = PendingList::new();
        list.insert(noop, 0).unwrap();

        let pulled = list.take_in_range(ANY).unwrap();
        // unlinked but still occupied: the pool is full for producers
        assert_eq!(list.stats().occupied, 1);
        assert_eq!(list.insert(noop, 0), Err(Fault::PoolExhausted));

        list.recycle(pulled.slot);
        assert_eq!(list.stats().occupied, 0);
        list.insert(noop, 0).unwrap();
        assert_eq!(list.take_in_range(ANY).unwrap().slot, pulled.slot);
    }

    #[test]
    fn test_peak_tracks_historical_maximum() {
        let mut list: PendingList<4> = PendingList::new();
        list.insert(noop, 1).unwrap();
        list.insert(noop, 2).unwrap();
        list.insert(noop, 3).unwrap();

        let pulled = list.take_in_range(ANY).unwrap();
        list.recycle(pulled.slot);
        let slot = list.take_in_range(ANY).unwrap().slot;
        list.recycle(slot);

        let stats = list.stats();
        assert_eq!((stats.occupied, stats.peak), (1, 3));
    }

    #[test]
    fn test_interleaved_stress_always_drains_most_urgent() {
        // Deterministic xorshift interleaving of submissions and drains
        // against a multiset model of queued priorities.
        let mut list: PendingList<16> = PendingList::new();
        let mut model: Vec<u8> = Vec::new();
        let mut seed: u32 = 0x5eed_cafe;
        let mut rand = move || {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            seed
        };
        let bands: [Range<u8>; 3] = [0..4, 4..8, 8..13];
        let mut inserted = 0usize;
        let mut drained = 0usize;

        for _ in 0..2000 {
            let r = rand();
            if r % 3 != 0 && model.len() < 16 {
                let prio = ((r >> 8) % 13) as u8;
                list.insert(noop, prio).unwrap();
                model.push(prio);
                inserted += 1;
            } else {
                let range = bands[(r >> 16) as usize % 3].clone();
                match list.take_in_range(range.clone()) {
                    Some(pulled) => {
                        let expected = model
                            .iter()
                            .copied()
                            .filter(|p| range.contains(p))
                            .min()
                            .unwrap();
                        assert_eq!(pulled.prio, expected);
                        let at = model.iter().position(|p| *p == expected).unwrap();
                        model.swap_remove(at);
                        list.recycle(pulled.slot);
                        drained += 1;
                    }
                    None => {
                        assert!(!model.iter().any(|p| range.contains(p)));
                    }
                }
            }
            assert_eq!(list.stats().occupied, model.len());
        }

        // empty the list and balance the books
        while let Some(pulled) = list.take_in_range(ANY) {
            list.recycle(pulled.slot);
            drained += 1;
        }
        assert_eq!(inserted, drained);
        assert_eq!(list.stats().occupied, 0);
    }
}
