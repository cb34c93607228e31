//! # Task Descriptor
//!
//! The unit of deferred work. A descriptor holds one pending task's
//! callback, its priority, and its link into the pending list. All
//! descriptors live in the fixed-size pool owned by
//! [`PendingList`](crate::list); none are ever allocated.
//!
//! ## Lifecycle
//!
//! ```text
//!   ┌──────┐   claim() on submit    ┌──────────┐
//!   │ Free │ ─────────────────────► │ Occupied │
//!   └──────┘                        └──────────┘
//!      ▲                                  │
//!      │     release() after the          │
//!      └────── callback returns ──────────┘
//! ```
//!
//! A slot is free iff `work` is `None`. It is occupied from the moment a
//! submission claims it until its callback has finished executing; a
//! worker that pulls it off the pending list keeps it occupied (unlinked)
//! for the duration of the callback.

/// A deferred unit of work: zero arguments, zero return.
///
/// Tasks receive no data and produce none; anything a callback needs, it
/// reaches through its own module's state.
pub type TaskFn = fn();

// ---------------------------------------------------------------------------
// Task slot
// ---------------------------------------------------------------------------

/// One slot of the task pool.
///
/// Links are slot indices rather than references, which keeps the pending
/// list free of aliasing hazards and trivially bounded by the pool.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TaskSlot {
    /// The deferred callback; `None` marks the slot free.
    pub(crate) work: Option<TaskFn>,
    /// Task priority, lower = more urgent. Meaningless while free.
    pub(crate) prio: u8,
    /// Index of the next slot in ascending-priority order, if linked.
    pub(crate) next: Option<u8>,
}

impl TaskSlot {
    /// An unoccupied slot. Initializes the pool array.
    pub(crate) const FREE: Self = Self {
        work: None,
        prio: 0,
        next: None,
    };

    #[inline]
    pub(crate) fn is_free(&self) -> bool {
        self.work.is_none()
    }

    /// Occupy the slot with a submission. The caller links it afterwards.
    pub(crate) fn claim(&mut self, work: TaskFn, prio: u8) {
        self.work = Some(work);
        self.prio = prio;
        self.next = None;
    }

    /// Return the slot to the free pool: clear callback, priority, link.
    pub(crate) fn release(&mut self) {
        *self = Self::FREE;
    }
}

// ---------------------------------------------------------------------------
// Unit tests (host-only)
// ---------------------------------------------------------------------------
