//! # Scheduler
//!
//! Ties the task pool, the band router and the kernel port together
//! into the wake/dispatch/retire protocol:
//!
//! ```text
//!  producer (ISR, stack, app)          worker context (per band)
//!  ──────────────────────────          ─────────────────────────
//!  submit(work, prio)                  loop {
//!    ├─ route prio → band                 wait(band)          ◄──┐
//!    ├─ lock { claim slot,                loop {                 │
//!    │         link in prio order }         lock { unlink }      │
//!    └─ wake(band) ────────────────────►    run callback         │
//!                                           lock { recycle }     │
//!                                           dispatched(band)     │
//!                                         } until band drained ──┘
//!                                      }
//! ```
//!
//! All pool and list mutation happens inside the global critical
//! section (`critical_section::with`), the one mutual-exclusion
//! primitive usable from interrupt and thread context alike. Callbacks
//! run outside it, so a callback may itself submit further work.
//!
//! `submit` never blocks. Its only failure modes — pool exhaustion and
//! an unroutable priority — are invariant violations and end in the
//! port's fatal restart path, never in a returned error.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::band::Band;
use crate::config::TASK_POOL_DEPTH;
use crate::fault::Fault;
use crate::list::{PendingList, PoolStats};
use crate::port::KernelPort;
use crate::task::TaskFn;

// ---------------------------------------------------------------------------
// Scheduler
// ---------------------------------------------------------------------------

/// The task-dispatch layer: a fixed pool of `N` task slots drained by
/// three priority-banded worker contexts supplied by the port `P`.
///
/// Construction is `const`, so the scheduler normally lives in a
/// `static` and is shared by reference between producers and workers:
///
/// ```ignore
/// static SCHED: Scheduler<MyPort> = Scheduler::new(MyPort::new());
///
/// fn main() -> ! {
///     SCHED.init();
///     SCHED.start()
/// }
///
/// fn radio_isr() {
///     SCHED.submit(handle_frame, 1);
/// }
/// ```
pub struct Scheduler<P: KernelPort, const N: usize = TASK_POOL_DEPTH> {
    port: P,
    pending: Mutex<RefCell<PendingList<N>>>,
}

impl<P: KernelPort, const N: usize> Scheduler<P, N> {
    /// Create a scheduler with an empty pool around the given port.
    pub const fn new(port: P) -> Self {
        Self {
            port,
            pending: Mutex::new(RefCell::new(PendingList::new())),
        }
    }

    /// The injected kernel port.
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Allocate the port's wake signals and worker contexts. Fatal on
    /// any allocation failure.
    pub fn init(&'static self) {
        if let Err(fault) = self.port.init(self) {
            self.port.fatal(fault);
        }
    }

    /// Hand control to the kernel's scheduler. Does not return under
    /// correct operation.
    pub fn start(&'static self) -> ! {
        self.port.run()
    }

    /// Defer `work` at `prio`.
    ///
    /// Callable from any context, including interrupt handlers; never
    /// blocks. Claims a free slot, links it into the pending list in
    /// ascending-priority order, then gives the wake signal of the band
    /// owning `prio` (and only that band's). A full pool or a priority
    /// outside every band is fatal.
    pub fn submit(&self, work: TaskFn, prio: u8) {
        let band = match Band::containing(prio) {
            Some(band) => band,
            None => self.port.fatal(Fault::UnroutablePriority { prio }),
        };

        let queued = critical_section::with(|cs| {
            self.pending.borrow_ref_mut(cs).insert(work, prio)
        });
        if let Err(fault) = queued {
            self.port.fatal(fault);
        }

        self.port.wake(band);
    }

    /// Dispatch at most one pending task from `band`'s priority range:
    /// unlink the head-most eligible task, execute its callback
    /// synchronously on the calling context, recycle its slot, emit the
    /// band's diagnostic. Returns whether a task was dispatched; `false`
    /// means the band had nothing pending (e.g. a stale wake).
    pub fn service_band(&self, band: Band) -> bool {
        let pulled = critical_section::with(|cs| {
            self.pending.borrow_ref_mut(cs).take_in_range(band.prio_range())
        });
        match pulled {
            Some(task) => {
                // outside the critical section: the callback may submit
                (task.work)();
                critical_section::with(|cs| {
                    self.pending.borrow_ref_mut(cs).recycle(task.slot)
                });
                self.port.dispatched(band);
                true
            }
            None => false,
        }
    }

    /// Worker loop for one band. Runs on the worker context the port
    /// created for `band`; never returns.
    ///
    /// The wake signal is binary, so a single wake may stand for a burst
    /// of submissions: the worker re-checks its band until it is empty
    /// before blocking again, leaving nothing stranded.
    pub fn run_worker(&self, band: Band) -> ! {
        loop {
            self.port.wait(band);
            while self.service_band(band) {}
        }
    }

    /// Occupancy counters (current and historical maximum).
    /// Observation-only.
    pub fn stats(&self) -> PoolStats {
        critical_section::with(|cs| self.pending.borrow_ref(cs).stats())
    }
}

// ---------------------------------------------------------------------------
// Unit tests (host-only)
// ---------------------------------------------------------------------------
