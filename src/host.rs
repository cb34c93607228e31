//! # Hosted Reference Port
//!
//! A [`KernelPort`] backed by the operating system: worker contexts are
//! std threads, wake signals are condvar-guarded flags with the same
//! saturating "at least one give is pending" semantics a binary
//! semaphore has on a real kernel. Used by the test suite, and by
//! embedders running the dispatch layer in simulation (`std` feature).
//!
//! Host limitations, by design:
//! - Thread run priorities cannot be set portably, so
//!   [`Band::run_prio`] is not enforced here; cross-band preemption
//!   order is only guaranteed on a real RTOS port.
//! - "Full system restart" maps to aborting the process.

use std::sync::{Condvar, Mutex, PoisonError};
use std::thread;
use std::{eprintln, format};

use crate::band::Band;
use crate::config::WORKER_STACK_BYTES;
use crate::fault::Fault;
use crate::port::KernelPort;
use crate::scheduler::Scheduler;

/// Host threads need far more stack than the MCU-sized hint.
const HOST_STACK_FLOOR: usize = 256 * 1024;

// ---------------------------------------------------------------------------
// Wake signal
// ---------------------------------------------------------------------------

/// One binary wake signal. A give while already pending saturates; a
/// take consumes the single pending give.
struct WakeSignal {
    pending: Mutex<bool>,
    bell: Condvar,
}

impl WakeSignal {
    const fn new() -> Self {
        Self {
            pending: Mutex::new(false),
            bell: Condvar::new(),
        }
    }

    fn give(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        *pending = true;
        self.bell.notify_one();
    }

    fn take(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        while !*pending {
            pending = self
                .bell
                .wait(pending)
                .unwrap_or_else(PoisonError::into_inner);
        }
        *pending = false;
    }
}

// ---------------------------------------------------------------------------
// Host port
// ---------------------------------------------------------------------------

/// Worker-context runtime backed by std threads.
pub struct HostPort {
    signals: [WakeSignal; Band::COUNT],
}

impl HostPort {
    pub const fn new() -> Self {
        Self {
            signals: [WakeSignal::new(), WakeSignal::new(), WakeSignal::new()],
        }
    }

    fn signal(&self, band: Band) -> &WakeSignal {
        &self.signals[band.index()]
    }
}

impl Default for HostPort {
    fn default() -> Self {
        Self::new()
    }
}

impl KernelPort for HostPort {
    /// Spawn one named worker thread per band. The threads are detached;
    /// they live for the rest of the process, blocked on their signal
    /// whenever their band is drained.
    fn init<const N: usize>(&self, sched: &'static Scheduler<Self, N>) -> Result<(), Fault> {
        for band in Band::ALL {
            thread::Builder::new()
                .name(format!("taskband-{}", band.name()))
                .stack_size(WORKER_STACK_BYTES.max(HOST_STACK_FLOOR))
                .spawn(move || {
                    sched.run_worker(band);
                })
                .map_err(|_| Fault::WorkerCreation)?;
        }
        Ok(())
    }

    fn run(&self) -> ! {
        // The workers are already live OS threads; the embedding thread
        // is the closest thing the host has to an idle context.
        loop {
            self.idle();
            thread::park();
        }
    }

    fn wake(&self, band: Band) {
        self.signal(band).give();
    }

    fn wait(&self, band: Band) {
        self.signal(band).take();
    }

    fn dispatched(&self, _band: Band) {}

    fn fatal(&self, fault: Fault) -> ! {
        eprintln!("taskband fatal: {fault}");
        std::process::abort()
    }
}

// ---------------------------------------------------------------------------
// End-to-end tests (host-only)
// ---------------------------------------------------------------------------
