//! # Kernel Port
//!
//! The boundary between the dispatch core and the preemptive real-time
//! kernel hosting it. The kernel supplies three independently
//! schedulable worker contexts, three binary wake signals, one global
//! mutual-exclusion primitive (provided separately, through the
//! `critical-section` facade) and an idle hook; this trait is the whole
//! of what the core asks of it.
//!
//! Ports are dependency-injected into [`Scheduler`]; the core never
//! reaches for an implicit global, which keeps it testable off-target.
//! The crate ships [`HostPort`](crate::host::HostPort) for hosted
//! builds; an RTOS port maps these methods onto its own thread and
//! semaphore primitives.

use crate::band::Band;
use crate::fault::Fault;
use crate::scheduler::Scheduler;

/// Interface the worker-context runtime must provide.
pub trait KernelPort: Sized {
    /// Allocate the three wake signals and the three worker contexts.
    ///
    /// Each worker context must run at [`Band::run_prio`] with at least
    /// [`WORKER_STACK_BYTES`](crate::config::WORKER_STACK_BYTES) of
    /// stack, and must execute [`Scheduler::run_worker`] for its band.
    /// Any failure here is reported synchronously and is fatal; the
    /// caller does not continue past it.
    fn init<const N: usize>(&self, sched: &'static Scheduler<Self, N>) -> Result<(), Fault>;

    /// Hand control to the kernel's own scheduler. Does not return under
    /// correct operation.
    fn run(&self) -> !;

    /// Give `band`'s binary wake signal.
    ///
    /// Must be safe from interrupt context, and must request an
    /// immediate reschedule when the woken worker outranks the calling
    /// context. A give while the signal is already pending saturates:
    /// the signal records "at least one submission", never a count.
    fn wake(&self, band: Band);

    /// Block the calling worker until `band`'s wake signal is given,
    /// with no timeout. Consumes the pending give.
    fn wait(&self, band: Band);

    /// Per-band diagnostic side effect, emitted once per dispatched
    /// task. Purely observational (an LED toggle, a debug pin, a log
    /// line); must not touch scheduler state.
    fn dispatched(&self, band: Band);

    /// Kernel idle hook: invoked when no worker context is runnable.
    /// Purely observational.
    fn idle(&self) {}

    /// Emit a distinguishable diagnostic, then perform a full system
    /// restart. Never returns.
    ///
    /// This is the single response to a violated scheduler invariant —
    /// a crash-and-restart policy, not an exception channel. Nothing in
    /// the core catches it or continues past it.
    fn fatal(&self, fault: Fault) -> !;
}
