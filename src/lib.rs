//! # taskband — priority-banded deferred-work dispatch
//!
//! The task-dispatch layer of an embedded network-stack runtime: a
//! fixed-capacity, priority-ordered software scheduler layered on top
//! of a preemptive real-time kernel's threads and semaphores.
//!
//! ## Overview
//!
//! Interrupt handlers and stack code defer work instead of processing
//! at interrupt level: `submit(callback, priority)` claims a slot from
//! a fixed pool, links it into a priority-sorted pending list, and
//! wakes one of three cooperating worker contexts. Each worker drains
//! the slice of the list belonging to its priority band and executes
//! callbacks synchronously, in priority order — no heap, no lost work,
//! no duplicated work.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │        Producers: ISRs · stack modules · app code       │
//! ├─────────────────────────────────────────────────────────┤
//! │              Scheduler (scheduler.rs)                   │
//! │        new() · init() · start() · submit()              │
//! ├───────────────┬──────────────────┬──────────────────────┤
//! │  Task Pool +  │   Band Router    │   Fault Path         │
//! │  Pending List │   band.rs        │   fault.rs           │
//! │  list.rs      │   ─ containing() │   ─ PoolExhausted    │
//! │  ─ insert()   │   ─ prio_range() │   ─ Unroutable…      │
//! │  ─ take/recyc.│   ─ run_prio()   │   → port.fatal()     │
//! ├───────────────┴──────────────────┴──────────────────────┤
//! │             Task Descriptor (task.rs)                   │
//! │          TaskFn · TaskSlot · free/occupied              │
//! ├─────────────────────────────────────────────────────────┤
//! │           Kernel Port (port.rs / host.rs)               │
//! │   3 worker contexts · 3 binary wake signals · global    │
//! │   critical section · idle hook · reset-on-fatal         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Priority bands
//!
//! Task priorities `0..=12` (lower = more urgent) partition into three
//! bands, each drained by one worker context: `[0, 4)` raw-receive,
//! `[4, 8)` transmit-completion, `[8, 12]` application work. Worker run
//! priorities are inverted against the ranges, so the band with the
//! most urgent task priorities preempts the others on the kernel.
//!
//! ## Memory model
//!
//! - **No heap**: all state is a fixed arena of task slots
//! - **Index links**: the pending list chains slot indices, not
//!   references
//! - **One lock**: every pool/list mutation runs inside the global
//!   critical section (`critical-section` crate), usable from interrupt
//!   and thread context alike; callbacks run outside it
//! - **Fatal, not fallible**: pool exhaustion, unroutable priorities
//!   and init failures end in the port's diagnostic-and-restart path —
//!   there is no recoverable-error channel

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Bare-metal ARM builds take their critical-section implementation from
// the cortex-m crate (single-core: interrupt masking).
#[cfg(all(target_arch = "arm", target_os = "none"))]
use cortex_m as _;

pub mod band;
pub mod config;
pub mod fault;
#[cfg(any(test, feature = "std"))]
pub mod host;
pub mod list;
pub mod port;
pub mod scheduler;
pub mod task;

pub use band::Band;
pub use fault::Fault;
#[cfg(any(test, feature = "std"))]
pub use host::HostPort;
pub use list::PoolStats;
pub use port::KernelPort;
pub use scheduler::Scheduler;
pub use task::TaskFn;
