//! # Fault Taxonomy
//!
//! Every fault in this layer is fatal: there is no recoverable-error
//! channel, no retry and no degraded mode. A violated scheduler
//! invariant indicates systemic overload or a programming defect that is
//! not safely continuable on constrained hardware, so every [`Fault`]
//! funnels into [`KernelPort::fatal`](crate::port::KernelPort::fatal) —
//! a diagnostic followed by a full system restart.
//!
//! The type exists so the condition travels as a distinct, visible value
//! on its way to the restart, not so callers can catch it.

use thiserror::Error;

/// A scheduler invariant that could not be upheld.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    /// A wake signal or the global lock could not be created during
    /// initialization.
    #[error("wake signal allocation failed")]
    SignalCreation,

    /// A worker context could not be created during initialization.
    #[error("worker context allocation failed")]
    WorkerCreation,

    /// A submission found no free task slot: producers have overrun the
    /// workers' drain rate and backlog is about to be lost.
    #[error("task pool exhausted")]
    PoolExhausted,

    /// A submitted priority lies outside every configured band.
    #[error("priority {prio} outside every band")]
    UnroutablePriority {
        /// The offending priority value.
        prio: u8,
    },
}
