//! # Configuration
//!
//! Compile-time constants governing the dispatch layer. All limits are
//! fixed at compile time — no dynamic allocation.

/// Default number of slots in the task pool. Bounds the backlog of
/// deferred work; submitting into a full pool is a fatal condition,
/// because it means producers have overrun the workers' drain rate.
pub const TASK_POOL_DEPTH: usize = 10;

/// Highest legal task priority. The legal domain is `0..=MAX_PRIORITY`,
/// lower numeric value = more urgent.
pub const MAX_PRIORITY: u8 = 12;

/// Exclusive upper bound of the raw-receive band: priorities `[0, 4)`.
pub const RX_PRIO_LIMIT: u8 = 4;

/// Exclusive upper bound of the transmit-completion band: `[4, 8)`.
/// The application band covers the rest, `[8, MAX_PRIORITY]`.
pub const TXDONE_PRIO_LIMIT: u8 = 8;

/// Kernel run priority of the raw-receive worker (higher = preempts).
///
/// Run priorities are inverted relative to the task-priority ranges:
/// the worker draining the most urgent task priorities gets the highest
/// kernel run priority, so urgent deferred work preempts less urgent
/// deferred work across bands, not only within the pending list.
pub const RX_RUN_PRIO: u8 = 3;

/// Kernel run priority of the transmit-completion worker.
pub const TXDONE_RUN_PRIO: u8 = 2;

/// Kernel run priority of the application worker.
pub const APP_RUN_PRIO: u8 = 1;

/// Stack allocation for each worker context, in bytes. Callbacks run on
/// the worker's stack, so this must cover the deepest callback call
/// chain. Ports consume this when creating the three contexts.
pub const WORKER_STACK_BYTES: usize = 1024;
