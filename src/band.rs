//! # Band Router
//!
//! Maps fine-grained task priorities onto the three coarse worker
//! contexts. Each band owns a contiguous half-open priority range, one
//! wake signal, and one worker context with a fixed kernel run priority.
//! The three ranges partition the legal priority domain
//! `0..=MAX_PRIORITY`; a priority outside all of them is unroutable and
//! fatal.

use core::ops::Range;

use crate::config::{
    APP_RUN_PRIO, MAX_PRIORITY, RX_PRIO_LIMIT, RX_RUN_PRIO, TXDONE_PRIO_LIMIT, TXDONE_RUN_PRIO,
};

// ---------------------------------------------------------------------------
// Band
// ---------------------------------------------------------------------------

/// One of the three worker contexts that drain deferred work.
///
/// | Band     | Task priorities        | Typical work                  |
/// |----------|------------------------|-------------------------------|
/// | `Rx`     | `[0, 4)` (most urgent) | raw-receive path              |
/// | `TxDone` | `[4, 8)`               | transmit-completion notifies  |
/// | `App`    | `[8, MAX_PRIORITY]`    | application-level work        |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Rx = 0,
    TxDone = 1,
    App = 2,
}

impl Band {
    /// Number of bands.
    pub const COUNT: usize = 3;

    /// All bands, most urgent range first.
    pub const ALL: [Band; Band::COUNT] = [Band::Rx, Band::TxDone, Band::App];

    /// The band whose priority range contains `prio`, or `None` if the
    /// priority is outside the legal domain.
    pub fn containing(prio: u8) -> Option<Band> {
        Band::ALL
            .into_iter()
            .find(|band| band.prio_range().contains(&prio))
    }

    /// Half-open range of task priorities this band drains.
    pub const fn prio_range(self) -> Range<u8> {
        match self {
            Band::Rx => 0..RX_PRIO_LIMIT,
            Band::TxDone => RX_PRIO_LIMIT..TXDONE_PRIO_LIMIT,
            Band::App => TXDONE_PRIO_LIMIT..MAX_PRIORITY + 1,
        }
    }

    /// Kernel run priority for this band's worker context. Inverted
    /// relative to the task-priority ranges: `Rx` outranks `TxDone`
    /// outranks `App`.
    pub const fn run_prio(self) -> u8 {
        match self {
            Band::Rx => RX_RUN_PRIO,
            Band::TxDone => TXDONE_RUN_PRIO,
            Band::App => APP_RUN_PRIO,
        }
    }

    /// Stable index, e.g. for per-band signal arrays in ports.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short name, e.g. for worker-context naming in ports.
    pub const fn name(self) -> &'static str {
        match self {
            Band::Rx => "rx",
            Band::TxDone => "txdone",
            Band::App => "app",
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests (host-only)
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_legal_priority_routes_to_exactly_one_band() {
        for prio in 0..=MAX_PRIORITY {
            let owners = Band::ALL
                .into_iter()
                .filter(|band| band.prio_range().contains(&prio))
                .count();
            assert_eq!(owners, 1, "priority {prio} must belong to one band");
        }
    }

    #[test]
    fn test_boundary_priorities() {
        assert_eq!(Band::containing(0), Some(Band::Rx));
        assert_eq!(Band::containing(3), Some(Band::Rx));
        assert_eq!(Band::containing(4), Some(Band::TxDone));
        assert_eq!(Band::containing(7), Some(Band::TxDone));
        assert_eq!(Band::containing(8), Some(Band::App));
        assert_eq!(Band::containing(MAX_PRIORITY), Some(Band::App));
    }

    #[test]
    fn test_priorities_above_max_are_unroutable() {
        assert_eq!(Band::containing(MAX_PRIORITY + 1), None);
        assert_eq!(Band::containing(u8::MAX), None);
    }

    #[test]
    fn test_run_priority_inverted_against_task_priority() {
        // The band draining the most urgent task priorities preempts all
        // other workers.
        assert!(Band::Rx.run_prio() > Band::TxDone.run_prio());
        assert!(Band::TxDone.run_prio() > Band::App.run_prio());
    }

    #[test]
    fn test_band_indices_are_dense() {
        for (i, band) in Band::ALL.into_iter().enumerate() {
            assert_eq!(band.index(), i);
        }
    }
}
