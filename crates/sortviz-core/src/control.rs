//! Run control state for one sort invocation.
//!
//! [`RunControl`] is the single source of truth for "is this run still
//! permitted to continue". It owns the run/pause flags, the comparison and
//! swap counters, and the live speed setting.
//!
//! # Architecture
//!
//! All mutable fields use [`std::sync::atomic`] types wrapped in an
//! [`Arc`](std::sync::Arc) so they can be shared between the sorting task
//! and whatever control surface drives it (UI handlers, tests) without
//! locks on the hot path. Cancellation is cooperative: `stop()` flips a
//! flag that the algorithm core polls at every iteration and recursion
//! entry; it never interrupts an in-flight suspension.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use sortviz_types::SortStats;

use crate::config::PacingConfig;

/// Errors that can occur when constructing run control state.
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    /// The pacing configuration's speed bounds are unusable.
    #[error("invalid pacing configuration: {reason}")]
    InvalidPacing {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

/// Shared control state for sort runs.
///
/// Wrapped in an `Arc` and shared between the sorting task and control
/// surface. Atomic fields give lock-free reads on the hot path.
#[derive(Debug)]
pub struct RunControl {
    /// Whether a run is in progress. Terminal for the current invocation
    /// once false; set false by `stop()` and on natural completion.
    running: AtomicBool,

    /// Whether the run is paused. Only meaningful while `running` is true.
    paused: AtomicBool,

    /// Comparisons performed in the current run.
    comparisons: AtomicU64,

    /// Swaps (or element shifts) performed in the current run.
    swaps: AtomicU64,

    /// Current speed setting (runtime-adjustable, read at every pacing
    /// point so changes take effect on the next step).
    speed: AtomicU64,

    /// Lowest accepted speed setting.
    min_speed: u64,

    /// Highest accepted speed setting.
    max_speed: u64,
}

impl RunControl {
    /// Create run control state from a pacing configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::InvalidPacing`] if `min_speed` is zero,
    /// the bounds are inverted, or the default speed falls outside them.
    pub fn new(pacing: &PacingConfig) -> Result<Self, ControlError> {
        if pacing.min_speed == 0 {
            return Err(ControlError::InvalidPacing {
                reason: "min_speed must be at least 1".to_owned(),
            });
        }
        if pacing.min_speed > pacing.max_speed {
            return Err(ControlError::InvalidPacing {
                reason: format!(
                    "min_speed {} exceeds max_speed {}",
                    pacing.min_speed, pacing.max_speed
                ),
            });
        }
        if pacing.default_speed < pacing.min_speed || pacing.default_speed > pacing.max_speed {
            return Err(ControlError::InvalidPacing {
                reason: format!(
                    "default_speed {} outside {}..={}",
                    pacing.default_speed, pacing.min_speed, pacing.max_speed
                ),
            });
        }
        if pacing.pause_poll_ms == 0 {
            return Err(ControlError::InvalidPacing {
                reason: "pause_poll_ms must be at least 1".to_owned(),
            });
        }

        Ok(Self {
            running: AtomicBool::new(false),
            paused: AtomicBool::new(false),
            comparisons: AtomicU64::new(0),
            swaps: AtomicU64::new(0),
            speed: AtomicU64::new(pacing.default_speed),
            min_speed: pacing.min_speed,
            max_speed: pacing.max_speed,
        })
    }

    // -----------------------------------------------------------------------
    // Run / Pause / Stop
    // -----------------------------------------------------------------------

    /// Begin a run: running becomes true, any stale pause is cleared.
    pub fn start(&self) {
        self.running.store(true, Ordering::Release);
        self.paused.store(false, Ordering::Release);
    }

    /// Whether a run is in progress.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Pause the current run. No-op when nothing is running.
    pub fn pause(&self) {
        if self.is_running() {
            self.paused.store(true, Ordering::Release);
        }
    }

    /// Resume a paused run. No-op when nothing is running.
    pub fn resume(&self) {
        if self.is_running() {
            self.paused.store(false, Ordering::Release);
        }
    }

    /// Whether the run is paused.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Request a stop. Cooperative: the algorithm observes this at its
    /// next flag check and returns early; an in-flight suspension still
    /// completes first. The pause flag is cleared so it cannot outlive
    /// the run that set it.
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
        self.paused.store(false, Ordering::Release);
    }

    // -----------------------------------------------------------------------
    // Counters
    // -----------------------------------------------------------------------

    /// Zero both counters and return the (zeroed) snapshot.
    pub fn reset_counters(&self) -> SortStats {
        self.comparisons.store(0, Ordering::Release);
        self.swaps.store(0, Ordering::Release);
        SortStats::default()
    }

    /// Count one comparison and return the updated snapshot.
    pub fn record_comparison(&self) -> SortStats {
        self.comparisons.fetch_add(1, Ordering::AcqRel);
        self.stats()
    }

    /// Count one swap and return the updated snapshot.
    pub fn record_swap(&self) -> SortStats {
        self.swaps.fetch_add(1, Ordering::AcqRel);
        self.stats()
    }

    /// Current counter values.
    pub fn stats(&self) -> SortStats {
        SortStats {
            comparisons: self.comparisons.load(Ordering::Acquire),
            swaps: self.swaps.load(Ordering::Acquire),
        }
    }

    // -----------------------------------------------------------------------
    // Speed
    // -----------------------------------------------------------------------

    /// Get the current speed setting.
    pub fn speed(&self) -> u64 {
        self.speed.load(Ordering::Acquire)
    }

    /// Set the speed setting. Takes effect at the next pacing point.
    ///
    /// Returns the previous setting on success, or `None` if the value
    /// falls outside the configured bounds.
    pub fn set_speed(&self, setting: u64) -> Option<u64> {
        if setting < self.min_speed || setting > self.max_speed {
            return None;
        }
        let prev = self.speed.swap(setting, Ordering::AcqRel);
        Some(prev)
    }

    /// Lowest accepted speed setting.
    pub const fn min_speed(&self) -> u64 {
        self.min_speed
    }

    /// Highest accepted speed setting.
    pub const fn max_speed(&self) -> u64 {
        self.max_speed
    }
}
