//! Pacing gate: cooperative suspension between animation steps.
//!
//! The gate is the only blocking point in the system. Algorithms await
//! [`PacingGate::throttle`] after each observable step to set the animation
//! cadence, and [`PacingGate::wait_while_paused`] at each checkpoint to
//! honor a pause. The speed setting is read live from [`RunControl`] at
//! every suspension, so speed changes take effect on the next step.
//!
//! The pause wait polls in fixed increments rather than waiting on a
//! notifier: it must return both when `resume()` clears the pause flag and
//! when `stop()` ends the run, and a short poll covers both without a
//! second wake-up channel.

use std::sync::Arc;
use std::time::Duration;

use crate::config::PacingConfig;
use crate::control::RunControl;

/// Suspend the current task for the given duration. A zero duration
/// still yields, keeping the single-threaded flow cooperative.
pub async fn suspend(duration: Duration) {
    if duration.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(duration).await;
    }
}

/// Cooperative suspension primitive for animation pacing and pause.
#[derive(Debug, Clone)]
pub struct PacingGate {
    control: Arc<RunControl>,
    config: PacingConfig,
}

impl PacingGate {
    /// Create a gate over the given control state and pacing parameters.
    pub const fn new(control: Arc<RunControl>, config: PacingConfig) -> Self {
        Self { control, config }
    }

    /// The suspension duration for the current speed setting.
    ///
    /// `max(min_delay, base_delay - speed * step)`: a monotonically
    /// decreasing map from setting to delay, floored at `min_delay`.
    pub fn delay(&self) -> Duration {
        let speed = self.control.speed();
        let discounted = self
            .config
            .base_delay_ms
            .saturating_sub(speed.saturating_mul(self.config.delay_step_ms));
        Duration::from_millis(discounted.max(self.config.min_delay_ms))
    }

    /// Suspend for the current pacing duration.
    pub async fn throttle(&self) {
        suspend(self.delay()).await;
    }

    /// Suspend in fixed poll increments while the run is paused.
    ///
    /// Returns once the pause flag clears or the run stops. Never errors.
    pub async fn wait_while_paused(&self) {
        let poll = Duration::from_millis(self.config.pause_poll_ms);
        while self.control.is_paused() && self.control.is_running() {
            suspend(poll).await;
        }
    }
}
