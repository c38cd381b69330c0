//! Step emitter that renders a run as structured log events.
//!
//! The demo engine has no graphical surface; every notification from the
//! algorithm core becomes a tracing event instead. Per-step notifications
//! log at `trace` so a default `info` filter shows only run milestones.

use sortviz_core::emitter::StepEmitter;
use sortviz_types::{HighlightKind, SortStats, SoundCue};
use tracing::{debug, info, trace};

/// A presentation sink that logs every step through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEmitter;

impl StepEmitter for TracingEmitter {
    fn on_stats_update(&self, stats: SortStats) {
        trace!(
            comparisons = stats.comparisons,
            swaps = stats.swaps,
            "stats"
        );
    }

    fn on_highlight(&self, indices: &[usize], kind: HighlightKind) {
        trace!(?indices, ?kind, "highlight");
    }

    fn on_highlight_clear(&self, indices: &[usize]) {
        trace!(?indices, "highlight cleared");
    }

    fn on_sequence_update(&self, sequence: &[u32]) {
        trace!(len = sequence.len(), ?sequence, "sequence updated");
    }

    fn on_sorted(&self, indices: &[usize]) {
        debug!(?indices, "positions finalized");
    }

    fn on_all_sorted(&self) {
        debug!("all positions finalized");
    }

    fn on_complete(&self) {
        info!("run complete");
    }

    fn play_sound(&self, cue: SoundCue) {
        trace!(?cue, frequency_hz = cue.frequency_hz(), "sound cue");
    }
}
