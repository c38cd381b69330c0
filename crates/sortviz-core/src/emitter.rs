//! Step emitter: the sink interface between the algorithm core and its
//! presentation layer.
//!
//! The algorithm core reports every semantically meaningful action through
//! [`StepEmitter`]. All methods are fire-and-forget notifications with no
//! return value; a presentation layer implements the ones it renders and
//! ignores the rest. The core never depends on what an emitter does, so a
//! faulty sink cannot corrupt a run's flags or the sequence order.
//!
//! [`NoOpEmitter`] discards everything; [`RecordingEmitter`] captures the
//! full call stream for headless tests and can derive the canonical
//! [`StepEvent`] trace from it.

use std::sync::Mutex;

use sortviz_types::{HighlightKind, SortStats, SoundCue, StepEvent, StepKind};

/// Sink receiving per-action notifications from the algorithm core.
///
/// All methods default to no-ops so implementors only write the callbacks
/// their presentation actually uses.
pub trait StepEmitter: Send + Sync {
    /// Counter values changed (also fired once, zeroed, at run start).
    fn on_stats_update(&self, _stats: SortStats) {}

    /// Transient highlight applied to the given indices.
    fn on_highlight(&self, _indices: &[usize], _kind: HighlightKind) {}

    /// Transient highlight removed from the given indices.
    fn on_highlight_clear(&self, _indices: &[usize]) {}

    /// The sequence contents changed (swap or element write).
    fn on_sequence_update(&self, _sequence: &[u32]) {}

    /// The given indices reached their final sorted positions.
    fn on_sorted(&self, _indices: &[usize]) {}

    /// Every position is in its final sorted place.
    fn on_all_sorted(&self) {}

    /// The run finished naturally. Fired exactly once per completed run.
    fn on_complete(&self) {}

    /// Advisory audio cue accompanying the current step.
    fn play_sound(&self, _cue: SoundCue) {}
}

/// An emitter that discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpEmitter;

impl StepEmitter for NoOpEmitter {}

/// One recorded emitter invocation, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitterCall {
    /// `on_stats_update` with the counter snapshot.
    StatsUpdate(SortStats),
    /// `on_highlight` with indices and highlight kind.
    Highlight {
        /// The highlighted indices.
        indices: Vec<usize>,
        /// The highlight kind.
        kind: HighlightKind,
    },
    /// `on_highlight_clear` with the cleared indices.
    HighlightClear(Vec<usize>),
    /// `on_sequence_update` with the sequence contents.
    SequenceUpdate(Vec<u32>),
    /// `on_sorted` with the finalized indices.
    Sorted(Vec<usize>),
    /// `on_all_sorted`.
    AllSorted,
    /// `on_complete`.
    Complete,
    /// `play_sound` with the cue.
    Sound(SoundCue),
}

/// An emitter that records every notification for later inspection.
///
/// Test double for headless algorithm tests, in the same spirit as a stub
/// decision source: deterministic, in-memory, no presentation surface.
#[derive(Debug, Default)]
pub struct RecordingEmitter {
    calls: Mutex<Vec<EmitterCall>>,
}

impl RecordingEmitter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, call: EmitterCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    /// All recorded calls in emission order.
    pub fn calls(&self) -> Vec<EmitterCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    /// Derive the canonical step-event trace from the recorded calls.
    ///
    /// Comparison and pivot highlights become [`StepKind::Compare`] and
    /// [`StepKind::Pivot`] events; swap highlights become
    /// [`StepKind::Swap`] events (the core publishes the updated sequence
    /// before the swap highlight, so the snapshot reflects the swap);
    /// sorted and complete notifications map directly. Each event carries
    /// the most recently published sequence snapshot.
    pub fn step_events(&self) -> Vec<StepEvent> {
        let mut snapshot: Vec<u32> = Vec::new();
        let mut events = Vec::new();
        for call in self.calls() {
            match call {
                EmitterCall::SequenceUpdate(sequence) => snapshot = sequence,
                EmitterCall::Highlight { indices, kind } => {
                    let step = match kind {
                        HighlightKind::Comparing => StepKind::Compare,
                        HighlightKind::Swapping => StepKind::Swap,
                        HighlightKind::Pivot => StepKind::Pivot,
                    };
                    events.push(StepEvent::new(step, indices, snapshot.clone()));
                }
                EmitterCall::Sorted(indices) => {
                    events.push(StepEvent::new(StepKind::Sorted, indices, snapshot.clone()));
                }
                EmitterCall::AllSorted => {
                    let all = (0..snapshot.len()).collect();
                    events.push(StepEvent::new(StepKind::Sorted, all, snapshot.clone()));
                }
                EmitterCall::Complete => {
                    events.push(StepEvent::new(StepKind::Complete, Vec::new(), snapshot.clone()));
                }
                EmitterCall::StatsUpdate(_)
                | EmitterCall::HighlightClear(_)
                | EmitterCall::Sound(_) => {}
            }
        }
        events
    }

    /// Recorded step events of one kind, in emission order.
    pub fn events_of_kind(&self, kind: StepKind) -> Vec<StepEvent> {
        self.step_events()
            .into_iter()
            .filter(|event| event.kind == kind)
            .collect()
    }

    /// The last counter snapshot pushed through `on_stats_update`, if any.
    pub fn last_stats(&self) -> Option<SortStats> {
        self.calls().into_iter().rev().find_map(|call| match call {
            EmitterCall::StatsUpdate(stats) => Some(stats),
            _ => None,
        })
    }
}

impl StepEmitter for RecordingEmitter {
    fn on_stats_update(&self, stats: SortStats) {
        self.record(EmitterCall::StatsUpdate(stats));
    }

    fn on_highlight(&self, indices: &[usize], kind: HighlightKind) {
        self.record(EmitterCall::Highlight {
            indices: indices.to_vec(),
            kind,
        });
    }

    fn on_highlight_clear(&self, indices: &[usize]) {
        self.record(EmitterCall::HighlightClear(indices.to_vec()));
    }

    fn on_sequence_update(&self, sequence: &[u32]) {
        self.record(EmitterCall::SequenceUpdate(sequence.to_vec()));
    }

    fn on_sorted(&self, indices: &[usize]) {
        self.record(EmitterCall::Sorted(indices.to_vec()));
    }

    fn on_all_sorted(&self) {
        self.record(EmitterCall::AllSorted);
    }

    fn on_complete(&self) {
        self.record(EmitterCall::Complete);
    }

    fn play_sound(&self, cue: SoundCue) {
        self.record(EmitterCall::Sound(cue));
    }
}
