//! Step events, counter snapshots, and run summaries.
//!
//! A [`StepEvent`] is a transient value describing one observable action of
//! a running algorithm. It carries the affected indices and a by-value
//! snapshot of the sequence; nothing here is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{Algorithm, StepKind};

/// One observable action of a running sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEvent {
    /// What happened.
    pub kind: StepKind,
    /// The indices the action touched, in algorithm order.
    pub indices: Vec<usize>,
    /// The sequence contents at the time of the action (by value).
    pub snapshot: Vec<u32>,
}

impl StepEvent {
    /// Build a step event from its parts.
    pub const fn new(kind: StepKind, indices: Vec<usize>, snapshot: Vec<u32>) -> Self {
        Self {
            kind,
            indices,
            snapshot,
        }
    }
}

/// Snapshot of the comparison and swap counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStats {
    /// Number of comparisons performed so far.
    pub comparisons: u64,
    /// Number of swaps (or element shifts) performed so far.
    pub swaps: u64,
}

/// Summary of one top-level sort invocation, assembled by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// The algorithm that ran.
    pub algorithm: Algorithm,
    /// Final counter values.
    pub stats: SortStats,
    /// Whether the run finished naturally (false when stopped).
    pub completed: bool,
    /// Number of elements in the input sequence.
    pub length: usize,
    /// Wall-clock time when the run started.
    pub started_at: DateTime<Utc>,
    /// Wall-clock milliseconds the run took.
    pub elapsed_ms: u64,
}
