//! Shared type definitions for the sortviz visualizer core.
//!
//! This crate is the single source of truth for all types that cross the
//! boundary between the algorithm core and its presentation sinks. Every
//! type here is serde-serializable so a presentation layer can ship events
//! over whatever transport it likes.
//!
//! # Modules
//!
//! - [`enums`] -- Algorithm selection, step/highlight kinds, audio cues
//! - [`events`] -- Step events, counter snapshots, run summaries
//! - [`sequence`] -- Order and multiset helpers for sequences

pub mod enums;
pub mod events;
pub mod sequence;

// Re-export all public types at crate root for convenience.
pub use enums::{
    Algorithm, Complexity, HighlightKind, ParseAlgorithmError, SoundCue, StepKind, ALL_ALGORITHMS,
};
pub use events::{RunSummary, SortStats, StepEvent};
pub use sequence::{is_sorted, same_multiset};
