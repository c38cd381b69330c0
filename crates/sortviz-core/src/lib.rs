//! Run control, pacing, and the animated sorting procedures for sortviz.
//!
//! This crate is the headless core of the visualizer: the six sorting
//! algorithms expressed as sequences of compare/swap steps interleaved with
//! cooperative suspension, plus the control plane around them. Rendering,
//! audio synthesis, and UI wiring live behind the [`StepEmitter`] trait and
//! are not implemented here.
//!
//! # Modules
//!
//! - [`config`] -- Typed YAML configuration for pacing and demo runs.
//! - [`control`] -- [`RunControl`]: run/pause flags, counters, speed setting.
//! - [`pacing`] -- [`PacingGate`]: cooperative suspension between steps.
//! - [`emitter`] -- [`StepEmitter`] sink trait and test doubles.
//! - [`sorter`] -- [`Sorter`]: the six sorting procedures.
//!
//! [`RunControl`]: control::RunControl
//! [`PacingGate`]: pacing::PacingGate
//! [`StepEmitter`]: emitter::StepEmitter
//! [`Sorter`]: sorter::Sorter

pub mod config;
pub mod control;
pub mod emitter;
pub mod pacing;
pub mod sorter;
