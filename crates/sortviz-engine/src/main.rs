//! Demo engine binary for the sortviz visualizer core.
//!
//! This is the main entry point that wires together run control, pacing,
//! the sorting procedures, and a tracing-backed presentation sink. It
//! loads configuration, synthesizes a reproducible random input, runs one
//! sort to completion, and logs the run summary.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `sortviz-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Resolve the algorithm (first CLI argument, else config)
//! 4. Synthesize the seeded demo input
//! 5. Create run control state and the sorter
//! 6. Run the sort
//! 7. Log the run summary

mod emitter;
mod error;
mod input;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use sortviz_core::config::VisualizerConfig;
use sortviz_core::control::RunControl;
use sortviz_core::emitter::StepEmitter;
use sortviz_core::sorter::Sorter;
use sortviz_types::{is_sorted, Algorithm, RunSummary};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::emitter::TracingEmitter;
use crate::error::EngineError;

/// Application entry point for the demo engine.
///
/// Runs one sort over a synthesized input and logs the summary.
///
/// # Errors
///
/// Returns an error if configuration loading, algorithm resolution, or
/// input synthesis fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config = load_config()?;

    // 2. Initialize structured logging. The environment filter wins over
    //    the configured level when set.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("sortviz-engine starting");
    info!(
        base_delay_ms = config.pacing.base_delay_ms,
        default_speed = config.pacing.default_speed,
        sequence_len = config.run.sequence_len,
        seed = config.run.seed,
        "Configuration loaded"
    );

    // 3. Resolve the algorithm: CLI argument wins over the config.
    let name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.run.algorithm.clone());
    let algorithm: Algorithm = name.parse().map_err(EngineError::from)?;
    let complexity = algorithm.complexity();
    info!(
        algorithm = %algorithm,
        time = complexity.time,
        space = complexity.space,
        "Algorithm resolved"
    );

    // 4. Synthesize the demo input.
    let sequence = input::synthesize_sequence(&config.run)?;
    info!(len = sequence.len(), "Demo input synthesized");

    // 5. Create run control state and the sorter.
    let control = Arc::new(RunControl::new(&config.pacing)?);
    let sink: Arc<dyn StepEmitter> = Arc::new(TracingEmitter);
    let sorter = Sorter::new(Arc::clone(&control), config.pacing.clone(), sink);
    info!(
        min_speed = control.min_speed(),
        max_speed = control.max_speed(),
        speed = control.speed(),
        "Run control initialized"
    );

    // 6. Run the sort.
    let started_at = Utc::now();
    let started = Instant::now();
    control.start();
    let output = sorter.sort(algorithm, &sequence).await;
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    // 7. Log the run summary.
    let summary = RunSummary {
        algorithm,
        stats: control.stats(),
        completed: is_sorted(&output),
        length: output.len(),
        started_at,
        elapsed_ms,
    };
    let summary_json = serde_json::to_string(&summary).map_err(EngineError::from)?;
    info!(summary = %summary_json, "sortviz-engine shutdown complete");

    Ok(())
}

/// Load the visualizer configuration from `sortviz-config.yaml`.
///
/// Looks for the config file relative to the current working directory;
/// falls back to defaults when it is absent.
fn load_config() -> Result<VisualizerConfig, EngineError> {
    let config_path = Path::new("sortviz-config.yaml");
    if config_path.exists() {
        let config = VisualizerConfig::from_file(config_path)?;
        Ok(config)
    } else {
        Ok(VisualizerConfig::default())
    }
}
