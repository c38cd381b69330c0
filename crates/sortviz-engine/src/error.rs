//! Error types for the demo engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during engine startup and the demo run.

/// Top-level error for the demo engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: sortviz_core::config::ConfigError,
    },

    /// Run control construction failed.
    #[error("control error: {source}")]
    Control {
        /// The underlying control error.
        #[from]
        source: sortviz_core::control::ControlError,
    },

    /// The requested algorithm name is unknown.
    #[error("algorithm error: {source}")]
    Algorithm {
        /// The underlying parse error.
        #[from]
        source: sortviz_types::ParseAlgorithmError,
    },

    /// Demo input synthesis failed.
    #[error("input error: {message}")]
    Input {
        /// Description of the input failure.
        message: String,
    },

    /// Run summary serialization failed.
    #[error("summary error: {source}")]
    Summary {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
