//! Demo input synthesis.
//!
//! Generates the random sequence a demo run sorts, seeded for
//! reproducibility so two runs with the same config trace identically.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortviz_core::config::RunConfig;

use crate::error::EngineError;

/// Synthesize a random demo sequence from the run configuration.
///
/// # Errors
///
/// Returns [`EngineError::Input`] if the configured value bounds are
/// inverted.
pub fn synthesize_sequence(config: &RunConfig) -> Result<Vec<u32>, EngineError> {
    if config.min_value > config.max_value {
        return Err(EngineError::Input {
            message: format!(
                "min_value {} exceeds max_value {}",
                config.min_value, config.max_value
            ),
        });
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let sequence = (0..config.sequence_len)
        .map(|_| rng.random_range(config.min_value..=config.max_value))
        .collect();
    Ok(sequence)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_sequence() {
        let config = RunConfig::default();
        let first = synthesize_sequence(&config).unwrap();
        let second = synthesize_sequence(&config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), config.sequence_len);
    }

    #[test]
    fn values_respect_bounds() {
        let config = RunConfig {
            sequence_len: 200,
            min_value: 3,
            max_value: 9,
            ..RunConfig::default()
        };
        let sequence = synthesize_sequence(&config).unwrap();
        assert!(sequence.iter().all(|&v| (3..=9).contains(&v)));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let config = RunConfig {
            min_value: 100,
            max_value: 10,
            ..RunConfig::default()
        };
        assert!(synthesize_sequence(&config).is_err());
    }
}
