//! Enumeration types for the sortviz visualizer core.
//!
//! Covers algorithm selection, the kinds of observable steps an algorithm
//! reports, the transient highlight states a presentation layer can render,
//! and the audio cues that accompany them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Algorithms
// ---------------------------------------------------------------------------

/// One of the six comparison-based sorting algorithms the core animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Adjacent pairwise comparison with per-pass shrink.
    Bubble,
    /// Lomuto partition scheme with the last element as pivot.
    Quick,
    /// Stable top-down merge sort.
    Merge,
    /// Max-heap build followed by repeated root extraction.
    Heap,
    /// Stable shift-based insertion sort.
    Insertion,
    /// Minimum scan of the unsorted suffix with one swap per pass.
    Selection,
}

/// All algorithms in menu order.
pub const ALL_ALGORITHMS: [Algorithm; 6] = [
    Algorithm::Bubble,
    Algorithm::Quick,
    Algorithm::Merge,
    Algorithm::Heap,
    Algorithm::Insertion,
    Algorithm::Selection,
];

/// Asymptotic complexity metadata for one algorithm, used by presentation
/// layers for the info panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    /// Time complexity in big-O notation.
    pub time: &'static str,
    /// Space complexity in big-O notation.
    pub space: &'static str,
    /// One-sentence description of how the algorithm works.
    pub description: &'static str,
}

impl Algorithm {
    /// The lowercase name of this algorithm (the form [`FromStr`] accepts).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Quick => "quick",
            Self::Merge => "merge",
            Self::Heap => "heap",
            Self::Insertion => "insertion",
            Self::Selection => "selection",
        }
    }

    /// Time/space complexity and a short description for this algorithm.
    pub const fn complexity(self) -> Complexity {
        match self {
            Self::Bubble => Complexity {
                time: "O(n^2)",
                space: "O(1)",
                description: "Repeatedly steps through the list, compares adjacent \
                              elements and swaps them if they are in the wrong order.",
            },
            Self::Quick => Complexity {
                time: "O(n log n)",
                space: "O(log n)",
                description: "Divide-and-conquer: picks a pivot and partitions the \
                              array around it.",
            },
            Self::Merge => Complexity {
                time: "O(n log n)",
                space: "O(n)",
                description: "Divide-and-conquer: splits the array in halves, sorts \
                              them separately, then merges.",
            },
            Self::Heap => Complexity {
                time: "O(n log n)",
                space: "O(1)",
                description: "Builds a binary max-heap and repeatedly extracts the \
                              largest element.",
            },
            Self::Insertion => Complexity {
                time: "O(n^2)",
                space: "O(1)",
                description: "Builds the sorted array one item at a time by inserting \
                              each element into its correct position.",
            },
            Self::Selection => Complexity {
                time: "O(n^2)",
                space: "O(1)",
                description: "Finds the minimum of the remaining elements and places \
                              it at the front, then repeats.",
            },
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an algorithm name does not match a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm: {name}")]
pub struct ParseAlgorithmError {
    /// The unrecognized name.
    pub name: String,
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bubble" => Ok(Self::Bubble),
            "quick" => Ok(Self::Quick),
            "merge" => Ok(Self::Merge),
            "heap" => Ok(Self::Heap),
            "insertion" => Ok(Self::Insertion),
            "selection" => Ok(Self::Selection),
            other => Err(ParseAlgorithmError {
                name: other.to_owned(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Step and highlight kinds
// ---------------------------------------------------------------------------

/// The kind of one observable action reported by the algorithm core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StepKind {
    /// Two (or one vs. an implicit pivot/key) elements were compared.
    Compare,
    /// Elements changed position in the sequence.
    Swap,
    /// A partition call selected its pivot index.
    Pivot,
    /// One or more positions reached their final sorted place.
    Sorted,
    /// The run finished naturally.
    Complete,
}

/// Transient highlight state applied to bars during an animation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HighlightKind {
    /// The bars are being compared.
    Comparing,
    /// The bars are being swapped.
    Swapping,
    /// The bar is the current pivot.
    Pivot,
}

// ---------------------------------------------------------------------------
// Audio cues
// ---------------------------------------------------------------------------

/// An advisory audio cue played alongside a step notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Played on each comparison.
    Compare,
    /// Played on each swap.
    Swap,
    /// Played once on natural completion.
    Complete,
}

impl SoundCue {
    /// Oscillator frequency for this cue, matching the original
    /// visualizer's sine tones.
    pub const fn frequency_hz(self) -> u32 {
        match self {
            Self::Compare => 660,
            Self::Swap => 440,
            Self::Complete => 880,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_round_trips_through_name() {
        for algo in ALL_ALGORITHMS {
            let parsed: Algorithm = algo.as_str().parse().unwrap();
            assert_eq!(parsed, algo);
        }
    }

    #[test]
    fn algorithm_parse_is_case_insensitive() {
        let parsed: Algorithm = "QuIcK".parse().unwrap();
        assert_eq!(parsed, Algorithm::Quick);
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let result = "bogo".parse::<Algorithm>();
        assert!(result.is_err());
    }

    #[test]
    fn sound_cue_frequencies_match_original_tones() {
        assert_eq!(SoundCue::Compare.frequency_hz(), 660);
        assert_eq!(SoundCue::Swap.frequency_hz(), 440);
        assert_eq!(SoundCue::Complete.frequency_hz(), 880);
    }

    #[test]
    fn every_algorithm_has_complexity_metadata() {
        for algo in ALL_ALGORITHMS {
            let c = algo.complexity();
            assert!(c.time.starts_with("O("));
            assert!(c.space.starts_with("O("));
            assert!(!c.description.is_empty());
        }
    }
}
