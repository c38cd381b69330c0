//! The six animated sorting procedures.
//!
//! Each procedure mutates a private copy of the caller's sequence and
//! reports every observable action through the [`StepEmitter`], pacing
//! itself through the [`PacingGate`] and polling [`RunControl`] at the top
//! of every loop iteration and at every recursion entry.
//!
//! Contract per step:
//!
//! 1. Check `running`; if false, return immediately with the sequence in
//!    whatever (structurally valid) state it reached.
//! 2. Wait out any pause.
//! 3. Perform one comparison; count it; notify with a comparing highlight
//!    and audio cue; suspend for the current pacing duration.
//! 4. Conditionally swap; if performed, count it, publish the updated
//!    sequence with a swapping highlight and cue, and suspend again.
//! 5. Clear the transient highlight.
//!
//! On natural completion every procedure marks the remaining positions
//! sorted, signals `on_complete` exactly once, and ends the run.

use std::sync::Arc;

use sortviz_types::{Algorithm, HighlightKind, SoundCue};
use tracing::{debug, info};

use crate::config::PacingConfig;
use crate::control::RunControl;
use crate::emitter::StepEmitter;
use crate::pacing::PacingGate;

/// The algorithm core: six sorting procedures over shared control state.
pub struct Sorter {
    control: Arc<RunControl>,
    gate: PacingGate,
    emitter: Arc<dyn StepEmitter>,
}

impl Sorter {
    /// Create a sorter over the given control state, pacing parameters,
    /// and presentation sink.
    pub fn new(
        control: Arc<RunControl>,
        pacing: PacingConfig,
        emitter: Arc<dyn StepEmitter>,
    ) -> Self {
        let gate = PacingGate::new(Arc::clone(&control), pacing);
        Self {
            control,
            gate,
            emitter,
        }
    }

    /// Run the chosen algorithm over a copy of `input` and return the
    /// resulting sequence.
    ///
    /// The caller must have called [`RunControl::start`] immediately
    /// before; if the run is not live the input is returned unchanged and
    /// nothing is emitted.
    pub async fn sort(&self, algorithm: Algorithm, input: &[u32]) -> Vec<u32> {
        info!(algorithm = %algorithm, len = input.len(), "sort starting");
        let output = match algorithm {
            Algorithm::Bubble => self.bubble_sort(input).await,
            Algorithm::Quick => self.quick_sort(input).await,
            Algorithm::Merge => self.merge_sort(input).await,
            Algorithm::Heap => self.heap_sort(input).await,
            Algorithm::Insertion => self.insertion_sort(input).await,
            Algorithm::Selection => self.selection_sort(input).await,
        };
        let stats = self.control.stats();
        info!(
            algorithm = %algorithm,
            comparisons = stats.comparisons,
            swaps = stats.swaps,
            "sort returned"
        );
        output
    }

    // -----------------------------------------------------------------------
    // Shared step plumbing
    // -----------------------------------------------------------------------

    /// Begin a top-level run: bail out if the run is not live, otherwise
    /// zero the counters and push the zeroed stats snapshot.
    fn begin(&self) -> bool {
        if !self.control.is_running() {
            return false;
        }
        let stats = self.control.reset_counters();
        self.emitter.on_stats_update(stats);
        true
    }

    /// End a naturally completed run: signal completion once and release
    /// the run flag.
    fn finish(&self) {
        self.emitter.on_complete();
        self.emitter.play_sound(SoundCue::Complete);
        self.control.stop();
    }

    /// One paced comparison: count, notify, cue, suspend.
    async fn compare_step(&self, indices: &[usize]) {
        let stats = self.control.record_comparison();
        self.emitter.on_stats_update(stats);
        self.emitter.on_highlight(indices, HighlightKind::Comparing);
        self.emitter.play_sound(SoundCue::Compare);
        self.gate.throttle().await;
    }

    /// One paced swap notification, called after the sequence has been
    /// mutated: count, publish the new contents, notify, cue, suspend.
    async fn swap_step(&self, indices: &[usize], sequence: &[u32]) {
        let stats = self.control.record_swap();
        self.emitter.on_stats_update(stats);
        self.emitter.on_sequence_update(sequence);
        self.emitter.on_highlight(indices, HighlightKind::Swapping);
        self.emitter.play_sound(SoundCue::Swap);
        self.gate.throttle().await;
    }

    /// One unthrottled comparison (heapify child checks): count and push
    /// the counter update only.
    fn count_comparison(&self) {
        let stats = self.control.record_comparison();
        self.emitter.on_stats_update(stats);
    }

    // -----------------------------------------------------------------------
    // Bubble sort
    // -----------------------------------------------------------------------

    /// Adjacent pairwise comparison across shrinking passes; the trailing
    /// position is final after each pass.
    pub async fn bubble_sort(&self, input: &[u32]) -> Vec<u32> {
        let mut seq = input.to_vec();
        if !self.begin() {
            return seq;
        }
        let n = seq.len();

        for pass in 0..n.saturating_sub(1) {
            let pass_end = n.saturating_sub(pass).saturating_sub(1);
            for j in 0..pass_end {
                if !self.control.is_running() {
                    return seq;
                }
                self.gate.wait_while_paused().await;

                let next = j.saturating_add(1);
                self.compare_step(&[j, next]).await;

                let (Some(&left), Some(&right)) = (seq.get(j), seq.get(next)) else {
                    break;
                };
                if left > right {
                    seq.swap(j, next);
                    self.swap_step(&[j, next], &seq).await;
                }
                self.emitter.on_highlight_clear(&[j, next]);
            }
            self.emitter.on_sorted(&[pass_end]);
        }

        if n > 0 {
            self.emitter.on_sorted(&[0]);
        }
        if self.control.is_running() {
            self.finish();
        }
        seq
    }

    // -----------------------------------------------------------------------
    // Quick sort
    // -----------------------------------------------------------------------

    /// Lomuto partition scheme with the last element as pivot; recursion
    /// order is left partition, then right.
    pub async fn quick_sort(&self, input: &[u32]) -> Vec<u32> {
        let mut seq = input.to_vec();
        if !self.begin() {
            return seq;
        }

        if let Some(high) = seq.len().checked_sub(1) {
            Box::pin(self.quick_range(&mut seq, 0, high)).await;
        }

        if self.control.is_running() {
            self.emitter.on_all_sorted();
            self.finish();
        }
        seq
    }

    /// Sort `seq[low..=high]`. Entered even when the run has stopped;
    /// stopped calls (and their children) no-op.
    async fn quick_range(&self, seq: &mut [u32], low: usize, high: usize) {
        if low >= high || !self.control.is_running() {
            return;
        }
        self.gate.wait_while_paused().await;

        let pivot_index = self.partition(seq, low, high).await;
        if let Some(left_high) = pivot_index.checked_sub(1) {
            Box::pin(self.quick_range(seq, low, left_high)).await;
        }
        Box::pin(self.quick_range(seq, pivot_index.saturating_add(1), high)).await;
    }

    /// Lomuto partition: elements strictly less than the pivot move left
    /// of a running boundary; the pivot lands on the boundary. Emits one
    /// pivot highlight before scanning and marks the pivot's final
    /// position sorted.
    async fn partition(&self, seq: &mut [u32], low: usize, high: usize) -> usize {
        let Some(&pivot) = seq.get(high) else {
            return low;
        };
        debug!(low, high, pivot, "partition");
        self.emitter.on_highlight(&[high], HighlightKind::Pivot);

        let mut boundary = low;
        for j in low..high {
            if !self.control.is_running() {
                return boundary;
            }
            self.gate.wait_while_paused().await;

            self.compare_step(&[j]).await;
            let below_pivot = seq.get(j).is_some_and(|&value| value < pivot);
            if below_pivot {
                if boundary != j {
                    seq.swap(boundary, j);
                    self.swap_step(&[boundary, j], seq).await;
                }
                boundary = boundary.saturating_add(1);
            }
            self.emitter.on_highlight_clear(&[j]);
        }

        seq.swap(boundary, high);
        self.swap_step(&[boundary, high], seq).await;
        self.emitter.on_highlight_clear(&[boundary, high]);
        self.emitter.on_sorted(&[boundary]);
        boundary
    }

    // -----------------------------------------------------------------------
    // Merge sort
    // -----------------------------------------------------------------------

    /// Stable top-down merge sort. Only head-to-head comparisons are
    /// paced; leftover tail copies run unthrottled.
    pub async fn merge_sort(&self, input: &[u32]) -> Vec<u32> {
        let mut seq = input.to_vec();
        if !self.begin() {
            return seq;
        }

        if let Some(high) = seq.len().checked_sub(1) {
            Box::pin(self.merge_range(&mut seq, 0, high)).await;
        }

        if self.control.is_running() {
            self.emitter.on_all_sorted();
            self.finish();
        }
        seq
    }

    /// Sort `seq[left..=right]` by splitting at `floor((left + right) / 2)`.
    async fn merge_range(&self, seq: &mut [u32], left: usize, right: usize) {
        if left >= right || !self.control.is_running() {
            return;
        }
        self.gate.wait_while_paused().await;

        let middle = left.saturating_add(right.saturating_sub(left) / 2);
        Box::pin(self.merge_range(seq, left, middle)).await;
        Box::pin(self.merge_range(seq, middle.saturating_add(1), right)).await;
        self.merge(seq, left, middle, right).await;
    }

    /// Merge the two sorted halves `seq[left..=middle]` and
    /// `seq[middle+1..=right]` back into place. The `<=` tie-break keeps
    /// equal elements from the left half first (stability).
    ///
    /// The merge consumes from buffered copies of the halves while
    /// overwriting `seq[k]`, so bailing out mid-merge would lose the
    /// consumed-but-unwritten buffered values. A stop observed in the
    /// head loop therefore falls through to the copy loops, which always
    /// run to the end: they have no await points, and on a stopped run
    /// they flush silently so the segment stays a permutation of its
    /// pre-merge contents.
    async fn merge(&self, seq: &mut [u32], left: usize, middle: usize, right: usize) {
        let left_half: Vec<u32> = seq
            .get(left..=middle)
            .map(<[u32]>::to_vec)
            .unwrap_or_default();
        let right_half: Vec<u32> = seq
            .get(middle.saturating_add(1)..=right)
            .map(<[u32]>::to_vec)
            .unwrap_or_default();

        let mut i = 0;
        let mut j = 0;
        let mut k = left;

        while i < left_half.len() && j < right_half.len() {
            if !self.control.is_running() {
                break;
            }
            self.gate.wait_while_paused().await;

            self.compare_step(&[k]).await;
            if !self.control.is_running() {
                break;
            }
            let (Some(&from_left), Some(&from_right)) = (left_half.get(i), right_half.get(j))
            else {
                break;
            };
            let value = if from_left <= from_right {
                i = i.saturating_add(1);
                from_left
            } else {
                j = j.saturating_add(1);
                from_right
            };
            if let Some(slot) = seq.get_mut(k) {
                *slot = value;
            }
            self.emitter.on_sequence_update(seq);
            self.emitter.on_highlight_clear(&[k]);
            k = k.saturating_add(1);
        }

        // Leftover copies involve no comparisons and are unthrottled.
        while let Some(&value) = left_half.get(i) {
            if let Some(slot) = seq.get_mut(k) {
                *slot = value;
            }
            if self.control.is_running() {
                self.emitter.on_sequence_update(seq);
            }
            i = i.saturating_add(1);
            k = k.saturating_add(1);
        }
        while let Some(&value) = right_half.get(j) {
            if let Some(slot) = seq.get_mut(k) {
                *slot = value;
            }
            if self.control.is_running() {
                self.emitter.on_sequence_update(seq);
            }
            j = j.saturating_add(1);
            k = k.saturating_add(1);
        }
    }

    // -----------------------------------------------------------------------
    // Heap sort
    // -----------------------------------------------------------------------

    /// Bottom-up max-heap build followed by repeated root extraction.
    /// Heapify child comparisons are unthrottled; only swaps are paced.
    pub async fn heap_sort(&self, input: &[u32]) -> Vec<u32> {
        let mut seq = input.to_vec();
        if !self.begin() {
            return seq;
        }
        let n = seq.len();

        for root in (0..n / 2).rev() {
            Box::pin(self.heapify(&mut seq, n, root)).await;
        }

        for end in (1..n).rev() {
            if !self.control.is_running() {
                return seq;
            }
            self.gate.wait_while_paused().await;

            seq.swap(0, end);
            self.swap_step(&[0, end], &seq).await;
            self.emitter.on_highlight_clear(&[0, end]);
            self.emitter.on_sorted(&[end]);

            Box::pin(self.heapify(&mut seq, end, 0)).await;
        }

        if n > 0 {
            self.emitter.on_sorted(&[0]);
        }
        if self.control.is_running() {
            self.finish();
        }
        seq
    }

    /// Sift the value at `root` down within the first `size` elements.
    async fn heapify(&self, seq: &mut [u32], size: usize, root: usize) {
        if !self.control.is_running() {
            return;
        }
        let mut largest = root;
        let left = root.saturating_mul(2).saturating_add(1);
        let right = root.saturating_mul(2).saturating_add(2);

        if left < size {
            self.count_comparison();
            if let (Some(&child), Some(&top)) = (seq.get(left), seq.get(largest)) {
                if child > top {
                    largest = left;
                }
            }
        }
        if right < size {
            self.count_comparison();
            if let (Some(&child), Some(&top)) = (seq.get(right), seq.get(largest)) {
                if child > top {
                    largest = right;
                }
            }
        }

        if largest != root {
            seq.swap(root, largest);
            self.swap_step(&[root, largest], seq).await;
            self.emitter.on_highlight_clear(&[root, largest]);
            Box::pin(self.heapify(seq, size, largest)).await;
        }
    }

    // -----------------------------------------------------------------------
    // Insertion sort
    // -----------------------------------------------------------------------

    /// Classic shift-based insertion. The `<=` stop condition leaves equal
    /// elements unshifted, preserving their relative order. Cancellation
    /// mid-shift writes the key at the current slot and returns, leaving
    /// the partially shifted (same-multiset) state.
    pub async fn insertion_sort(&self, input: &[u32]) -> Vec<u32> {
        let mut seq = input.to_vec();
        if !self.begin() {
            return seq;
        }
        let n = seq.len();

        for i in 1..n {
            if !self.control.is_running() {
                return seq;
            }
            self.gate.wait_while_paused().await;

            let Some(&key) = seq.get(i) else {
                break;
            };
            self.emitter.on_highlight(&[i], HighlightKind::Comparing);

            let mut slot = i;
            while slot > 0 && self.control.is_running() {
                self.gate.wait_while_paused().await;

                let prev = slot.saturating_sub(1);
                self.compare_step(&[prev]).await;

                let Some(&prev_value) = seq.get(prev) else {
                    break;
                };
                if prev_value <= key {
                    break;
                }

                if let Some(dest) = seq.get_mut(slot) {
                    *dest = prev_value;
                }
                let stats = self.control.record_swap();
                self.emitter.on_stats_update(stats);
                self.emitter.on_sequence_update(&seq);
                self.emitter.play_sound(SoundCue::Swap);
                self.gate.throttle().await;
                self.emitter.on_highlight_clear(&[prev]);
                slot = prev;
            }

            if let Some(dest) = seq.get_mut(slot) {
                *dest = key;
            }
            self.emitter.on_sequence_update(&seq);
            self.emitter.on_highlight_clear(&[i]);
        }

        if self.control.is_running() {
            self.emitter.on_all_sorted();
            self.finish();
        }
        seq
    }

    // -----------------------------------------------------------------------
    // Selection sort
    // -----------------------------------------------------------------------

    /// Minimum scan of the unsorted suffix; one swap per outer pass, and
    /// only when a strictly smaller minimum was found.
    pub async fn selection_sort(&self, input: &[u32]) -> Vec<u32> {
        let mut seq = input.to_vec();
        if !self.begin() {
            return seq;
        }
        let n = seq.len();

        for i in 0..n.saturating_sub(1) {
            if !self.control.is_running() {
                return seq;
            }
            self.gate.wait_while_paused().await;

            let mut min_index = i;
            self.emitter.on_highlight(&[i], HighlightKind::Comparing);

            for j in i.saturating_add(1)..n {
                if !self.control.is_running() {
                    return seq;
                }
                self.gate.wait_while_paused().await;

                self.compare_step(&[j]).await;
                let smaller = match (seq.get(j), seq.get(min_index)) {
                    (Some(candidate), Some(current)) => candidate < current,
                    _ => false,
                };
                if smaller {
                    if min_index != i {
                        self.emitter.on_highlight_clear(&[min_index]);
                    }
                    min_index = j;
                } else {
                    self.emitter.on_highlight_clear(&[j]);
                }
            }

            if min_index != i {
                seq.swap(i, min_index);
                self.swap_step(&[i, min_index], &seq).await;
                self.emitter.on_highlight_clear(&[min_index]);
            }
            self.emitter.on_highlight_clear(&[i]);
            self.emitter.on_sorted(&[i]);
        }

        if n > 0 {
            self.emitter.on_sorted(&[n.saturating_sub(1)]);
        }
        if self.control.is_running() {
            self.finish();
        }
        seq
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sortviz_types::{is_sorted, same_multiset, SortStats, StepKind};

    use super::*;
    use crate::emitter::{EmitterCall, RecordingEmitter};

    /// Pacing with zero delays and a 1ms pause poll: tests only yield.
    fn test_pacing() -> PacingConfig {
        PacingConfig {
            base_delay_ms: 0,
            delay_step_ms: 0,
            min_delay_ms: 0,
            pause_poll_ms: 1,
            ..PacingConfig::default()
        }
    }

    fn make_sorter() -> (Arc<RunControl>, Arc<RecordingEmitter>, Sorter) {
        let pacing = test_pacing();
        let control = Arc::new(RunControl::new(&pacing).unwrap());
        let emitter = Arc::new(RecordingEmitter::new());
        let sorter = Sorter::new(
            Arc::clone(&control),
            pacing,
            Arc::clone(&emitter) as Arc<dyn StepEmitter>,
        );
        (control, emitter, sorter)
    }

    #[tokio::test]
    async fn all_algorithms_sort_all_inputs() {
        let inputs: Vec<Vec<u32>> = vec![
            vec![],
            vec![7],
            vec![5, 3, 8, 1],
            vec![9, 1, 8, 2, 7],
            vec![3, 3, 3],
            vec![1, 2, 3, 4, 5],
            vec![5, 4, 3, 2, 1],
            vec![42, 17, 42, 1, 99, 17, 3],
        ];

        for algorithm in sortviz_types::ALL_ALGORITHMS {
            for input in &inputs {
                let (control, _, sorter) = make_sorter();
                control.start();
                let output = sorter.sort(algorithm, input).await;
                assert!(
                    is_sorted(&output),
                    "{algorithm} left {input:?} unsorted: {output:?}"
                );
                assert!(
                    same_multiset(input, &output),
                    "{algorithm} changed the multiset of {input:?}: {output:?}"
                );
                // Natural completion releases the run flag.
                assert!(!control.is_running());
            }
        }
    }

    #[tokio::test]
    async fn bubble_reference_trace() {
        let (control, emitter, sorter) = make_sorter();
        control.start();
        let output = sorter.bubble_sort(&[5, 3, 8, 1]).await;

        assert_eq!(output, vec![1, 3, 5, 8]);
        let stats = control.stats();
        // Full shrinking passes: 3 + 2 + 1 comparisons. The input has four
        // inversions, so four swaps (see DESIGN.md on the reference trace).
        assert_eq!(stats.comparisons, 6);
        assert_eq!(stats.swaps, 4);
        assert_eq!(emitter.events_of_kind(StepKind::Complete).len(), 1);
    }

    #[tokio::test]
    async fn empty_input_completes_immediately() {
        for algorithm in sortviz_types::ALL_ALGORITHMS {
            let (control, emitter, sorter) = make_sorter();
            control.start();
            let output = sorter.sort(algorithm, &[]).await;

            assert!(output.is_empty());
            assert_eq!(control.stats(), SortStats::default());
            assert_eq!(
                emitter.events_of_kind(StepKind::Complete).len(),
                1,
                "{algorithm} must fire complete exactly once on empty input"
            );
        }
    }

    #[tokio::test]
    async fn insertion_does_not_shift_equal_elements() {
        let (control, _, sorter) = make_sorter();
        control.start();
        let output = sorter.insertion_sort(&[2, 2, 1]).await;

        assert_eq!(output, vec![1, 2, 2]);
        let stats = control.stats();
        // i=1: key 2 meets the equal 2 and stops without shifting (1 compare).
        // i=2: key 1 shifts past both 2s (2 compares, 2 shifts).
        assert_eq!(stats.comparisons, 3);
        assert_eq!(stats.swaps, 2);
    }

    #[tokio::test]
    async fn merge_tie_break_prefers_left_half() {
        let (control, _, sorter) = make_sorter();
        control.start();
        let output = sorter.merge_sort(&[2, 2, 1]).await;

        assert_eq!(output, vec![1, 2, 2]);
        let stats = control.stats();
        // merge([2],[2]): one compare, left half wins the tie; then
        // merge([2,2],[1]): one compare exhausts the right half and the
        // remaining copies are comparison-free.
        assert_eq!(stats.comparisons, 2);
        assert_eq!(stats.swaps, 0);
    }

    #[tokio::test]
    async fn quick_emits_one_pivot_per_partition() {
        let (control, emitter, sorter) = make_sorter();
        control.start();
        let output = sorter.quick_sort(&[9, 1, 8, 2, 7]).await;

        assert_eq!(output, vec![1, 2, 7, 8, 9]);
        // Partition calls in recursion order: (0,4) pivot 4, (0,1) pivot 1,
        // (3,4) pivot 4.
        let pivots: Vec<Vec<usize>> = emitter
            .events_of_kind(StepKind::Pivot)
            .into_iter()
            .map(|event| event.indices)
            .collect();
        assert_eq!(pivots, vec![vec![4], vec![1], vec![4]]);
    }

    #[tokio::test]
    async fn stop_before_any_step_emits_nothing() {
        let (control, emitter, sorter) = make_sorter();
        control.start();
        control.stop();
        let input = vec![5, 3, 8, 1];
        let output = sorter.bubble_sort(&input).await;

        assert_eq!(output, input);
        assert!(emitter.calls().is_empty());
    }

    /// Emitter that stops the run once the comparison counter reaches a
    /// threshold, recording everything it sees.
    struct StoppingEmitter {
        control: Arc<RunControl>,
        stop_after: u64,
        inner: RecordingEmitter,
    }

    impl StepEmitter for StoppingEmitter {
        fn on_stats_update(&self, stats: SortStats) {
            self.inner.on_stats_update(stats);
            if stats.comparisons >= self.stop_after {
                self.control.stop();
            }
        }

        fn on_highlight(&self, indices: &[usize], kind: HighlightKind) {
            self.inner.on_highlight(indices, kind);
        }

        fn on_highlight_clear(&self, indices: &[usize]) {
            self.inner.on_highlight_clear(indices);
        }

        fn on_sequence_update(&self, sequence: &[u32]) {
            self.inner.on_sequence_update(sequence);
        }

        fn on_sorted(&self, indices: &[usize]) {
            self.inner.on_sorted(indices);
        }

        fn on_all_sorted(&self) {
            self.inner.on_all_sorted();
        }

        fn on_complete(&self) {
            self.inner.on_complete();
        }

        fn play_sound(&self, cue: SoundCue) {
            self.inner.play_sound(cue);
        }
    }

    #[tokio::test]
    async fn stop_mid_run_skips_completion() {
        for algorithm in sortviz_types::ALL_ALGORITHMS {
            let pacing = test_pacing();
            let control = Arc::new(RunControl::new(&pacing).unwrap());
            let emitter = Arc::new(StoppingEmitter {
                control: Arc::clone(&control),
                stop_after: 2,
                inner: RecordingEmitter::new(),
            });
            let sorter = Sorter::new(
                Arc::clone(&control),
                pacing,
                Arc::clone(&emitter) as Arc<dyn StepEmitter>,
            );

            control.start();
            let input = vec![6, 5, 4, 3, 2, 1];
            let output = sorter.sort(algorithm, &input).await;

            assert!(
                same_multiset(&input, &output),
                "{algorithm} broke the multiset on cancellation: {output:?}"
            );
            assert!(
                !emitter
                    .inner
                    .calls()
                    .iter()
                    .any(|call| matches!(call, EmitterCall::Complete)),
                "{algorithm} emitted complete after a stop"
            );
            assert!(!control.is_running());
        }
    }

    /// Emitter that stops the run from inside the first sequence publish,
    /// the point right after a slot write lands.
    struct SequenceStopEmitter {
        control: Arc<RunControl>,
        inner: RecordingEmitter,
    }

    impl StepEmitter for SequenceStopEmitter {
        fn on_sequence_update(&self, sequence: &[u32]) {
            self.inner.on_sequence_update(sequence);
            self.control.stop();
        }

        fn on_complete(&self) {
            self.inner.on_complete();
        }
    }

    #[tokio::test]
    async fn stop_during_sequence_publish_keeps_a_permutation() {
        let inputs: Vec<Vec<u32>> = vec![vec![2, 1], vec![5, 3, 8, 1, 4]];
        for algorithm in sortviz_types::ALL_ALGORITHMS {
            for input in &inputs {
                let pacing = test_pacing();
                let control = Arc::new(RunControl::new(&pacing).unwrap());
                let emitter = Arc::new(SequenceStopEmitter {
                    control: Arc::clone(&control),
                    inner: RecordingEmitter::new(),
                });
                let sorter = Sorter::new(
                    Arc::clone(&control),
                    pacing,
                    Arc::clone(&emitter) as Arc<dyn StepEmitter>,
                );

                control.start();
                let output = sorter.sort(algorithm, input).await;

                assert!(
                    same_multiset(input, &output),
                    "{algorithm} lost elements on a mid-write stop: \
                     input {input:?}, output {output:?}"
                );
                assert!(
                    !emitter
                        .inner
                        .calls()
                        .iter()
                        .any(|call| matches!(call, EmitterCall::Complete)),
                    "{algorithm} emitted complete after a stop"
                );
            }
        }
    }

    #[tokio::test]
    async fn counters_reset_between_runs() {
        let (control, _, sorter) = make_sorter();

        control.start();
        let _ = sorter.bubble_sort(&[5, 3, 8, 1]).await;
        let first = control.stats();
        assert_eq!(first.comparisons, 6);

        control.start();
        let _ = sorter.bubble_sort(&[5, 3, 8, 1]).await;
        let second = control.stats();
        assert_eq!(second, first, "counters must not accumulate across runs");
    }

    #[tokio::test]
    async fn selection_swaps_only_on_strictly_smaller_minimum() {
        let (control, _, sorter) = make_sorter();
        control.start();
        let output = sorter.selection_sort(&[1, 2, 3]).await;

        assert_eq!(output, vec![1, 2, 3]);
        let stats = control.stats();
        // Already sorted: every scan ends with min_index == i.
        assert_eq!(stats.comparisons, 3);
        assert_eq!(stats.swaps, 0);
    }

    #[tokio::test]
    async fn heap_paces_swaps_but_not_heapify_compares() {
        let (control, emitter, sorter) = make_sorter();
        control.start();
        let output = sorter.heap_sort(&[4, 1, 3]).await;

        assert_eq!(output, vec![1, 3, 4]);
        let stats = control.stats();
        assert!(stats.comparisons > 0);
        // Every swap published the sequence with a swapping highlight.
        let swap_highlights = emitter
            .calls()
            .iter()
            .filter(|call| {
                matches!(
                    call,
                    EmitterCall::Highlight {
                        kind: HighlightKind::Swapping,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(u64::try_from(swap_highlights).unwrap(), stats.swaps);
        // No comparing highlights: heapify counts comparisons silently.
        assert!(!emitter.calls().iter().any(|call| {
            matches!(
                call,
                EmitterCall::Highlight {
                    kind: HighlightKind::Comparing,
                    ..
                }
            )
        }));
    }
}
