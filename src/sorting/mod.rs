//! Sorting strategies
//!
//! Five comparison sorts behind one enum. As with the other engines, each
//! strategy is a single stepped core shared by [`SortingAlgorithm::execute`]
//! (silent) and [`SortingAlgorithm::trace`] (recording), so the sorted output
//! never depends on whether steps were kept.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;

use tracing::debug;

use crate::model::sorting::SortingState;
use crate::trace::{Step, StepRecorder, StepSink};

/// Selects one of the comparison sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortingAlgorithm {
    Bubble,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl SortingAlgorithm {
    pub const ALL: [SortingAlgorithm; 5] = [
        SortingAlgorithm::Bubble,
        SortingAlgorithm::Insertion,
        SortingAlgorithm::Merge,
        SortingAlgorithm::Quick,
        SortingAlgorithm::Heap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortingAlgorithm::Bubble => "Bubble Sort",
            SortingAlgorithm::Insertion => "Insertion Sort",
            SortingAlgorithm::Merge => "Merge Sort",
            SortingAlgorithm::Quick => "Quick Sort",
            SortingAlgorithm::Heap => "Heap Sort",
        }
    }

    /// One-sentence summary of how the sort works.
    pub fn description(self) -> &'static str {
        match self {
            SortingAlgorithm::Bubble => {
                "Repeatedly swaps adjacent out-of-order pairs, bubbling the largest \
                 remaining value to the end of each pass."
            }
            SortingAlgorithm::Insertion => {
                "Grows a sorted prefix by shifting greater predecessors right and \
                 inserting each value into place."
            }
            SortingAlgorithm::Merge => {
                "Recursively splits the array in half, sorts each half, and merges \
                 them back together."
            }
            SortingAlgorithm::Quick => {
                "Partitions around the last element so smaller values land left of \
                 the pivot, then recurses into both partitions."
            }
            SortingAlgorithm::Heap => {
                "Builds a max-heap, then repeatedly swaps the root to the end and \
                 sifts the new root down."
            }
        }
    }

    pub fn time_complexity(self) -> &'static str {
        match self {
            SortingAlgorithm::Bubble => "O(n²)",
            SortingAlgorithm::Insertion => "O(n²) worst case, O(n) best case",
            SortingAlgorithm::Merge => "O(n log n)",
            SortingAlgorithm::Quick => "O(n log n) average, O(n²) worst case",
            SortingAlgorithm::Heap => "O(n log n)",
        }
    }

    pub fn space_complexity(self) -> &'static str {
        match self {
            SortingAlgorithm::Merge => "O(n)",
            SortingAlgorithm::Quick => "O(log n)",
            _ => "O(1)",
        }
    }

    /// Sort a copy of `values` and return it; the input is never mutated.
    pub fn execute(self, values: &[i32]) -> Vec<i32> {
        let mut working = values.to_vec();
        let mut finalized = vec![false; working.len()];
        debug!(algorithm = self.name(), len = working.len(), "executing sort");
        self.run(&mut working, &mut finalized, &mut StepSink::Silent);
        working
    }

    /// Sort a copy of `values`, recording every step.
    pub fn trace(self, values: &[i32]) -> Vec<Step<SortingState>> {
        let mut recorder = StepRecorder::new();
        self.trace_into(values, &mut recorder);
        recorder.into_steps()
    }

    /// Trace into a caller-provided recorder, e.g. one carrying an observer.
    pub fn trace_into(self, values: &[i32], recorder: &mut StepRecorder<'_, SortingState>) {
        let mut working = values.to_vec();
        let mut finalized = vec![false; working.len()];
        debug!(algorithm = self.name(), len = working.len(), "tracing sort");
        self.run(&mut working, &mut finalized, &mut StepSink::Recording(recorder));
    }

    fn run(
        self,
        values: &mut [i32],
        finalized: &mut [bool],
        sink: &mut StepSink<'_, '_, SortingState>,
    ) {
        let name = self.name();
        sink.emit(|| {
            (
                SortingState::snapshot(values, finalized),
                format!("Starting {name}"),
            )
        });
        match self {
            SortingAlgorithm::Bubble => bubble::run(values, finalized, sink),
            SortingAlgorithm::Insertion => insertion::run(values, finalized, sink),
            SortingAlgorithm::Merge => merge::run(values, finalized, sink),
            SortingAlgorithm::Quick => quick::run(values, finalized, sink),
            SortingAlgorithm::Heap => heap::run(values, finalized, sink),
        }
        finalized.fill(true);
        sink.emit(|| {
            (
                SortingState::snapshot(values, finalized),
                "Array is fully sorted".to_string(),
            )
        });
    }
}
