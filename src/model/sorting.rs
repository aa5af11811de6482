//! Sorting state snapshots
//!
//! A [`SortingState`] is one frame of a sort in progress: the array contents
//! plus the annotations a renderer needs to show what the algorithm is doing
//! (which indices are being compared, where the pivot sits, which sub-array
//! is active, and which positions are proven final).

/// Snapshot of a sorting algorithm at one point in its run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortingState {
    /// Current contents of the array being sorted.
    pub values: Vec<i32>,
    /// First index of the pair currently being compared or swapped.
    pub compare_a: Option<usize>,
    /// Second index of the pair currently being compared or swapped.
    pub compare_b: Option<usize>,
    /// Pivot index, for partition-based algorithms.
    pub pivot: Option<usize>,
    /// Inclusive bounds of the sub-array currently being processed.
    pub sub_array: Option<(usize, usize)>,
    /// Per-index marker: `true` once the element is proven to occupy its
    /// final sorted position.
    pub finalized: Vec<bool>,
}

impl SortingState {
    /// Plain snapshot of the array and finalized markers, no annotations.
    ///
    /// Algorithms build annotated frames from this with struct update syntax.
    pub fn snapshot(values: &[i32], finalized: &[bool]) -> Self {
        SortingState {
            values: values.to_vec(),
            finalized: finalized.to_vec(),
            ..SortingState::default()
        }
    }
}
