//! Merge sort: recursive split and merge with explicit sub-array bounds.
//!
//! Only a merge spanning the whole array marks its range finalized;
//! sub-merges leave the markers alone.

use crate::model::sorting::SortingState;
use crate::trace::StepSink;

pub(super) fn run(
    values: &mut [i32],
    finalized: &mut [bool],
    sink: &mut StepSink<'_, '_, SortingState>,
) {
    if values.is_empty() {
        return;
    }
    let hi = values.len() - 1;
    sort_range(values, finalized, 0, hi, sink);
}

/// Sort the inclusive range `[lo, hi]`.
fn sort_range(
    values: &mut [i32],
    finalized: &mut [bool],
    lo: usize,
    hi: usize,
    sink: &mut StepSink<'_, '_, SortingState>,
) {
    if lo >= hi {
        sink.emit(|| {
            (
                SortingState {
                    sub_array: Some((lo, hi)),
                    ..SortingState::snapshot(values, finalized)
                },
                format!("Sub-array [{lo}, {hi}] has one element"),
            )
        });
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sink.emit(|| {
        (
            SortingState {
                sub_array: Some((lo, hi)),
                ..SortingState::snapshot(values, finalized)
            },
            format!("Splitting [{lo}, {hi}] into [{lo}, {mid}] and [{}, {hi}]", mid + 1),
        )
    });
    sort_range(values, finalized, lo, mid, sink);
    sort_range(values, finalized, mid + 1, hi, sink);
    merge(values, finalized, lo, mid, hi, sink);
}

/// Merge the sorted halves `[lo, mid]` and `[mid + 1, hi]`.
fn merge(
    values: &mut [i32],
    finalized: &mut [bool],
    lo: usize,
    mid: usize,
    hi: usize,
    sink: &mut StepSink<'_, '_, SortingState>,
) {
    sink.emit(|| {
        (
            SortingState {
                sub_array: Some((lo, hi)),
                ..SortingState::snapshot(values, finalized)
            },
            format!("Merging [{lo}, {mid}] with [{}, {hi}]", mid + 1),
        )
    });
    let left: Vec<i32> = values[lo..=mid].to_vec();
    let right: Vec<i32> = values[mid + 1..=hi].to_vec();
    let mut i = 0;
    let mut j = 0;
    let mut k = lo;
    while i < left.len() && j < right.len() {
        sink.emit(|| {
            (
                SortingState {
                    compare_a: Some(lo + i),
                    compare_b: Some(mid + 1 + j),
                    sub_array: Some((lo, hi)),
                    ..SortingState::snapshot(values, finalized)
                },
                format!("Comparing {} and {}", left[i], right[j]),
            )
        });
        let taken = if left[i] <= right[j] {
            i += 1;
            left[i - 1]
        } else {
            j += 1;
            right[j - 1]
        };
        values[k] = taken;
        sink.emit(|| {
            (
                SortingState {
                    compare_a: Some(k),
                    sub_array: Some((lo, hi)),
                    ..SortingState::snapshot(values, finalized)
                },
                format!("Placed {taken} at position {k}"),
            )
        });
        k += 1;
    }
    for &value in &left[i..] {
        values[k] = value;
        sink.emit(|| {
            (
                SortingState {
                    compare_a: Some(k),
                    sub_array: Some((lo, hi)),
                    ..SortingState::snapshot(values, finalized)
                },
                format!("Placed {value} at position {k}"),
            )
        });
        k += 1;
    }
    for &value in &right[j..] {
        values[k] = value;
        sink.emit(|| {
            (
                SortingState {
                    compare_a: Some(k),
                    sub_array: Some((lo, hi)),
                    ..SortingState::snapshot(values, finalized)
                },
                format!("Placed {value} at position {k}"),
            )
        });
        k += 1;
    }
    // Only the merge spanning the entire array proves positions final.
    if lo == 0 && hi == values.len() - 1 {
        for slot in finalized[lo..=hi].iter_mut() {
            *slot = true;
        }
        sink.emit(|| {
            (
                SortingState {
                    sub_array: Some((lo, hi)),
                    ..SortingState::snapshot(values, finalized)
                },
                "Full array merged; every position is final".to_string(),
            )
        });
    }
}
