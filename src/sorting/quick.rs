//! Quicksort: Lomuto partitioning with the last element as pivot.

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
    let hi = values.len() as isize - 1;
    sort_range(values, finalized, 0, hi, sink);
}

/// Sort the inclusive range `[lo, hi]`; signed bounds so an empty partition
/// left of index 0 is representable.
fn sort_range(
    values: &mut [i32],
    finalized: &mut [bool],
    lo: isize,
    hi: isize,
    sink: &mut StepSink<'_, '_, SortingState>,
) {
    if lo > hi {
        return;
    }
    if lo == hi {
        let only = lo as usize;
        finalized[only] = true;
        sink.emit(|| {
            (
                SortingState {
                    sub_array: Some((only, only)),
                    ..SortingState::snapshot(values, finalized)
                },
                format!("{} is in its final position", values[only]),
            )
        });
        return;
    }
    let pivot_index = partition(values, finalized, lo as usize, hi as usize, sink);
    finalized[pivot_index] = true;
    sink.emit(|| {
        (
            SortingState {
                pivot: Some(pivot_index),
                sub_array: Some((lo as usize, hi as usize)),
                ..SortingState::snapshot(values, finalized)
            },
            format!("Pivot {} is in its final position", values[pivot_index]),
        )
    });
    sort_range(values, finalized, lo, pivot_index as isize - 1, sink);
    sort_range(values, finalized, pivot_index as isize + 1, hi, sink);
}

/// Lomuto partition of `[lo, hi]` around `values[hi]`; returns the pivot's
/// final index.
fn partition(
    values: &mut [i32],
    finalized: &mut [bool],
    lo: usize,
    hi: usize,
    sink: &mut StepSink<'_, '_, SortingState>,
) -> usize {
    let pivot = values[hi];
    sink.emit(|| {
        (
            SortingState {
                pivot: Some(hi),
                sub_array: Some((lo, hi)),
                ..SortingState::snapshot(values, finalized)
            },
            format!("Partitioning [{lo}, {hi}] around pivot {pivot}"),
        )
    });
    let mut boundary = lo;
    for j in lo..hi {
        sink.emit(|| {
            (
                SortingState {
                    compare_a: Some(j),
                    compare_b: Some(hi),
                    pivot: Some(hi),
                    sub_array: Some((lo, hi)),
                    ..SortingState::snapshot(values, finalized)
                },
                format!("Comparing {} with pivot {pivot}", values[j]),
            )
        });
        if values[j] < pivot {
            if boundary != j {
                values.swap(boundary, j);
                sink.emit(|| {
                    (
                        SortingState {
                            compare_a: Some(boundary),
                            compare_b: Some(j),
                            pivot: Some(hi),
                            sub_array: Some((lo, hi)),
                            ..SortingState::snapshot(values, finalized)
                        },
                        format!("Moved {} below the partition boundary", values[boundary]),
                    )
                });
            }
            boundary += 1;
        }
    }
    values.swap(boundary, hi);
    sink.emit(|| {
        (
            SortingState {
                pivot: Some(boundary),
                sub_array: Some((lo, hi)),
                ..SortingState::snapshot(values, finalized)
            },
            format!("Moved pivot {pivot} to position {boundary}"),
        )
    });
    boundary
}
