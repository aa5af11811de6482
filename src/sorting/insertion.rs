//! Insertion sort: grows a sorted prefix by shifting and inserting.

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
    finalized[0] = true;
    sink.emit(|| {
        (
            SortingState::snapshot(values, finalized),
            format!("{} starts the sorted prefix", values[0]),
        )
    });
    for i in 1..values.len() {
        let key = values[i];
        sink.emit(|| {
            (
                SortingState {
                    compare_a: Some(i),
                    ..SortingState::snapshot(values, finalized)
                },
                format!("Inserting {key} into the sorted prefix"),
            )
        });
        let mut j = i;
        while j > 0 && values[j - 1] > key {
            sink.emit(|| {
                (
                    SortingState {
                        compare_a: Some(j - 1),
                        compare_b: Some(j),
                        ..SortingState::snapshot(values, finalized)
                    },
                    format!("{} is greater than {key}; shifting it right", values[j - 1]),
                )
            });
            values[j] = values[j - 1];
            j -= 1;
        }
        values[j] = key;
        sink.emit(|| {
            (
                SortingState {
                    compare_a: Some(j),
                    ..SortingState::snapshot(values, finalized)
                },
                format!("Placed {key} at position {j}"),
            )
        });
        for slot in finalized[..=i].iter_mut() {
            *slot = true;
        }
        sink.emit(|| {
            (
                SortingState::snapshot(values, finalized),
                format!("Sorted prefix now spans positions 0 through {i}"),
            )
        });
    }
}
