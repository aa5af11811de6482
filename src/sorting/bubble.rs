//! Bubble sort: adjacent compare-and-swap passes with early exit.

use crate::model::sorting::SortingState;
use crate::trace::StepSink;

pub(super) fn run(
    values: &mut [i32],
    finalized: &mut [bool],
    sink: &mut StepSink<'_, '_, SortingState>,
) {
    // pass_end is the index proven final at the end of each pass.
    for pass_end in (1..values.len()).rev() {
        let mut swapped = false;
        for j in 0..pass_end {
            sink.emit(|| {
                (
                    SortingState {
                        compare_a: Some(j),
                        compare_b: Some(j + 1),
                        ..SortingState::snapshot(values, finalized)
                    },
                    format!("Comparing {} and {}", values[j], values[j + 1]),
                )
            });
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                swapped = true;
                sink.emit(|| {
                    (
                        SortingState {
                            compare_a: Some(j),
                            compare_b: Some(j + 1),
                            ..SortingState::snapshot(values, finalized)
                        },
                        format!("Swapped {} and {}", values[j + 1], values[j]),
                    )
                });
            }
        }
        finalized[pass_end] = true;
        sink.emit(|| {
            (
                SortingState::snapshot(values, finalized),
                format!("{} is in its final position", values[pass_end]),
            )
        });
        if !swapped {
            for slot in finalized[..pass_end].iter_mut() {
                *slot = true;
            }
            sink.emit(|| {
                (
                    SortingState::snapshot(values, finalized),
                    "No swaps in this pass; remaining elements are already sorted".to_string(),
                )
            });
            break;
        }
    }
}
