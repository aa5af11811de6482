//! Heap sort: bottom-up max-heap build, then repeated root extraction.

use crate::model::sorting::SortingState;
use crate::trace::StepSink;

pub(super) fn run(
    values: &mut [i32],
    finalized: &mut [bool],
    sink: &mut StepSink<'_, '_, SortingState>,
) {
    let n = values.len();
    if n < 2 {
        return;
    }
    sink.emit(|| {
        (
            SortingState::snapshot(values, finalized),
            "Building a max-heap".to_string(),
        )
    });
    for root in (0..n / 2).rev() {
        sift_down(values, finalized, root, n, sink);
    }
    sink.emit(|| {
        (
            SortingState::snapshot(values, finalized),
            "Max-heap built; extracting the maximum repeatedly".to_string(),
        )
    });
    for heap_end in (1..n).rev() {
        values.swap(0, heap_end);
        finalized[heap_end] = true;
        sink.emit(|| {
            (
                SortingState {
                    compare_a: Some(0),
                    compare_b: Some(heap_end),
                    ..SortingState::snapshot(values, finalized)
                },
                format!(
                    "Moved {} to its final position {heap_end}",
                    values[heap_end]
                ),
            )
        });
        sift_down(values, finalized, 0, heap_end, sink);
    }
    finalized[0] = true;
    sink.emit(|| {
        (
            SortingState::snapshot(values, finalized),
            format!("{} is in its final position", values[0]),
        )
    });
}

/// Restore the max-heap property for `root` within the first `len` elements.
fn sift_down(
    values: &mut [i32],
    finalized: &mut [bool],
    mut root: usize,
    len: usize,
    sink: &mut StepSink<'_, '_, SortingState>,
) {
    loop {
        let mut child = 2 * root + 1;
        if child >= len {
            break;
        }
        if child + 1 < len && values[child + 1] > values[child] {
            child += 1;
        }
        sink.emit(|| {
            (
                SortingState {
                    compare_a: Some(root),
                    compare_b: Some(child),
                    ..SortingState::snapshot(values, finalized)
                },
                format!("Comparing {} with its larger child {}", values[root], values[child]),
            )
        });
        if values[child] <= values[root] {
            break;
        }
        values.swap(root, child);
        sink.emit(|| {
            (
                SortingState {
                    compare_a: Some(root),
                    compare_b: Some(child),
                    ..SortingState::snapshot(values, finalized)
                },
                format!("Swapped {} down with {}", values[child], values[root]),
            )
        });
        root = child;
    }
}
