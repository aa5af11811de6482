//! Depth-first search: LIFO frontier, no optimality guarantee.

use crate::model::grid::{Coord, GridState};
use crate::trace::StepSink;

use super::grid_utils::neighbors;
use super::record_outcome;

pub(super) fn run(
    state: &mut GridState,
    start: Coord,
    end: Coord,
    allow_diagonal: bool,
    sink: &mut StepSink<'_, '_, GridState>,
) {
    let mut stack = Vec::new();
    state.cell_mut(start).is_visited = true;
    stack.push(start);
    sink.emit(|| {
        (
            state.clone(),
            format!("Starting depth-first search at ({}, {})", start.0, start.1),
        )
    });

    while let Some(current) = stack.pop() {
        sink.emit(|| {
            (
                state.clone(),
                format!("Visiting cell ({}, {})", current.0, current.1),
            )
        });
        if current == end {
            break;
        }
        let mut advanced = false;
        for next in neighbors(state, current, allow_diagonal) {
            if !state.cell(next).is_visited {
                let cell = state.cell_mut(next);
                cell.is_visited = true;
                cell.parent = Some(current);
                stack.push(next);
                advanced = true;
                sink.emit(|| {
                    (
                        state.clone(),
                        format!("Discovered cell ({}, {})", next.0, next.1),
                    )
                });
            }
        }
        if !advanced {
            sink.emit(|| {
                (
                    state.clone(),
                    format!("Backtracking from ({}, {})", current.0, current.1),
                )
            });
        }
    }

    record_outcome(state, start, end, sink);
}
