//! Breadth-first search: FIFO frontier, shortest path by edge count.

use std::collections::VecDeque;

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
    let mut queue = VecDeque::new();
    state.cell_mut(start).is_visited = true;
    queue.push_back(start);
    sink.emit(|| {
        (
            state.clone(),
            format!("Starting breadth-first search at ({}, {})", start.0, start.1),
        )
    });

    while let Some(current) = queue.pop_front() {
        sink.emit(|| {
            (
                state.clone(),
                format!("Visiting cell ({}, {})", current.0, current.1),
            )
        });
        if current == end {
            break;
        }
        let current_distance = state.cell(current).distance;
        for next in neighbors(state, current, allow_diagonal) {
            if !state.cell(next).is_visited {
                let cell = state.cell_mut(next);
                cell.is_visited = true;
                cell.parent = Some(current);
                cell.distance = current_distance + 1;
                queue.push_back(next);
                sink.emit(|| {
                    (
                        state.clone(),
                        format!(
                            "Discovered cell ({}, {}) at distance {}",
                            next.0,
                            next.1,
                            current_distance + 1
                        ),
                    )
                });
            }
        }
    }

    record_outcome(state, start, end, sink);
}
