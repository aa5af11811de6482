//! Dijkstra's algorithm: uniform-cost search over weighted cells.

use crate::model::grid::{Coord, GridState, UNREACHED};
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
    // Every non-wall cell starts unvisited; the start already holds
    // distance 0 from the pre-run reset.
    let mut unvisited: Vec<Coord> = state
        .iter_cells()
        .filter(|cell| !cell.is_wall)
        .map(|cell| cell.coord())
        .collect();
    sink.emit(|| {
        (
            state.clone(),
            format!("Starting Dijkstra's algorithm at ({}, {})", start.0, start.1),
        )
    });

    while !unvisited.is_empty() {
        // Stable sort keeps scan order as the tie-break for equal distances.
        unvisited.sort_by_key(|&coord| state.cell(coord).distance);
        let current = unvisited.remove(0);
        if state.cell(current).distance == UNREACHED {
            sink.emit(|| {
                (
                    state.clone(),
                    "Remaining cells are unreachable".to_string(),
                )
            });
            break;
        }
        state.cell_mut(current).is_visited = true;
        sink.emit(|| {
            (
                state.clone(),
                format!(
                    "Visiting cell ({}, {}) at distance {}",
                    current.0,
                    current.1,
                    state.cell(current).distance
                ),
            )
        });
        if current == end {
            break;
        }
        let current_distance = state.cell(current).distance;
        for next in neighbors(state, current, allow_diagonal) {
            if state.cell(next).is_visited {
                continue;
            }
            let tentative = current_distance + state.cell(next).weight;
            if tentative < state.cell(next).distance {
                let cell = state.cell_mut(next);
                cell.distance = tentative;
                cell.parent = Some(current);
                sink.emit(|| {
                    (
                        state.clone(),
                        format!(
                            "Updated distance of ({}, {}) to {}",
                            next.0, next.1, tentative
                        ),
                    )
                });
            }
        }
    }

    record_outcome(state, start, end, sink);
}
