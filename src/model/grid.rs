//! Grid state for the pathfinding engine
//!
//! A grid is a dense 2-D arena of [`GridCell`]s. All cross-cell references
//! (parent pointers, start/end markers, the open-set overlay) are stored as
//! [`Coord`]s into the owning grid, so cloning a [`GridState`] yields a fully
//! independent grid whose back-references resolve inside the clone.

/// Sentinel distance for cells not yet reached from the start.
pub const UNREACHED: u32 = u32::MAX;

/// A `(row, col)` position inside a grid.
pub type Coord = (usize, usize);

/// A single cell in the pathfinding grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    /// Row index (identity, immutable within a grid).
    pub row: usize,
    /// Column index (identity, immutable within a grid).
    pub col: usize,
    /// Cost to travel through this cell, for weighted algorithms.
    pub weight: u32,
    /// Whether this cell is an obstacle.
    pub is_wall: bool,
    /// Whether this cell is the designated start.
    pub is_start: bool,
    /// Whether this cell is the designated end.
    pub is_end: bool,
    /// Whether an algorithm has visited this cell.
    pub is_visited: bool,
    /// Whether this cell lies on the reconstructed path.
    pub is_path: bool,
    /// Tentative cost from the start ([`UNREACHED`] until discovered).
    pub distance: u32,
    /// Estimated cost to the goal (informed searches only).
    pub heuristic: u32,
    /// Coordinate of the cell this one was reached from, for path
    /// reconstruction. Always refers into the same grid instance.
    pub parent: Option<Coord>,
}

impl GridCell {
    pub fn new(row: usize, col: usize) -> Self {
        GridCell {
            row,
            col,
            weight: 1,
            is_wall: false,
            is_start: false,
            is_end: false,
            is_visited: false,
            is_path: false,
            distance: UNREACHED,
            heuristic: 0,
            parent: None,
        }
    }

    /// Combined priority for A*: tentative distance plus heuristic.
    ///
    /// Saturates so an [`UNREACHED`] cell keeps the maximum priority
    /// regardless of its heuristic.
    pub fn total_cost(&self) -> u32 {
        self.distance.saturating_add(self.heuristic)
    }

    pub fn coord(&self) -> Coord {
        (self.row, self.col)
    }
}

/// The entire state of a pathfinding grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    /// Row-major cell storage; `cells[r][c]` has identity `(r, c)`.
    cells: Vec<Vec<GridCell>>,
    /// Coordinate of the start cell, if one is designated.
    pub start: Option<Coord>,
    /// Coordinate of the end cell, if one is designated.
    pub end: Option<Coord>,
    /// Frontier overlay for visualization of informed searches.
    pub open_set: Vec<Coord>,
}

impl GridState {
    /// Create a grid of the given dimensions with default cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        let cells = (0..rows)
            .map(|r| (0..cols).map(|c| GridCell::new(r, c)).collect())
            .collect();
        GridState {
            cells,
            start: None,
            end: None,
            open_set: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows() && (col as usize) < self.cols()
    }

    /// Borrow the cell at `coord`. The coordinate must be in bounds.
    pub fn cell(&self, coord: Coord) -> &GridCell {
        &self.cells[coord.0][coord.1]
    }

    /// Mutably borrow the cell at `coord`. The coordinate must be in bounds.
    pub fn cell_mut(&mut self, coord: Coord) -> &mut GridCell {
        &mut self.cells[coord.0][coord.1]
    }

    /// Iterate all cells in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter().flat_map(|row| row.iter())
    }

    /// Designate `coord` as the start cell, clearing any previous start.
    pub fn set_start(&mut self, coord: Coord) {
        if let Some(old) = self.start {
            self.cell_mut(old).is_start = false;
        }
        self.cell_mut(coord).is_start = true;
        self.start = Some(coord);
    }

    /// Designate `coord` as the end cell, clearing any previous end.
    pub fn set_end(&mut self, coord: Coord) {
        if let Some(old) = self.end {
            self.cell_mut(old).is_end = false;
        }
        self.cell_mut(coord).is_end = true;
        self.end = Some(coord);
    }

    pub fn set_wall(&mut self, coord: Coord, wall: bool) {
        self.cell_mut(coord).is_wall = wall;
    }

    pub fn set_weight(&mut self, coord: Coord, weight: u32) {
        self.cell_mut(coord).weight = weight;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_is_fully_isolated() {
        let mut grid = GridState::new(3, 3);
        grid.set_start((0, 0));
        grid.set_end((2, 2));
        grid.cell_mut((1, 1)).parent = Some((0, 1));
        grid.open_set.push((1, 1));

        let mut copy = grid.clone();
        copy.cell_mut((1, 1)).parent = Some((2, 1));
        copy.cell_mut((0, 0)).is_visited = true;
        copy.open_set.clear();

        assert_eq!(grid.cell((1, 1)).parent, Some((0, 1)));
        assert!(!grid.cell((0, 0)).is_visited);
        assert_eq!(grid.open_set, vec![(1, 1)]);
    }

    #[test]
    fn set_start_clears_previous_marker() {
        let mut grid = GridState::new(2, 2);
        grid.set_start((0, 0));
        grid.set_start((1, 1));
        assert!(!grid.cell((0, 0)).is_start);
        assert!(grid.cell((1, 1)).is_start);
        assert_eq!(grid.start, Some((1, 1)));
    }

    #[test]
    fn total_cost_saturates_at_unreached() {
        let mut cell = GridCell::new(0, 0);
        cell.heuristic = 10;
        assert_eq!(cell.total_cost(), UNREACHED);
        cell.distance = 3;
        assert_eq!(cell.total_cost(), 13);
    }
}
