//! Grid model module.
//!
//! This module contains the [`Grid`] struct along with the cell classification and the
//! bounds-checked 4-directional adjacency queries the pathfinding search relies on.

use thiserror::Error;

/// Grid coordinate as a `(row, column)` pair.
pub type Coord = (usize, usize);

/// Axis-aligned step offsets in the order they are explored: up, down, left, right.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Classification of a single grid cell.
///
/// This enumeration tells apart the cells that block movement from those that can be walked on,
/// with the two endpoints of a round marked separately so they can be rendered and validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Impassable cell.
    Wall,
    /// Walkable cell with no special meaning.
    Open,
    /// Walkable cell where every path begins.
    Start,
    /// Walkable cell where every path ends.
    End,
}

impl Cell {
    /// Returns whether the cell can be stepped on.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Invalid grid or search configuration.
///
/// These errors are programmer or configuration mistakes. They are raised immediately instead of
/// letting a search run on endpoints that make no sense.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    /// One of the grid dimensions is zero.
    #[error("grid dimensions must be non-zero, got {rows}x{cols}")]
    EmptyGrid {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },
    /// A generated board is too small to hold its start and end quadrants.
    #[error("board of {rows}x{cols} is too small, both sides must be at least {min_side}")]
    BoardTooSmall {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
        /// Smallest accepted side.
        min_side: usize,
    },
    /// A coordinate lies outside the grid.
    #[error("coordinate ({row}, {col}) lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        /// Row of the offending coordinate.
        row: usize,
        /// Column of the offending coordinate.
        col: usize,
        /// Number of rows in the grid.
        rows: usize,
        /// Number of columns in the grid.
        cols: usize,
    },
    /// A search endpoint sits on a wall.
    #[error("endpoint ({row}, {col}) is a wall")]
    WallEndpoint {
        /// Row of the walled endpoint.
        row: usize,
        /// Column of the walled endpoint.
        col: usize,
    },
    /// Start and end share the same coordinate.
    #[error("start and end both sit at ({row}, {col})")]
    IdenticalEndpoints {
        /// Row shared by both endpoints.
        row: usize,
        /// Column shared by both endpoints.
        col: usize,
    },
}

/// Rectangular board of classified cells.
///
/// The grid is built once per round and never mutated afterwards. Cells are stored row-major, so a
/// cell index is `row * cols + col`; the pathfinding module uses those indices for its scratch
/// tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Row-major cell classifications.
    cells: Vec<Cell>,
    /// Coordinate of the single start cell.
    start: Coord,
    /// Coordinate of the single end cell.
    end: Coord,
}

/// Builds a grid from its dimensions, a wall predicate and both endpoints.
///
/// The predicate is called once per cell in row-major order, skipping the two endpoints, which are
/// always classified as [`Cell::Start`] and [`Cell::End`]. It may carry state (a random generator,
/// for instance), hence the [`FnMut`] bound.
///
/// # Errors
///
/// This function returns a [`SetupError`] if:
/// - Either dimension is zero
/// - An endpoint lies outside the grid
/// - Both endpoints are the same cell
pub fn build_grid<F>(
    rows: usize,
    cols: usize,
    mut is_wall: F,
    start: Coord,
    end: Coord,
) -> Result<Grid, SetupError>
where
    F: FnMut(Coord) -> bool,
{
    if rows == 0 || cols == 0 {
        return Err(SetupError::EmptyGrid { rows, cols });
    }
    for (row, col) in [start, end] {
        if row >= rows || col >= cols {
            return Err(SetupError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            });
        }
    }
    if start == end {
        return Err(SetupError::IdenticalEndpoints {
            row: start.0,
            col: start.1,
        });
    }

    let mut cells = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let coord = (row, col);
            let cell = if coord == start {
                Cell::Start
            } else if coord == end {
                Cell::End
            } else if is_wall(coord) {
                Cell::Wall
            } else {
                Cell::Open
            };
            cells.push(cell);
        }
    }

    Ok(Grid {
        rows,
        cols,
        cells,
        start,
        end,
    })
}

/// Returns whether two coordinates are one 4-connected step apart.
#[must_use]
pub const fn is_step(from: Coord, to: Coord) -> bool {
    from.0.abs_diff(to.0) + from.1.abs_diff(to.1) == 1
}

impl Grid {
    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the coordinate of the start cell.
    #[must_use]
    pub const fn start(&self) -> Coord {
        self.start
    }

    /// Returns the coordinate of the end cell.
    #[must_use]
    pub const fn end(&self) -> Coord {
        self.end
    }

    /// Returns whether the coordinate lies within `[0, rows) x [0, cols)`.
    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.0 < self.rows && coord.1 < self.cols
    }

    /// Classifies the cell at the given coordinate.
    ///
    /// # Errors
    ///
    /// This function returns [`SetupError::OutOfBounds`] if the coordinate lies outside the grid.
    pub fn classify(&self, coord: Coord) -> Result<Cell, SetupError> {
        self.index_of(coord)
            .and_then(|idx| self.cells.get(idx).copied())
            .ok_or(SetupError::OutOfBounds {
                row: coord.0,
                col: coord.1,
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// Returns the passable neighbours of a coordinate.
    ///
    /// Neighbours are yielded in the fixed order up, down, left, right, and only those that are in
    /// bounds and not walls are kept. The fixed order makes path enumeration reproducible.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        DIRECTIONS.into_iter().filter_map(move |(d_row, d_col)| {
            let next = (
                coord.0.checked_add_signed(d_row)?,
                coord.1.checked_add_signed(d_col)?,
            );
            self.classify(next)
                .ok()
                .filter(|cell| cell.is_passable())
                .map(|_| next)
        })
    }

    /// Returns the number of cells in the grid.
    pub(crate) const fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Converts a coordinate into its row-major index, if it is in bounds.
    pub(crate) const fn index_of(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.0 * self.cols + coord.1)
        } else {
            None
        }
    }

    /// Converts a row-major index back into a coordinate.
    pub(crate) const fn coord_of(&self, idx: usize) -> Coord {
        (idx / self.cols, idx % self.cols)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Builds a grid from rows of characters where `#` marks a wall, `S` the start and `E` the end.
    pub(crate) fn grid_from(rows: &[&str]) -> Grid {
        let find = |marker: char| {
            rows.iter()
                .enumerate()
                .find_map(|(row, line)| line.find(marker).map(|col| (row, col)))
                .expect("layout should contain both endpoints")
        };
        let cols = rows.first().map_or(0, |line| line.len());

        build_grid(
            rows.len(),
            cols,
            |(row, col)| {
                rows.get(row)
                    .and_then(|line| line.as_bytes().get(col))
                    .is_some_and(|byte| *byte == b'#')
            },
            find('S'),
            find('E'),
        )
        .expect("layout should build")
    }

    #[test]
    fn test_build_grid_classifies_cells() {
        let grid = grid_from(&["S.#", ".#.", "..E"]);

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.classify((0, 0)), Ok(Cell::Start));
        assert_eq!(grid.classify((0, 1)), Ok(Cell::Open));
        assert_eq!(grid.classify((0, 2)), Ok(Cell::Wall));
        assert_eq!(grid.classify((1, 1)), Ok(Cell::Wall));
        assert_eq!(grid.classify((2, 2)), Ok(Cell::End));
    }

    #[test]
    fn test_build_grid_endpoints_override_predicate() {
        let grid = build_grid(2, 2, |_| true, (0, 0), (1, 1)).expect("grid should build");

        assert_eq!(grid.classify((0, 0)), Ok(Cell::Start));
        assert_eq!(grid.classify((1, 1)), Ok(Cell::End));
        assert_eq!(grid.classify((0, 1)), Ok(Cell::Wall));
        assert_eq!(grid.classify((1, 0)), Ok(Cell::Wall));
    }

    #[test]
    fn test_build_grid_skips_predicate_on_endpoints() {
        let mut visited = Vec::new();
        let _ = build_grid(
            2,
            2,
            |coord| {
                visited.push(coord);
                false
            },
            (0, 0),
            (1, 1),
        )
        .expect("grid should build");

        assert_eq!(visited, vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_build_grid_empty_dimensions() {
        let result = build_grid(0, 4, |_| false, (0, 0), (0, 1));

        assert_eq!(result, Err(SetupError::EmptyGrid { rows: 0, cols: 4 }));
    }

    #[test]
    fn test_build_grid_endpoint_out_of_bounds() {
        let result = build_grid(3, 3, |_| false, (0, 0), (3, 1));

        assert_eq!(
            result,
            Err(SetupError::OutOfBounds {
                row: 3,
                col: 1,
                rows: 3,
                cols: 3
            })
        );
    }

    #[test]
    fn test_build_grid_identical_endpoints() {
        let result = build_grid(3, 3, |_| false, (1, 1), (1, 1));

        assert_eq!(
            result,
            Err(SetupError::IdenticalEndpoints { row: 1, col: 1 })
        );
    }

    #[test]
    fn test_classify_out_of_bounds() {
        let grid = grid_from(&["S.", ".E"]);

        assert!(grid.classify((2, 0)).is_err());
        assert!(grid.classify((0, 2)).is_err());
    }

    #[test]
    fn test_neighbors_order_in_open_field() {
        let grid = grid_from(&["S..", "...", "..E"]);

        let neighbors: Vec<Coord> = grid.neighbors((1, 1)).collect();
        assert_eq!(neighbors, vec![(0, 1), (2, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn test_neighbors_filter_bounds_and_walls() {
        let grid = grid_from(&["S#.", "...", "..E"]);

        let corner: Vec<Coord> = grid.neighbors((0, 0)).collect();
        assert_eq!(corner, vec![(1, 0)]);

        let edge: Vec<Coord> = grid.neighbors((2, 2)).collect();
        assert_eq!(edge, vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn test_is_step() {
        assert!(is_step((1, 1), (0, 1)));
        assert!(is_step((1, 1), (1, 2)));
        assert!(!is_step((1, 1), (1, 1)));
        assert!(!is_step((1, 1), (2, 2)));
        assert!(!is_step((0, 0), (0, 2)));
    }

    #[test]
    fn test_index_round_trip() {
        let grid = grid_from(&["S...", "....", "...E"]);

        assert_eq!(grid.len(), 12);
        assert_eq!(grid.index_of((2, 1)), Some(9));
        assert_eq!(grid.coord_of(9), (2, 1));
        assert_eq!(grid.index_of((3, 0)), None);
    }
}
