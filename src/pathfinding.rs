//! Shortest-path enumeration module.
//!
//! This module contains the breadth-first search that records every tying predecessor of each
//! cell, and the stack-based reconstruction that turns those predecessor lists into the complete
//! set of minimal-length paths between two cells.

use std::collections::VecDeque;

use log::debug;

use crate::grid::{Cell, Coord, Grid, SetupError};

/// Ordered sequence of coordinates from start to end, both inclusive.
pub type Path = Vec<Coord>;

/// Every distinct minimal-length path between two cells.
///
/// An empty set means the end cell cannot be reached from the start cell. The order of the paths
/// follows the fixed neighbour order of [`Grid::neighbors`], so repeated enumerations on the same
/// input yield identical sets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathSet {
    /// Enumerated paths, all of the same length.
    paths: Vec<Path>,
}

impl PathSet {
    /// Returns whether no path exists, which is to say the end cell is unreachable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Returns the number of distinct shortest paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns the enumerated paths.
    #[must_use]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Returns whether the given sequence is exactly one of the shortest paths.
    #[must_use]
    pub fn contains(&self, path: &[Coord]) -> bool {
        self.paths.iter().any(|candidate| candidate.as_slice() == path)
    }

    /// Returns the number of steps of a shortest path, or [`None`] when unreachable.
    #[must_use]
    pub fn distance(&self) -> Option<usize> {
        self.paths
            .first()
            .map(|path| path.len().saturating_sub(1))
    }
}

/// Checks that a coordinate can serve as a search endpoint.
fn check_endpoint(grid: &Grid, coord: Coord) -> Result<(), SetupError> {
    if grid.classify(coord)? == Cell::Wall {
        return Err(SetupError::WallEndpoint {
            row: coord.0,
            col: coord.1,
        });
    }

    Ok(())
}

/// Enumerates every shortest 4-connected path from `start` to `end` that avoids walls.
///
/// The search is a breadth-first traversal, since every step costs the same. Whenever a
/// neighbour is reached again at its already known distance, the current cell is appended to that
/// neighbour's predecessors instead of being discarded, which is what keeps every tie. The search
/// stops once `end` is dequeued: with a FIFO frontier all cells one step closer to the start have
/// been dequeued by then, so the predecessors of `end` are complete.
///
/// The predecessor lists are then walked backward from `end` with an explicit stack, branching at
/// every cell with more than one predecessor, and each trail that reaches `start` is reversed
/// into a path.
///
/// # Errors
///
/// This function returns a [`SetupError`] if:
/// - Either endpoint lies outside the grid
/// - Either endpoint is a wall
/// - Both endpoints are the same cell
pub fn enumerate_shortest_paths(
    grid: &Grid,
    start: Coord,
    end: Coord,
) -> Result<PathSet, SetupError> {
    check_endpoint(grid, start)?;
    check_endpoint(grid, end)?;
    if start == end {
        return Err(SetupError::IdenticalEndpoints {
            row: start.0,
            col: start.1,
        });
    }

    let out_of_bounds = |coord: Coord| SetupError::OutOfBounds {
        row: coord.0,
        col: coord.1,
        rows: grid.rows(),
        cols: grid.cols(),
    };
    let start_idx = grid.index_of(start).ok_or_else(|| out_of_bounds(start))?;
    let end_idx = grid.index_of(end).ok_or_else(|| out_of_bounds(end))?;

    let predecessors = search(grid, start_idx, end_idx);
    let paths = reconstruct(grid, &predecessors, start_idx, end_idx);

    debug!(
        "enumerated {} shortest path(s) from {start:?} to {end:?}",
        paths.len()
    );

    Ok(PathSet { paths })
}

/// Runs the breadth-first search and returns the predecessor lists of every cell.
///
/// Cells are addressed by their row-major index. A cell that was never reached keeps an empty
/// list, and so does the start cell.
fn search(grid: &Grid, start_idx: usize, end_idx: usize) -> Vec<Vec<usize>> {
    let mut distances: Vec<Option<usize>> = vec![None; grid.len()];
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); grid.len()];
    let mut frontier = VecDeque::from([start_idx]);

    if let Some(distance) = distances.get_mut(start_idx) {
        *distance = Some(0);
    }

    while let Some(current_idx) = frontier.pop_front() {
        if current_idx == end_idx {
            break;
        }
        let Some(&Some(current_distance)) = distances.get(current_idx) else {
            continue;
        };
        let candidate = current_distance + 1;

        for neighbor in grid.neighbors(grid.coord_of(current_idx)) {
            let Some(neighbor_idx) = grid.index_of(neighbor) else {
                continue;
            };
            let (Some(distance), Some(preds)) = (
                distances.get_mut(neighbor_idx),
                predecessors.get_mut(neighbor_idx),
            ) else {
                continue;
            };

            let known_distance = *distance;
            match known_distance {
                // First time reached: this is the shortest distance in a breadth-first search.
                None => {
                    *distance = Some(candidate);
                    preds.push(current_idx);
                    frontier.push_back(neighbor_idx);
                }
                // Tie: same distance through another cell.
                Some(known) if known == candidate => preds.push(current_idx),
                Some(_) => {}
            }
        }
    }

    debug!(
        "search reached {} of {} cells",
        distances.iter().filter(|distance| distance.is_some()).count(),
        grid.len()
    );

    predecessors
}

/// Walks the predecessor lists backward from the end cell and collects every complete trail.
///
/// Each stack frame holds a cell index and the position of the next predecessor to try from that
/// cell, so branching happens without recursion.
fn reconstruct(
    grid: &Grid,
    predecessors: &[Vec<usize>],
    start_idx: usize,
    end_idx: usize,
) -> Vec<Path> {
    let mut paths: Vec<Path> = Vec::new();
    let mut frames: Vec<(usize, usize)> = vec![(end_idx, 0)];

    while let Some(&(node, next)) = frames.last() {
        if node == start_idx {
            paths.push(
                frames
                    .iter()
                    .rev()
                    .map(|&(idx, _)| grid.coord_of(idx))
                    .collect(),
            );
            let _ = frames.pop();
            continue;
        }

        match predecessors.get(node).and_then(|preds| preds.get(next)) {
            Some(&prev) => {
                if let Some(top) = frames.last_mut() {
                    top.1 += 1;
                }
                frames.push((prev, 0));
            }
            None => {
                let _ = frames.pop();
            }
        }
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{is_step, tests::grid_from};

    /// Enumerates the paths between the grid's own endpoints.
    fn enumerate(grid: &Grid) -> PathSet {
        enumerate_shortest_paths(grid, grid.start(), grid.end()).expect("enumeration should run")
    }

    /// Computes the plain breadth-first distance between the grid's endpoints.
    fn bfs_distance(grid: &Grid) -> Option<usize> {
        let mut seen = vec![grid.start()];
        let mut queue = VecDeque::from([(grid.start(), 0)]);
        while let Some((coord, distance)) = queue.pop_front() {
            if coord == grid.end() {
                return Some(distance);
            }
            for next in grid.neighbors(coord) {
                if !seen.contains(&next) {
                    seen.push(next);
                    queue.push_back((next, distance + 1));
                }
            }
        }
        None
    }

    /// Asserts the structural properties every enumerated path must hold.
    fn assert_well_formed(grid: &Grid, set: &PathSet) {
        let expected_len = bfs_distance(grid).map(|distance| distance + 1);

        for path in set.paths() {
            assert_eq!(Some(path.len()), expected_len, "path length should be minimal");
            assert_eq!(path.first(), Some(&grid.start()), "path should begin at start");
            assert_eq!(path.last(), Some(&grid.end()), "path should finish at end");
            assert!(
                path.windows(2).all(|pair| match pair {
                    [from, to] => is_step(*from, *to),
                    _ => false,
                }),
                "consecutive coordinates should be one step apart"
            );
            for (idx, coord) in path.iter().enumerate() {
                assert!(
                    !path.iter().skip(idx + 1).any(|other| other == coord),
                    "path should not revisit a coordinate"
                );
                assert!(
                    grid.classify(*coord).is_ok_and(Cell::is_passable),
                    "path should avoid walls"
                );
            }
        }

        for (idx, path) in set.paths().iter().enumerate() {
            assert!(
                !set.paths().iter().skip(idx + 1).any(|other| other == path),
                "paths should be distinct"
            );
        }
    }

    #[test]
    fn test_open_three_by_three_has_six_paths() {
        let grid = grid_from(&["S..", "...", "..E"]);
        let set = enumerate(&grid);

        assert_eq!(set.len(), 6);
        assert_eq!(set.distance(), Some(4));
        assert_well_formed(&grid, &set);

        for path in [
            vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)],
            vec![(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)],
            vec![(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)],
            vec![(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)],
            vec![(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)],
            vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)],
        ] {
            assert!(set.contains(&path), "missing monotone path {path:?}");
        }
    }

    #[test]
    fn test_walled_middle_row_is_unreachable() {
        let grid = grid_from(&["S..", "###", "..E"]);
        let set = enumerate(&grid);

        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.distance(), None);
        assert_eq!(bfs_distance(&grid), None);
    }

    #[test]
    fn test_open_two_by_two_has_two_paths() {
        let grid = grid_from(&["S.", ".E"]);
        let set = enumerate(&grid);

        // Down is explored before right, so the route through (1, 0) is recorded first.
        assert_eq!(
            set.paths(),
            &[
                vec![(0, 0), (1, 0), (1, 1)],
                vec![(0, 0), (0, 1), (1, 1)],
            ]
        );
    }

    #[test]
    fn test_single_wall_forces_unique_detour() {
        let grid = grid_from(&["S#E", "..."]);
        let set = enumerate(&grid);

        assert_eq!(set.paths(), &[vec![(0, 0), (1, 0), (1, 1), (1, 2), (0, 2)]]);
        assert_well_formed(&grid, &set);
    }

    #[test]
    fn test_adjacent_endpoints() {
        let grid = grid_from(&["SE.", "...", "..."]);
        let set = enumerate(&grid);

        assert_eq!(set.paths(), &[vec![(0, 0), (0, 1)]]);
        assert_eq!(set.distance(), Some(1));
    }

    #[test]
    fn test_end_collects_tying_predecessors_from_both_sides() {
        // The end is reached at the same distance around either side of the wall.
        let grid = grid_from(&["..S..", ".###.", "..E.."]);
        let set = enumerate(&grid);

        assert_eq!(set.len(), 2);
        assert_eq!(set.distance(), Some(6));
        assert_well_formed(&grid, &set);
        let last_steps: Vec<Coord> = set
            .paths()
            .iter()
            .filter_map(|path| path.iter().rev().nth(1).copied())
            .collect();
        assert_eq!(last_steps, vec![(2, 1), (2, 3)]);
    }

    #[test]
    fn test_path_count_matches_lattice_paths() {
        // Choosing 2 downs among 6 steps on an open 3x5 board.
        let grid = grid_from(&["S....", ".....", "....E"]);
        let set = enumerate(&grid);

        assert_eq!(set.len(), 15);
        assert_well_formed(&grid, &set);
    }

    #[test]
    fn test_enumeration_is_idempotent() {
        let grid = grid_from(&["S...#", ".#...", "...#.", "#...E"]);

        let first = enumerate(&grid);
        let second = enumerate(&grid);

        assert!(!first.is_empty());
        assert_eq!(first, second);
        assert_well_formed(&grid, &first);
    }

    #[test]
    fn test_reachability_matches_plain_search() {
        for rows in [
            ["S.#", "#.#", "..E"],
            ["S#.", "#..", "..E"],
            ["S..", ".#.", ".#E"],
            ["S.#", ".#.", "#.E"],
        ] {
            let grid = grid_from(&rows);
            let set = enumerate(&grid);

            assert_eq!(set.is_empty(), bfs_distance(&grid).is_none(), "layout {rows:?}");
            assert_well_formed(&grid, &set);
        }
    }

    #[test]
    fn test_reversed_endpoints_mirror_paths() {
        let grid = grid_from(&["S..", ".#.", "..E"]);

        let forward = enumerate_shortest_paths(&grid, grid.start(), grid.end())
            .expect("forward enumeration should run");
        let backward = enumerate_shortest_paths(&grid, grid.end(), grid.start())
            .expect("backward enumeration should run");

        assert_eq!(forward.len(), 2);
        assert_eq!(backward.len(), 2);
        for path in backward.paths() {
            let mirrored: Path = path.iter().rev().copied().collect();
            assert!(forward.contains(&mirrored));
        }
    }

    #[test]
    fn test_invalid_endpoints_fail_fast() {
        let grid = grid_from(&["S.#", "...", "..E"]);

        assert_eq!(
            enumerate_shortest_paths(&grid, (0, 0), (5, 5)),
            Err(SetupError::OutOfBounds {
                row: 5,
                col: 5,
                rows: 3,
                cols: 3
            })
        );
        assert_eq!(
            enumerate_shortest_paths(&grid, (0, 2), (2, 2)),
            Err(SetupError::WallEndpoint { row: 0, col: 2 })
        );
        assert_eq!(
            enumerate_shortest_paths(&grid, (1, 1), (1, 1)),
            Err(SetupError::IdenticalEndpoints { row: 1, col: 1 })
        );
    }

    #[test]
    fn test_open_cells_can_serve_as_endpoints() {
        let grid = grid_from(&["S..", "...", "..E"]);
        let set = enumerate_shortest_paths(&grid, (1, 0), (1, 2)).expect("enumeration should run");

        assert_eq!(set.distance(), Some(2));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_contains_requires_exact_order() {
        let grid = grid_from(&["S.", ".E"]);
        let set = enumerate(&grid);

        assert!(set.contains(&[(0, 0), (0, 1), (1, 1)]));
        assert!(!set.contains(&[(1, 1), (0, 1), (0, 0)]));
        assert!(!set.contains(&[(0, 0), (1, 1)]));
    }
}
