//! Game round state and step validation.
//!
//! This module contains the [`Round`] struct, which ties a generated grid to its enumerated
//! shortest paths and to the trail the player is building, along with the checks applied to every
//! coordinate the player enters.

use log::info;

use crate::{
    grid::{is_step, Cell, Coord, Grid, SetupError},
    pathfinding::{enumerate_shortest_paths, PathSet},
};

/// Progress of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RoundState {
    /// The end point cannot be reached; the round is over before it starts.
    Unreachable,
    /// The player is still entering coordinates.
    Playing,
    /// The player reached the end point.
    Finished {
        /// Whether the trail is exactly one of the shortest paths.
        matched: bool,
    },
}

/// Result of submitting one coordinate to a round.
///
/// Every variant but [`StepOutcome::Moved`] and [`StepOutcome::Arrived`] leaves the trail untouched
/// so the player can simply try again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StepOutcome {
    /// The input was not a pair of non-negative integers.
    Malformed,
    /// The coordinate lies outside the grid.
    OutOfBounds,
    /// The coordinate is a wall.
    Wall,
    /// The coordinate is the start point, which cannot be entered again.
    StartRevisit,
    /// The coordinate is not one step away from the last point of the trail.
    NotConsecutive,
    /// The coordinate was appended to the trail.
    Moved,
    /// The trail reached the end point and the round is over.
    Arrived {
        /// Whether the trail is exactly one of the shortest paths.
        matched: bool,
    },
    /// The round is no longer accepting coordinates.
    RoundOver,
}

impl StepOutcome {
    /// Returns the feedback line shown to the player for this outcome.
    ///
    /// Arrivals are not described here because their message depends on the player name.
    pub(crate) const fn message(self) -> &'static str {
        match self {
            Self::Malformed => "Invalid input! Please enter two integers as: row col",
            Self::OutOfBounds => "Invalid input! That point is outside the grid",
            Self::Wall => "Invalid input! Try to avoid walls",
            Self::StartRevisit => "Invalid input! You can't go back to the start point",
            Self::NotConsecutive => "Invalid input! Points must be consecutive",
            Self::Moved => "Enter the next point",
            Self::Arrived { .. } => "You've reached your destination",
            Self::RoundOver => "This round is over, press (n) for a new one",
        }
    }
}

/// Parses a coordinate pair typed by the player.
///
/// The pair is two non-negative integers, `row` then `column`, separated by whitespace or a comma.
/// Anything else, including a third number, yields [`None`].
pub(crate) fn parse_coords(input: &str) -> Option<Coord> {
    let mut parts = input
        .split(|separator: char| separator.is_whitespace() || separator == ',')
        .filter(|part| !part.is_empty());

    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;

    parts.next().is_none().then_some((row, col))
}

/// One game round.
///
/// A round owns its grid, the complete set of shortest paths between the grid's endpoints, and the
/// trail of coordinates entered so far, which always starts at the start point.
#[derive(Clone, Debug)]
pub(crate) struct Round {
    /// Board for this round.
    grid: Grid,
    /// Every shortest path from the start point to the end point.
    paths: PathSet,
    /// Coordinates visited by the player, starting with the start point.
    trail: Vec<Coord>,
    /// Progress of the round.
    state: RoundState,
}

impl Round {
    /// Starts a round on the given grid.
    ///
    /// This function enumerates the shortest paths right away. When there are none the round is
    /// created in the [`RoundState::Unreachable`] state.
    ///
    /// # Errors
    ///
    /// This function returns a [`SetupError`] if the grid endpoints are unusable for a search.
    pub(crate) fn new(grid: Grid) -> Result<Self, SetupError> {
        let paths = enumerate_shortest_paths(&grid, grid.start(), grid.end())?;
        let state = if paths.is_empty() {
            RoundState::Unreachable
        } else {
            RoundState::Playing
        };

        match paths.distance() {
            Some(distance) => info!(
                "round ready: {} shortest path(s) of {distance} step(s)",
                paths.len()
            ),
            None => info!("round has no valid path"),
        }

        Ok(Self {
            trail: vec![grid.start()],
            grid,
            paths,
            state,
        })
    }

    /// Returns the board of this round.
    pub(crate) const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the shortest paths of this round.
    pub(crate) const fn paths(&self) -> &PathSet {
        &self.paths
    }

    /// Returns the trail entered so far.
    pub(crate) fn trail(&self) -> &[Coord] {
        &self.trail
    }

    /// Returns the progress of this round.
    pub(crate) const fn state(&self) -> RoundState {
        self.state
    }

    /// Parses the player's text and submits the resulting coordinate.
    pub(crate) fn submit(&mut self, input: &str) -> StepOutcome {
        if !matches!(self.state, RoundState::Playing) {
            return StepOutcome::RoundOver;
        }

        parse_coords(input).map_or(StepOutcome::Malformed, |coord| self.step(coord))
    }

    /// Attempts to extend the trail with one coordinate.
    ///
    /// The coordinate must be in bounds, not a wall, not the start point, and one step away from
    /// the last point of the trail. Stepping onto the end point, or onto any cell next to it,
    /// completes the trail with the end point and finishes the round.
    pub(crate) fn step(&mut self, coord: Coord) -> StepOutcome {
        if !matches!(self.state, RoundState::Playing) {
            return StepOutcome::RoundOver;
        }

        match self.grid.classify(coord) {
            Err(_) => return StepOutcome::OutOfBounds,
            Ok(Cell::Wall) => return StepOutcome::Wall,
            Ok(Cell::Start) => return StepOutcome::StartRevisit,
            Ok(Cell::Open | Cell::End) => {}
        }
        if !self
            .trail
            .last()
            .is_some_and(|&last| is_step(last, coord))
        {
            return StepOutcome::NotConsecutive;
        }

        self.trail.push(coord);

        let end = self.grid.end();
        if coord != end && !is_step(coord, end) {
            return StepOutcome::Moved;
        }
        if coord != end {
            self.trail.push(end);
        }

        let matched = self.paths.contains(&self.trail);
        self.state = RoundState::Finished { matched };
        info!(
            "trail of {} step(s) reached the end, matched: {matched}",
            self.trail.len().saturating_sub(1)
        );

        StepOutcome::Arrived { matched }
    }
}
