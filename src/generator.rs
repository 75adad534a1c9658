//! Random grid generation module.
//!
//! This module contains the round settings and the generator that places the start point in the
//! top-left quadrant, the end point in the bottom-right quadrant, and scatters walls over the rest
//! of the board.

use log::info;
use rand::Rng;

use crate::grid::{build_grid, Coord, Grid, SetupError};

/// Smallest grid side for which both quadrants hold at least one cell.
pub(crate) const MIN_SIDE: usize = 2;

/// Grid side lengths the options menu cycles through.
pub(crate) const SIDE_STEPS: [usize; 6] = [6, 8, 10, 12, 14, 16];

/// Wall odds (one in N) the options menu cycles through.
pub(crate) const WALL_CHANCE_STEPS: [u32; 5] = [3, 4, 5, 6, 8];

/// Parameters of a generated round.
///
/// This structure is derived from the command-line configuration and may be changed afterwards
/// through the options menu; every new round reads it again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Settings {
    /// Number of rows in the generated grid.
    pub(crate) rows: usize,
    /// Number of columns in the generated grid.
    pub(crate) cols: usize,
    /// Each cell besides the endpoints becomes a wall with odds of one in this value.
    pub(crate) wall_chance: u32,
}

impl Settings {
    /// Switches to the next square board size in [`SIDE_STEPS`], wrapping around.
    pub(crate) fn cycle_size(&mut self) {
        let side = next_step(&SIDE_STEPS, self.rows.max(self.cols));
        self.rows = side;
        self.cols = side;
    }

    /// Switches to the next wall odds in [`WALL_CHANCE_STEPS`], wrapping around.
    pub(crate) fn cycle_wall_chance(&mut self) {
        self.wall_chance = next_step(&WALL_CHANCE_STEPS, self.wall_chance);
    }
}

/// Returns the first step strictly greater than `current`, or the first step if there is none.
fn next_step<T: Copy + PartialOrd>(steps: &[T], current: T) -> T {
    steps
        .iter()
        .copied()
        .find(|step| *step > current)
        .or_else(|| steps.first().copied())
        .unwrap_or(current)
}

/// Picks a uniformly random coordinate in one quadrant of the board.
///
/// Quadrants are the halves of each axis, `[0, len / 2)` for the low half and `[len / 2, len)`
/// narrowed to the same width for the high half, so both quadrants cover the same number of
/// cells even on odd-sized boards.
fn random_point<R: Rng>(rng: &mut R, settings: &Settings, low_row: bool, low_col: bool) -> Coord {
    let half_rows = settings.rows / 2;
    let half_cols = settings.cols / 2;

    let row = rng.random_range(0..half_rows);
    let col = rng.random_range(0..half_cols);

    (
        if low_row { row } else { row + half_rows },
        if low_col { col } else { col + half_cols },
    )
}

/// Generates a random grid according to the settings.
///
/// The start point lands in the top-left quadrant and the end point in the bottom-right one, then
/// every other cell turns into a wall with odds of one in [`Settings::wall_chance`]. The result may
/// well have no route between both points; that is for the pathfinding search to find out.
///
/// # Errors
///
/// This function returns [`SetupError::BoardTooSmall`] with the requested dimensions if either
/// side of the board is shorter than [`MIN_SIDE`], since a quadrant would then hold no cells.
pub(crate) fn generate<R: Rng>(settings: &Settings, rng: &mut R) -> Result<Grid, SetupError> {
    if settings.rows < MIN_SIDE || settings.cols < MIN_SIDE {
        return Err(SetupError::BoardTooSmall {
            rows: settings.rows,
            cols: settings.cols,
            min_side: MIN_SIDE,
        });
    }

    let start = random_point(rng, settings, true, true);
    let end = random_point(rng, settings, false, false);
    let wall_chance = settings.wall_chance.max(1);

    let grid = build_grid(
        settings.rows,
        settings.cols,
        |_| rng.random_range(0..wall_chance) == 0,
        start,
        end,
    )?;

    info!(
        "generated {}x{} grid with start {start:?} and end {end:?}",
        settings.rows, settings.cols
    );

    Ok(grid)
}
