//! This crate contains the source code for the pathtuine game, in which the player retraces the
//! shortest path between two points of a randomly walled grid.
//!
//! The core of the crate is the grid model and the enumeration of every shortest path between two
//! of its cells, exposed through [`build_grid`] and [`enumerate_shortest_paths`]. The remaining
//! modules make up the terminal game built on top of them.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod config;
mod events;
mod generator;
mod grid;
mod logging;
mod pathfinding;
mod round;
mod types;
mod ui;

pub use app::App;
pub use config::Config;
pub use grid::{build_grid, is_step, Cell, Coord, Grid, SetupError};
pub use logging::install as install_logging;
pub use pathfinding::{enumerate_shortest_paths, Path, PathSet};
