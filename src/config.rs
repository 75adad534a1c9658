//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::generator::Settings;

/// Default number of rows and columns of the generated grid.
const DEFAULT_SIDE: u16 = 10;

/// Default wall odds, one in this value.
const DEFAULT_WALL_CHANCE: u32 = 4;

/// Command-line options of the game.
///
/// This structure holds everything the game reads from the outside world before the terminal is
/// taken over: the initial board settings, an optional seed, the player name, and where to write
/// logs to, if anywhere.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Config {
    /// Number of rows in the generated grid.
    #[arg(long, default_value_t = DEFAULT_SIDE, value_parser = clap::value_parser!(u16).range(2..=40))]
    pub rows: u16,
    /// Number of columns in the generated grid.
    #[arg(long, default_value_t = DEFAULT_SIDE, value_parser = clap::value_parser!(u16).range(2..=40))]
    pub cols: u16,
    /// Every cell besides the start and end points becomes a wall with odds of one in this value.
    #[arg(long, default_value_t = DEFAULT_WALL_CHANCE, value_parser = clap::value_parser!(u32).range(2..=100))]
    pub wall_chance: u32,
    /// Seed for the random generator, for reproducible boards.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Name shown when the player reaches the end point.
    #[arg(long, default_value = "Player")]
    pub name: String,
    /// File to write logs to; logging stays off without it.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SIDE,
            cols: DEFAULT_SIDE,
            wall_chance: DEFAULT_WALL_CHANCE,
            seed: None,
            name: "Player".to_owned(),
            log_file: None,
        }
    }
}

impl Config {
    /// Returns the board settings the first round is generated with.
    pub(crate) fn settings(&self) -> Settings {
        Settings {
            rows: self.rows.into(),
            cols: self.cols.into(),
            wall_chance: self.wall_chance,
        }
    }
}
