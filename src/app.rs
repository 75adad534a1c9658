//! Core application state and logic for the pathfinding game.

use color_eyre::eyre::Result;
use log::info;
use rand::{rngs::StdRng, SeedableRng as _};
use ratatui::DefaultTerminal;

use crate::{
    config::Config,
    events,
    generator::{self, Settings},
    round::{Round, StepOutcome},
    types::{MainMenuItem, Screen},
    ui,
};

/// Longest coordinate input accepted in the prompt, in characters.
pub(crate) const MAX_INPUT_LEN: usize = 16;

/// Application state container for the pathfinding game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    ///
    /// This field holds the current screen of the game. It is used to determine which screen to
    /// render and what actions to take based on user input.
    pub(crate) screen: Screen,
    /// Board settings used for the next generated round.
    pub(crate) settings: Settings,
    /// Random generator feeding grid generation.
    ///
    /// Seeded from the command line when a seed is given, so that the same sequence of boards can
    /// be replayed.
    pub(crate) rng: StdRng,
    /// Name of the player.
    pub(crate) player: String,
    /// Round currently being played, if any.
    pub(crate) round: Option<Round>,
    /// Coordinate text typed so far in the in-game prompt.
    pub(crate) input: String,
    /// Outcome of the last submitted coordinate, shown as feedback.
    pub(crate) last_outcome: Option<StepOutcome>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl App {
    /// Creates a new instance of the App structure from the command-line configuration.
    ///
    /// No round exists yet; one is generated when the player starts a game from the main menu.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::StartGame),
            settings: config.settings(),
            rng,
            player: config.name.clone(),
            round: None,
            input: String::new(),
            last_outcome: None,
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    /// - [`crate::SetupError`] if a round cannot be generated from the current settings
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Generates a fresh grid and starts a new round on it.
    ///
    /// # Errors
    ///
    /// This function may return errors if the settings do not allow generating a grid.
    pub(crate) fn new_round(&mut self) -> Result<()> {
        let grid = generator::generate(&self.settings, &mut self.rng)?;
        self.round = Some(Round::new(grid)?);
        self.input.clear();
        self.last_outcome = None;
        self.screen = Screen::InGame;

        Ok(())
    }

    /// Submits the text in the prompt to the current round and clears the prompt.
    pub(crate) fn submit_input(&mut self) {
        if let Some(round) = self.round.as_mut() {
            let outcome = round.submit(&self.input);
            if let StepOutcome::Arrived { matched } = outcome {
                info!("{} finished a round, matched: {matched}", self.player);
            }
            self.last_outcome = Some(outcome);
        }
        self.input.clear();
    }

    /// Leaves the current round and goes back to the main menu.
    pub(crate) fn leave_round(&mut self) {
        self.round = None;
        self.input.clear();
        self.last_outcome = None;
        self.screen = Screen::MainMenu(MainMenuItem::StartGame);
    }
}
