//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{
    app::MAX_INPUT_LEN,
    types::{MainMenuItem, OptionsMenuItem, Screen},
    App,
};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the appropriate handler
/// functions based on the key pressed. It uses a timeout to avoid blocking the UI.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code)?;
            }
        }
    }

    Ok(())
}

/// Dispatches a single key press to the handler of the current screen.
///
/// Menus are driven by the `j`, `k`, `l` and `h` keys, while the in-game screen takes coordinate
/// text and has its own set of bindings.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) -> Result<()> {
    if matches!(app.screen, Screen::InGame) {
        return handle_in_game_key(app, code);
    }

    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('j') => handle_j_events(app),
        KeyCode::Char('k') => handle_k_events(app),
        KeyCode::Char('l') => handle_l_events(app)?,
        KeyCode::Char('h') => handle_h_events(app),
        _ => {}
    }

    Ok(())
}

/// Handles key presses on the in-game screen.
///
/// Digits, spaces and commas are appended to the coordinate prompt, backspace removes the last
/// character and enter submits the prompt to the round. The `n` key deals a new round, `h` or
/// escape returns to the main menu and `q` quits.
pub(crate) fn handle_in_game_key(app: &mut App, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('n') => app.new_round()?,
        KeyCode::Char('h') | KeyCode::Esc => app.leave_round(),
        KeyCode::Char(typed @ ('0'..='9' | ' ' | ',')) => {
            if app.input.len() < MAX_INPUT_LEN {
                app.input.push(typed);
            }
        }
        KeyCode::Backspace => {
            let _ = app.input.pop();
        }
        KeyCode::Enter => app.submit_input(),
        _ => {}
    }

    Ok(())
}

/// Handles 'j' key press events for downward navigation.
///
/// This function processes the 'j' key press which is used for moving down in menus.
pub(crate) fn handle_j_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::StartGame) => {
            app.screen = Screen::MainMenu(MainMenuItem::Options);
        }
        Screen::MainMenu(MainMenuItem::Options) => {
            app.screen = Screen::MainMenu(MainMenuItem::Quit);
        }
        Screen::OptionsMenu(OptionsMenuItem::Size) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Walls);
        }
        Screen::OptionsMenu(OptionsMenuItem::Walls) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Back);
        }
        _ => {}
    }
}

/// Handles 'k' key press events for upward navigation.
///
/// This function processes the 'k' key press which is used for moving up in menus.
pub(crate) fn handle_k_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.screen = Screen::MainMenu(MainMenuItem::Options);
        }
        Screen::MainMenu(MainMenuItem::Options) => {
            app.screen = Screen::MainMenu(MainMenuItem::StartGame);
        }
        Screen::OptionsMenu(OptionsMenuItem::Back) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Walls);
        }
        Screen::OptionsMenu(OptionsMenuItem::Walls) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Size);
        }
        _ => {}
    }
}

/// Handles 'l' key press events for selection and forward navigation.
///
/// This function processes the 'l' key press which is used for selecting menu items. Starting a
/// game generates a new round, and the options entries cycle through their values in place.
pub(crate) fn handle_l_events(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::MainMenu(MainMenuItem::StartGame) => app.new_round()?,
        Screen::MainMenu(MainMenuItem::Options) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Size);
        }
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.exit = true;
        }
        Screen::OptionsMenu(OptionsMenuItem::Size) => app.settings.cycle_size(),
        Screen::OptionsMenu(OptionsMenuItem::Walls) => app.settings.cycle_wall_chance(),
        Screen::OptionsMenu(OptionsMenuItem::Back) => {
            app.screen = Screen::MainMenu(MainMenuItem::StartGame);
        }
        Screen::InGame => {}
    }

    Ok(())
}

/// Handles 'h' key press events for backward navigation.
///
/// This function processes the 'h' key press which is used for returning from the options menu to
/// the main menu.
pub(crate) fn handle_h_events(app: &mut App) {
    if matches!(app.screen, Screen::OptionsMenu(_)) {
        app.screen = Screen::MainMenu(MainMenuItem::Options);
    }
}
