//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::{
    generator::Settings,
    grid::{Cell, Coord},
    pathfinding::Path,
    round::{Round, RoundState, StepOutcome},
    types::{MainMenuItem, MenuType, OptionsMenuItem, Screen},
    App,
};

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match &app.screen {
        Screen::MainMenu(item) => main_menu(frame, *item),
        Screen::OptionsMenu(item) => options_menu(frame, *item, &app.settings),
        Screen::InGame => in_game(app, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Returns a rectangle of the given size centered within an area.
///
/// The size is clamped to the area, and odd leftover space is rounded to the nearest cell so the
/// content never drifts more than half a cell off center.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x_offset = rounded_div::i32(i32::from(area.width - width), 2);
    let y_offset = rounded_div::i32(i32::from(area.height - height), 2);

    Rect::new(
        area.x + u16::try_from(x_offset).unwrap_or(0),
        area.y + u16::try_from(y_offset).unwrap_or(0),
        width,
        height,
    )
}

/// Width of the menu box, wide enough for the key hints in its bottom border.
pub(crate) const MENU_WIDTH: u16 = 36;

/// Renders the generic layout structure for the main and options menus.
///
/// This function creates the common layout and block structure used by both main and options menus.
/// The box is sized from its entries and centered on the frame, so every entry fits regardless of
/// the terminal height. The generic part includes the centered positioning and border styling,
/// while the specific menu content is handled by the caller using the [`MenuType`] parameter.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, menu: MenuType) -> Rc<[Rect]> {
    let space = Layout::vertical([Constraint::Length(u16::from(menu.value()) + 2)])
        .flex(Flex::Center)
        .split(frame.area())[0];
    let layout = Layout::horizontal([Constraint::Length(MENU_WIDTH)])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom("(j) down / (k) up / (l) select")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); menu.value().into()]).split(inner_space)
}

/// Renders a list of menu entries, highlighting the selected one.
fn render_entries(frame: &mut Frame, layout: &[Rect], entries: Vec<String>, selected: usize) {
    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (idx, (entry, area)) in entries.into_iter().zip(layout).enumerate() {
        let style = if idx == selected {
            active_content_style
        } else {
            content_style
        };
        frame.render_widget(Line::raw(entry).centered().style(style), *area);
    }
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu with options for "Start Game", "Options", and "Quit". It
/// highlights the currently selected option and provides visual feedback for user navigation.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::MainMenu(3));

    let selected = match item {
        MainMenuItem::StartGame => 0,
        MainMenuItem::Options => 1,
        MainMenuItem::Quit => 2,
    };
    render_entries(
        frame,
        &inner_layout,
        vec!["Start Game".to_owned(), "Options".to_owned(), "Quit".to_owned()],
        selected,
    );
}

/// Renders the options menu screen with configuration choices.
///
/// This function displays the options menu with the board size and wall odds used by the next
/// rounds, and a "Return" entry back to the main menu. It provides the same navigation
/// highlighting as the main menu.
pub(crate) fn options_menu(frame: &mut Frame, item: OptionsMenuItem, settings: &Settings) {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::OptionsMenu(3));

    let selected = match item {
        OptionsMenuItem::Size => 0,
        OptionsMenuItem::Walls => 1,
        OptionsMenuItem::Back => 2,
    };
    render_entries(
        frame,
        &inner_layout,
        vec![
            format!("Size: {}x{}", settings.rows, settings.cols),
            format!("Walls: 1 in {}", settings.wall_chance),
            "Return".to_owned(),
        ],
        selected,
    );
}

/// Builds the text lines of the board, coordinate labels included.
///
/// Each cell is drawn as in the classic console version of the game: `#` for walls, `.` for open
/// cells, `S` and `E` for the endpoints and `o` for the trail entered by the player. Cells of the
/// `revealed` path that the player did not walk on are drawn as `*`.
pub(crate) fn board_lines(round: &Round, revealed: Option<&Path>) -> Result<Vec<Line<'static>>> {
    let grid = round.grid();
    let label_width = grid.rows().saturating_sub(1).to_string().len() + 2;
    let cell_width = grid.cols().saturating_sub(1).to_string().len() + 1;

    let wall_style = Style::default().fg(Color::Green);
    let open_style = Style::default().fg(Color::DarkGray);
    let endpoint_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let trail_style = Style::default().fg(Color::Red);
    let revealed_style = Style::default().fg(Color::Yellow);
    let label_style = Style::default().fg(Color::Green);

    let mut lines = Vec::with_capacity(grid.rows() + 2);

    let mut header = vec![Span::raw(" ".repeat(label_width))];
    header.extend(
        (0..grid.cols()).map(|col| Span::styled(format!("{col:<cell_width$}"), label_style)),
    );
    lines.push(Line::from(header));
    lines.push(Line::raw(""));

    for row in 0..grid.rows() {
        let mut spans = vec![Span::styled(format!("{row:<label_width$}"), label_style)];
        for col in 0..grid.cols() {
            let coord: Coord = (row, col);
            let (symbol, style) = match grid.classify(coord)? {
                Cell::Wall => ('#', wall_style),
                Cell::Start => ('S', endpoint_style),
                Cell::End => ('E', endpoint_style),
                Cell::Open if round.trail().contains(&coord) => ('o', trail_style),
                Cell::Open if revealed.is_some_and(|path| path.contains(&coord)) => {
                    ('*', revealed_style)
                }
                Cell::Open => ('.', open_style),
            };
            spans.push(Span::styled(format!("{symbol:<cell_width$}"), style));
        }
        lines.push(Line::from(spans));
    }

    Ok(lines)
}

/// Builds the text lines shown under the board: endpoints, feedback and prompt.
pub(crate) fn status_lines(app: &App, round: &Round) -> Vec<Line<'static>> {
    let grid = round.grid();
    let (start_row, start_col) = grid.start();
    let (end_row, end_col) = grid.end();

    let mut lines = vec![
        Line::raw(""),
        Line::raw(format!(
            "Start Point: ({start_row}, {start_col})   End Point: ({end_row}, {end_col})"
        )),
        Line::raw(""),
    ];

    match round.state() {
        RoundState::Unreachable => {
            lines.push(Line::raw("No valid path found between both points."));
            lines.push(Line::raw("Press (n) to deal a new round."));
        }
        RoundState::Playing => {
            let feedback = app.last_outcome.map_or(
                "Enter the path you think connects both points",
                StepOutcome::message,
            );
            lines.push(Line::raw(feedback));
            lines.push(Line::raw(format!(
                "Enter next point (row col): {}_",
                app.input
            )));
        }
        RoundState::Finished { matched } => {
            lines.push(Line::raw(format!(
                "Great job, {}! You've reached your destination.",
                app.player
            )));
            if matched {
                lines.push(Line::raw("You did it! Your inputs match a shortest path."));
                lines.push(Line::raw("Hidden achievement unlocked ^_^"));
            } else {
                lines.push(Line::raw("Sadly you haven't unlocked the hidden achievement."));
                lines.push(Line::raw("One shortest route is marked with *."));
            }
            if let Some(distance) = round.paths().distance() {
                lines.push(Line::raw(format!(
                    "Shortest distance: {distance} step(s) over {} route(s).",
                    round.paths().len()
                )));
            }
        }
    }

    lines
}

/// Renders the in-game screen with the board, the player's trail and the coordinate prompt.
///
/// This function displays the grid of the current round with labelled rows and columns, followed
/// by the endpoint coordinates, feedback on the last submitted point and the prompt itself. Once
/// the round is over without a match, one of the shortest routes is revealed on the board.
///
/// # Errors
///
/// This function may return errors if there is no round in progress or if the board does not fit
/// the terminal's coordinate range.
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let round = app
        .round
        .as_ref()
        .ok_or_eyre("failed to retrieve the round in progress")?;

    let revealed = match round.state() {
        RoundState::Finished { matched: false } => round.paths().paths().first(),
        _ => None,
    };

    let mut lines = board_lines(round, revealed)?;
    lines.extend(status_lines(app, round));

    // Create overall layout: content area + tooltip at bottom
    let overall_layout = Layout::vertical([
        Constraint::Min(1),    // Board and status area
        Constraint::Length(2), // Tooltip block
    ])
    .split(frame.area());

    let content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get content area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let width = lines.iter().map(Line::width).max().unwrap_or(0);
    let space = centered(
        content_area,
        u16::try_from(width)?,
        u16::try_from(lines.len())?,
    );

    frame.render_widget(Paragraph::new(lines), space);

    // Render tooltip as a block at the bottom center with top border
    let tooltip_block = Block::bordered()
        .title("(enter) submit / (n) new round / (h) return to menu")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_area);

    Ok(())
}
