//! User interface rendering functions for the game screens.

use color_eyre::eyre::Result;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::{
    grid::{Cell, Position},
    session::Session,
    types::Screen,
    App,
};

/// Character drawn on the player's cell, hiding whatever the cell holds.
const PLAYER_MARKER: char = 'X';

/// Key bindings shown below the maze.
const CONTROLS: &str = "(w) north / (a) west / (s) south / (d) east / (m) redraw / (q) quit";

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from data conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::InGame => in_game(app, frame)?,
        Screen::Won => won(app, frame),
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

/// Centers a box of the given size inside an area.
///
/// The box is clamped to the area when the terminal is smaller than the requested size.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, space, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(column);

    space
}

/// Style of a single maze cell.
fn cell_style(cell: Cell) -> Style {
    match cell {
        Cell::Open => Style::default(),
        Cell::Wall => Style::default().fg(Color::Green).bg(Color::Green),
        Cell::Entry => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        Cell::Exit => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

/// Builds the text lines of the maze with the player marker placed on its current cell.
pub(crate) fn maze_lines(session: &Session) -> Vec<Line<'static>> {
    let player = session.player();
    let player_style = Style::default()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD);

    session
        .grid()
        .rows()
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            let spans: Vec<Span<'static>> = cells
                .iter()
                .enumerate()
                .map(|(column, cell)| {
                    if Position::new(column, row) == player {
                        Span::styled(PLAYER_MARKER.to_string(), player_style)
                    } else {
                        Span::styled(cell.symbol().to_string(), cell_style(*cell))
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Renders the in-game screen with the maze, the player marker and the status line.
///
/// The maze is drawn inside a rounded border titled with the maze name and centered in the space
/// above the status block. The status block reports the outcome of the last turn and lists the
/// controls.
///
/// # Errors
///
/// This function may return errors if the maze dimensions do not fit terminal coordinates.
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let grid = app.session.grid();
    let moves_title = format!("moves: {}", app.session.moves());
    let inner_width = grid
        .width()
        .max(app.title.chars().count())
        .max(moves_title.chars().count());
    let maze_width = u16::try_from(inner_width)?.saturating_add(2);
    let maze_height = u16::try_from(grid.height())?.saturating_add(2);

    let [maze_content_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(frame.area());

    let maze_area = centered(maze_content_area, maze_width, maze_height);
    let block = Block::bordered()
        .title(app.title.as_str())
        .title_bottom(moves_title)
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);
    let maze = Paragraph::new(maze_lines(&app.session))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(maze, maze_area);

    let status_style = if app.feedback.is_rejection() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };
    let status_block = Block::bordered()
        .title(CONTROLS)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    let status = Paragraph::new(Line::styled(app.feedback.message(), status_style))
        .alignment(Alignment::Center)
        .block(status_block);

    frame.render_widget(status, status_area);

    Ok(())
}

/// Renders the closing screen shown once the exit has been reached.
pub(crate) fn won(app: &App, frame: &mut Frame) {
    clear(frame);

    let area = centered(frame.area(), 40, 5);
    let block = Block::bordered()
        .title(app.title.as_str())
        .title_bottom("(any key) quit")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);
    let text = vec![
        Line::raw("Congratulations, you win!").centered(),
        Line::raw(format!("Exit reached in {} moves.", app.session.moves())).centered(),
    ];

    frame.render_widget(Paragraph::new(text).block(block), area);
}
