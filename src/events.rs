//! Event handling functions for user input and application state updates.

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    movement::{Command, Direction, MoveOutcome},
    types::{Feedback, Screen},
    App,
};

/// Blocks until the next input event and applies it to the application state.
///
/// This function waits for exactly one terminal event per turn. Only key presses are acted upon;
/// releases, repeats, resizes and mouse events fall through so that the caller simply redraws.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            handle_key(app, key);
        }
    }

    Ok(())
}

/// Applies a single key press.
///
/// Quit keys are handled first. On the winning screen any other key leaves the game. In game,
/// arrow keys move directly and every other character is submitted to the session as a direction
/// token, which includes reporting unrecognized characters back to the player. Characters typed
/// with Control or Alt held are not tokens and are ignored.
pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    if is_quit(key) {
        app.exit = true;
        return;
    }

    if app.screen == Screen::Won {
        app.exit = true;
        return;
    }

    let modified = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    let (outcome, redrawn) = match key.code {
        KeyCode::Up => (app.session.perform(Direction::North.into()), false),
        KeyCode::Down => (app.session.perform(Direction::South.into()), false),
        KeyCode::Right => (app.session.perform(Direction::East.into()), false),
        KeyCode::Left => (app.session.perform(Direction::West.into()), false),
        KeyCode::Char(_) if modified => return,
        KeyCode::Char(token) => (
            app.session.submit(token),
            Command::from_token(token) == Ok(Command::Redraw),
        ),
        _ => return,
    };

    app.feedback = match outcome {
        MoveOutcome::Accepted(_) if redrawn => {
            app.redraw = true;
            Feedback::Redrawn
        }
        MoveOutcome::Accepted(position) => Feedback::Moved(position),
        MoveOutcome::Rejected(rejection) => Feedback::Rejected(rejection),
    };

    if app.session.has_won() {
        tracing::info!(moves = app.session.moves(), "maze solved");
        app.screen = Screen::Won;
    }
}

/// Whether the key asks to leave the game: `q`, `Esc` or Ctrl+C.
fn is_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => true,
        _ => false,
    }
}
