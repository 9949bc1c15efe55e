//! Core application state and loop for the maze game.

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{
    events,
    session::Session,
    types::{Feedback, Screen},
    ui,
};

/// Application state container for the maze game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to. It owns the single
/// [`Session`] of the running game.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit the game or dismisses the winning screen, but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    pub(crate) screen: Screen,
    /// Game in progress.
    ///
    /// This field holds the maze and the player position. It is the only place either of them
    /// lives for the lifetime of the game.
    pub(crate) session: Session,
    /// Title drawn above the maze, usually the maze file name.
    pub(crate) title: String,
    /// Feedback on the most recent turn.
    pub(crate) feedback: Feedback,
    /// Full terminal clear request.
    ///
    /// This field is set by the redraw token and makes the next loop iteration wipe the terminal
    /// before drawing, so the maze is repainted from scratch.
    pub(crate) redraw: bool,
}

impl App {
    /// Creates the application for a freshly started session.
    #[must_use]
    pub const fn new(session: Session, title: String) -> Self {
        Self {
            exit: false,
            screen: Screen::InGame,
            session,
            title,
            feedback: Feedback::Welcome,
            redraw: false,
        }
    }

    /// Whether the session ended on the exit cell.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.session.has_won()
    }

    /// Runs the main loop of the application.
    ///
    /// This function draws the current state, then blocks until the next key arrives and applies
    /// it. The loop continues until the exit condition is `true`, after which the function returns
    /// to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            if self.redraw {
                terminal.clear()?;
                self.redraw = false;
            }
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}
