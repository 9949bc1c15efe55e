//! Type definitions for the terminal interface state.

use crate::{grid::Position, movement::MoveRejection};

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. This is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Maze being played.
    ///
    /// This variant represents the in-game screen where the maze and the player marker are drawn
    /// and direction keys move the player.
    InGame,
    /// Exit reached.
    ///
    /// This variant represents the closing screen shown once the player stands on the exit. Any key
    /// leaves the game from here.
    Won,
}

/// Feedback shown for the last turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Feedback {
    /// No turn has been played yet.
    Welcome,
    /// The player stepped onto a new cell.
    Moved(Position),
    /// The maze was redrawn without moving.
    Redrawn,
    /// The last token did not move the player.
    Rejected(MoveRejection),
}

impl Feedback {
    /// Returns the status line text for this feedback.
    pub(crate) fn message(self) -> String {
        match self {
            Self::Welcome => "Find your way from S to E.".to_owned(),
            Self::Moved(position) => format!("Moved to {position}."),
            Self::Redrawn => "Maze redrawn.".to_owned(),
            Self::Rejected(rejection) => format!("Cannot move: {rejection}."),
        }
    }

    /// Whether this feedback reports a refused turn.
    pub(crate) const fn is_rejection(self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_variants() {
        assert_ne!(Screen::InGame, Screen::Won);
        assert_eq!(format!("{:?}", Screen::Won), "Won");
    }

    #[test]
    fn test_feedback_messages() {
        assert_eq!(Feedback::Welcome.message(), "Find your way from S to E.");
        assert_eq!(
            Feedback::Moved(Position::new(2, 1)).message(),
            "Moved to (column 2, row 1)."
        );
        assert_eq!(Feedback::Redrawn.message(), "Maze redrawn.");
        assert_eq!(
            Feedback::Rejected(MoveRejection::Blocked).message(),
            "Cannot move: a wall blocks the way."
        );
    }

    #[test]
    fn test_feedback_rejection_flag() {
        assert!(Feedback::Rejected(MoveRejection::OutOfBounds).is_rejection());
        assert!(!Feedback::Redrawn.is_rejection());
        assert!(!Feedback::Moved(Position::new(0, 0)).is_rejection());
    }
}
