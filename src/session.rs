//! Game session state.

use crate::{
    grid::{Grid, Position},
    movement::{self, Command, MoveOutcome},
};

/// One game in progress.
///
/// A session owns exactly one [`Grid`] and the player's position on it. The position starts on the
/// grid's entry and only ever changes through accepted moves, so it always names a traversable cell
/// inside the grid.
#[derive(Clone, Debug)]
pub struct Session {
    /// The maze being played.
    grid: Grid,
    /// Where the player currently stands.
    player: Position,
    /// Number of accepted steps taken so far. Redraws do not count.
    moves: usize,
}

impl Session {
    /// Starts a new game on the given grid with the player on the entry cell.
    #[must_use]
    pub const fn new(grid: Grid) -> Self {
        let player = grid.entry();
        Self {
            grid,
            player,
            moves: 0,
        }
    }

    /// The maze being played.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The player's current position.
    #[must_use]
    pub const fn player(&self) -> Position {
        self.player
    }

    /// Number of accepted steps taken so far.
    #[must_use]
    pub const fn moves(&self) -> usize {
        self.moves
    }

    /// Handles one direction token.
    ///
    /// Unrecognized tokens are rejected before the grid is consulted. Accepted steps are committed
    /// to the player position; rejected ones leave the session untouched.
    pub fn submit(&mut self, token: char) -> MoveOutcome {
        match Command::from_token(token) {
            Ok(command) => self.perform(command),
            Err(rejection) => {
                tracing::debug!(%token, %rejection, "token rejected");
                MoveOutcome::Rejected(rejection)
            }
        }
    }

    /// Carries out an already parsed command.
    pub fn perform(&mut self, command: Command) -> MoveOutcome {
        let outcome = movement::apply_command(&self.grid, self.player, command);

        match outcome {
            MoveOutcome::Accepted(position) if matches!(command, Command::Move(_)) => {
                self.player = position;
                self.moves += 1;
                tracing::debug!(?command, player = %position, moves = self.moves, "move accepted");
            }
            MoveOutcome::Accepted(_) => tracing::debug!(?command, "redraw requested"),
            MoveOutcome::Rejected(rejection) => {
                tracing::debug!(?command, player = %self.player, %rejection, "move rejected");
            }
        }

        outcome
    }

    /// Whether the player stands on the exit.
    #[must_use]
    pub fn has_won(&self) -> bool {
        movement::has_won(&self.grid, self.player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{loader, movement::MoveRejection};

    /// Column 0 runs straight down from the entry and row 4 runs straight across to the exit.
    fn corridor_session() -> Session {
        Session::new(
            loader::load("S####\n ####\n ####\n ####\n    E").expect("corridor maze should load"),
        )
    }

    #[test]
    fn test_new_session_starts_on_entry() {
        let session = corridor_session();

        assert_eq!(session.player(), Position::new(0, 0));
        assert_eq!(session.moves(), 0);
        assert!(!session.has_won(), "a new session should not be won");
    }

    #[test]
    fn test_walk_to_exit() {
        let mut session = corridor_session();

        for _ in 0..4 {
            assert!(session.submit('s').is_accepted(), "south should be open");
            assert!(!session.has_won(), "column 0 should not win");
        }
        assert_eq!(session.player(), Position::new(0, 4));

        for step in 1..=4 {
            assert!(session.submit('D').is_accepted(), "east should be open");
            assert_eq!(session.has_won(), step == 4, "only the last step should win");
        }
        assert_eq!(session.player(), Position::new(4, 4));
        assert_eq!(session.moves(), 8);
    }

    #[test]
    fn test_invalid_token_leaves_state_unchanged() {
        let mut session = corridor_session();
        let _ = session.submit('s');

        let outcome = session.submit('?');

        assert_eq!(
            outcome,
            MoveOutcome::Rejected(MoveRejection::InvalidDirection { token: '?' })
        );
        assert_eq!(session.player(), Position::new(0, 1));
        assert_eq!(session.moves(), 1);
    }

    #[test]
    fn test_blocked_move_leaves_state_unchanged() {
        let mut session = corridor_session();

        assert_eq!(
            session.submit('d'),
            MoveOutcome::Rejected(MoveRejection::Blocked)
        );
        assert_eq!(session.player(), Position::new(0, 0));
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn test_out_of_bounds_move_leaves_state_unchanged() {
        let mut session = corridor_session();

        assert_eq!(
            session.submit('w'),
            MoveOutcome::Rejected(MoveRejection::OutOfBounds)
        );
        assert_eq!(
            session.submit('a'),
            MoveOutcome::Rejected(MoveRejection::OutOfBounds)
        );
        assert_eq!(session.player(), Position::new(0, 0));
    }

    #[test]
    fn test_redraw_is_accepted_without_moving() {
        let mut session = corridor_session();

        assert_eq!(
            session.submit('m'),
            MoveOutcome::Accepted(Position::new(0, 0))
        );
        assert_eq!(session.moves(), 0);
        assert!(!session.has_won(), "redraw on entry should not win");
    }
}
