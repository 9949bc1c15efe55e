//! Movement rules for the player marker.
//!
//! This module maps direction tokens to [`Command`]s and decides whether a single step is legal on
//! a given [`Grid`]. It holds no state of its own; the caller owns the player position and commits
//! accepted moves.

use derive_more::{Display, Error};

use crate::grid::{Grid, Position};

/// One of the four cardinal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    North,
    /// Towards the last row.
    South,
    /// Towards the last column.
    East,
    /// Towards column 0.
    West,
}

impl Direction {
    /// Returns the position one cell away in this direction.
    ///
    /// Returns [`None`] when the step would leave the non-negative quadrant, i.e. moving north from
    /// row 0 or west from column 0. Steps past the far edges are left to the caller, which knows the
    /// grid's dimensions.
    #[must_use]
    pub fn offset(self, position: Position) -> Option<Position> {
        let Position { column, row } = position;
        match self {
            Self::North => row.checked_sub(1).map(|row| Position::new(column, row)),
            Self::South => row.checked_add(1).map(|row| Position::new(column, row)),
            Self::East => column.checked_add(1).map(|column| Position::new(column, row)),
            Self::West => column.checked_sub(1).map(|column| Position::new(column, row)),
        }
    }
}

/// Action requested by a single direction token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Step one cell in a direction.
    Move(Direction),
    /// Redraw the maze without moving.
    Redraw,
}

impl Command {
    /// Parses a direction token, ignoring case.
    ///
    /// The tokens are `w` (north), `s` (south), `d` (east), `a` (west) and `m` (redraw the map).
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejection::InvalidDirection`] for any other character.
    pub const fn from_token(token: char) -> Result<Self, MoveRejection> {
        match token.to_ascii_lowercase() {
            'w' => Ok(Self::Move(Direction::North)),
            's' => Ok(Self::Move(Direction::South)),
            'd' => Ok(Self::Move(Direction::East)),
            'a' => Ok(Self::Move(Direction::West)),
            'm' => Ok(Self::Redraw),
            _ => Err(MoveRejection::InvalidDirection { token }),
        }
    }
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Self::Move(direction)
    }
}

/// Why a move was refused.
///
/// Rejections are per-turn feedback only; the player stays where they were.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum MoveRejection {
    /// The candidate cell lies outside the grid.
    #[display(fmt = "cannot leave the maze")]
    OutOfBounds,
    /// The candidate cell is a wall.
    #[display(fmt = "a wall blocks the way")]
    Blocked,
    /// The token does not name a direction.
    #[display(fmt = "{token:?} is not a direction, use w/a/s/d or m")]
    InvalidDirection {
        /// The unrecognized token.
        token: char,
    },
}

/// Result of one movement attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move is legal; the player should stand on the given position.
    Accepted(Position),
    /// The move is illegal and the player stays put.
    Rejected(MoveRejection),
}

impl MoveOutcome {
    /// Whether this outcome lets the player proceed.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Computes the outcome of stepping from `current` in `direction`.
///
/// The candidate is bounds-checked against the grid's own width and height before its cell is read,
/// and the read goes through [`Grid::cell`], which indexes row first. Walls reject the move; every
/// other cell accepts it.
#[must_use]
pub fn attempt_move(grid: &Grid, current: Position, direction: Direction) -> MoveOutcome {
    let Some(candidate) = direction.offset(current) else {
        return MoveOutcome::Rejected(MoveRejection::OutOfBounds);
    };
    if !grid.contains(candidate) {
        return MoveOutcome::Rejected(MoveRejection::OutOfBounds);
    }

    match grid.cell(candidate) {
        Some(cell) if cell.is_traversable() => MoveOutcome::Accepted(candidate),
        Some(_) => MoveOutcome::Rejected(MoveRejection::Blocked),
        None => MoveOutcome::Rejected(MoveRejection::OutOfBounds),
    }
}

/// Computes the outcome of a full [`Command`].
///
/// Redraw requests always succeed without changing position.
#[must_use]
pub fn apply_command(grid: &Grid, current: Position, command: Command) -> MoveOutcome {
    match command {
        Command::Move(direction) => attempt_move(grid, current, direction),
        Command::Redraw => MoveOutcome::Accepted(current),
    }
}

/// Whether the position is the grid's exit.
#[must_use]
pub fn has_won(grid: &Grid, position: Position) -> bool {
    position == grid.exit()
}
