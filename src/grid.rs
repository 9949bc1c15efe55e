//! Maze grid data model.
//!
//! This module contains the validated, read-only representation of a maze: the [`Cell`] contents,
//! the [`Position`] coordinates used to address them and the [`Grid`] that owns both the cells and
//! the resolved entry and exit positions. A [`Grid`] can only be built by the loader, so every value
//! of this type upholds the dimension, shape and entry/exit invariants for its whole lifetime.

use std::fmt::{self, Display, Formatter, Write as _};

/// Smallest accepted width or height of a maze, inclusive.
pub const MIN_DIMENSION: usize = 5;

/// Largest accepted width or height of a maze, inclusive.
pub const MAX_DIMENSION: usize = 100;

/// Zero-indexed cell coordinates.
///
/// The column grows from left to right and the row grows from top to bottom, so the top-left cell
/// of every maze sits at column 0, row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Horizontal coordinate, in `[0, width)`.
    pub column: usize,
    /// Vertical coordinate, in `[0, height)`.
    pub row: usize,
}

impl Position {
    /// Builds a position from its column and row.
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(column {}, row {})", self.column, self.row)
    }
}

/// Content of a single maze cell.
///
/// Each variant round-trips losslessly through exactly one character of the maze file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Traversable empty cell, written as a space.
    Open,
    /// Blocking cell, written as `#`.
    Wall,
    /// Traversable starting cell, written as `S`.
    Entry,
    /// Traversable goal cell, written as `E`.
    Exit,
}

impl Cell {
    /// Classifies a maze file character.
    ///
    /// Returns [`None`] for any character outside the four legal symbols, leaving it to the caller
    /// to decide how to report it.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ' ' => Some(Self::Open),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Entry),
            'E' => Some(Self::Exit),
            _ => None,
        }
    }

    /// Returns the maze file character for this cell.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Open => ' ',
            Self::Wall => '#',
            Self::Entry => 'S',
            Self::Exit => 'E',
        }
    }

    /// Whether a player may stand on this cell.
    #[must_use]
    pub const fn is_traversable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Validated rectangular maze.
///
/// The matrix is stored row-major and always addressed as `[row][column]`. Construction is
/// restricted to the loader, which guarantees that both dimensions lie within
/// [`MIN_DIMENSION`]..=[`MAX_DIMENSION`], that every row has exactly `width` cells and that exactly
/// one [`Cell::Entry`] and one [`Cell::Exit`] exist at the recorded positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Cell matrix, one inner vector per row.
    cells: Vec<Vec<Cell>>,
    /// Number of columns in every row.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Position of the unique entry cell.
    entry: Position,
    /// Position of the unique exit cell.
    exit: Position,
}

impl Grid {
    /// Assembles a grid from parts the loader has already validated.
    pub(crate) const fn from_validated(
        cells: Vec<Vec<Cell>>,
        width: usize,
        height: usize,
        entry: Position,
        exit: Position,
    ) -> Self {
        Self {
            cells,
            width,
            height,
            entry,
            exit,
        }
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Position of the entry cell, where every new game starts.
    #[must_use]
    pub const fn entry(&self) -> Position {
        self.entry
    }

    /// Position of the exit cell, the goal of every game.
    #[must_use]
    pub const fn exit(&self) -> Position {
        self.exit
    }

    /// Whether the position lies inside this grid's own bounds.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.column < self.width && position.row < self.height
    }

    /// Looks up the cell at a position.
    ///
    /// The lookup goes through the row first and the column second. Positions outside the grid
    /// yield [`None`].
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.cells
            .get(position.row)
            .and_then(|row| row.get(position.column))
            .copied()
    }

    /// Rows of the grid, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }
}

impl Display for Grid {
    /// Writes the grid back in the maze file format, rows separated by `\n` and no trailing
    /// newline.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.cells.iter().enumerate() {
            if idx > 0 {
                f.write_char('\n')?;
            }
            for cell in row {
                f.write_char(cell.symbol())?;
            }
        }

        Ok(())
    }
}
