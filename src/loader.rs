//! Maze file loading and validation.
//!
//! This module turns untrusted maze text into a [`Grid`]. Validation happens in a single row-major
//! pass and stops at the first violation, so once a [`Grid`] exists nothing downstream ever has to
//! re-check its shape or contents.

use std::{fs, io, ops::RangeInclusive, path::Path};

use derive_more::{Display, Error};

use crate::grid::{Cell, Grid, Position, MAX_DIMENSION, MIN_DIMENSION};

/// Accepted range for both maze dimensions.
const DIMENSION_RANGE: RangeInclusive<usize> = MIN_DIMENSION..=MAX_DIMENSION;

/// Reasons a maze text is rejected.
///
/// Every variant names the first violation found while scanning rows top to bottom and columns left
/// to right. The loader never repairs input or collects more than one error.
#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum MazeFormatError {
    /// The number of lines is outside the accepted range.
    #[display(fmt = "invalid height {height}: expected {MIN_DIMENSION} to {MAX_DIMENSION} rows")]
    InvalidHeight {
        /// Number of lines found.
        height: usize,
    },
    /// The first line's length is outside the accepted range.
    #[display(fmt = "invalid width {width}: expected {MIN_DIMENSION} to {MAX_DIMENSION} columns")]
    InvalidWidth {
        /// Number of characters on the first line.
        width: usize,
    },
    /// A row does not supply exactly the characters the first line established. Rows that are too
    /// short are always rejected, rows that are too long only by a strict [`Loader`].
    #[display(fmt = "row {row} has {length} characters, expected {width}")]
    RaggedRow {
        /// Zero-indexed row.
        row: usize,
        /// Number of characters on the row.
        length: usize,
        /// Width established by the first line.
        width: usize,
    },
    /// A character other than space, `#`, `S` or `E` was found.
    #[display(fmt = "illegal character {character:?} at {position}")]
    IllegalCharacter {
        /// Where the character was found.
        position: Position,
        /// The offending character.
        character: char,
    },
    /// A second `S` was found.
    #[display(fmt = "duplicate entry at {second}, first entry at {first}")]
    DuplicateEntry {
        /// The entry recorded first.
        first: Position,
        /// The entry that triggered the error.
        second: Position,
    },
    /// A second `E` was found.
    #[display(fmt = "duplicate exit at {second}, first exit at {first}")]
    DuplicateExit {
        /// The exit recorded first.
        first: Position,
        /// The exit that triggered the error.
        second: Position,
    },
    /// No `S` anywhere in the maze.
    #[display(fmt = "maze has no entry")]
    MissingEntry,
    /// No `E` anywhere in the maze.
    #[display(fmt = "maze has no exit")]
    MissingExit,
}

/// Failure to load a maze from disk.
///
/// Keeps a file that cannot be read apart from a file whose contents are malformed, since the two
/// map onto different exit statuses.
#[derive(Debug, Display, Error)]
pub enum LoadFileError {
    /// The file could not be opened or read.
    #[display(fmt = "could not read maze file {path}: {source}")]
    Access {
        /// Path as given by the caller.
        path: String,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file was read but its contents are not a valid maze.
    #[display(fmt = "invalid maze file {path}: {source}")]
    Format {
        /// Path as given by the caller.
        path: String,
        /// First violation found.
        source: MazeFormatError,
    },
}

/// Configurable maze loader.
///
/// The default loader mirrors the permissive behavior of the classic maze format and silently
/// ignores characters past the first line's width. A strict loader rejects such rows with
/// [`MazeFormatError::RaggedRow`] instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Loader {
    /// Whether rows longer than the first line are rejected.
    strict: bool,
}

impl Loader {
    /// Creates a permissive loader.
    #[must_use]
    pub const fn new() -> Self {
        Self { strict: false }
    }

    /// Enables or disables rejection of rows longer than the first line.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Validates maze text and builds a [`Grid`] from it.
    ///
    /// Lines are split with [`str::lines`], so a trailing newline does not add a row. The height is
    /// checked before the width, the width is taken from the first line and every cell is then
    /// classified in row-major order while the first entry and exit are recorded.
    ///
    /// # Errors
    ///
    /// Returns the first [`MazeFormatError`] encountered.
    pub fn load(&self, text: &str) -> Result<Grid, MazeFormatError> {
        let lines: Vec<&str> = text.lines().collect();

        let height = lines.len();
        if !DIMENSION_RANGE.contains(&height) {
            return Err(MazeFormatError::InvalidHeight { height });
        }

        let width = lines.first().map_or(0, |line| line.chars().count());
        if !DIMENSION_RANGE.contains(&width) {
            return Err(MazeFormatError::InvalidWidth { width });
        }

        let mut cells = Vec::with_capacity(height);
        let mut entry: Option<Position> = None;
        let mut exit: Option<Position> = None;

        for (row, line) in lines.into_iter().enumerate() {
            let length = line.chars().count();
            if length < width || (self.strict && length > width) {
                return Err(MazeFormatError::RaggedRow { row, length, width });
            }

            let mut cell_row = Vec::with_capacity(width);
            for (column, character) in line.chars().take(width).enumerate() {
                let position = Position::new(column, row);
                let cell = Cell::from_symbol(character).ok_or(
                    MazeFormatError::IllegalCharacter {
                        position,
                        character,
                    },
                )?;

                match cell {
                    Cell::Entry => {
                        if let Some(first) = entry {
                            return Err(MazeFormatError::DuplicateEntry {
                                first,
                                second: position,
                            });
                        }
                        entry = Some(position);
                    }
                    Cell::Exit => {
                        if let Some(first) = exit {
                            return Err(MazeFormatError::DuplicateExit {
                                first,
                                second: position,
                            });
                        }
                        exit = Some(position);
                    }
                    Cell::Open | Cell::Wall => {}
                }

                cell_row.push(cell);
            }
            cells.push(cell_row);
        }

        let entry = entry.ok_or(MazeFormatError::MissingEntry)?;
        let exit = exit.ok_or(MazeFormatError::MissingExit)?;

        Ok(Grid::from_validated(cells, width, height, entry, exit))
    }

    /// Reads a maze file in full and validates it.
    ///
    /// The file is closed as soon as its contents are in memory; the returned [`Grid`] does not
    /// depend on it afterwards. Bytes that are not valid UTF-8 become U+FFFD, which the validator
    /// reports as an illegal character at the position where it appears.
    ///
    /// # Errors
    ///
    /// - [`LoadFileError::Access`] if the file cannot be opened or read.
    /// - [`LoadFileError::Format`] if the contents fail validation.
    pub fn load_file(&self, path: &Path) -> Result<Grid, LoadFileError> {
        let display_path = path.display().to_string();

        let bytes = fs::read(path).map_err(|source| LoadFileError::Access {
            path: display_path.clone(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);

        match self.load(&text) {
            Ok(grid) => {
                tracing::info!(
                    path = %display_path,
                    width = grid.width(),
                    height = grid.height(),
                    entry = %grid.entry(),
                    exit = %grid.exit(),
                    "maze loaded"
                );
                Ok(grid)
            }
            Err(source) => {
                tracing::warn!(path = %display_path, error = %source, "maze rejected");
                Err(LoadFileError::Format {
                    path: display_path,
                    source,
                })
            }
        }
    }
}

/// Validates maze text with a permissive [`Loader`].
///
/// # Errors
///
/// Returns the first [`MazeFormatError`] encountered.
pub fn load(text: &str) -> Result<Grid, MazeFormatError> {
    Loader::new().load(text)
}
