//! Core domain types for the sliding-tile puzzle.

use crate::error::PuzzleError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::action::{MoveError, Slide};
use super::contracts::{Contract, SlideContract};
use super::rules;

/// Direction a tile travels when it slides into the empty slot.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
}

impl Direction {
    /// Returns true for `Left` and `Right`.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Returns true for `Up` and `Down`.
    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    /// The opposite direction (the one that undoes this slide).
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Converts a `(row, col)` coordinate into a flat row-major index.
pub fn get_index(size: usize, row: usize, col: usize) -> usize {
    row * size + col
}

/// Converts a flat row-major index into a `(row, col)` coordinate.
pub fn coords(size: usize, index: usize) -> (usize, usize) {
    (index / size, index % size)
}

/// An immutable `size x size` sliding-tile board.
///
/// `board[i]` is the tile value at position `i`. The highest tile value
/// (`size * size - 1`) is the empty slot. Every value that leaves this
/// module is a solvable permutation; moves return a new `Puzzle`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPuzzle", into = "RawPuzzle")]
pub struct Puzzle {
    pub(crate) size: usize,
    pub(crate) board: Vec<usize>,
    pub(crate) empty: usize,
    /// Position currently holding `empty`.
    pub(crate) hole: usize,
}

impl Puzzle {
    /// Smallest supported board edge.
    pub const MIN_SIZE: usize = 2;

    /// Creates the goal arrangement `[0, 1, ..., size*size - 1]`.
    #[instrument]
    pub fn solved(size: usize) -> Result<Self, PuzzleError> {
        if size < Self::MIN_SIZE {
            return Err(PuzzleError::SizeTooSmall(size));
        }
        let len = size * size;
        Ok(Self {
            size,
            board: (0..len).collect(),
            empty: len - 1,
            hole: len - 1,
        })
    }

    /// Builds a puzzle from an explicit arrangement.
    ///
    /// # Errors
    ///
    /// Rejects boards that are too small, the wrong length, not a
    /// permutation of `0..size*size`, or not solvable.
    #[instrument(skip(board), fields(len = board.len()))]
    pub fn from_board(size: usize, board: Vec<usize>) -> Result<Self, PuzzleError> {
        if size < Self::MIN_SIZE {
            return Err(PuzzleError::SizeTooSmall(size));
        }
        let expected = size * size;
        if board.len() != expected {
            return Err(PuzzleError::WrongLength {
                expected,
                actual: board.len(),
            });
        }

        let mut seen = vec![false; expected];
        for &tile in &board {
            match seen.get_mut(tile) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(PuzzleError::NotAPermutation(tile)),
            }
        }

        if !rules::is_solvable(size, &board) {
            debug!(?board, "Rejecting unsolvable board");
            return Err(PuzzleError::Unsolvable);
        }

        let empty = expected - 1;
        let hole = board
            .iter()
            .position(|&tile| tile == empty)
            .ok_or(PuzzleError::NotAPermutation(empty))?;

        Ok(Self {
            size,
            board,
            empty,
            hole,
        })
    }

    /// Board edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Tiles in row-major order.
    pub fn board(&self) -> &[usize] {
        &self.board
    }

    /// Tile value that represents the empty slot.
    pub fn empty(&self) -> usize {
        self.empty
    }

    /// Position currently holding the empty slot.
    pub fn empty_position(&self) -> usize {
        self.hole
    }

    /// Tile value at a position, if the position is on the board.
    pub fn tile_at(&self, index: usize) -> Option<usize> {
        self.board.get(index).copied()
    }

    /// Position of a tile value, if it exists on this board.
    pub fn position_of(&self, tile: usize) -> Option<usize> {
        if tile == self.empty {
            return Some(self.hole);
        }
        self.board.iter().position(|&t| t == tile)
    }

    /// Flat index of `(row, col)` on this board.
    pub fn get_index(&self, row: usize, col: usize) -> usize {
        get_index(self.size, row, col)
    }

    /// `(row, col)` of a flat index on this board.
    pub fn coords(&self, index: usize) -> (usize, usize) {
        coords(self.size, index)
    }

    /// Tile values that can legally slide this turn.
    pub fn movable_tiles(&self) -> Vec<usize> {
        rules::movable_squares(self)
    }

    /// Direction `tile` would travel, or `None` if it cannot move.
    pub fn available_move(&self, tile: usize) -> Option<Direction> {
        rules::available_move(self, tile)
    }

    /// True when the board is in the goal arrangement.
    pub fn is_solved(&self) -> bool {
        rules::is_solved(self)
    }

    /// Slides `tile` into the empty slot.
    ///
    /// Illegal requests (a tile not adjacent to the slot, the empty tile
    /// itself, an unknown value) are a no-op and return an equal puzzle.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn slide(&self, tile: usize) -> Puzzle {
        match self.try_slide(tile) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, "Ignoring slide");
                self.clone()
            }
        }
    }

    /// Slides `tile` into the empty slot, reporting why it was refused.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn try_slide(&self, tile: usize) -> Result<Puzzle, MoveError> {
        let action = Slide::for_tile(self, tile)?;
        self.apply(action)
    }

    /// Applies a slide descriptor.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (the descriptor must still be legal)
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(size = self.size))]
    pub fn apply(&self, action: Slide) -> Result<Puzzle, MoveError> {
        SlideContract::pre(self, &action)?;

        let from = self
            .position_of(action.tile)
            .ok_or(MoveError::UnknownTile(action.tile))?;
        let mut board = self.board.clone();
        board.swap(from, self.hole);

        let next = Puzzle {
            size: self.size,
            board,
            empty: self.empty,
            hole: from,
        };

        #[cfg(debug_assertions)]
        SlideContract::post(self, &next)?;

        Ok(next)
    }

    /// Applies a sequence of slides, stopping at the first illegal one.
    #[instrument(skip(self, tiles), fields(count = tiles.len()))]
    pub fn replay(&self, tiles: &[usize]) -> Result<Puzzle, MoveError> {
        tiles
            .iter()
            .try_fold(self.clone(), |puzzle, &tile| puzzle.try_slide(tile))
    }
}

impl std::fmt::Display for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.empty.to_string().len();
        for (row, cells) in self.board.chunks(self.size).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, &tile) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                if tile == self.empty {
                    write!(f, "{:>width$}", ".", width = width)?;
                } else {
                    write!(f, "{:>width$}", tile, width = width)?;
                }
            }
        }
        Ok(())
    }
}

/// Wire form of a puzzle; validated through [`Puzzle::from_board`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawPuzzle {
    size: usize,
    board: Vec<usize>,
}

impl TryFrom<RawPuzzle> for Puzzle {
    type Error = PuzzleError;

    fn try_from(raw: RawPuzzle) -> Result<Self, Self::Error> {
        Puzzle::from_board(raw.size, raw.board)
    }
}

impl From<Puzzle> for RawPuzzle {
    fn from(puzzle: Puzzle) -> Self {
        RawPuzzle {
            size: puzzle.size,
            board: puzzle.board,
        }
    }
}
