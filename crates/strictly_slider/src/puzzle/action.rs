//! First-class slide actions.
//!
//! A slide is a domain event: the tile the player wants to move plus the
//! direction it travels. It is derived from a board on demand and can be
//! validated independently of being applied.

use super::rules;
use super::types::{Direction, Puzzle};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A tile sliding one cell into the empty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slide {
    /// Tile value being moved.
    pub tile: usize,
    /// Direction the tile travels.
    pub direction: Direction,
}

impl Slide {
    /// Creates a slide descriptor without checking it against a board.
    pub fn new(tile: usize, direction: Direction) -> Self {
        Self { tile, direction }
    }

    /// Derives the slide `tile` would make on `puzzle`.
    ///
    /// # Errors
    ///
    /// Returns why the tile cannot move on this board.
    #[instrument(skip(puzzle))]
    pub fn for_tile(puzzle: &Puzzle, tile: usize) -> Result<Self, MoveError> {
        if tile == puzzle.empty() {
            return Err(MoveError::EmptyTile);
        }
        if puzzle.position_of(tile).is_none() {
            return Err(MoveError::UnknownTile(tile));
        }
        rules::available_move(puzzle, tile)
            .map(|direction| Self { tile, direction })
            .ok_or(MoveError::NotMovable(tile))
    }

    /// Tile being moved.
    pub fn tile(&self) -> usize {
        self.tile
    }

    /// Direction of travel.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl std::fmt::Display for Slide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.tile, self.direction)
    }
}

/// Reason a slide was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The empty slot cannot be moved onto itself.
    #[display("The empty slot cannot be moved")]
    EmptyTile,

    /// Tile value does not exist on this board.
    #[display("Tile {} is not on the board", _0)]
    UnknownTile(usize),

    /// Tile is not adjacent to the empty slot.
    #[display("Tile {} is not next to the empty slot", _0)]
    NotMovable(usize),

    /// Descriptor was derived from a different board state.
    #[display("Tile {} cannot slide {}", _0, _1)]
    DirectionMismatch(usize, Direction),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_tile_reports_direction() {
        let puzzle = Puzzle::solved(3).unwrap();
        assert_eq!(
            Slide::for_tile(&puzzle, 7),
            Ok(Slide::new(7, Direction::Right))
        );
        assert_eq!(
            Slide::for_tile(&puzzle, 5),
            Ok(Slide::new(5, Direction::Down))
        );
    }

    #[test]
    fn test_for_tile_rejects_empty_and_unknown() {
        let puzzle = Puzzle::solved(3).unwrap();
        assert_eq!(Slide::for_tile(&puzzle, 8), Err(MoveError::EmptyTile));
        assert_eq!(
            Slide::for_tile(&puzzle, 42),
            Err(MoveError::UnknownTile(42))
        );
        assert_eq!(Slide::for_tile(&puzzle, 0), Err(MoveError::NotMovable(0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Slide::new(3, Direction::Up).to_string(), "3 -> up");
        assert_eq!(
            MoveError::DirectionMismatch(3, Direction::Up).to_string(),
            "Tile 3 cannot slide up"
        );
    }
}
