//! Sliding-tile puzzle model.

mod action;
mod board_size;
pub mod contracts;
mod generator;
pub mod invariants;
pub mod rules;
mod types;

pub use action::{MoveError, Slide};
pub use board_size::BoardSize;
pub use generator::{
    MIN_SHUFFLE_MOVES, SHUFFLE_MOVES_PER_TILE, create_puzzle, create_puzzle_with,
    shuffle_moves_for,
};
pub use types::{Direction, Puzzle, coords, get_index};

/// Tile values adjacent to the empty slot.
pub fn movable_squares(puzzle: &Puzzle) -> Vec<usize> {
    rules::movable_squares(puzzle)
}

/// Direction `tile` would travel, or `None` when it cannot move.
pub fn available_move(puzzle: &Puzzle, tile: usize) -> Option<Direction> {
    rules::available_move(puzzle, tile)
}

/// Returns the puzzle after sliding `tile`; a no-op for illegal tiles.
pub fn move_tile(puzzle: &Puzzle, tile: usize) -> Puzzle {
    puzzle.slide(tile)
}

/// True when the board is in the goal arrangement.
pub fn is_solved(puzzle: &Puzzle) -> bool {
    rules::is_solved(puzzle)
}
