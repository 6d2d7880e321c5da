//! Move legality: which tiles touch the empty slot, and which way they go.

use super::super::types::{Direction, Puzzle, coords};
use tracing::instrument;

/// Positions 4-adjacent to `index`, in up, down, left, right order.
pub fn neighbors(size: usize, index: usize) -> impl Iterator<Item = usize> {
    let (row, col) = coords(size, index);
    let up = (row > 0).then(|| index - size);
    let down = (row + 1 < size).then(|| index + size);
    let left = (col > 0).then(|| index - 1);
    let right = (col + 1 < size).then(|| index + 1);
    [up, down, left, right].into_iter().flatten()
}

/// Tile values adjacent to the empty slot.
///
/// Corners yield 2 tiles, edges 3, interior cells 4. Never empty for a
/// board of size 2 or more.
#[instrument(skip(puzzle), fields(hole = puzzle.empty_position()))]
pub fn movable_squares(puzzle: &Puzzle) -> Vec<usize> {
    neighbors(puzzle.size(), puzzle.empty_position())
        .filter_map(|index| puzzle.tile_at(index))
        .collect()
}

/// Direction `tile` travels toward the empty slot, or `None` when it is not
/// adjacent (this includes the empty tile itself and unknown values).
#[instrument(skip(puzzle))]
pub fn available_move(puzzle: &Puzzle, tile: usize) -> Option<Direction> {
    if tile == puzzle.empty() {
        return None;
    }
    let (row, col) = puzzle.coords(puzzle.position_of(tile)?);
    let (hole_row, hole_col) = puzzle.coords(puzzle.empty_position());

    if row == hole_row && col + 1 == hole_col {
        Some(Direction::Right)
    } else if row == hole_row && hole_col + 1 == col {
        Some(Direction::Left)
    } else if col == hole_col && row + 1 == hole_row {
        Some(Direction::Down)
    } else if col == hole_col && hole_row + 1 == row {
        Some(Direction::Up)
    } else {
        None
    }
}
