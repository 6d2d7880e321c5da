//! Solved-state and solvability detection.

use super::super::types::{Puzzle, coords};
use tracing::instrument;

/// Checks whether the board is in the goal arrangement `[0, 1, ..., n-1]`.
#[instrument(skip(puzzle), fields(size = puzzle.size()))]
pub fn is_solved(puzzle: &Puzzle) -> bool {
    puzzle
        .board()
        .iter()
        .enumerate()
        .all(|(index, &tile)| index == tile)
}

/// Parity of a permutation of `0..board.len()`, counted by cycle
/// decomposition: a cycle of length `k` is `k - 1` transpositions.
///
/// The board must be a permutation.
pub fn is_odd_permutation(board: &[usize]) -> bool {
    let mut visited = vec![false; board.len()];
    let mut transpositions = 0usize;

    for start in 0..board.len() {
        if visited[start] {
            continue;
        }
        let mut cursor = start;
        let mut cycle_len = 0usize;
        while let Some(seen) = visited.get_mut(cursor) {
            if *seen {
                break;
            }
            *seen = true;
            cycle_len += 1;
            cursor = board[cursor];
        }
        transpositions += cycle_len.saturating_sub(1);
    }

    transpositions % 2 == 1
}

/// Taxicab distance between the empty slot and its goal corner.
pub fn taxicab_from_goal(size: usize, board: &[usize]) -> usize {
    let empty = board.len().saturating_sub(1);
    let Some(hole) = board.iter().position(|&tile| tile == empty) else {
        return 0;
    };
    let (row, col) = coords(size, hole);
    (size - 1 - row) + (size - 1 - col)
}

/// Solvability test for a permutation board.
///
/// Every legal slide is one transposition that also moves the empty slot
/// one cell, so permutation parity and the slot's taxicab distance from
/// its goal corner flip together. A board is reachable from the goal
/// exactly when the two parities agree.
#[instrument(skip(board))]
pub fn is_solvable(size: usize, board: &[usize]) -> bool {
    is_odd_permutation(board) == (taxicab_from_goal(size, board) % 2 == 1)
}
