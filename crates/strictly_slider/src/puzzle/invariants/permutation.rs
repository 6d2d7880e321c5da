//! Permutation invariant: the board holds every tile exactly once.

use super::super::Puzzle;
use super::Invariant;

/// Invariant: `board` is a permutation of `0..size*size`.
///
/// No duplicates, no gaps, correct length.
pub struct PermutationInvariant;

impl Invariant<Puzzle> for PermutationInvariant {
    fn holds(puzzle: &Puzzle) -> bool {
        let len = puzzle.size * puzzle.size;
        if puzzle.board.len() != len {
            return false;
        }
        let mut seen = vec![false; len];
        puzzle.board.iter().all(|&tile| match seen.get_mut(tile) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        })
    }

    fn description() -> &'static str {
        "Board is a permutation of 0..size*size"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_holds() {
        assert!(PermutationInvariant::holds(&Puzzle::solved(5).unwrap()));
    }

    #[test]
    fn test_duplicate_violates() {
        let mut puzzle = Puzzle::solved(3).unwrap();
        puzzle.board[0] = 1;
        assert!(!PermutationInvariant::holds(&puzzle));
    }

    #[test]
    fn test_truncated_board_violates() {
        let mut puzzle = Puzzle::solved(3).unwrap();
        puzzle.board.pop();
        assert!(!PermutationInvariant::holds(&puzzle));
    }
}
