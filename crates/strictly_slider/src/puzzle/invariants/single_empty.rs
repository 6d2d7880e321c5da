//! Single-empty invariant: exactly one cell holds the empty slot, and it is
//! the cell the puzzle believes it is.

use super::super::Puzzle;
use super::Invariant;

/// Invariant: exactly one position holds `empty`, and `empty_position()`
/// points at it.
pub struct SingleEmptyInvariant;

impl Invariant<Puzzle> for SingleEmptyInvariant {
    fn holds(puzzle: &Puzzle) -> bool {
        let count = puzzle
            .board
            .iter()
            .filter(|&&tile| tile == puzzle.empty)
            .count();
        count == 1 && puzzle.board.get(puzzle.hole) == Some(&puzzle.empty)
    }

    fn description() -> &'static str {
        "Exactly one cell holds the empty slot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_after_slide() {
        let puzzle = Puzzle::solved(3).unwrap().slide(5);
        assert!(SingleEmptyInvariant::holds(&puzzle));
    }

    #[test]
    fn test_stale_hole_violates() {
        let mut puzzle = Puzzle::solved(3).unwrap();
        puzzle.hole = 0;
        assert!(!SingleEmptyInvariant::holds(&puzzle));
    }
}
