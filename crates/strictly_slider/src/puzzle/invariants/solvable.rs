//! Solvability invariant: the goal is reachable by legal slides.

use super::super::Puzzle;
use super::super::rules;
use super::Invariant;

/// Invariant: permutation parity matches the empty slot's distance parity.
pub struct SolvableInvariant;

impl Invariant<Puzzle> for SolvableInvariant {
    fn holds(puzzle: &Puzzle) -> bool {
        rules::is_solvable(puzzle.size, &puzzle.board)
    }

    fn description() -> &'static str {
        "Board is reachable from the goal by legal slides"
    }
}
