//! Puzzle generation by random walk from the goal.
//!
//! Walking legal slides from the solved board can only reach solvable
//! arrangements, so no parity check is needed on the result.

use super::rules;
use super::types::Puzzle;
use crate::error::PuzzleError;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, instrument};

/// Floor on the number of random slides used to shuffle a board.
pub const MIN_SHUFFLE_MOVES: usize = 100;

/// Random slides per tile; larger boards get a longer walk.
pub const SHUFFLE_MOVES_PER_TILE: usize = 10;

/// Default walk length for a board of the given size.
pub fn shuffle_moves_for(size: usize) -> usize {
    (size * size * SHUFFLE_MOVES_PER_TILE).max(MIN_SHUFFLE_MOVES)
}

/// Creates a shuffled, solvable, unsolved puzzle using the thread RNG.
///
/// # Errors
///
/// Returns [`PuzzleError::SizeTooSmall`] when `size < 2`.
#[instrument]
pub fn create_puzzle(size: usize) -> Result<Puzzle, PuzzleError> {
    create_puzzle_with(size, shuffle_moves_for(size), &mut rand::thread_rng())
}

/// Creates a shuffled puzzle with an explicit walk length and RNG.
///
/// The walk never immediately reverses its previous slide, and keeps going
/// past `moves` until the board is no longer solved.
#[instrument(skip(rng))]
pub fn create_puzzle_with<R>(size: usize, moves: usize, rng: &mut R) -> Result<Puzzle, PuzzleError>
where
    R: Rng + ?Sized,
{
    let mut puzzle = Puzzle::solved(size)?;
    let mut previous: Option<usize> = None;
    let mut taken = 0usize;

    while taken < moves || puzzle.is_solved() {
        let candidates: Vec<usize> = rules::movable_squares(&puzzle)
            .into_iter()
            .filter(|&tile| Some(tile) != previous)
            .collect();
        let Some(&tile) = candidates.choose(rng) else {
            debug!(taken, "No candidate slide, stopping walk");
            break;
        };
        puzzle = puzzle.slide(tile);
        previous = Some(tile);
        taken += 1;
    }

    info!(size, taken, "Generated puzzle");
    Ok(puzzle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_walk_length_has_a_floor() {
        assert_eq!(shuffle_moves_for(2), MIN_SHUFFLE_MOVES);
        assert_eq!(shuffle_moves_for(3), MIN_SHUFFLE_MOVES);
        assert_eq!(shuffle_moves_for(6), 360);
    }

    #[test]
    fn test_zero_moves_still_leaves_goal() {
        let mut rng = StdRng::seed_from_u64(7);
        let puzzle = create_puzzle_with(3, 0, &mut rng).unwrap();
        assert!(!puzzle.is_solved());
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = create_puzzle_with(4, 200, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = create_puzzle_with(4, 200, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_tiny_board() {
        assert_eq!(create_puzzle(1), Err(PuzzleError::SizeTooSmall(1)));
    }

    #[test]
    fn test_two_by_two_is_generated_unsolved() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let puzzle = create_puzzle_with(2, 101, &mut rng).unwrap();
            assert!(!puzzle.is_solved());
        }
    }
}
