//! Contract-based validation for slides.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} slide {Q}

use super::action::{MoveError, Slide};
use super::invariants::{InvariantSet, PuzzleInvariants};
use super::rules;
use super::types::Puzzle;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Slide Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the tile is a real, non-empty tile on the board.
pub struct TileOnBoard;

impl TileOnBoard {
    /// Rejects the empty slot and unknown tile values.
    #[instrument(skip(puzzle))]
    pub fn check(action: &Slide, puzzle: &Puzzle) -> Result<(), MoveError> {
        if action.tile == puzzle.empty() {
            Err(MoveError::EmptyTile)
        } else if puzzle.position_of(action.tile).is_none() {
            Err(MoveError::UnknownTile(action.tile))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the tile touches the empty slot in the stated direction.
pub struct SlidesIntoHole;

impl SlidesIntoHole {
    /// Rejects tiles away from the slot and stale directions.
    #[instrument(skip(puzzle))]
    pub fn check(action: &Slide, puzzle: &Puzzle) -> Result<(), MoveError> {
        match rules::available_move(puzzle, action.tile) {
            None => Err(MoveError::NotMovable(action.tile)),
            Some(direction) if direction != action.direction => {
                Err(MoveError::DirectionMismatch(action.tile, action.direction))
            }
            Some(_) => Ok(()),
        }
    }
}

/// Composite precondition for a legal slide.
pub struct LegalSlide;

impl LegalSlide {
    /// Validates all preconditions for a slide.
    #[instrument(skip(puzzle))]
    pub fn check(action: &Slide, puzzle: &Puzzle) -> Result<(), MoveError> {
        TileOnBoard::check(action, puzzle)?;
        SlidesIntoHole::check(action, puzzle)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Slide Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: exactly the moved tile and the empty slot changed places.
pub struct SwapOnly;

impl SwapOnly {
    /// Compares the two boards cell by cell.
    #[instrument(skip(before, after))]
    pub fn holds(before: &Puzzle, after: &Puzzle) -> bool {
        let changed: Vec<usize> = before
            .board()
            .iter()
            .zip(after.board())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(index, _)| index)
            .collect();

        let valid = changed.len() == 2
            && changed.contains(&before.empty_position())
            && changed.contains(&after.empty_position());
        if !valid {
            warn!(?changed, "Slide changed more than a single swap");
        }
        valid
    }
}

// ─────────────────────────────────────────────────────────────
//  Slide Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for slide actions.
///
/// Preconditions:
/// - Tile exists and is not the empty slot
/// - Tile is adjacent to the slot, travelling in the stated direction
///
/// Postconditions:
/// - Board is still a permutation with a single, correctly tracked slot
/// - Board is still solvable
/// - Only the tile and the slot changed places
pub struct SlideContract;

impl Contract<Puzzle, Slide> for SlideContract {
    fn pre(puzzle: &Puzzle, action: &Slide) -> Result<(), MoveError> {
        LegalSlide::check(action, puzzle)
    }

    fn post(before: &Puzzle, after: &Puzzle) -> Result<(), MoveError> {
        PuzzleInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        if !SwapOnly::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: slide must swap one tile with the empty slot".to_string(),
            ));
        }
        Ok(())
    }
}
