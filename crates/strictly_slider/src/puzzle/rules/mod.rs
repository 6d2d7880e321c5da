//! Game rules for the sliding-tile puzzle.
//!
//! Pure functions over a board. Rules are separated from board storage so
//! they can be composed into contracts and invariants.

pub mod movable;
pub mod solved;

pub use movable::{available_move, movable_squares, neighbors};
pub use solved::{is_solvable, is_solved, is_odd_permutation, taxicab_from_goal};
