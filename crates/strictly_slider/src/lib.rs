//! Strictly Slider - sliding-tile puzzle engine
//!
//! Pure state-transition functions and gesture math that a rendering layer
//! drives. Nothing here draws, animates or loads assets.
//!
//! # Architecture
//!
//! - **Geometry**: board size and cell index to pixel size/position
//! - **Puzzle**: immutable boards, generation, legal slides, solved detection
//! - **Gesture**: clamps drag offsets to a tile's one legal motion
//! - **Lifecycle**: phase machine, per-session counters, and an async driver
//!
//! # Example
//!
//! ```
//! use strictly_slider::{GameSession, Puzzle, Signal, SlideOutcome};
//!
//! let puzzle = Puzzle::from_board(3, vec![0, 1, 2, 3, 4, 5, 6, 8, 7]).unwrap();
//! let mut session = GameSession::new(puzzle, true);
//! session.signal(Signal::EntryTransitionComplete);
//!
//! assert_eq!(session.slide(7), SlideOutcome::Solved);
//! assert_eq!(session.moves(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
pub mod geometry;
pub mod gesture;
pub mod lifecycle;
pub mod puzzle;

// Crate-level exports - Configuration
pub use config::{ConfigError, PuzzleConfig};

// Crate-level exports - Errors
pub use error::PuzzleError;

// Crate-level exports - Geometry and gestures
pub use geometry::{GridLayout, ItemPosition};
pub use gesture::{DragOffset, clamp_drag, drag_progress, dragged_position};

// Crate-level exports - Puzzle model
pub use puzzle::{
    BoardSize, Direction, MoveError, Puzzle, Slide, available_move, create_puzzle,
    create_puzzle_with, is_solved, move_tile, movable_squares,
};

// Crate-level exports - Lifecycle
pub use lifecycle::{
    DriverError, GameSession, Phase, PhaseEffect, PhaseEvent, SessionHandle, SessionSnapshot,
    Signal, SlideOutcome,
};
pub use lifecycle::driver::spawn as spawn_session;
