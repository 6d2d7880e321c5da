//! Player-selectable board sizes.

use crate::error::PuzzleError;
use serde::{Deserialize, Serialize};

/// A board edge the player may pick: 3 through 6 inclusive.
///
/// The engine itself accepts any size from 2 up; this type guards the
/// selection edge (config files, CLI flags, size pickers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Smallest selectable size.
    pub const MIN: usize = 3;
    /// Largest selectable size.
    pub const MAX: usize = 6;

    /// Validates a selection.
    pub fn new(size: usize) -> Result<Self, PuzzleError> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(Self(size))
        } else {
            Err(PuzzleError::SizeOutOfRange {
                size,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Every selectable size, smallest first.
    pub fn all() -> impl Iterator<Item = BoardSize> {
        (Self::MIN..=Self::MAX).map(BoardSize)
    }

    /// Board edge length.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = PuzzleError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}
