//! Construction errors for puzzle values.

/// Error returned when a puzzle (or one of its parameters) cannot be built.
///
/// These are contract errors: a caller handed the engine something that
/// would produce a corrupt board, so construction is refused outright.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PuzzleError {
    /// Board edge is below the 2x2 minimum.
    #[display("Board size {} is too small (minimum is 2)", _0)]
    SizeTooSmall(usize),

    /// Selected board size is outside the supported range.
    #[display("Board size {} is outside the supported range {}..={}", size, min, max)]
    SizeOutOfRange {
        /// Requested size.
        size: usize,
        /// Smallest accepted size.
        min: usize,
        /// Largest accepted size.
        max: usize,
    },

    /// Board does not hold `size * size` tiles.
    #[display("Expected {} tiles, got {}", expected, actual)]
    WrongLength {
        /// Tile count implied by the size.
        expected: usize,
        /// Tile count supplied.
        actual: usize,
    },

    /// A tile value is out of range or appears more than once.
    #[display("Tile {} is duplicated or out of range", _0)]
    NotAPermutation(usize),

    /// The arrangement cannot be brought back to the goal by legal moves.
    #[display("Board is not solvable")]
    Unsolvable,
}

impl std::error::Error for PuzzleError {}
