//! Gesture mapping: continuous drag offsets to single-axis tile motion.
//!
//! A dragged tile may only travel toward the empty slot, along one axis,
//! and never further than one cell. Callers feed every input sample
//! through [`clamp_drag`]; nothing is remembered between calls.

use crate::geometry::{GridLayout, ItemPosition};
use crate::puzzle::{Direction, Puzzle, rules};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// A 2D displacement from a tile's resting position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragOffset {
    /// Horizontal displacement; positive is rightward.
    pub dx: f32,
    /// Vertical displacement; positive is downward.
    pub dy: f32,
}

impl DragOffset {
    /// No displacement.
    pub const ZERO: DragOffset = DragOffset { dx: 0.0, dy: 0.0 };

    /// Creates an offset.
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(min, max)
    }
}

/// Clamps a raw drag of the tile at `index` to its one legal motion.
///
/// Tiles with no available move (and indices off the board) stay put.
#[instrument(level = "trace", skip(puzzle, layout))]
pub fn clamp_drag(
    puzzle: &Puzzle,
    layout: &GridLayout,
    index: usize,
    raw: DragOffset,
) -> DragOffset {
    let Some(direction) = puzzle
        .tile_at(index)
        .and_then(|tile| rules::available_move(puzzle, tile))
    else {
        trace!("Tile cannot move, pinning drag");
        return DragOffset::ZERO;
    };

    let stride = layout.item_stride(puzzle.size()).max(0.0);
    match direction {
        Direction::Left => DragOffset::new(clamp_axis(raw.dx, -stride, 0.0), 0.0),
        Direction::Right => DragOffset::new(clamp_axis(raw.dx, 0.0, stride), 0.0),
        Direction::Up => DragOffset::new(0.0, clamp_axis(raw.dy, -stride, 0.0)),
        Direction::Down => DragOffset::new(0.0, clamp_axis(raw.dy, 0.0, stride)),
    }
}

/// Where to draw the tile at `index` while it is being dragged.
pub fn dragged_position(
    puzzle: &Puzzle,
    layout: &GridLayout,
    index: usize,
    raw: DragOffset,
) -> ItemPosition {
    let origin = layout.item_position(puzzle.size(), index);
    let offset = clamp_drag(puzzle, layout, index, raw);
    ItemPosition::new(origin.top + offset.dy, origin.left + offset.dx)
}

/// Fraction of a full slide covered by a drag, from `0.0` to `1.0`.
///
/// Release handling (commit or snap back) belongs to the caller; this only
/// reports how far along the legal axis the tile has travelled.
pub fn drag_progress(
    puzzle: &Puzzle,
    layout: &GridLayout,
    index: usize,
    raw: DragOffset,
) -> f32 {
    let stride = layout.item_stride(puzzle.size());
    if stride <= 0.0 {
        return 0.0;
    }
    let offset = clamp_drag(puzzle, layout, index, raw);
    (offset.dx.abs() + offset.dy.abs()) / stride
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> GridLayout {
        GridLayout {
            viewport: 320.0,
            outer_margin: 10.0,
            padding: 6.0,
            item_margin: 2.0,
            pixel_ratio: 1.0,
        }
    }

    #[test]
    fn test_right_mover_clamps_to_positive_x() {
        // Goal board: tile 7 at index 7 moves right into the slot at 8.
        let puzzle = Puzzle::solved(3).unwrap();
        let layout = layout();
        assert_eq!(
            clamp_drag(&puzzle, &layout, 7, DragOffset::new(40.0, 30.0)),
            DragOffset::new(40.0, 0.0)
        );
        assert_eq!(
            clamp_drag(&puzzle, &layout, 7, DragOffset::new(-40.0, 0.0)),
            DragOffset::ZERO
        );
        assert_eq!(
            clamp_drag(&puzzle, &layout, 7, DragOffset::new(500.0, 0.0)),
            DragOffset::new(97.0, 0.0)
        );
    }

    #[test]
    fn test_down_mover_clamps_to_positive_y() {
        let puzzle = Puzzle::solved(3).unwrap();
        assert_eq!(
            clamp_drag(&puzzle, &layout(), 5, DragOffset::new(-20.0, 120.0)),
            DragOffset::new(0.0, 97.0)
        );
    }

    #[test]
    fn test_pinned_tile_and_empty_slot() {
        let puzzle = Puzzle::solved(3).unwrap();
        let layout = layout();
        assert_eq!(
            clamp_drag(&puzzle, &layout, 0, DragOffset::new(10.0, 10.0)),
            DragOffset::ZERO
        );
        assert_eq!(
            clamp_drag(&puzzle, &layout, 8, DragOffset::new(10.0, 10.0)),
            DragOffset::ZERO
        );
        assert_eq!(
            clamp_drag(&puzzle, &layout, 99, DragOffset::new(10.0, 10.0)),
            DragOffset::ZERO
        );
    }

    #[test]
    fn test_nan_input_pins_axis() {
        let puzzle = Puzzle::solved(3).unwrap();
        assert_eq!(
            clamp_drag(&puzzle, &layout(), 7, DragOffset::new(f32::NAN, 0.0)),
            DragOffset::ZERO
        );
    }

    #[test]
    fn test_dragged_position_adds_origin() {
        let puzzle = Puzzle::solved(3).unwrap();
        let position = dragged_position(&puzzle, &layout(), 7, DragOffset::new(10.0, 99.0));
        assert_eq!(position, ItemPosition::new(194.0, 107.0));
    }

    #[test]
    fn test_drag_progress() {
        let puzzle = Puzzle::solved(3).unwrap();
        let layout = layout();
        let half = drag_progress(&puzzle, &layout, 7, DragOffset::new(48.5, 0.0));
        assert!((half - 0.5).abs() < 1e-6);
        assert_eq!(
            drag_progress(&puzzle, &layout, 7, DragOffset::new(1000.0, 0.0)),
            1.0
        );
        assert_eq!(
            drag_progress(&puzzle, &layout, 0, DragOffset::new(1000.0, 0.0)),
            0.0
        );
    }
}
