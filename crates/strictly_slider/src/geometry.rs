//! Grid geometry: board size and cell index to pixel size and position.
//!
//! Pure math, no state. Rendering and layout measurement stay in callers,
//! which hand in the viewport edge and spacing once as a [`GridLayout`].

use crate::puzzle::coords;
use serde::{Deserialize, Serialize};

/// Top-left offset of a grid cell inside the board's content box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemPosition {
    /// Distance from the top edge.
    pub top: f32,
    /// Distance from the left edge.
    pub left: f32,
}

impl ItemPosition {
    /// Creates a position.
    pub fn new(top: f32, left: f32) -> Self {
        Self { top, left }
    }
}

/// Viewport-derived spacing for a square board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    /// Edge length of the available viewport (usually the window width).
    pub viewport: f32,
    /// Space kept between the viewport edge and the board on each side.
    pub outer_margin: f32,
    /// Padding inside the board container on each side.
    pub padding: f32,
    /// Gap between neighbouring cells.
    pub item_margin: f32,
    /// Physical pixels per layout unit; sizes snap to `1 / pixel_ratio`.
    pub pixel_ratio: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            viewport: 375.0,
            outer_margin: 10.0,
            padding: 6.0,
            item_margin: 2.0,
            pixel_ratio: 1.0,
        }
    }
}

impl GridLayout {
    /// Default spacing for the given viewport edge.
    pub fn new(viewport: f32) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Snaps a length to the nearest addressable pixel.
    fn round_px(&self, value: f32) -> f32 {
        let ratio = if self.pixel_ratio > 0.0 {
            self.pixel_ratio
        } else {
            1.0
        };
        (value * ratio).round() / ratio
    }

    /// Square edge length of the board container, margins excluded.
    pub fn container_size(&self) -> f32 {
        self.round_px((self.viewport - 2.0 * self.outer_margin).max(0.0))
    }

    /// Edge length of one cell on a `size x size` board.
    pub fn item_size(&self, size: usize) -> f32 {
        let cells = size.max(1) as f32;
        let gaps = self.item_margin * (cells - 1.0);
        let available = self.container_size() - 2.0 * self.padding - gaps;
        self.round_px((available / cells).max(0.0))
    }

    /// Distance a tile travels in one slide: a cell plus one gap.
    pub fn item_stride(&self, size: usize) -> f32 {
        self.item_size(size) + self.item_margin
    }

    /// Offset of the cell at `index` (row-major) inside the content box.
    pub fn item_position(&self, size: usize, index: usize) -> ItemPosition {
        let (row, col) = coords(size.max(1), index);
        let stride = self.item_stride(size);
        ItemPosition {
            top: stride * row as f32,
            left: stride * col as f32,
        }
    }
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
    fn test_container_excludes_outer_margin() {
        assert_eq!(layout().container_size(), 300.0);
    }

    #[test]
    fn test_item_size_fills_content_box() {
        // (300 - 12 - 2*2) / 3 = 94.67 -> 95
        assert_eq!(layout().item_size(3), 95.0);
        // (300 - 12 - 2*3) / 4 = 70.5 -> 71 (round half away from zero)
        assert_eq!(layout().item_size(4), 71.0);
    }

    #[test]
    fn test_item_size_snaps_to_device_pixels() {
        let hi_dpi = GridLayout {
            pixel_ratio: 2.0,
            ..layout()
        };
        // 94.666 * 2 = 189.33 -> 189 / 2
        assert_eq!(hi_dpi.item_size(3), 94.5);
    }

    #[test]
    fn test_item_position_row_major() {
        let layout = layout();
        assert_eq!(layout.item_position(3, 0), ItemPosition::new(0.0, 0.0));
        assert_eq!(layout.item_position(3, 2), ItemPosition::new(0.0, 194.0));
        assert_eq!(layout.item_position(3, 7), ItemPosition::new(194.0, 97.0));
    }

    #[test]
    fn test_tiny_viewport_never_negative() {
        let layout = GridLayout::new(4.0);
        assert_eq!(layout.container_size(), 0.0);
        assert_eq!(layout.item_size(6), 0.0);
    }
}
