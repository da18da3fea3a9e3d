use serde::{Deserialize, Serialize};

use crate::frame::Shape;

/// Axis-aligned region of interest inside a source image, in pixels.
///
/// `(row, col)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roi {
    pub row: usize,
    pub col: usize,
    pub height: usize,
    pub width: usize,
}

impl Roi {
    pub fn new(row: usize, col: usize, height: usize, width: usize) -> Self {
        Self {
            row,
            col,
            height,
            width,
        }
    }

    /// One past the last covered row.
    pub fn bottom(&self) -> usize {
        self.row + self.height
    }

    /// One past the last covered column.
    pub fn right(&self) -> usize {
        self.col + self.width
    }

    /// True when the ROI is non-empty and lies entirely inside `bounds`.
    pub fn fits_within(&self, bounds: Shape) -> bool {
        self.height > 0
            && self.width > 0
            && self.bottom() <= bounds.height
            && self.right() <= bounds.width
    }
}

impl std::fmt::Display for Roi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.height, self.width, self.row, self.col
        )
    }
}

/// Shift `offset` by `delta` and saturate to `[0, limit]`.
pub(crate) fn shift_clamped(offset: usize, delta: i64, limit: usize) -> usize {
    (offset as i64)
        .saturating_add(delta)
        .clamp(0, limit as i64) as usize
}
