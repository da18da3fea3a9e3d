use ndarray::{Array3, ArrayView3, s};
use serde::{Deserialize, Serialize};

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{Result, ViewportError};
use crate::roi::Roi;

/// A raster image.
/// Pixel values are f32 in [0.0, 1.0].
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width, channels).
    /// One channel is grayscale, three channels are RGB.
    pub data: Array3<f32>,
}

impl Frame {
    pub fn new(data: Array3<f32>) -> Self {
        Self { data }
    }

    /// Frame of the given shape and channel count filled with `value`.
    pub fn filled(shape: Shape, channels: usize, value: f32) -> Self {
        Self::new(Array3::from_elem((shape.height, shape.width, channels), value))
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    pub fn is_color(&self) -> bool {
        self.channels() == COLOR_CHANNEL_COUNT
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.height(), self.width())
    }

    /// Fails with `InvalidShape` when any dimension is zero.
    pub fn validate(&self) -> Result<()> {
        if self.height() == 0 || self.width() == 0 || self.channels() == 0 {
            return Err(ViewportError::InvalidShape {
                height: self.height(),
                width: self.width(),
            });
        }
        Ok(())
    }

    /// Borrow the pixels covered by `roi`. The ROI must lie within the frame.
    pub fn crop_view(&self, roi: &Roi) -> ArrayView3<'_, f32> {
        self.data.slice(s![
            roi.row..roi.row + roi.height,
            roi.col..roi.col + roi.width,
            ..
        ])
    }
}

/// Height/width pair, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub height: usize,
    pub width: usize,
}

impl Shape {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    pub fn validate(&self) -> Result<()> {
        if self.height == 0 || self.width == 0 {
            return Err(ViewportError::InvalidShape {
                height: self.height,
                width: self.width,
            });
        }
        Ok(())
    }

    /// `width / height`.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

impl std::str::FromStr for Shape {
    type Err = ViewportError;

    /// Parse `HEIGHTxWIDTH`, e.g. `540x960`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid =
            || ViewportError::InvalidArgument(format!("expected HEIGHTxWIDTH, got {s:?}"));
        let (h, w) = s
            .trim()
            .split_once(|c: char| c.eq_ignore_ascii_case(&'x'))
            .ok_or_else(invalid)?;
        let height = h.trim().parse().map_err(|_| invalid())?;
        let width = w.trim().parse().map_err(|_| invalid())?;
        let shape = Shape::new(height, width);
        shape.validate()?;
        Ok(shape)
    }
}
