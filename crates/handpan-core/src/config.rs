use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_MIN_HEIGHT, DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH, DEFAULT_OVERLAY_COLOR,
    DEFAULT_OVERLAY_THICKNESS,
};
use crate::error::{Result, ViewportError};
use crate::frame::Shape;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Resolution of the rendered viewport. Its width/height ratio fixes the ROI aspect ratio.
    #[serde(default = "default_output")]
    pub output: Shape,
    /// Smallest ROI height reachable by zooming in.
    #[serde(default = "default_min_height")]
    pub min_height: usize,
    #[serde(default)]
    pub overlay: OverlayStyle,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            min_height: DEFAULT_MIN_HEIGHT,
            overlay: OverlayStyle::default(),
        }
    }
}

impl ViewportConfig {
    pub fn with_output(output: Shape) -> Self {
        Self {
            output,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.output.validate()?;
        if self.min_height == 0 {
            return Err(ViewportError::InvalidArgument(
                "min_height must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

fn default_output() -> Shape {
    Shape::new(DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH)
}

fn default_min_height() -> usize {
    DEFAULT_MIN_HEIGHT
}

/// How the ROI outline is drawn on the overview.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyle {
    /// Line thickness in source pixels.
    pub thickness: usize,
    /// RGB colour in [0.0, 1.0]. Grayscale frames use the channel mean.
    pub color: [f32; 3],
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            thickness: DEFAULT_OVERLAY_THICKNESS,
            color: DEFAULT_OVERLAY_COLOR,
        }
    }
}
