//! The viewport controller: owns the ROI over a source image and turns
//! gesture observations into relative pan/zoom adjustments.
//!
//! All mutation goes through `&mut self`; callers driving the controller
//! from several threads must serialize access themselves.

use tracing::{debug, info};

use crate::config::ViewportConfig;
use crate::error::{Result, ViewportError};
use crate::frame::{Frame, Shape};
use crate::gesture::{Command, Gesture, GestureState, Observation};
use crate::overlay::draw_roi_outline;
use crate::resample::{crop_and_resize, resize_frame};
use crate::roi::{shift_clamped, Roi};

#[derive(Debug)]
pub struct ViewportController {
    source: Frame,
    config: ViewportConfig,
    aspect_ratio: f64,
    roi: Roi,
    gestures: GestureState,
    viewport: Frame,
}

impl ViewportController {
    /// Create a controller showing the full-height, top-left-anchored view of `source`.
    pub fn new(source: Frame, config: ViewportConfig) -> Result<Self> {
        config.validate()?;
        source.validate()?;

        let aspect_ratio = config.output.aspect_ratio();
        let roi = initial_roi(source.shape(), aspect_ratio);
        let viewport = crop_and_resize(&source, &roi, config.output)?;

        info!(
            source = %source.shape(),
            output = %config.output,
            aspect_ratio,
            "Viewport controller initialized"
        );

        Ok(Self {
            source,
            config,
            aspect_ratio,
            roi,
            gestures: GestureState::default(),
            viewport,
        })
    }

    pub fn roi(&self) -> Roi {
        self.roi
    }

    pub fn gesture_state(&self) -> &GestureState {
        &self.gestures
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn source(&self) -> &Frame {
        &self.source
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn output_shape(&self) -> Shape {
        self.config.output
    }

    /// The viewport buffer as of the last ROI change.
    pub fn viewport(&self) -> &Frame {
        &self.viewport
    }

    /// Restore the initial full-frame ROI and forget any gesture baseline.
    pub fn reset(&mut self) -> Result<()> {
        let roi = initial_roi(self.source.shape(), self.aspect_ratio);
        self.viewport = crop_and_resize(&self.source, &roi, self.config.output)?;
        self.roi = roi;
        self.gestures.clear();
        info!(roi = %self.roi, "Viewport reset");
        Ok(())
    }

    /// Swap in a new source image and reset the view onto it.
    pub fn replace_source(&mut self, source: Frame) -> Result<()> {
        source.validate()?;
        let roi = initial_roi(source.shape(), self.aspect_ratio);
        self.viewport = crop_and_resize(&source, &roi, self.config.output)?;
        self.source = source;
        self.roi = roi;
        self.gestures.clear();
        info!(source = %self.source.shape(), "Source image replaced");
        Ok(())
    }

    /// Pan by `(dx, dy)` source pixels, saturating at the image edges.
    pub fn move_by(&mut self, dx: i64, dy: i64) -> Result<()> {
        let bounds = self.source.shape();
        let mut roi = self.roi;
        roi.row = shift_clamped(roi.row, dy, bounds.height - roi.height);
        roi.col = shift_clamped(roi.col, dx, bounds.width - roi.width);
        self.commit(roi)
    }

    /// Scale the ROI about its centre. `factor < 1` zooms in, `factor > 1` zooms out.
    pub fn zoom(&mut self, factor: f64) -> Result<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ViewportError::InvalidArgument(format!(
                "zoom factor must be a positive finite value, got {factor}"
            )));
        }

        let bounds = self.source.shape();
        let max_height = self.max_height();
        let min_height = self.config.min_height.min(max_height);

        let scaled = (self.roi.height as f64 * factor).round();
        let new_height = (scaled as usize).clamp(min_height, max_height);
        let new_width = self.width_for(new_height);

        let dy = (self.roi.height as i64 - new_height as i64).div_euclid(2);
        let dx = (self.roi.width as i64 - new_width as i64).div_euclid(2);

        let roi = Roi {
            row: shift_clamped(self.roi.row, dy, bounds.height - new_height),
            col: shift_clamped(self.roi.col, dx, bounds.width - new_width),
            height: new_height,
            width: new_width,
        };
        self.commit(roi)
    }

    /// Run a manual navigation command. Gesture baselines are left alone.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        debug!(%command, "Executing command");
        match command {
            Command::Move { dx, dy } => self.move_by(dx, dy),
            Command::Zoom { factor } => self.zoom(factor),
        }
    }

    /// Feed one classifier result.
    pub fn observe(&mut self, observation: &Observation) -> Result<()> {
        self.apply_gesture(observation.effective_gesture())
    }

    /// Translate one gesture observation into a relative adjustment.
    ///
    /// The first observation of a gesture only records its baseline. On error
    /// neither the ROI nor the gesture baselines change.
    pub fn apply_gesture(&mut self, gesture: Gesture) -> Result<()> {
        let gesture = gesture.validated()?;
        let mut gestures = self.gestures;

        match gesture {
            Gesture::Move { x, y } => {
                let xc = (x * self.roi.width as f64).round() as i64;
                let yc = (y * self.roi.height as f64).round() as i64;
                match gestures.track_move(xc, yc) {
                    Some((dx, dy)) => {
                        debug!(dx, dy, "Move gesture");
                        self.move_by(dx, dy)?;
                    }
                    None => debug!(xc, yc, "Move gesture anchored"),
                }
            }
            Gesture::Zoom { distance } => match gestures.track_zoom(distance) {
                Some(factor) => {
                    debug!(factor, "Zoom gesture");
                    self.zoom(factor)?;
                }
                None => debug!(distance, "Zoom gesture anchored"),
            },
            Gesture::None => {
                if !gestures.is_idle() {
                    debug!("Gesture interrupted");
                }
                gestures.clear();
            }
        }

        self.gestures = gestures;
        Ok(())
    }

    /// Crop the source to the current ROI and resample it to the output shape.
    pub fn render_viewport(&self) -> Result<Frame> {
        crop_and_resize(&self.source, &self.roi, self.config.output)
    }

    /// Copy of the source with the ROI outline drawn, resampled to `display`.
    pub fn render_overview(&self, display: Shape) -> Result<Frame> {
        display.validate()?;
        let mut annotated = self.source.clone();
        draw_roi_outline(&mut annotated, &self.roi, &self.config.overlay);
        resize_frame(&annotated, display)
    }

    /// Tallest ROI whose aspect-derived width still fits in the source.
    fn max_height(&self) -> usize {
        let bounds = self.source.shape();
        let mut fitted = ((bounds.width as f64 + 0.5) / self.aspect_ratio).floor() as usize;
        while fitted > 1 && aspect_width(fitted, self.aspect_ratio) > bounds.width {
            fitted -= 1;
        }
        bounds.height.min(fitted).max(1)
    }

    fn width_for(&self, height: usize) -> usize {
        aspect_width(height, self.aspect_ratio).clamp(1, self.source.width())
    }

    fn commit(&mut self, roi: Roi) -> Result<()> {
        if roi == self.roi {
            return Ok(());
        }
        self.viewport = crop_and_resize(&self.source, &roi, self.config.output)?;
        self.roi = roi;
        Ok(())
    }
}

fn aspect_width(height: usize, aspect_ratio: f64) -> usize {
    (height as f64 * aspect_ratio).round() as usize
}

/// Full source height, width derived from the aspect ratio and capped at the source width.
fn initial_roi(bounds: Shape, aspect_ratio: f64) -> Roi {
    let width = aspect_width(bounds.height, aspect_ratio).clamp(1, bounds.width);
    Roi::new(0, 0, bounds.height, width)
}
