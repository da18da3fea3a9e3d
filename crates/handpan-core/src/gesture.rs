//! Gesture observations and the per-channel tracking state used to turn
//! them into relative pan/zoom adjustments.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewportError};

/// A classified gesture together with its continuous parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Gesture {
    /// Pointer position normalized to `[0, 1]` relative to the current ROI.
    Move { x: f64, y: f64 },
    /// Distance between two tracked points; must be positive.
    Zoom { distance: f64 },
    /// No recognizable gesture.
    None,
}

impl Gesture {
    pub fn label(&self) -> GestureLabel {
        match self {
            Gesture::Move { .. } => GestureLabel::Move,
            Gesture::Zoom { .. } => GestureLabel::Zoom,
            Gesture::None => GestureLabel::None,
        }
    }

    /// Check the parameters and normalize move coordinates.
    ///
    /// Move coordinates outside `[0, 1]` are clamped; non-finite values are rejected.
    /// Zoom distances must be finite and strictly positive.
    pub fn validated(self) -> Result<Gesture> {
        match self {
            Gesture::Move { x, y } => {
                if !x.is_finite() || !y.is_finite() {
                    return Err(ViewportError::InvalidArgument(format!(
                        "move point ({x}, {y}) is not finite"
                    )));
                }
                Ok(Gesture::Move {
                    x: x.clamp(0.0, 1.0),
                    y: y.clamp(0.0, 1.0),
                })
            }
            Gesture::Zoom { distance } => {
                if !distance.is_finite() || distance <= 0.0 {
                    return Err(ViewportError::InvalidArgument(format!(
                        "zoom distance must be a positive finite value, got {distance}"
                    )));
                }
                Ok(self)
            }
            Gesture::None => Ok(self),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureLabel {
    Move,
    Zoom,
    None,
}

impl std::fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GestureLabel::Move => write!(f, "Move"),
            GestureLabel::Zoom => write!(f, "Zoom"),
            GestureLabel::None => write!(f, "None"),
        }
    }
}

/// One classifier result for a single video frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(default = "default_hand_present")]
    pub hand_present: bool,
    pub gesture: Gesture,
}

fn default_hand_present() -> bool {
    true
}

impl Observation {
    pub fn new(gesture: Gesture) -> Self {
        Self {
            hand_present: true,
            gesture,
        }
    }

    pub fn no_hand() -> Self {
        Self {
            hand_present: false,
            gesture: Gesture::None,
        }
    }

    /// The gesture to act on; an absent hand always reads as `Gesture::None`.
    pub fn effective_gesture(&self) -> Gesture {
        if self.hand_present {
            self.gesture
        } else {
            Gesture::None
        }
    }
}

/// Baselines carried between observations.
///
/// Each channel is `Idle` while its field is `None` and `Tracking` once a
/// baseline has been recorded. At most one channel tracks at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureState {
    /// Previous move point, in ROI pixel coordinates `(x, y)`.
    pub last_move_anchor: Option<(i64, i64)>,
    /// Previous zoom distance.
    pub last_zoom_distance: Option<f64>,
}

impl GestureState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_idle(&self) -> bool {
        self.last_move_anchor.is_none() && self.last_zoom_distance.is_none()
    }

    /// Record a move point and return the `(dx, dy)` pan relative to the previous one.
    ///
    /// The first point of a gesture only sets the baseline and yields `None`.
    /// `dy` is inverted: a point moving down pans the view up.
    pub fn track_move(&mut self, xc: i64, yc: i64) -> Option<(i64, i64)> {
        self.last_zoom_distance = None;
        let delta = self
            .last_move_anchor
            .map(|(ax, ay)| (xc - ax, ay - yc));
        self.last_move_anchor = Some((xc, yc));
        delta
    }

    /// Record a zoom distance and return the scale factor relative to the previous one.
    ///
    /// Points spreading apart give a factor below 1 (zoom in).
    pub fn track_zoom(&mut self, distance: f64) -> Option<f64> {
        self.last_move_anchor = None;
        let factor = self
            .last_zoom_distance
            .filter(|&previous| previous != 0.0)
            .map(|previous| previous / distance);
        self.last_zoom_distance = Some(distance);
        factor
    }
}

/// Manual navigation command.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Command {
    /// Pan by a pixel offset in source coordinates.
    Move { dx: i64, dy: i64 },
    /// Scale the ROI; below 1 zooms in.
    Zoom { factor: f64 },
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Move { dx, dy } => write!(f, "Move ({dx}, {dy})"),
            Command::Zoom { factor } => write!(f, "Zoom x{factor}"),
        }
    }
}
