mod common;

use common::{assert_roi_in_bounds, make_controller};
use handpan_core::error::ViewportError;
use handpan_core::gesture::{Gesture, GestureLabel, GestureState, Observation};
use handpan_core::roi::Roi;
use handpan_core::ViewportController;

/// 540x960 controller zoomed to the centred 270x480 ROI so it has room to pan.
fn zoomed_controller() -> ViewportController {
    let mut c = make_controller(540, 960, 540, 960);
    c.zoom(0.5).unwrap();
    assert_eq!(c.roi(), Roi::new(135, 240, 270, 480));
    c
}

// ---------------------------------------------------------------------------
// Move gestures
// ---------------------------------------------------------------------------

#[test]
fn test_first_move_only_anchors() {
    let mut c = zoomed_controller();
    c.apply_gesture(Gesture::Move { x: 0.5, y: 0.5 }).unwrap();
    assert_eq!(c.roi(), Roi::new(135, 240, 270, 480));
    assert_eq!(c.gesture_state().last_move_anchor, Some((240, 135)));
}

#[test]
fn test_second_move_applies_anchor_delta() {
    let mut c = zoomed_controller();
    c.apply_gesture(Gesture::Move { x: 0.5, y: 0.5 }).unwrap();
    // xc = 120, yc = 135: dx = 120 - 240, dy = 135 - 135
    c.apply_gesture(Gesture::Move { x: 0.25, y: 0.5 }).unwrap();
    assert_eq!(c.roi(), Roi::new(135, 120, 270, 480));
    assert_eq!(c.gesture_state().last_move_anchor, Some((120, 135)));
}

#[test]
fn test_move_vertical_axis_is_inverted() {
    let mut c = zoomed_controller();
    c.apply_gesture(Gesture::Move { x: 0.5, y: 0.5 }).unwrap();
    // Point moves down by 27 px: the view pans up by 27 px.
    c.apply_gesture(Gesture::Move { x: 0.5, y: 0.6 }).unwrap();
    assert_eq!(c.roi(), Roi::new(108, 240, 270, 480));
}

#[test]
fn test_move_gesture_saturates() {
    let mut c = zoomed_controller();
    c.apply_gesture(Gesture::Move { x: 0.0, y: 1.0 }).unwrap();
    for _ in 0..10 {
        c.apply_gesture(Gesture::Move { x: 1.0, y: 0.0 }).unwrap();
        c.apply_gesture(Gesture::Move { x: 0.0, y: 1.0 }).unwrap();
        assert_roi_in_bounds(&c);
    }
}

#[test]
fn test_move_coordinates_are_clamped() {
    let mut c = zoomed_controller();
    c.apply_gesture(Gesture::Move { x: 1.7, y: -0.2 }).unwrap();
    assert_eq!(c.gesture_state().last_move_anchor, Some((480, 0)));
}

#[test]
fn test_move_rejects_non_finite_point() {
    let mut c = zoomed_controller();
    c.apply_gesture(Gesture::Move { x: 0.5, y: 0.5 }).unwrap();
    let err = c.apply_gesture(Gesture::Move { x: f64::NAN, y: 0.5 }).unwrap_err();
    assert!(matches!(err, ViewportError::InvalidArgument(_)));
    assert_eq!(c.gesture_state().last_move_anchor, Some((240, 135)));
    assert_eq!(c.roi(), Roi::new(135, 240, 270, 480));
}

// ---------------------------------------------------------------------------
// Zoom gestures
// ---------------------------------------------------------------------------

#[test]
fn test_first_zoom_only_anchors() {
    let mut c = make_controller(540, 960, 540, 960);
    c.apply_gesture(Gesture::Zoom { distance: 0.1 }).unwrap();
    assert_eq!(c.roi(), Roi::new(0, 0, 540, 960));
    assert_eq!(c.gesture_state().last_zoom_distance, Some(0.1));
}

#[test]
fn test_spreading_points_zoom_in() {
    let mut c = make_controller(540, 960, 540, 960);
    c.apply_gesture(Gesture::Zoom { distance: 0.1 }).unwrap();
    c.apply_gesture(Gesture::Zoom { distance: 0.2 }).unwrap();
    assert_eq!(c.roi(), Roi::new(135, 240, 270, 480));
    c.apply_gesture(Gesture::Zoom { distance: 0.1 }).unwrap();
    assert_eq!(c.roi(), Roi::new(0, 0, 540, 960));
}

#[test]
fn test_zoom_rejects_non_positive_distance() {
    let mut c = make_controller(540, 960, 540, 960);
    c.apply_gesture(Gesture::Zoom { distance: 0.2 }).unwrap();
    for distance in [0.0, -0.3, f64::INFINITY] {
        let err = c.apply_gesture(Gesture::Zoom { distance }).unwrap_err();
        assert!(matches!(err, ViewportError::InvalidArgument(_)));
    }
    assert_eq!(c.gesture_state().last_zoom_distance, Some(0.2));
}

#[test]
fn test_rejected_zoom_keeps_baseline() {
    let mut c = make_controller(540, 960, 540, 960);
    c.apply_gesture(Gesture::Zoom { distance: 1e300 }).unwrap();
    // The ratio overflows to infinity, which zoom refuses.
    assert!(c.apply_gesture(Gesture::Zoom { distance: 1e-300 }).is_err());
    assert_eq!(c.gesture_state().last_zoom_distance, Some(1e300));
    assert_eq!(c.roi(), Roi::new(0, 0, 540, 960));
}

// ---------------------------------------------------------------------------
// Channel switching and interruption
// ---------------------------------------------------------------------------

#[test]
fn test_zoom_clears_move_anchor() {
    let mut c = zoomed_controller();
    c.apply_gesture(Gesture::Move { x: 0.5, y: 0.5 }).unwrap();
    c.apply_gesture(Gesture::Zoom { distance: 0.3 }).unwrap();
    assert_eq!(c.gesture_state().last_move_anchor, None);
    assert_eq!(c.roi(), Roi::new(135, 240, 270, 480));
}

#[test]
fn test_move_clears_zoom_distance() {
    let mut c = make_controller(540, 960, 540, 960);
    c.apply_gesture(Gesture::Zoom { distance: 0.3 }).unwrap();
    c.apply_gesture(Gesture::Move { x: 0.2, y: 0.2 }).unwrap();
    assert_eq!(c.gesture_state().last_zoom_distance, None);
    // Back to zoom: a fresh baseline, no scaling yet.
    c.apply_gesture(Gesture::Zoom { distance: 0.6 }).unwrap();
    assert_eq!(c.roi(), Roi::new(0, 0, 540, 960));
}

#[test]
fn test_none_then_move_reanchors() {
    let mut c = zoomed_controller();
    c.apply_gesture(Gesture::Move { x: 0.1, y: 0.1 }).unwrap();
    c.apply_gesture(Gesture::None).unwrap();
    assert!(c.gesture_state().is_idle());
    c.apply_gesture(Gesture::Move { x: 0.9, y: 0.9 }).unwrap();
    assert_eq!(c.roi(), Roi::new(135, 240, 270, 480));
}

#[test]
fn test_absent_hand_interrupts_gesture() {
    let mut c = zoomed_controller();
    c.observe(&Observation::new(Gesture::Move { x: 0.1, y: 0.1 }))
        .unwrap();
    // A stale label from the classifier is ignored when no hand is present.
    c.observe(&Observation {
        hand_present: false,
        gesture: Gesture::Move { x: 0.9, y: 0.9 },
    })
    .unwrap();
    assert!(c.gesture_state().is_idle());
    assert_eq!(c.roi(), Roi::new(135, 240, 270, 480));
    c.observe(&Observation::no_hand()).unwrap();
    assert!(c.gesture_state().is_idle());
}

// ---------------------------------------------------------------------------
// GestureState
// ---------------------------------------------------------------------------

#[test]
fn test_track_move_deltas() {
    let mut state = GestureState::default();
    assert_eq!(state.track_move(10, 20), None);
    assert_eq!(state.track_move(15, 5), Some((5, 15)));
    assert_eq!(state.last_move_anchor, Some((15, 5)));
}

#[test]
fn test_track_zoom_ratio() {
    let mut state = GestureState::default();
    assert_eq!(state.track_zoom(0.4), None);
    let factor = state.track_zoom(0.8).unwrap();
    assert!((factor - 0.5).abs() < 1e-12);
}

#[test]
fn test_gesture_labels() {
    assert_eq!(Gesture::Move { x: 0.0, y: 0.0 }.label(), GestureLabel::Move);
    assert_eq!(Gesture::Zoom { distance: 1.0 }.label(), GestureLabel::Zoom);
    assert_eq!(Gesture::None.label().to_string(), "None");
}

#[test]
fn test_absent_hand_reads_as_none_label() {
    let observation = Observation {
        hand_present: false,
        gesture: Gesture::Zoom { distance: 0.4 },
    };
    assert_eq!(observation.effective_gesture().label(), GestureLabel::None);
    assert_eq!(
        Observation::new(Gesture::Zoom { distance: 0.4 })
            .effective_gesture()
            .label(),
        GestureLabel::Zoom
    );
}
