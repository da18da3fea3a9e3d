#![allow(dead_code)]

use ndarray::Array3;

use handpan_core::config::ViewportConfig;
use handpan_core::frame::{Frame, Shape};
use handpan_core::ViewportController;

/// RGB frame whose red channel encodes the column, green the row and blue is constant.
pub fn make_gradient_frame(h: usize, w: usize) -> Frame {
    let data = Array3::from_shape_fn((h, w, 3), |(row, col, ch)| match ch {
        0 => col as f32 / w as f32,
        1 => row as f32 / h as f32,
        _ => 0.5,
    });
    Frame::new(data)
}

/// Single-channel frame filled with `value`.
pub fn make_gray_frame(h: usize, w: usize, value: f32) -> Frame {
    Frame::new(Array3::from_elem((h, w, 1), value))
}

/// Controller over an `h`x`w` gradient frame rendering at `out_h`x`out_w`.
pub fn make_controller(h: usize, w: usize, out_h: usize, out_w: usize) -> ViewportController {
    let config = ViewportConfig::with_output(Shape::new(out_h, out_w));
    ViewportController::new(make_gradient_frame(h, w), config).expect("valid controller")
}

/// Assert the ROI invariants against the controller's source bounds.
pub fn assert_roi_in_bounds(controller: &ViewportController) {
    let roi = controller.roi();
    let bounds = controller.source().shape();
    assert!(roi.fits_within(bounds), "{roi} escapes {bounds}");
    assert!(roi.height <= bounds.height && roi.width <= bounds.width);
}
