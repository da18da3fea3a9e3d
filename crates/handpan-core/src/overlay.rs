use ndarray::s;

use crate::config::OverlayStyle;
use crate::frame::Frame;
use crate::roi::Roi;

/// Draw the outline of `roi` onto `frame` in place.
///
/// The stroke is centred on the ROI border, so half of it falls outside the
/// rectangle; anything past the frame edge is clipped.
pub fn draw_roi_outline(frame: &mut Frame, roi: &Roi, style: &OverlayStyle) {
    if style.thickness == 0 || roi.height == 0 || roi.width == 0 {
        return;
    }
    let (h, w) = (frame.height(), frame.width());
    let color = channel_values(frame.channels(), style.color);

    let half = style.thickness / 2;
    // Outer bounds of the stroke, clipped to the frame.
    let top = roi.row.saturating_sub(half);
    let left = roi.col.saturating_sub(half);
    let bottom = (roi.bottom() + style.thickness - half).min(h);
    let right = (roi.right() + style.thickness - half).min(w);
    // Inner hole left untouched.
    let inner_top = (roi.row + style.thickness - half).min(bottom);
    let inner_left = (roi.col + style.thickness - half).min(right);
    let inner_bottom = roi.bottom().saturating_sub(half).max(inner_top);
    let inner_right = roi.right().saturating_sub(half).max(inner_left);

    let bands = [
        (top, inner_top, left, right),
        (inner_bottom, bottom, left, right),
        (inner_top, inner_bottom, left, inner_left),
        (inner_top, inner_bottom, inner_right, right),
    ];

    for (r0, r1, c0, c1) in bands {
        if r0 >= r1 || c0 >= c1 {
            continue;
        }
        let mut band = frame.data.slice_mut(s![r0..r1, c0..c1, ..]);
        for (ch, &value) in color.iter().enumerate() {
            band.slice_mut(s![.., .., ch]).fill(value);
        }
    }
}

fn channel_values(channels: usize, rgb: [f32; 3]) -> Vec<f32> {
    if channels == rgb.len() {
        rgb.to_vec()
    } else {
        let mean = rgb.iter().sum::<f32>() / rgb.len() as f32;
        vec![mean; channels]
    }
}
