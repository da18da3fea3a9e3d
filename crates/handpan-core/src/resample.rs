use ndarray::parallel::prelude::*;
use ndarray::{Array3, ArrayView3, ArrayViewMut2, Axis};

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::Result;
use crate::frame::{Frame, Shape};
use crate::roi::Roi;

/// Source sample positions and blend weight for one output coordinate.
#[derive(Clone, Copy, Debug)]
struct Tap {
    lo: usize,
    hi: usize,
    frac: f32,
}

/// Map each output index onto the source axis using pixel-centre alignment,
/// replicating the border.
fn taps(src_len: usize, dst_len: usize) -> Vec<Tap> {
    let scale = src_len as f64 / dst_len as f64;
    let last = src_len - 1;
    (0..dst_len)
        .map(|i| {
            let pos = ((i as f64 + 0.5) * scale - 0.5).clamp(0.0, last as f64);
            let lo = pos.floor() as usize;
            Tap {
                lo,
                hi: (lo + 1).min(last),
                frac: (pos - lo as f64) as f32,
            }
        })
        .collect()
}

/// Bilinear resize of an image view to `shape`, keeping the channel count.
pub fn resize_bilinear(src: ArrayView3<'_, f32>, shape: Shape) -> Result<Array3<f32>> {
    shape.validate()?;
    let (h, w, channels) = src.dim();
    Shape::new(h, w).validate()?;

    let row_taps = taps(h, shape.height);
    let col_taps = taps(w, shape.width);
    let mut result = Array3::<f32>::zeros((shape.height, shape.width, channels));

    let fill_row = |row: usize, mut out: ArrayViewMut2<f32>| {
        let ry = row_taps[row];
        for (col, cx) in col_taps.iter().enumerate() {
            for ch in 0..channels {
                let v00 = src[[ry.lo, cx.lo, ch]];
                let v01 = src[[ry.lo, cx.hi, ch]];
                let v10 = src[[ry.hi, cx.lo, ch]];
                let v11 = src[[ry.hi, cx.hi, ch]];
                let top = v00 + (v01 - v00) * cx.frac;
                let bottom = v10 + (v11 - v10) * cx.frac;
                out[[col, ch]] = top + (bottom - top) * ry.frac;
            }
        }
    };

    if shape.height * shape.width >= PARALLEL_PIXEL_THRESHOLD {
        result
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, out)| fill_row(row, out));
    } else {
        for (row, out) in result.axis_iter_mut(Axis(0)).enumerate() {
            fill_row(row, out);
        }
    }

    Ok(result)
}

/// Resize a whole frame.
pub fn resize_frame(frame: &Frame, shape: Shape) -> Result<Frame> {
    Ok(Frame::new(resize_bilinear(frame.data.view(), shape)?))
}

/// Crop `frame` to `roi` and resize the crop to `shape`.
pub fn crop_and_resize(frame: &Frame, roi: &Roi, shape: Shape) -> Result<Frame> {
    Ok(Frame::new(resize_bilinear(frame.crop_view(roi), shape)?))
}
