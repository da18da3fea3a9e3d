use std::path::Path;

use image::{DynamicImage, ImageBuffer, ImageFormat, Luma, Rgb};
use ndarray::Array3;

use crate::error::Result;
use crate::frame::Frame;

/// Load an image file as an RGB frame.
pub fn load_image(path: &Path) -> Result<Frame> {
    let img = image::open(path)?;
    Ok(frame_from_dynamic(&img, false))
}

/// Load an image file as a single-channel grayscale frame.
pub fn load_gray(path: &Path) -> Result<Frame> {
    let img = image::open(path)?;
    Ok(frame_from_dynamic(&img, true))
}

/// Convert a decoded image into a frame, normalizing samples to [0.0, 1.0].
pub fn frame_from_dynamic(img: &DynamicImage, gray: bool) -> Frame {
    if gray {
        let luma = img.to_luma16();
        let (w, h) = luma.dimensions();
        let data = Array3::from_shape_fn((h as usize, w as usize, 1), |(row, col, _)| {
            luma.get_pixel(col as u32, row as u32).0[0] as f32 / 65535.0
        });
        Frame::new(data)
    } else {
        let rgb = img.to_rgb16();
        let (w, h) = rgb.dimensions();
        let data = Array3::from_shape_fn((h as usize, w as usize, 3), |(row, col, ch)| {
            rgb.get_pixel(col as u32, row as u32).0[ch] as f32 / 65535.0
        });
        Frame::new(data)
    }
}

/// Convert a frame into an 8-bit image (grayscale for one channel, RGB otherwise).
pub fn frame_to_dynamic(frame: &Frame) -> DynamicImage {
    let (h, w) = (frame.height(), frame.width());
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;

    if frame.is_color() {
        DynamicImage::ImageRgb8(ImageBuffer::from_fn(w as u32, h as u32, |x, y| {
            let (row, col) = (y as usize, x as usize);
            Rgb([
                to_u8(frame.data[[row, col, 0]]),
                to_u8(frame.data[[row, col, 1]]),
                to_u8(frame.data[[row, col, 2]]),
            ])
        }))
    } else {
        DynamicImage::ImageLuma8(ImageBuffer::from_fn(w as u32, h as u32, |x, y| {
            Luma([to_u8(frame.data[[y as usize, x as usize, 0]])])
        }))
    }
}

/// Save a frame as 8-bit PNG.
pub fn save_png(frame: &Frame, path: &Path) -> Result<()> {
    frame_to_dynamic(frame).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a frame as 16-bit TIFF.
pub fn save_tiff(frame: &Frame, path: &Path) -> Result<()> {
    let (h, w) = (frame.height(), frame.width());
    let to_u16 = |v: f32| (v.clamp(0.0, 1.0) * 65535.0).round() as u16;

    if frame.is_color() {
        let img = ImageBuffer::<Rgb<u16>, Vec<u16>>::from_fn(w as u32, h as u32, |x, y| {
            let (row, col) = (y as usize, x as usize);
            Rgb([
                to_u16(frame.data[[row, col, 0]]),
                to_u16(frame.data[[row, col, 1]]),
                to_u16(frame.data[[row, col, 2]]),
            ])
        });
        img.save_with_format(path, ImageFormat::Tiff)?;
    } else {
        let img = ImageBuffer::<Luma<u16>, Vec<u16>>::from_fn(w as u32, h as u32, |x, y| {
            Luma([to_u16(frame.data[[y as usize, x as usize, 0]])])
        });
        img.save_with_format(path, ImageFormat::Tiff)?;
    }
    Ok(())
}

/// Save frame, choosing format from file extension.
pub fn save_image(frame: &Frame, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tiff" | "tif") => save_tiff(frame, path),
        Some("png") => save_png(frame, path),
        _ => save_png(frame, path),
    }
}
