//! Conversion of image buffers to display-ready RGB pixmaps.
//!
//! Single-channel data is autoscaled from its own sample range into [0, 1]
//! and pushed through the configured colormap. Color data keeps its native
//! channel interpretation; RGBA is composited over the white figure
//! background.

use crate::display_pipeline::colormap::ColorMap;
use crate::display_pipeline::image::types::{CellPixmap, ImageData, PixelBuffer};

/// Background intensity the figure canvas is cleared to.
const BACKGROUND: u8 = 255;

/// Convert one image into the RGB8 raster its grid cell will display.
///
/// `cmap` applies only to single-channel buffers; color buffers ignore it.
pub fn to_pixmap(image: &ImageData, cmap: ColorMap) -> CellPixmap {
    let width = image.width();
    let height = image.height();

    let data = match image.buffer() {
        PixelBuffer::Gray8(samples) => {
            colormapped(&normalize(samples.iter().map(|&v| v as f32)), cmap)
        }
        PixelBuffer::Gray16(samples) => {
            colormapped(&normalize(samples.iter().map(|&v| v as f32)), cmap)
        }
        PixelBuffer::GrayF32(samples) => colormapped(&normalize(samples.iter().copied()), cmap),
        PixelBuffer::Rgb8(samples) => samples.clone(),
        PixelBuffer::Rgba8(samples) => alpha_over_background(samples),
    };

    CellPixmap {
        width,
        height,
        data,
    }
}

/// Autoscale samples from their own [min, max] range into [0, 1].
///
/// A constant image maps everywhere to 0, as do non-finite samples.
fn normalize(samples: impl Iterator<Item = f32>) -> Vec<f32> {
    let values: Vec<f32> = samples
        .map(|v| if v.is_finite() { v } else { f32::NAN })
        .collect();

    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in &values {
        if v.is_nan() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }

    let range = max - min;
    if !range.is_finite() || range <= 0.0 {
        return vec![0.0; values.len()];
    }

    values
        .into_iter()
        .map(|v| if v.is_nan() { 0.0 } else { (v - min) / range })
        .collect()
}

fn colormapped(normalized: &[f32], cmap: ColorMap) -> Vec<u8> {
    let mut out = Vec::with_capacity(normalized.len() * 3);
    for &t in normalized {
        out.extend_from_slice(&cmap.sample(t));
    }
    out
}

fn alpha_over_background(samples: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(samples.len() / 4 * 3);
    for px in samples.chunks_exact(4) {
        let a = px[3] as u16;
        for &c in &px[..3] {
            let blended = (c as u16 * a + BACKGROUND as u16 * (255 - a)) / 255;
            out.push(blended as u8);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_autoscale_spans_full_map() {
        // Samples 10 and 20 scale to t = 0 and t = 1 regardless of depth
        let image = ImageData::gray8(2, 1, vec![10, 20]).unwrap();
        let pixmap = to_pixmap(&image, ColorMap::Gray);
        assert_eq!(pixmap.pixel(0, 0), [0, 0, 0]);
        assert_eq!(pixmap.pixel(1, 0), [255, 255, 255]);
    }

    #[test]
    fn test_constant_image_maps_to_bottom_anchor() {
        let image = ImageData::gray16(2, 2, vec![700; 4]).unwrap();
        let pixmap = to_pixmap(&image, ColorMap::Viridis);
        let bottom = ColorMap::Viridis.sample(0.0);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(pixmap.pixel(x, y), bottom);
            }
        }
    }

    #[test]
    fn test_non_finite_samples_map_to_zero() {
        let image = ImageData::gray_f32(3, 1, vec![f32::NAN, 0.0, 2.0]).unwrap();
        let pixmap = to_pixmap(&image, ColorMap::Gray);
        assert_eq!(pixmap.pixel(0, 0), [0, 0, 0]);
        assert_eq!(pixmap.pixel(1, 0), [0, 0, 0]);
        assert_eq!(pixmap.pixel(2, 0), [255, 255, 255]);
    }

    #[test]
    fn test_rgb_passthrough_ignores_colormap() {
        let image = ImageData::rgb8(1, 1, vec![12, 34, 56]).unwrap();
        let a = to_pixmap(&image, ColorMap::Gray);
        let b = to_pixmap(&image, ColorMap::Plasma);
        assert_eq!(a.pixel(0, 0), [12, 34, 56]);
        assert_eq!(b.pixel(0, 0), [12, 34, 56]);
    }

    #[test]
    fn test_rgba_composites_over_white() {
        // Fully transparent pixel disappears into the background
        let image = ImageData::rgba8(2, 1, vec![200, 0, 0, 255, 0, 0, 0, 0]).unwrap();
        let pixmap = to_pixmap(&image, ColorMap::Gray);
        assert_eq!(pixmap.pixel(0, 0), [200, 0, 0]);
        assert_eq!(pixmap.pixel(1, 0), [255, 255, 255]);
    }
}
