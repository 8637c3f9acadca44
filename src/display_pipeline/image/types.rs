//! Image buffer types

use crate::display_pipeline::common::error::{DisplayError, Result};

/// Sample storage for one image, either single-channel intensity data
/// or interleaved color data.
#[derive(Debug, Clone)]
pub enum PixelBuffer {
    /// 8-bit intensity samples
    Gray8(Vec<u8>),
    /// 16-bit intensity samples
    Gray16(Vec<u16>),
    /// Float intensity samples (any range, autoscaled at display time)
    GrayF32(Vec<f32>),
    /// Interleaved 8-bit RGB samples [R, G, B, R, G, B, ...]
    Rgb8(Vec<u8>),
    /// Interleaved 8-bit RGBA samples
    Rgba8(Vec<u8>),
}

impl PixelBuffer {
    /// Number of interleaved channels per pixel.
    pub fn channels(&self) -> usize {
        match self {
            PixelBuffer::Gray8(_) | PixelBuffer::Gray16(_) | PixelBuffer::GrayF32(_) => 1,
            PixelBuffer::Rgb8(_) => 3,
            PixelBuffer::Rgba8(_) => 4,
        }
    }

    fn len(&self) -> usize {
        match self {
            PixelBuffer::Gray8(data) => data.len(),
            PixelBuffer::Gray16(data) => data.len(),
            PixelBuffer::GrayF32(data) => data.len(),
            PixelBuffer::Rgb8(data) => data.len(),
            PixelBuffer::Rgba8(data) => data.len(),
        }
    }
}

/// An owned, immutable image handed to the renderer.
///
/// Constructors validate that the sample buffer matches the stated
/// dimensions; the renderer only ever reads the buffer.
#[derive(Debug, Clone)]
pub struct ImageData {
    width: usize,
    height: usize,
    buffer: PixelBuffer,
}

impl ImageData {
    pub fn new(width: usize, height: usize, buffer: PixelBuffer) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(DisplayError::InvalidDimensions(width, height));
        }
        let expected = width * height * buffer.channels();
        let actual = buffer.len();
        if actual != expected {
            return Err(DisplayError::BufferSizeMismatch { expected, actual });
        }
        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    pub fn gray8(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, PixelBuffer::Gray8(data))
    }

    pub fn gray16(width: usize, height: usize, data: Vec<u16>) -> Result<Self> {
        Self::new(width, height, PixelBuffer::Gray16(data))
    }

    pub fn gray_f32(width: usize, height: usize, data: Vec<f32>) -> Result<Self> {
        Self::new(width, height, PixelBuffer::GrayF32(data))
    }

    pub fn rgb8(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, PixelBuffer::Rgb8(data))
    }

    pub fn rgba8(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, PixelBuffer::Rgba8(data))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Whether this is 2-D intensity data (colormap applies) rather than
    /// 3-D color data (native channel interpretation).
    pub fn is_single_channel(&self) -> bool {
        self.buffer.channels() == 1
    }
}

/// A display-ready interleaved RGB8 raster derived from one [`ImageData`].
#[derive(Debug, Clone)]
pub struct CellPixmap {
    pub width: usize,
    pub height: usize,
    /// Interleaved RGB samples, length = width * height * 3
    pub data: Vec<u8>,
}

impl CellPixmap {
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let idx = (y * self.width + x) * 3;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_validates_buffer_length() {
        let result = ImageData::gray8(10, 10, vec![0u8; 99]);
        assert!(matches!(
            result.unwrap_err(),
            DisplayError::BufferSizeMismatch {
                expected: 100,
                actual: 99
            }
        ));

        let result = ImageData::rgb8(4, 4, vec![0u8; 4 * 4 * 3]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_constructor_rejects_zero_dimensions() {
        let result = ImageData::gray8(0, 10, vec![]);
        assert!(matches!(
            result.unwrap_err(),
            DisplayError::InvalidDimensions(0, 10)
        ));
    }

    #[test]
    fn test_channel_classification() {
        let gray = ImageData::gray16(2, 2, vec![0u16; 4]).unwrap();
        assert!(gray.is_single_channel());

        let rgba = ImageData::rgba8(2, 2, vec![0u8; 16]).unwrap();
        assert!(!rgba.is_single_channel());
        assert_eq!(rgba.buffer().channels(), 4);
    }
}
