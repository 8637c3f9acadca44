//! Composed figure raster and export

use std::io::Cursor;
use std::path::Path;

use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};
use tracing::debug;

use crate::display_pipeline::common::error::{DisplayError, Result};
use crate::display_pipeline::surface::types::TiffCompression;

/// The composed white-background RGB8 raster of the whole grid.
#[derive(Debug, Clone)]
pub struct FigureImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FigureImage {
    /// Allocate a figure cleared to the white background.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![255u8; width as usize * height as usize * 3],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Interleaved RGB samples, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    pub(crate) fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        self.data[idx..idx + 3].copy_from_slice(&rgb);
    }

    /// Encode the figure as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        debug!("Encoding PNG figure: {}x{}", self.width, self.height);

        let mut buffer = Vec::new();
        PngEncoder::new(&mut buffer)
            .write_image(&self.data, self.width, self.height, ExtendedColorType::Rgb8)
            .map_err(|e| DisplayError::EncodeError(e.to_string()))?;

        Ok(buffer)
    }

    /// Encode the figure as TIFF bytes with the given compression.
    pub fn encode_tiff(&self, compression: TiffCompression) -> Result<Vec<u8>> {
        debug!("Encoding TIFF figure: {}x{}", self.width, self.height);

        let compression = match compression {
            TiffCompression::None => tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
            TiffCompression::DeflateFast => {
                tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Fast)
            }
            TiffCompression::DeflateBalanced => tiff::encoder::Compression::Deflate(
                tiff::encoder::compression::DeflateLevel::Balanced,
            ),
            TiffCompression::DeflateBest => {
                tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Best)
            }
        };

        let mut buffer = Vec::new();
        let mut encoder = tiff::encoder::TiffEncoder::new(Cursor::new(&mut buffer))
            .map_err(|e| DisplayError::EncodeError(e.to_string()))?
            .with_compression(compression);

        encoder
            .write_image::<tiff::encoder::colortype::RGB8>(self.width, self.height, &self.data)
            .map_err(|e| DisplayError::EncodeError(e.to_string()))?;

        Ok(buffer)
    }

    /// Write the figure to a path, dispatching the codec on the extension.
    ///
    /// `.png` encodes via PNG; `.tif`/`.tiff` via TIFF with the default
    /// compression. Other extensions are an error.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.save_with(path, TiffCompression::default())
    }

    /// Write the figure to a path with an explicit TIFF compression.
    pub fn save_with<P: AsRef<Path>>(&self, path: P, compression: TiffCompression) -> Result<()> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let bytes = match ext.as_deref() {
            Some("png") => self.encode_png()?,
            Some("tif") | Some("tiff") => self.encode_tiff(compression)?,
            _ => {
                return Err(DisplayError::UnsupportedFormat(
                    path.display().to_string(),
                ));
            }
        };

        std::fs::write(path, bytes)?;
        debug!("Figure saved to {}", path.display());
        Ok(())
    }
}
