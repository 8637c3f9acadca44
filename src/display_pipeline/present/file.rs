//! File figure output, for headless environments and CI.

use std::path::PathBuf;

use tracing::info;

use crate::display_pipeline::common::error::Result;
use crate::display_pipeline::present::presenter::FigurePresenter;
use crate::display_pipeline::surface::{FigureImage, TiffCompression};

/// Writes each presented figure to a path; the codec is chosen by the
/// path's extension.
pub struct FilePresenter {
    path: PathBuf,
    compression: TiffCompression,
}

impl FilePresenter {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            compression: TiffCompression::default(),
        }
    }

    /// Compression used when the target is a TIFF file.
    pub fn with_compression(mut self, compression: TiffCompression) -> Self {
        self.compression = compression;
        self
    }
}

impl FigurePresenter for FilePresenter {
    fn present(&mut self, figure: &FigureImage) -> Result<()> {
        figure.save_with(&self.path, self.compression)?;
        info!(path = %self.path.display(), "Figure written");
        Ok(())
    }
}
