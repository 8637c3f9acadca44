use tracing::{info, instrument};

use crate::display_pipeline::common::error::{DisplayError, Result};
use crate::display_pipeline::image::convert;
use crate::display_pipeline::image::types::ImageData;
use crate::display_pipeline::present::TerminalPresenter;
use crate::display_pipeline::render::layout::GridLayout;
use crate::display_pipeline::render::types::GridConfig;
use crate::display_pipeline::surface::{Cell, DisplaySurface, RasterSurface};

pub struct GridRenderer<S: DisplaySurface> {
    surface: S,
    config: GridConfig,
}

impl GridRenderer<RasterSurface<TerminalPresenter>> {
    pub fn new(config: GridConfig) -> Self {
        Self {
            surface: RasterSurface::new(),
            config,
        }
    }
}

impl<S: DisplaySurface> GridRenderer<S> {
    pub fn with_surface(surface: S, config: GridConfig) -> Self {
        Self { surface, config }
    }

    /// Render the images into a left-to-right, top-to-bottom grid and hand
    /// the figure to the surface's presenter.
    ///
    /// `titles` aligns to `images` by position; a shorter list leaves the
    /// remaining images untitled. An empty image list is the one recognized
    /// error condition and is reported before any surface operation.
    #[instrument(skip(self, images, titles), fields(n_images = images.len()))]
    pub fn render(&mut self, images: &[ImageData], titles: Option<&[String]>) -> Result<()> {
        if images.is_empty() {
            return Err(DisplayError::EmptyInput);
        }

        let layout = GridLayout::new(images.len(), self.config.cols)?;
        info!(
            rows = layout.rows(),
            cols = layout.cols(),
            "Starting grid render"
        );

        {
            let _span = tracing::info_span!(
                "allocate_grid",
                rows = layout.rows(),
                cols = layout.cols()
            )
            .entered();
            self.surface
                .allocate_grid(layout.rows(), layout.cols(), self.config.figsize)?;
        }

        {
            let _span = tracing::info_span!("draw_cells").entered();
            for (i, image) in images.iter().enumerate() {
                let (row, col) = layout.cell(i);
                let cell = Cell::new(row, col);

                // Colormap applies to single-channel data only; to_pixmap
                // ignores it for color buffers
                let pixmap = convert::to_pixmap(image, self.config.cmap);
                self.surface.draw_image(cell, &pixmap)?;

                if let Some(title) = titles.and_then(|t| t.get(i)) {
                    let text = format!("{}{}", self.config.title_prefix, title);
                    self.surface.set_title(cell, &text)?;
                }

                self.surface.strip_axes(cell)?;
            }
        }

        for (row, col) in layout.unused_cells() {
            self.surface.remove_cell(Cell::new(row, col))?;
        }

        self.surface.tight_layout()?;

        {
            let _span = tracing::info_span!("present").entered();
            self.surface.present()?;
        }

        info!(n_images = images.len(), "Grid render complete");
        Ok(())
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GridConfig) {
        self.config = config;
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

/// Convenience entry point mirroring the classic call shape: render
/// `images` on the standard raster surface with inline terminal display.
pub fn display_image_grid(
    images: &[ImageData],
    titles: Option<&[String]>,
    config: GridConfig,
) -> Result<()> {
    GridRenderer::new(config).render(images, titles)
}
