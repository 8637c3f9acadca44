//! Render configuration types

use crate::display_pipeline::colormap::ColorMap;

/// Configuration for a grid render
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Number of grid columns
    pub cols: usize,
    /// Figure size (width, height) in display units
    pub figsize: (f32, f32),
    /// Colormap applied to single-channel images
    pub cmap: ColorMap,
    /// Prefix prepended to every title
    pub title_prefix: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: 4,
            figsize: (15.0, 15.0),
            cmap: ColorMap::Gray,
            title_prefix: String::new(),
        }
    }
}

impl GridConfig {
    pub fn builder() -> GridConfigBuilder {
        GridConfigBuilder::default()
    }
}

/// Builder for GridConfig
#[derive(Default)]
pub struct GridConfigBuilder {
    cols: Option<usize>,
    figsize: Option<(f32, f32)>,
    cmap: Option<ColorMap>,
    title_prefix: Option<String>,
}

impl GridConfigBuilder {
    pub fn cols(mut self, cols: usize) -> Self {
        self.cols = Some(cols);
        self
    }

    pub fn figsize(mut self, width: f32, height: f32) -> Self {
        self.figsize = Some((width, height));
        self
    }

    pub fn cmap(mut self, cmap: ColorMap) -> Self {
        self.cmap = Some(cmap);
        self
    }

    pub fn title_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.title_prefix = Some(prefix.into());
        self
    }

    pub fn build(self) -> GridConfig {
        let default = GridConfig::default();
        GridConfig {
            cols: self.cols.unwrap_or(default.cols),
            figsize: self.figsize.unwrap_or(default.figsize),
            cmap: self.cmap.unwrap_or(default.cmap),
            title_prefix: self.title_prefix.unwrap_or(default.title_prefix),
        }
    }
}
