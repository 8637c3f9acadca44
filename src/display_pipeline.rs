//! Image display pipeline module
//!
//! This module provides a structured approach to rendering in-memory images
//! as a titled grid, with separate modules for image buffers, colormaps,
//! the raster display surface, figure presenters, and render orchestration.

pub mod colormap;
pub mod common;
pub mod image;
pub mod present;
pub mod render;
pub mod surface;

pub use common::{
    DisplayError,
    Result,
};

pub use image::{
    CellPixmap,
    ImageData,
    PixelBuffer,
};

pub use colormap::ColorMap;

pub use surface::{
    Cell,
    CellRect,
    DisplaySurface,
    FigureImage,
    RasterSurface,
    TiffCompression,
};

pub use present::{
    FigurePresenter,
    FilePresenter,
    ImageProtocol,
    TerminalPresenter,
};

pub use render::{
    GridConfig,
    GridConfigBuilder,
    GridLayout,
    GridRenderer,
    display_image_grid,
};
