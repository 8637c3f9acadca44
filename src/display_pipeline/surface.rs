//! Display surface module
//!
//! This module defines the surface abstraction the grid renderer draws
//! through, and the standard raster implementation that composes the grid
//! into an RGB figure image.

mod figure;
mod font;
mod raster;
mod surface;
pub mod types;

pub use figure::FigureImage;
pub use raster::RasterSurface;
pub use surface::DisplaySurface;
pub use types::{Cell, CellRect, TiffCompression};
