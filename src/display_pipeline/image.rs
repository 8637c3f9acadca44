//! Image buffer module
//!
//! This module provides the in-memory image buffer types accepted by the
//! grid renderer, plus conversion to display-ready RGB pixmaps.

pub mod convert;
pub mod types;

pub use convert::to_pixmap;
pub use types::{CellPixmap, ImageData, PixelBuffer};
