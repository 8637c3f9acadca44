//! Render orchestration module
//!
//! This module contains the grid layout math, the render configuration,
//! and the renderer that drives a display surface.

mod grid_renderer;
mod layout;
mod types;


pub use grid_renderer::{GridRenderer, display_image_grid};
pub use layout::GridLayout;
pub use types::{GridConfig, GridConfigBuilder};
