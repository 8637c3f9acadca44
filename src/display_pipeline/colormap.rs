//! Colormap module
//!
//! This module provides the named intensity-to-color gradients applied to
//! single-channel images.

pub mod lut;
pub mod types;

pub use types::ColorMap;
