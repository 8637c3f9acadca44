//! Common utilities module
//!
//! This module contains shared utilities used across the display pipeline.

pub mod error;

pub use error::{DisplayError, Result};
