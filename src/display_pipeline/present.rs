//! Figure presentation module
//!
//! This module provides the sinks a composed figure is handed to: inline
//! terminal display and file output.

mod file;
mod presenter;
mod terminal;

pub use file::FilePresenter;
pub use presenter::FigurePresenter;
pub use terminal::{ImageProtocol, TerminalPresenter};
