use thiserror::Error;

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("No images provided to display")]
    EmptyInput,

    #[error("Invalid grid shape: rows={0}, cols={1}")]
    InvalidGrid(usize, usize),

    #[error("Invalid figure size: width={0}, height={1}")]
    InvalidFigureSize(f32, f32),

    #[error("Cell (row={0}, col={1}) is outside the allocated grid")]
    CellOutOfBounds(usize, usize),

    #[error("Surface operation before a grid was allocated")]
    GridNotAllocated,

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Image buffer has {actual} samples, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Unknown colormap: {0}")]
    UnknownColorMap(String),

    #[error("Failed to encode figure: {0}")]
    EncodeError(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DisplayError>;
