//! Grid layout math

use crate::display_pipeline::common::error::{DisplayError, Result};

/// Transient rows x cols arrangement computed from image count and the
/// requested column count. Discarded after rendering; no state persists
/// across calls.
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    rows: usize,
    cols: usize,
    n_images: usize,
}

impl GridLayout {
    pub fn new(n_images: usize, cols: usize) -> Result<Self> {
        if cols == 0 {
            return Err(DisplayError::InvalidGrid(0, cols));
        }
        Ok(Self {
            rows: n_images.div_ceil(cols),
            cols,
            n_images,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major cell for image position `i`.
    pub fn cell(&self, i: usize) -> (usize, usize) {
        (i / self.cols, i % self.cols)
    }

    /// Trailing cells with no image assigned, in row-major order.
    pub fn unused_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.n_images..self.rows * self.cols).map(|i| self.cell(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_is_ceiling_of_count_over_cols() {
        assert_eq!(GridLayout::new(5, 3).unwrap().rows(), 2);
        assert_eq!(GridLayout::new(6, 3).unwrap().rows(), 2);
        assert_eq!(GridLayout::new(7, 3).unwrap().rows(), 3);
        assert_eq!(GridLayout::new(1, 4).unwrap().rows(), 1);
    }

    #[test]
    fn test_cells_are_row_major() {
        let layout = GridLayout::new(5, 3).unwrap();
        assert_eq!(layout.cell(0), (0, 0));
        assert_eq!(layout.cell(2), (0, 2));
        assert_eq!(layout.cell(3), (1, 0));
        assert_eq!(layout.cell(4), (1, 1));
    }

    #[test]
    fn test_unused_cells_are_the_trailing_remainder() {
        let layout = GridLayout::new(5, 3).unwrap();
        assert_eq!(layout.unused_cells().collect::<Vec<_>>(), vec![(1, 2)]);

        let exact = GridLayout::new(6, 3).unwrap();
        assert_eq!(exact.unused_cells().count(), 0);
    }

    #[test]
    fn test_zero_columns_is_an_error() {
        assert!(matches!(
            GridLayout::new(5, 0).unwrap_err(),
            DisplayError::InvalidGrid(_, 0)
        ));
    }
}
