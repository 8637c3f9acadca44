use crate::display_pipeline::common::error::Result;
use crate::display_pipeline::image::types::CellPixmap;
use crate::display_pipeline::surface::types::Cell;

/// The operations the grid renderer consumes a display backend through.
pub trait DisplaySurface {
    /// Allocate a rows x cols grid on a surface of the given figure size.
    fn allocate_grid(&mut self, rows: usize, cols: usize, figsize: (f32, f32)) -> Result<()>;

    /// Draw one image into a cell.
    fn draw_image(&mut self, cell: Cell, pixmap: &CellPixmap) -> Result<()>;

    /// Remove axis ticks and labels from a cell.
    fn strip_axes(&mut self, cell: Cell) -> Result<()>;

    /// Attach a title above a cell.
    fn set_title(&mut self, cell: Cell, text: &str) -> Result<()>;

    /// Remove a cell from the layout entirely (nothing is rendered there).
    fn remove_cell(&mut self, cell: Cell) -> Result<()>;

    /// Switch from the loose default margins to minimal padding.
    fn tight_layout(&mut self) -> Result<()>;

    /// Compose the figure and hand it to the presenter.
    fn present(&mut self) -> Result<()>;
}
