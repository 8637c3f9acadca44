//! Raster display surface
//!
//! Retained-mode implementation of [`DisplaySurface`]: per-cell state is
//! collected while the renderer draws, then composed at present time into a
//! white-background RGB figure sized figsize x dpi, which is handed to the
//! surface's presenter.

use tracing::debug;

use crate::display_pipeline::common::error::{DisplayError, Result};
use crate::display_pipeline::image::types::CellPixmap;
use crate::display_pipeline::present::{FigurePresenter, TerminalPresenter};
use crate::display_pipeline::surface::figure::FigureImage;
use crate::display_pipeline::surface::font;
use crate::display_pipeline::surface::surface::DisplaySurface;
use crate::display_pipeline::surface::types::{Cell, CellRect};

/// Display units to pixels, the usual inches x dpi convention.
const DEFAULT_DPI: f32 = 100.0;

/// Loose margin/padding as a fraction of the smaller canvas dimension.
const LOOSE_MARGIN_FRACTION: f32 = 0.03;

/// Padding in pixels after a tight_layout pass.
const TIGHT_PAD: u32 = 2;

/// Height of the title strip reserved above each image when any cell
/// carries a title.
const TITLE_STRIP: u32 = font::GLYPH_SIZE + 6;

const FRAME_COLOR: [u8; 3] = [80, 80, 80];
const TITLE_COLOR: [u8; 3] = [0, 0, 0];

/// Tick marks per framed edge.
const TICKS_PER_EDGE: u32 = 4;
const TICK_LEN: u32 = 3;

#[derive(Debug, Clone, Default)]
struct CellState {
    image: Option<CellPixmap>,
    title: Option<String>,
    axes_stripped: bool,
    removed: bool,
}

#[derive(Debug)]
struct GridState {
    rows: usize,
    cols: usize,
    figsize: (f32, f32),
    canvas_width: u32,
    canvas_height: u32,
    cells: Vec<CellState>,
    tight: bool,
}

/// The standard [`DisplaySurface`]: composes cells into a [`FigureImage`].
pub struct RasterSurface<P: FigurePresenter> {
    presenter: P,
    dpi: f32,
    grid: Option<GridState>,
    figure: Option<FigureImage>,
    rects: Vec<Option<CellRect>>,
}

impl RasterSurface<TerminalPresenter> {
    /// Surface paired with the standard terminal presenter.
    pub fn new() -> Self {
        Self::with_presenter(TerminalPresenter::new())
    }
}

impl Default for RasterSurface<TerminalPresenter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: FigurePresenter> RasterSurface<P> {
    pub fn with_presenter(presenter: P) -> Self {
        Self {
            presenter,
            dpi: DEFAULT_DPI,
            grid: None,
            figure: None,
            rects: Vec::new(),
        }
    }

    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    /// The figure composed by the last `present` call.
    pub fn figure(&self) -> Option<&FigureImage> {
        self.figure.as_ref()
    }

    /// Pixel rectangle a cell occupied on the last composed figure.
    ///
    /// `None` before `present`, for removed cells, and for out-of-range
    /// cells.
    pub fn cell_rect(&self, cell: Cell) -> Option<CellRect> {
        let grid = self.grid.as_ref()?;
        if cell.row >= grid.rows || cell.col >= grid.cols {
            return None;
        }
        *self.rects.get(cell.row * grid.cols + cell.col)?
    }

    fn cell_state_mut(&mut self, cell: Cell) -> Result<&mut CellState> {
        let grid = self.grid.as_mut().ok_or(DisplayError::GridNotAllocated)?;
        if cell.row >= grid.rows || cell.col >= grid.cols {
            return Err(DisplayError::CellOutOfBounds(cell.row, cell.col));
        }
        Ok(&mut grid.cells[cell.row * grid.cols + cell.col])
    }

    fn compose(&mut self) -> Result<FigureImage> {
        let grid = self.grid.as_ref().ok_or(DisplayError::GridNotAllocated)?;

        let pad = if grid.tight {
            TIGHT_PAD
        } else {
            let min_dim = grid.canvas_width.min(grid.canvas_height) as f32;
            ((min_dim * LOOSE_MARGIN_FRACTION) as u32).max(4)
        };
        let title_h = if grid.cells.iter().any(|c| c.title.is_some() && !c.removed) {
            TITLE_STRIP
        } else {
            0
        };

        let cols = grid.cols as u32;
        let rows = grid.rows as u32;
        let cell_w = grid
            .canvas_width
            .checked_sub(pad * (cols + 1))
            .map(|w| w / cols)
            .unwrap_or(0);
        let cell_h = grid
            .canvas_height
            .checked_sub(pad * (rows + 1))
            .map(|h| h / rows)
            .unwrap_or(0);
        if cell_w == 0 || cell_h <= title_h {
            return Err(DisplayError::InvalidFigureSize(
                grid.figsize.0,
                grid.figsize.1,
            ));
        }

        let mut figure = FigureImage::new(grid.canvas_width, grid.canvas_height);
        self.rects = vec![None; grid.cells.len()];

        for (i, state) in grid.cells.iter().enumerate() {
            if state.removed {
                continue;
            }
            let row = i as u32 / cols;
            let col = i as u32 % cols;
            let rect = CellRect {
                x: pad + col * (cell_w + pad),
                y: pad + row * (cell_h + pad),
                width: cell_w,
                height: cell_h,
            };
            self.rects[i] = Some(rect);

            let image_area = CellRect {
                x: rect.x,
                y: rect.y + title_h,
                width: rect.width,
                height: rect.height - title_h,
            };

            if let Some(pixmap) = &state.image {
                blit_scaled(&mut figure, pixmap, image_area);
            }
            if !state.axes_stripped {
                draw_frame(&mut figure, image_area);
            }
            if let Some(title) = &state.title {
                draw_title(&mut figure, title, rect);
            }
        }

        Ok(figure)
    }
}

impl<P: FigurePresenter> DisplaySurface for RasterSurface<P> {
    fn allocate_grid(&mut self, rows: usize, cols: usize, figsize: (f32, f32)) -> Result<()> {
        if rows == 0 || cols == 0 {
            return Err(DisplayError::InvalidGrid(rows, cols));
        }
        let (w, h) = figsize;
        if !w.is_finite() || !h.is_finite() || w <= 0.0 || h <= 0.0 {
            return Err(DisplayError::InvalidFigureSize(w, h));
        }

        let canvas_width = (w * self.dpi).round() as u32;
        let canvas_height = (h * self.dpi).round() as u32;
        debug!(
            rows,
            cols, canvas_width, canvas_height, "Allocating display grid"
        );

        self.grid = Some(GridState {
            rows,
            cols,
            figsize,
            canvas_width,
            canvas_height,
            cells: vec![CellState::default(); rows * cols],
            tight: false,
        });
        self.figure = None;
        self.rects.clear();
        Ok(())
    }

    fn draw_image(&mut self, cell: Cell, pixmap: &CellPixmap) -> Result<()> {
        self.cell_state_mut(cell)?.image = Some(pixmap.clone());
        Ok(())
    }

    fn strip_axes(&mut self, cell: Cell) -> Result<()> {
        self.cell_state_mut(cell)?.axes_stripped = true;
        Ok(())
    }

    fn set_title(&mut self, cell: Cell, text: &str) -> Result<()> {
        self.cell_state_mut(cell)?.title = Some(text.to_string());
        Ok(())
    }

    fn remove_cell(&mut self, cell: Cell) -> Result<()> {
        self.cell_state_mut(cell)?.removed = true;
        Ok(())
    }

    fn tight_layout(&mut self) -> Result<()> {
        let grid = self.grid.as_mut().ok_or(DisplayError::GridNotAllocated)?;
        grid.tight = true;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let figure = self.compose()?;
        self.presenter.present(&figure)?;
        self.figure = Some(figure);
        Ok(())
    }
}

/// Scale a pixmap into `area` with aspect preserved (nearest neighbor),
/// centered on both axes.
fn blit_scaled(figure: &mut FigureImage, pixmap: &CellPixmap, area: CellRect) {
    let iw = pixmap.width as f32;
    let ih = pixmap.height as f32;
    let scale = (area.width as f32 / iw).min(area.height as f32 / ih);
    let dw = ((iw * scale) as u32).max(1).min(area.width);
    let dh = ((ih * scale) as u32).max(1).min(area.height);
    let ox = area.x + (area.width - dw) / 2;
    let oy = area.y + (area.height - dh) / 2;

    for dy in 0..dh {
        let sy = ((dy as f32 / dh as f32) * ih) as usize;
        let sy = sy.min(pixmap.height - 1);
        for dx in 0..dw {
            let sx = ((dx as f32 / dw as f32) * iw) as usize;
            let sx = sx.min(pixmap.width - 1);
            figure.set_pixel(ox + dx, oy + dy, pixmap.pixel(sx, sy));
        }
    }
}

/// Axis frame with tick marks on the left and bottom edges. Only drawn for
/// cells whose axes were not stripped.
fn draw_frame(figure: &mut FigureImage, area: CellRect) {
    let right = area.x + area.width - 1;
    let bottom = area.y + area.height - 1;

    for x in area.x..=right {
        figure.set_pixel(x, area.y, FRAME_COLOR);
        figure.set_pixel(x, bottom, FRAME_COLOR);
    }
    for y in area.y..=bottom {
        figure.set_pixel(area.x, y, FRAME_COLOR);
        figure.set_pixel(right, y, FRAME_COLOR);
    }

    for k in 1..=TICKS_PER_EDGE {
        let tx = area.x + area.width * k / (TICKS_PER_EDGE + 1);
        let ty = area.y + area.height * k / (TICKS_PER_EDGE + 1);
        for d in 1..=TICK_LEN {
            figure.set_pixel(tx, bottom + d, FRAME_COLOR);
            figure.set_pixel(area.x.saturating_sub(d), ty, FRAME_COLOR);
        }
    }
}

/// Title text centered in the strip above the image area, truncated to the
/// cell width.
fn draw_title(figure: &mut FigureImage, title: &str, rect: CellRect) {
    let max_chars = (rect.width / font::GLYPH_SIZE) as usize;
    let shown: String = title.chars().take(max_chars).collect();
    if shown.is_empty() {
        return;
    }
    let tx = rect.x + (rect.width - font::text_width(&shown)) / 2;
    let ty = rect.y + (TITLE_STRIP - font::GLYPH_SIZE) / 2;
    font::draw_text(figure, tx, ty, &shown, TITLE_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Presenter that drops the figure, for geometry-only tests.
    struct NullPresenter;

    impl FigurePresenter for NullPresenter {
        fn present(&mut self, _figure: &FigureImage) -> Result<()> {
            Ok(())
        }
    }

    fn surface() -> RasterSurface<NullPresenter> {
        RasterSurface::with_presenter(NullPresenter)
    }

    fn black_pixmap(width: usize, height: usize) -> CellPixmap {
        CellPixmap {
            width,
            height,
            data: vec![0u8; width * height * 3],
        }
    }

    #[test]
    fn test_canvas_is_figsize_times_dpi() {
        let mut surface = surface();
        surface.allocate_grid(2, 3, (5.0, 4.0)).unwrap();
        surface.present().unwrap();
        let figure = surface.figure().unwrap();
        assert_eq!(figure.width(), 500);
        assert_eq!(figure.height(), 400);
    }

    #[test]
    fn test_operations_require_allocated_grid() {
        let mut surface = surface();
        let result = surface.draw_image(Cell::new(0, 0), &black_pixmap(2, 2));
        assert!(matches!(
            result.unwrap_err(),
            DisplayError::GridNotAllocated
        ));
        assert!(matches!(
            surface.tight_layout().unwrap_err(),
            DisplayError::GridNotAllocated
        ));
    }

    #[test]
    fn test_cell_out_of_bounds() {
        let mut surface = surface();
        surface.allocate_grid(1, 2, (4.0, 4.0)).unwrap();
        let result = surface.strip_axes(Cell::new(0, 2));
        assert!(matches!(
            result.unwrap_err(),
            DisplayError::CellOutOfBounds(0, 2)
        ));
    }

    #[test]
    fn test_degenerate_grid_and_figsize_rejected() {
        let mut surface = surface();
        assert!(matches!(
            surface.allocate_grid(0, 4, (4.0, 4.0)).unwrap_err(),
            DisplayError::InvalidGrid(0, 4)
        ));
        assert!(matches!(
            surface.allocate_grid(1, 1, (-1.0, 4.0)).unwrap_err(),
            DisplayError::InvalidFigureSize(_, _)
        ));
    }

    #[test]
    fn test_removed_cell_stays_background() {
        let mut surface = surface();
        surface.allocate_grid(1, 2, (6.0, 3.0)).unwrap();
        surface
            .draw_image(Cell::new(0, 0), &black_pixmap(10, 10))
            .unwrap();
        surface.strip_axes(Cell::new(0, 0)).unwrap();
        surface.remove_cell(Cell::new(0, 1)).unwrap();
        surface.present().unwrap();

        assert!(surface.cell_rect(Cell::new(0, 1)).is_none());
        let figure = surface.figure().unwrap();
        // Everything right of the canvas midpoint belongs to the removed cell
        for y in 0..figure.height() {
            for x in figure.width() / 2 + 1..figure.width() {
                assert_eq!(figure.pixel(x, y), [255, 255, 255]);
            }
        }
    }

    #[test]
    fn test_stripped_cell_has_no_frame() {
        let mut surface = surface();
        surface.allocate_grid(1, 1, (3.0, 3.0)).unwrap();
        surface.strip_axes(Cell::new(0, 0)).unwrap();
        surface.present().unwrap();
        let figure = surface.figure().unwrap();
        assert!(figure.data().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_unstripped_cell_draws_frame() {
        let mut surface = surface();
        surface.allocate_grid(1, 1, (3.0, 3.0)).unwrap();
        surface.present().unwrap();
        let figure = surface.figure().unwrap();
        let rect = surface.cell_rect(Cell::new(0, 0)).unwrap();
        assert_eq!(figure.pixel(rect.x, rect.y), FRAME_COLOR);
        assert_eq!(
            figure.pixel(rect.x + rect.width - 1, rect.y + rect.height - 1),
            FRAME_COLOR
        );
    }

    #[test]
    fn test_tight_layout_shrinks_margins() {
        let mut surface = surface();
        surface.allocate_grid(1, 1, (4.0, 4.0)).unwrap();
        surface.present().unwrap();
        let loose = surface.cell_rect(Cell::new(0, 0)).unwrap();

        surface.allocate_grid(1, 1, (4.0, 4.0)).unwrap();
        surface.tight_layout().unwrap();
        surface.present().unwrap();
        let tight = surface.cell_rect(Cell::new(0, 0)).unwrap();

        assert!(tight.x < loose.x);
        assert!(tight.width > loose.width);
    }

    #[test]
    fn test_title_reserves_strip_and_marks_pixels() {
        let mut surface = surface();
        surface.allocate_grid(1, 1, (3.0, 3.0)).unwrap();
        surface
            .draw_image(Cell::new(0, 0), &black_pixmap(10, 10))
            .unwrap();
        surface.set_title(Cell::new(0, 0), "Fig noise").unwrap();
        surface.strip_axes(Cell::new(0, 0)).unwrap();
        surface.present().unwrap();

        let figure = surface.figure().unwrap();
        let rect = surface.cell_rect(Cell::new(0, 0)).unwrap();
        let strip: Vec<[u8; 3]> = (rect.x..rect.x + rect.width)
            .flat_map(|x| (rect.y..rect.y + TITLE_STRIP).map(move |y| (x, y)))
            .map(|(x, y)| figure.pixel(x, y))
            .collect();
        assert!(strip.contains(&TITLE_COLOR));
    }

    #[test]
    fn test_image_scaled_into_cell_with_aspect() {
        let mut surface = surface();
        surface.allocate_grid(1, 1, (4.0, 2.0)).unwrap();
        // Tall source into a wide cell: blit is height-bound and centered
        surface
            .draw_image(Cell::new(0, 0), &black_pixmap(10, 20))
            .unwrap();
        surface.strip_axes(Cell::new(0, 0)).unwrap();
        surface.present().unwrap();

        let figure = surface.figure().unwrap();
        let rect = surface.cell_rect(Cell::new(0, 0)).unwrap();
        let cy = rect.y + rect.height / 2;
        let cx = rect.x + rect.width / 2;
        assert_eq!(figure.pixel(cx, cy), [0, 0, 0]);
        // Left edge of the cell stays background (image is narrower)
        assert_eq!(figure.pixel(rect.x, cy), [255, 255, 255]);
    }
}
