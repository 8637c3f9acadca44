use crate::display_pipeline::common::error::Result;
use crate::display_pipeline::surface::FigureImage;

pub trait FigurePresenter {
    fn present(&mut self, figure: &FigureImage) -> Result<()>;
}
