//! Bitmap text for cell titles
//!
//! Titles are rendered with the 8x8 ASCII glyph table; characters outside
//! the table fall back to '?'.

use font8x8::legacy::BASIC_LEGACY;

use crate::display_pipeline::surface::figure::FigureImage;

pub(crate) const GLYPH_SIZE: u32 = 8;

fn glyph(ch: char) -> [u8; 8] {
    let idx = ch as usize;
    if idx < BASIC_LEGACY.len() {
        BASIC_LEGACY[idx]
    } else {
        BASIC_LEGACY[b'?' as usize]
    }
}

/// Pixel width of a rendered string.
pub(crate) fn text_width(text: &str) -> u32 {
    text.chars().count() as u32 * GLYPH_SIZE
}

/// Draw a string with its top-left corner at (x, y).
pub(crate) fn draw_text(figure: &mut FigureImage, x: u32, y: u32, text: &str, color: [u8; 3]) {
    for (i, ch) in text.chars().enumerate() {
        let gx = x + i as u32 * GLYPH_SIZE;
        for (row, bits) in glyph(ch).iter().enumerate() {
            for bit in 0..GLYPH_SIZE {
                // Glyph rows are LSB-left
                if bits & (1 << bit) != 0 {
                    figure.set_pixel(gx + bit, y + row as u32, color);
                }
            }
        }
    }
}
