//! Glyph rendering.
//!
//! The screen draws each cell through a [`GlyphRenderer`]: it fills the cell
//! background itself and asks the renderer to paint the character on top.

mod font;

use image::{Rgba, RgbaImage};

pub use font::{FontRenderer, DEFAULT_FONT};

/// Paints characters into fixed-size cells of a canvas.
pub trait GlyphRenderer {
    /// Cell size in pixels as `(width, height)`.
    fn cell_size(&self) -> (u32, u32);

    /// Paint `ch` in `fg` into the cell whose top-left corner is `origin`.
    ///
    /// Implementations must not draw outside the cell.
    fn draw(&mut self, canvas: &mut RgbaImage, origin: (u32, u32), ch: char, fg: Rgba<u8>);
}

impl<G: GlyphRenderer + ?Sized> GlyphRenderer for Box<G> {
    fn cell_size(&self) -> (u32, u32) {
        (**self).cell_size()
    }

    fn draw(&mut self, canvas: &mut RgbaImage, origin: (u32, u32), ch: char, fg: Rgba<u8>) {
        (**self).draw(canvas, origin, ch, fg)
    }
}
