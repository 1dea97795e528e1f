//! SGR (Select Graphic Rendition) handler.
//!
//! Handles CSI m sequence for colors:
//! - Reset (0, or no parameters)
//! - Standard foreground/background colors (30-37, 40-47)
//! - Default foreground/background (39, 49)
//! - Bright foreground/background colors (90-97, 100-107)

use crate::error::SequenceError;
use crate::glyph::GlyphRenderer;
use crate::terminal::tokenizer::Sequence;
use crate::terminal::types::{Attrs, Color};
use crate::terminal::Screen;

impl<G: GlyphRenderer> Screen<G> {
    /// Apply all parameters, or none of them if any is unsupported.
    pub(in crate::terminal) fn select_graphic_rendition(
        &mut self,
        seq: &Sequence,
    ) -> Result<(), SequenceError> {
        let mut attrs = self.attrs;
        if seq.params.is_empty() {
            attrs = Attrs::default();
        }

        for index in 0..seq.params.len() {
            match seq.number(index, 0)? {
                0 => attrs = Attrs::default(),
                code @ 30..=37 => attrs.fg = ansi(code - 30),
                39 => attrs.fg = Color::Default,
                code @ 40..=47 => attrs.bg = ansi(code - 40),
                49 => attrs.bg = Color::Default,
                code @ 90..=97 => attrs.fg = ansi(code - 90 + 8),
                code @ 100..=107 => attrs.bg = ansi(code - 100 + 8),
                _ => return Err(seq.unsupported("unsupported graphic rendition")),
            }
        }

        self.attrs = attrs;
        Ok(())
    }
}

fn ansi(index: usize) -> Color {
    Color::from_index(index).unwrap_or_default()
}
