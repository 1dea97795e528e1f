//! Virtual terminal emulator module.
//!
//! Replays recorded terminal output into a fixed-size cell grid that is
//! rendered into a pixel canvas as it changes. Only the subset of escape
//! sequences needed to reproduce recorded sessions visually is supported:
//! colors, cursor movement, line/screen erasure, character insert/erase and
//! cursor visibility.

mod dirty;
mod handlers;
mod palette;
mod screen;
mod tokenizer;
mod types;

#[cfg(test)]
mod tests;

pub use dirty::{DirtyRegion, PixelRect};
pub use palette::Palette;
pub use screen::Screen;
pub use tokenizer::{Sequence, Token, Tokenizer};
pub use types::{Attrs, Cell, Color, Cursor};
