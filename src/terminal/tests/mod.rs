//! Terminal emulator tests.
//!
//! Organized by handler category:
//! - cursor_tests: Cursor movement and C0 controls
//! - editing_tests: Erase/insert operations
//! - style_tests: SGR color parsing
//! - mode_tests: Private mode set/reset
//! - render_tests: Canvas pixels and dirty region tracking

mod mode_tests;

use super::{Palette, Screen, Tokenizer};
use crate::error::SequenceError;
use crate::glyph::testing::DotGlyphs;

fn screen(width: usize, height: usize) -> Screen<DotGlyphs> {
    Screen::new(width, height, DotGlyphs, Palette::default())
}

/// Tokenize `input` and apply every token, stopping at the first error.
fn feed(screen: &mut Screen<DotGlyphs>, input: &str) -> Result<(), SequenceError> {
    let mut tokens = Tokenizer::new(input.as_bytes());
    for token in tokens.by_ref() {
        screen.apply(&token?)?;
    }
    assert!(tokens.incomplete().is_none(), "unterminated input {input:?}");
    Ok(())
}

fn screen_with(width: usize, height: usize, input: &str) -> Screen<DotGlyphs> {
    let mut s = screen(width, height);
    feed(&mut s, input).unwrap();
    s
}
