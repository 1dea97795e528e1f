//! Cursor movement handlers.
//!
//! Handles CSI sequences:
//! - H/f: Cursor position (1-indexed row;column)
//! - C: Cursor forward
//!
//! And the C0 controls tab, line feed, carriage return and backspace.

use crate::error::SequenceError;
use crate::glyph::GlyphRenderer;
use crate::terminal::tokenizer::Sequence;
use crate::terminal::Screen;

const TAB_WIDTH: usize = 8;

impl<G: GlyphRenderer> Screen<G> {
    pub(in crate::terminal) fn cursor_position(
        &mut self,
        seq: &Sequence,
    ) -> Result<(), SequenceError> {
        let row = seq.number(0, 1)?.max(1);
        let col = seq.number(1, 1)?.max(1);
        self.move_cursor(col - 1, row - 1);
        Ok(())
    }

    pub(in crate::terminal) fn cursor_forward(
        &mut self,
        seq: &Sequence,
    ) -> Result<(), SequenceError> {
        let n = seq.number(0, 1)?.max(1);
        self.move_cursor(self.cursor.x.saturating_add(n), self.cursor.y);
        Ok(())
    }

    /// Advance to the next tab stop, blanking the cells passed over.
    pub(in crate::terminal) fn tab(&mut self) {
        let (x, y) = (self.cursor.x, self.cursor.y);
        let next = (x / TAB_WIDTH + 1) * TAB_WIDTH;
        self.clear_cells(y, x..next);
        self.move_cursor(next, y);
    }

    /// Move down one row; the column is kept.
    pub(in crate::terminal) fn line_feed(&mut self) {
        self.move_cursor(self.cursor.x, self.cursor.y + 1);
    }

    pub(in crate::terminal) fn carriage_return(&mut self) {
        self.cursor.x = 0;
    }

    pub(in crate::terminal) fn backspace(&mut self) {
        self.cursor.x = self.cursor.x.saturating_sub(1);
    }
}
