//! Erase and insert handlers.
//!
//! Handles CSI sequences:
//! - J: Erase in display (2 and 3 only)
//! - K: Erase in line (0 only)
//! - X: Erase characters
//! - @: Insert blank characters

use crate::error::SequenceError;
use crate::glyph::GlyphRenderer;
use crate::terminal::tokenizer::Sequence;
use crate::terminal::types::Cell;
use crate::terminal::Screen;

impl<G: GlyphRenderer> Screen<G> {
    pub(in crate::terminal) fn erase_display(
        &mut self,
        seq: &Sequence,
    ) -> Result<(), SequenceError> {
        match seq.param(0) {
            Some("2") | Some("3") => {
                for y in 0..self.height {
                    self.clear_cells(y, 0..self.width);
                }
                Ok(())
            }
            _ => Err(seq.unsupported("unsupported erase-in-display mode")),
        }
    }

    pub(in crate::terminal) fn erase_line(&mut self, seq: &Sequence) -> Result<(), SequenceError> {
        match seq.param(0) {
            None | Some("0") => {
                self.clear_cells(self.cursor.y, self.cursor.x..self.width);
                Ok(())
            }
            _ => Err(seq.unsupported("unsupported erase-in-line mode")),
        }
    }

    /// Blank `n` cells from the cursor, keeping their colors, and move the
    /// cursor to the end of the erased span.
    pub(in crate::terminal) fn erase_chars(
        &mut self,
        seq: &Sequence,
    ) -> Result<(), SequenceError> {
        let n = seq.number(0, 1)?.max(1);
        let (x, y) = (self.cursor.x, self.cursor.y);
        let end = x.saturating_add(n).min(self.width);
        for cx in x..end {
            let cell = self.cells[y * self.width + cx];
            self.set_cell(cx, y, Cell { ch: ' ', ..cell });
        }
        self.move_cursor(end, y);
        Ok(())
    }

    /// Shift the rest of the row right by `n` cells, dropping cells pushed
    /// past the edge and blanking the gap at the cursor.
    pub(in crate::terminal) fn insert_chars(
        &mut self,
        seq: &Sequence,
    ) -> Result<(), SequenceError> {
        let n = seq.number(0, 1)?.max(1);
        let (x, y) = (self.cursor.x, self.cursor.y);
        let start = y * self.width;
        let old: Vec<Cell> = self.cells[start..start + self.width].to_vec();
        let blank = Cell::blank(self.attrs);

        // set_cell skips cells whose content does not change
        for cx in (x..self.width).rev() {
            let cell = if cx >= x.saturating_add(n) {
                old[cx - n]
            } else {
                blank
            };
            self.set_cell(cx, y, cell);
        }
        Ok(())
    }
}
