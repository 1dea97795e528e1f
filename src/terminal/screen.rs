//! The screen model: cell grid, cursor, pixel canvas and dirty region.

use std::fmt;

use image::{Rgba, RgbaImage};
use tracing::trace;

use super::dirty::{DirtyRegion, PixelRect};
use super::palette::Palette;
use super::tokenizer::{Sequence, Token};
use super::types::{Attrs, Cell, Cursor};
use crate::error::SequenceError;
use crate::glyph::GlyphRenderer;

/// A fixed-size terminal screen rendered into an RGBA canvas.
///
/// Every cell change is drawn immediately and recorded in the dirty region,
/// which the frame compositor consumes when it cuts a frame.
#[derive(Debug)]
pub struct Screen<G> {
    pub(super) width: usize,
    pub(super) height: usize,
    pub(super) cells: Vec<Cell>,
    pub(super) cursor: Cursor,
    pub(super) attrs: Attrs,
    dirty: DirtyRegion,
    canvas: RgbaImage,
    glyphs: G,
    palette: Palette,
    cell_width: u32,
    cell_height: u32,
    /// Cell currently showing the inverted cursor block
    overlay: Option<(usize, usize)>,
}

impl<G: GlyphRenderer> Screen<G> {
    /// Create a screen cleared to the default background.
    ///
    /// The whole canvas starts out dirty so the first frame covers it.
    pub fn new(width: usize, height: usize, glyphs: G, palette: Palette) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let (cell_width, cell_height) = glyphs.cell_size();
        let canvas = RgbaImage::from_pixel(
            width as u32 * cell_width,
            height as u32 * cell_height,
            palette.bg(Attrs::default().bg),
        );

        let mut dirty = DirtyRegion::default();
        dirty.extend(PixelRect::new(0, 0, canvas.width(), canvas.height()));

        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
            cursor: Cursor::default(),
            attrs: Attrs::default(),
            dirty,
            canvas,
            glyphs,
            palette,
            cell_width,
            cell_height,
            overlay: None,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn attrs(&self) -> Attrs {
        self.attrs
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        (x < self.width && y < self.height).then(|| &self.cells[y * self.width + x])
    }

    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    /// Accumulated dirty region, without consuming it.
    pub fn dirty(&self) -> Option<PixelRect> {
        self.dirty.get()
    }

    /// Consume the dirty region.
    pub fn take_dirty(&mut self) -> Option<PixelRect> {
        self.dirty.take()
    }

    /// Text of one row with trailing blanks removed.
    pub fn row_text(&self, y: usize) -> String {
        let start = y * self.width;
        let row: String = self.cells[start..start + self.width]
            .iter()
            .map(|c| c.ch)
            .collect();
        row.trim_end().to_string()
    }

    /// Screen text with trailing blanks and trailing empty rows removed.
    pub fn contents(&self) -> String {
        let rows: Vec<String> = (0..self.height).map(|y| self.row_text(y)).collect();
        rows.join("\n").trim_end().to_string()
    }

    /// Apply one token from the tokenizer.
    pub fn apply(&mut self, token: &Token) -> Result<(), SequenceError> {
        match token {
            Token::Char(ch) => {
                self.input(*ch);
                Ok(())
            }
            Token::Csi(seq) => self.dispatch(seq),
        }
    }

    fn input(&mut self, ch: char) {
        match ch {
            '\t' => self.tab(),
            '\n' => self.line_feed(),
            '\r' => self.carriage_return(),
            '\x08' => self.backspace(),
            c if c.is_control() => trace!("Ignoring control character {:?}", c),
            c => self.print(c),
        }
    }

    fn dispatch(&mut self, seq: &Sequence) -> Result<(), SequenceError> {
        match seq.command {
            'H' | 'f' => self.cursor_position(seq),
            'C' => self.cursor_forward(seq),
            'J' => self.erase_display(seq),
            'K' => self.erase_line(seq),
            'X' => self.erase_chars(seq),
            '@' => self.insert_chars(seq),
            'm' => self.select_graphic_rendition(seq),
            'h' => self.set_mode(seq, true),
            'l' => self.set_mode(seq, false),
            _ => Err(seq.unsupported("unknown command")),
        }
    }

    fn print(&mut self, ch: char) {
        let Cursor { x, y, .. } = self.cursor;
        let cell = Cell {
            ch,
            fg: self.attrs.fg,
            bg: self.attrs.bg,
        };
        self.set_cell(x, y, cell);
        self.move_cursor(x + 1, y);
    }

    /// Move the cursor, clamping to the grid.
    pub(super) fn move_cursor(&mut self, x: usize, y: usize) {
        self.cursor.x = x.min(self.width - 1);
        self.cursor.y = y.min(self.height - 1);
    }

    /// Replace a cell and redraw it. Writing identical content is a no-op.
    pub(super) fn set_cell(&mut self, x: usize, y: usize, cell: Cell) {
        let index = y * self.width + x;
        if self.cells[index] == cell {
            return;
        }
        self.cells[index] = cell;
        self.render_cell(x, y, false);
    }

    /// Blank `columns` of row `y` with the current attributes.
    pub(super) fn clear_cells(&mut self, y: usize, columns: std::ops::Range<usize>) {
        let blank = Cell::blank(self.attrs);
        for x in columns.start..columns.end.min(self.width) {
            self.set_cell(x, y, blank);
        }
    }

    /// Draw the cursor cell with foreground and background swapped.
    pub fn show_cursor_overlay(&mut self) {
        let Cursor { x, y, .. } = self.cursor;
        self.render_cell(x, y, true);
        self.overlay = Some((x, y));
    }

    /// Redraw the cell under the cursor overlay with its true colors.
    pub fn hide_cursor_overlay(&mut self) {
        if let Some((x, y)) = self.overlay.take() {
            self.render_cell(x, y, false);
        }
    }

    fn cell_rect(&self, x: usize, y: usize) -> PixelRect {
        PixelRect::new(
            x as u32 * self.cell_width,
            y as u32 * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }

    fn render_cell(&mut self, x: usize, y: usize, inverted: bool) {
        let cell = self.cells[y * self.width + x];
        let (fg, bg) = if inverted {
            (self.palette.bg(cell.bg), self.palette.fg(cell.fg))
        } else {
            (self.palette.fg(cell.fg), self.palette.bg(cell.bg))
        };

        let rect = self.cell_rect(x, y);
        fill(&mut self.canvas, rect, bg);
        if !cell.ch.is_whitespace() {
            self.glyphs
                .draw(&mut self.canvas, (rect.x, rect.y), cell.ch, fg);
        }
        self.dirty.extend(rect);
    }
}

fn fill(canvas: &mut RgbaImage, rect: PixelRect, color: Rgba<u8>) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            canvas.put_pixel(x, y, color);
        }
    }
}

impl<G> fmt::Display for Screen<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().map(|c| c.ch).collect();
            write!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
