//! Terminal data types.
//!
//! Contains the core data structures for representing terminal state:
//! - Color: the 16 ANSI colors plus the reset sentinel
//! - Attrs: the current foreground/background pair
//! - Cell: a single character with its colors
//! - Cursor: position and visibility

/// ANSI color codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Reset sentinel: the palette's default fg or bg, depending on role
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    const ANSI: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
    ];

    /// Palette slot (0-15), `None` for [`Color::Default`].
    pub fn index(self) -> Option<usize> {
        Self::ANSI.iter().position(|&c| c == self)
    }

    /// Color for a palette slot (0-7 standard, 8-15 bright).
    pub fn from_index(index: usize) -> Option<Color> {
        Self::ANSI.get(index).copied()
    }
}

/// Current drawing attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attrs {
    pub fg: Color,
    pub bg: Color,
}

/// A single cell in the screen grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    /// A blank cell painted with the given attributes.
    pub fn blank(attrs: Attrs) -> Self {
        Self {
            ch: ' ',
            fg: attrs.fg,
            bg: attrs.bg,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Attrs::default())
    }
}

/// Cursor position and visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
    pub visible: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            visible: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_index_roundtrips_for_ansi_colors() {
        assert_eq!(Color::Black.index(), Some(0));
        assert_eq!(Color::White.index(), Some(7));
        assert_eq!(Color::BrightBlack.index(), Some(8));
        assert_eq!(Color::BrightWhite.index(), Some(15));
        assert_eq!(Color::from_index(9), Some(Color::BrightRed));
        assert_eq!(Color::from_index(16), None);
    }

    #[test]
    fn default_color_has_no_slot() {
        assert_eq!(Color::Default.index(), None);
    }

    #[test]
    fn default_cell_is_blank_space() {
        let cell = Cell::default();
        assert_eq!(cell.ch, ' ');
        assert_eq!(cell.fg, Color::Default);
        assert_eq!(cell.bg, Color::Default);
    }
}
