//! Color palette mapping [`Color`] ids to pixel values.

use image::{Rgb, Rgba};

use super::types::Color;
use crate::asciicast::Theme;

const fn rgb(r: u8, g: u8, b: u8) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

/// Built-in colors, indexed like [`Color::index`].
const BUILTIN: [Rgba<u8>; 16] = [
    rgb(0, 0, 0),
    rgb(222, 56, 43),
    rgb(57, 181, 74),
    rgb(255, 199, 6),
    rgb(0, 111, 184),
    rgb(118, 38, 113),
    rgb(44, 181, 233),
    rgb(204, 204, 204),
    rgb(128, 128, 128),
    rgb(255, 0, 0),
    rgb(0, 255, 0),
    rgb(255, 255, 0),
    rgb(0, 0, 255),
    rgb(255, 0, 255),
    rgb(0, 255, 255),
    rgb(255, 255, 255),
];

/// Immutable color lookup for one render run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgba<u8>; 16],
    foreground: Rgba<u8>,
    background: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: BUILTIN,
            foreground: BUILTIN[15],
            background: BUILTIN[0],
        }
    }
}

impl Palette {
    /// Build a palette from a recording's terminal theme.
    ///
    /// Missing palette slots fall back to the built-in colors.
    pub fn from_theme(theme: &Theme) -> Self {
        let mut colors = BUILTIN;
        for (slot, color) in colors.iter_mut().zip(theme.palette.iter()) {
            *slot = opaque(*color);
        }
        Self {
            colors,
            foreground: opaque(theme.fg),
            background: opaque(theme.bg),
        }
    }

    /// Pixel value of a color used as foreground.
    pub fn fg(&self, color: Color) -> Rgba<u8> {
        color
            .index()
            .map_or(self.foreground, |index| self.colors[index])
    }

    /// Pixel value of a color used as background.
    pub fn bg(&self, color: Color) -> Rgba<u8> {
        color
            .index()
            .map_or(self.background, |index| self.colors[index])
    }
}

fn opaque(color: Rgb<u8>) -> Rgba<u8> {
    let [r, g, b] = color.0;
    rgb(r, g, b)
}
