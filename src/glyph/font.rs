//! TrueType/OpenType glyph rendering backed by fontdue.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use fontdue::{Font, FontSettings, Metrics};
use image::{Rgba, RgbaImage};
use tracing::debug;

use super::GlyphRenderer;
use crate::config::RenderConfig;
use crate::error::RenderError;

/// Monospace font used when no font path is configured
pub const DEFAULT_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSansMono.ttf");

/// Points per inch; font sizes are given in points.
const POINTS_PER_INCH: f32 = 72.0;

/// Renders glyphs from a font file into fixed-size cells.
pub struct FontRenderer {
    font: Font,
    px: f32,
    cell_width: u32,
    cell_height: u32,
    /// Distance from the cell top to the baseline
    baseline: i32,
    cache: HashMap<char, (Metrics, Vec<u8>)>,
}

impl FontRenderer {
    /// Load the configured font, or the built-in one.
    pub fn load(config: &RenderConfig) -> Result<Self, RenderError> {
        let Some(path) = config.font_path.as_deref() else {
            debug!("Using built-in font ({} bytes)", DEFAULT_FONT.len());
            return Self::from_bytes(DEFAULT_FONT.to_vec(), config.font_size, config.dpi)
                .map_err(|message| RenderError::Font {
                    path: PathBuf::from("<built-in>"),
                    message: message.to_string(),
                });
        };

        let font_error = |message: String| RenderError::Font {
            path: path.to_path_buf(),
            message,
        };
        let bytes = fs::read(path).map_err(|e| font_error(e.to_string()))?;
        debug!("Loaded font {} ({} bytes)", path.display(), bytes.len());
        Self::from_bytes(bytes, config.font_size, config.dpi)
            .map_err(|message| font_error(message.to_string()))
    }

    /// Build a renderer from raw font bytes.
    pub fn from_bytes(bytes: Vec<u8>, font_size: f32, dpi: u32) -> Result<Self, &'static str> {
        let font = Font::from_bytes(bytes, FontSettings::default())?;
        let px = font_size * dpi as f32 / POINTS_PER_INCH;

        let (ascent, descent) = font
            .horizontal_line_metrics(px)
            .map(|m| (m.ascent, m.descent))
            .unwrap_or((px * 0.8, -px * 0.2));
        let cell_width = font.metrics('M', px).advance_width.ceil().max(1.0) as u32;
        let cell_height = (ascent - descent).ceil().max(1.0) as u32;

        Ok(Self {
            font,
            px,
            cell_width,
            cell_height,
            baseline: ascent.ceil() as i32,
            cache: HashMap::new(),
        })
    }

    /// Font size in pixels.
    pub fn pixel_size(&self) -> f32 {
        self.px
    }
}

impl GlyphRenderer for FontRenderer {
    fn cell_size(&self) -> (u32, u32) {
        (self.cell_width, self.cell_height)
    }

    fn draw(&mut self, canvas: &mut RgbaImage, origin: (u32, u32), ch: char, fg: Rgba<u8>) {
        let font = &self.font;
        let px = self.px;
        let (metrics, bitmap) = self
            .cache
            .entry(ch)
            .or_insert_with(|| font.rasterize(ch, px));

        let left = origin.0 as i32 + metrics.xmin;
        let top = origin.1 as i32 + self.baseline - (metrics.height as i32 + metrics.ymin);

        // Clip to the cell so the dirty region stays exact.
        let x_range = origin.0 as i32..(origin.0 + self.cell_width).min(canvas.width()) as i32;
        let y_range = origin.1 as i32..(origin.1 + self.cell_height).min(canvas.height()) as i32;

        for row in 0..metrics.height {
            let y = top + row as i32;
            if !y_range.contains(&y) {
                continue;
            }
            for col in 0..metrics.width {
                let x = left + col as i32;
                let coverage = bitmap[row * metrics.width + col];
                if coverage == 0 || !x_range.contains(&x) {
                    continue;
                }
                let pixel = canvas.get_pixel_mut(x as u32, y as u32);
                *pixel = blend(*pixel, fg, coverage);
            }
        }
    }
}

fn blend(bg: Rgba<u8>, fg: Rgba<u8>, coverage: u8) -> Rgba<u8> {
    let a = coverage as u32;
    let mix = |f: u8, b: u8| ((f as u32 * a + b as u32 * (255 - a) + 127) / 255) as u8;
    Rgba([mix(fg[0], bg[0]), mix(fg[1], bg[1]), mix(fg[2], bg[2]), 255])
}
