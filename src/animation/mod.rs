//! Frame compositing and animation assembly.
//!
//! [`render`] replays a recording on a [`Screen`] and collects the frames
//! cut by the [`Compositor`] into an [`Animation`], which an
//! [`AnimationEncoder`] then writes out.

mod compositor;
mod encoder;
mod quantizer;
mod timeline;

use image::RgbaImage;
use tracing::debug;

use crate::asciicast::Recording;
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::glyph::GlyphRenderer;
use crate::terminal::{Palette, PixelRect, Screen};

pub use compositor::{Compositor, BLINK_INTERVAL};
pub use encoder::{encoder, AnimationEncoder, Format, GifEncoder};
pub use quantizer::Quantizer;
pub use timeline::PauseLimiter;

/// One timed patch of the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Where the patch goes on the canvas
    pub bounds: PixelRect,
    /// Patch pixels, `bounds`-sized
    pub pixels: RgbaImage,
    /// Display time in centiseconds
    pub delay: u16,
}

impl Frame {
    pub fn new(bounds: PixelRect, pixels: RgbaImage, delay: u16) -> Self {
        Self {
            bounds,
            pixels,
            delay,
        }
    }
}

/// An ordered, append-only list of frames over a fixed-size canvas
#[derive(Debug, Clone, Default)]
pub struct Animation {
    width: u32,
    height: u32,
    frames: Vec<Frame>,
}

impl Animation {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            frames: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Sum of all frame delays in centiseconds.
    pub fn total_delay(&self) -> u32 {
        self.frames.iter().map(|f| f.delay as u32).sum()
    }
}

/// Replay `recording` and assemble its animation.
///
/// The palette comes from the recording's theme when it has one, and the
/// header's `idle_time_limit` caps pauses unless `max_pause` is set.
pub fn render<G: GlyphRenderer>(
    recording: &Recording,
    glyphs: G,
    config: &RenderConfig,
) -> Result<Animation, RenderError> {
    let header = &recording.header;
    if let Some(title) = &header.title {
        debug!("Recording title: {}", title);
    }
    let config = &with_idle_limit(config, header.idle_time_limit);
    let palette = header
        .theme
        .as_ref()
        .map_or_else(Palette::default, Palette::from_theme);

    let (width, height) = canvas_size(header.width, header.height, glyphs.cell_size())?;
    let mut screen = Screen::new(header.width, header.height, glyphs, palette);
    debug!(
        "Rendering {}x{} terminal onto {}x{} canvas",
        header.width, header.height, width, height
    );

    let mut animation = Animation::new(width, height);
    Compositor::new(config).run(&recording.events, &mut screen, &mut animation)?;

    debug!(
        "Assembled {} frames, {} cs total",
        animation.len(),
        animation.total_delay()
    );
    Ok(animation)
}

fn with_idle_limit(config: &RenderConfig, idle_time_limit: Option<f64>) -> RenderConfig {
    let mut config = config.clone();
    if config.pause_limit().is_none() {
        if let Some(limit) = idle_time_limit.filter(|limit| *limit > 0.0) {
            debug!("Limiting pauses to {}s from the recording header", limit);
            config.max_pause = limit;
        }
    }
    config
}

/// Largest canvas side a GIF can describe
pub const MAX_CANVAS_SIDE: u32 = u16::MAX as u32;

/// Pixel size of a `cols`x`rows` terminal, checked against the GIF limit
/// before anything is allocated.
fn canvas_size(
    cols: usize,
    rows: usize,
    (cell_width, cell_height): (u32, u32),
) -> Result<(u32, u32), RenderError> {
    let side = |cells: usize, cell: u32| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(cell))
    };
    match (side(cols, cell_width), side(rows, cell_height)) {
        (Some(width), Some(height)) if width <= MAX_CANVAS_SIDE && height <= MAX_CANVAS_SIDE => {
            Ok((width, height))
        }
        (width, height) => Err(RenderError::CanvasTooLarge {
            width: width.unwrap_or(u32::MAX),
            height: height.unwrap_or(u32::MAX),
        }),
    }
}
