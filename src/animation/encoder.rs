//! Animation encoders.

use std::io::Write;
use std::path::Path;

use gif::{DisposalMethod, Repeat};
use tracing::debug;

use super::Animation;
use crate::config::OutputConfig;
use crate::error::RenderError;

/// Writes an [`Animation`] in some image format.
pub trait AnimationEncoder {
    fn encode(&mut self, animation: &Animation) -> Result<(), RenderError>;
}

/// Output image format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Gif,
}

impl Format {
    /// Format for a file name extension, `None` when unsupported.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.eq_ignore_ascii_case("gif").then_some(Format::Gif)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Gif => write!(f, "gif"),
        }
    }
}

/// Create an encoder for the given format
pub fn encoder<'a, W: Write + 'a>(
    format: Format,
    writer: W,
    config: &OutputConfig,
) -> Box<dyn AnimationEncoder + 'a> {
    match format {
        Format::Gif => Box::new(GifEncoder::new(writer, config)),
    }
}

/// GIF89a encoder writing each frame as a positioned patch.
pub struct GifEncoder<W: Write> {
    writer: W,
    speed: i32,
    repeat: bool,
}

impl<W: Write> GifEncoder<W> {
    pub fn new(writer: W, config: &OutputConfig) -> Self {
        Self {
            writer,
            // NeuQuant only accepts 1..=30
            speed: config.speed.clamp(1, 30),
            repeat: config.repeat,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> AnimationEncoder for GifEncoder<W> {
    fn encode(&mut self, animation: &Animation) -> Result<(), RenderError> {
        let too_large = || RenderError::CanvasTooLarge {
            width: animation.width(),
            height: animation.height(),
        };
        let width = u16::try_from(animation.width()).map_err(|_| too_large())?;
        let height = u16::try_from(animation.height()).map_err(|_| too_large())?;

        let mut encoder = gif::Encoder::new(&mut self.writer, width, height, &[])?;
        if self.repeat {
            encoder.set_repeat(Repeat::Infinite)?;
        }

        for frame in animation.frames() {
            let bounds = frame.bounds;
            // Patches lie inside the canvas, so they fit once the canvas does
            let mut pixels = frame.pixels.as_raw().clone();
            let mut out = gif::Frame::from_rgba_speed(
                bounds.width as u16,
                bounds.height as u16,
                &mut pixels,
                self.speed,
            );
            out.left = bounds.x as u16;
            out.top = bounds.y as u16;
            out.delay = frame.delay;
            // Each patch draws over the ones before it
            out.dispose = DisposalMethod::Keep;
            encoder.write_frame(&out)?;
        }

        encoder.into_inner()?;
        self.writer.flush()?;
        debug!("Encoded {} GIF frames", animation.len());
        Ok(())
    }
}
