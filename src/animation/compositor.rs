//! Blink-tick frame compositor.
//!
//! Time is cut into ticks at every multiple of [`BLINK_INTERVAL`] and at
//! every output event. Each tick that spans a non-zero delay becomes one
//! frame: the part of the canvas that changed since the previous frame,
//! shown for the length of the tick. The cursor blinks by alternating ticks
//! with and without the inverted cursor overlay.

use image::imageops;
use tracing::{debug, trace, warn};

use super::quantizer::Quantizer;
use super::timeline::PauseLimiter;
use super::{Animation, Frame};
use crate::asciicast::Event;
use crate::config::RenderConfig;
use crate::error::{RenderError, SequenceError};
use crate::glyph::GlyphRenderer;
use crate::terminal::{PixelRect, Screen, Tokenizer};

/// Cursor blink half-period in seconds
pub const BLINK_INTERVAL: f64 = 0.5;

const MICROS_PER_SECOND: f64 = 1_000_000.0;
const MICROS_PER_CENTISECOND: u128 = 10_000;

const PROGRESS_INTERVAL: usize = 100;

/// Walks the event timeline and cuts frames from a screen.
pub struct Compositor<'a> {
    config: &'a RenderConfig,
    t_prev: f64,
    /// Escape sequence cut off at the end of the previous output event
    carry: Vec<u8>,
    pauses: PauseLimiter,
    delays: Quantizer,
}

impl<'a> Compositor<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            t_prev: 0.0,
            carry: Vec::new(),
            pauses: PauseLimiter::new(config.pause_limit()),
            delays: Quantizer::new(MICROS_PER_CENTISECOND),
        }
    }

    /// Replay `events` on `screen`, appending frames to `animation`.
    ///
    /// Only output events are replayed; the event index in errors refers to
    /// the position in `events`.
    pub fn run<G: GlyphRenderer>(
        mut self,
        events: &[Event],
        screen: &mut Screen<G>,
        animation: &mut Animation,
    ) -> Result<(), RenderError> {
        let mut last = None;

        for (index, event) in events.iter().enumerate() {
            if index > 0 && index % PROGRESS_INTERVAL == 0 {
                debug!(
                    "Processed {}/{} events, {} frames",
                    index,
                    events.len(),
                    animation.len()
                );
            }
            if !event.is_output() {
                continue;
            }

            let t = self.pauses.adjust(event.time);
            self.advance(t, screen, animation);
            self.feed(index, event, screen)?;
            last = Some((index, event.time));
        }

        if let Some((event, time)) = last {
            if !self.carry.is_empty() {
                return Err(RenderError::UnterminatedSequence {
                    event,
                    time,
                    bytes: std::mem::take(&mut self.carry),
                });
            }
        }

        if self.pauses.skipped() > 0.0 {
            debug!("Shortened pauses by {:.2}s", self.pauses.skipped());
        }
        self.hold(screen, animation);
        Ok(())
    }

    /// Emit one frame per tick between the previous time and `t`.
    fn advance<G: GlyphRenderer>(
        &mut self,
        t: f64,
        screen: &mut Screen<G>,
        animation: &mut Animation,
    ) {
        while self.t_prev < t {
            let phase = (self.t_prev / BLINK_INTERVAL).floor();
            let t_tick = ((phase + 1.0) * BLINK_INTERVAL).min(t);
            let delay = self.quantize(t_tick - self.t_prev);

            // A sub-centisecond tick carries its changes into the next frame
            if delay > 0 {
                let blink_on = phase as u64 % 2 == 0;
                if screen.cursor().visible && blink_on {
                    screen.show_cursor_overlay();
                }
                cut(screen, animation, delay);
                screen.hide_cursor_overlay();
            }

            self.t_prev = t_tick;
        }
    }

    fn quantize(&mut self, seconds: f64) -> u16 {
        let micros = (seconds * MICROS_PER_SECOND).round().max(0.0) as u128;
        let centis = self.delays.next(micros) / MICROS_PER_CENTISECOND;
        u16::try_from(centis).unwrap_or(u16::MAX)
    }

    /// Tokenize one output event, prefixed by any carried partial sequence.
    fn feed<G: GlyphRenderer>(
        &mut self,
        index: usize,
        event: &Event,
        screen: &mut Screen<G>,
    ) -> Result<(), RenderError> {
        let mut bytes = std::mem::take(&mut self.carry);
        if !bytes.is_empty() {
            trace!(
                "Event {}: prepending {} carried bytes {:?}",
                index,
                bytes.len(),
                bytes
            );
        }
        bytes.extend_from_slice(event.data.as_bytes());

        let mut tokens = Tokenizer::new(&bytes);
        for result in tokens.by_ref() {
            if let Err(error) = result.and_then(|token| screen.apply(&token)) {
                self.fault(error, index, event.time)?;
            }
        }

        if let Some(tail) = tokens.incomplete() {
            trace!("Event {}: carrying {} bytes {:?}", index, tail.len(), tail);
            self.carry = tail.to_vec();
        }
        Ok(())
    }

    fn fault(&self, error: SequenceError, event: usize, time: f64) -> Result<(), RenderError> {
        let recoverable = !matches!(error, SequenceError::InvalidUtf8 { .. });
        if recoverable && self.config.lenient {
            warn!("Skipping sequence in event {} (t={}): {}", event, time, error);
            return Ok(());
        }
        Err(RenderError::at_event(error, event, time))
    }

    /// Show the final screen for the configured hold time.
    fn hold<G: GlyphRenderer>(&self, screen: &mut Screen<G>, animation: &mut Animation) {
        if self.config.final_hold <= 0.0 {
            return;
        }
        let centis = (self.config.final_hold * 100.0).round();
        let delay = if centis >= u16::MAX as f64 {
            u16::MAX
        } else {
            centis as u16
        };
        cut(screen, animation, delay);
    }
}

/// Turn the dirty region into a frame and reset it.
fn cut<G: GlyphRenderer>(screen: &mut Screen<G>, animation: &mut Animation, delay: u16) {
    // Nothing changed: a single unchanged pixel keeps the frame's delay
    let bounds = screen
        .take_dirty()
        .unwrap_or_else(|| PixelRect::new(0, 0, 1, 1));
    let pixels = imageops::crop_imm(
        screen.canvas(),
        bounds.x,
        bounds.y,
        bounds.width,
        bounds.height,
    )
    .to_image();
    animation.push(Frame::new(bounds, pixels, delay));
}
