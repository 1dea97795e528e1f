//! Error types for the emulation core and the render pipeline.

use std::path::PathBuf;

/// Errors produced while tokenizing or applying a single chunk of output.
///
/// These carry no position information; the compositor wraps them into a
/// [`RenderError`] with the event index and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    #[error("invalid UTF-8 in output: {bytes:?}")]
    InvalidUtf8 { bytes: Vec<u8> },

    #[error("unknown escape sequence: {bytes:?}")]
    UnknownEscape { bytes: Vec<u8> },

    #[error("unsupported sequence {sequence}: {reason}")]
    Unsupported {
        sequence: String,
        reason: &'static str,
    },
}

/// Errors that abort a render run.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("cannot decode output of event {event} (t={time}): invalid UTF-8 {bytes:?}")]
    Decode {
        event: usize,
        time: f64,
        bytes: Vec<u8>,
    },

    #[error("unsupported control sequence in event {event} (t={time}): {message}")]
    UnsupportedSequence {
        event: usize,
        time: f64,
        message: String,
    },

    #[error("unterminated escape sequence at end of recording (event {event}, t={time}): {bytes:?}")]
    UnterminatedSequence {
        event: usize,
        time: f64,
        bytes: Vec<u8>,
    },

    #[error("cannot load font {}: {message}", path.display())]
    Font { path: PathBuf, message: String },

    #[error("canvas of {width}x{height} pixels exceeds the GIF size limit of 65535x65535")]
    CanvasTooLarge { width: u32, height: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to encode animation: {0}")]
    Encode(#[from] gif::EncodingError),
}

impl RenderError {
    /// Wrap a [`SequenceError`] with the position it occurred at.
    pub fn at_event(error: SequenceError, event: usize, time: f64) -> Self {
        match error {
            SequenceError::InvalidUtf8 { bytes } => RenderError::Decode { event, time, bytes },
            other => RenderError::UnsupportedSequence {
                event,
                time,
                message: other.to_string(),
            },
        }
    }
}
