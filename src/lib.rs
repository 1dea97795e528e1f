//! cast2gif - render asciicast terminal recordings into animated GIFs
//!
//! The pipeline: [`asciicast::Recording`] events are replayed on a
//! [`terminal::Screen`], the [`animation::Compositor`] cuts a frame per blink
//! tick from the screen's dirty region, and an
//! [`animation::AnimationEncoder`] writes the result.

pub mod animation;
pub mod asciicast;
pub mod cli;
pub mod config;
pub mod error;
pub mod glyph;
pub mod terminal;

pub use animation::{render, Animation, Frame};
pub use asciicast::Recording;
pub use config::Config;
pub use error::{RenderError, SequenceError};
