//! Integration tests for cast2gif

mod helpers;

mod asciicast_test;
mod cli_test;
mod render_test;
