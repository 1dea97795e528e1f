//! Shared fixtures and stubs for integration tests

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use image::{Rgba, RgbaImage};
use tempfile::TempDir;

use cast2gif::animation::{Animation, Compositor};
use cast2gif::config::RenderConfig;
use cast2gif::glyph::GlyphRenderer;
use cast2gif::terminal::{Palette, Screen};
use cast2gif::Recording;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn load_fixture(name: &str) -> Recording {
    Recording::parse(fixtures_dir().join(name)).expect("fixture should parse")
}

/// Copy a fixture into a fresh temp directory.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &path).unwrap();
    (temp_dir, path)
}

/// Glyph renderer with 3x5 cells that paints the whole glyph box except a
/// one-pixel border.
#[derive(Debug)]
pub struct StubGlyphs;

impl StubGlyphs {
    pub const WIDTH: u32 = 3;
    pub const HEIGHT: u32 = 5;
}

impl GlyphRenderer for StubGlyphs {
    fn cell_size(&self) -> (u32, u32) {
        (Self::WIDTH, Self::HEIGHT)
    }

    fn draw(&mut self, canvas: &mut RgbaImage, origin: (u32, u32), _ch: char, fg: Rgba<u8>) {
        for y in 1..Self::HEIGHT - 1 {
            canvas.put_pixel(origin.0 + 1, origin.1 + y, fg);
        }
    }
}

/// Replay a recording on a stub screen, returning the final screen too.
pub fn replay(
    recording: &Recording,
    config: &RenderConfig,
) -> Result<(Screen<StubGlyphs>, Animation), cast2gif::RenderError> {
    let palette = recording
        .header
        .theme
        .as_ref()
        .map_or_else(Palette::default, Palette::from_theme);
    let mut screen = Screen::new(
        recording.header.width,
        recording.header.height,
        StubGlyphs,
        palette,
    );
    let (width, height) = screen.canvas().dimensions();
    let mut animation = Animation::new(width, height);
    Compositor::new(config).run(&recording.events, &mut screen, &mut animation)?;
    Ok((screen, animation))
}

/// The cast2gif binary with its config directory pointed at `config_home`.
pub fn cast2gif(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cast2gif").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("RUST_LOG");
    cmd
}
