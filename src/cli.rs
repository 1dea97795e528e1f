//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can generate the man page from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Version string with the commit and build date.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("CAST2GIF_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "cast2gif")]
#[command(author, version, long_version = LONG_VERSION)]
#[command(about = "Render asciicast terminal recordings into animated GIFs")]
#[command(long_about = "Render asciicast terminal recordings into animated GIFs.

The recording is replayed on an emulated terminal and every half-second
blink tick that changed the screen becomes one GIF frame.

Defaults come from the config file (see `cast2gif config path`);
command-line flags override them.

Set RUST_LOG to control log output, e.g. RUST_LOG=cast2gif=trace.")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a recording into an animated GIF
    #[command(long_about = "Render a recording into an animated GIF.

Reads an asciicast v2 or v3 file and writes a GIF next to it (same name,
.gif extension). When reading from stdin the output defaults to
asciinema.gif.

EXAMPLES:
    cast2gif render demo.cast
    cast2gif render demo.cast -o out/demo.gif --max-pause 2
    cat demo.cast | cast2gif render - --font ~/fonts/Mono.ttf")]
    Render(RenderArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Recording to render ("-" or omitted for stdin)
    pub input: Option<PathBuf>,

    /// Output file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Font file (TrueType or OpenType)
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Font size in points
    #[arg(long)]
    pub font_size: Option<f32>,

    /// Resolution used to convert the font size to pixels
    #[arg(long)]
    pub dpi: Option<u32>,

    /// Longest pause between output events, in seconds (0 = unlimited)
    #[arg(short = 'i', long)]
    pub max_pause: Option<f64>,

    /// Hold the final screen for this many seconds
    #[arg(long)]
    pub final_hold: Option<f64>,

    /// Skip unsupported control sequences instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Color quantization speed, 1 (best) to 30 (fastest)
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=30))]
    pub speed: Option<i32>,

    /// Play the animation once instead of looping
    #[arg(long)]
    pub no_loop: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Open configuration in your default editor
    Edit,
    /// Print the configuration file location
    Path,
}
