//! Render subcommand handler

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use humansize::{format_size, DECIMAL};
use tracing::{debug, info, warn};

use cast2gif::animation::{encoder, Animation, Format};
use cast2gif::cli::RenderArgs;
use cast2gif::config::OutputConfig;
use cast2gif::glyph::{FontRenderer, GlyphRenderer};
use cast2gif::{Config, Recording};

/// Output name used when the recording comes from stdin
const STDIN_OUTPUT: &str = "asciinema.gif";

#[cfg(not(tarpaulin_include))]
pub fn handle(args: RenderArgs) -> Result<()> {
    let mut config = Config::load()?;
    apply_overrides(&mut config, &args);
    let config = config;

    let input = args.input.as_deref().filter(|p| *p != Path::new("-"));
    let output = output_path(input, args.output.as_deref());
    let format = Format::from_path(&output).with_context(|| {
        format!(
            "Unsupported output format for {} (supported: {})",
            output.display(),
            Format::Gif
        )
    })?;

    let recording = match input {
        Some(path) => Recording::parse(path)?,
        None => Recording::parse_reader(io::stdin().lock())
            .context("Failed to read recording from stdin")?,
    };
    let source = input.map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());
    info!(
        "Rendering {} ({}x{}, {} events, {:.1}s)",
        source,
        recording.header.width,
        recording.header.height,
        recording.events.len(),
        recording.duration()
    );

    let glyphs = FontRenderer::load(&config.render)?;
    let (cell_width, cell_height) = glyphs.cell_size();
    debug!(
        "Font size {:.1}px, cell {}x{}",
        glyphs.pixel_size(),
        cell_width,
        cell_height
    );

    let animation = cast2gif::render(&recording, glyphs, &config.render)
        .with_context(|| format!("Failed to render {}", source))?;

    write_output(&output, format, &animation, &config.output)?;

    let size = fs::metadata(&output).map(|m| m.len()).unwrap_or(0);
    info!(
        "Wrote {} ({} frames, {:.2}s, {})",
        output.display(),
        animation.len(),
        animation.total_delay() as f64 / 100.0,
        format_size(size, DECIMAL)
    );
    Ok(())
}

/// Apply command-line flags on top of the loaded configuration.
fn apply_overrides(config: &mut Config, args: &RenderArgs) {
    let render = &mut config.render;
    if let Some(font) = &args.font {
        render.font_path = Some(font.clone());
    }
    if let Some(size) = args.font_size {
        render.font_size = size;
    }
    if let Some(dpi) = args.dpi {
        render.dpi = dpi;
    }
    if let Some(max_pause) = args.max_pause {
        render.max_pause = max_pause;
    }
    if let Some(hold) = args.final_hold {
        render.final_hold = hold;
    }
    render.lenient |= args.lenient;

    if let Some(speed) = args.speed {
        config.output.speed = speed;
    }
    if args.no_loop {
        config.output.repeat = false;
    }
}

/// Output location: explicit path, else the input with a `.gif` extension.
fn output_path(input: Option<&Path>, output: Option<&Path>) -> PathBuf {
    match (output, input) {
        (Some(output), _) => output.to_path_buf(),
        (None, Some(input)) => input.with_extension("gif"),
        (None, None) => PathBuf::from(STDIN_OUTPUT),
    }
}

/// Encode to `path`, removing the partial file if encoding fails.
fn write_output(
    path: &Path,
    format: Format,
    animation: &Animation,
    config: &OutputConfig,
) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;
    let result = encoder(format, BufWriter::new(file), config).encode(animation);

    if let Err(e) = result {
        if let Err(rm) = fs::remove_file(path) {
            warn!("Failed to remove partial output {:?}: {}", path, rm);
        }
        return Err(e).with_context(|| format!("Failed to write {:?}", path));
    }
    Ok(())
}
