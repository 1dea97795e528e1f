//! End-to-end replay and encoding through the library API

use image::Rgba;

use super::helpers::{load_fixture, replay, StubGlyphs};
use cast2gif::animation::{encoder, AnimationEncoder, Format, GifEncoder};
use cast2gif::config::{OutputConfig, RenderConfig};
use cast2gif::terminal::{Color, PixelRect};
use cast2gif::RenderError;

#[test]
fn sample_session_final_screen() {
    let rec = load_fixture("sample_v2.cast");
    let (screen, _) = replay(&rec, &RenderConfig::default()).unwrap();
    insta::assert_snapshot!(screen.contents(), @r"
    $ echo hi
    hi
    $ bye
    ");
    assert!(!screen.cursor().visible);
    assert_eq!(screen.cell(0, 2).unwrap().fg, Color::BrightGreen);
    assert_eq!(screen.cell(2, 2).unwrap().fg, Color::Default);
}

#[test]
fn v2_and_v3_render_alike() {
    let config = RenderConfig::default();
    let (v2_screen, v2) = replay(&load_fixture("sample_v2.cast"), &config).unwrap();
    let (v3_screen, v3) = replay(&load_fixture("sample_v3.cast"), &config).unwrap();
    assert_eq!(v2_screen.contents(), v3_screen.contents());
    assert_eq!(v2.len(), v3.len());
    assert_eq!(v2.total_delay(), v3.total_delay());
}

#[test]
fn delays_add_up_to_recording_length() {
    let rec = load_fixture("sample_v2.cast");
    let (_, animation) = replay(&rec, &RenderConfig::default()).unwrap();
    // Last output event is at 2.0s
    assert_eq!(animation.total_delay(), 200);
    assert!(animation.frames().iter().all(|f| f.delay > 0));
}

#[test]
fn split_escape_recording() {
    let rec = load_fixture("split_escape.cast");
    let (screen, animation) = replay(&rec, &RenderConfig::default()).unwrap();

    insta::assert_snapshot!(screen.to_string(), @r"
    AB
    C
    ");
    assert_eq!(screen.cell(0, 1).unwrap().fg, Color::Red);
    let delays: Vec<u16> = animation.frames().iter().map(|f| f.delay).collect();
    assert_eq!(delays, vec![50, 50, 20]);
}

#[test]
fn themed_recording_uses_theme_palette() {
    let rec = load_fixture("themed.cast");
    let (_, animation) = replay(&rec, &RenderConfig::default()).unwrap();
    assert_eq!(animation.len(), 2);

    let first = &animation.frames()[0];
    assert_eq!(
        *first.pixels.get_pixel(StubGlyphs::WIDTH, 0),
        Rgba([0x20, 0x20, 0x40, 255])
    );

    let second = &animation.frames()[1];
    assert_eq!(
        second.bounds,
        PixelRect::new(0, 0, StubGlyphs::WIDTH, StubGlyphs::HEIGHT)
    );
    assert_eq!(*second.pixels.get_pixel(0, 0), Rgba([0xcc, 0, 0, 255]));
}

#[test]
fn unsupported_sequence_fails_unless_lenient() {
    let rec = load_fixture("unsupported.cast");
    let err = replay(&rec, &RenderConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        RenderError::UnsupportedSequence { event: 1, .. }
    ));

    let lenient = RenderConfig {
        lenient: true,
        ..RenderConfig::default()
    };
    let (screen, _) = replay(&rec, &lenient).unwrap();
    assert_eq!(screen.contents(), "ok!");
}

#[test]
fn unterminated_sequence_is_reported() {
    let rec = load_fixture("unterminated.cast");
    let err = replay(&rec, &RenderConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        RenderError::UnterminatedSequence { event: 1, .. }
    ));
    assert!(err.to_string().contains("unterminated"));
}

#[test]
fn rendered_animation_encodes_to_gif() {
    let rec = load_fixture("sample_v3.cast");
    let animation = cast2gif::render(&rec, StubGlyphs, &RenderConfig::default()).unwrap();
    assert_eq!(animation.width(), 20 * StubGlyphs::WIDTH);
    assert_eq!(animation.height(), 4 * StubGlyphs::HEIGHT);

    let mut encoder = GifEncoder::new(Vec::new(), &OutputConfig::default());
    encoder.encode(&animation).unwrap();
    let bytes = encoder.into_inner();
    assert!(bytes.starts_with(b"GIF89a"));

    assert_eq!(gif_frames(&bytes), animation.len());
}

#[test]
fn encoder_factory_writes_to_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("out.gif");
    let rec = load_fixture("split_escape.cast");
    let animation = cast2gif::render(&rec, StubGlyphs, &RenderConfig::default()).unwrap();

    let file = std::fs::File::create(&path).unwrap();
    encoder(Format::Gif, file, &OutputConfig::default())
        .encode(&animation)
        .unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(gif_frames(&bytes), 3);
}

/// Decode a GIF stream and count its frames.
fn gif_frames(bytes: &[u8]) -> usize {
    use image::AnimationDecoder;

    let decoder = image::codecs::gif::GifDecoder::new(std::io::Cursor::new(bytes)).unwrap();
    decoder.into_frames().count()
}
