//! Recording decoder tests against fixture files

use super::helpers::{fixtures_dir, load_fixture, temp_fixture};
use cast2gif::asciicast::EventType;
use cast2gif::Recording;

#[test]
fn v2_and_v3_fixtures_describe_the_same_session() {
    let v2 = load_fixture("sample_v2.cast");
    let v3 = load_fixture("sample_v3.cast");

    assert_eq!((v2.header.width, v2.header.height), (20, 4));
    assert_eq!((v3.header.width, v3.header.height), (20, 4));
    assert_eq!(v2.events.len(), v3.events.len());

    for (a, b) in v2.events.iter().zip(&v3.events) {
        assert_eq!(a.event_type, b.event_type);
        assert_eq!(a.data, b.data);
        assert!((a.time - b.time).abs() < 1e-9, "{} != {}", a.time, b.time);
    }
}

#[test]
fn input_events_are_not_outputs() {
    let rec = load_fixture("sample_v2.cast");
    assert_eq!(rec.events[3].event_type, EventType::Input);
    assert_eq!(rec.outputs().len(), 4);
}

#[test]
fn escapes_decode_from_json() {
    let rec = load_fixture("split_escape.cast");
    assert!(rec.events[0].data.ends_with("\x1b["));
    assert_eq!(rec.events[1].event_type, EventType::Marker);
}

#[test]
fn theme_palette_is_expanded() {
    let rec = load_fixture("themed.cast");
    let theme = rec.header.theme.expect("theme");
    assert_eq!(theme.palette.len(), 16);
    assert_eq!(theme.bg, image::Rgb([0x20, 0x20, 0x40]));
}

#[test]
fn parse_from_path_and_reader_agree() {
    let (_dir, path) = temp_fixture("sample_v3.cast");
    let from_path = Recording::parse(&path).unwrap();
    let file = std::fs::File::open(&path).unwrap();
    let from_reader = Recording::parse_reader(std::io::BufReader::new(file)).unwrap();
    assert_eq!(from_path.events, from_reader.events);
    assert_eq!(from_path.header, from_reader.header);
}

#[test]
fn missing_file_names_the_path() {
    let path = fixtures_dir().join("does-not-exist.cast");
    let err = Recording::parse(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("does-not-exist.cast"));
}
