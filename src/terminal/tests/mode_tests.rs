use super::{feed, screen, screen_with};

#[test]
fn cursor_starts_visible() {
    assert!(screen(4, 1).cursor().visible);
}

#[test]
fn private_mode_25_toggles_visibility() {
    let mut s = screen_with(4, 1, "\x1b[?25l");
    assert!(!s.cursor().visible);
    feed(&mut s, "\x1b[?25h").unwrap();
    assert!(s.cursor().visible);
}

#[test]
fn visibility_change_is_not_dirty() {
    let mut s = screen(4, 1);
    s.take_dirty();
    feed(&mut s, "\x1b[?25l").unwrap();
    assert_eq!(s.dirty(), None);
}

#[test]
fn allow_listed_modes_are_ignored() {
    let mut s = screen(4, 1);
    for input in [
        "\x1b[?1049h",
        "\x1b[?1049l",
        "\x1b[?12l",
        "\x1b[?1l",
        "\x1b[?1000l",
        "\x1b[?1002l",
        "\x1b[?1003l",
        "\x1b[?1006l",
        "\x1b[?2004h",
    ] {
        feed(&mut s, input).unwrap();
    }
    assert!(s.cursor().visible);
    assert_eq!(s.contents(), "");
}

#[test]
fn multiple_modes_in_one_sequence() {
    let s = screen_with(4, 1, "\x1b[?1049;25l");
    assert!(!s.cursor().visible);
}

#[test]
fn unknown_or_non_private_modes_are_unsupported() {
    let mut s = screen(4, 1);
    assert!(feed(&mut s, "\x1b[?7777h").is_err());
    assert!(feed(&mut s, "\x1b[4h").is_err());
    assert!(feed(&mut s, "\x1b[l").is_err());
}

#[test]
fn rejected_mode_list_changes_nothing() {
    let mut s = screen(4, 1);
    assert!(feed(&mut s, "\x1b[?25;9999l").is_err());
    assert!(s.cursor().visible);
}

#[test]
fn unknown_command_is_unsupported() {
    let mut s = screen(4, 1);
    assert!(feed(&mut s, "\x1b[2A").is_err());
}
