//! Command-line tests running the cast2gif binary

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{cast2gif, temp_fixture};

#[test]
fn version_includes_build_info() {
    let home = TempDir::new().unwrap();
    cast2gif(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("cast2gif "));
}

#[test]
fn config_path_uses_config_dir() {
    let home = TempDir::new().unwrap();
    cast2gif(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cast2gif").and(predicate::str::ends_with("config.toml\n")));
}

#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();
    cast2gif(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[render]"))
        .stdout(predicate::str::contains("dpi = 144"))
        .stdout(predicate::str::contains("[output]"));
}

#[test]
fn invalid_config_file_is_reported() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("cast2gif");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[render]\ndpi = \"lots\"\n").unwrap();

    cast2gif(home.path())
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn missing_input_fails() {
    let home = TempDir::new().unwrap();
    cast2gif(home.path())
        .args(["render", "/nonexistent/demo.cast"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open file"));
}

#[test]
fn unsupported_output_extension_fails() {
    let home = TempDir::new().unwrap();
    let (dir, input) = temp_fixture("sample_v2.cast");
    let output = dir.path().join("out.png");

    cast2gif(home.path())
        .arg("render")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported output format"));
    assert!(!output.exists());
}

#[test]
fn missing_font_fails_without_output() {
    let home = TempDir::new().unwrap();
    let (dir, input) = temp_fixture("sample_v2.cast");

    cast2gif(home.path())
        .arg("render")
        .arg(&input)
        .args(["--font", "/nonexistent/font.ttf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot load font"));
    assert!(!dir.path().join("sample_v2.gif").exists());
}

#[test]
fn speed_out_of_range_is_rejected() {
    let home = TempDir::new().unwrap();
    cast2gif(home.path())
        .args(["render", "x.cast", "--speed", "0"])
        .assert()
        .failure();
}

#[test]
fn renders_next_to_input() {
    let home = TempDir::new().unwrap();
    let (dir, input) = temp_fixture("sample_v3.cast");

    cast2gif(home.path())
        .arg("render")
        .arg(&input)
        .args(["--dpi", "72"])
        .assert()
        .success();

    let bytes = fs::read(dir.path().join("sample_v3.gif")).unwrap();
    assert!(bytes.starts_with(b"GIF89a"));
}

#[test]
fn renders_stdin_to_asciinema_gif() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let content = fs::read_to_string(super::helpers::fixtures_dir().join("split_escape.cast"))
        .unwrap();

    cast2gif(home.path())
        .current_dir(work.path())
        .args(["render", "-", "--no-loop"])
        .write_stdin(content)
        .assert()
        .success();

    assert!(work.path().join("asciinema.gif").is_file());
}

#[test]
fn render_failure_exits_nonzero() {
    let home = TempDir::new().unwrap();
    let (dir, input) = temp_fixture("unsupported.cast");

    cast2gif(home.path())
        .arg("render")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("ESC[5n"));
    assert!(!dir.path().join("unsupported.gif").exists());

    cast2gif(home.path())
        .arg("render")
        .arg(&input)
        .arg("--lenient")
        .assert()
        .success();
    assert!(dir.path().join("unsupported.gif").is_file());
}
