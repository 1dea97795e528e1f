//! Build script for cast2gif - embeds git commit hash and build date
//!
//! When the `release` feature is NOT set (default dev builds):
//! - Emits `VERGEN_GIT_SHA` environment variable with the commit hash
//!
//! When the `release` feature IS set (CI/official builds):
//! - Emits `VERGEN_GIT_SHA=release` (clean version string without git hash)
//!
//! `CAST2GIF_BUILD_DATE` is always emitted.

use std::process::Command;

/// Get the current date in YYYY-MM-DD format
fn get_build_date() -> String {
    // Use the date command for cross-platform compatibility
    if let Ok(output) = Command::new("date").args(["+%Y-%m-%d"]).output() {
        if output.status.success() {
            return String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
    }
    // Fallback for systems where date command differs
    "unknown".to_string()
}

fn main() {
    println!("cargo:rustc-env=CAST2GIF_BUILD_DATE={}", get_build_date());

    #[cfg(feature = "release")]
    println!("cargo:rustc-env=VERGEN_GIT_SHA=release");

    #[cfg(not(feature = "release"))]
    {
        use vergen_gitcl::{Emitter, GitclBuilder};

        // Use graceful fallback if git info is unavailable
        let git_result = GitclBuilder::default().sha(true).build();

        let emit_result = match git_result {
            Ok(git) => Emitter::default()
                .add_instructions(&git)
                .and_then(|emitter| emitter.emit()),
            Err(e) => {
                eprintln!("cargo:warning=Failed to configure git info: {}", e);
                println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
                return;
            }
        };

        if let Err(e) = emit_result {
            // If git info fails (e.g., not in a git repo), emit fallback value
            eprintln!("cargo:warning=Failed to get git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }
}
