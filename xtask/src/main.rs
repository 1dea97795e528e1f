//! Development tasks: `cargo run -p xtask -- <task>`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for cast2gif and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

fn generate_man_pages(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let cmd = cast2gif::cli::Cli::command();
    write_page(out_dir, "cast2gif", cmd.clone())?;

    for sub in cmd.get_subcommands() {
        let name = format!("cast2gif-{}", sub.get_name());
        write_page(out_dir, &name, sub.clone())?;
    }
    Ok(())
}

fn write_page(out_dir: &Path, name: &str, cmd: clap::Command) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buffer)?;
    let path = out_dir.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated {}", path.display());
    Ok(())
}
