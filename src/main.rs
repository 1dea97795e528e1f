//! cast2gif CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use cast2gif::cli::{Cli, Commands, ConfigCommands};

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_filter = if verbose {
        "cast2gif=debug,warn"
    } else {
        "cast2gif=info,warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render(args) => commands::render::handle(args),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
    }
}
