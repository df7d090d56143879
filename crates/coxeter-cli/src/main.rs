//! Coxeter CLI: the `coxeter` command.

mod cli;
mod commands;
mod config;
mod support;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Matrix { cartan, file, json } => commands::matrix::run(cartan, file, json),

        Commands::Inversions { system, word, json } => {
            commands::inversions::run(system, word, json)
        }

        Commands::Verify { system, word, json } => commands::verify::run(system, word, json),

        Commands::Reflection { system, word, json } => {
            commands::reflection::run(system, word, json)
        }
    }
}

/// Diagnostics go to stderr so `--json` output on stdout stays parseable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
