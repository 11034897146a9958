use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod args;
mod commands;
mod config;
mod status;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("LOG")
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "info" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Check(args) => commands::check::check(&cli, args),
        Commands::Render(args) => commands::render::render(&cli, args),
        Commands::Export(args) => commands::export::export(&cli, args),
        Commands::Options => commands::options::options(&cli),
    }
}
