mod cli;
mod cli_utils;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG overrides the default warn level; logs go to stderr
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("scorekeep_cli=warn,scorekeep=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let players = args.roster();
    match args.command {
        Command::TopPlayer => commands::top_player::run(&players),
        Command::Simulate { format } => commands::simulate::run(&players, format),
        Command::Rankings { format, output } => {
            commands::rankings::run(&players, format, output.as_deref())
        }
    }
}
