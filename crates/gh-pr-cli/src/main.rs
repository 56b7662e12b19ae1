use clap::Parser;

mod cli;
mod commands;
mod config;
mod git;
mod resolver;

use cli::{Cli, Command};

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();

    log::debug!("Starting gh-pr");
    if let Err(err) = run(cli).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Diff(args) => commands::diff::run(args).await,
    }
}
