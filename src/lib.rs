//! fieldvisits library root.
//! Exposes the CLI parser, the high-level run() function and the record
//! store with its persistence adapters.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use cli::commands as cmd;

    match &cli.command {
        Commands::Init => cmd::init::handle(cli),
        Commands::Config { .. } => cmd::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cmd::log::handle(&cli.command, cfg),
        Commands::Add { .. } => cmd::add::handle(&cli.command, cfg),
        Commands::Update { .. } | Commands::Status { .. } => cmd::update::handle(&cli.command, cfg),
        Commands::Engage { .. } => cmd::engage::handle(&cli.command, cfg),
        Commands::Complete { .. } => cmd::complete::handle(&cli.command, cfg),
        Commands::Checkin { .. } => cmd::checkin::handle(&cli.command, cfg),
        Commands::Note { .. } => cmd::note::handle(&cli.command, cfg),
        Commands::Del { .. } => cmd::del::handle(&cli.command, cfg),
        Commands::List { .. } | Commands::Chains => cmd::list::handle(&cli.command, cfg),
        Commands::Export { .. } => cmd::export::handle(&cli.command, cfg),
        Commands::Import { .. } => cmd::import::handle(&cli.command, cfg),
        Commands::Team { .. } => cmd::team::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config once
    let mut cfg = Config::load()?;

    // 3. command-line database override
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
