//! mealbook library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules (booking core, ledger, configuration).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use core::clock::Clock;
use errors::{AppError, AppResult};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, clock: &Clock) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Book { .. } => cli::commands::book::handle(&cli.command, cfg, clock),
        Commands::Cancel { .. } => cli::commands::cancel::handle(&cli.command, cfg, clock),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg, clock),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, clock),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, clock),
        Commands::Menu { .. } => cli::commands::menu::handle(&cli.command, cfg, clock),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // --data overrides where the ledger, roster and menu images live.
    if let Some(dir) = &cli.data {
        cfg.data_dir = dir.clone();
    }

    let mut clock = Clock::new(cfg.utc_offset_minutes)?;
    if let Some(now) = &cli.now {
        let at = utils::date::parse_datetime(now).ok_or_else(|| AppError::InvalidTime(now.clone()))?;
        clock = clock.fixed_at(at);
    }

    dispatch(&cli, &cfg, &clock)
}
