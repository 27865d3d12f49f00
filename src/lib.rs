//! rSlotBoard library root.
//! Exposes the board logic (label factory, column store, placement rules),
//! the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Label { .. } => cli::commands::label::handle(&cli.command),
        Commands::Columns => cli::commands::columns::handle(cfg),
        Commands::Shell => cli::commands::shell::handle(cfg),
        Commands::Run { .. } => cli::commands::run::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once (plain defaults in test mode)
    let cfg = if cli.test {
        Config {
            color: false,
            ..Config::default()
        }
    } else {
        Config::load(cli.config.as_deref())?
    };

    // 3️⃣ logging and output style
    let level = if cli.verbose { "debug" } else { cfg.log_level.as_str() };
    logging::init_logging(level, cfg.log_dir.as_deref().map(Path::new))?;
    ui::messages::set_color(cfg.color);

    // 4️⃣ dispatch
    dispatch(&cli, &cfg)
}
