use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` subcommand
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = Config::init_file(cli.config.as_deref(), *force)?;
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
