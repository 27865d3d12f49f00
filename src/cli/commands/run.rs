use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::script::Session;
use crate::errors::{AppError, AppResult};
use crate::export;
use crate::ui::messages::header;
use log::info;
use std::fs::File;
use std::io::{self, BufReader};

/// Handle the `run` subcommand: replay a script, print the final board and
/// optionally export it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Run {
        script,
        export: export_path,
        format,
        force,
    } = cmd
    {
        let file = File::open(script).map_err(|e| {
            AppError::Other(format!("cannot open script '{}': {e}", script.display()))
        })?;
        info!("event=script_start file={}", script.display());

        let mut session = Session::new(cfg);
        let mut stdout = io::stdout();
        session.run(BufReader::new(file), &mut stdout, false)?;

        println!("{}", header("Final board"));
        print!("{}", session.render());

        if let Some(path) = export_path {
            export::export_board(session.board().store(), *format, path, *force, true)?;
        }
    }
    Ok(())
}
