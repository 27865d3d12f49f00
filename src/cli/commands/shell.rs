use crate::config::Config;
use crate::core::script::Session;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use std::io;

/// Handle the `shell` subcommand: an interactive session on stdin.
pub fn handle(cfg: &Config) -> AppResult<()> {
    println!("{}", header("rSlotBoard"));
    info("Type 'help' for commands, 'quit' to leave. Nothing is saved.");

    let mut session = Session::new(cfg);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout, true)?;

    println!();
    print!("{}", session.render());
    Ok(())
}
