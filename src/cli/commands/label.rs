use crate::cli::parser::Commands;
use crate::core::TimeLabelFactory;
use crate::errors::AppResult;

/// Handle the `label` subcommand: print `<label> <id>` on success.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Label {
        start_hour,
        start_minute,
        end_hour,
        end_minute,
    } = cmd
    {
        let slot = TimeLabelFactory::create_label(start_hour, start_minute, end_hour, end_minute)?;
        println!("{} {}", slot.label, slot.id);
    }
    Ok(())
}
