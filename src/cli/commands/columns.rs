use crate::config::Config;
use crate::errors::AppResult;
use crate::models::ColumnName;
use crate::ui::board::column_title;
use crate::utils::table::{Column, Table};

/// Handle the `columns` subcommand
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut table = Table::new(vec![
        Column::new("COLUMN"),
        Column::new("TITLE"),
        Column::new("ALIASES"),
    ]);

    for name in ColumnName::ALL {
        let mut aliases: Vec<&str> = name.aliases().to_vec();
        if column_title(name, cfg.locale) != name.zh_title() {
            aliases.push(name.zh_title());
        }
        table.add_row(vec![
            name.to_string(),
            column_title(name, cfg.locale).to_string(),
            aliases.join(", "),
        ]);
    }

    print!("{}", table.render(cfg.color));
    Ok(())
}
