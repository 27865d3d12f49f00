//! Text rendering of the board: the generator pool on its own block, then
//! the seven weekdays side by side.

use crate::config::{Config, Locale};
use crate::core::ColumnStore;
use crate::models::{ColumnName, TimeSlot};
use crate::utils::colors;
use crate::utils::table::{Column, Table};
use chrono::{Datelike, Local};

const POOL_WIDTH: usize = 78;
const CELL_WIDTH: usize = 18;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub locale: Locale,
    pub show_ids: bool,
    pub color: bool,
}

impl From<&Config> for RenderOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            locale: cfg.locale,
            show_ids: cfg.show_ids,
            color: cfg.color,
        }
    }
}

pub fn column_title(name: ColumnName, locale: Locale) -> &'static str {
    match locale {
        Locale::En => name.as_str(),
        Locale::Zh => name.zh_title(),
    }
}

fn chip(slot: &TimeSlot, show_ids: bool) -> String {
    if show_ids {
        format!("[{}] {}", slot.id.short(), slot.label)
    } else {
        format!("[{}]", slot.label)
    }
}

pub fn render_board(store: &ColumnStore, opts: RenderOptions) -> String {
    let mut out = String::new();

    // generator pool
    let pool = store.column(ColumnName::Generator);
    out.push_str(&colors::paint(
        column_title(ColumnName::Generator, opts.locale),
        colors::BOLD,
        opts.color,
    ));
    out.push('\n');
    if pool.is_empty() {
        out.push_str(&colors::dim("  (empty)", opts.color));
        out.push('\n');
    } else {
        let chips: Vec<String> = pool.iter().map(|s| chip(s, opts.show_ids)).collect();
        let wrap_opts = textwrap::Options::new(POOL_WIDTH)
            .initial_indent("  ")
            .subsequent_indent("  ");
        for line in textwrap::wrap(&chips.join(" "), wrap_opts) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out.push('\n');

    // weekdays
    let today = ColumnName::from_weekday(Local::now().weekday());
    let columns = ColumnName::WEEKDAYS
        .iter()
        .map(|&day| {
            let mut col = Column::new(column_title(day, opts.locale));
            col.highlight = day == today;
            col
        })
        .collect();
    let mut table = Table::new(columns);

    let cells: Vec<Vec<String>> = ColumnName::WEEKDAYS
        .iter()
        .map(|&day| {
            store
                .column(day)
                .iter()
                .flat_map(|s| {
                    textwrap::wrap(&chip(s, opts.show_ids), CELL_WIDTH)
                        .into_iter()
                        .map(|l| l.into_owned())
                        .collect::<Vec<_>>()
                })
                .collect()
        })
        .collect();

    let height = cells.iter().map(Vec::len).max().unwrap_or(0);
    for row in 0..height {
        table.add_row(
            cells
                .iter()
                .map(|lines| lines.get(row).cloned().unwrap_or_default())
                .collect(),
        );
    }

    out.push_str(&table.render(opts.color));
    out
}
