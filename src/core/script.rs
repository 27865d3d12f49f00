//! Line-oriented command language shared by the interactive shell and
//! `run --script`, and the session that executes it against a [`Board`].

use crate::config::Config;
use crate::core::{Board, Change};
use crate::errors::{AppError, AppResult, ValidationError};
use crate::export::{self, ExportFormat};
use crate::models::DragEnd;
use crate::ui::board::{RenderOptions, column_title, render_board};
use crate::ui::messages::{Tone, format_line};
use clap::ValueEnum;
use log::{debug, info};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const PROMPT: &str = "slotboard> ";

pub const HELP: &str = "\
Commands:
  add <sh> <sm> <eh> <em>   create a tag from four numbers, e.g. add 9 0 10 30
  add HH:MM-HH:MM           create a tag from a range, e.g. add 09:00-10:30
  text <anything>           create a tag with a free-text label
  drag <tag> [column]       drop a tag on a column (no column = dropped outside)
  del <tag>                 delete a tag from every column
  show                      print the board
  ids                       toggle id display
  export <json|csv> <file> [force]
                            an existing file is kept unless force is given
  help                      this text
  quit                      leave the session
A tag may be named by its id, its label, Column/label (e.g.
Monday/09:00-10:00), or a unique id prefix of at least 4 hex digits.
Labels win over id prefixes. Quote a tag that contains spaces:
  drag \"lunch break\" mon
  del \"Monday/lunch break\"";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add {
        start_hour: String,
        start_minute: String,
        end_hour: String,
        end_minute: String,
    },
    AddRange(String),
    Text(String),
    Drag {
        entity: String,
        target: Option<String>,
    },
    Del(String),
    Show,
    ToggleIds,
    Export {
        format: ExportFormat,
        file: PathBuf,
        force: bool,
    },
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line. Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<ShellCommand>, String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (head, tail) = line
            .split_once(char::is_whitespace)
            .map(|(h, t)| (h, t.trim()))
            .unwrap_or((line, ""));
        let args: Vec<&str> = tail.split_whitespace().collect();

        let cmd = match head.to_lowercase().as_str() {
            "add" => match args.as_slice() {
                [sh, sm, eh, em] => ShellCommand::Add {
                    start_hour: sh.to_string(),
                    start_minute: sm.to_string(),
                    end_hour: eh.to_string(),
                    end_minute: em.to_string(),
                },
                [] => return Err("usage: add <sh> <sm> <eh> <em> | add HH:MM-HH:MM".into()),
                _ => ShellCommand::AddRange(args.concat()),
            },
            "text" => ShellCommand::Text(tail.to_string()),
            "drag" | "mv" => match split_quoted(tail)?.as_slice() {
                [entity] => ShellCommand::Drag {
                    entity: entity.clone(),
                    target: None,
                },
                [entity, target] => ShellCommand::Drag {
                    entity: entity.clone(),
                    target: match target.to_lowercase().as_str() {
                        "none" | "-" => None,
                        _ => Some(target.clone()),
                    },
                },
                _ => return Err("usage: drag <tag> [column]".into()),
            },
            "del" | "delete" | "rm" => match split_quoted(tail)?.as_slice() {
                [tag] => ShellCommand::Del(tag.clone()),
                _ => return Err("usage: del <tag>".into()),
            },
            "show" | "ls" => ShellCommand::Show,
            "ids" => ShellCommand::ToggleIds,
            "export" => match args.as_slice() {
                [fmt, file, rest @ ..] => {
                    let format = <ExportFormat as ValueEnum>::from_str(fmt, true)
                        .map_err(|_| format!("unknown export format '{fmt}'"))?;
                    let force = match rest {
                        [] => false,
                        ["force"] | ["--force"] | ["-f"] => true,
                        _ => return Err("usage: export <json|csv> <file> [force]".into()),
                    };
                    ShellCommand::Export {
                        format,
                        file: PathBuf::from(file),
                        force,
                    }
                }
                _ => return Err("usage: export <json|csv> <file> [force]".into()),
            },
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => return Err(format!("unknown command '{other}' (try 'help')")),
        };

        Ok(Some(cmd))
    }
}

/// Split on whitespace, keeping `"..."` or `'...'` spans together.
fn split_quoted(text: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut in_token = false;

    for c in text.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quote.is_some() {
        return Err("unterminated quote".into());
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// One board plus the display settings of a running shell or script.
pub struct Session {
    board: Board,
    opts: RenderOptions,
}

impl Session {
    pub fn new(cfg: &Config) -> Self {
        Self {
            board: Board::new(),
            opts: RenderOptions::from(cfg),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn render(&self) -> String {
        render_board(self.board.store(), self.opts)
    }

    /// Read commands until EOF or `quit`.
    ///
    /// Interactive sessions print a prompt and report bad commands without
    /// stopping. Scripts abort on the first malformed line. Invalid time
    /// input never aborts either kind of session.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W, interactive: bool) -> AppResult<()> {
        if interactive {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        for (idx, line) in input.lines().enumerate() {
            let line = line?;
            let flow = match ShellCommand::parse(&line) {
                Ok(Some(cmd)) => match self.execute(cmd, out, interactive) {
                    Ok(flow) => flow,
                    Err(e) if interactive => {
                        writeln!(out, "{}", format_line(Tone::Error, e))?;
                        Flow::Continue
                    }
                    Err(e) => return Err(e),
                },
                Ok(None) => Flow::Continue,
                Err(message) if interactive => {
                    writeln!(out, "{}", format_line(Tone::Error, message))?;
                    Flow::Continue
                }
                Err(message) => {
                    return Err(AppError::Script {
                        line: idx + 1,
                        message,
                    });
                }
            };

            if flow == Flow::Stop {
                break;
            }
            if interactive {
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }
        }

        Ok(())
    }

    pub fn execute<W: Write>(&mut self, cmd: ShellCommand, out: &mut W, interactive: bool) -> AppResult<Flow> {
        debug!("event=command cmd={cmd:?}");

        match cmd {
            ShellCommand::Add {
                start_hour,
                start_minute,
                end_hour,
                end_minute,
            } => {
                let result = self
                    .board
                    .create(&start_hour, &start_minute, &end_hour, &end_minute);
                self.report_created(result, out)?;
            }
            ShellCommand::AddRange(text) => {
                let result = self.board.create_range(&text);
                self.report_created(result, out)?;
            }
            ShellCommand::Text(text) => {
                let result = self.board.create_free(&text);
                self.report_created(result, out)?;
            }
            ShellCommand::Drag { entity, target } => self.drag(&entity, target.as_deref(), out)?,
            ShellCommand::Del(token) => match self.board.store().resolve(&token) {
                Some(id) => {
                    let change = self.board.delete(id);
                    self.report(change, out)?;
                }
                None => writeln!(out, "{}", format_line(Tone::Warning, format!("No tag matches '{token}'")))?,
            },
            ShellCommand::Show => write!(out, "{}", self.render())?,
            ShellCommand::ToggleIds => {
                self.opts.show_ids = !self.opts.show_ids;
                let state = if self.opts.show_ids { "shown" } else { "hidden" };
                writeln!(out, "{}", format_line(Tone::Info, format!("Ids {state}")))?;
            }
            ShellCommand::Export { format, file, force } => {
                let count = export::export_board(self.board.store(), format, &file, force, false)?;
                info!("event=export format={} rows={count} file={}", format.as_str(), file.display());
            }
            ShellCommand::Help => writeln!(out, "{HELP}")?,
            ShellCommand::Quit => return Ok(Flow::Stop),
        }

        if interactive {
            out.flush()?;
        }
        Ok(Flow::Continue)
    }

    fn drag<W: Write>(&mut self, token: &str, target: Option<&str>, out: &mut W) -> AppResult<()> {
        let ignored = |reason: String| format_line(Tone::Warning, format!("{reason}; drop ignored"));

        let Some(id) = self.board.store().resolve(token) else {
            writeln!(out, "{}", ignored(format!("No tag matches '{token}'")))?;
            return Ok(());
        };

        let Some(event) = DragEnd::from_raw(&id.to_string(), target) else {
            return Ok(());
        };
        if let (Some(raw), None) = (target, event.over_id) {
            writeln!(out, "{}", ignored(format!("'{raw}' is not a column")))?;
            return Ok(());
        }

        let change = self.board.drag_end(&event);
        self.report(change, out)
    }

    fn report_created<W: Write>(
        &self,
        result: Result<Change, ValidationError>,
        out: &mut W,
    ) -> AppResult<()> {
        match result {
            Ok(change) => self.report(change, out),
            Err(e) => {
                writeln!(out, "{}", format_line(Tone::Error, AppError::from(e)))?;
                Ok(())
            }
        }
    }

    fn report<W: Write>(&self, change: Change, out: &mut W) -> AppResult<()> {
        let locale = self.opts.locale;
        let line = match change {
            Change::Created(slot) => format_line(
                Tone::Success,
                format!("Created {} [{}]", slot.label, slot.id.short()),
            ),
            Change::Copied { new_id, to } => {
                let label = self
                    .board
                    .store()
                    .get(new_id)
                    .map(|s| s.label.to_string())
                    .unwrap_or_default();
                format_line(
                    Tone::Success,
                    format!("Copied {label} to {} [{}]", column_title(to, locale), new_id.short()),
                )
            }
            Change::Moved { from, to } => format_line(
                Tone::Success,
                format!("Moved from {} to {}", column_title(from, locale), column_title(to, locale)),
            ),
            Change::Deleted(id) => format_line(Tone::Success, format!("Deleted [{}]", id.short())),
            Change::NoOp => format_line(Tone::Info, "Nothing changed"),
        };
        writeln!(out, "{line}")?;
        Ok(())
    }
}
