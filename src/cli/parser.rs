use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rSlotBoard
/// Create time-slot tags and drag them onto the days of the week
#[derive(Parser)]
#[command(
    name = "rslotboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small weekly board: create time-slot tags and drag them onto weekdays",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run in test mode (ignore the user configuration file)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print debug diagnostics on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Validate a time slot and print its normalized label
    Label {
        /// Start hour (0-23)
        start_hour: String,
        /// Start minute (0-59)
        start_minute: String,
        /// End hour (0-23)
        end_hour: String,
        /// End minute (0-59)
        end_minute: String,
    },

    /// List board columns and the names accepted for them
    Columns,

    /// Start an interactive board session on stdin
    Shell,

    /// Execute a command script against a fresh board
    Run {
        /// Script file, one shell command per line
        #[arg(long, short = 's', value_name = "FILE")]
        script: PathBuf,

        /// Export the final board to this file
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Overwrite the export file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
