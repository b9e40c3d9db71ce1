//! Command-line configuration.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "notepad",
    version,
    about = "Keep a small list of titled notes in a local database"
)]
pub struct Cli {
    /// SQLite database file holding the notes
    #[arg(long, env = "NOTEPAD_DB", default_value = "notepad.sqlite3", global = true)]
    pub db: PathBuf,

    /// Storage key the note collection is saved under
    #[arg(long, default_value = notepad_core::DEFAULT_STORAGE_KEY, global = true)]
    pub storage_key: String,

    /// Log level (trace|debug|info|warn|error); defaults by build mode
    #[arg(long, env = "NOTEPAD_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rotated log files
    #[arg(long, env = "NOTEPAD_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or_else(|| notepad_core::default_log_level())
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("notepad-logs"))
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive session (default)
    Shell,
    /// Print all note titles with their list identifiers
    List,
    /// Print one note body
    Show { title: String },
    /// Create a note, or select it when the title exists
    New { title: String },
    /// Replace a note body
    Edit { title: String, body: String },
    /// Delete a note; requires `--confirm DELETE`
    Delete {
        title: String,
        #[arg(long, default_value = "")]
        confirm: String,
    },
}
