//! Terminal host for the notepad.
//!
//! # Responsibility
//! - Parse configuration, start logging and open the notes database.
//! - Bind the core controller to stdin/stdout, interactively or one-shot.

mod batch;
mod cli;
mod shell;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use log::info;
use notepad_core::db::open_db;
use notepad_core::{NoteStore, NotepadController, SqliteLocalStorage};
use std::io;
use terminal::TerminalPrompter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(err) = notepad_core::init_logging(cli.log_level(), &cli.log_dir()) {
        eprintln!("warning: file logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok core_version={}",
        notepad_core::core_version()
    );

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open notes database `{}`", cli.db.display()))?;
    let storage = SqliteLocalStorage::try_new(&conn).context("notes database is not usable")?;
    let store = NoteStore::with_key(storage, cli.storage_key.as_str());

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => {
            let prompter = TerminalPrompter::new(io::stdin().lock(), io::stdout());
            let mut controller = NotepadController::start(store, prompter);
            shell::run_shell(&mut controller)
        }
        command => batch::run_batch(command, store, &mut io::stdout().lock()),
    }
}
