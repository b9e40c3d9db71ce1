//! One-shot subcommands.
//!
//! Arguments are fed to the controller as canned prompt decisions, so a
//! batch run goes through the same handlers as the interactive shell.

use crate::cli::Command;
use crate::shell::{describe_create, format_list};
use anyhow::{bail, Context, Result};
use notepad_core::{LocalStorage, NoteStore, NotepadController, PromptDecision, ScriptedPrompter};
use std::io::Write;

pub fn run_batch<S, W>(command: Command, store: NoteStore<S>, out: &mut W) -> Result<()>
where
    S: LocalStorage,
    W: Write,
{
    let mut controller = NotepadController::start(store, ScriptedPrompter::new());

    match command {
        Command::Shell => bail!("the shell command runs interactively, not as a batch"),
        Command::List => {
            write!(out, "{}", format_list(controller.list(), controller.selection()))?;
        }
        Command::Show { title } => {
            controller.select(&title).context("cannot show note")?;
            writeln!(out, "{}", controller.editor_text())?;
        }
        Command::New { title } => {
            controller
                .prompter_mut()
                .push(PromptDecision::Value(title));
            let outcome = controller.new_note().context("failed to create note")?;
            write!(out, "{}", describe_create(&outcome))?;
        }
        Command::Edit { title, body } => {
            controller.select(&title).context("cannot edit note")?;
            controller.input(body).context("failed to save note")?;
            writeln!(out, "Saved `{title}`.")?;
        }
        Command::Delete { title, confirm } => {
            controller.select(&title).context("cannot delete note")?;
            controller
                .prompter_mut()
                .push(PromptDecision::Value(confirm));
            controller
                .delete_selected()
                .context("failed to delete note")?;
            for notice in controller.prompter().notices() {
                writeln!(out, "{}", notice.message())?;
            }
        }
    }

    Ok(())
}
