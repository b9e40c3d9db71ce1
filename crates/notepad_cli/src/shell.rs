//! Interactive line-based session.
//!
//! Each command maps to one controller handler, the way list clicks, the
//! editor, and the new/delete buttons drive it in a graphical host.

use crate::terminal::TerminalPrompter;
use anyhow::Result;
use notepad_core::{ControllerError, CreateOutcome, LocalStorage, NoteListView, NotepadController};
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  list             show all notes (* marks the selection)
  show             print the selected note
  select <title>   select a note by title
  open <id>        select a note by list identifier
  new              create a note (asks for a name)
  edit             replace the selected note (end input with a lone '.')
  delete           delete the selected note (asks for confirmation)
  help             show this help
  quit             leave the session";

const EDIT_TERMINATOR: &str = ".";

type ShellController<S, R, W> = NotepadController<S, TerminalPrompter<R, W>>;

/// Renders list rows as `* title  #element_id`.
pub fn format_list(list: &NoteListView, selection: &str) -> String {
    let mut rendered = String::new();
    for entry in list.entries() {
        let marker = if entry.title() == selection { '*' } else { ' ' };
        rendered.push_str(&format!(
            "{marker} {}  #{}\n",
            entry.title(),
            entry.element_id()
        ));
    }
    rendered
}

/// Runs commands from the prompter's input until `quit` or end of input.
pub fn run_shell<S, R, W>(controller: &mut ShellController<S, R, W>) -> Result<()>
where
    S: LocalStorage,
    R: BufRead,
    W: Write,
{
    let rendered = format_list(controller.list(), controller.selection());
    write!(controller.prompter_mut().output(), "{rendered}")?;

    loop {
        write!(controller.prompter_mut().output(), "> ")?;
        controller.prompter_mut().output().flush()?;
        let Some(line) = controller.prompter_mut().read_line()? else {
            writeln!(controller.prompter_mut().output())?;
            break;
        };

        // Only the single separating space is consumed; titles keep their padding.
        let line = line.trim_start();
        let (command, argument) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest),
            None => (line.trim_end(), ""),
        };

        let message = match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => format!("{HELP}\n"),
            "list" | "ls" => format_list(controller.list(), controller.selection()),
            "show" => show_selection(controller),
            "select" => select_with(controller, |c| c.select(argument))?,
            "open" => select_with(controller, |c| c.select_element(argument.trim().trim_start_matches('#')))?,
            "new" => describe_create(&controller.new_note()?),
            "delete" => {
                controller.delete_selected()?;
                show_selection(controller)
            }
            "edit" => {
                let body = read_body(controller.prompter_mut())?;
                controller.input(body)?;
                String::new()
            }
            other => format!("Unknown command `{other}`; type `help`.\n"),
        };
        write!(controller.prompter_mut().output(), "{message}")?;
    }

    Ok(())
}

/// Describes a create outcome for terminal output.
pub fn describe_create(outcome: &CreateOutcome) -> String {
    match outcome {
        CreateOutcome::Cancelled => "No name given; nothing created.\n".to_string(),
        CreateOutcome::Created(title) => format!("Created `{title}`.\n"),
        CreateOutcome::Existing(title) => format!("`{title}` already exists; selected it.\n"),
    }
}

fn show_selection<S, R, W>(controller: &ShellController<S, R, W>) -> String
where
    S: LocalStorage,
    R: BufRead,
    W: Write,
{
    format!(
        "[{}]\n{}\n",
        controller.selection(),
        controller.editor_text()
    )
}

fn select_with<S, R, W, F>(controller: &mut ShellController<S, R, W>, select: F) -> Result<String>
where
    S: LocalStorage,
    R: BufRead,
    W: Write,
    F: FnOnce(&mut ShellController<S, R, W>) -> Result<(), ControllerError>,
{
    match select(controller) {
        Ok(()) => Ok(show_selection(controller)),
        Err(ControllerError::UnknownNote(target)) => Ok(format!("No note matches `{target}`.\n")),
        Err(err) => Err(err.into()),
    }
}

fn read_body<R: BufRead, W: Write>(prompter: &mut TerminalPrompter<R, W>) -> Result<String> {
    writeln!(
        prompter.output(),
        "Enter the note text; finish with a line containing only '{EDIT_TERMINATOR}'."
    )?;
    let mut lines = Vec::new();
    while let Some(line) = prompter.read_line()? {
        if line == EDIT_TERMINATOR {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::run_shell;
    use crate::terminal::TerminalPrompter;
    use notepad_core::{MemoryLocalStorage, NoteStore, NotepadController};
    use std::io::Cursor;

    fn run(seed: &str, script: &str) -> (String, NotepadController<MemoryLocalStorage, TerminalPrompter<Cursor<String>, Vec<u8>>>) {
        let store = NoteStore::new(MemoryLocalStorage::with_item("notes", seed));
        let prompter = TerminalPrompter::new(Cursor::new(script.to_string()), Vec::new());
        let mut controller = NotepadController::start(store, prompter);
        run_shell(&mut controller).unwrap();
        let output = String::from_utf8(controller.prompter_mut().output().clone()).unwrap();
        (output, controller)
    }

    #[test]
    fn new_edit_and_list_through_shell() {
        let (output, controller) = run(
            r#"{"To-Do List":""}"#,
            "new\nGroceries\nedit\nmilk\neggs\n.\nlist\nquit\n",
        );

        assert_eq!(controller.notes().get("Groceries"), Some("milk\neggs"));
        assert!(output.contains("Created `Groceries`."));
        assert!(output.contains("* Groceries  #groceries"));
        assert!(output.contains("  To-Do List  #todolist"));
    }

    #[test]
    fn delete_requires_exact_keyword() {
        let (output, controller) = run(
            r#"{"A":"x","B":"y"}"#,
            "delete\nno\ndelete\nDELETE\n",
        );

        assert!(output.contains("Note not deleted."));
        assert!(output.contains("Note deleted."));
        assert!(!controller.notes().contains("A"));
        assert_eq!(controller.selection(), "B");
    }

    #[test]
    fn select_and_open_report_unknown_targets() {
        let (output, controller) = run(
            r#"{"A":"x","Shopping List":"milk"}"#,
            "select Nope\nopen #shoppinglist\n",
        );

        assert!(output.contains("No note matches `Nope`."));
        assert!(output.contains("[Shopping List]\nmilk\n"));
        assert_eq!(controller.selection(), "Shopping List");
    }

    #[test]
    fn select_keeps_padding_of_stored_title() {
        let (output, controller) = run(r#"{"A":"x"," Padded ":"body"}"#, "select  Padded \n");

        assert_eq!(controller.selection(), " Padded ");
        assert_eq!(controller.editor_text(), "body");
        assert!(output.contains("[ Padded ]\nbody\n"));
    }

    #[test]
    fn end_of_input_while_naming_cancels_creation() {
        let (output, controller) = run(r#"{"A":""}"#, "new\n");

        assert!(output.contains("No name given; nothing created."));
        assert_eq!(controller.notes().len(), 1);
    }
}
