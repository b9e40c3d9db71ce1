//! Line-oriented terminal host for user prompts and notices.

use log::warn;
use notepad_core::{Notice, PromptDecision, PromptRequest, Prompter};
use std::io::{self, BufRead, Write};

/// Prompter reading answers from `input` and writing to `output`.
///
/// End of input answers every prompt with `Cancelled`.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads one line without its terminator; `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    fn write_prompt(&mut self, request: &PromptRequest) -> io::Result<()> {
        if let PromptRequest::DeleteConfirmation { title } = request {
            writeln!(self.output, "Deleting `{title}`.")?;
        }
        write!(self.output, "{} ", request.message())?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask(&mut self, request: &PromptRequest) -> PromptDecision {
        let answer = self.write_prompt(request).and_then(|()| self.read_line());
        match answer {
            Ok(Some(text)) => PromptDecision::Value(text),
            Ok(None) => PromptDecision::Cancelled,
            Err(err) => {
                warn!("event=prompt_read module=cli status=error error={err}");
                PromptDecision::Cancelled
            }
        }
    }

    fn notify(&mut self, notice: Notice) {
        if let Err(err) = writeln!(self.output, "{}", notice.message()) {
            warn!("event=notice_write module=cli status=error error={err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TerminalPrompter;
    use notepad_core::{Notice, PromptDecision, PromptRequest, Prompter};
    use std::io::Cursor;

    #[test]
    fn ask_returns_line_without_terminator_and_cancels_at_eof() {
        let mut prompter = TerminalPrompter::new(Cursor::new("Groceries\r\n"), Vec::new());

        assert_eq!(
            prompter.ask(&PromptRequest::NoteName),
            PromptDecision::value("Groceries")
        );
        assert_eq!(prompter.ask(&PromptRequest::NoteName), PromptDecision::Cancelled);

        let written = String::from_utf8(prompter.output().clone()).unwrap();
        assert_eq!(written, "Note Name Note Name ");
    }

    #[test]
    fn notify_prints_notice_message() {
        let mut prompter = TerminalPrompter::new(Cursor::new(""), Vec::new());
        prompter.notify(Notice::NoteNotDeleted);
        assert_eq!(String::from_utf8(prompter.output().clone()).unwrap(), "Note not deleted.\n");
    }
}
