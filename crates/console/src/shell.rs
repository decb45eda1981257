//! Line-oriented interactive shell.
//!
//! The shell has two modes. At the top level it creates, searches and lists
//! records. While a record is open it edits that record's drafts until the
//! operator confirms (`ok`) or cancels. Reaching the end of input, or `quit`,
//! saves and exits.

use std::io::{self, BufRead, Write};

use anyhow::Context;

use clubhouse_core::{Marker, Record, RecordId};
use clubhouse_infra::{EditCommand, EditOutcome};

use crate::app::ClubApp;
use crate::command::{EDIT_HELP, EditInput, MAIN_HELP, MainCommand, parse_edit, parse_main};
use crate::surface::{Notice, Surface};

/// One read from the operator.
enum Input {
    Line(String),
    /// A line that is not valid UTF-8.
    Undecodable,
    End,
}

/// Reader/writer pair the operator talks through.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Next input line without its terminator.
    fn read_input(&mut self) -> io::Result<Input> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(Input::End);
        }
        match String::from_utf8(bytes) {
            Ok(line) => Ok(Input::Line(line.trim_end_matches(['\r', '\n']).to_string())),
            Err(err) => {
                tracing::warn!(error = %err, "input line is not valid UTF-8");
                Ok(Input::Undecodable)
            }
        }
    }
}

impl<R: BufRead, W: Write> Surface for Console<R, W> {
    fn prompt(&mut self, message: &str) -> Option<String> {
        if let Err(err) = write!(self.output, "{message}: ").and_then(|()| self.output.flush()) {
            tracing::warn!(error = %err, "failed to write prompt");
            return None;
        }
        match self.read_input() {
            Ok(Input::Line(answer)) => Some(answer.trim().to_string()),
            Ok(Input::Undecodable | Input::End) => None,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read prompt answer");
                None
            }
        }
    }

    fn notify(&mut self, notice: &Notice) {
        if let Err(err) = writeln!(self.output, "{notice}") {
            tracing::warn!(error = %err, "failed to write notice");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<R, W> {
    app: ClubApp,
    console: Console<R, W>,
    editing: Option<RecordId>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(app: ClubApp, input: R, output: W) -> Self {
        Self {
            app,
            console: Console::new(input, output),
            editing: None,
        }
    }

    /// Run until `quit` or end of input, then save. Hands the writer back.
    ///
    /// Members are saved even when the session ends on an I/O error; the
    /// error is returned after the save.
    pub fn run(mut self) -> anyhow::Result<W> {
        let session = self.session();
        self.finish();
        session.context("console I/O failed")?;
        Ok(self.console.output)
    }

    fn session(&mut self) -> io::Result<()> {
        writeln!(self.console.output, "Night club manager. Type `help` for commands.")?;

        loop {
            let label = self.prompt_label();
            write!(self.console.output, "{label}> ")?;
            self.console.output.flush()?;

            let raw = match self.console.read_input()? {
                Input::Line(raw) => raw,
                Input::Undecodable => {
                    writeln!(self.console.output, "Input is not valid UTF-8; line ignored.")?;
                    continue;
                }
                Input::End => {
                    writeln!(self.console.output)?;
                    return Ok(());
                }
            };
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let flow = match self.editing {
                Some(id) => self.handle_edit(id, line)?,
                None => self.handle_main(line)?,
            };
            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn prompt_label(&self) -> &'static str {
        self.editing
            .and_then(|id| self.app.member(id))
            .map_or("club", |member| member.kind().as_str())
    }

    fn handle_main(&mut self, line: &str) -> io::Result<Flow> {
        let command = match parse_main(line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(self.console.output, "{err}")?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            MainCommand::Create(kind) => {
                let id = self.app.create(kind);
                self.editing = Some(id);
                writeln!(
                    self.console.output,
                    "New {} clubber. Fill the fields with `set`, then `ok`.",
                    kind.as_str()
                )?;
                self.show(id)?;
            }
            MainCommand::Search(key) => {
                let found = match key {
                    Some(key) => self.app.search_key(&key, &mut self.console),
                    None => self.app.search(&mut self.console),
                };
                if let Some(id) = found {
                    self.editing = Some(id);
                    self.show(id)?;
                }
            }
            MainCommand::List => self.list()?,
            MainCommand::Help => writeln!(self.console.output, "{MAIN_HELP}")?,
            MainCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn handle_edit(&mut self, id: RecordId, line: &str) -> io::Result<Flow> {
        let input = match parse_edit(line) {
            Ok(input) => input,
            Err(err) => {
                writeln!(self.console.output, "{err}")?;
                return Ok(Flow::Continue);
            }
        };

        match input {
            EditInput::Set { field, value } => {
                self.dispatch(id, EditCommand::SetField { field, value })?
            }
            EditInput::Show => self.show(id)?,
            EditInput::Ok => self.dispatch(id, EditCommand::Confirm)?,
            EditInput::Cancel => self.dispatch(id, EditCommand::Cancel)?,
            EditInput::Help => writeln!(self.console.output, "{EDIT_HELP}")?,
        }
        Ok(Flow::Continue)
    }

    fn dispatch(&mut self, id: RecordId, command: EditCommand) -> io::Result<()> {
        let outcome = match self.app.edit(id, command, &mut self.console) {
            Ok(outcome) => outcome,
            Err(err) => return writeln!(self.console.output, "{err}"),
        };

        match outcome {
            EditOutcome::Drafted => {}
            EditOutcome::Committed => writeln!(self.console.output, "Committed.")?,
            EditOutcome::RolledBack => writeln!(self.console.output, "Changes discarded.")?,
            EditOutcome::Rejected(_) => self.show(id)?,
        }
        if outcome.closes_surface() {
            self.editing = None;
        }
        Ok(())
    }

    fn show(&mut self, id: RecordId) -> io::Result<()> {
        let Some(member) = self.app.member(id) else {
            return Ok(());
        };
        let out = &mut self.console.output;

        writeln!(out, "{} clubber's data", member.kind().label())?;
        for field in member.fields() {
            let label = format!("{}:", field.label());
            let mark = if field.marker() == Marker::Error { " *" } else { "" };
            writeln!(out, "  {label:<13} {}{mark}", field.draft())?;
        }
        Ok(())
    }

    fn list(&mut self) -> io::Result<()> {
        let out = &mut self.console.output;
        if self.app.repository().is_empty() {
            return writeln!(out, "No clubbers.");
        }

        for member in self.app.repository().iter() {
            let kind = member.kind().as_str();
            if member.is_uncommitted() {
                writeln!(out, "  {kind:<8} (uncommitted)")?;
            } else {
                let values: Vec<&str> = member.fields().iter().map(|f| f.committed()).collect();
                writeln!(out, "  {kind:<8} {}", values.join("  "))?;
            }
        }
        Ok(())
    }

    /// Save on the way out. A failed save is reported, never fatal.
    fn finish(&mut self) {
        let notice = match self.app.shutdown() {
            Ok(count) => Notice::Saved { count },
            Err(err) => Notice::SaveFailed {
                reason: err.to_string(),
            },
        };
        self.console.notify(&notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_passes_blank_answers_and_treats_eof_as_dismissed() {
        let mut console = Console::new(Cursor::new("   \n"), Vec::new());
        assert_eq!(console.prompt("key"), Some(String::new()));
        assert_eq!(console.prompt("key"), None);

        let mut console = Console::new(Cursor::new(" 1234567 \n"), Vec::new());
        assert_eq!(console.prompt("key"), Some("1234567".to_string()));
        assert_eq!(String::from_utf8(console.output).unwrap(), "key: ");
    }

    #[test]
    fn undecodable_answer_dismisses_the_prompt() {
        let mut console = Console::new(Cursor::new(b"\xff\xfe\nnext\n".to_vec()), Vec::new());
        assert_eq!(console.prompt("key"), None);
        assert_eq!(console.prompt("key"), Some("next".to_string()));
    }

    #[test]
    fn notify_writes_one_line() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.notify(&Notice::Saved { count: 2 });
        assert_eq!(String::from_utf8(console.output).unwrap(), "Saved 2 clubber(s)\n");
    }
}
