//! Parsing of shell input lines.

use thiserror::Error;

use clubhouse_members::{FieldName, MemberKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    Invalid(String),
}

/// Commands available outside any record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainCommand {
    Create(MemberKind),
    /// Search with an inline key, or prompt for one.
    Search(Option<String>),
    List,
    Help,
    Quit,
}

/// Commands available while a record is open for editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditInput {
    Set { field: FieldName, value: String },
    Show,
    Ok,
    Cancel,
    Help,
}

pub const MAIN_HELP: &str = "\
commands:
  create <person|soldier|student>   open a new blank record
  search [key]                      find a record by id, personal number or student id
  list                              show every record
  help                              show this help
  quit                              save and exit";

pub const EDIT_HELP: &str = "\
editing commands:
  set <field> <value>   change a draft (fields: id, name, surname, tel, personal, student-id)
  show                  show the drafts; invalid fields are marked with *
  ok                    validate and commit, then close the record
  cancel                discard changes and close the record
  help                  show this help";

fn split_word(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    }
}

pub fn parse_main(line: &str) -> Result<MainCommand, ParseError> {
    let (word, rest) = split_word(line);
    match word.to_ascii_lowercase().as_str() {
        "create" | "new" => {
            if rest.is_empty() {
                return Err(ParseError::Usage("create <person|soldier|student>"));
            }
            let kind = rest
                .parse::<MemberKind>()
                .map_err(|e| ParseError::Invalid(e.to_string()))?;
            Ok(MainCommand::Create(kind))
        }
        "search" | "find" => Ok(MainCommand::Search(
            (!rest.is_empty()).then(|| rest.to_string()),
        )),
        "list" | "ls" => Ok(MainCommand::List),
        "help" | "?" => Ok(MainCommand::Help),
        "quit" | "exit" => Ok(MainCommand::Quit),
        _ => Err(ParseError::UnknownCommand(word.to_string())),
    }
}

pub fn parse_edit(line: &str) -> Result<EditInput, ParseError> {
    let (word, rest) = split_word(line);
    match word.to_ascii_lowercase().as_str() {
        "set" => {
            let (field, value) = split_word(rest);
            if field.is_empty() {
                return Err(ParseError::Usage("set <field> <value>"));
            }
            let field = field
                .parse::<FieldName>()
                .map_err(|e| ParseError::Invalid(e.to_string()))?;
            Ok(EditInput::Set {
                field,
                value: value.to_string(),
            })
        }
        "show" => Ok(EditInput::Show),
        "ok" => Ok(EditInput::Ok),
        "cancel" => Ok(EditInput::Cancel),
        "help" | "?" => Ok(EditInput::Help),
        _ => Err(ParseError::UnknownCommand(word.to_string())),
    }
}
