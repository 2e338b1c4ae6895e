//! Parsing of the line-oriented commands typed at the prompt.

use thiserror::Error;
use todo_core::TodoId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add {
        title: String,
        description: String,
    },
    Toggle(TodoId),
    Delete(TodoId),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),

    #[error("`{0}` needs {1}")]
    MissingArgument(&'static str, &'static str),

    #[error("`{0}` is not a todo id")]
    InvalidId(String),
}

pub const HELP: &str = "\
commands:
  list                          reload todos from the server
  add <title> [| <description>] create a todo
  toggle <id>                   flip the completion flag
  delete <id>                   delete a todo (asks first)
  help                          show this text
  quit                          exit";

impl Command {
    /// Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "list" | "ls" => Command::List,
            "add" => {
                let (title, description) = match rest.split_once('|') {
                    Some((title, description)) => (title.trim(), description.trim()),
                    None => (rest, ""),
                };
                if title.is_empty() {
                    return Err(CommandError::MissingArgument("add", "a title"));
                }
                Command::Add {
                    title: title.to_string(),
                    description: description.to_string(),
                }
            }
            "toggle" | "done" => Command::Toggle(parse_id("toggle", rest)?),
            "delete" | "rm" => Command::Delete(parse_id("delete", rest)?),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_id(verb: &'static str, arg: &str) -> Result<TodoId, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument(verb, "an id"));
    }
    arg.parse()
        .map_err(|_| CommandError::InvalidId(arg.to_string()))
}
