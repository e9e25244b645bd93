//! One line of user input.

use std::str::FromStr;

use thiserror::Error;
use todo_core::Field;

pub const HELP: &str = "\
commands:
  name <text>       set the NAME input (no text clears it)
  email <text>      set the EMAIL input
  username <text>   set the USERNAME input
  create            submit the form
  delete <id>       delete the record with this id
  close             dismiss the confirmation
  reload            fetch the list again
  help              show this text
  quit              leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(Field, String),
    Create,
    Delete(String),
    Close,
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty input")]
    Empty,
    #[error("unknown command {0:?}, type \"help\"")]
    Unknown(String),
    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    /// Field values are taken verbatim after the first space, so leading and
    /// trailing blanks reach the draft untouched.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        match verb {
            "" => Err(CommandError::Empty),
            "name" => Ok(Command::Set(Field::Name, rest.to_string())),
            "email" => Ok(Command::Set(Field::Email, rest.to_string())),
            "username" => Ok(Command::Set(Field::Username, rest.to_string())),
            "create" => Ok(Command::Create),
            "delete" => match rest.trim() {
                "" => Err(CommandError::MissingArgument("delete")),
                id => Ok(Command::Delete(id.to_string())),
            },
            "close" => Ok(Command::Close),
            "reload" => Ok(Command::Reload),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_values_are_verbatim() {
        assert_eq!(
            "name  Ann Lee ".parse(),
            Ok(Command::Set(Field::Name, " Ann Lee ".to_string()))
        );
        assert_eq!(
            "email a@b.com\n".parse(),
            Ok(Command::Set(Field::Email, "a@b.com".to_string()))
        );
    }

    #[test]
    fn bare_field_command_clears() {
        assert_eq!(
            "username".parse(),
            Ok(Command::Set(Field::Username, String::new()))
        );
    }

    #[test]
    fn delete_needs_an_id() {
        assert_eq!("delete 42".parse(), Ok(Command::Delete("42".to_string())));
        assert_eq!(
            "delete  ".parse::<Command>(),
            Err(CommandError::MissingArgument("delete"))
        );
    }

    #[test]
    fn simple_verbs() {
        assert_eq!("create".parse(), Ok(Command::Create));
        assert_eq!("  close".parse(), Ok(Command::Close));
        assert_eq!("reload\r\n".parse(), Ok(Command::Reload));
        assert_eq!("?".parse(), Ok(Command::Help));
        assert_eq!("exit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!("\n".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "edit 1".parse::<Command>(),
            Err(CommandError::Unknown("edit".to_string()))
        );
    }
}
