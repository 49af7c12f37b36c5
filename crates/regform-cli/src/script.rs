//! Line-oriented input for `regform fill`.
//!
//! Each non-empty line is one input event:
//!
//! ```text
//! set <field> <value...>     type into a field (empty value clears it)
//! gender <Male|Female|Other> pick a gender
//! country <name...>          pick a country
//! state <name...>            pick a state
//! city <name...>             pick a city
//! toggle                     show/hide the location section
//! submit                     submit the form
//! show                       render the form
//! help                       list commands
//! quit                       stop reading input
//! ```
//!
//! Lines starting with `#` are ignored.

use thiserror::Error;

use regform_core::FormMessage;
use regform_model::{Field, ModelError};

pub const HELP: &str = "\
commands:
  set <field> <value...>     type into a field (empty value clears it)
  gender <Male|Female|Other> pick a gender
  country <name...>          pick a country
  state <name...>            pick a state
  city <name...>             pick a city
  toggle                     show/hide the location section
  submit                     submit the form
  show                       render the form
  help                       list commands
  quit                       stop reading input";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown command: {0} (try `help`)")]
    UnknownCommand(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error(transparent)]
    Field(#[from] ModelError),
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Message(FormMessage),
    Show,
    Help,
    Quit,
}

/// Parse one input line. Blank lines and comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (command, rest) = split_word(line);
    let command = command.to_lowercase();

    let parsed = match command.as_str() {
        "set" => {
            let (field, value) = split_word(rest);
            if field.is_empty() {
                return Err(ScriptError::MissingArgument("set"));
            }
            let field: Field = field.parse()?;
            ScriptCommand::Message(FormMessage::field_changed(field, value))
        }
        "gender" => ScriptCommand::Message(FormMessage::field_changed(
            Field::Gender,
            required(rest, "gender")?,
        )),
        "country" => {
            ScriptCommand::Message(FormMessage::CountrySelected(required(rest, "country")?))
        }
        "state" => ScriptCommand::Message(FormMessage::StateSelected(required(rest, "state")?)),
        "city" => ScriptCommand::Message(FormMessage::CitySelected(required(rest, "city")?)),
        "toggle" => ScriptCommand::Message(FormMessage::LocationSectionToggled),
        "submit" => ScriptCommand::Message(FormMessage::Submit),
        "show" => ScriptCommand::Show,
        "help" | "?" => ScriptCommand::Help,
        "quit" | "exit" => ScriptCommand::Quit,
        _ => return Err(ScriptError::UnknownCommand(command)),
    };
    Ok(Some(parsed))
}

/// Parse a `key=value` field assignment, as taken by `regform check`.
pub fn parse_assignment(raw: &str) -> Result<(Field, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected <field>=<value>, got {raw:?}"))?;
    let field = key.parse::<Field>().map_err(|error| error.to_string())?;
    Ok((field, value.to_string()))
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

fn required(value: &str, command: &'static str) -> Result<String, ScriptError> {
    if value.is_empty() {
        Err(ScriptError::MissingArgument(command))
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_keeps_spaces_in_value() {
        let parsed = parse_line("set permanentAddress  12 Main Street, Pune ").unwrap();
        assert_eq!(
            parsed,
            Some(ScriptCommand::Message(FormMessage::field_changed(
                Field::PermanentAddress,
                "12 Main Street, Pune"
            )))
        );
    }

    #[test]
    fn test_set_without_value_clears() {
        let parsed = parse_line("set dob").unwrap();
        assert_eq!(
            parsed,
            Some(ScriptCommand::Message(FormMessage::field_changed(
                Field::DateOfBirth,
                ""
            )))
        );
    }

    #[test]
    fn test_selection_commands() {
        assert_eq!(
            parse_line("city San Francisco").unwrap(),
            Some(ScriptCommand::Message(FormMessage::CitySelected(
                "San Francisco".to_string()
            )))
        );
        assert_eq!(
            parse_line("TOGGLE").unwrap(),
            Some(ScriptCommand::Message(FormMessage::LocationSectionToggled))
        );
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# fill personal details").unwrap(), None);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_line("dance").unwrap_err(),
            ScriptError::UnknownCommand("dance".to_string())
        );
        assert_eq!(
            parse_line("country").unwrap_err(),
            ScriptError::MissingArgument("country")
        );
        assert!(matches!(
            parse_line("set nickname Bob").unwrap_err(),
            ScriptError::Field(ModelError::UnknownField(_))
        ));
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("email=a=b@c.de").unwrap(),
            (Field::Email, "a=b@c.de".to_string())
        );
        assert!(parse_assignment("email").is_err());
        assert!(parse_assignment("shoe=42").is_err());
    }
}
