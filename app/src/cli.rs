//! Line commands for the terminal front end.
//!
//! Each line names one input event. Rows are addressed by their 1-based
//! position in the currently painted list.

use crate::app::App;
use crate::input::InputEvent;
use thiserror::Error;

/// Help text printed by `help`
pub const HELP: &str = "\
commands:
  add <title>       add an item
  toggle <n>        toggle row n
  all on|off        mark every item completed / active
  edit <n>          start editing row n
  type <text>       replace the edit field contents
  enter             commit the edit
  esc               cancel the edit
  blur              edit field loses focus
  rm <n>            delete row n
  clear             delete completed items
  filter <route>    show all | active | completed
  help              show this text
  quit              exit";

/// A parsed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Feed an event to the app
    Input(InputEvent),
    /// Print help
    Help,
    /// Leave the loop
    Quit,
    /// Blank line
    Nothing,
}

/// Problems with a typed line; reported and then ignored
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// The first word is not a command
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    /// A required argument is missing or malformed
    #[error("'{command}' expects {expected}")]
    BadArgument {
        /// Command name
        command: &'static str,
        /// Description of the argument
        expected: &'static str,
    },

    /// No visible row at that position
    #[error("no row {0}")]
    NoSuchRow(usize),
}

/// Parse one line against the rows `app` currently shows
///
/// # Errors
///
/// Returns a [`CliError`] describing why the line was not understood.
pub fn interpret(line: &str, app: &App) -> Result<Command, CliError> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let row = |command: &'static str| -> Result<_, CliError> {
        let n: usize = rest.parse().map_err(|_| CliError::BadArgument {
            command,
            expected: "a row number",
        })?;
        app.visible_id(n).ok_or(CliError::NoSuchRow(n))
    };

    let event = match word {
        "" => return Ok(Command::Nothing),
        "help" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        "add" => InputEvent::SubmitNew {
            text: rest.to_string(),
        },
        "toggle" => InputEvent::ToggleOne { id: row("toggle")? },
        "all" => match rest {
            "on" => InputEvent::ToggleAll { checked: true },
            "off" => InputEvent::ToggleAll { checked: false },
            _ => {
                return Err(CliError::BadArgument {
                    command: "all",
                    expected: "'on' or 'off'",
                })
            },
        },
        "edit" => InputEvent::BeginEdit { id: row("edit")? },
        "type" => InputEvent::EditInput {
            text: rest.to_string(),
        },
        "enter" => InputEvent::CommitEdit,
        "esc" => InputEvent::AbortEdit,
        "blur" => InputEvent::FocusLost,
        "rm" => InputEvent::DeleteOne { id: row("rm")? },
        "clear" => InputEvent::ClearCompleted,
        "filter" => InputEvent::ChangeFilter {
            route: rest.to_string(),
        },
        other => return Err(CliError::UnknownCommand(other.to_string())),
    };

    Ok(Command::Input(event))
}
