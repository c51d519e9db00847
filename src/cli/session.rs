//! Interactive session commands
//!
//! One command per line on stdin stands in for the screen's id field,
//! channel selector and buttons.

use std::str::FromStr;

use thiserror::Error;

/// Help text listing the session commands
pub const SESSION_HELP: &str = "\
Commands:
  show <id> [channel]   post notification <id> (channel index 0-3)
  cancel <id>           cancel notification <id>
  tap <id>              tap notification <id>, relaunching the screen
  channels              list the channel selector entries
  list                  list visible notification ids
  help                  show this help
  quit                  end the session";

/// Errors from parsing a session line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionCommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: \"{0}\". Type 'help' for a list of commands")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// A parsed session line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Press "show" with the id field holding `id_text`
    Show {
        id_text: String,
        channel: Option<i32>,
    },
    /// Press "cancel" with the id field holding `id_text`
    Cancel { id_text: String },
    /// Tap a visible notification
    Tap { notification_id: i32 },
    Channels,
    List,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = SessionCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Err(SessionCommandError::Empty);
        };

        match command.to_lowercase().as_str() {
            "show" => {
                // A missing id is an empty id field
                let id_text = parts.next().unwrap_or_default().to_string();
                let channel = parts
                    .next()
                    .map(|c| c.parse::<i32>())
                    .transpose()
                    .map_err(|_| SessionCommandError::Usage("show <id> [channel]"))?;
                Ok(Self::Show { id_text, channel })
            }
            "cancel" => Ok(Self::Cancel {
                id_text: parts.next().unwrap_or_default().to_string(),
            }),
            "tap" => parts
                .next()
                .and_then(|id| id.parse::<i32>().ok())
                .map(|notification_id| Self::Tap { notification_id })
                .ok_or(SessionCommandError::Usage("tap <id>")),
            "channels" => Ok(Self::Channels),
            "list" => Ok(Self::List),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(SessionCommandError::Unknown(command.to_string())),
        }
    }
}
