//! Console command parsing
//!
//! One command per line. Transport commands become control intents; the
//! rest drive lifecycle events the OS would normally deliver.

use crate::error::{HostError, Result};
use soul_core::types::ControlCommand;
use soul_session::{ControlIntent, KeyAction, KeyCode, KeyEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Deliver a control intent
    Intent(ControlIntent),
    /// Queue an item by source locator
    Queue { uri: String, title: String },
    /// Force a foreground promotion attempt
    Promote,
    /// The host UI task was swiped away
    RemoveTask,
    /// Print player and session state
    Status,
    /// Drop the resume record
    Forget,
    /// Shut down and exit
    Quit,
}

impl HostCommand {
    /// Parse one input line; `None` for a blank line
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match name.to_ascii_lowercase().as_str() {
            "play" => Self::command(ControlCommand::Play),
            "pause" => Self::command(ControlCommand::Pause),
            "toggle" => Self::command(ControlCommand::TogglePlayPause),
            "stop" => Self::command(ControlCommand::Stop),
            "next" => Self::command(ControlCommand::SkipNext),
            "prev" | "previous" => Self::command(ControlCommand::SkipPrevious),
            "ff" => Self::command(ControlCommand::SeekForward),
            "rw" => Self::command(ControlCommand::SeekBack),
            "start" => Self::Intent(ControlIntent::Start),
            "button" => Self::Intent(parse_button(&args)?),
            "queue" => {
                let Some((uri, title)) = args.split_first() else {
                    return Err(HostError::InvalidArgument(
                        "usage: queue <uri> [title]".to_string(),
                    ));
                };
                Self::Queue {
                    uri: (*uri).to_string(),
                    title: title.join(" "),
                }
            }
            "promote" => Self::Promote,
            "remove-task" => Self::RemoveTask,
            "status" => Self::Status,
            "forget" => Self::Forget,
            "quit" | "exit" => Self::Quit,
            other => return Err(HostError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }

    fn command(command: ControlCommand) -> Self {
        Self::Intent(ControlIntent::Command(command))
    }
}

/// `button` alone is a media button intent with no key payload
fn parse_button(args: &[&str]) -> Result<ControlIntent> {
    let Some(code) = args.first() else {
        return Ok(ControlIntent::MediaButton { key: None });
    };

    let raw: u32 = code
        .parse()
        .map_err(|_| HostError::InvalidArgument(format!("key code {code:?} is not a number")))?;

    let action = match args.get(1).copied() {
        None | Some("down") => KeyAction::Down,
        Some("up") => KeyAction::Up,
        Some(other) => {
            return Err(HostError::InvalidArgument(format!(
                "key action {other:?} must be down or up"
            )))
        }
    };

    Ok(ControlIntent::media_button(KeyEvent {
        code: KeyCode::from_raw(raw),
        action,
    }))
}
