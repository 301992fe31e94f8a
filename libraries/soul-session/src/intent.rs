//! Incoming control intents
//!
//! What external controllers send the service: hardware/headset media
//! buttons, a bare "start" request, and commands from bound controllers.

use soul_core::types::ControlCommand;

/// Media button key code
///
/// Raw values follow the common media key numbering used by headsets and
/// car kits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Single headset button
    HeadsetHook,
    /// Play/pause toggle
    PlayPause,
    /// Stop
    Stop,
    /// Next track
    Next,
    /// Previous track
    Previous,
    /// Rewind
    Rewind,
    /// Fast forward
    FastForward,
    /// Play
    Play,
    /// Pause
    Pause,
    /// Anything else
    Other(u32),
}

impl KeyCode {
    /// Decode a raw key code
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            79 => Self::HeadsetHook,
            85 => Self::PlayPause,
            86 => Self::Stop,
            87 => Self::Next,
            88 => Self::Previous,
            89 => Self::Rewind,
            90 => Self::FastForward,
            126 => Self::Play,
            127 => Self::Pause,
            other => Self::Other(other),
        }
    }

    /// Raw key code
    pub fn raw(self) -> u32 {
        match self {
            Self::HeadsetHook => 79,
            Self::PlayPause => 85,
            Self::Stop => 86,
            Self::Next => 87,
            Self::Previous => 88,
            Self::Rewind => 89,
            Self::FastForward => 90,
            Self::Play => 126,
            Self::Pause => 127,
            Self::Other(raw) => raw,
        }
    }

    /// Command this key maps to, if any
    pub fn command(self) -> Option<ControlCommand> {
        match self {
            Self::Play => Some(ControlCommand::Play),
            Self::Pause => Some(ControlCommand::Pause),
            Self::PlayPause | Self::HeadsetHook => Some(ControlCommand::TogglePlayPause),
            Self::Stop => Some(ControlCommand::Stop),
            Self::Next => Some(ControlCommand::SkipNext),
            Self::Previous => Some(ControlCommand::SkipPrevious),
            Self::Rewind => Some(ControlCommand::SeekBack),
            Self::FastForward => Some(ControlCommand::SeekForward),
            Self::Other(_) => None,
        }
    }

    /// Whether pressing this key can start playback from idle
    pub fn starts_playback(self) -> bool {
        matches!(self, Self::Play | Self::PlayPause | Self::HeadsetHook)
    }
}

/// Key press direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Pressed
    Down,
    /// Released
    Up,
}

/// Media button event payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// Key code
    pub code: KeyCode,
    /// Press direction
    pub action: KeyAction,
}

impl KeyEvent {
    /// Key pressed
    pub fn down(code: KeyCode) -> Self {
        Self {
            code,
            action: KeyAction::Down,
        }
    }

    /// Key released
    pub fn up(code: KeyCode) -> Self {
        Self {
            code,
            action: KeyAction::Up,
        }
    }
}

/// Signal delivered to the service by an external controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlIntent {
    /// Media button press; `key` is `None` when the payload was missing
    MediaButton {
        /// Key event, if the sender attached one
        key: Option<KeyEvent>,
    },

    /// Plain service start, no payload
    Start,

    /// Command from a bound controller
    Command(ControlCommand),
}

impl ControlIntent {
    /// Media button intent carrying `key`
    pub fn media_button(key: KeyEvent) -> Self {
        Self::MediaButton { key: Some(key) }
    }

    /// Whether this intent asks for playback to start
    ///
    /// A media button without a key payload is never a play request.
    pub fn is_play_request(&self) -> bool {
        match self {
            Self::MediaButton {
                key: Some(KeyEvent {
                    code,
                    action: KeyAction::Down,
                }),
            } => code.starts_playback(),
            Self::Command(command) => {
                matches!(command, ControlCommand::Play | ControlCommand::TogglePlayPause)
            }
            Self::MediaButton { .. } | Self::Start => false,
        }
    }

    /// Command the default dispatch runs for this intent
    ///
    /// Key releases, unknown keys, missing payloads and plain starts run
    /// nothing.
    pub fn command(&self) -> Option<ControlCommand> {
        match self {
            Self::MediaButton {
                key: Some(KeyEvent {
                    code,
                    action: KeyAction::Down,
                }),
            } => code.command(),
            Self::Command(command) => Some(*command),
            Self::MediaButton { .. } | Self::Start => None,
        }
    }

    /// Whether this is a media button intent with no key payload
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MediaButton { key: None })
    }
}
