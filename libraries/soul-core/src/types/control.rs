/// Control surface types
use serde::{Deserialize, Serialize};

/// Transport command a controller can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlCommand {
    /// Start or resume playback
    Play,
    /// Pause playback
    Pause,
    /// Play when paused, pause when playing
    TogglePlayPause,
    /// Stop playback
    Stop,
    /// Jump back a few seconds
    SeekBack,
    /// Jump forward a few seconds
    SeekForward,
    /// Previous item (or restart of the current one)
    SkipPrevious,
    /// Next item
    SkipNext,
}

impl ControlCommand {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::TogglePlayPause => "toggle-play-pause",
            Self::Stop => "stop",
            Self::SeekBack => "seek-back",
            Self::SeekForward => "seek-forward",
            Self::SkipPrevious => "skip-previous",
            Self::SkipNext => "skip-next",
        }
    }
}

impl std::fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Icon hint for a control button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlIcon {
    /// Previous
    SkipPrevious,
    /// Rewind
    SeekBack,
    /// Play triangle
    Play,
    /// Pause bars
    Pause,
    /// Fast forward
    SeekForward,
    /// Next
    SkipNext,
}

/// One button on an external control surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlAction {
    /// Command sent back when the button is pressed
    pub command: ControlCommand,

    /// Presentation hint
    pub icon: ControlIcon,

    /// Whether the button accepts presses
    pub enabled: bool,
}

impl ControlAction {
    /// Create an enabled action
    pub fn new(command: ControlCommand, icon: ControlIcon) -> Self {
        Self {
            command,
            icon,
            enabled: true,
        }
    }

    /// Set the enabled flag
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}
