/// User-visible status surface types
use super::control::ControlAction;
use serde::{Deserialize, Serialize};

/// Action that brings the host UI to the front
///
/// Opaque to the session layer; the platform resolves it and the
/// notification host knows how to fire it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchAction {
    /// Platform-specific target (activity name, desktop entry, URL, ...)
    pub target: String,
}

impl LaunchAction {
    /// Create a launch action
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl Default for LaunchAction {
    fn default() -> Self {
        Self::new("main")
    }
}

/// Importance of a status channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelImportance {
    /// No sound, collapsed
    Low,
    /// Platform default
    #[default]
    Default,
    /// Makes noise and peeks
    High,
}

/// Status channel registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChannel {
    /// Fixed channel id
    pub id: String,

    /// Name shown in the platform's notification settings
    pub name: String,

    /// Channel importance
    pub importance: ChannelImportance,
}

/// One-shot user alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Channel the alert is posted to
    pub channel_id: String,

    /// Title line
    pub title: String,

    /// Body text
    pub body: String,

    /// Small icon reference
    pub small_icon: String,

    /// Fired when the user taps the alert
    pub tap_action: LaunchAction,

    /// Dismiss the alert once tapped
    pub auto_cancel: bool,
}

/// Rendered "now playing" status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSurface {
    /// Small icon reference
    pub small_icon: String,

    /// Title of the current item (empty when nothing is queued)
    pub title: String,

    /// Buttons, in display order
    pub controls: Vec<ControlAction>,
}
