/// Player state types
use super::item::PlaybackItem;
use serde::{Deserialize, Serialize};

/// Player readiness, as reported to state observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    /// Nothing prepared
    #[default]
    Idle,
    /// Loading the current item
    Buffering,
    /// Current item can play immediately
    Ready,
    /// Reached the end of the queue
    Ended,
}

impl PlaybackStatus {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Buffering => "buffering",
            Self::Ready => "ready",
            Self::Ended => "ended",
        }
    }

    /// Parse from string
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "idle" => Some(Self::Idle),
            "buffering" => Some(Self::Buffering),
            "ready" => Some(Self::Ready),
            "ended" => Some(Self::Ended),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read-only view of the player at one instant
///
/// Built fresh for each status render; never cache it, `is_playing` moves.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Readiness of the current item
    pub status: PlaybackStatus,

    /// Whether audio is audibly playing right now
    pub is_playing: bool,

    /// Whether the player will play as soon as it is ready
    pub play_when_ready: bool,

    /// Number of queued items
    pub media_item_count: usize,

    /// Currently queued item, if any
    pub current_item: Option<PlaybackItem>,

    /// Whether there is an item before the current one
    pub has_previous: bool,

    /// Whether there is an item after the current one
    pub has_next: bool,
}
