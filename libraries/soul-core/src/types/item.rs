/// Playable item handed to the player
use super::ids::MediaId;
use serde::{Deserialize, Serialize};

/// One playable unit
///
/// Constructed on demand, either from live playback or from the persisted
/// resume record, and immutable afterwards. Locators are kept as the raw
/// strings the player and the store exchange; an empty `source_locator`
/// means there is nothing to play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackItem {
    id: MediaId,
    source_locator: String,
    title: String,
    artwork_locator: String,
}

impl PlaybackItem {
    /// Create a new item
    ///
    /// An empty `id` is replaced with a generated one.
    pub fn new(
        id: impl Into<String>,
        source_locator: impl Into<String>,
        title: impl Into<String>,
        artwork_locator: impl Into<String>,
    ) -> Self {
        Self {
            id: MediaId::or_generate(id),
            source_locator: source_locator.into(),
            title: title.into(),
            artwork_locator: artwork_locator.into(),
        }
    }

    /// Create an item from a source locator only
    pub fn from_source(source_locator: impl Into<String>) -> Self {
        Self::new("", source_locator, "", "")
    }

    /// Replace the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replace the artwork locator
    #[must_use]
    pub fn with_artwork(mut self, artwork_locator: impl Into<String>) -> Self {
        self.artwork_locator = artwork_locator.into();
        self
    }

    /// Stable identifier
    pub fn id(&self) -> &MediaId {
        &self.id
    }

    /// Where the player reads the media from
    pub fn source_locator(&self) -> &str {
        &self.source_locator
    }

    /// Display title (may be empty)
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Artwork locator (may be empty)
    pub fn artwork_locator(&self) -> &str {
        &self.artwork_locator
    }

    /// Whether the item points at something playable
    pub fn has_source(&self) -> bool {
        !self.source_locator.is_empty()
    }
}
