//! Resume record persistence
//!
//! Keeps a snapshot of the last item the player reported ready, so a play
//! request after a restart can pick up where the user left off.
//!
//! The record is four flat string fields in the `playback_resume` store.
//! It is overwritten on every save, never appended. Saves are
//! fire-and-forget; [`ResumeStore::restore`] never fails.

use crate::error::Result;
use crate::preferences::Preferences;
use soul_core::types::{MediaId, PlaybackItem};
use std::path::Path;
use tracing::debug;

/// Default store name
pub const STORE_NAME: &str = "playback_resume";

/// Item identifier key
pub const KEY_MEDIA_ID: &str = "mediaId";

/// Source locator key
pub const KEY_URI: &str = "uri";

/// Title key
pub const KEY_TITLE: &str = "title";

/// Artwork locator key
pub const KEY_ARTWORK_URI: &str = "artworkUri";

/// Persisted "last played" record
#[derive(Debug)]
pub struct ResumeStore {
    prefs: Preferences,
}

impl ResumeStore {
    /// Open the default store under `dir`
    ///
    /// # Errors
    /// Returns an error if the backing preferences cannot be opened
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        Self::open_named(dir, STORE_NAME)
    }

    /// Open a store with a custom name under `dir`
    ///
    /// # Errors
    /// Returns an error if the backing preferences cannot be opened
    pub fn open_named(dir: impl AsRef<Path>, name: &str) -> Result<Self> {
        Ok(Self::new(Preferences::open(dir, name)?))
    }

    /// Store that lives only in memory
    pub fn in_memory() -> Self {
        Self::new(Preferences::in_memory(STORE_NAME))
    }

    /// Wrap an existing preferences store
    pub fn new(prefs: Preferences) -> Self {
        Self { prefs }
    }

    /// Overwrite the record with `item`
    ///
    /// Returns immediately; the disk write happens in the background and
    /// its failures are only logged.
    pub fn save(&self, item: &PlaybackItem) {
        debug!(media_id = %item.id(), uri = item.source_locator(), "Saving resume record");

        self.prefs
            .edit()
            .put(KEY_MEDIA_ID, item.id().as_str())
            .put(KEY_URI, item.source_locator())
            .put(KEY_TITLE, item.title())
            .put(KEY_ARTWORK_URI, item.artwork_locator())
            .apply();
    }

    /// Rebuild the last saved item
    ///
    /// Missing text fields come back empty and a missing id is generated, so
    /// this always yields a valid item. With no record at all the item has
    /// an empty source locator, meaning there is nothing to resume.
    pub fn restore(&self) -> PlaybackItem {
        let id = self
            .prefs
            .get(KEY_MEDIA_ID)
            .map(MediaId::or_generate)
            .unwrap_or_else(MediaId::generate);
        let uri = self.prefs.get(KEY_URI).unwrap_or_default();
        let title = self.prefs.get(KEY_TITLE).unwrap_or_default();
        let artwork = self.prefs.get(KEY_ARTWORK_URI).unwrap_or_default();

        debug!(media_id = %id, uri = %uri, "Restored resume record");

        PlaybackItem::new(id.as_str(), uri, title, artwork)
    }

    /// Whether a record has ever been saved
    pub fn has_record(&self) -> bool {
        self.prefs.contains(KEY_URI)
    }

    /// Forget the record
    pub fn clear(&self) {
        self.prefs
            .edit()
            .remove(KEY_MEDIA_ID)
            .remove(KEY_URI)
            .remove(KEY_TITLE)
            .remove(KEY_ARTWORK_URI)
            .apply();
    }

    /// Wait for queued saves to reach the disk
    ///
    /// # Errors
    /// Returns an error if the background writer has stopped
    pub fn flush(&self) -> Result<()> {
        self.prefs.flush()
    }

    /// Backing preferences
    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }
}
