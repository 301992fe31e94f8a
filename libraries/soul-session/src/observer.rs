//! Player state observer that records the resume point

use soul_core::traits::PlaybackObserver;
use soul_core::types::{PlaybackItem, PlaybackStatus};
use soul_storage::ResumeStore;
use std::sync::Arc;
use tracing::trace;

/// Saves the current item whenever the player becomes ready
///
/// Only `Ready` is recorded: items seen while buffering may still fail to
/// load and must not replace a good record.
#[derive(Debug, Clone)]
pub struct ResumeRecorder {
    store: Arc<ResumeStore>,
}

impl ResumeRecorder {
    /// Create a recorder writing to `store`
    pub fn new(store: Arc<ResumeStore>) -> Self {
        Self { store }
    }
}

impl PlaybackObserver for ResumeRecorder {
    fn on_status_changed(&mut self, status: PlaybackStatus, current: Option<&PlaybackItem>) {
        if status != PlaybackStatus::Ready {
            return;
        }

        match current {
            Some(item) => self.store.save(item),
            None => trace!("Player ready with nothing queued, resume record unchanged"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_with_item_saves_it() {
        let store = Arc::new(ResumeStore::in_memory());
        let mut recorder = ResumeRecorder::new(Arc::clone(&store));
        let item = PlaybackItem::new("t1", "content://a", "Song A", "");

        recorder.on_status_changed(PlaybackStatus::Ready, Some(&item));

        assert_eq!(store.restore(), item);
    }

    #[test]
    fn ready_without_item_writes_nothing() {
        let store = Arc::new(ResumeStore::in_memory());
        let mut recorder = ResumeRecorder::new(Arc::clone(&store));

        recorder.on_status_changed(PlaybackStatus::Ready, None);

        assert!(!store.has_record());
    }

    #[test]
    fn transient_states_are_ignored() {
        let store = Arc::new(ResumeStore::in_memory());
        let mut recorder = ResumeRecorder::new(Arc::clone(&store));
        let item = PlaybackItem::new("t1", "content://a", "Song A", "");

        for status in [
            PlaybackStatus::Idle,
            PlaybackStatus::Buffering,
            PlaybackStatus::Ended,
        ] {
            recorder.on_status_changed(status, Some(&item));
        }

        assert!(!store.has_record());
    }
}
