//! In-memory player for the headless host
//!
//! Keeps a queue and a cursor, produces no audio, and loads instantly:
//! queueing into an empty player reports `Buffering` then `Ready`.

use soul_core::traits::{PlaybackObserver, Player};
use soul_core::types::{ListenerId, PlaybackItem, PlaybackStatus};
use tracing::{debug, info};

/// Player that only tracks state
#[derive(Default)]
pub struct HeadlessPlayer {
    queue: Vec<PlaybackItem>,
    index: usize,
    status: PlaybackStatus,
    play_when_ready: bool,
    listeners: Vec<(ListenerId, Box<dyn PlaybackObserver>)>,
    next_listener: u64,
    released: bool,
}

impl HeadlessPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `release` has run
    pub fn is_released(&self) -> bool {
        self.released
    }

    fn set_status(&mut self, status: PlaybackStatus) {
        if self.status == status {
            return;
        }
        self.status = status;

        let current = self.current_item();
        for (_, listener) in &mut self.listeners {
            listener.on_status_changed(status, current.as_ref());
        }
    }

    fn set_play_when_ready(&mut self, play_when_ready: bool) {
        let was_playing = self.is_playing();
        self.play_when_ready = play_when_ready;

        let is_playing = self.is_playing();
        if was_playing != is_playing {
            for (_, listener) in &mut self.listeners {
                listener.on_is_playing_changed(is_playing);
            }
        }
    }

    /// Load the item under the cursor
    fn prepare_current(&mut self) {
        let playable = self
            .queue
            .get(self.index)
            .is_some_and(PlaybackItem::has_source);

        self.set_status(PlaybackStatus::Buffering);
        self.set_status(if playable {
            PlaybackStatus::Ready
        } else {
            PlaybackStatus::Idle
        });
    }
}

impl Player for HeadlessPlayer {
    fn add_state_listener(&mut self, observer: Box<dyn PlaybackObserver>) -> ListenerId {
        let id = ListenerId::new(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, observer));
        id
    }

    fn remove_state_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() < before
    }

    fn queue_item(&mut self, item: PlaybackItem) {
        debug!(media_id = %item.id(), uri = item.source_locator(), "Queued");

        // An item without a source is nothing to resume; the next item replaces it
        let current_is_empty = self
            .queue
            .get(self.index)
            .is_some_and(|current| !current.has_source());
        if current_is_empty {
            self.queue[self.index] = item;
            self.prepare_current();
            return;
        }

        let was_empty = self.queue.is_empty();
        self.queue.push(item);

        if was_empty {
            self.index = 0;
            self.prepare_current();
        }
    }

    fn current_item(&self) -> Option<PlaybackItem> {
        self.queue.get(self.index).cloned()
    }

    fn media_item_count(&self) -> usize {
        self.queue.len()
    }

    fn status(&self) -> PlaybackStatus {
        self.status
    }

    fn is_playing(&self) -> bool {
        self.play_when_ready && self.status == PlaybackStatus::Ready
    }

    fn play_when_ready(&self) -> bool {
        self.play_when_ready
    }

    fn has_previous(&self) -> bool {
        self.index > 0
    }

    fn has_next(&self) -> bool {
        self.index + 1 < self.queue.len()
    }

    fn play(&mut self) {
        if !self.queue.is_empty() {
            match self.status {
                PlaybackStatus::Ended => {
                    self.index = 0;
                    self.prepare_current();
                }
                PlaybackStatus::Idle => self.prepare_current(),
                PlaybackStatus::Buffering | PlaybackStatus::Ready => {}
            }
        }
        self.set_play_when_ready(true);
    }

    fn pause(&mut self) {
        self.set_play_when_ready(false);
    }

    fn stop(&mut self) {
        self.set_play_when_ready(false);
        self.set_status(PlaybackStatus::Idle);
    }

    fn seek_back(&mut self) {
        debug!("Seek back");
    }

    fn seek_forward(&mut self) {
        debug!("Seek forward");
    }

    fn skip_to_previous(&mut self) {
        if self.has_previous() {
            self.index -= 1;
            self.prepare_current();
        }
    }

    fn skip_to_next(&mut self) {
        if self.has_next() {
            self.index += 1;
            self.prepare_current();
        } else if !self.queue.is_empty() {
            self.set_play_when_ready(false);
            self.set_status(PlaybackStatus::Ended);
        }
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        info!(queued = self.queue.len(), "Player released");
        self.listeners.clear();
        self.queue.clear();
        self.index = 0;
        self.status = PlaybackStatus::Idle;
        self.play_when_ready = false;
        self.released = true;
    }
}
