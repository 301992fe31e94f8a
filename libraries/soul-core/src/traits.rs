/// Collaborator traits for Soul Session
use crate::error::Result;
use crate::types::{
    Alert, LaunchAction, ListenerId, PlaybackItem, PlaybackStatus, PlayerSnapshot,
    SessionBinding, StatusChannel, StatusSurface,
};

/// Audio player capability
///
/// The session layer never decodes or renders audio; it only queues items,
/// issues transport commands, and watches state. Implementers own the
/// engine.
pub trait Player: Send {
    /// Register a state observer
    ///
    /// The returned id is passed back to [`Player::remove_state_listener`].
    fn add_state_listener(&mut self, observer: Box<dyn PlaybackObserver>) -> ListenerId;

    /// Remove a previously registered observer
    ///
    /// Returns `false` if the id is unknown.
    fn remove_state_listener(&mut self, id: ListenerId) -> bool;

    /// Queue an item for playback
    fn queue_item(&mut self, item: PlaybackItem);

    /// Currently queued item, if any
    fn current_item(&self) -> Option<PlaybackItem>;

    /// Number of queued items
    fn media_item_count(&self) -> usize;

    /// Readiness of the current item
    fn status(&self) -> PlaybackStatus;

    /// Whether audio is audibly playing right now
    fn is_playing(&self) -> bool;

    /// Whether the player will play as soon as it is ready
    fn play_when_ready(&self) -> bool;

    /// Whether there is an item before the current one
    fn has_previous(&self) -> bool {
        true
    }

    /// Whether there is an item after the current one
    fn has_next(&self) -> bool {
        true
    }

    /// Start or resume playback
    fn play(&mut self);

    /// Pause playback
    fn pause(&mut self);

    /// Stop playback, keeping the queue
    fn stop(&mut self);

    /// Jump back by the player's seek-back increment
    fn seek_back(&mut self);

    /// Jump forward by the player's seek-forward increment
    fn seek_forward(&mut self);

    /// Previous item (or restart of the current one)
    fn skip_to_previous(&mut self);

    /// Next item
    fn skip_to_next(&mut self);

    /// Release engine resources; the player is unusable afterwards
    fn release(&mut self);

    /// Play when paused, pause when playing
    fn toggle_play_pause(&mut self) {
        if self.play_when_ready() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Capture the state the status surface renders from
    fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            status: self.status(),
            is_playing: self.is_playing(),
            play_when_ready: self.play_when_ready(),
            media_item_count: self.media_item_count(),
            current_item: self.current_item(),
            has_previous: self.has_previous(),
            has_next: self.has_next(),
        }
    }
}

/// Player state observer
///
/// Called synchronously on the player's owner thread.
pub trait PlaybackObserver: Send {
    /// Readiness changed; `current` is the item queued at that moment
    fn on_status_changed(&mut self, status: PlaybackStatus, current: Option<&PlaybackItem>);

    /// Audible playback started or stopped
    fn on_is_playing_changed(&mut self, is_playing: bool) {
        let _ = is_playing;
    }
}

/// Renders the "now playing" status surface
///
/// Installed into the transport, which calls it whenever it redraws.
pub trait StatusSurfaceProvider: Send {
    /// Render the surface for the given player state
    fn render(&self, snapshot: &PlayerSnapshot) -> StatusSurface;
}

/// Session discovery/transport capability
///
/// Publishes a session that external controllers (remote UIs, hardware
/// buttons, voice assistants) can find and bind to.
pub trait SessionTransport {
    /// Handle controllers bind to
    type Handle: Clone + std::fmt::Debug;

    /// Publish a session
    ///
    /// # Errors
    /// Returns an error if the platform refuses to publish the session
    fn open_session(&mut self, binding: SessionBinding) -> Result<Self::Handle>;

    /// Withdraw a published session
    fn close_session(&mut self, handle: Self::Handle);

    /// Install (`Some`) or detach (`None`) the status surface provider
    fn set_status_provider(&mut self, provider: Option<Box<dyn StatusSurfaceProvider>>);

    /// Redraw the status surface for the given player state
    fn refresh_status(&mut self, snapshot: &PlayerSnapshot);
}

/// OS notification API
pub trait NotificationHost {
    /// Whether the platform requires explicit channel registration
    fn supports_channels(&self) -> bool;

    /// Whether a channel with this id is registered
    fn channel_exists(&self, channel_id: &str) -> bool;

    /// Register a channel
    ///
    /// # Errors
    /// Returns an error if the platform rejects the registration
    fn create_channel(&mut self, channel: &StatusChannel) -> Result<()>;

    /// Whether the app may post alerts (runtime permission)
    fn can_post(&self) -> bool;

    /// Post an alert, replacing any alert with the same id
    ///
    /// # Errors
    /// Returns an error if the platform refuses the post
    fn post(&mut self, alert_id: u32, alert: &Alert) -> Result<()>;
}

/// Host process services
pub trait HostPlatform {
    /// Resolve the action that opens the host UI, if the host has one
    fn launch_action(&self) -> Option<LaunchAction>;

    /// Ask the host to tear the service process down
    ///
    /// One-way: there is no way to cancel once issued.
    fn request_termination(&mut self);
}
