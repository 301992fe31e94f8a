//! Test doubles for coordinator integration tests
//!
//! Each fake keeps its observable history in an `Arc<Mutex<_>>` log so tests
//! can inspect it after the coordinator (and the fake) has been dropped.

#![allow(dead_code)]

use soul_core::traits::{
    HostPlatform, NotificationHost, PlaybackObserver, Player, SessionTransport,
    StatusSurfaceProvider,
};
use soul_core::types::{
    Alert, LaunchAction, ListenerId, PlaybackItem, PlaybackStatus, PlayerSnapshot,
    SessionBinding, StatusChannel, StatusSurface,
};
use soul_core::{Result, SoulError};
use soul_session::{SessionConfig, SessionCoordinator};
use soul_storage::ResumeStore;
use std::sync::{Arc, Mutex};

// ===== Player =====

#[derive(Debug, Default)]
pub struct PlayerLog {
    pub calls: Vec<String>,
    pub queued: Vec<PlaybackItem>,
    pub listeners_added: usize,
    pub listeners_removed: usize,
    pub released: usize,
}

/// In-memory player that loads instantly
///
/// Queueing into an empty player fires `Buffering` then `Ready` (or `Idle`
/// for an item without a source) to every observer.
pub struct FakePlayer {
    log: Arc<Mutex<PlayerLog>>,
    queue: Vec<PlaybackItem>,
    index: usize,
    status: PlaybackStatus,
    play_when_ready: bool,
    listeners: Vec<(ListenerId, Box<dyn PlaybackObserver>)>,
    next_listener: u64,
}

impl FakePlayer {
    pub fn new(log: Arc<Mutex<PlayerLog>>) -> Self {
        Self {
            log,
            queue: Vec::new(),
            index: 0,
            status: PlaybackStatus::Idle,
            play_when_ready: false,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn with_queue(mut self, items: Vec<PlaybackItem>) -> Self {
        self.queue = items;
        if !self.queue.is_empty() {
            self.status = PlaybackStatus::Ready;
        }
        self
    }

    pub fn with_play_when_ready(mut self, play_when_ready: bool) -> Self {
        self.play_when_ready = play_when_ready;
        self
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn record(&self, call: &str) {
        self.log.lock().unwrap().calls.push(call.to_string());
    }

    fn set_status(&mut self, status: PlaybackStatus) {
        self.status = status;
        let current = self.current_item();
        for (_, listener) in &mut self.listeners {
            listener.on_status_changed(status, current.as_ref());
        }
    }
}

impl Player for FakePlayer {
    fn add_state_listener(&mut self, observer: Box<dyn PlaybackObserver>) -> ListenerId {
        let id = ListenerId::new(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, observer));
        self.log.lock().unwrap().listeners_added += 1;
        id
    }

    fn remove_state_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        let removed = self.listeners.len() < before;
        if removed {
            self.log.lock().unwrap().listeners_removed += 1;
        }
        removed
    }

    fn queue_item(&mut self, item: PlaybackItem) {
        self.record("queue_item");
        self.log.lock().unwrap().queued.push(item.clone());

        let was_empty = self.queue.is_empty();
        let playable = item.has_source();
        self.queue.push(item);

        if was_empty {
            self.index = 0;
            self.set_status(PlaybackStatus::Buffering);
            self.set_status(if playable {
                PlaybackStatus::Ready
            } else {
                PlaybackStatus::Idle
            });
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
        self.record("play");
        self.play_when_ready = true;
    }

    fn pause(&mut self) {
        self.record("pause");
        self.play_when_ready = false;
    }

    fn stop(&mut self) {
        self.record("stop");
        self.play_when_ready = false;
        self.status = PlaybackStatus::Idle;
    }

    fn seek_back(&mut self) {
        self.record("seek_back");
    }

    fn seek_forward(&mut self) {
        self.record("seek_forward");
    }

    fn skip_to_previous(&mut self) {
        self.record("skip_to_previous");
        self.index = self.index.saturating_sub(1);
    }

    fn skip_to_next(&mut self) {
        self.record("skip_to_next");
        if self.has_next() {
            self.index += 1;
        }
    }

    fn release(&mut self) {
        self.record("release");
        self.log.lock().unwrap().released += 1;
    }
}

// ===== Transport =====

#[derive(Debug, Default)]
pub struct TransportLog {
    pub opened: Vec<SessionBinding>,
    pub closed: Vec<u32>,
    pub provider_changes: Vec<bool>,
    pub surfaces: Vec<StatusSurface>,
}

pub struct RecordingTransport {
    log: Arc<Mutex<TransportLog>>,
    provider: Option<Box<dyn StatusSurfaceProvider>>,
    refuse_sessions: bool,
    next_handle: u32,
}

impl RecordingTransport {
    pub fn new(log: Arc<Mutex<TransportLog>>) -> Self {
        Self {
            log,
            provider: None,
            refuse_sessions: false,
            next_handle: 1,
        }
    }

    pub fn refusing(mut self) -> Self {
        self.refuse_sessions = true;
        self
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }
}

impl SessionTransport for RecordingTransport {
    type Handle = u32;

    fn open_session(&mut self, binding: SessionBinding) -> Result<u32> {
        if self.refuse_sessions {
            return Err(SoulError::transport("session service unavailable"));
        }
        self.log.lock().unwrap().opened.push(binding);
        let handle = self.next_handle;
        self.next_handle += 1;
        Ok(handle)
    }

    fn close_session(&mut self, handle: u32) {
        self.log.lock().unwrap().closed.push(handle);
    }

    fn set_status_provider(&mut self, provider: Option<Box<dyn StatusSurfaceProvider>>) {
        self.log.lock().unwrap().provider_changes.push(provider.is_some());
        self.provider = provider;
    }

    fn refresh_status(&mut self, snapshot: &PlayerSnapshot) {
        if let Some(provider) = &self.provider {
            let surface = provider.render(snapshot);
            self.log.lock().unwrap().surfaces.push(surface);
        }
    }
}

// ===== Platform =====

#[derive(Debug, Default)]
pub struct PlatformLog {
    pub termination_requests: usize,
}

pub struct FakePlatform {
    log: Arc<Mutex<PlatformLog>>,
    launch_action: Option<LaunchAction>,
}

impl FakePlatform {
    pub fn new(log: Arc<Mutex<PlatformLog>>) -> Self {
        Self {
            log,
            launch_action: Some(LaunchAction::new("player-ui")),
        }
    }

    pub fn without_launch_action(mut self) -> Self {
        self.launch_action = None;
        self
    }
}

impl HostPlatform for FakePlatform {
    fn launch_action(&self) -> Option<LaunchAction> {
        self.launch_action.clone()
    }

    fn request_termination(&mut self) {
        self.log.lock().unwrap().termination_requests += 1;
    }
}

// ===== Notifications =====

#[derive(Debug, Default)]
pub struct NotificationLog {
    pub channels: Vec<StatusChannel>,
    pub posted: Vec<(u32, Alert)>,
}

pub struct FakeNotifications {
    log: Arc<Mutex<NotificationLog>>,
    supports_channels: bool,
    can_post: bool,
    fail_posts: bool,
}

impl FakeNotifications {
    pub fn new(log: Arc<Mutex<NotificationLog>>) -> Self {
        Self {
            log,
            supports_channels: true,
            can_post: true,
            fail_posts: false,
        }
    }

    pub fn without_permission(mut self) -> Self {
        self.can_post = false;
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail_posts = true;
        self
    }
}

impl NotificationHost for FakeNotifications {
    fn supports_channels(&self) -> bool {
        self.supports_channels
    }

    fn channel_exists(&self, channel_id: &str) -> bool {
        self.log
            .lock()
            .unwrap()
            .channels
            .iter()
            .any(|c| c.id == channel_id)
    }

    fn create_channel(&mut self, channel: &StatusChannel) -> Result<()> {
        self.log.lock().unwrap().channels.push(channel.clone());
        Ok(())
    }

    fn can_post(&self) -> bool {
        self.can_post
    }

    fn post(&mut self, alert_id: u32, alert: &Alert) -> Result<()> {
        if self.fail_posts {
            return Err(SoulError::notification("notification service crashed"));
        }
        let mut log = self.log.lock().unwrap();
        log.posted.retain(|(id, _)| *id != alert_id);
        log.posted.push((alert_id, alert.clone()));
        Ok(())
    }
}

// ===== Harness =====

pub type TestCoordinator =
    SessionCoordinator<FakePlayer, RecordingTransport, FakePlatform, FakeNotifications>;

/// Shared views into every fake
#[derive(Clone, Default)]
pub struct Logs {
    pub player: Arc<Mutex<PlayerLog>>,
    pub transport: Arc<Mutex<TransportLog>>,
    pub platform: Arc<Mutex<PlatformLog>>,
    pub notifications: Arc<Mutex<NotificationLog>>,
}

impl Logs {
    pub fn player_calls(&self) -> Vec<String> {
        self.player.lock().unwrap().calls.clone()
    }

    pub fn termination_requests(&self) -> usize {
        self.platform.lock().unwrap().termination_requests
    }
}

/// Builder for coordinators wired to fakes
pub struct Fixture {
    pub logs: Logs,
    pub resume: Arc<ResumeStore>,
    pub config: SessionConfig,
    player: FakePlayer,
    transport: RecordingTransport,
    platform: FakePlatform,
    notifications: FakeNotifications,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_store(ResumeStore::in_memory())
    }

    pub fn with_store(store: ResumeStore) -> Self {
        let logs = Logs::default();
        Self {
            player: FakePlayer::new(Arc::clone(&logs.player)),
            transport: RecordingTransport::new(Arc::clone(&logs.transport)),
            platform: FakePlatform::new(Arc::clone(&logs.platform)),
            notifications: FakeNotifications::new(Arc::clone(&logs.notifications)),
            resume: Arc::new(store),
            config: SessionConfig::default(),
            logs,
        }
    }

    pub fn player(mut self, f: impl FnOnce(FakePlayer) -> FakePlayer) -> Self {
        self.player = f(self.player);
        self
    }

    pub fn transport(mut self, f: impl FnOnce(RecordingTransport) -> RecordingTransport) -> Self {
        self.transport = f(self.transport);
        self
    }

    pub fn platform(mut self, f: impl FnOnce(FakePlatform) -> FakePlatform) -> Self {
        self.platform = f(self.platform);
        self
    }

    pub fn notifications(
        mut self,
        f: impl FnOnce(FakeNotifications) -> FakeNotifications,
    ) -> Self {
        self.notifications = f(self.notifications);
        self
    }

    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> (TestCoordinator, Logs, Arc<ResumeStore>) {
        let coordinator = SessionCoordinator::new(
            self.player,
            self.transport,
            self.platform,
            self.notifications,
            Arc::clone(&self.resume),
            self.config,
        );
        (coordinator, self.logs, self.resume)
    }

    /// Build and start
    pub fn start(self) -> (TestCoordinator, Logs, Arc<ResumeStore>) {
        let (mut coordinator, logs, resume) = self.build();
        coordinator.start().expect("start should succeed");
        (coordinator, logs, resume)
    }
}

pub fn item(id: &str, uri: &str, title: &str) -> PlaybackItem {
    PlaybackItem::new(id, uri, title, "")
}
