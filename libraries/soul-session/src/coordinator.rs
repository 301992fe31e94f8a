//! Session coordinator - service lifecycle orchestration
//!
//! Owns the player and the published session for the lifetime of the
//! service, and decides how external events turn into player mutations,
//! persisted state, status updates, and process teardown.

use crate::{
    config::SessionConfig,
    controls::ControlSurfaceBuilder,
    error::{Result, SessionError},
    intent::ControlIntent,
    notifier::{AlertOutcome, MediaStatusProvider, StatusNotifier},
    observer::ResumeRecorder,
};
use soul_core::traits::{HostPlatform, NotificationHost, Player, SessionTransport};
use soul_core::types::{
    CallerInfo, ControlCommand, LaunchAction, ListenerId, PlaybackItem, SessionBinding,
};
use soul_storage::ResumeStore;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Coordinator lifecycle
///
/// Linear: a terminated coordinator is never restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, `start` not yet run
    Uninitialized,
    /// Session published, handling events
    Active,
    /// Shut down
    Terminated,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uninitialized => "uninitialized",
            Self::Active => "active",
            Self::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

/// What handling one intent did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentOutcome {
    /// Item restored from the resume record and queued first
    pub resumed: Option<PlaybackItem>,

    /// Command run by the default dispatch
    pub dispatched: Option<ControlCommand>,
}

/// Central state machine of the playback service
///
/// Construct once per process with every collaborator injected, call
/// [`start`](Self::start), feed it events from a single task, and
/// [`shutdown`](Self::shutdown) at the end (dropping it also shuts down).
///
/// The coordinator is the only owner of the player; callers get shared
/// borrows through [`player`](Self::player) and the session handle through
/// [`resolve_session`](Self::resolve_session).
pub struct SessionCoordinator<P, T, H, N>
where
    P: Player,
    T: SessionTransport,
    H: HostPlatform,
    N: NotificationHost,
{
    player: P,
    transport: T,
    host: H,
    notifier: StatusNotifier<N>,
    resume: Arc<ResumeStore>,
    controls: ControlSurfaceBuilder,
    config: SessionConfig,
    launch_action: LaunchAction,
    session: Option<T::Handle>,
    observer: Option<ListenerId>,
    lifecycle: Lifecycle,
    termination_requested: bool,
}

impl<P, T, H, N> SessionCoordinator<P, T, H, N>
where
    P: Player,
    T: SessionTransport,
    H: HostPlatform,
    N: NotificationHost,
{
    /// Create a coordinator; nothing is published until `start`
    pub fn new(
        player: P,
        transport: T,
        host: H,
        notifications: N,
        resume: Arc<ResumeStore>,
        config: SessionConfig,
    ) -> Self {
        let controls = ControlSurfaceBuilder::new().with_availability(config.show_availability);
        let notifier = StatusNotifier::new(notifications, &config);

        Self {
            player,
            transport,
            host,
            notifier,
            resume,
            controls,
            config,
            launch_action: LaunchAction::default(),
            session: None,
            observer: None,
            lifecycle: Lifecycle::Uninitialized,
            termination_requested: false,
        }
    }

    /// Publish the session and start observing the player
    ///
    /// Resolves the "open host UI" action, opens the session bound to it,
    /// registers the resume observer, and installs the status provider.
    /// Allowed once. If the transport refuses the session nothing is
    /// registered and the coordinator stays uninitialized.
    pub fn start(&mut self) -> Result<()> {
        self.require(Lifecycle::Uninitialized, "start")?;

        let launch_action = self.host.launch_action().unwrap_or_else(|| {
            warn!("Host has no launch action, using the default");
            LaunchAction::default()
        });

        let binding = SessionBinding {
            session_id: self.config.session_id.clone(),
            launch_action: launch_action.clone(),
        };
        let handle = self.transport.open_session(binding)?;

        let recorder = ResumeRecorder::new(Arc::clone(&self.resume));
        self.observer = Some(self.player.add_state_listener(Box::new(recorder)));

        let provider = MediaStatusProvider::new(self.controls, self.config.small_icon.clone());
        self.transport.set_status_provider(Some(Box::new(provider)));

        info!(
            session_id = %self.config.session_id,
            launch_target = %launch_action.target,
            ?handle,
            "Session started"
        );

        self.session = Some(handle);
        self.launch_action = launch_action;
        self.lifecycle = Lifecycle::Active;
        self.refresh_status();
        Ok(())
    }

    /// Handle one control intent
    ///
    /// A play request arriving while the player has nothing queued first
    /// restores the last ready item and queues it; then the intent goes
    /// through the default dispatch. Both steps happen within this call, so
    /// no other intent can observe a half-queued player.
    pub fn handle_intent(&mut self, intent: ControlIntent) -> Result<IntentOutcome> {
        self.require(Lifecycle::Active, "handle intents")?;

        if intent.is_malformed() {
            warn!("Media button intent without key event, ignoring");
        }

        let mut outcome = IntentOutcome::default();

        if intent.is_play_request() && self.player.media_item_count() == 0 {
            let item = self.resume.restore();
            info!(
                media_id = %item.id(),
                uri = item.source_locator(),
                "Nothing queued, resuming last played item"
            );
            self.player.queue_item(item.clone());
            outcome.resumed = Some(item);
        }

        outcome.dispatched = intent.command();
        if let Some(command) = outcome.dispatched {
            self.dispatch(command);
        }

        debug!(?intent, dispatched = ?outcome.dispatched, "Handled intent");
        self.refresh_status();
        Ok(outcome)
    }

    /// Queue an item on behalf of a controller
    pub fn queue_item(&mut self, item: PlaybackItem) -> Result<()> {
        self.require(Lifecycle::Active, "queue items")?;

        debug!(media_id = %item.id(), "Queueing item");
        self.player.queue_item(item);
        self.refresh_status();
        Ok(())
    }

    /// The host UI task was removed (swiped away)
    ///
    /// Requests process termination unless the player is set to keep
    /// playing. Returns whether termination was requested. The request is
    /// one-way and sent at most once. Ignored unless active.
    pub fn on_task_removed(&mut self) -> bool {
        if self.lifecycle != Lifecycle::Active {
            debug!(lifecycle = %self.lifecycle, "Task removed outside an active session, ignoring");
            return false;
        }

        if self.player.play_when_ready() {
            info!("Task removed while playing, keeping service alive");
            return false;
        }

        if !self.termination_requested {
            info!("Task removed while paused, requesting termination");
            self.termination_requested = true;
            self.host.request_termination();
        }
        true
    }

    /// The platform refused to promote the service to the foreground
    ///
    /// Posts the alert asking the user to reopen the host UI. Best effort:
    /// failures are logged, never returned.
    pub fn on_foreground_promotion_denied(&mut self) -> AlertOutcome {
        warn!("Foreground promotion denied, posting fallback alert");

        match self.notifier.post_fallback_alert(&self.launch_action) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "Could not post fallback alert");
                AlertOutcome::Failed
            }
        }
    }

    /// Tear everything down
    ///
    /// Detaches the observer, withdraws the session, detaches the status
    /// provider, and releases the player. Works from any state, including a
    /// start that never completed; later calls do nothing.
    pub fn shutdown(&mut self) {
        if self.lifecycle == Lifecycle::Terminated {
            return;
        }

        if let Some(id) = self.observer.take() {
            if !self.player.remove_state_listener(id) {
                debug!(%id, "Observer was already gone");
            }
        }
        if let Some(handle) = self.session.take() {
            self.transport.close_session(handle);
        }
        self.transport.set_status_provider(None);
        self.player.release();

        info!(from = %self.lifecycle, "Session shut down");
        self.lifecycle = Lifecycle::Terminated;
    }

    /// Session handle for a controller
    ///
    /// `Some` whenever the coordinator is active.
    pub fn resolve_session(&self, caller: &CallerInfo) -> Option<&T::Handle> {
        debug!(caller = %caller.name, pid = ?caller.pid, "Session requested");

        if self.lifecycle == Lifecycle::Active {
            self.session.as_ref()
        } else {
            None
        }
    }

    /// Push the current player state to the transport's status renderer
    pub fn refresh_status(&mut self) {
        if self.lifecycle != Lifecycle::Active {
            return;
        }

        let snapshot = self.player.snapshot();
        self.transport.refresh_status(&snapshot);
    }

    /// Current lifecycle state
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Whether termination has been requested
    pub fn termination_requested(&self) -> bool {
        self.termination_requested
    }

    /// Shared borrow of the player
    pub fn player(&self) -> &P {
        &self.player
    }

    /// Session transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Host platform
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Status notifier
    pub fn notifier(&self) -> &StatusNotifier<N> {
        &self.notifier
    }

    /// Resume record store
    pub fn resume_store(&self) -> &Arc<ResumeStore> {
        &self.resume
    }

    /// Active configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Launch action resolved at start
    pub fn launch_action(&self) -> &LaunchAction {
        &self.launch_action
    }

    fn require(&self, expected: Lifecycle, operation: &'static str) -> Result<()> {
        if self.lifecycle == expected {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                from: self.lifecycle,
                operation,
            })
        }
    }

    fn dispatch(&mut self, command: ControlCommand) {
        match command {
            ControlCommand::Play => self.player.play(),
            ControlCommand::Pause => self.player.pause(),
            ControlCommand::TogglePlayPause => self.player.toggle_play_pause(),
            ControlCommand::Stop => self.player.stop(),
            ControlCommand::SeekBack => self.player.seek_back(),
            ControlCommand::SeekForward => self.player.seek_forward(),
            ControlCommand::SkipPrevious => self.player.skip_to_previous(),
            ControlCommand::SkipNext => self.player.skip_to_next(),
        }
    }
}

impl<P, T, H, N> Drop for SessionCoordinator<P, T, H, N>
where
    P: Player,
    T: SessionTransport,
    H: HostPlatform,
    N: NotificationHost,
{
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl<P, T, H, N> fmt::Debug for SessionCoordinator<P, T, H, N>
where
    P: Player,
    T: SessionTransport,
    H: HostPlatform,
    N: NotificationHost,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCoordinator")
            .field("lifecycle", &self.lifecycle)
            .field("session", &self.session)
            .field("observer", &self.observer)
            .field("termination_requested", &self.termination_requested)
            .finish_non_exhaustive()
    }
}
