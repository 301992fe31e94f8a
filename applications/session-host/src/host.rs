//! Command execution against the session coordinator
//!
//! `SessionHost` plays the part of the OS service container: it owns the
//! coordinator, attempts foreground promotion whenever playback starts, and
//! turns console commands into coordinator events one at a time.

use crate::command::HostCommand;
use crate::config::HostConfig;
use crate::console::{ConsoleNotifications, ConsolePlatform, ConsoleTransport};
use crate::error::Result;
use crate::player::HeadlessPlayer;
use soul_core::traits::Player;
use soul_core::types::PlaybackItem;
use soul_session::{AlertOutcome, SessionCoordinator};
use soul_storage::ResumeStore;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Coordinator wired to the headless player and console adapters
pub type Coordinator =
    SessionCoordinator<HeadlessPlayer, ConsoleTransport, ConsolePlatform, ConsoleNotifications>;

/// Whether the command loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command
    Continue,
    /// Shut down and leave the loop
    Exit,
}

/// Service container driving one coordinator from console commands
pub struct SessionHost {
    coordinator: Coordinator,
    foreground: bool,
    echo: bool,
}

impl SessionHost {
    /// Open the resume store under the configured data directory
    pub fn open(config: &HostConfig, echo: bool) -> Result<Self> {
        let store = ResumeStore::open_named(&config.storage.data_dir, &config.session.store_name)?;
        Ok(Self::with_store(config, store, echo))
    }

    /// Build a host around an already opened store
    pub fn with_store(config: &HostConfig, store: ResumeStore, echo: bool) -> Self {
        let platform = &config.platform;
        let coordinator = SessionCoordinator::new(
            HeadlessPlayer::new(),
            ConsoleTransport::new(echo),
            ConsolePlatform::new(platform.launch_target.clone(), platform.deny_foreground),
            ConsoleNotifications::new(platform.notification_permission, echo),
            Arc::new(store),
            config.session.clone(),
        );

        Self {
            coordinator,
            foreground: false,
            echo,
        }
    }

    /// Publish the session
    pub fn start(&mut self) -> Result<()> {
        self.coordinator.start()?;
        Ok(())
    }

    /// Run one command
    pub fn execute(&mut self, command: HostCommand) -> Result<Flow> {
        match command {
            HostCommand::Intent(intent) => {
                let outcome = self.coordinator.handle_intent(intent)?;
                if let Some(item) = &outcome.resumed {
                    if item.has_source() {
                        info!(title = item.title(), "Resumed last item");
                    } else {
                        info!("Nothing to resume");
                    }
                }
                self.sync_foreground();
            }
            HostCommand::Queue { uri, title } => {
                let item = PlaybackItem::from_source(uri).with_title(title);
                self.coordinator.queue_item(item)?;
                self.sync_foreground();
            }
            HostCommand::Promote => {
                self.promote();
            }
            HostCommand::RemoveTask => {
                if self.coordinator.on_task_removed() {
                    return Ok(Flow::Exit);
                }
            }
            HostCommand::Status => {
                let line = self.status_line();
                if self.echo {
                    println!("{line}");
                }
            }
            HostCommand::Forget => {
                self.coordinator.resume_store().clear();
                info!("Resume record cleared");
            }
            HostCommand::Quit => return Ok(Flow::Exit),
        }

        if self.coordinator.termination_requested() {
            return Ok(Flow::Exit);
        }
        Ok(Flow::Continue)
    }

    /// Tear down the coordinator and wait for pending resume writes
    pub fn shutdown(&mut self) {
        self.coordinator.shutdown();
        self.foreground = false;

        if let Err(e) = self.coordinator.resume_store().flush() {
            warn!(error = %e, "Resume record may not have been written");
        }
    }

    /// Attempt foreground promotion; a refusal posts the fallback alert
    pub fn promote(&mut self) -> Option<AlertOutcome> {
        if self.coordinator.host().promote_to_foreground() {
            if !self.foreground {
                info!("Running in the foreground");
            }
            self.foreground = true;
            None
        } else {
            let outcome = self.coordinator.on_foreground_promotion_denied();
            debug!(?outcome, "Foreground promotion refused");
            Some(outcome)
        }
    }

    /// One-line summary of player and session state
    pub fn status_line(&self) -> String {
        let player = self.coordinator.player();
        let title = player
            .current_item()
            .map(|item| item.title().to_string())
            .unwrap_or_default();

        format!(
            "lifecycle={} status={} playing={} queued={} current={:?} session={} foreground={} resume_record={}",
            self.coordinator.lifecycle(),
            player.status(),
            player.is_playing(),
            player.media_item_count(),
            title,
            self.coordinator
                .transport()
                .open_session_handle()
                .unwrap_or("-"),
            self.foreground,
            self.coordinator.resume_store().has_record(),
        )
    }

    /// The owned coordinator
    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }

    /// Whether the last promotion attempt succeeded and playback continues
    pub fn is_foreground(&self) -> bool {
        self.foreground
    }

    /// Promote when playback is wanted, demote when it is not
    fn sync_foreground(&mut self) {
        let wants_playback = self.coordinator.player().play_when_ready();

        if wants_playback && !self.foreground {
            self.promote();
        } else if !wants_playback && self.foreground {
            self.foreground = false;
            debug!("Left the foreground");
        }
    }
}
