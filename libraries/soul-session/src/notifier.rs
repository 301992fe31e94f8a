//! User-visible status channel
//!
//! Registers the status channel, posts the fallback alert when the
//! platform refuses foreground promotion, and renders the "now playing"
//! surface for the transport's default renderer.

use crate::config::SessionConfig;
use crate::controls::ControlSurfaceBuilder;
use crate::error::Result;
use soul_core::traits::{NotificationHost, StatusSurfaceProvider};
use soul_core::types::{Alert, LaunchAction, PlayerSnapshot, StatusChannel, StatusSurface};
use tracing::{debug, info, warn};

/// Result of [`StatusNotifier::ensure_channel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOutcome {
    /// Platform has no channel concept
    NotRequired,
    /// Channel was registered earlier
    AlreadyExists,
    /// Channel registered by this call
    Created,
}

/// Result of posting the fallback alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertOutcome {
    /// Alert is on screen
    Posted,
    /// Not allowed to post; nothing shown
    Suppressed,
    /// Platform error; nothing shown
    Failed,
}

/// Manages the status channel and the fallback alert
pub struct StatusNotifier<N: NotificationHost> {
    host: N,
    channel: StatusChannel,
    alert_id: u32,
    alert_title: String,
    alert_body: String,
    small_icon: String,
}

impl<N: NotificationHost> StatusNotifier<N> {
    /// Create a notifier posting through `host`
    pub fn new(host: N, config: &SessionConfig) -> Self {
        Self {
            host,
            channel: config.status_channel(),
            alert_id: config.alert_id,
            alert_title: config.alert_title.clone(),
            alert_body: config.alert_body.clone(),
            small_icon: config.small_icon.clone(),
        }
    }

    /// Register the status channel if the platform needs it and it is missing
    ///
    /// Safe to call repeatedly; only the first call on a channel-capable
    /// platform creates anything.
    pub fn ensure_channel(&mut self) -> Result<ChannelOutcome> {
        if !self.host.supports_channels() {
            return Ok(ChannelOutcome::NotRequired);
        }
        if self.host.channel_exists(&self.channel.id) {
            return Ok(ChannelOutcome::AlreadyExists);
        }

        self.host.create_channel(&self.channel)?;
        info!(channel_id = %self.channel.id, "Created status channel");
        Ok(ChannelOutcome::Created)
    }

    /// The alert shown when playback cannot be promoted to the foreground
    pub fn fallback_alert(&self, tap_action: &LaunchAction) -> Alert {
        Alert {
            channel_id: self.channel.id.clone(),
            title: self.alert_title.clone(),
            body: self.alert_body.clone(),
            small_icon: self.small_icon.clone(),
            tap_action: tap_action.clone(),
            auto_cancel: true,
        }
    }

    /// Post the fallback alert asking the user to reopen the host UI
    ///
    /// Always posted under the same id, so repeated posts replace each
    /// other. Without posting permission nothing is posted and
    /// `Suppressed` is returned.
    pub fn post_fallback_alert(&mut self, tap_action: &LaunchAction) -> Result<AlertOutcome> {
        self.ensure_channel()?;

        if !self.host.can_post() {
            debug!(alert_id = self.alert_id, "No permission to post, fallback alert suppressed");
            return Ok(AlertOutcome::Suppressed);
        }

        let alert = self.fallback_alert(tap_action);
        match self.host.post(self.alert_id, &alert) {
            Ok(()) => {
                info!(alert_id = self.alert_id, "Posted fallback alert");
                Ok(AlertOutcome::Posted)
            }
            // Permission can be revoked between the check and the post
            Err(e) if e.is_permission_denied() => {
                warn!(alert_id = self.alert_id, error = %e, "Fallback alert refused");
                Ok(AlertOutcome::Suppressed)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Fixed alert id
    pub fn alert_id(&self) -> u32 {
        self.alert_id
    }

    /// Channel registration this notifier uses
    pub fn channel(&self) -> &StatusChannel {
        &self.channel
    }

    /// Notification host
    pub fn host(&self) -> &N {
        &self.host
    }
}

/// Status surface provider installed into the session transport
#[derive(Debug, Clone)]
pub struct MediaStatusProvider {
    controls: ControlSurfaceBuilder,
    small_icon: String,
}

impl MediaStatusProvider {
    /// Create a provider
    pub fn new(controls: ControlSurfaceBuilder, small_icon: impl Into<String>) -> Self {
        Self {
            controls,
            small_icon: small_icon.into(),
        }
    }
}

impl StatusSurfaceProvider for MediaStatusProvider {
    fn render(&self, snapshot: &PlayerSnapshot) -> StatusSurface {
        StatusSurface {
            small_icon: self.small_icon.clone(),
            title: snapshot
                .current_item
                .as_ref()
                .map(|item| item.title().to_string())
                .unwrap_or_default(),
            controls: self.controls.build(snapshot),
        }
    }
}
