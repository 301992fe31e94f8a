//! Console adapters for the session collaborators
//!
//! Stand-ins for the OS session registry, notification service and process
//! manager. Everything they would show the user is printed to stdout when
//! `echo` is on and kept in memory for inspection.

use soul_core::traits::{HostPlatform, NotificationHost, SessionTransport, StatusSurfaceProvider};
use soul_core::types::{
    Alert, ControlAction, ControlIcon, LaunchAction, PlayerSnapshot, SessionBinding,
    StatusChannel, StatusSurface,
};
use soul_core::{Result, SoulError};
use std::collections::BTreeMap;
use tracing::{debug, info};

// ===== Session transport =====

/// Publishes sessions into the log and renders the status surface as text
pub struct ConsoleTransport {
    echo: bool,
    next_handle: u64,
    open: Option<String>,
    provider: Option<Box<dyn StatusSurfaceProvider>>,
    last_surface: Option<StatusSurface>,
}

impl ConsoleTransport {
    pub fn new(echo: bool) -> Self {
        Self {
            echo,
            next_handle: 1,
            open: None,
            provider: None,
            last_surface: None,
        }
    }

    /// Handle of the published session
    pub fn open_session_handle(&self) -> Option<&str> {
        self.open.as_deref()
    }

    /// Surface drawn by the last refresh
    pub fn last_surface(&self) -> Option<&StatusSurface> {
        self.last_surface.as_ref()
    }
}

impl SessionTransport for ConsoleTransport {
    type Handle = String;

    fn open_session(&mut self, binding: SessionBinding) -> Result<String> {
        if let Some(existing) = &self.open {
            return Err(SoulError::transport(format!(
                "session {existing} is already published"
            )));
        }

        let handle = format!("{}#{}", binding.session_id, self.next_handle);
        self.next_handle += 1;
        info!(%handle, launch_target = %binding.launch_action.target, "Session published");
        self.open = Some(handle.clone());
        Ok(handle)
    }

    fn close_session(&mut self, handle: String) {
        if self.open.as_deref() == Some(handle.as_str()) {
            self.open = None;
            info!(%handle, "Session withdrawn");
        } else {
            debug!(%handle, "Closing a session that is not published");
        }
    }

    fn set_status_provider(&mut self, provider: Option<Box<dyn StatusSurfaceProvider>>) {
        if provider.is_none() {
            self.last_surface = None;
        }
        self.provider = provider;
    }

    fn refresh_status(&mut self, snapshot: &PlayerSnapshot) {
        let Some(provider) = &self.provider else {
            return;
        };

        let surface = provider.render(snapshot);
        if self.last_surface.as_ref() == Some(&surface) {
            return;
        }
        if self.echo {
            println!("{}", render_surface(&surface));
        }
        self.last_surface = Some(surface);
    }
}

/// One-line text rendering of a status surface
pub fn render_surface(surface: &StatusSurface) -> String {
    let title = if surface.title.is_empty() {
        "(nothing queued)"
    } else {
        surface.title.as_str()
    };
    let controls: Vec<String> = surface.controls.iter().map(render_control).collect();
    format!("[{}] {} | {}", surface.small_icon, title, controls.join(" "))
}

fn render_control(action: &ControlAction) -> String {
    let glyph = match action.icon {
        ControlIcon::SkipPrevious => "|<",
        ControlIcon::SeekBack => "<<",
        ControlIcon::Play => ">",
        ControlIcon::Pause => "||",
        ControlIcon::SeekForward => ">>",
        ControlIcon::SkipNext => ">|",
    };
    if action.enabled {
        glyph.to_string()
    } else {
        format!("({glyph})")
    }
}

// ===== Notifications =====

/// Notification service with a permission switch
pub struct ConsoleNotifications {
    echo: bool,
    permission: bool,
    channels: Vec<StatusChannel>,
    posted: BTreeMap<u32, Alert>,
}

impl ConsoleNotifications {
    pub fn new(permission: bool, echo: bool) -> Self {
        Self {
            echo,
            permission,
            channels: Vec::new(),
            posted: BTreeMap::new(),
        }
    }

    /// Alerts currently on screen, by id
    pub fn posted(&self) -> &BTreeMap<u32, Alert> {
        &self.posted
    }

    /// Registered channels
    pub fn channels(&self) -> &[StatusChannel] {
        &self.channels
    }
}

impl NotificationHost for ConsoleNotifications {
    fn supports_channels(&self) -> bool {
        true
    }

    fn channel_exists(&self, channel_id: &str) -> bool {
        self.channels.iter().any(|c| c.id == channel_id)
    }

    fn create_channel(&mut self, channel: &StatusChannel) -> Result<()> {
        self.channels.push(channel.clone());
        Ok(())
    }

    fn can_post(&self) -> bool {
        self.permission
    }

    fn post(&mut self, alert_id: u32, alert: &Alert) -> Result<()> {
        if !self.permission {
            return Err(SoulError::permission_denied("post notifications"));
        }
        if self.echo {
            println!("! {}: {} (tap opens {})", alert.title, alert.body, alert.tap_action.target);
        }
        self.posted.insert(alert_id, alert.clone());
        Ok(())
    }
}

// ===== Platform =====

/// Process-level platform hooks
pub struct ConsolePlatform {
    launch_target: String,
    deny_foreground: bool,
    termination_requested: bool,
}

impl ConsolePlatform {
    pub fn new(launch_target: impl Into<String>, deny_foreground: bool) -> Self {
        Self {
            launch_target: launch_target.into(),
            deny_foreground,
            termination_requested: false,
        }
    }

    /// Ask to run as a foreground service; `false` means refused
    pub fn promote_to_foreground(&self) -> bool {
        !self.deny_foreground
    }

    pub fn termination_requested(&self) -> bool {
        self.termination_requested
    }
}

impl HostPlatform for ConsolePlatform {
    fn launch_action(&self) -> Option<LaunchAction> {
        Some(LaunchAction::new(self.launch_target.clone()))
    }

    fn request_termination(&mut self) {
        info!("Termination requested");
        self.termination_requested = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(enabled: bool) -> StatusSurface {
        StatusSurface {
            small_icon: "icon".to_string(),
            title: "Song A".to_string(),
            controls: vec![
                ControlAction::new(
                    soul_core::types::ControlCommand::SkipPrevious,
                    ControlIcon::SkipPrevious,
                )
                .enabled(enabled),
                ControlAction::new(
                    soul_core::types::ControlCommand::TogglePlayPause,
                    ControlIcon::Pause,
                ),
            ],
        }
    }

    #[test]
    fn test_render_marks_disabled_controls() {
        assert_eq!(render_surface(&surface(true)), "[icon] Song A | |< ||");
        assert_eq!(render_surface(&surface(false)), "[icon] Song A | (|<) ||");
    }

    #[test]
    fn test_transport_publishes_one_session_at_a_time() {
        let mut transport = ConsoleTransport::new(false);
        let binding = SessionBinding {
            session_id: "s".to_string(),
            launch_action: LaunchAction::default(),
        };

        let handle = transport.open_session(binding.clone()).unwrap();
        assert_eq!(handle, "s#1");
        assert!(transport.open_session(binding.clone()).is_err());

        transport.close_session(handle);
        assert_eq!(transport.open_session(binding).unwrap(), "s#2");
    }

    #[test]
    fn test_post_without_permission_is_refused() {
        let mut notifications = ConsoleNotifications::new(false, false);
        let alert = Alert {
            channel_id: "c".to_string(),
            title: "t".to_string(),
            body: "b".to_string(),
            small_icon: "i".to_string(),
            tap_action: LaunchAction::default(),
            auto_cancel: true,
        };

        let err = notifications.post(1, &alert).unwrap_err();
        assert!(err.is_permission_denied());
        assert!(notifications.posted().is_empty());
    }

    #[test]
    fn test_platform_denies_promotion_when_configured() {
        assert!(ConsolePlatform::new("main", false).promote_to_foreground());
        assert!(!ConsolePlatform::new("main", true).promote_to_foreground());
    }
}
