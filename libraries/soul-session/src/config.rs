//! Session configuration

use crate::error::{Result, SessionError};
use serde::{Deserialize, Serialize};
use soul_core::types::{ChannelImportance, StatusChannel};

/// Configuration for the session coordinator
///
/// Every field has a default, so an empty config section is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Id the transport publishes the session under
    #[serde(default = "default_session_id")]
    pub session_id: String,

    /// Name of the resume record store
    #[serde(default = "default_store_name")]
    pub store_name: String,

    /// Status channel id
    #[serde(default = "default_channel_id")]
    pub channel_id: String,

    /// Status channel name shown in platform settings
    #[serde(default = "default_channel_name")]
    pub channel_name: String,

    /// Numeric id of the fallback alert; reposting replaces the previous one
    #[serde(default = "default_alert_id")]
    pub alert_id: u32,

    /// Fallback alert title
    #[serde(default = "default_alert_title")]
    pub alert_title: String,

    /// Fallback alert body
    #[serde(default = "default_alert_body")]
    pub alert_body: String,

    /// Small icon reference for the status surface and alerts
    #[serde(default = "default_small_icon")]
    pub small_icon: String,

    /// Disable buttons the player cannot act on (default: all enabled)
    #[serde(default)]
    pub show_availability: bool,
}

impl SessionConfig {
    /// Status channel registration derived from this config
    pub fn status_channel(&self) -> StatusChannel {
        StatusChannel {
            id: self.channel_id.clone(),
            name: self.channel_name.clone(),
            importance: ChannelImportance::Default,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("session_id", &self.session_id),
            ("store_name", &self.store_name),
            ("channel_id", &self.channel_id),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(SessionError::Config(format!("{field} must not be empty")));
            }
        }

        if self.store_name.contains(['/', '\\']) || self.store_name.starts_with('.') {
            return Err(SessionError::Config(format!(
                "store_name {:?} must be a plain file name",
                self.store_name
            )));
        }

        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: default_session_id(),
            store_name: default_store_name(),
            channel_id: default_channel_id(),
            channel_name: default_channel_name(),
            alert_id: default_alert_id(),
            alert_title: default_alert_title(),
            alert_body: default_alert_body(),
            small_icon: default_small_icon(),
            show_availability: false,
        }
    }
}

fn default_session_id() -> String {
    "soul-session".to_string()
}

fn default_store_name() -> String {
    soul_storage::resume::STORE_NAME.to_string()
}

fn default_channel_id() -> String {
    "soul_session_playback".to_string()
}

fn default_channel_name() -> String {
    "Playback".to_string()
}

fn default_alert_id() -> u32 {
    123
}

fn default_alert_title() -> String {
    "Playback cannot be resumed".to_string()
}

fn default_alert_body() -> String {
    "Use the play button on the media controls if they are still shown, \
     otherwise open the app to start playback again."
        .to_string()
}

fn default_small_icon() -> String {
    "soul_session_small_icon".to_string()
}
