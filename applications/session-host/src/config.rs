/// Host configuration
use crate::error::{HostError, Result};
use serde::{Deserialize, Serialize};
use soul_session::SessionConfig;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HostConfig {
    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_platform")]
    pub platform: PlatformSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlatformSettings {
    /// Target the "open host UI" action points at
    #[serde(default = "default_launch_target")]
    pub launch_target: String,

    /// Refuse every foreground promotion
    #[serde(default)]
    pub deny_foreground: bool,

    /// Whether the user granted notification permission
    #[serde(default = "default_notification_permission")]
    pub notification_permission: bool,
}

impl HostConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// Environment variables are prefixed with `SOUL_SESSION_` and use `__`
    /// between section and key, e.g. `SOUL_SESSION_STORAGE__DATA_DIR`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        let config_path = path.map_or_else(|| PathBuf::from("session.toml"), Path::to_path_buf);
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        } else if path.is_some() {
            return Err(HostError::Config(format!(
                "config file {} not found",
                config_path.display()
            )));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("SOUL_SESSION")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.session
            .validate()
            .map_err(|e| HostError::Config(e.to_string()))?;

        if self.storage.data_dir.as_os_str().is_empty() {
            return Err(HostError::Config("storage.data_dir must not be empty".to_string()));
        }

        if self.platform.launch_target.trim().is_empty() {
            return Err(HostError::Config(
                "platform.launch_target must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_storage() -> StorageSettings {
    StorageSettings {
        data_dir: default_data_dir(),
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_platform() -> PlatformSettings {
    PlatformSettings {
        launch_target: default_launch_target(),
        deny_foreground: false,
        notification_permission: default_notification_permission(),
    }
}

fn default_launch_target() -> String {
    "main".to_string()
}

fn default_notification_permission() -> bool {
    true
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            storage: default_storage(),
            platform: default_platform(),
        }
    }
}
