//! Soul Session Host Library
//!
//! Headless host for the playback session coordinator: an in-memory player,
//! console adapters for the session transport, notifications and platform,
//! and a command loop that feeds stdin lines to the coordinator.
//!
//! This library exposes the host components for testing purposes.

pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod host;
pub mod player;

// Re-export commonly used types for convenience
pub use command::HostCommand;
pub use config::HostConfig;
pub use console::{ConsoleNotifications, ConsolePlatform, ConsoleTransport};
pub use error::{HostError, Result};
pub use host::{Flow, SessionHost};
pub use player::HeadlessPlayer;
