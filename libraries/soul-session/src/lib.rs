//! Soul Session - Playback Session Coordination
//!
//! Owns one player for the lifetime of a background playback service and
//! exposes it to external controllers safely.
//!
//! This crate provides:
//! - Session lifecycle state machine (`Uninitialized → Active → Terminated`)
//! - Control intent handling, including resume-on-play from persisted state
//! - Control surface derivation (five fixed buttons)
//! - Status channel registration and the foreground-denied fallback alert
//! - Process teardown decisions on task removal
//!
//! # Architecture
//!
//! `soul-session` is platform-agnostic. The player, the session transport,
//! the notification API and the host process are all traits from
//! `soul-core`; a host injects implementations when it builds the
//! [`SessionCoordinator`]. Every mutating operation takes `&mut self`, so a
//! host that owns the coordinator on one task gets serialized event
//! handling for free.
//!
//! # Example
//!
//! ```rust,ignore
//! use soul_session::{ControlIntent, KeyCode, KeyEvent, SessionConfig, SessionCoordinator};
//! use soul_storage::ResumeStore;
//! use std::sync::Arc;
//!
//! let resume = Arc::new(ResumeStore::open(data_dir)?);
//! let mut coordinator = SessionCoordinator::new(
//!     player, transport, platform, notifications, resume, SessionConfig::default(),
//! );
//! coordinator.start()?;
//!
//! // A headset button press after a restart queues the last item first
//! coordinator.handle_intent(ControlIntent::media_button(KeyEvent::down(KeyCode::Play)))?;
//!
//! // UI swiped away while paused: the host gets a termination request
//! coordinator.on_task_removed();
//! coordinator.shutdown();
//! ```

mod config;
mod controls;
mod coordinator;
mod error;
mod intent;
mod notifier;
mod observer;

// Public exports
pub use config::SessionConfig;
pub use controls::{ControlSurfaceBuilder, CONTROL_COUNT};
pub use coordinator::{IntentOutcome, Lifecycle, SessionCoordinator};
pub use error::{Result, SessionError};
pub use intent::{ControlIntent, KeyAction, KeyCode, KeyEvent};
pub use notifier::{AlertOutcome, ChannelOutcome, MediaStatusProvider, StatusNotifier};
pub use observer::ResumeRecorder;
