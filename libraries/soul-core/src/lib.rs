//! Soul Session Core
//!
//! Platform-agnostic types, collaborator traits, and error handling shared by
//! the playback session service and its hosts.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `PlaybackItem`, `PlayerSnapshot`, `ControlAction`, `Alert`, etc.
//! - **Collaborator Traits**: `Player`, `SessionTransport`, `NotificationHost`, `HostPlatform`
//! - **Error Handling**: Unified `SoulError` and `Result` types
//!
//! Nothing here touches an OS API. A host (desktop daemon, mobile bridge,
//! test harness) provides implementations of the traits.
//!
//! # Example
//!
//! ```rust
//! use soul_core::types::{MediaId, PlaybackItem};
//!
//! let item = PlaybackItem::new("t1", "content://a", "Song A", "");
//! assert_eq!(item.id(), &MediaId::new("t1"));
//! assert!(item.has_source());
//!
//! // Empty ids are replaced with a generated one
//! let anonymous = PlaybackItem::new("", "", "", "");
//! assert!(!anonymous.id().as_str().is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, SoulError};
pub use traits::{
    HostPlatform, NotificationHost, PlaybackObserver, Player, SessionTransport,
    StatusSurfaceProvider,
};

pub use types::{
    Alert, CallerInfo, ControlAction, ControlCommand, ControlIcon, LaunchAction, ListenerId,
    MediaId, PlaybackItem, PlaybackStatus, PlayerSnapshot, SessionBinding, StatusChannel,
    StatusSurface,
};
