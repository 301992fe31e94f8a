//! Soul Session Storage
//!
//! Small, file-backed persistence for the playback session service.
//!
//! # Architecture
//!
//! - **Preferences**: named, flat string-keyed stores (one JSON file each).
//!   Reads are served from memory; `apply()` writes are handed to a
//!   background writer thread and never awaited.
//! - **Resume**: the single "last ready item" record, layered on a
//!   `Preferences` store.
//!
//! # Example
//!
//! ```rust,no_run
//! use soul_core::types::PlaybackItem;
//! use soul_storage::ResumeStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = ResumeStore::open("/var/lib/soul-session")?;
//! store.save(&PlaybackItem::new("t1", "content://a", "Song A", ""));
//!
//! // After a restart
//! let item = store.restore();
//! # Ok(())
//! # }
//! ```

mod error;

pub mod preferences;
pub mod resume;

pub use error::{Result, StorageError};
pub use preferences::{Editor, Preferences};
pub use resume::ResumeStore;
