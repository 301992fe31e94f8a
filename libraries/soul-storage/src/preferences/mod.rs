//! Named key-value preferences
//!
//! A `Preferences` store is a flat map of string keys to string values,
//! persisted as one JSON file per store name. Reads come from memory.
//!
//! Writes go through an [`Editor`]:
//! - `apply()` updates memory immediately and queues the file write on a
//!   background thread. The caller gets no acknowledgment; a crash right
//!   after `apply()` can lose the write.
//! - `commit()` waits for queued writes and then writes synchronously.
//!
//! # Example
//!
//! ```rust
//! use soul_storage::Preferences;
//!
//! let prefs = Preferences::in_memory("ui");
//! prefs.edit().put("theme", "dark").apply();
//! assert_eq!(prefs.get("theme").as_deref(), Some("dark"));
//! ```

use crate::error::{Result, StorageError};
use crossbeam_channel::{Receiver, Sender};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::thread::JoinHandle;
use tracing::{debug, warn};

type Entries = BTreeMap<String, String>;

enum WriteRequest {
    /// Replace the file contents with this snapshot
    Persist(Entries),
    /// Acknowledge once everything queued before is on disk
    Flush(Sender<()>),
}

struct Writer {
    tx: Sender<WriteRequest>,
    handle: JoinHandle<()>,
}

/// Named, flat string-keyed durable store
pub struct Preferences {
    name: String,
    path: Option<PathBuf>,
    entries: RwLock<Entries>,
    writer: Option<Writer>,
}

impl Preferences {
    /// Open (or create) the store `<dir>/<name>.json`
    ///
    /// A missing file is an empty store. An unreadable or corrupt file is
    /// logged and also treated as empty; the next write replaces it.
    ///
    /// # Errors
    /// Returns an error if `name` is not a plain file name, the directory
    /// cannot be created, or the writer thread cannot be spawned
    pub fn open(dir: impl AsRef<Path>, name: &str) -> Result<Self> {
        validate_name(name)?;

        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{name}.json"));
        let entries = load_entries(&path);

        let (tx, rx) = crossbeam_channel::unbounded();
        let writer_path = path.clone();
        let handle = std::thread::Builder::new()
            .name(format!("prefs-{name}"))
            .spawn(move || run_writer(&writer_path, &rx))?;

        debug!(store = name, path = %path.display(), keys = entries.len(), "Opened preferences");

        Ok(Self {
            name: name.to_string(),
            path: Some(path),
            entries: RwLock::new(entries),
            writer: Some(Writer { tx, handle }),
        })
    }

    /// Create a store that lives only in memory
    pub fn in_memory(name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: None,
            entries: RwLock::new(Entries::new()),
            writer: None,
        }
    }

    /// Store name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Backing file, if the store is file-backed
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get a value
    pub fn get(&self, key: &str) -> Option<String> {
        self.read().get(key).cloned()
    }

    /// Check whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Start a batch of changes
    pub fn edit(&self) -> Editor<'_> {
        Editor {
            prefs: self,
            clear: false,
            changes: Vec::new(),
        }
    }

    /// Wait until every queued write has reached the file
    ///
    /// No-op for in-memory stores.
    ///
    /// # Errors
    /// Returns `WriterClosed` if the writer thread has stopped
    pub fn flush(&self) -> Result<()> {
        let Some(writer) = &self.writer else {
            return Ok(());
        };

        let (ack_tx, ack_rx) = crossbeam_channel::bounded(1);
        writer
            .tx
            .send(WriteRequest::Flush(ack_tx))
            .map_err(|_| StorageError::WriterClosed(self.name.clone()))?;
        ack_rx
            .recv()
            .map_err(|_| StorageError::WriterClosed(self.name.clone()))
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply changes in memory; with `queue` the snapshot is handed to the
    /// writer before the lock is released, so queued snapshots stay in order
    fn merge(&self, clear: bool, changes: Vec<(String, Option<String>)>, queue: bool) -> Entries {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if clear {
            entries.clear();
        }
        for (key, value) in changes {
            match value {
                Some(value) => {
                    entries.insert(key, value);
                }
                None => {
                    entries.remove(&key);
                }
            }
        }

        let snapshot = entries.clone();
        if queue {
            self.enqueue(snapshot.clone());
        }
        snapshot
    }

    fn enqueue(&self, snapshot: Entries) {
        let Some(writer) = &self.writer else {
            return;
        };

        if writer.tx.send(WriteRequest::Persist(snapshot)).is_err() {
            warn!(store = %self.name, "Preferences writer stopped, change kept in memory only");
        }
    }
}

impl std::fmt::Debug for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("keys", &self.len())
            .finish_non_exhaustive()
    }
}

impl Drop for Preferences {
    fn drop(&mut self) {
        if let Some(Writer { tx, handle }) = self.writer.take() {
            // Disconnecting lets the writer drain what is queued, then exit
            drop(tx);
            if handle.join().is_err() {
                warn!(store = %self.name, "Preferences writer panicked");
            }
        }
    }
}

/// Batch of changes to a [`Preferences`] store
#[must_use = "changes are only stored by apply() or commit()"]
pub struct Editor<'a> {
    prefs: &'a Preferences,
    clear: bool,
    changes: Vec<(String, Option<String>)>,
}

impl Editor<'_> {
    /// Set a value
    pub fn put(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.changes.push((key.into(), Some(value.into())));
        self
    }

    /// Remove a value
    pub fn remove(mut self, key: impl Into<String>) -> Self {
        self.changes.push((key.into(), None));
        self
    }

    /// Remove every value before applying the other changes
    pub fn clear(mut self) -> Self {
        self.clear = true;
        self
    }

    /// Store the changes without waiting for the disk
    pub fn apply(self) {
        self.prefs.merge(self.clear, self.changes, true);
    }

    /// Store the changes and write them to disk before returning
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn commit(self) -> Result<()> {
        let prefs = self.prefs;
        let snapshot = prefs.merge(self.clear, self.changes, false);
        let Some(path) = prefs.path() else {
            return Ok(());
        };

        // Queued applies must not land after (and overwrite) this write
        prefs.flush()?;
        write_entries(path, &snapshot)
    }
}

fn validate_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\']);
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidName(name.to_string()))
    }
}

fn load_entries(path: &Path) -> Entries {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Entries::new(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Cannot read preferences, starting empty");
            return Entries::new();
        }
    };

    serde_json::from_str(&contents).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "Corrupt preferences file, starting empty");
        Entries::new()
    })
}

fn write_entries(path: &Path, entries: &Entries) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn run_writer(path: &Path, rx: &Receiver<WriteRequest>) {
    while let Ok(request) = rx.recv() {
        let mut latest = None;
        let mut acks = Vec::new();

        match request {
            WriteRequest::Persist(entries) => latest = Some(entries),
            WriteRequest::Flush(ack) => acks.push(ack),
        }

        // Only the newest snapshot matters; acks wait for it
        while let Ok(next) = rx.try_recv() {
            match next {
                WriteRequest::Persist(entries) => latest = Some(entries),
                WriteRequest::Flush(ack) => acks.push(ack),
            }
        }

        if let Some(entries) = latest {
            if let Err(e) = write_entries(path, &entries) {
                warn!(path = %path.display(), error = %e, "Failed to write preferences");
            }
        }

        for ack in acks {
            let _ = ack.send(());
        }
    }

    debug!(path = %path.display(), "Preferences writer stopped");
}
