/// ID types for Soul Session entities
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Media item identifier
///
/// Stable identifier of a playable item. Never empty once an item has been
/// handed to the player; use [`MediaId::generate`] when no id is known.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaId(String);

impl MediaId {
    /// Create a new media ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random media ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Use `id` unless it is empty, in which case generate a fresh one
    pub fn or_generate(id: impl Into<String>) -> Self {
        let id = id.into();
        if id.is_empty() {
            Self::generate()
        } else {
            Self(id)
        }
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MediaId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Handle returned by `Player::add_state_listener`
///
/// Opaque to callers; only meaningful to the player that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Create a listener ID from a raw counter value
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw counter value
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_and_non_empty() {
        let a = MediaId::generate();
        let b = MediaId::generate();
        assert!(!a.as_str().is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn or_generate_keeps_existing_ids() {
        assert_eq!(MediaId::or_generate("t1").as_str(), "t1");
        assert!(!MediaId::or_generate("").as_str().is_empty());
    }

    #[test]
    fn media_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&MediaId::new("t1")).unwrap();
        assert_eq!(json, "\"t1\"");
    }
}
