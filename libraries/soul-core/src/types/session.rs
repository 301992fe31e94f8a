/// Session transport types
use super::status::LaunchAction;
use serde::{Deserialize, Serialize};

/// What the transport needs to publish a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionBinding {
    /// Identifier controllers use to discover the session
    pub session_id: String,

    /// Action that opens the host UI when a controller asks for it
    pub launch_action: LaunchAction,
}

/// Identity of a controller asking for the session
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CallerInfo {
    /// Package/application name of the controller
    pub name: String,

    /// Process id, when the transport knows it
    pub pid: Option<u32>,
}

impl CallerInfo {
    /// Create caller info from a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pid: None,
        }
    }

    /// Attach a process id
    #[must_use]
    pub fn with_pid(mut self, pid: u32) -> Self {
        self.pid = Some(pid);
        self
    }
}
