mod control;
mod ids;
mod item;
mod playback;
mod session;
mod status;

pub use control::{ControlAction, ControlCommand, ControlIcon};
pub use ids::{ListenerId, MediaId};
pub use item::PlaybackItem;
pub use playback::{PlaybackStatus, PlayerSnapshot};
pub use session::{CallerInfo, SessionBinding};
pub use status::{Alert, ChannelImportance, LaunchAction, StatusChannel, StatusSurface};
