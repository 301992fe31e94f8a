//! Control surface derivation
//!
//! Maps the live player state to the buttons external surfaces show.

use soul_core::types::{ControlAction, ControlCommand, ControlIcon, PlayerSnapshot};

/// Number of buttons every surface gets
pub const CONTROL_COUNT: usize = 5;

/// Builds the ordered button list for external control surfaces
///
/// Always five buttons: skip-previous, seek-back, toggle-play-pause,
/// seek-forward, skip-next. By default all of them are enabled whatever the
/// player can actually do; [`ControlSurfaceBuilder::with_availability`]
/// opts into disabling the ones that would be no-ops.
///
/// The toggle icon follows `is_playing` at call time, so results must not be
/// cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlSurfaceBuilder {
    respect_availability: bool,
}

impl ControlSurfaceBuilder {
    /// Builder with every button always enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable buttons the player cannot act on
    #[must_use]
    pub fn with_availability(mut self, respect_availability: bool) -> Self {
        self.respect_availability = respect_availability;
        self
    }

    /// Whether unavailable buttons are disabled
    pub fn respects_availability(&self) -> bool {
        self.respect_availability
    }

    /// Build the buttons for `snapshot`
    pub fn build(&self, snapshot: &PlayerSnapshot) -> Vec<ControlAction> {
        let toggle_icon = if snapshot.is_playing {
            ControlIcon::Pause
        } else {
            ControlIcon::Play
        };

        let (previous, seek, next) = if self.respect_availability {
            let has_media = snapshot.media_item_count > 0;
            (snapshot.has_previous, has_media, snapshot.has_next)
        } else {
            (true, true, true)
        };

        vec![
            ControlAction::new(ControlCommand::SkipPrevious, ControlIcon::SkipPrevious)
                .enabled(previous),
            ControlAction::new(ControlCommand::SeekBack, ControlIcon::SeekBack).enabled(seek),
            ControlAction::new(ControlCommand::TogglePlayPause, toggle_icon),
            ControlAction::new(ControlCommand::SeekForward, ControlIcon::SeekForward)
                .enabled(seek),
            ControlAction::new(ControlCommand::SkipNext, ControlIcon::SkipNext).enabled(next),
        ]
    }
}
