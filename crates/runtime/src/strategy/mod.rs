//! The commander's behavioural state machine.
//!
//! Each turn runs in two steps:
//!
//! 1. [`Strategy::next`] decides the mode for this turn from the previous
//!    mode and the fresh snapshot ([`transition`]).
//! 2. [`Strategy::act`] turns the resulting mode into one agent action
//!    ([`actions`]).
//!
//! Transitions always happen before the action, so no mode has to handle
//! "I was only just entered". Both steps are pure functions of
//! `(Strategy, Situation)`.

mod actions;
mod context;
#[cfg(test)]
mod fixtures;
mod transition;

use std::fmt;

use royale_core::SiteId;

pub use context::Situation;

/// Behavioural mode of the commander.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Strategy {
    /// Walk toward the nearest safe unclaimed site.
    #[default]
    Exploring,
    /// Get away from a melee swarm.
    Fleeing,
    /// Claim the touched site.
    CapturingSite(SiteId),
    /// Keep upgrading a tower while it has room to grow.
    ExpandingTower(SiteId),
    /// Keep upgrading a mine until it reaches the site's cap.
    ExpandingMine(SiteId),
    /// Reissue the first garrison order once, then explore.
    BuildingGarrison(SiteId),
}

impl Strategy {
    /// Site the mode is bound to, if any.
    pub const fn site(&self) -> Option<SiteId> {
        match *self {
            Self::Exploring | Self::Fleeing => None,
            Self::CapturingSite(site)
            | Self::ExpandingTower(site)
            | Self::ExpandingMine(site)
            | Self::BuildingGarrison(site) => Some(site),
        }
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.site() {
            Some(site) => write!(f, "{}({site})", self.name()),
            None => f.write_str(self.name()),
        }
    }
}
