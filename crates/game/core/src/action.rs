//! Commands the bot can issue each turn.
//!
//! A turn produces exactly one [`AgentAction`] for the commander and one
//! [`ProductionOrder`]. Both implement `Display` in the judge's text format.

use std::fmt;

use crate::geometry::Point;
use crate::state::{GarrisonKind, SiteId, StructureKind};

/// Structure the commander can order on a site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuildKind {
    Mine,
    Tower,
    Garrison(GarrisonKind),
}

impl BuildKind {
    /// Structure tag the site will carry once the order is confirmed.
    pub const fn structure_kind(self) -> StructureKind {
        match self {
            Self::Mine => StructureKind::Mine,
            Self::Tower => StructureKind::Tower,
            Self::Garrison(_) => StructureKind::Garrison,
        }
    }
}

impl fmt::Display for BuildKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mine => f.write_str("MINE"),
            Self::Tower => f.write_str("TOWER"),
            Self::Garrison(kind) => write!(f, "BARRACKS-{kind}"),
        }
    }
}

/// The commander's action for this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentAction {
    Move(Point),
    Build { site: SiteId, kind: BuildKind },
    Wait,
}

impl AgentAction {
    pub const fn build(site: SiteId, kind: BuildKind) -> Self {
        Self::Build { site, kind }
    }

    /// Site and structure of a build order.
    pub const fn as_build(&self) -> Option<(SiteId, BuildKind)> {
        match *self {
            Self::Build { site, kind } => Some((site, kind)),
            _ => None,
        }
    }
}

impl fmt::Display for AgentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(target) => write!(f, "MOVE {} {}", target.x, target.y),
            Self::Build { site, kind } => write!(f, "BUILD {site} {kind}"),
            Self::Wait => f.write_str("WAIT"),
        }
    }
}

/// Training directive for this turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProductionOrder {
    /// Train nothing in particular.
    #[default]
    TrainDefault,
    TrainAt(SiteId),
}

impl fmt::Display for ProductionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrainDefault => f.write_str("TRAIN"),
            Self::TrainAt(site) => write!(f, "TRAIN {site}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_agent_actions() {
        assert_eq!(
            AgentAction::Move(Point::new(120, 845)).to_string(),
            "MOVE 120 845"
        );
        assert_eq!(AgentAction::Wait.to_string(), "WAIT");
        assert_eq!(
            AgentAction::build(SiteId(7), BuildKind::Mine).to_string(),
            "BUILD 7 MINE"
        );
        assert_eq!(
            AgentAction::build(SiteId(12), BuildKind::Tower).to_string(),
            "BUILD 12 TOWER"
        );
    }

    #[test]
    fn renders_garrison_variants() {
        let cases = [
            (GarrisonKind::Knight, "BUILD 3 BARRACKS-KNIGHT"),
            (GarrisonKind::Archer, "BUILD 3 BARRACKS-ARCHER"),
            (GarrisonKind::Giant, "BUILD 3 BARRACKS-GIANT"),
        ];
        for (kind, expected) in cases {
            let action = AgentAction::build(SiteId(3), BuildKind::Garrison(kind));
            assert_eq!(action.to_string(), expected);
        }
    }

    #[test]
    fn renders_production_orders() {
        assert_eq!(ProductionOrder::TrainDefault.to_string(), "TRAIN");
        assert_eq!(ProductionOrder::TrainAt(SiteId(5)).to_string(), "TRAIN 5");
    }
}
