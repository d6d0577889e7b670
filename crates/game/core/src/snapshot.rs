//! Typed per-turn input handed to the decision core by the turn driver.
//!
//! These are plain data carriers: the protocol layer fills them from judge
//! text, tests build them directly.

use crate::geometry::Point;
use crate::state::{Owner, SiteId, StructureKind, Unit, UnitId, UnitKind};

/// Static description of a site, sent once before the first turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteInfo {
    pub id: SiteId,
    pub location: Point,
    pub radius: i32,
}

/// New values for a site's mutable fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteUpdate {
    pub id: SiteId,
    pub gold_remaining: i32,
    pub max_mine_size: i32,
    pub structure: StructureKind,
    pub owner: Owner,
    pub param1: i32,
    pub param2: i32,
}

impl SiteUpdate {
    /// An update describing an empty, unowned site.
    pub fn vacant(id: SiteId) -> Self {
        Self {
            id,
            gold_remaining: -1,
            max_mine_size: -1,
            structure: StructureKind::None,
            owner: Owner::Neutral,
            param1: -1,
            param2: -1,
        }
    }
}

/// One unit as reported this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitObservation {
    pub location: Point,
    pub owner: Owner,
    pub kind: UnitKind,
    pub health: i32,
}

impl UnitObservation {
    /// Gives the observation an identity for this turn only.
    pub fn into_unit(self, id: UnitId) -> Unit {
        Unit {
            id,
            owner: self.owner,
            location: self.location,
            kind: self.kind,
            health: self.health,
        }
    }
}

/// Everything the judge reports for one turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnSnapshot {
    pub gold: i32,
    /// Site the friendly commander is touching, if any.
    pub touched_site: Option<SiteId>,
    pub sites: Vec<SiteUpdate>,
    pub units: Vec<UnitObservation>,
}
