//! Authoritative world state.
//!
//! This module owns the records that describe the arena: persistent
//! [`Site`]s, the per-turn [`Unit`] roster, and the [`World`] registry that
//! holds both. The decision layer only ever reads through shared references;
//! all mutation goes through the world's update entry points.
pub mod site;
pub mod unit;
pub mod world;

pub use site::{
    GarrisonKind, GarrisonView, MineView, Site, SiteId, Structure, StructureKind, TowerView,
};
pub use unit::{Unit, UnitId, UnitKind};
pub use world::World;

/// Allegiance of a site or unit, from our point of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Owner {
    /// Nobody holds it (sites only).
    #[default]
    Neutral,
    /// Us.
    Friendly,
    /// The opponent.
    Enemy,
}

impl Owner {
    /// Decodes the judge's owner code (`-1` none, `0` self, `1` enemy).
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::Neutral),
            0 => Some(Self::Friendly),
            1 => Some(Self::Enemy),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_friendly(self) -> bool {
        matches!(self, Self::Friendly)
    }

    #[inline]
    pub const fn is_enemy(self) -> bool {
        matches!(self, Self::Enemy)
    }
}
