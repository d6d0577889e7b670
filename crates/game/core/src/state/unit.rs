//! Mobile units observed in the current turn.

use std::fmt;

use super::Owner;
use crate::geometry::Point;

/// Identifier of a unit within a single turn's roster.
///
/// The judge does not expose persistent unit ids, so this is the unit's
/// index in the turn's observation list. It must not be carried across turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum UnitKind {
    /// Ground melee attacker (knight).
    Melee,
    /// Ranged defender (archer).
    Ranged,
    /// Structure-breaking heavy (giant).
    Heavy,
    /// The queen; at most one per owner.
    Commander,
}

impl UnitKind {
    /// Decodes the judge's unit type (`-1` queen, `0` knight, `1` archer, `2` giant).
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::Commander),
            0 => Some(Self::Melee),
            1 => Some(Self::Ranged),
            2 => Some(Self::Heavy),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unit {
    pub id: UnitId,
    pub owner: Owner,
    pub location: Point,
    pub kind: UnitKind,
    pub health: i32,
}

impl Unit {
    #[inline]
    pub fn is_enemy(&self) -> bool {
        self.owner.is_enemy()
    }

    #[inline]
    pub fn is_friendly(&self) -> bool {
        self.owner.is_friendly()
    }

    #[inline]
    pub fn is_commander(&self) -> bool {
        self.kind == UnitKind::Commander
    }

    /// An enemy melee unit: the only kind the threat model counts.
    #[inline]
    pub fn is_enemy_melee(&self) -> bool {
        self.is_enemy() && self.kind == UnitKind::Melee
    }
}
