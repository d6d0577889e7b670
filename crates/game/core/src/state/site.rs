//! Persistent build sites and the structures occupying them.
//!
//! A site's location and radius never change. Everything else is replaced by
//! each turn's [`SiteUpdate`]. The judge reports two opaque parameters per
//! site whose meaning depends on the structure standing there; [`Structure`]
//! decodes them once so callers work with named fields instead.

use std::fmt;

use super::Owner;
use crate::geometry::Point;
use crate::snapshot::{SiteInfo, SiteUpdate};

/// Stable identifier of a site, assigned by the judge at game start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SiteId(pub i32);

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tag of the structure standing on a site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum StructureKind {
    #[default]
    None,
    Mine,
    Tower,
    Garrison,
}

impl StructureKind {
    /// Decodes the judge's structure code (`-1` none, `0` mine, `1` tower, `2` barracks).
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::None),
            0 => Some(Self::Mine),
            1 => Some(Self::Tower),
            2 => Some(Self::Garrison),
            _ => None,
        }
    }
}

/// Unit type a garrison trains.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum GarrisonKind {
    #[default]
    Knight,
    Archer,
    Giant,
}

impl GarrisonKind {
    /// Decodes the variant code a barracks reports in its second parameter.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Knight),
            1 => Some(Self::Archer),
            2 => Some(Self::Giant),
            _ => None,
        }
    }
}

/// Resource extractor parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MineView {
    /// Current extraction level (income per turn).
    pub level: i32,
}

/// Tower parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TowerView {
    pub hp: i32,
    pub attack_range: i32,
}

impl TowerView {
    /// A tower keeps accepting upgrades while its hp is below its range figure.
    #[inline]
    pub const fn has_room_to_grow(&self) -> bool {
        self.hp < self.attack_range
    }

    /// Whether something at `distance` from this tower is inside its attack radius.
    #[inline]
    pub fn covers(&self, distance: f64) -> bool {
        distance <= f64::from(self.attack_range)
    }
}

/// Garrison (barracks) parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GarrisonView {
    /// Turns until the garrison can train again; 0 when idle.
    pub turns_until_train: i32,
    /// Raw variant code reported by the judge.
    pub variant_code: i32,
}

impl GarrisonView {
    pub const fn kind(&self) -> Option<GarrisonKind> {
        GarrisonKind::from_code(self.variant_code)
    }
}

/// Structure on a site with its kind-specific parameters decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Structure {
    #[default]
    Empty,
    Mine(MineView),
    Tower(TowerView),
    Garrison(GarrisonView),
}

impl Structure {
    /// Interprets the judge's `(param1, param2)` pair for the given kind.
    pub const fn from_params(kind: StructureKind, param1: i32, param2: i32) -> Self {
        match kind {
            StructureKind::None => Self::Empty,
            StructureKind::Mine => Self::Mine(MineView { level: param1 }),
            StructureKind::Tower => Self::Tower(TowerView {
                hp: param1,
                attack_range: param2,
            }),
            StructureKind::Garrison => Self::Garrison(GarrisonView {
                turns_until_train: param1,
                variant_code: param2,
            }),
        }
    }

    pub const fn kind(&self) -> StructureKind {
        match self {
            Self::Empty => StructureKind::None,
            Self::Mine(_) => StructureKind::Mine,
            Self::Tower(_) => StructureKind::Tower,
            Self::Garrison(_) => StructureKind::Garrison,
        }
    }
}

/// A capturable structure slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Site {
    id: SiteId,
    location: Point,
    radius: i32,
    pub owner: Owner,
    /// Gold left to extract; `-1` when unknown.
    pub gold_remaining: i32,
    /// Maximum extraction level; `-1` when unknown.
    pub max_mine_size: i32,
    pub structure: Structure,
}

impl Site {
    /// Creates an unowned, empty site from its static description.
    pub fn new(info: SiteInfo) -> Self {
        Self {
            id: info.id,
            location: info.location,
            radius: info.radius,
            owner: Owner::Neutral,
            gold_remaining: -1,
            max_mine_size: -1,
            structure: Structure::Empty,
        }
    }

    #[inline]
    pub fn id(&self) -> SiteId {
        self.id
    }

    #[inline]
    pub fn location(&self) -> Point {
        self.location
    }

    #[inline]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Overwrites every mutable field from the update.
    pub(crate) fn apply(&mut self, update: &SiteUpdate) {
        self.owner = update.owner;
        self.gold_remaining = update.gold_remaining;
        self.max_mine_size = update.max_mine_size;
        self.structure = Structure::from_params(update.structure, update.param1, update.param2);
    }

    #[inline]
    pub fn structure_kind(&self) -> StructureKind {
        self.structure.kind()
    }

    #[inline]
    pub fn is_friendly(&self) -> bool {
        self.owner.is_friendly()
    }

    #[inline]
    pub fn is_enemy(&self) -> bool {
        self.owner.is_enemy()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self.structure, Structure::Empty)
    }

    pub fn as_mine(&self) -> Option<MineView> {
        match self.structure {
            Structure::Mine(view) => Some(view),
            _ => None,
        }
    }

    pub fn as_tower(&self) -> Option<TowerView> {
        match self.structure {
            Structure::Tower(view) => Some(view),
            _ => None,
        }
    }

    pub fn as_garrison(&self) -> Option<GarrisonView> {
        match self.structure {
            Structure::Garrison(view) => Some(view),
            _ => None,
        }
    }

    /// A mine whose extraction level is still below the site's cap.
    pub fn mine_has_room_to_grow(&self) -> bool {
        self.as_mine()
            .is_some_and(|mine| mine.level < self.max_mine_size)
    }

    /// Distance from this site's centre to `point`.
    #[inline]
    pub fn distance_to(&self, point: Point) -> f64 {
        self.location.distance(point)
    }
}
