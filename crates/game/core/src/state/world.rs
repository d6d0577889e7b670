//! Site and unit registries.
//!
//! [`World`] owns two collections:
//!
//! - **Sites**: registered once at game start, then updated in place by id.
//!   Unknown ids in an update are a protocol violation.
//! - **Units**: replaced wholesale every turn. No identity survives a turn.
//!
//! It also bridges the one-turn latency between issuing a build and seeing
//! the judge confirm ownership: the bot records a pending structure intent
//! when it orders a build on a site it does not own, and the update that
//! flips that site to us consumes it.

use std::collections::{BTreeMap, HashMap};

use super::{Site, SiteId, StructureKind, Unit, UnitId, UnitKind};
use crate::action::BuildKind;
use crate::error::{Result, RoyaleError};
use crate::geometry::Point;
use crate::snapshot::{SiteInfo, SiteUpdate};

#[derive(Clone, Debug, Default)]
pub struct World {
    sites: BTreeMap<SiteId, Site>,
    units: BTreeMap<UnitId, Unit>,
    /// Structure ordered on a not-yet-owned site, awaiting confirmation.
    pending_intent: Option<BuildKind>,
    /// Structure kind we ordered on each site we currently own.
    claimed: HashMap<SiteId, BuildKind>,
}

impl World {
    /// Registers the arena's sites. Later registrations of an existing id are ignored.
    pub fn new<I>(sites: I) -> Self
    where
        I: IntoIterator<Item = SiteInfo>,
    {
        let mut world = Self::default();
        for info in sites {
            let id = info.id;
            world.sites.entry(id).or_insert_with(|| Site::new(info));
        }
        world
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    pub fn site(&self, id: SiteId) -> Result<&Site> {
        self.sites.get(&id).ok_or(RoyaleError::SiteNotFound { id })
    }

    pub fn unit(&self, id: UnitId) -> Result<&Unit> {
        self.units.get(&id).ok_or(RoyaleError::UnitNotFound { id })
    }

    /// All sites in id order.
    pub fn sites(&self) -> impl Iterator<Item = &Site> {
        self.sites.values()
    }

    /// All units of the current turn in id order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    /// Sites matching `predicate`, nearest first when `near` is given.
    ///
    /// Ties (and the unordered case) fall back to id order.
    pub fn sites_where<P>(&self, predicate: P, near: Option<Point>) -> Vec<&Site>
    where
        P: Fn(&Site) -> bool,
    {
        let mut found: Vec<&Site> = self.sites.values().filter(|s| predicate(s)).collect();
        if let Some(point) = near {
            found.sort_by(|a, b| a.distance_to(point).total_cmp(&b.distance_to(point)));
        }
        found
    }

    /// Units matching `predicate`, nearest first when `near` is given.
    pub fn units_where<P>(&self, predicate: P, near: Option<Point>) -> Vec<&Unit>
    where
        P: Fn(&Unit) -> bool,
    {
        let mut found: Vec<&Unit> = self.units.values().filter(|u| predicate(u)).collect();
        if let Some(point) = near {
            found.sort_by(|a, b| {
                a.location
                    .distance(point)
                    .total_cmp(&b.location.distance(point))
            });
        }
        found
    }

    /// Closest site to `point` matching `predicate`.
    pub fn nearest_site_where<P>(&self, point: Point, predicate: P) -> Option<&Site>
    where
        P: Fn(&Site) -> bool,
    {
        self.sites_where(predicate, Some(point)).into_iter().next()
    }

    // ========================================================================
    // Domain queries
    // ========================================================================

    pub fn friendly_garrisons(&self) -> Vec<&Site> {
        self.sites_where(
            |s| s.is_friendly() && s.structure_kind() == StructureKind::Garrison,
            None,
        )
    }

    pub fn friendly_towers(&self) -> Vec<&Site> {
        self.sites_where(
            |s| s.is_friendly() && s.structure_kind() == StructureKind::Tower,
            None,
        )
    }

    pub fn enemy_towers(&self) -> Vec<&Site> {
        self.sites_where(
            |s| s.is_enemy() && s.structure_kind() == StructureKind::Tower,
            None,
        )
    }

    /// Enemy towers whose attack radius reaches `point`.
    pub fn enemy_towers_covering(&self, point: Point) -> Vec<&Site> {
        self.sites_where(
            |s| {
                s.is_enemy()
                    && s.as_tower()
                        .is_some_and(|tower| tower.covers(s.distance_to(point)))
            },
            None,
        )
    }

    /// Our commander in the current roster.
    pub fn friendly_commander(&self) -> Result<&Unit> {
        self.units
            .values()
            .find(|u| u.is_friendly() && u.kind == UnitKind::Commander)
            .ok_or(RoyaleError::CommanderMissing)
    }

    pub fn enemy_commander(&self) -> Option<&Unit> {
        self.units
            .values()
            .find(|u| u.is_enemy() && u.kind == UnitKind::Commander)
    }

    // ========================================================================
    // Structure intent bookkeeping
    // ========================================================================

    /// Records the structure about to be ordered on a site we do not own yet.
    pub fn set_pending_intent(&mut self, kind: BuildKind) {
        self.pending_intent = Some(kind);
    }

    pub fn pending_intent(&self) -> Option<BuildKind> {
        self.pending_intent
    }

    /// Structure we ordered on a site we currently own, if we ordered it.
    pub fn claimed_structure(&self, id: SiteId) -> Option<BuildKind> {
        self.claimed.get(&id).copied()
    }

    // ========================================================================
    // Updates
    // ========================================================================

    /// Applies one site update in place.
    ///
    /// # Errors
    ///
    /// - [`RoyaleError::UnknownSite`] if the id was never registered
    /// - [`RoyaleError::MissingStructureIntent`] if the site becomes ours
    ///   while no structure intent is pending
    pub fn apply_site_update(&mut self, update: &SiteUpdate) -> Result<()> {
        let site = self
            .sites
            .get_mut(&update.id)
            .ok_or(RoyaleError::UnknownSite { id: update.id })?;

        let was_ours = site.is_friendly();
        let now_ours = update.owner.is_friendly();

        if !was_ours && now_ours {
            let kind = self
                .pending_intent
                .take()
                .ok_or(RoyaleError::MissingStructureIntent { site: update.id })?;
            self.claimed.insert(update.id, kind);
        } else if was_ours && !now_ours {
            self.claimed.remove(&update.id);
        }

        site.apply(update);
        Ok(())
    }

    /// Applies a turn's worth of site updates, stopping at the first error.
    pub fn apply_site_updates(&mut self, updates: &[SiteUpdate]) -> Result<()> {
        updates
            .iter()
            .try_for_each(|update| self.apply_site_update(update))
    }

    /// Replaces the whole unit roster with this turn's observations.
    pub fn replace_units<I>(&mut self, units: I)
    where
        I: IntoIterator<Item = Unit>,
    {
        self.units = units.into_iter().map(|unit| (unit.id, unit)).collect();
    }
}
