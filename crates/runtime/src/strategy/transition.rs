//! Mode transitions, evaluated in priority order (first match wins).

use royale_core::{Result, SiteId, StructureKind};

use super::{Situation, Strategy};

impl Strategy {
    /// Mode for this turn, given the previous mode and the fresh snapshot.
    ///
    /// Pure: calling it twice on the same inputs yields the same mode.
    ///
    /// # Errors
    ///
    /// [`royale_core::RoyaleError::SiteNotFound`] if the mode is bound to a
    /// site the world does not know.
    pub fn next(self, situation: &Situation<'_>) -> Result<Strategy> {
        match self {
            Self::Exploring => Ok(from_exploring(situation)),
            Self::Fleeing => Ok(from_fleeing(situation)),
            Self::CapturingSite(site) => from_capturing(site, situation),
            Self::ExpandingTower(site) => from_expanding_tower(site, situation),
            Self::ExpandingMine(site) => from_expanding_mine(site, situation),
            Self::BuildingGarrison(_) => Ok(Self::Exploring),
        }
    }
}

fn from_exploring(situation: &Situation<'_>) -> Strategy {
    if let Some(site) = situation.touched_capturable() {
        return Strategy::CapturingSite(site.id());
    }
    // Standing on one of our own sites holds the position.
    if situation.touched_site().is_none()
        && situation.is_under_threat(situation.config.explore_flee)
    {
        return Strategy::Fleeing;
    }
    Strategy::Exploring
}

fn from_fleeing(situation: &Situation<'_>) -> Strategy {
    if situation.is_under_threat(situation.config.flee_persist) {
        Strategy::Fleeing
    } else {
        Strategy::Exploring
    }
}

fn from_capturing(id: SiteId, situation: &Situation<'_>) -> Result<Strategy> {
    let site = situation.world.site(id)?;

    // A confirmed barracks or mine is never replaced by a tower.
    let keeps_structure = site.is_friendly()
        && matches!(
            site.structure_kind(),
            StructureKind::Garrison | StructureKind::Mine
        );
    if situation.defensive_trigger() && !keeps_structure {
        return Ok(Strategy::ExpandingTower(id));
    }

    // The judge already confirmed the capture: follow through with whatever stands there.
    if site.is_friendly() {
        return Ok(match site.structure_kind() {
            StructureKind::Tower => Strategy::ExpandingTower(id),
            StructureKind::Mine => Strategy::ExpandingMine(id),
            StructureKind::Garrison | StructureKind::None => Strategy::Exploring,
        });
    }

    if situation.should_extract_instead() {
        Ok(Strategy::ExpandingMine(id))
    } else {
        Ok(Strategy::BuildingGarrison(id))
    }
}

fn from_expanding_tower(id: SiteId, situation: &Situation<'_>) -> Result<Strategy> {
    let site = situation.world.site(id)?;
    let can_grow = site.is_friendly()
        && site
            .as_tower()
            .is_some_and(|tower| tower.has_room_to_grow());

    Ok(if can_grow {
        Strategy::ExpandingTower(id)
    } else {
        Strategy::Exploring
    })
}

fn from_expanding_mine(id: SiteId, situation: &Situation<'_>) -> Result<Strategy> {
    let site = situation.world.site(id)?;

    Ok(if site.is_friendly() && site.mine_has_room_to_grow() {
        Strategy::ExpandingMine(id)
    } else {
        Strategy::Exploring
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::fixtures::Arena;
    use royale_core::{Owner, RoyaleError};

    const SITE: SiteId = SiteId(1);

    #[test]
    fn exploring_captures_touched_unowned_site() {
        let arena = Arena::new().spending();
        let situation = arena.situation(Some(SITE));
        assert_eq!(
            Strategy::Exploring.next(&situation),
            Ok(Strategy::CapturingSite(SITE))
        );
    }

    #[test]
    fn exploring_flees_from_close_swarm() {
        // Eight melee units 150 away, high band is 7 within 160.
        let arena = Arena::new().with_enemy_melee_at_distance(8, 150);
        let situation = arena.situation(None);
        assert!(situation.is_under_threat(situation.config.explore_flee));
        assert_eq!(Strategy::Exploring.next(&situation), Ok(Strategy::Fleeing));
    }

    #[test]
    fn capture_takes_priority_over_fleeing() {
        let arena = Arena::new().with_enemy_melee_at_distance(8, 150);
        let situation = arena.situation(Some(SITE));
        assert_eq!(
            Strategy::Exploring.next(&situation),
            Ok(Strategy::CapturingSite(SITE))
        );
    }

    #[test]
    fn exploring_holds_friendly_site_under_swarm() {
        let arena = Arena::new()
            .with_friendly(SITE, StructureKind::Tower, 300, 400)
            .with_enemy_melee_at_distance(8, 150);
        let situation = arena.situation(Some(SITE));
        assert!(situation.is_under_threat(situation.config.explore_flee));
        assert_eq!(
            Strategy::Exploring.next(&situation),
            Ok(Strategy::Exploring)
        );
    }

    #[test]
    fn exploring_stays_on_friendly_site_when_calm() {
        let arena = Arena::new().with_friendly(SITE, StructureKind::Mine, 1, -1);
        let situation = arena.situation(Some(SITE));
        assert_eq!(
            Strategy::Exploring.next(&situation),
            Ok(Strategy::Exploring)
        );
    }

    #[test]
    fn six_units_do_not_trigger_high_band() {
        let arena = Arena::new().with_enemy_melee_at_distance(6, 150);
        let situation = arena.situation(None);
        assert_eq!(
            Strategy::Exploring.next(&situation),
            Ok(Strategy::Exploring)
        );
    }

    #[test]
    fn capturing_expands_tower_under_far_swarm() {
        let arena = Arena::new().spending().with_enemy_melee_at_distance(7, 550);
        let situation = arena.situation(Some(SITE));
        assert_eq!(
            Strategy::CapturingSite(SITE).next(&situation),
            Ok(Strategy::ExpandingTower(SITE))
        );
    }

    #[test]
    fn capturing_expands_tower_under_close_trio() {
        let arena = Arena::new().with_enemy_melee_at_distance(3, 150);
        let situation = arena.situation(Some(SITE));
        assert_eq!(
            Strategy::CapturingSite(SITE).next(&situation),
            Ok(Strategy::ExpandingTower(SITE))
        );
    }

    #[test]
    fn capturing_expands_mine_while_saving() {
        let arena = Arena::new();
        let situation = arena.situation(Some(SITE));
        assert!(situation.economy.is_saving());
        assert_eq!(
            Strategy::CapturingSite(SITE).next(&situation),
            Ok(Strategy::ExpandingMine(SITE))
        );
    }

    #[test]
    fn capturing_reissues_unconfirmed_first_garrison() {
        let arena = Arena::new().spending();
        let situation = arena.situation(Some(SITE));
        assert_eq!(
            Strategy::CapturingSite(SITE).next(&situation),
            Ok(Strategy::BuildingGarrison(SITE))
        );
    }

    #[test]
    fn capturing_confirmed_garrison_returns_to_exploring() {
        let arena = Arena::new()
            .with_friendly(SITE, StructureKind::Garrison, 0, 0)
            .spending();
        let situation = arena.situation(Some(SITE));
        assert_eq!(
            Strategy::CapturingSite(SITE).next(&situation),
            Ok(Strategy::Exploring)
        );
    }

    #[test]
    fn capturing_keeps_confirmed_garrison_under_pressure() {
        let arena = Arena::new()
            .with_friendly(SITE, StructureKind::Garrison, 0, 0)
            .spending()
            .with_enemy_melee_at_distance(3, 150);
        let situation = arena.situation(Some(SITE));
        assert!(situation.defensive_trigger());
        assert_eq!(
            Strategy::CapturingSite(SITE).next(&situation),
            Ok(Strategy::Exploring)
        );
    }

    #[test]
    fn capturing_keeps_confirmed_mine_under_pressure() {
        let arena = Arena::new()
            .with_friendly(SITE, StructureKind::Mine, 1, -1)
            .with_enemy_melee_at_distance(7, 550);
        let situation = arena.situation(Some(SITE));
        assert!(situation.defensive_trigger());
        assert_eq!(
            Strategy::CapturingSite(SITE).next(&situation),
            Ok(Strategy::ExpandingMine(SITE))
        );
    }

    #[test]
    fn capturing_confirmed_tower_under_pressure_keeps_growing() {
        let arena = Arena::new()
            .with_friendly(SITE, StructureKind::Tower, 200, 400)
            .with_enemy_melee_at_distance(3, 150);
        let situation = arena.situation(Some(SITE));
        assert_eq!(
            Strategy::CapturingSite(SITE).next(&situation),
            Ok(Strategy::ExpandingTower(SITE))
        );
    }

    #[test]
    fn capturing_with_garrison_elsewhere_expands_mine() {
        let arena = Arena::new()
            .with_friendly(SiteId(2), StructureKind::Garrison, 0, 0)
            .spending();
        let situation = arena.situation(Some(SITE));
        assert_eq!(
            Strategy::CapturingSite(SITE).next(&situation),
            Ok(Strategy::ExpandingMine(SITE))
        );
    }

    #[test]
    fn building_garrison_always_returns_to_exploring() {
        let arena = Arena::new().spending();
        let situation = arena.situation(Some(SITE));
        assert_eq!(
            Strategy::BuildingGarrison(SITE).next(&situation),
            Ok(Strategy::Exploring)
        );
    }

    #[test]
    fn tower_expansion_stops_when_full() {
        let arena = Arena::new()
            .with_friendly(SITE, StructureKind::Tower, 400, 400);
        let situation = arena.situation(Some(SITE));
        assert_eq!(
            Strategy::ExpandingTower(SITE).next(&situation),
            Ok(Strategy::Exploring)
        );

        let arena = Arena::new()
            .with_friendly(SITE, StructureKind::Tower, 300, 400);
        let situation = arena.situation(Some(SITE));
        assert_eq!(
            Strategy::ExpandingTower(SITE).next(&situation),
            Ok(Strategy::ExpandingTower(SITE))
        );
    }

    #[test]
    fn tower_expansion_stops_when_site_is_lost() {
        let arena = Arena::new()
            .with_site(SITE, StructureKind::Tower, Owner::Enemy, 100, 400);
        let situation = arena.situation(None);
        assert_eq!(
            Strategy::ExpandingTower(SITE).next(&situation),
            Ok(Strategy::Exploring)
        );
    }

    #[test]
    fn mine_expansion_runs_to_cap() {
        let arena = Arena::new().with_friendly(SITE, StructureKind::Mine, 2, -1);
        let situation = arena.situation(Some(SITE));
        assert_eq!(
            Strategy::ExpandingMine(SITE).next(&situation),
            Ok(Strategy::ExpandingMine(SITE))
        );

        let arena = Arena::new()
            .with_friendly(SITE, StructureKind::Mine, Arena::MAX_MINE_SIZE, -1);
        let situation = arena.situation(Some(SITE));
        assert_eq!(
            Strategy::ExpandingMine(SITE).next(&situation),
            Ok(Strategy::Exploring)
        );
    }

    #[test]
    fn fleeing_persists_only_under_tight_band() {
        let arena = Arena::new().with_enemy_melee_at_distance(4, 110);
        assert_eq!(
            Strategy::Fleeing.next(&arena.situation(None)),
            Ok(Strategy::Fleeing)
        );

        let arena = Arena::new().with_enemy_melee_at_distance(4, 120);
        assert_eq!(
            Strategy::Fleeing.next(&arena.situation(None)),
            Ok(Strategy::Exploring)
        );
    }

    #[test]
    fn next_is_idempotent_on_same_snapshot() {
        let arena = Arena::new().spending().with_enemy_melee_at_distance(3, 150);
        let situation = arena.situation(Some(SITE));
        for strategy in [
            Strategy::Exploring,
            Strategy::Fleeing,
            Strategy::CapturingSite(SITE),
            Strategy::ExpandingTower(SITE),
            Strategy::ExpandingMine(SITE),
            Strategy::BuildingGarrison(SITE),
        ] {
            assert_eq!(strategy.next(&situation), strategy.next(&situation));
        }
    }

    #[test]
    fn unknown_bound_site_is_fatal() {
        let arena = Arena::new();
        let situation = arena.situation(None);
        assert_eq!(
            Strategy::ExpandingMine(SiteId(99)).next(&situation),
            Err(RoyaleError::SiteNotFound { id: SiteId(99) })
        );
    }
}
