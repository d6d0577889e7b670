//! Per-mode action selection.
//!
//! Every mode yields exactly one [`AgentAction`]. Movement targets come from
//! the sensing layer; when no safe site exists the commander rallies at the
//! nearest friendly tower, and waits if there is none.

use royale_core::{AgentAction, BuildKind, Result, Site, SiteId, StructureKind, ThreatBand};
use tracing::warn;

use super::{Situation, Strategy};

impl Strategy {
    /// The action this mode takes on the current snapshot.
    ///
    /// # Errors
    ///
    /// Only fatal errors are returned (unknown bound site). Recoverable
    /// sensing failures are resolved here with a fallback move.
    pub fn act(&self, situation: &Situation<'_>) -> Result<AgentAction> {
        match *self {
            Self::Exploring => explore(situation),
            Self::Fleeing => flee(situation),
            Self::CapturingSite(site) => capture(site, situation),
            Self::ExpandingTower(site) => Ok(AgentAction::build(site, BuildKind::Tower)),
            Self::ExpandingMine(site) => Ok(AgentAction::build(site, BuildKind::Mine)),
            Self::BuildingGarrison(site) => Ok(AgentAction::build(
                site,
                BuildKind::Garrison(situation.config.first_garrison),
            )),
        }
    }
}

fn explore(situation: &Situation<'_>) -> Result<AgentAction> {
    let Some(site) = situation.touched_capturable() else {
        return approach_safe_site(situation);
    };

    let kind = if situation.is_under_threat(situation.config.explore_fortify) {
        BuildKind::Tower
    } else {
        BuildKind::Mine
    };
    Ok(AgentAction::build(site.id(), kind))
}

fn flee(situation: &Situation<'_>) -> Result<AgentAction> {
    let config = situation.config;

    match situation.touched_site() {
        Some(site) if should_fortify_while_fleeing(site, config.depleting_mine_gold) => {
            Ok(AgentAction::build(site.id(), BuildKind::Tower))
        }
        Some(_) => escape(situation, config.flee_touching_escape),
        None => escape(situation, config.flee_open_escape),
    }
}

/// A depleting friendly mine, an empty site, or anything not ours.
fn should_fortify_while_fleeing(site: &Site, depleting_mine_gold: i32) -> bool {
    let depleting_mine = site.is_friendly()
        && site.structure_kind() == StructureKind::Mine
        && site.gold_remaining < depleting_mine_gold;

    depleting_mine || site.is_empty() || !site.is_friendly()
}

fn capture(id: SiteId, situation: &Situation<'_>) -> Result<AgentAction> {
    // Validates the binding even though only the id is needed.
    situation.world.site(id)?;

    let kind = if situation.defensive_trigger() {
        BuildKind::Tower
    } else if situation.needs_first_garrison() {
        BuildKind::Garrison(situation.config.first_garrison)
    } else {
        BuildKind::Mine
    };
    Ok(AgentAction::build(id, kind))
}

/// Runs away from the swarm inside `band`, or heads for a safe site when it is thin.
fn escape(situation: &Situation<'_>, band: ThreatBand) -> Result<AgentAction> {
    if !situation.is_under_threat(band) {
        return approach_safe_site(situation);
    }

    match situation.senses.flee_vector(band.radius) {
        // A balanced swarm reflects onto the commander itself.
        Ok(away) if away.target == away.origin => approach_safe_site(situation),
        Ok(away) => Ok(AgentAction::Move(away.target)),
        // A zero-count band can fire with nobody in range.
        Err(err) if err.severity().is_recoverable() => approach_safe_site(situation),
        Err(err) => Err(err),
    }
}

fn approach_safe_site(situation: &Situation<'_>) -> Result<AgentAction> {
    match situation.senses.nearest_safe_build_site() {
        Ok(site) => Ok(AgentAction::Move(site.location())),
        Err(err) if err.severity().is_recoverable() => Ok(rally(situation)),
        Err(err) => Err(err),
    }
}

fn rally(situation: &Situation<'_>) -> AgentAction {
    match situation.senses.nearest_friendly_tower() {
        Some(tower) => {
            warn!(tower = %tower.id(), "no safe build site, rallying at friendly tower");
            AgentAction::Move(tower.location())
        }
        None => {
            warn!("no safe build site and no friendly tower, waiting");
            AgentAction::Wait
        }
    }
}
