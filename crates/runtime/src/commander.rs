//! The self-controlled agent.

use royale_core::{AgentAction, Economy, Point, Result, SiteId, StrategyConfig, Unit, World};
use tracing::debug;

use crate::senses::Senses;
use crate::strategy::{Situation, Strategy};

/// The friendly commander plus the state carried between turns.
///
/// Only the strategy survives a turn; the unit record and touched site are
/// refreshed from every snapshot via [`Commander::observe`].
#[derive(Clone, Debug)]
pub struct Commander {
    unit: Unit,
    touched_site: Option<SiteId>,
    strategy: Strategy,
}

impl Commander {
    /// Binds to the friendly commander found in `world`, starting in [`Strategy::Exploring`].
    ///
    /// # Errors
    ///
    /// `CommanderMissing` if the roster has no friendly commander, or
    /// `SiteNotFound` if `touched_site` is not registered.
    pub fn spawn(world: &World, touched_site: Option<SiteId>) -> Result<Self> {
        let mut commander = Self {
            unit: *world.friendly_commander()?,
            touched_site: None,
            strategy: Strategy::default(),
        };
        commander.observe(world, touched_site)?;
        Ok(commander)
    }

    /// Refreshes the unit record and touched site from the latest snapshot.
    pub fn observe(&mut self, world: &World, touched_site: Option<SiteId>) -> Result<()> {
        self.unit = *world.friendly_commander()?;
        if let Some(id) = touched_site {
            world.site(id)?;
        }
        self.touched_site = touched_site;
        Ok(())
    }

    #[inline]
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    #[inline]
    pub fn location(&self) -> Point {
        self.unit.location
    }

    #[inline]
    pub fn touched_site(&self) -> Option<SiteId> {
        self.touched_site
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Advances the strategy against the current world, then acts on the result.
    ///
    /// The strategy is only committed once both steps succeed.
    pub fn decide(
        &mut self,
        world: &World,
        economy: &Economy,
        config: &StrategyConfig,
    ) -> Result<AgentAction> {
        let senses = Senses::new(world, self.location());
        let situation = Situation::new(world, economy, config, senses, self.touched_site)?;

        let next = self.strategy.next(&situation)?;
        if next != self.strategy {
            debug!(from = %self.strategy, to = %next, "strategy transition");
        }

        let action = next.act(&situation)?;
        debug!(strategy = %next, %action, "action chosen");

        self.strategy = next;
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use royale_core::{
        BuildKind, EconomyConfig, GarrisonKind, Owner, RoyaleError, SiteInfo, UnitId, UnitKind,
    };

    fn world() -> World {
        let mut world = World::new([
            SiteInfo {
                id: SiteId(0),
                location: Point::new(100, 100),
                radius: 60,
            },
            SiteInfo {
                id: SiteId(1),
                location: Point::new(600, 100),
                radius: 60,
            },
        ]);
        world.replace_units([Unit {
            id: UnitId(0),
            owner: Owner::Friendly,
            location: Point::new(100, 100),
            kind: UnitKind::Commander,
            health: 200,
        }]);
        world
    }

    #[test]
    fn spawn_requires_friendly_commander() {
        assert_eq!(
            Commander::spawn(&World::default(), None).unwrap_err(),
            RoyaleError::CommanderMissing
        );
    }

    #[test]
    fn observe_rejects_unknown_touched_site() {
        let world = world();
        let mut commander = Commander::spawn(&world, None).unwrap();
        assert_eq!(
            commander.observe(&world, Some(SiteId(7))),
            Err(RoyaleError::SiteNotFound { id: SiteId(7) })
        );
        assert_eq!(commander.touched_site(), None);
    }

    #[test]
    fn decide_captures_then_builds_first_garrison() {
        let world = world();
        let mut economy = Economy::new(EconomyConfig::default());
        economy.update(300);
        let config = StrategyConfig::default();

        let mut commander = Commander::spawn(&world, Some(SiteId(0))).unwrap();
        let action = commander.decide(&world, &economy, &config).unwrap();

        assert_eq!(commander.strategy(), Strategy::CapturingSite(SiteId(0)));
        assert_eq!(
            action,
            AgentAction::build(SiteId(0), BuildKind::Garrison(GarrisonKind::Knight))
        );
    }

    #[test]
    fn decide_keeps_strategy_on_failure() {
        let world = world();
        let economy = Economy::new(EconomyConfig::default());
        let config = StrategyConfig::default();

        let mut commander = Commander::spawn(&world, None).unwrap();
        commander.strategy = Strategy::ExpandingMine(SiteId(42));
        assert!(commander.decide(&world, &economy, &config).is_err());
        assert_eq!(commander.strategy(), Strategy::ExpandingMine(SiteId(42)));
    }
}
