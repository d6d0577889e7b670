//! Per-turn orchestrator.
//!
//! [`TurnRunner`] owns the world model, the economy and the commander. Each
//! call to [`TurnRunner::take_turn`] applies one snapshot and returns the two
//! commands for the judge. The run is strictly sequential: nothing happens
//! between calls.

use royale_core::{
    AgentAction, Economy, EconomyConfig, ProductionOrder, Result, Site, SiteInfo, StrategyConfig,
    TurnSnapshot, UnitId, World,
};
use tracing::{debug, debug_span, info};

use crate::commander::Commander;

/// Tunables shared by the runner and the strategy layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub strategy: StrategyConfig,
    pub economy: EconomyConfig,
}

/// The two commands emitted every turn, in output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutput {
    pub action: AgentAction,
    pub production: ProductionOrder,
}

pub struct TurnRunner {
    config: RuntimeConfig,
    world: World,
    economy: Economy,
    // Bound on the first turn; the init block carries no units.
    commander: Option<Commander>,
    turn: u32,
}

impl TurnRunner {
    pub fn builder() -> TurnRunnerBuilder {
        TurnRunnerBuilder::new()
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[inline]
    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    #[inline]
    pub fn commander(&self) -> Option<&Commander> {
        self.commander.as_ref()
    }

    /// Number of turns taken so far.
    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Applies `snapshot` and decides this turn's commands.
    ///
    /// Order: balance, site updates, unit roster and commander, strategy,
    /// intent recording, production.
    ///
    /// # Errors
    ///
    /// Any error returned here is fatal: the snapshot disagrees with the
    /// world model and no command can be produced safely.
    pub fn take_turn(&mut self, snapshot: &TurnSnapshot) -> Result<TurnOutput> {
        self.turn += 1;
        let span = debug_span!("turn", turn = self.turn);
        let _enter = span.enter();

        if self.economy.update(snapshot.gold) {
            info!(
                gold = snapshot.gold,
                saving = self.economy.is_saving(),
                "save flag flipped"
            );
        }

        for update in &snapshot.sites {
            let was_ours = self.world.site(update.id).is_ok_and(Site::is_friendly);
            self.world.apply_site_update(update)?;
            if !was_ours && update.owner.is_friendly() {
                info!(
                    site = %update.id,
                    structure = ?self.world.claimed_structure(update.id),
                    "site captured"
                );
            }
        }

        self.world.replace_units(
            snapshot
                .units
                .iter()
                .zip(0..)
                .map(|(observed, id)| observed.into_unit(UnitId(id))),
        );
        if let Some(enemy) = self.world.enemy_commander() {
            debug!(
                x = enemy.location.x,
                y = enemy.location.y,
                health = enemy.health,
                "enemy commander"
            );
        }

        let commander = match self.commander.as_mut() {
            Some(commander) => {
                commander.observe(&self.world, snapshot.touched_site)?;
                commander
            }
            None => self
                .commander
                .insert(Commander::spawn(&self.world, snapshot.touched_site)?),
        };

        let action = commander.decide(&self.world, &self.economy, &self.config.strategy)?;

        if let Some((site, kind)) = action.as_build()
            && !self.world.site(site)?.is_friendly()
        {
            self.world.set_pending_intent(kind);
        }

        let production = self.economy.production_order(&self.world);
        debug!(%production, "production chosen");

        Ok(TurnOutput { action, production })
    }
}

/// Builder for [`TurnRunner`].
pub struct TurnRunnerBuilder {
    config: RuntimeConfig,
    sites: Vec<SiteInfo>,
}

impl TurnRunnerBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            sites: Vec::new(),
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Sites from the initialisation block.
    pub fn sites(mut self, sites: impl IntoIterator<Item = SiteInfo>) -> Self {
        self.sites.extend(sites);
        self
    }

    pub fn build(self) -> TurnRunner {
        let world = World::new(self.sites);
        debug!(sites = world.sites().count(), "world registered");

        TurnRunner {
            economy: Economy::new(self.config.economy),
            config: self.config,
            world,
            commander: None,
            turn: 0,
        }
    }
}
