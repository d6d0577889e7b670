//! Gold balance and the save/spend decision.
//!
//! The save flag is hysteresis-gated: it turns on when the balance drops
//! below the low-water mark and off when it rises above the high-water mark.
//! Anywhere in between, it keeps whatever value it had.

use crate::action::ProductionOrder;
use crate::config::EconomyConfig;
use crate::state::World;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Economy {
    balance: i32,
    saving: bool,
    config: EconomyConfig,
}

impl Economy {
    /// Starts with an empty purse in save mode.
    pub fn new(config: EconomyConfig) -> Self {
        Self {
            balance: 0,
            saving: true,
            config,
        }
    }

    /// Records this turn's balance. Returns `true` if the save flag flipped.
    pub fn update(&mut self, balance: i32) -> bool {
        self.balance = balance;
        let before = self.saving;

        if balance > self.config.high_water {
            self.saving = false;
        } else if balance < self.config.low_water {
            self.saving = true;
        }

        before != self.saving
    }

    #[inline]
    pub fn balance(&self) -> i32 {
        self.balance
    }

    #[inline]
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Where to train this turn.
    ///
    /// While saving, or without any friendly garrison, nothing specific is
    /// trained. Otherwise the lowest-id friendly garrison trains.
    pub fn production_order(&self, world: &World) -> ProductionOrder {
        if self.saving {
            return ProductionOrder::TrainDefault;
        }

        world
            .friendly_garrisons()
            .first()
            .map(|site| ProductionOrder::TrainAt(site.id()))
            .unwrap_or(ProductionOrder::TrainDefault)
    }
}

impl Default for Economy {
    fn default() -> Self {
        Self::new(EconomyConfig::default())
    }
}
