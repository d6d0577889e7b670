//! Client configuration loaded from the process environment.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use royale_core::{EconomyConfig, StrategyConfig};
use royale_runtime::RuntimeConfig;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub runtime: RuntimeConfig,
    /// Directory for `royale.log`; file logging is off when unset.
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables (threat bands use `radius:count`):
    /// - `ROYALE_EXPLORE_FLEE` - Exploring gives up and flees (default: 160:7)
    /// - `ROYALE_EXPLORE_FORTIFY` - Exploring builds a tower instead of a mine (default: 400:4)
    /// - `ROYALE_DEFEND_FAR` - Defensive trigger, wide band (default: 600:7)
    /// - `ROYALE_DEFEND_NEAR` - Defensive trigger, tight band (default: 200:3)
    /// - `ROYALE_FLEE_PERSIST` - Fleeing keeps going (default: 120:4)
    /// - `ROYALE_FLEE_TOUCHING_ESCAPE` - Escape while touching a developed site (default: 400:4)
    /// - `ROYALE_FLEE_OPEN_ESCAPE` - Escape while touching nothing (default: 100:5)
    /// - `ROYALE_DEPLETING_MINE_GOLD` - Gold below which a fleeing queen fortifies a mine (default: 100)
    /// - `ROYALE_FIRST_GARRISON` - `knight`, `archer` or `giant` (default: knight)
    /// - `ROYALE_SAVE_HIGH_WATER` - Stop saving above this balance (default: 140)
    /// - `ROYALE_SAVE_LOW_WATER` - Start saving below this balance (default: 20)
    /// - `ROYALE_LOG_DIR` - Enable file logging into this directory
    ///
    /// Unparseable values keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(read: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let strategy = &mut config.runtime.strategy;

        override_with(
            &mut strategy.explore_flee,
            read_var(&read, "ROYALE_EXPLORE_FLEE"),
        );
        override_with(
            &mut strategy.explore_fortify,
            read_var(&read, "ROYALE_EXPLORE_FORTIFY"),
        );
        override_with(
            &mut strategy.defend_far,
            read_var(&read, "ROYALE_DEFEND_FAR"),
        );
        override_with(
            &mut strategy.defend_near,
            read_var(&read, "ROYALE_DEFEND_NEAR"),
        );
        override_with(
            &mut strategy.flee_persist,
            read_var(&read, "ROYALE_FLEE_PERSIST"),
        );
        override_with(
            &mut strategy.flee_touching_escape,
            read_var(&read, "ROYALE_FLEE_TOUCHING_ESCAPE"),
        );
        override_with(
            &mut strategy.flee_open_escape,
            read_var(&read, "ROYALE_FLEE_OPEN_ESCAPE"),
        );
        override_with(
            &mut strategy.depleting_mine_gold,
            read_var(&read, "ROYALE_DEPLETING_MINE_GOLD"),
        );
        override_with(
            &mut strategy.first_garrison,
            read_var(&read, "ROYALE_FIRST_GARRISON"),
        );

        config.runtime.economy = economy_from(&read, config.runtime.economy);
        config.log_dir = read("ROYALE_LOG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        config
    }

    pub fn strategy(&self) -> &StrategyConfig {
        &self.runtime.strategy
    }
}

/// Marks are only taken together when they still form a band.
fn economy_from<F>(read: &F, defaults: EconomyConfig) -> EconomyConfig
where
    F: Fn(&str) -> Option<String>,
{
    let high_water = read_var(read, "ROYALE_SAVE_HIGH_WATER");
    let low_water = read_var(read, "ROYALE_SAVE_LOW_WATER");
    let high_water = high_water.unwrap_or(defaults.high_water);
    let low_water = low_water.unwrap_or(defaults.low_water);

    if low_water <= high_water {
        EconomyConfig::new(high_water, low_water)
    } else {
        defaults
    }
}

fn override_with<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn read_var<T, F>(read: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    read(key)?.trim().parse().ok()
}
