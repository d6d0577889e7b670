//! Tunable decision parameters.
//!
//! Every proximity trigger in the bot is a [`ThreatBand`]: "at least `count`
//! enemy melee units strictly closer than `radius`". Different behaviours use
//! different bands to express how urgent a situation has to be before they
//! react. None of these numbers is a protocol contract; the defaults are the
//! values the bot has been tuned with.

use std::fmt;
use std::str::FromStr;

use crate::state::GarrisonKind;

/// A `(radius, count)` threat trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ThreatBand {
    pub radius: i32,
    pub count: usize,
}

impl ThreatBand {
    pub const fn new(radius: i32, count: usize) -> Self {
        Self { radius, count }
    }
}

impl fmt::Display for ThreatBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.radius, self.count)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid threat band {input:?}: expected \"radius:count\"")]
pub struct ParseThreatBandError {
    pub input: String,
}

impl FromStr for ThreatBand {
    type Err = ParseThreatBandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseThreatBandError {
            input: s.to_string(),
        };
        let (radius, count) = s.split_once(':').ok_or_else(err)?;
        let radius = radius.trim().parse::<i32>().map_err(|_| err())?;
        let count = count.trim().parse::<usize>().map_err(|_| err())?;
        if radius <= 0 {
            return Err(err());
        }
        Ok(Self { radius, count })
    }
}

/// Thresholds used by the strategy state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrategyConfig {
    /// Exploring gives way to fleeing when this band fires.
    pub explore_flee: ThreatBand,
    /// Exploring builds a tower instead of a mine when this band fires.
    pub explore_fortify: ThreatBand,
    /// Defensive trigger, many attackers far away.
    pub defend_far: ThreatBand,
    /// Defensive trigger, few attackers very close.
    pub defend_near: ThreatBand,
    /// Fleeing continues while this band fires.
    pub flee_persist: ThreatBand,
    /// Escape band while touching a developed friendly site.
    pub flee_touching_escape: ThreatBand,
    /// Escape band while touching nothing.
    pub flee_open_escape: ThreatBand,
    /// A friendly mine with less gold than this is converted into a tower when fleeing.
    pub depleting_mine_gold: i32,
    /// Variant built by the first-garrison rule.
    pub first_garrison: GarrisonKind,
}

impl StrategyConfig {
    pub const DEFAULT_EXPLORE_FLEE: ThreatBand = ThreatBand::new(160, 7);
    pub const DEFAULT_EXPLORE_FORTIFY: ThreatBand = ThreatBand::new(400, 4);
    pub const DEFAULT_DEFEND_FAR: ThreatBand = ThreatBand::new(600, 7);
    pub const DEFAULT_DEFEND_NEAR: ThreatBand = ThreatBand::new(200, 3);
    pub const DEFAULT_FLEE_PERSIST: ThreatBand = ThreatBand::new(120, 4);
    pub const DEFAULT_FLEE_TOUCHING_ESCAPE: ThreatBand = ThreatBand::new(400, 4);
    pub const DEFAULT_FLEE_OPEN_ESCAPE: ThreatBand = ThreatBand::new(100, 5);
    pub const DEFAULT_DEPLETING_MINE_GOLD: i32 = 100;

    pub fn new() -> Self {
        Self {
            explore_flee: Self::DEFAULT_EXPLORE_FLEE,
            explore_fortify: Self::DEFAULT_EXPLORE_FORTIFY,
            defend_far: Self::DEFAULT_DEFEND_FAR,
            defend_near: Self::DEFAULT_DEFEND_NEAR,
            flee_persist: Self::DEFAULT_FLEE_PERSIST,
            flee_touching_escape: Self::DEFAULT_FLEE_TOUCHING_ESCAPE,
            flee_open_escape: Self::DEFAULT_FLEE_OPEN_ESCAPE,
            depleting_mine_gold: Self::DEFAULT_DEPLETING_MINE_GOLD,
            first_garrison: GarrisonKind::Knight,
        }
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Save-flag hysteresis marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EconomyConfig {
    /// Saving stops once the balance rises above this.
    pub high_water: i32,
    /// Saving starts once the balance falls below this.
    pub low_water: i32,
}

impl EconomyConfig {
    pub const DEFAULT_HIGH_WATER: i32 = 140;
    pub const DEFAULT_LOW_WATER: i32 = 20;

    pub const fn new(high_water: i32, low_water: i32) -> Self {
        Self {
            high_water,
            low_water,
        }
    }
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HIGH_WATER, Self::DEFAULT_LOW_WATER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threat_band_parses_radius_and_count() {
        assert_eq!("160:7".parse(), Ok(ThreatBand::new(160, 7)));
        assert_eq!(" 400 : 4 ".parse(), Ok(ThreatBand::new(400, 4)));
    }

    #[test]
    fn threat_band_rejects_malformed_input() {
        assert!("160".parse::<ThreatBand>().is_err());
        assert!("abc:3".parse::<ThreatBand>().is_err());
        assert!("0:3".parse::<ThreatBand>().is_err());
        assert!("100:-1".parse::<ThreatBand>().is_err());
    }

    #[test]
    fn threat_band_display_round_trips() {
        let band = ThreatBand::new(600, 7);
        assert_eq!(band.to_string().parse(), Ok(band));
    }
}
