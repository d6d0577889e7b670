//! Read-only view of one turn, shared by transitions and actions.

use royale_core::{Economy, Result, Site, SiteId, StrategyConfig, ThreatBand, World};

use crate::senses::Senses;

/// Everything a strategy may look at while deciding.
///
/// Built once per turn after the snapshot has been applied. Holds only
/// shared borrows, so evaluating a strategy can never mutate the world.
#[derive(Clone, Copy, Debug)]
pub struct Situation<'a> {
    pub world: &'a World,
    pub economy: &'a Economy,
    pub config: &'a StrategyConfig,
    pub senses: Senses<'a>,
    touched: Option<&'a Site>,
}

impl<'a> Situation<'a> {
    /// Binds the world to the commander's position and touched site.
    ///
    /// # Errors
    ///
    /// [`royale_core::RoyaleError::SiteNotFound`] if `touched` names a site
    /// the world never registered.
    pub fn new(
        world: &'a World,
        economy: &'a Economy,
        config: &'a StrategyConfig,
        senses: Senses<'a>,
        touched: Option<SiteId>,
    ) -> Result<Self> {
        let touched = touched.map(|id| world.site(id)).transpose()?;
        Ok(Self {
            world,
            economy,
            config,
            senses,
            touched,
        })
    }

    /// Site the commander is touching this turn.
    #[inline]
    pub fn touched_site(&self) -> Option<&'a Site> {
        self.touched
    }

    /// Touched site that is not ours yet.
    pub fn touched_capturable(&self) -> Option<&'a Site> {
        self.touched.filter(|site| !site.is_friendly())
    }

    #[inline]
    pub fn is_under_threat(&self, band: ThreatBand) -> bool {
        self.senses.is_under_threat(band)
    }

    /// Many attackers far away, or a few very close.
    pub fn defensive_trigger(&self) -> bool {
        self.is_under_threat(self.config.defend_far)
            || self.is_under_threat(self.config.defend_near)
    }

    /// Not saving and no friendly garrison standing yet.
    pub fn needs_first_garrison(&self) -> bool {
        !self.economy.is_saving() && self.world.friendly_garrisons().is_empty()
    }

    /// Neither the garrison rule nor the defensive trigger applies.
    pub fn should_extract_instead(&self) -> bool {
        !self.needs_first_garrison() && !self.defensive_trigger()
    }
}
