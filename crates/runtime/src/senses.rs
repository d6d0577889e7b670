//! Situational queries relative to the commander.
//!
//! [`Senses`] binds a read-only [`World`] to the commander's current
//! location. It is rebuilt every turn and holds no state of its own, so two
//! calls with the same arguments on the same turn always agree.

use royale_core::{Point, Result, RoyaleError, Segment, Site, ThreatBand, Unit, World};

#[derive(Clone, Copy, Debug)]
pub struct Senses<'a> {
    world: &'a World,
    origin: Point,
}

impl<'a> Senses<'a> {
    pub fn new(world: &'a World, origin: Point) -> Self {
        Self { world, origin }
    }

    /// Where the commander stands.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Enemy melee units strictly closer than `radius`, nearest first.
    pub fn nearby_enemy_melee(&self, radius: i32) -> Vec<&'a Unit> {
        let limit = f64::from(radius);
        self.world.units_where(
            |unit| unit.is_enemy_melee() && unit.location.distance(self.origin) < limit,
            Some(self.origin),
        )
    }

    /// True iff at least `band.count` enemy melee units are strictly inside `band.radius`.
    pub fn is_under_threat(&self, band: ThreatBand) -> bool {
        self.nearby_enemy_melee(band.radius).len() >= band.count
    }

    /// Centroid of the enemy melee units inside `radius`.
    ///
    /// # Errors
    ///
    /// [`RoyaleError::NoThreatsInRange`] when nobody is inside `radius`;
    /// guard with [`Senses::is_under_threat`] first.
    pub fn average_threat_location(&self, radius: i32) -> Result<Point> {
        let nearby = self.nearby_enemy_melee(radius);
        Point::centroid(nearby.iter().map(|unit| unit.location))
            .ok_or(RoyaleError::NoThreatsInRange { radius })
    }

    /// Heading away from the threats inside `radius`.
    ///
    /// The segment starts at the commander; its target is the threat centroid
    /// reflected through the commander's position.
    pub fn flee_vector(&self, radius: i32) -> Result<Segment> {
        let threat = self.average_threat_location(radius)?;
        Ok(Segment::new(self.origin, threat).opposite())
    }

    /// Closest site we do not own that no enemy tower covers.
    pub fn nearest_safe_build_site(&self) -> Result<&'a Site> {
        self.world
            .nearest_site_where(self.origin, |site| {
                !site.is_friendly() && self.world.enemy_towers_covering(site.location()).is_empty()
            })
            .ok_or(RoyaleError::NoSafeSiteAvailable)
    }

    /// Closest friendly tower, used as a rally point.
    pub fn nearest_friendly_tower(&self) -> Option<&'a Site> {
        self.world.nearest_site_where(self.origin, |site| {
            site.is_friendly() && site.as_tower().is_some()
        })
    }
}
