//! Small arena shared by strategy tests.

use royale_core::{
    BuildKind, Economy, EconomyConfig, GarrisonKind, Owner, Point, SiteId, SiteInfo, SiteUpdate,
    StrategyConfig, StructureKind, Unit, UnitId, UnitKind, World,
};

use super::Situation;
use crate::senses::Senses;

/// Four sites around a queen standing on site 1.
///
/// | site | location   | distance |
/// |------|------------|----------|
/// | 0    | (300, 500) | 200      |
/// | 1    | (500, 500) | 0        |
/// | 2    | (900, 500) | 400      |
/// | 3    | (500, 1000)| 500      |
pub struct Arena {
    pub world: World,
    pub economy: Economy,
    pub config: StrategyConfig,
    enemies: Vec<Point>,
}

impl Arena {
    pub const QUEEN: Point = Point::new(500, 500);
    pub const MAX_MINE_SIZE: i32 = 3;
    const GOLD: i32 = 200;
    const SITES: [(i32, Point); 4] = [
        (0, Point::new(300, 500)),
        (1, Point::new(500, 500)),
        (2, Point::new(900, 500)),
        (3, Point::new(500, 1000)),
    ];

    pub fn new() -> Self {
        let world = World::new(Self::SITES.map(|(id, location)| SiteInfo {
            id: SiteId(id),
            location,
            radius: 60,
        }));
        let mut arena = Self {
            world,
            economy: Economy::new(EconomyConfig::default()),
            config: StrategyConfig::default(),
            enemies: Vec::new(),
        };
        arena.sync_units();
        arena
    }

    pub fn location(id: SiteId) -> Point {
        Self::SITES
            .iter()
            .find(|(site, _)| SiteId(*site) == id)
            .map(|(_, location)| *location)
            .expect("arena site")
    }

    /// Clears the save flag.
    pub fn spending(mut self) -> Self {
        self.economy.update(500);
        assert!(!self.economy.is_saving());
        self
    }

    /// `count` melee units spread over the four compass points at exactly `distance`.
    pub fn with_enemy_melee_at_distance(mut self, count: usize, distance: i32) -> Self {
        let q = Self::QUEEN;
        let spots = [
            Point::new(q.x + distance, q.y),
            Point::new(q.x - distance, q.y),
            Point::new(q.x, q.y + distance),
            Point::new(q.x, q.y - distance),
        ];
        self.enemies
            .extend(spots.iter().cycle().take(count).copied());
        self.sync_units();
        self
    }

    /// `count` melee units stacked due east at `distance`.
    pub fn with_enemy_melee_east(mut self, count: usize, distance: i32) -> Self {
        let spot = Point::new(Self::QUEEN.x + distance, Self::QUEEN.y);
        self.enemies.extend(std::iter::repeat_n(spot, count));
        self.sync_units();
        self
    }

    pub fn with_site(
        mut self,
        id: SiteId,
        structure: StructureKind,
        owner: Owner,
        param1: i32,
        param2: i32,
    ) -> Self {
        self.apply(id, structure, owner, param1, param2, Self::GOLD);
        self
    }

    /// Confirms a capture we ordered, so the intent bookkeeping lines up.
    pub fn with_friendly(
        self,
        id: SiteId,
        structure: StructureKind,
        param1: i32,
        param2: i32,
    ) -> Self {
        self.with_friendly_gold(id, structure, param1, param2, Self::GOLD)
    }

    pub fn with_friendly_gold(
        mut self,
        id: SiteId,
        structure: StructureKind,
        param1: i32,
        param2: i32,
        gold: i32,
    ) -> Self {
        let intent = match structure {
            StructureKind::Tower => BuildKind::Tower,
            StructureKind::Garrison => BuildKind::Garrison(GarrisonKind::default()),
            StructureKind::Mine | StructureKind::None => BuildKind::Mine,
        };
        if !self.world.site(id).expect("arena site").is_friendly() {
            self.world.set_pending_intent(intent);
        }
        self.apply(id, structure, Owner::Friendly, param1, param2, gold);
        self
    }

    pub fn situation(&self, touched: Option<SiteId>) -> Situation<'_> {
        let senses = Senses::new(&self.world, Self::QUEEN);
        Situation::new(&self.world, &self.economy, &self.config, senses, touched)
            .expect("touched site is registered")
    }

    fn apply(
        &mut self,
        id: SiteId,
        structure: StructureKind,
        owner: Owner,
        param1: i32,
        param2: i32,
        gold: i32,
    ) {
        self.world
            .apply_site_update(&SiteUpdate {
                id,
                gold_remaining: gold,
                max_mine_size: Self::MAX_MINE_SIZE,
                structure,
                owner,
                param1,
                param2,
            })
            .expect("arena update");
    }

    fn sync_units(&mut self) {
        let queen = Unit {
            id: UnitId(0),
            owner: Owner::Friendly,
            location: Self::QUEEN,
            kind: UnitKind::Commander,
            health: 100,
        };
        let enemies = self.enemies.iter().zip(1..).map(|(&location, id)| Unit {
            id: UnitId(id),
            owner: Owner::Enemy,
            location,
            kind: UnitKind::Melee,
            health: 25,
        });
        self.world
            .replace_units(std::iter::once(queen).chain(enemies));
    }
}
