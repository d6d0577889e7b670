//! Deterministic arena model shared by the decision runtime and the client.
//!
//! `royale-core` defines the world as the bot sees it (sites, units, gold),
//! the geometry used to reason about it, and the commands the bot can emit.
//! It has no I/O: the client parses judge text into [`snapshot`] types and
//! renders [`action`] types back, and the runtime decides in between.
pub mod action;
pub mod config;
pub mod economy;
pub mod error;
pub mod geometry;
pub mod snapshot;
pub mod state;

pub use action::{AgentAction, BuildKind, ProductionOrder};
pub use config::{EconomyConfig, ParseThreatBandError, StrategyConfig, ThreatBand};
pub use economy::Economy;
pub use error::{ErrorSeverity, Result, RoyaleError};
pub use geometry::{Point, Segment};
pub use snapshot::{SiteInfo, SiteUpdate, TurnSnapshot, UnitObservation};
pub use state::{
    GarrisonKind, GarrisonView, MineView, Owner, Site, SiteId, Structure, StructureKind,
    TowerView, Unit, UnitId, UnitKind, World,
};
