//! Common error infrastructure for royale-core.
//!
//! Every failure the decision core can raise is a variant of [`RoyaleError`].
//! Variants are grouped by how the caller is expected to react:
//!
//! - **NotFound**: an id was referenced that the world model never registered
//! - **Sensing**: a query had an empty qualifying set; callers fall back
//! - **ProtocolViolation**: the judge stream and our bookkeeping disagree
//!
//! Only sensing failures are recoverable. Everything else aborts the turn,
//! because emitting a guessed action is worse than failing loudly.

use crate::state::{SiteId, UnitId};

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, RoyaleError>;

/// Severity level of an error, used to decide between fallback and abort.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// The caller can pick an alternative action this turn.
    ///
    /// Examples: no safe build site, no threats to average over
    Recoverable,

    /// The snapshot and the world model are out of sync; no turn can be produced.
    Fatal,
}

impl ErrorSeverity {
    /// Lowercase label used in log fields.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Errors surfaced by the world model, the sensing layer and the turn runner.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoyaleError {
    #[error("site {id} is not registered")]
    SiteNotFound { id: SiteId },

    #[error("unit {id} is not part of the current roster")]
    UnitNotFound { id: UnitId },

    #[error("no friendly commander in the current roster")]
    CommanderMissing,

    #[error("no safe build site available")]
    NoSafeSiteAvailable,

    #[error("no enemy melee units within radius {radius}")]
    NoThreatsInRange { radius: i32 },

    #[error("protocol violation: update references unknown site {id}")]
    UnknownSite { id: SiteId },

    #[error("protocol violation: site {site} became ours without a pending structure intent")]
    MissingStructureIntent { site: SiteId },
}

impl RoyaleError {
    /// Returns the severity level of this error.
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoSafeSiteAvailable | Self::NoThreatsInRange { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::SiteNotFound { .. }
            | Self::UnitNotFound { .. }
            | Self::CommanderMissing
            | Self::UnknownSite { .. }
            | Self::MissingStructureIntent { .. } => ErrorSeverity::Fatal,
        }
    }

    /// Returns true for the protocol-violation class.
    pub const fn is_protocol_violation(&self) -> bool {
        matches!(
            self,
            Self::UnknownSite { .. } | Self::MissingStructureIntent { .. }
        )
    }

    /// Stable snake_case name of the variant, logged when a session aborts.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::SiteNotFound { .. } => "site_not_found",
            Self::UnitNotFound { .. } => "unit_not_found",
            Self::CommanderMissing => "commander_missing",
            Self::NoSafeSiteAvailable => "no_safe_site_available",
            Self::NoThreatsInRange { .. } => "no_threats_in_range",
            Self::UnknownSite { .. } => "unknown_site",
            Self::MissingStructureIntent { .. } => "missing_structure_intent",
        }
    }
}
