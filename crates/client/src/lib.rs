//! Turn driver for the arena bot.
//!
//! Adapts the judge's line protocol to [`royale_runtime::TurnRunner`]:
//!
//! - [`protocol`] parses judge text into [`royale_core::TurnSnapshot`]s
//! - [`session`] runs the read, decide, write loop
//! - [`config`] and [`logging`] cover process bootstrapping
pub mod config;
pub mod logging;
pub mod protocol;
pub mod session;

pub use config::ClientConfig;
pub use protocol::{JudgeReader, ParseError};
pub use session::run_session;
