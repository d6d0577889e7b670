//! Decision layer for the arena bot.
//!
//! This crate turns a world model into one command per turn. Consumers embed
//! [`TurnRunner`], feed it one [`royale_core::TurnSnapshot`] per turn, and
//! write the resulting [`TurnOutput`] back to the judge.
//!
//! Modules are organized by responsibility:
//! - [`senses`] derives threat and target queries relative to the commander
//! - [`strategy`] hosts the behavioural state machine
//! - [`commander`] carries the agent's state between turns
//! - [`runtime`] hosts the per-turn orchestrator and builder
pub mod commander;
pub mod runtime;
pub mod senses;
pub mod strategy;

pub use commander::Commander;
pub use runtime::{RuntimeConfig, TurnOutput, TurnRunner, TurnRunnerBuilder};
pub use senses::Senses;
pub use strategy::{Situation, Strategy};
