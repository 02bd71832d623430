//! AImagotchi Simulation Engine
//!
//! Lifecycle of a single staked virtual pet: care actions, time-gated decay,
//! death, and redistribution of the stake to a leaderboard pool.
//! Every operation takes the current time explicitly, so a real timer
//! ([`tick_runner::TickRunner`]) and deterministic tests drive the same code.

pub mod components;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod names;
pub mod systems;
pub mod tick_runner;
pub mod world;

#[cfg(feature = "node")]
pub mod napi_bindings;

pub use components::*;
pub use config::{ConfigError, Tunables};
pub use error::{Ignored, Outcome};
pub use leaderboard::{Leaderboard, RankedEntry};
pub use tick_runner::TickRunner;
pub use world::{Phase, PetWorld, TickResult, WorldSnapshot};
