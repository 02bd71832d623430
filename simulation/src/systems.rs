//! Lifecycle systems - run against the pet on each tick or action

pub mod care;
pub mod decay;
pub mod death;

pub use care::{can_play, feed_system, play_system, rest_system};
pub use decay::decay_system;
pub use death::{death_system, DeathReport};
