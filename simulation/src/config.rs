//! Tunable constants for decay, care actions and rewards.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::components::VITAL_MAX;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid tunable `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    /// Hunger/happiness lost per tick once the grace window has passed.
    pub decay_rate: u8,
    /// Pet dies when hunger or happiness is at or below this value.
    pub death_threshold: u8,
    pub tick_interval_ms: u64,
    /// Time since the last feed/play before decay kicks in.
    pub decay_grace_ms: i64,
    pub feed_amount: u8,
    pub play_happiness: u8,
    pub play_energy_cost: u8,
    pub rest_energy: u8,
    /// Passive energy recovered each tick.
    pub energy_recovery: u8,
    pub initial_hunger: u8,
    pub initial_happiness: u8,
    pub initial_energy: u8,
    /// Share of the stake credited to the user on creation.
    pub creation_reward_fraction: f64,
    pub max_name_len: usize,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            decay_rate: 2,
            death_threshold: 10,
            tick_interval_ms: 3000,
            decay_grace_ms: 60_000,
            feed_amount: 30,
            play_happiness: 25,
            play_energy_cost: 20,
            rest_energy: 40,
            energy_recovery: 1,
            initial_hunger: 100,
            initial_happiness: 100,
            initial_energy: 100,
            creation_reward_fraction: 0.1,
            max_name_len: 20,
        }
    }
}

impl Tunables {
    /// Parse tunables from JSON; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tunables: Tunables = serde_json::from_str(json)?;
        tunables.validate()?;
        Ok(tunables)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(invalid("tick_interval_ms", "must be greater than zero"));
        }
        if self.decay_grace_ms < 0 {
            return Err(invalid("decay_grace_ms", "must not be negative"));
        }
        if self.max_name_len == 0 {
            return Err(invalid("max_name_len", "must be greater than zero"));
        }
        if !self.creation_reward_fraction.is_finite() || self.creation_reward_fraction < 0.0 {
            return Err(invalid("creation_reward_fraction", "must be a finite, non-negative number"));
        }

        let vitals = [
            ("decay_rate", self.decay_rate),
            ("death_threshold", self.death_threshold),
            ("feed_amount", self.feed_amount),
            ("play_happiness", self.play_happiness),
            ("play_energy_cost", self.play_energy_cost),
            ("rest_energy", self.rest_energy),
            ("energy_recovery", self.energy_recovery),
            ("initial_hunger", self.initial_hunger),
            ("initial_happiness", self.initial_happiness),
            ("initial_energy", self.initial_energy),
        ];
        for (field, value) in vitals {
            if value > VITAL_MAX {
                return Err(invalid(field, format!("{} exceeds {}", value, VITAL_MAX)));
            }
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid { field, reason: reason.into() }
}
