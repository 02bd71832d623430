//! Core data types for the pet and the reward pool

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Upper bound of every vital.
pub const VITAL_MAX: u8 = 100;

// ============================================================================
// Identity
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetId(pub Uuid);

impl PetId {
    /// Fresh random (version 4) id.
    pub fn random() -> Self {
        let bytes: [u8; 16] = rand::random();
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Glitch,
    Neon,
    Pixel,
    Cyber,
}

impl Species {
    pub const ALL: [Species; 4] = [Species::Glitch, Species::Neon, Species::Pixel, Species::Cyber];

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Glitch => "glitch",
            Species::Neon => "neon",
            Species::Pixel => "pixel",
            Species::Cyber => "cyber",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown species `{0}` (expected glitch, neon, pixel or cyber)")]
pub struct ParseSpeciesError(pub String);

impl FromStr for Species {
    type Err = ParseSpeciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Species::ALL
            .into_iter()
            .find(|species| species.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSpeciesError(s.to_string()))
    }
}

// ============================================================================
// Pet Components
// ============================================================================

/// Hunger, happiness and energy. Every field stays within `0..=VITAL_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub hunger: u8,
    pub happiness: u8,
    pub energy: u8,
}

impl Vitals {
    pub fn new(hunger: u8, happiness: u8, energy: u8) -> Self {
        Self {
            hunger: hunger.min(VITAL_MAX),
            happiness: happiness.min(VITAL_MAX),
            energy: energy.min(VITAL_MAX),
        }
    }

    pub fn full() -> Self {
        Self::new(VITAL_MAX, VITAL_MAX, VITAL_MAX)
    }

    pub fn average(&self) -> f64 {
        (self.hunger as f64 + self.happiness as f64 + self.energy as f64) / 3.0
    }
}

/// Raise a vital by `amount`, saturating at `VITAL_MAX`.
pub fn raise(value: u8, amount: u8) -> u8 {
    value.saturating_add(amount).min(VITAL_MAX)
}

/// Lower a vital by `amount`, saturating at zero.
pub fn lower(value: u8, amount: u8) -> u8 {
    value.saturating_sub(amount)
}

/// Coarse well-being bucket derived from the average vital.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Okay,
    Sad,
    Critical,
}

impl Mood {
    pub fn from_vitals(vitals: &Vitals) -> Self {
        let avg = vitals.average();
        if avg > 70.0 {
            Mood::Happy
        } else if avg > 40.0 {
            Mood::Okay
        } else if avg > 20.0 {
            Mood::Sad
        } else {
            Mood::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy!",
            Mood::Okay => "Okay...",
            Mood::Sad => "Sad",
            Mood::Critical => "CRITICAL!",
        }
    }
}

/// Ticks that make up one displayed "day" of pet age.
pub const TICKS_PER_DAY: u64 = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub species: Species,
    pub vitals: Vitals,
    /// Ticks survived.
    pub age: u64,
    pub is_alive: bool,
    pub last_fed: DateTime<Utc>,
    pub last_played: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub staked_amount: f64,
}

impl Pet {
    pub fn new(name: String, species: Species, staked_amount: f64, vitals: Vitals, now: DateTime<Utc>) -> Self {
        Self {
            id: PetId::random(),
            name,
            species,
            vitals,
            age: 0,
            is_alive: true,
            last_fed: now,
            last_played: now,
            created_at: now,
            staked_amount,
        }
    }

    pub fn mood(&self) -> Mood {
        Mood::from_vitals(&self.vitals)
    }

    pub fn age_days(&self) -> u64 {
        self.age / TICKS_PER_DAY
    }
}

// ============================================================================
// Reward Pool
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub avatar: String,
    /// Accumulated rewards; never decreases.
    pub balance: f64,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, avatar: impl Into<String>, balance: f64) -> Self {
        Self {
            name: name.into(),
            avatar: avatar.into(),
            balance: balance.max(0.0),
        }
    }
}
