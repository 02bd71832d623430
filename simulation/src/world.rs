//! Pet World - owns the single pet, the leaderboard and the user's rewards

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::components::*;
use crate::config::Tunables;
use crate::error::{Ignored, Outcome};
use crate::leaderboard::{Leaderboard, RankedEntry};
use crate::names;
use crate::systems::{self, DeathReport};

/// Where the session is in the pet lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    NoPet,
    Alive,
    Dead,
}

/// Result of one tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickResult {
    /// No living pet; nothing changed.
    Idle,
    /// The pet survived the tick.
    Survived { age: u64, vitals: Vitals },
    Died(DeathReport),
}

/// Pet as presented to the UI.
#[derive(Debug, Clone, Serialize)]
pub struct PetView {
    #[serde(flatten)]
    pub pet: Pet,
    pub mood: Mood,
    pub mood_label: &'static str,
    pub glyph: &'static str,
    pub age_days: u64,
    pub can_play: bool,
}

/// Read-only view of the whole session.
#[derive(Debug, Clone, Serialize)]
pub struct WorldSnapshot {
    pub phase: Phase,
    pub pet: Option<PetView>,
    pub leaderboard: Vec<RankedEntry>,
    pub total_pool: f64,
    pub user_rewards: f64,
    /// Set when the pet dies; cleared by `reset`.
    pub death_pending: bool,
}

pub struct PetWorld {
    pet: Option<Pet>,
    leaderboard: Leaderboard,
    user_rewards: f64,
    death_pending: bool,
    tunables: Tunables,
}

impl PetWorld {
    pub fn new() -> Self {
        Self::with_tunables(Tunables::default())
    }

    pub fn with_tunables(tunables: Tunables) -> Self {
        Self::with_leaderboard(tunables, Leaderboard::with_default_roster())
    }

    pub fn with_leaderboard(tunables: Tunables, leaderboard: Leaderboard) -> Self {
        Self {
            pet: None,
            leaderboard,
            user_rewards: 0.0,
            death_pending: false,
            tunables,
        }
    }

    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn pet(&self) -> Option<&Pet> {
        self.pet.as_ref()
    }

    pub fn user_rewards(&self) -> f64 {
        self.user_rewards
    }

    pub fn death_pending(&self) -> bool {
        self.death_pending
    }

    pub fn phase(&self) -> Phase {
        match &self.pet {
            None => Phase::NoPet,
            Some(pet) if pet.is_alive => Phase::Alive,
            Some(_) => Phase::Dead,
        }
    }

    /// Mint a new pet. Only valid while there is no pet.
    pub fn create(&mut self, name: &str, species: Species, stake: f64, now: DateTime<Utc>) -> Outcome {
        if self.pet.is_some() {
            return Ignored::PetExists.into();
        }

        let name = name.trim();
        if name.is_empty() {
            return Ignored::EmptyName.into();
        }
        if name.chars().count() > self.tunables.max_name_len {
            return Ignored::NameTooLong { max: self.tunables.max_name_len }.into();
        }
        if !stake.is_finite() || stake <= 0.0 {
            return Ignored::InvalidStake.into();
        }

        let t = &self.tunables;
        let vitals = Vitals::new(t.initial_hunger, t.initial_happiness, t.initial_energy);
        let pet = Pet::new(name.to_string(), species, stake, vitals, now);

        let credit = stake * t.creation_reward_fraction;
        self.user_rewards += credit;

        info!(pet = %pet.id, name = %pet.name, species = %species, stake, credit, "pet created");
        self.pet = Some(pet);
        Outcome::Applied
    }

    fn living_pet(pet: &mut Option<Pet>) -> Result<&mut Pet, Ignored> {
        match pet.as_mut() {
            None => Err(Ignored::NoPet),
            Some(pet) if !pet.is_alive => Err(Ignored::PetDead),
            Some(pet) => Ok(pet),
        }
    }

    pub fn feed(&mut self, now: DateTime<Utc>) -> Outcome {
        match Self::living_pet(&mut self.pet) {
            Ok(pet) => systems::feed_system(pet, &self.tunables, now),
            Err(reason) => reason.into(),
        }
    }

    pub fn play(&mut self, now: DateTime<Utc>) -> Outcome {
        match Self::living_pet(&mut self.pet) {
            Ok(pet) => systems::play_system(pet, &self.tunables, now),
            Err(reason) => reason.into(),
        }
    }

    pub fn rest(&mut self) -> Outcome {
        match Self::living_pet(&mut self.pet) {
            Ok(pet) => systems::rest_system(pet, &self.tunables),
            Err(reason) => reason.into(),
        }
    }

    /// Whether `play` would currently be applied.
    pub fn can_play(&self) -> bool {
        self.pet
            .as_ref()
            .is_some_and(|pet| systems::can_play(pet, &self.tunables))
    }

    /// Run one decay tick at `now`.
    pub fn tick(&mut self, now: DateTime<Utc>) -> TickResult {
        let Some(pet) = self.pet.as_mut().filter(|pet| pet.is_alive) else {
            return TickResult::Idle;
        };

        let decayed = systems::decay_system(pet, &self.tunables, now);
        match systems::death_system(pet, decayed, &mut self.leaderboard, &self.tunables) {
            Some(report) => {
                self.death_pending = true;
                TickResult::Died(report)
            }
            None => {
                debug!(
                    pet = %pet.id,
                    age = pet.age,
                    hunger = decayed.hunger,
                    happiness = decayed.happiness,
                    energy = decayed.energy,
                    "tick"
                );
                TickResult::Survived { age: pet.age, vitals: decayed }
            }
        }
    }

    /// Clear the current pet and return to `NoPet`. Idempotent.
    pub fn reset(&mut self) {
        if let Some(pet) = self.pet.take() {
            if pet.is_alive {
                warn!(pet = %pet.id, stake = pet.staked_amount, "abandoning a living pet");
            } else {
                info!(pet = %pet.id, "death acknowledged");
            }
        }
        self.death_pending = false;
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        let pet = self.pet.as_ref().map(|pet| {
            let mood = pet.mood();
            PetView {
                pet: pet.clone(),
                mood,
                mood_label: mood.label(),
                glyph: names::mood_glyph(pet.species, mood),
                age_days: pet.age_days(),
                can_play: systems::can_play(pet, &self.tunables),
            }
        });

        WorldSnapshot {
            phase: self.phase(),
            pet,
            leaderboard: self.leaderboard.ranked(),
            total_pool: self.leaderboard.total_pool(),
            user_rewards: self.user_rewards,
            death_pending: self.death_pending,
        }
    }

    #[cfg(test)]
    pub(crate) fn pet_mut(&mut self) -> Option<&mut Pet> {
        self.pet.as_mut()
    }
}

impl Default for PetWorld {
    fn default() -> Self {
        Self::new()
    }
}
