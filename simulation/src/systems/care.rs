//! Care System
//!
//! Feeding, playing and resting. Each action only touches a living pet.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::components::{lower, raise, Pet};
use crate::config::Tunables;
use crate::error::{Ignored, Outcome};

fn require_alive(pet: &Pet) -> Result<(), Ignored> {
    if pet.is_alive {
        Ok(())
    } else {
        Err(Ignored::PetDead)
    }
}

/// Refill hunger and restart the hunger decay window.
pub fn feed_system(pet: &mut Pet, tunables: &Tunables, now: DateTime<Utc>) -> Outcome {
    if let Err(reason) = require_alive(pet) {
        return reason.into();
    }

    pet.vitals.hunger = raise(pet.vitals.hunger, tunables.feed_amount);
    pet.last_fed = now;
    debug!(pet = %pet.id, hunger = pet.vitals.hunger, "fed");
    Outcome::Applied
}

/// Whether the pet has the energy to play.
pub fn can_play(pet: &Pet, tunables: &Tunables) -> bool {
    pet.is_alive && pet.vitals.energy >= tunables.play_energy_cost
}

/// Trade energy for happiness and restart the happiness decay window.
pub fn play_system(pet: &mut Pet, tunables: &Tunables, now: DateTime<Utc>) -> Outcome {
    if let Err(reason) = require_alive(pet) {
        return reason.into();
    }
    if !can_play(pet, tunables) {
        return Ignored::TooTired {
            energy: pet.vitals.energy,
            required: tunables.play_energy_cost,
        }
        .into();
    }

    pet.vitals.happiness = raise(pet.vitals.happiness, tunables.play_happiness);
    pet.vitals.energy = lower(pet.vitals.energy, tunables.play_energy_cost);
    pet.last_played = now;
    debug!(pet = %pet.id, happiness = pet.vitals.happiness, energy = pet.vitals.energy, "played");
    Outcome::Applied
}

pub fn rest_system(pet: &mut Pet, tunables: &Tunables) -> Outcome {
    if let Err(reason) = require_alive(pet) {
        return reason.into();
    }

    pet.vitals.energy = raise(pet.vitals.energy, tunables.rest_energy);
    debug!(pet = %pet.id, energy = pet.vitals.energy, "rested");
    Outcome::Applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Species, Vitals};
    use chrono::Duration;

    fn pet_with(vitals: Vitals) -> Pet {
        Pet::new("Byte".into(), Species::Pixel, 0.5, vitals, Utc::now())
    }

    #[test]
    fn test_feed_caps_at_100() {
        let t = Tunables::default();
        let mut pet = pet_with(Vitals::new(80, 50, 50));
        let later = pet.created_at + Duration::seconds(30);

        assert!(feed_system(&mut pet, &t, later).is_applied());
        assert_eq!(pet.vitals.hunger, 100);
        assert_eq!(pet.last_fed, later);
    }

    #[test]
    fn test_play_costs_energy() {
        let t = Tunables::default();
        let mut pet = pet_with(Vitals::new(50, 50, 20));

        assert!(play_system(&mut pet, &t, Utc::now()).is_applied());
        assert_eq!(pet.vitals.happiness, 75);
        assert_eq!(pet.vitals.energy, 0);

        let before = pet.clone();
        let outcome = play_system(&mut pet, &t, Utc::now());
        assert_eq!(outcome, Outcome::Ignored(Ignored::TooTired { energy: 0, required: 20 }));
        assert_eq!(pet.vitals, before.vitals);
        assert_eq!(pet.last_played, before.last_played);
    }

    #[test]
    fn test_rest_caps_at_100() {
        let t = Tunables::default();
        let mut pet = pet_with(Vitals::new(50, 50, 70));
        rest_system(&mut pet, &t);
        assert_eq!(pet.vitals.energy, 100);
    }

    #[test]
    fn test_dead_pet_ignores_care() {
        let t = Tunables::default();
        let mut pet = pet_with(Vitals::new(10, 50, 50));
        pet.is_alive = false;

        assert_eq!(feed_system(&mut pet, &t, Utc::now()), Outcome::Ignored(Ignored::PetDead));
        assert_eq!(play_system(&mut pet, &t, Utc::now()), Outcome::Ignored(Ignored::PetDead));
        assert_eq!(rest_system(&mut pet, &t), Outcome::Ignored(Ignored::PetDead));
        assert_eq!(pet.vitals, Vitals::new(10, 50, 50));
    }
}
