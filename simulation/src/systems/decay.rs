//! Decay System
//!
//! Hunger and happiness drain once their care action is overdue; energy
//! trickles back every tick.

use chrono::{DateTime, Duration, Utc};

use crate::components::{lower, raise, Pet, Vitals};
use crate::config::Tunables;

/// True once at least `grace_ms` has passed since `since`.
fn overdue(since: DateTime<Utc>, now: DateTime<Utc>, grace_ms: i64) -> bool {
    now.signed_duration_since(since) >= Duration::milliseconds(grace_ms)
}

/// Vitals after one tick of decay at `now`. Does not mutate the pet.
pub fn decay_system(pet: &Pet, tunables: &Tunables, now: DateTime<Utc>) -> Vitals {
    let v = pet.vitals;

    let hunger = if overdue(pet.last_fed, now, tunables.decay_grace_ms) {
        lower(v.hunger, tunables.decay_rate)
    } else {
        v.hunger
    };
    let happiness = if overdue(pet.last_played, now, tunables.decay_grace_ms) {
        lower(v.happiness, tunables.decay_rate)
    } else {
        v.happiness
    };
    let energy = raise(v.energy, tunables.energy_recovery);

    Vitals::new(hunger, happiness, energy)
}
