//! Death System
//!
//! Kills a pet whose decayed vitals crossed the threshold and pays its stake
//! out to the leaderboard.

use serde::Serialize;
use tracing::{info, warn};

use crate::components::{Pet, PetId, Vitals};
use crate::config::Tunables;
use crate::leaderboard::Leaderboard;

/// What happened when a pet died.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeathReport {
    pub pet_id: PetId,
    pub name: String,
    pub age: u64,
    pub staked_amount: f64,
    /// Amount credited to each leaderboard entry; `None` if nobody was paid.
    pub payout_per_entry: Option<f64>,
    pub recipients: usize,
}

pub fn is_fatal(vitals: &Vitals, tunables: &Tunables) -> bool {
    vitals.hunger <= tunables.death_threshold || vitals.happiness <= tunables.death_threshold
}

/// Apply `decayed` to the pet and resolve death.
///
/// A surviving pet ages by one tick. A pet that dies keeps its final vitals
/// and age, and its stake is split across the leaderboard.
pub fn death_system(
    pet: &mut Pet,
    decayed: Vitals,
    leaderboard: &mut Leaderboard,
    tunables: &Tunables,
) -> Option<DeathReport> {
    pet.vitals = decayed;

    if !is_fatal(&decayed, tunables) {
        pet.age += 1;
        return None;
    }

    pet.is_alive = false;
    let payout_per_entry = leaderboard.redistribute(pet.staked_amount);
    if payout_per_entry.is_none() {
        warn!(pet = %pet.id, "no leaderboard entries to receive the stake");
    }

    info!(
        pet = %pet.id,
        name = %pet.name,
        age = pet.age,
        hunger = decayed.hunger,
        happiness = decayed.happiness,
        stake = pet.staked_amount,
        "pet died"
    );

    Some(DeathReport {
        pet_id: pet.id,
        name: pet.name.clone(),
        age: pet.age,
        staked_amount: pet.staked_amount,
        payout_per_entry,
        recipients: if payout_per_entry.is_some() { leaderboard.len() } else { 0 },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{LeaderboardEntry, Species};
    use chrono::Utc;

    #[test]
    fn test_threshold_is_inclusive() {
        let t = Tunables::default();
        assert!(is_fatal(&Vitals::new(10, 100, 100), &t));
        assert!(is_fatal(&Vitals::new(100, 10, 100), &t));
        assert!(!is_fatal(&Vitals::new(11, 11, 0), &t));
    }

    #[test]
    fn test_survivor_ages() {
        let t = Tunables::default();
        let mut lb = Leaderboard::with_default_roster();
        let mut pet = Pet::new("Neo".into(), Species::Neon, 1.0, Vitals::full(), Utc::now());

        assert!(death_system(&mut pet, Vitals::new(98, 98, 100), &mut lb, &t).is_none());
        assert_eq!(pet.age, 1);
        assert!(pet.is_alive);
        assert_eq!(pet.vitals.hunger, 98);
    }

    #[test]
    fn test_death_pays_out_stake() {
        let t = Tunables::default();
        let mut lb = Leaderboard::new(vec![
            LeaderboardEntry::new("a", "👾", 1.0),
            LeaderboardEntry::new("b", "🤖", 0.0),
        ]);
        let mut pet = Pet::new("Neo".into(), Species::Neon, 0.5, Vitals::full(), Utc::now());
        pet.age = 7;

        let report = death_system(&mut pet, Vitals::new(10, 50, 60), &mut lb, &t).unwrap();
        assert!(!pet.is_alive);
        assert_eq!(pet.age, 7);
        assert_eq!(pet.vitals, Vitals::new(10, 50, 60));
        assert_eq!(report.recipients, 2);
        assert_eq!(report.payout_per_entry, Some(0.25));
        assert!((lb.entries()[0].balance - 1.25).abs() < 1e-12);
        assert!((lb.entries()[1].balance - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_death_with_empty_leaderboard() {
        let t = Tunables::default();
        let mut lb = Leaderboard::default();
        let mut pet = Pet::new("Neo".into(), Species::Neon, 0.5, Vitals::full(), Utc::now());

        let report = death_system(&mut pet, Vitals::new(5, 5, 5), &mut lb, &t).unwrap();
        assert!(!pet.is_alive);
        assert_eq!(report.payout_per_entry, None);
        assert_eq!(report.recipients, 0);
    }
}
