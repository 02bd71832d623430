//! End-to-end lifecycle scenarios driven with explicit timestamps.

use chrono::{DateTime, Duration, TimeZone, Utc};
use simulation::{
    Ignored, Leaderboard, LeaderboardEntry, Outcome, Phase, PetWorld, Species, TickResult, Tunables,
    Vitals,
};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
}

fn balances(world: &PetWorld) -> Vec<f64> {
    world.leaderboard().entries().iter().map(|e| e.balance).collect()
}

#[test]
fn neglected_pet_dies_after_45_overdue_ticks() {
    let mut world = PetWorld::new();
    let start = t0();
    assert!(world.create("Mochi", Species::Pixel, 1.0, start).is_applied());
    let before = balances(&world);

    // Every tick after the first minute drains 2 hunger and 2 happiness
    let mut now = start + Duration::minutes(1);
    let mut deaths = Vec::new();
    for _ in 0..60 {
        if let TickResult::Died(report) = world.tick(now) {
            deaths.push(report);
        }
        now += Duration::seconds(3);
    }

    assert_eq!(deaths.len(), 1, "a pet dies exactly once");
    let report = &deaths[0];
    assert_eq!(report.age, 44);
    assert_eq!(report.recipients, 5);

    let pet = world.pet().unwrap();
    assert!(!pet.is_alive);
    assert_eq!(pet.vitals.hunger, 10);
    assert_eq!(pet.vitals.happiness, 10);
    assert_eq!(pet.vitals.energy, 100);
    assert_eq!(world.phase(), Phase::Dead);
    assert!(world.death_pending());

    for (after, before) in balances(&world).into_iter().zip(before) {
        assert!((after - before - 0.2).abs() < 1e-9);
    }
}

#[test]
fn cared_for_pet_survives() {
    let mut world = PetWorld::new();
    let start = t0();
    world.create("Mochi", Species::Cyber, 0.3, start);

    let mut now = start;
    for i in 0..400 {
        now += Duration::seconds(3);
        if i % 10 == 0 {
            assert!(world.feed(now).is_applied());
            if world.can_play() {
                world.play(now);
            } else {
                world.rest();
            }
        }
        assert!(!matches!(world.tick(now), TickResult::Died(_)));
    }

    let pet = world.pet().unwrap();
    assert!(pet.is_alive);
    assert_eq!(pet.age, 400);
    assert_eq!(pet.age_days(), 20);
}

#[test]
fn play_requires_energy() {
    let mut world = PetWorld::new();
    let start = t0();
    world.create("Zap", Species::Neon, 1.0, start);

    for _ in 0..5 {
        assert!(world.play(start).is_applied());
    }
    assert_eq!(world.pet().unwrap().vitals.energy, 0);
    assert_eq!(
        world.play(start),
        Outcome::Ignored(Ignored::TooTired { energy: 0, required: 20 })
    );

    world.rest();
    assert_eq!(world.pet().unwrap().vitals.energy, 40);
    assert!(world.can_play());
}

#[test]
fn creation_credit_accumulates_across_pets() {
    let mut world = PetWorld::new();
    let start = t0();
    let pool = world.leaderboard().total_pool();

    world.create("One", Species::Glitch, 0.5, start);
    world.reset();
    world.create("Two", Species::Glitch, 1.0, start);

    assert!((world.user_rewards() - 0.15).abs() < 1e-12);
    assert_eq!(world.leaderboard().total_pool(), pool);
}

#[test]
fn death_with_no_recipients_is_guarded() {
    let mut world = PetWorld::with_leaderboard(Tunables::default(), Leaderboard::default());
    let start = t0();
    world.create("Lonely", Species::Glitch, 1.0, start);

    let mut now = start + Duration::minutes(1);
    let report = loop {
        if let TickResult::Died(report) = world.tick(now) {
            break report;
        }
        now += Duration::seconds(3);
    };

    assert_eq!(report.payout_per_entry, None);
    assert!(world.leaderboard().is_empty());
    assert_eq!(world.phase(), Phase::Dead);
}

#[test]
fn custom_tunables_change_the_pace() {
    let tunables = Tunables::from_json(r#"{ "decay_rate": 45, "decay_grace_ms": 0 }"#).unwrap();
    let roster = vec![LeaderboardEntry::new("solo", "🎮", 0.0)];
    let mut world = PetWorld::with_leaderboard(tunables, Leaderboard::new(roster));
    let start = t0();
    world.create("Fast", Species::Cyber, 2.0, start);

    assert_eq!(
        world.tick(start),
        TickResult::Survived { age: 1, vitals: Vitals::new(55, 55, 100) }
    );
    assert!(matches!(world.tick(start), TickResult::Died(_)));
    assert!((world.leaderboard().entries()[0].balance - 2.0).abs() < 1e-12);
}

#[test]
fn reset_starts_a_fresh_lifecycle() {
    let mut world = PetWorld::new();
    let start = t0();
    world.create("Old", Species::Glitch, 1.0, start);
    let old_id = world.pet().unwrap().id;

    let mut now = start + Duration::minutes(1);
    while world.phase() == Phase::Alive {
        world.tick(now);
        now += Duration::seconds(3);
    }

    world.reset();
    assert_eq!(world.phase(), Phase::NoPet);
    assert!(!world.death_pending());
    assert!(world.snapshot().pet.is_none());

    assert!(world.create("New", Species::Neon, 0.1, now).is_applied());
    let pet = world.pet().unwrap();
    assert_ne!(pet.id, old_id);
    assert_eq!(pet.age, 0);
    assert_eq!(pet.vitals, Vitals::full());
    assert!(pet.is_alive);
}
