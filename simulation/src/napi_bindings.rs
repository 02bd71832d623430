//! N-API bindings for Node.js

use chrono::Utc;
use napi::bindgen_prelude::*;
use napi_derive::napi;
use std::sync::{Arc, Mutex, PoisonError};

use crate::components::Species;
use crate::config::Tunables;
use crate::world::{PetWorld, TickResult};

type WorldHandle = Arc<Mutex<PetWorld>>;

fn lock(world: &WorldHandle) -> std::sync::MutexGuard<'_, PetWorld> {
    world.lock().unwrap_or_else(PoisonError::into_inner)
}

#[napi]
pub fn create_world() -> External<WorldHandle> {
    External::new(Arc::new(Mutex::new(PetWorld::new())))
}

/// Build a world from a JSON tunables document.
#[napi]
pub fn create_world_with_config(config_json: String) -> Result<External<WorldHandle>> {
    let tunables = Tunables::from_json(&config_json)
        .map_err(|e| Error::new(Status::InvalidArg, e.to_string()))?;
    Ok(External::new(Arc::new(Mutex::new(PetWorld::with_tunables(tunables)))))
}

/// Returns `true` if the pet was created.
#[napi]
pub fn create_pet(world: External<WorldHandle>, name: String, species: String, stake: f64) -> Result<bool> {
    let species: Species = species
        .parse()
        .map_err(|e: crate::components::ParseSpeciesError| Error::new(Status::InvalidArg, e.to_string()))?;
    Ok(lock(&world).create(&name, species, stake, Utc::now()).is_applied())
}

#[napi]
pub fn feed(world: External<WorldHandle>) -> bool {
    lock(&world).feed(Utc::now()).is_applied()
}

#[napi]
pub fn play(world: External<WorldHandle>) -> bool {
    lock(&world).play(Utc::now()).is_applied()
}

#[napi]
pub fn rest(world: External<WorldHandle>) -> bool {
    lock(&world).rest().is_applied()
}

#[napi]
pub fn reset(world: External<WorldHandle>) {
    lock(&world).reset();
}

/// Returns `true` if the pet died on this tick.
#[napi]
pub fn tick(world: External<WorldHandle>) -> bool {
    matches!(lock(&world).tick(Utc::now()), TickResult::Died(_))
}

#[napi]
pub fn get_tick_interval_ms(world: External<WorldHandle>) -> u32 {
    lock(&world).tunables().tick_interval_ms.min(u32::MAX as u64) as u32
}

/// Full session snapshot as a JSON string.
#[napi]
pub fn get_snapshot(world: External<WorldHandle>) -> Result<String> {
    serde_json::to_string(&lock(&world).snapshot())
        .map_err(|e| Error::new(Status::GenericFailure, e.to_string()))
}
