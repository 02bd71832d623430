use chrono::Utc;
use simulation::world::WorldSnapshot;
use simulation::Species;

use crate::state::{ActionResult, AppState, StatusView};

use super::ticker::ticker_state;

pub fn create_pet(state: &AppState, name: &str, species: Species, stake: f64) -> Result<ActionResult, String> {
    let mut w = state.world();
    let outcome = w.create(name, species, stake, Utc::now());
    Ok(ActionResult::from_outcome(outcome, w.phase()))
}

pub fn feed_pet(state: &AppState) -> Result<ActionResult, String> {
    let mut w = state.world();
    let outcome = w.feed(Utc::now());
    Ok(ActionResult::from_outcome(outcome, w.phase()))
}

pub fn play_with_pet(state: &AppState) -> Result<ActionResult, String> {
    let mut w = state.world();
    let outcome = w.play(Utc::now());
    Ok(ActionResult::from_outcome(outcome, w.phase()))
}

pub fn rest_pet(state: &AppState) -> Result<ActionResult, String> {
    let mut w = state.world();
    let outcome = w.rest();
    Ok(ActionResult::from_outcome(outcome, w.phase()))
}

/// Acknowledge the end of a lifecycle and clear the pet.
pub fn reset_game(state: &AppState) -> Result<ActionResult, String> {
    let mut w = state.world();
    w.reset();
    Ok(ActionResult::from_outcome(simulation::Outcome::Applied, w.phase()))
}

pub fn get_pet(state: &AppState) -> WorldSnapshot {
    state.world().snapshot()
}

pub fn get_status(state: &AppState) -> StatusView {
    let ticker = ticker_state(state);
    let w = state.world();
    StatusView {
        phase: w.phase(),
        has_pet: w.pet().is_some(),
        user_rewards: w.user_rewards(),
        death_pending: w.death_pending(),
        ticker,
    }
}
