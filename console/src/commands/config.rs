use simulation::Tunables;

use crate::state::AppState;

pub fn get_config(state: &AppState) -> Tunables {
    state.world().tunables().clone()
}
