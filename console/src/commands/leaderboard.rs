use serde::Serialize;
use simulation::RankedEntry;

use crate::state::AppState;

#[derive(Serialize, Clone)]
pub struct LeaderboardView {
    pub total_pool: f64,
    pub entries: Vec<RankedEntry>,
}

pub fn get_leaderboard(state: &AppState) -> LeaderboardView {
    let w = state.world();
    LeaderboardView {
        total_pool: w.leaderboard().total_pool(),
        entries: w.leaderboard().ranked(),
    }
}
