use serde::Serialize;
use simulation::{Outcome, Phase, PetWorld, TickRunner};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Application state shared by every command
pub struct AppState {
    pub world: Arc<Mutex<PetWorld>>,
    pub tick_runner: Mutex<Option<TickRunner>>,
}

impl AppState {
    pub fn new(world: PetWorld) -> Self {
        Self {
            world: Arc::new(Mutex::new(world)),
            tick_runner: Mutex::new(None),
        }
    }

    pub fn world(&self) -> MutexGuard<'_, PetWorld> {
        self.world.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn runner(&self) -> MutexGuard<'_, Option<TickRunner>> {
        self.tick_runner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stop the timer thread, if any.
    pub fn stop_runner(&self) {
        let runner = self.runner().take();
        if let Some(mut runner) = runner {
            runner.stop();
        }
    }
}

// -- Serializable types returned by commands --

#[derive(Serialize, Clone)]
pub struct ActionResult {
    pub applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub phase: Phase,
}

impl ActionResult {
    pub fn from_outcome(outcome: Outcome, phase: Phase) -> Self {
        Self {
            applied: outcome.is_applied(),
            reason: outcome.ignored().map(|r| r.to_string()),
            phase,
        }
    }
}

#[derive(Serialize, Clone)]
pub struct StatusView {
    pub phase: Phase,
    pub has_pet: bool,
    pub user_rewards: f64,
    pub death_pending: bool,
    pub ticker: TickerState,
}

#[derive(Serialize, Clone)]
pub struct TickerState {
    pub running: bool,
    pub interval_ms: u64,
}

/// One-time notification pushed when the pet dies
#[derive(Serialize, Clone)]
pub struct DeathEvent {
    pub event: &'static str,
    pub pet_id: String,
    pub name: String,
    pub age: u64,
    pub stake_lost: f64,
    pub payout_per_entry: Option<f64>,
    pub recipients: usize,
}

impl From<&simulation::systems::DeathReport> for DeathEvent {
    fn from(report: &simulation::systems::DeathReport) -> Self {
        Self {
            event: "death",
            pet_id: report.pet_id.to_string(),
            name: report.name.clone(),
            age: report.age,
            stake_lost: report.staked_amount,
            payout_per_entry: report.payout_per_entry,
            recipients: report.recipients,
        }
    }
}

#[derive(Serialize, Clone)]
pub struct TickSummary {
    pub ticks: u32,
    pub phase: Phase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death: Option<DeathEvent>,
}
