use chrono::Utc;
use simulation::{TickResult, TickRunner};
use std::sync::Arc;

use crate::state::{AppState, DeathEvent, TickSummary, TickerState};

pub fn ticker_state(state: &AppState) -> TickerState {
    let runner = state.runner();
    TickerState {
        running: runner.as_ref().is_some_and(|r| r.is_running()),
        interval_ms: runner
            .as_ref()
            .map(|r| r.interval_ms())
            .unwrap_or_else(|| state.world().tunables().tick_interval_ms),
    }
}

/// JSON line for the death notification, if this tick killed the pet.
pub fn death_line(result: &TickResult) -> Option<String> {
    let TickResult::Died(report) = result else {
        return None;
    };
    match serde_json::to_string(&DeathEvent::from(report)) {
        Ok(line) => Some(line),
        Err(e) => {
            tracing::error!("failed to encode death event: {}", e);
            None
        }
    }
}

/// Print the one-time death notification.
pub fn announce(result: &TickResult) {
    if let Some(line) = death_line(result) {
        println!("{}", line);
    }
}

/// Start (or restart) the periodic tick.
pub fn start_ticker(state: &AppState, interval_ms: Option<u64>) -> Result<TickerState, String> {
    let interval = interval_ms.unwrap_or_else(|| state.world().tunables().tick_interval_ms);
    if interval == 0 {
        return Err("interval must be greater than zero".into());
    }

    state.stop_runner();

    let mut runner = TickRunner::new();
    runner.start(Arc::clone(&state.world), interval, |result| announce(&result));
    *state.runner() = Some(runner);

    Ok(ticker_state(state))
}

pub fn stop_ticker(state: &AppState) -> Result<TickerState, String> {
    state.stop_runner();
    Ok(ticker_state(state))
}

/// Tick by hand, `count` times at the current time.
pub fn tick(state: &AppState, count: u32) -> Result<TickSummary, String> {
    let mut death = None;
    let mut w = state.world();
    for _ in 0..count {
        let result = w.tick(Utc::now());
        if let TickResult::Died(report) = &result {
            death = Some(DeathEvent::from(report));
        }
    }

    Ok(TickSummary {
        ticks: count,
        phase: w.phase(),
        death,
    })
}
