//! AImagotchi console
//!
//! Reads one command per line on stdin and answers with one JSON line on
//! stdout. Logs go to stderr.

mod commands;
mod state;

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::{info, Level};

use commands::Command;
use simulation::{PetWorld, Tunables};
use state::AppState;

#[derive(Parser)]
#[command(name = "aimagotchi")]
#[command(about = "Feed it. Play with it. Or lose your bags.")]
struct Cli {
    /// JSON file with tunables; missing fields use defaults
    #[arg(long, env = "AIMAGOTCHI_CONFIG")]
    config: Option<PathBuf>,

    /// Override the tick interval in milliseconds
    #[arg(long, env = "AIMAGOTCHI_TICK_MS")]
    tick_ms: Option<u64>,

    /// Do not start the timer; tick only with the `tick` command
    #[arg(long)]
    manual: bool,

    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: Level,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .init();

    let mut tunables = match &cli.config {
        Some(path) => Tunables::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Tunables::default(),
    };
    if let Some(ms) = cli.tick_ms {
        tunables.tick_interval_ms = ms;
    }
    tunables.validate().context("invalid tunables")?;

    info!(tick_interval_ms = tunables.tick_interval_ms, "AImagotchi starting");
    let app_state = AppState::new(PetWorld::with_tunables(tunables));

    if !cli.manual {
        commands::ticker::start_ticker(&app_state, None).map_err(anyhow::Error::msg)?;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => commands::dispatch(&app_state, command),
            Err(e) => serde_json::json!({ "ok": false, "error": e.to_string() }),
        };
        println!("{}", response);
    }

    app_state.stop_runner();
    info!("AImagotchi stopped");
    Ok(())
}
