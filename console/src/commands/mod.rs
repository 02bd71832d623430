//! Line commands understood by the console and their dispatch.

pub mod config;
pub mod leaderboard;
pub mod pet;
pub mod ticker;

use serde_json::{json, Value};
use simulation::{ParseSpeciesError, Species};
use thiserror::Error;

use crate::state::AppState;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Create { name: String, species: Species, stake: f64 },
    Feed,
    Play,
    Rest,
    Reset,
    Pet,
    Leaderboard,
    Status,
    Config,
    Start { interval_ms: Option<u64> },
    Stop,
    Tick { count: u32 },
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Species(#[from] ParseSpeciesError),

    #[error("invalid number `{0}`")]
    Number(String),
}

pub const HELP: &str = "create <name> <species> <stake> | feed | play | rest | reset | pet | \
leaderboard | status | config | start [ms] | stop | tick [count] | help | quit";

fn number<T: std::str::FromStr>(raw: &str) -> Result<T, CommandError> {
    raw.parse().map_err(|_| CommandError::Number(raw.to_string()))
}

impl Command {
    /// Parse one input line. The pet name may contain spaces; species and
    /// stake are always the last two words.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&head, args)) = words.split_first() else {
            return Err(CommandError::Usage(HELP));
        };

        let cmd = match head.to_ascii_lowercase().as_str() {
            "create" | "mint" => {
                if args.len() < 3 {
                    return Err(CommandError::Usage("create <name> <species> <stake>"));
                }
                let (name, rest) = args.split_at(args.len() - 2);
                Command::Create {
                    name: name.join(" "),
                    species: rest[0].parse()?,
                    stake: number(rest[1])?,
                }
            }
            "feed" => Command::Feed,
            "play" => Command::Play,
            "rest" => Command::Rest,
            "reset" => Command::Reset,
            "pet" => Command::Pet,
            "leaderboard" | "board" => Command::Leaderboard,
            "status" => Command::Status,
            "config" => Command::Config,
            "start" => Command::Start {
                interval_ms: args.first().map(|raw| number(raw)).transpose()?,
            },
            "stop" => Command::Stop,
            "tick" => Command::Tick {
                count: args.first().map(|raw| number(raw)).transpose()?.unwrap_or(1),
            },
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(cmd)
    }
}

/// Run a command and wrap its result in the response envelope.
pub fn dispatch(state: &AppState, command: Command) -> Value {
    let result = match command {
        Command::Create { name, species, stake } => pet::create_pet(state, &name, species, stake).and_then(to_value),
        Command::Feed => pet::feed_pet(state).and_then(to_value),
        Command::Play => pet::play_with_pet(state).and_then(to_value),
        Command::Rest => pet::rest_pet(state).and_then(to_value),
        Command::Reset => pet::reset_game(state).and_then(to_value),
        Command::Pet => to_value(pet::get_pet(state)),
        Command::Status => to_value(pet::get_status(state)),
        Command::Leaderboard => to_value(leaderboard::get_leaderboard(state)),
        Command::Config => to_value(config::get_config(state)),
        Command::Start { interval_ms } => ticker::start_ticker(state, interval_ms).and_then(to_value),
        Command::Stop => ticker::stop_ticker(state).and_then(to_value),
        Command::Tick { count } => ticker::tick(state, count).and_then(to_value),
        Command::Help => Ok(json!(HELP)),
        Command::Quit => Ok(json!("bye")),
    };

    match result {
        Ok(data) => json!({ "ok": true, "data": data }),
        Err(error) => json!({ "ok": false, "error": error }),
    }
}

fn to_value<T: serde::Serialize>(value: T) -> Result<Value, String> {
    serde_json::to_value(value).map_err(|e| e.to_string())
}
