//! kabinet-timer - apply study-timer actions to persisted state
//!
//! Loads the persisted timer/session state (seeded from the config file on
//! first run), applies the subcommand's actions through the reducers,
//! persists the result and prints it.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::debug;

use libkabinet::{
    config, logging, reduce_session, reduce_timer, Action, BreakKind, Config, KabinetError,
    SessionCounters, TimerState,
};

#[derive(Parser, Debug)]
#[command(name = "kabinet-timer")]
#[command(about = "Inspect and update study-timer state", long_about = None)]
struct Cli {
    /// State file (defaults to timer.json in the kabinet data directory)
    #[arg(long)]
    state_file: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current state without changing it
    Show,
    /// Set the study duration in minutes
    Study { minutes: u32 },
    /// Set a break duration in minutes
    Break { kind: BreakKind, minutes: u32 },
    /// Switch deep-study mode on or off
    DeepStudy { switch: String },
    /// Switch auto-start on or off
    AutoStart { switch: String },
    /// Switch auto-break on or off
    AutoBreak { switch: String },
    /// Record a study event (study, session, short-break, long-break)
    Record { event: String, minutes: u32 },
    /// Reset the timer to fresh session counters
    Clear,
}

/// Everything the tool persists between invocations.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedState {
    timer: TimerState,
    session: SessionCounters,
}

impl PersistedState {
    fn seeded(config: &Config) -> Self {
        Self {
            timer: TimerState::Settings(config.timer.clone().into()),
            session: SessionCounters::default(),
        }
    }

    fn apply(self, action: &Action) -> Self {
        Self {
            timer: reduce_timer(self.timer, action),
            session: reduce_session(self.session, action),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        logging::init(logging::LogFormat::Text, "debug", true);
    } else {
        logging::init_default();
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<KabinetError>()
            .map(KabinetError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let state_path = match cli.state_file {
        Some(path) => path,
        None => config::resolve_data_path()?.join("timer.json"),
    };

    let config = Config::load().unwrap_or_else(|_| Config::default_config());
    let state = load_state(&state_path, &config)?;

    let actions = match &cli.command {
        Command::Show => vec![],
        Command::Study { minutes } => vec![Action::set_study_duration(*minutes)],
        Command::Break { kind, minutes } => vec![Action::set_break_duration(*kind, *minutes)],
        Command::DeepStudy { switch } => vec![Action::set_deep_study(parse_switch(switch)?)],
        Command::AutoStart { switch } => vec![Action::set_auto_start(parse_switch(switch)?)],
        Command::AutoBreak { switch } => vec![Action::set_auto_break(parse_switch(switch)?)],
        Command::Record { event, minutes } => vec![parse_record(event, *minutes)?],
        // Clearing resets both reducers, matching the app where both
        // action families share one clear type.
        Command::Clear => vec![Action::clear_timer(), Action::clear_session()],
    };

    let state = if actions.is_empty() {
        state
    } else {
        let mut state = state;
        for action in &actions {
            debug!(?action, "applying action");
            state = state.apply(action);
        }
        save_state(&state_path, &state)?;
        state
    };

    print_state(&state, &cli.format)?;
    Ok(())
}

fn load_state(path: &PathBuf, config: &Config) -> anyhow::Result<PersistedState> {
    if path.exists() {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read state file {}", path.display()))?;
        let state = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse state file {}", path.display()))?;
        Ok(state)
    } else {
        debug!(path = %path.display(), "no state file, seeding from config");
        Ok(PersistedState::seeded(config))
    }
}

fn save_state(path: &PathBuf, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let content = serde_json::to_string_pretty(state)?;
    std::fs::write(path, content)
        .with_context(|| format!("failed to write state file {}", path.display()))?;
    Ok(())
}

fn print_state(state: &PersistedState, format: &str) -> anyhow::Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(state)?),
        "text" => {
            match &state.timer {
                TimerState::Settings(s) => {
                    println!("study: {} min", s.study_minutes);
                    println!("short break: {} min", s.short_break_minutes);
                    println!("long break: {} min", s.long_break_minutes);
                    println!("deep study: {}", on_off(s.deep_study));
                    println!("auto start: {}", on_off(s.auto_start));
                    println!("auto break: {}", on_off(s.auto_break));
                }
                TimerState::Counters(_) => println!("timer cleared"),
            }
            let c = &state.session;
            println!(
                "recorded: {} started, {} finished, {} short breaks, {} long breaks",
                c.studies_attempted, c.studies, c.short_breaks_taken, c.long_breaks_taken
            );
        }
        other => {
            return Err(KabinetError::InvalidInput(format!(
                "Unknown output format: '{}'. Valid options: text, json",
                other
            ))
            .into())
        }
    }
    Ok(())
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

fn parse_switch(s: &str) -> anyhow::Result<bool> {
    match s.to_lowercase().as_str() {
        "on" | "true" => Ok(true),
        "off" | "false" => Ok(false),
        other => Err(KabinetError::InvalidInput(format!(
            "Invalid switch value: '{}'. Valid options: on, off",
            other
        ))
        .into()),
    }
}

fn parse_record(event: &str, minutes: u32) -> anyhow::Result<Action> {
    match event.to_lowercase().as_str() {
        "study" => Ok(Action::add_study(minutes)),
        "session" => Ok(Action::add_session(minutes)),
        "short-break" => Ok(Action::add_short_break(minutes)),
        "long-break" => Ok(Action::add_long_break(minutes)),
        other => Err(KabinetError::InvalidInput(format!(
            "Unknown event: '{}'. Valid options: study, session, short-break, long-break",
            other
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_switch() {
        assert!(parse_switch("on").unwrap());
        assert!(parse_switch("TRUE").unwrap());
        assert!(!parse_switch("off").unwrap());
        assert!(parse_switch("maybe").is_err());
    }

    #[test]
    fn test_parse_record() {
        assert_eq!(parse_record("study", 25).unwrap(), Action::add_study(25));
        assert_eq!(
            parse_record("long-break", 15).unwrap(),
            Action::add_long_break(15)
        );
        assert!(parse_record("nap", 5).is_err());
    }

    #[test]
    fn test_clearing_resets_both_reducers() {
        let config = Config::default_config();
        let state = PersistedState::seeded(&config)
            .apply(&Action::add_study(25))
            .apply(&Action::add_session(22));
        assert_eq!(state.session.studies_attempted, 1);

        let state = state
            .apply(&Action::clear_timer())
            .apply(&Action::clear_session());
        assert_eq!(state.timer, TimerState::Counters(SessionCounters::default()));
        assert_eq!(state.session, SessionCounters::default());
    }

    #[test]
    fn test_seeded_state_uses_config_defaults() {
        let config = Config::default_config();
        let state = PersistedState::seeded(&config);
        assert_eq!(state.timer.settings().unwrap().study_minutes, 24);
        assert_eq!(state.session, SessionCounters::default());
    }
}
