//! Study session counters reducer
//!
//! Records what actually happened during study sessions: breaks taken,
//! study blocks started and finished, and the recorded lengths of each.
//! This is the shape the timer reducer's clear action resets to.

use serde::{Deserialize, Serialize};

use crate::actions::{Action, SessionAction};

/// Accumulated counters for recorded study activity. All lengths are in
/// minutes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCounters {
    /// Study blocks started.
    pub studies_attempted: u32,
    /// Study blocks finished.
    pub studies: u32,
    pub study_times: Vec<u32>,
    pub short_breaks_taken: u32,
    pub long_breaks_taken: u32,
    pub short_breaks: Vec<u32>,
    pub long_breaks: Vec<u32>,
    pub session_times: Vec<u32>,
    /// Completed study sessions.
    pub sessions: u32,
}

/// Pure transition function: `(state, action) -> state`.
///
/// Actions outside the session family are identity.
pub fn reduce_session(state: SessionCounters, action: &Action) -> SessionCounters {
    let action = match action {
        Action::Session(action) => action,
        _ => return state,
    };

    let mut counters = state;
    match *action {
        SessionAction::AddShortBreak(minutes) => {
            counters.short_breaks_taken += 1;
            counters.short_breaks.push(minutes);
        }
        SessionAction::AddLongBreak(minutes) => {
            counters.long_breaks_taken += 1;
            counters.long_breaks.push(minutes);
        }
        SessionAction::AddStudy(minutes) => {
            counters.studies_attempted += 1;
            counters.study_times.push(minutes);
        }
        SessionAction::AddSession(minutes) => {
            counters.studies += 1;
            counters.sessions += 1;
            counters.session_times.push(minutes);
        }
        SessionAction::Clear => counters = SessionCounters::default(),
    }
    counters
}
