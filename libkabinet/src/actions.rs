//! App-wide actions
//!
//! Every reducer receives the full [`Action`] enum and handles only its own
//! family, returning the input state unchanged for the rest. Constructor
//! helpers are provided so call sites read like the dispatch they replace.

use serde::{Deserialize, Serialize};

use crate::timer::BreakKind;

/// Actions handled by [`crate::timer::reduce_timer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerAction {
    /// Switch deep-study mode on or off.
    SetDeepStudy(bool),
    /// Auto-start the next study block after a break.
    SetAutoStart(bool),
    /// Auto-start the break after a study block.
    SetAutoBreak(bool),
    /// Replace one of the two break durations.
    SetBreakDuration { kind: BreakKind, minutes: u32 },
    /// Replace the study duration.
    SetStudyDuration(u32),
    /// Reset to fresh session counters.
    Clear,
}

/// Actions handled by [`crate::session::reduce_session`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionAction {
    /// A short break was taken, with its length in minutes.
    AddShortBreak(u32),
    /// A long break was taken, with its length in minutes.
    AddLongBreak(u32),
    /// A study block was started, with its planned length in minutes.
    AddStudy(u32),
    /// A study block was finished, with its actual length in minutes.
    AddSession(u32),
    /// Reset all counters.
    Clear,
}

/// The app-wide action type dispatched through all reducers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Timer(TimerAction),
    Session(SessionAction),
}

impl Action {
    pub fn set_deep_study(enabled: bool) -> Self {
        Action::Timer(TimerAction::SetDeepStudy(enabled))
    }

    pub fn set_auto_start(enabled: bool) -> Self {
        Action::Timer(TimerAction::SetAutoStart(enabled))
    }

    pub fn set_auto_break(enabled: bool) -> Self {
        Action::Timer(TimerAction::SetAutoBreak(enabled))
    }

    pub fn set_break_duration(kind: BreakKind, minutes: u32) -> Self {
        Action::Timer(TimerAction::SetBreakDuration { kind, minutes })
    }

    pub fn set_study_duration(minutes: u32) -> Self {
        Action::Timer(TimerAction::SetStudyDuration(minutes))
    }

    pub fn clear_timer() -> Self {
        Action::Timer(TimerAction::Clear)
    }

    pub fn add_short_break(minutes: u32) -> Self {
        Action::Session(SessionAction::AddShortBreak(minutes))
    }

    pub fn add_long_break(minutes: u32) -> Self {
        Action::Session(SessionAction::AddLongBreak(minutes))
    }

    pub fn add_study(minutes: u32) -> Self {
        Action::Session(SessionAction::AddStudy(minutes))
    }

    pub fn add_session(minutes: u32) -> Self {
        Action::Session(SessionAction::AddSession(minutes))
    }

    pub fn clear_session() -> Self {
        Action::Session(SessionAction::Clear)
    }
}
