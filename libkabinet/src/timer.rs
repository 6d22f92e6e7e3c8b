//! Timer settings reducer
//!
//! A pure transition function over [`TimerState`]. The state is a tagged
//! variant: normally it carries [`TimerSettings`], but the clear action
//! replaces it with fresh [`SessionCounters`] — the shape the original
//! application reset to. Settings-mutating actions received while in the
//! counters variant are identity.

use serde::{Deserialize, Serialize};

use crate::actions::{Action, TimerAction};
use crate::session::SessionCounters;

/// Which of the two break durations an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakKind {
    Short,
    Long,
}

impl std::fmt::Display for BreakKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BreakKind::Short => write!(f, "short"),
            BreakKind::Long => write!(f, "long"),
        }
    }
}

impl std::str::FromStr for BreakKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(BreakKind::Short),
            "long" => Ok(BreakKind::Long),
            _ => Err(format!(
                "Invalid break kind: '{}'. Valid options: short, long",
                s
            )),
        }
    }
}

/// Study/break timer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    pub deep_study: bool,
    pub auto_start: bool,
    pub auto_break: bool,
    pub long_break_minutes: u32,
    pub short_break_minutes: u32,
    pub study_minutes: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            deep_study: false,
            auto_start: false,
            auto_break: false,
            long_break_minutes: 10,
            short_break_minutes: 5,
            study_minutes: 24,
        }
    }
}

/// State maintained by [`reduce_timer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimerState {
    Settings(TimerSettings),
    Counters(SessionCounters),
}

impl Default for TimerState {
    fn default() -> Self {
        TimerState::Settings(TimerSettings::default())
    }
}

impl TimerState {
    /// The settings, when the state holds them.
    pub fn settings(&self) -> Option<&TimerSettings> {
        match self {
            TimerState::Settings(s) => Some(s),
            TimerState::Counters(_) => None,
        }
    }
}

/// Pure transition function: `(state, action) -> state`.
///
/// Actions outside the timer family are identity, as are settings
/// mutations while the state holds counters. Clear always yields fresh
/// counters regardless of prior state.
pub fn reduce_timer(state: TimerState, action: &Action) -> TimerState {
    let action = match action {
        Action::Timer(action) => action,
        _ => return state,
    };

    if let TimerAction::Clear = action {
        return TimerState::Counters(SessionCounters::default());
    }

    let mut settings = match state {
        TimerState::Settings(s) => s,
        TimerState::Counters(c) => return TimerState::Counters(c),
    };

    match *action {
        TimerAction::SetDeepStudy(enabled) => settings.deep_study = enabled,
        TimerAction::SetAutoStart(enabled) => settings.auto_start = enabled,
        TimerAction::SetAutoBreak(enabled) => settings.auto_break = enabled,
        TimerAction::SetBreakDuration { kind, minutes } => match kind {
            BreakKind::Short => settings.short_break_minutes = minutes,
            BreakKind::Long => settings.long_break_minutes = minutes,
        },
        TimerAction::SetStudyDuration(minutes) => settings.study_minutes = minutes,
        TimerAction::Clear => unreachable!("handled above"),
    }

    TimerState::Settings(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::SessionAction;

    #[test]
    fn test_default_settings() {
        let settings = TimerSettings::default();
        assert!(!settings.deep_study);
        assert!(!settings.auto_start);
        assert!(!settings.auto_break);
        assert_eq!(settings.long_break_minutes, 10);
        assert_eq!(settings.short_break_minutes, 5);
        assert_eq!(settings.study_minutes, 24);
    }

    #[test]
    fn test_set_study_duration_leaves_other_fields() {
        let state = TimerState::default();
        let state = reduce_timer(state, &Action::set_study_duration(50));

        let settings = state.settings().unwrap();
        assert_eq!(settings.study_minutes, 50);
        assert_eq!(settings.short_break_minutes, 5);
        assert_eq!(settings.long_break_minutes, 10);
        assert!(!settings.deep_study);
    }

    #[test]
    fn test_set_break_durations() {
        let state = TimerState::default();
        let state = reduce_timer(state, &Action::set_break_duration(BreakKind::Short, 3));
        let state = reduce_timer(state, &Action::set_break_duration(BreakKind::Long, 20));

        let settings = state.settings().unwrap();
        assert_eq!(settings.short_break_minutes, 3);
        assert_eq!(settings.long_break_minutes, 20);
    }

    #[test]
    fn test_set_flags() {
        let state = TimerState::default();
        let state = reduce_timer(state, &Action::set_deep_study(true));
        let state = reduce_timer(state, &Action::set_auto_start(true));
        let state = reduce_timer(state, &Action::set_auto_break(true));

        let settings = state.settings().unwrap();
        assert!(settings.deep_study);
        assert!(settings.auto_start);
        assert!(settings.auto_break);

        let state = reduce_timer(state, &Action::set_deep_study(false));
        assert!(!state.settings().unwrap().deep_study);
    }

    #[test]
    fn test_clear_always_resets_to_counters() {
        let cleared = reduce_timer(TimerState::default(), &Action::clear_timer());
        assert_eq!(cleared, TimerState::Counters(SessionCounters::default()));

        // Regardless of prior state, including already-cleared state
        let cleared_again = reduce_timer(cleared, &Action::clear_timer());
        assert_eq!(
            cleared_again,
            TimerState::Counters(SessionCounters::default())
        );

        let mut settings = TimerSettings::default();
        settings.study_minutes = 90;
        let cleared = reduce_timer(TimerState::Settings(settings), &Action::clear_timer());
        assert_eq!(cleared, TimerState::Counters(SessionCounters::default()));
    }

    #[test]
    fn test_other_family_action_is_identity() {
        let state = reduce_timer(TimerState::default(), &Action::set_study_duration(42));
        let before = state.clone();

        let after = reduce_timer(state, &Action::Session(SessionAction::AddStudy(25)));
        assert_eq!(after, before);
    }

    #[test]
    fn test_settings_actions_in_counters_variant_are_identity() {
        let state = reduce_timer(TimerState::default(), &Action::clear_timer());
        let before = state.clone();

        let after = reduce_timer(state, &Action::set_study_duration(50));
        assert_eq!(after, before);
    }

    #[test]
    fn test_break_kind_parsing() {
        assert_eq!("short".parse::<BreakKind>().unwrap(), BreakKind::Short);
        assert_eq!("LONG".parse::<BreakKind>().unwrap(), BreakKind::Long);
        assert!("medium".parse::<BreakKind>().is_err());
    }

    #[test]
    fn test_state_serialization_round_trip() {
        let state = reduce_timer(TimerState::default(), &Action::set_study_duration(50));
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TimerState = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, state);
    }
}
