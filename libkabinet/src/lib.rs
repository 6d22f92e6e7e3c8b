//! Kabinet - interaction state for idea cards and study-timer reducers
//!
//! This library provides the client-side core of the kabinet application:
//! per-card interaction state with optimistic like toggling, and pure
//! reducers for study-timer settings and session counters.

pub mod actions;
pub mod backend;
pub mod card;
pub mod config;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod session;
pub mod store;
pub mod timer;
pub mod types;

// Re-export commonly used types
pub use actions::{Action, SessionAction, TimerAction};
pub use card::{CardControls, CardState};
pub use config::Config;
pub use error::{KabinetError, Result};
pub use session::{reduce_session, SessionCounters};
pub use store::StoreContext;
pub use timer::{reduce_timer, BreakKind, TimerSettings, TimerState};
pub use types::{IdeaCard, ItemId, User, UserId};
