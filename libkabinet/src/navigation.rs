//! Navigation collaborator
//!
//! The card does not route; it asks an opaque [`Navigator`] to push one of
//! the known [`Route`]s. The host application owns the actual router.

use crate::types::{ItemId, UserId};

/// Destinations a card can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Detail page of a post.
    Post(ItemId),
    /// Edit page of a post.
    Edit(ItemId),
    /// Public profile of a user.
    User(UserId),
}

impl Route {
    /// Path of this route within the host application.
    pub fn path(&self) -> String {
        match self {
            Route::Post(id) => format!("/kabinet-post/{}", id),
            Route::Edit(id) => format!("/kabinet-edit/{}", id),
            Route::User(uid) => format!("/kabinet-user/{}", uid),
        }
    }
}

/// Opaque router owned by the host application.
pub trait Navigator {
    fn push(&mut self, route: Route);
}

/// Navigator that records pushed routes, for tests.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub pushed: Vec<Route>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&mut self, route: Route) {
        self.pushed.push(route);
    }
}

/// Navigate to a card owner's profile.
///
/// Pushes nothing when the owner's profile is already the page being
/// viewed (`shown_uid`), matching the publisher-link behavior.
pub fn push_owner_profile(
    navigator: &mut dyn Navigator,
    owner_id: &UserId,
    shown_uid: Option<&UserId>,
) {
    if shown_uid != Some(owner_id) {
        navigator.push(Route::User(owner_id.clone()));
    }
}
