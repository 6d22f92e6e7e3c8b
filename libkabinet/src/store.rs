//! Read view of the app-wide store
//!
//! The card never reaches into a global singleton; the pieces of app-wide
//! state it needs (the signed-in user and the bookmark set) are passed in
//! as an explicit [`StoreContext`].

use std::collections::HashSet;

use crate::types::{ItemId, User, UserId};

/// Snapshot of the app-wide state a card reads from.
///
/// Read-only from the card's perspective; the bookmark set is mutated only
/// by the host application after a successful
/// [`crate::backend::Backend::toggle_bookmark`].
#[derive(Debug, Clone, Default)]
pub struct StoreContext {
    /// The signed-in viewer, if any.
    pub user: Option<User>,
    /// Item ids the viewer has bookmarked.
    pub bookmarks: HashSet<ItemId>,
}

impl StoreContext {
    /// Context with a signed-in viewer and no bookmarks.
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            bookmarks: HashSet::new(),
        }
    }

    /// Context with no viewer (logged-out browsing).
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Id of the signed-in viewer, if any.
    pub fn current_uid(&self) -> Option<&UserId> {
        self.user.as_ref().map(|u| &u.uid)
    }

    pub fn is_bookmarked(&self, item: ItemId) -> bool {
        self.bookmarks.contains(&item)
    }
}
