//! Idea card interaction state
//!
//! Ephemeral per-card UI state (menu, expansion, share dialog, the locally
//! displayed likes set) and the optimistic like toggle. The like toggle is
//! an explicit two-phase commit: [`CardState::stage_like`] computes the
//! proposed set, the backend confirms it, and only then does
//! [`CardState::commit_like`] replace the displayed state. A failed call
//! leaves the displayed set untouched.

use tracing::{debug, warn};

use crate::backend::Backend;
use crate::error::Result;
use crate::store::StoreContext;
use crate::types::{IdeaCard, ItemId, UserId};

/// Cards with ids below this value have edit and delete disabled.
///
/// Carried over verbatim from the original data set; the business intent
/// behind the cutoff is not recorded anywhere.
pub const LEGACY_SEED_ID_THRESHOLD: ItemId = 5;

/// Ephemeral interaction state for one displayed card.
#[derive(Debug, Clone, Default)]
pub struct CardState {
    menu_open: bool,
    expanded: bool,
    share_open: bool,
    likes: Vec<UserId>,
}

/// A staged likes set awaiting backend confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLike {
    proposed: Vec<UserId>,
    liked: bool,
}

impl PendingLike {
    /// The proposed likes set, as it will be displayed once committed.
    pub fn likes(&self) -> &[UserId] {
        &self.proposed
    }

    /// Whether committing would leave the card liked by the toggling user.
    pub fn would_like(&self) -> bool {
        self.liked
    }
}

/// Controls a viewer sees on a card, derived purely from the card, its
/// interaction state and the store context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardControls {
    /// Edit/delete menu button shown (viewer owns the card).
    pub menu_visible: bool,
    pub edit_enabled: bool,
    pub delete_enabled: bool,
    /// Bookmark button shown (signed-in viewer who is not the owner).
    pub bookmark_visible: bool,
    pub bookmarked: bool,
    /// Like button enabled (any signed-in viewer).
    pub like_enabled: bool,
    pub liked: bool,
    pub like_count: usize,
}

impl CardState {
    /// State for a freshly rendered card.
    ///
    /// Duplicate user ids in the incoming likes list are dropped, keeping
    /// the first occurrence, so the at-most-once invariant holds from the
    /// start.
    pub fn new(initial_likes: Vec<UserId>) -> Self {
        let mut likes = Vec::with_capacity(initial_likes.len());
        for uid in initial_likes {
            if !likes.contains(&uid) {
                likes.push(uid);
            }
        }
        Self {
            menu_open: false,
            expanded: false,
            share_open: false,
            likes,
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn share_open(&self) -> bool {
        self.share_open
    }

    /// The currently displayed likes set.
    pub fn likes(&self) -> &[UserId] {
        &self.likes
    }

    pub fn is_liked_by(&self, uid: &UserId) -> bool {
        self.likes.contains(uid)
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn toggle_share(&mut self) {
        self.share_open = !self.share_open;
    }

    /// Stage a like toggle for `uid` without touching displayed state.
    ///
    /// If `uid` is present in the displayed set it is removed from the
    /// proposal, otherwise appended. The displayed set is only replaced by
    /// the proposal through [`CardState::commit_like`].
    pub fn stage_like(&self, uid: &UserId) -> PendingLike {
        if self.likes.contains(uid) {
            PendingLike {
                proposed: self.likes.iter().filter(|u| *u != uid).cloned().collect(),
                liked: false,
            }
        } else {
            let mut proposed = self.likes.clone();
            proposed.push(uid.clone());
            PendingLike {
                proposed,
                liked: true,
            }
        }
    }

    /// Commit a confirmed proposal as the new displayed likes set.
    pub fn commit_like(&mut self, pending: PendingLike) {
        self.likes = pending.proposed;
    }

    /// Toggle `uid`'s like on `item`: stage locally, confirm with the
    /// backend, commit on success.
    ///
    /// Returns whether the card is liked by `uid` after the toggle.
    ///
    /// # Errors
    ///
    /// Propagates the backend error; the displayed likes set is left
    /// unchanged in that case. Callers that want the original UI behavior
    /// simply ignore the error.
    pub async fn toggle_like(
        &mut self,
        item: ItemId,
        uid: &UserId,
        backend: &dyn Backend,
    ) -> Result<bool> {
        let pending = self.stage_like(uid);
        debug!(
            item,
            backend = backend.name(),
            proposed = pending.proposed.len(),
            "sending like toggle"
        );

        match backend.toggle_like(item, pending.likes()).await {
            Ok(()) => {
                let liked = pending.would_like();
                self.commit_like(pending);
                Ok(liked)
            }
            Err(e) => {
                warn!(item, error = %e, "like toggle failed, keeping displayed state");
                Err(e)
            }
        }
    }

    /// Toggle the viewer's bookmark for `item`.
    ///
    /// Delegates entirely to the backend; the bookmark set lives in the
    /// app-wide store, so there is no local state to update here.
    pub async fn toggle_bookmark(&self, item: ItemId, backend: &dyn Backend) -> Result<()> {
        debug!(item, backend = backend.name(), "sending bookmark toggle");
        backend.toggle_bookmark(item).await
    }

    /// Derive the visible/enabled controls for `card` as seen through
    /// `ctx`. Pure; safe to call on every render.
    pub fn controls(&self, card: &IdeaCard, ctx: &StoreContext) -> CardControls {
        let viewer = ctx.current_uid();
        let is_owner = viewer == Some(&card.owner_id);
        let editable = is_owner && card.id >= LEGACY_SEED_ID_THRESHOLD;

        CardControls {
            menu_visible: is_owner,
            edit_enabled: editable,
            delete_enabled: editable,
            bookmark_visible: viewer.is_some() && !is_owner,
            bookmarked: ctx.is_bookmarked(card.id),
            like_enabled: viewer.is_some(),
            liked: viewer.map(|uid| self.is_liked_by(uid)).unwrap_or(false),
            like_count: self.likes.len(),
        }
    }
}

/// Shareable URL of a card's detail page.
pub fn share_url(origin: &str, item: ItemId) -> String {
    format!("{}{}", origin.trim_end_matches('/'), crate::navigation::Route::Post(item).path())
}
