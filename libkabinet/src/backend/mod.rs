//! Backend abstraction for the two side-effecting card interactions
//!
//! The card component never talks to the network itself; it hands the
//! proposed change to a [`Backend`] and commits local state only when the
//! call succeeds. Real implementations live in the host application; this
//! crate ships a configurable [`mock::MockBackend`] for tests.
//!
//! # Examples
//!
//! ```no_run
//! use libkabinet::backend::{mock::MockBackend, Backend};
//!
//! # async fn example() -> libkabinet::error::Result<()> {
//! let backend = MockBackend::success("mock");
//! backend.toggle_like(7, &["viewer-1".to_string()]).await?;
//! backend.toggle_bookmark(7).await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ItemId, UserId};

pub mod mock;

/// External collaborator persisting like and bookmark toggles.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Persist the full likes set resulting from a toggle.
    ///
    /// The caller computes the new set locally and sends it whole; the
    /// backend replaces the stored set for `item`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::BackendError`] wrapped in `KabinetError` if
    /// the request is rejected or fails in transit. On error the caller
    /// must keep its previously displayed state.
    async fn toggle_like(&self, item: ItemId, likes: &[UserId]) -> Result<()>;

    /// Toggle the current user's bookmark for `item`.
    ///
    /// The bookmark set itself is owned by the app-wide store; no return
    /// value is consumed beyond success or failure.
    async fn toggle_bookmark(&self, item: ItemId) -> Result<()>;

    /// Lowercase identifier of the backend (e.g. "firestore", "mock").
    fn name(&self) -> &str;
}
