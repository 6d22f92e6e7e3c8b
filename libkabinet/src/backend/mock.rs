//! Mock backend implementation for testing
//!
//! A configurable backend that can simulate successes, failures and
//! latency, and records every call for verification. It is available in
//! regular builds (not just tests) so integration tests can drive the card
//! interaction logic without a real persistence layer.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::error::{BackendError, Result};
use crate::types::{ItemId, UserId};

use super::Backend;

/// Configuration for mock backend behavior
#[derive(Debug, Clone)]
pub struct MockBackendConfig {
    /// Backend name (e.g. "mock", "mock-firestore")
    pub name: String,

    /// Whether like toggles should succeed
    pub like_succeeds: bool,

    /// Whether bookmark toggles should succeed
    pub bookmark_succeeds: bool,

    /// Error message returned on like failure
    pub like_error: Option<String>,

    /// Error message returned on bookmark failure
    pub bookmark_error: Option<String>,

    /// Delay before completing operations (simulates network latency)
    pub delay: Duration,

    /// Number of times toggle_like has been called
    pub like_call_count: Arc<Mutex<usize>>,

    /// Number of times toggle_bookmark has been called
    pub bookmark_call_count: Arc<Mutex<usize>>,

    /// Likes payloads that were sent, per call (for verification)
    pub sent_likes: Arc<Mutex<Vec<(ItemId, Vec<UserId>)>>>,

    /// Items whose bookmark was toggled, per call (for verification)
    pub toggled_bookmarks: Arc<Mutex<Vec<ItemId>>>,
}

impl Default for MockBackendConfig {
    fn default() -> Self {
        Self {
            name: "mock".to_string(),
            like_succeeds: true,
            bookmark_succeeds: true,
            like_error: None,
            bookmark_error: None,
            delay: Duration::from_millis(0),
            like_call_count: Arc::new(Mutex::new(0)),
            bookmark_call_count: Arc::new(Mutex::new(0)),
            sent_likes: Arc::new(Mutex::new(Vec::new())),
            toggled_bookmarks: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Mock backend for testing
pub struct MockBackend {
    config: MockBackendConfig,
}

impl MockBackend {
    /// Create a new mock backend with the given configuration
    pub fn new(config: MockBackendConfig) -> Self {
        Self { config }
    }

    /// Create a mock backend that always succeeds
    pub fn success(name: &str) -> Self {
        Self::new(MockBackendConfig {
            name: name.to_string(),
            ..Default::default()
        })
    }

    /// Create a mock backend whose like toggles fail
    pub fn like_failure(name: &str, error: &str) -> Self {
        Self::new(MockBackendConfig {
            name: name.to_string(),
            like_succeeds: false,
            like_error: Some(error.to_string()),
            ..Default::default()
        })
    }

    /// Create a mock backend whose bookmark toggles fail
    pub fn bookmark_failure(name: &str, error: &str) -> Self {
        Self::new(MockBackendConfig {
            name: name.to_string(),
            bookmark_succeeds: false,
            bookmark_error: Some(error.to_string()),
            ..Default::default()
        })
    }

    /// Create a mock backend with simulated latency
    pub fn with_delay(name: &str, delay: Duration) -> Self {
        Self::new(MockBackendConfig {
            name: name.to_string(),
            delay,
            ..Default::default()
        })
    }

    /// Get the number of times toggle_like was called
    pub fn like_call_count(&self) -> usize {
        *self.config.like_call_count.lock().unwrap()
    }

    /// Get the number of times toggle_bookmark was called
    pub fn bookmark_call_count(&self) -> usize {
        *self.config.bookmark_call_count.lock().unwrap()
    }

    /// Get every likes payload that was sent
    pub fn sent_likes(&self) -> Vec<(ItemId, Vec<UserId>)> {
        self.config.sent_likes.lock().unwrap().clone()
    }

    /// Get every item whose bookmark was toggled
    pub fn toggled_bookmarks(&self) -> Vec<ItemId> {
        self.config.toggled_bookmarks.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn toggle_like(&self, item: ItemId, likes: &[UserId]) -> Result<()> {
        *self.config.like_call_count.lock().unwrap() += 1;

        if !self.config.delay.is_zero() {
            sleep(self.config.delay).await;
        }

        if self.config.like_succeeds {
            self.config
                .sent_likes
                .lock()
                .unwrap()
                .push((item, likes.to_vec()));
            Ok(())
        } else {
            let error_msg = self
                .config
                .like_error
                .clone()
                .unwrap_or_else(|| "Mock like toggle failed".to_string());
            Err(BackendError::Rejected(error_msg).into())
        }
    }

    async fn toggle_bookmark(&self, item: ItemId) -> Result<()> {
        *self.config.bookmark_call_count.lock().unwrap() += 1;

        if !self.config.delay.is_zero() {
            sleep(self.config.delay).await;
        }

        if self.config.bookmark_succeeds {
            self.config.toggled_bookmarks.lock().unwrap().push(item);
            Ok(())
        } else {
            let error_msg = self
                .config
                .bookmark_error
                .clone()
                .unwrap_or_else(|| "Mock bookmark toggle failed".to_string());
            Err(BackendError::Rejected(error_msg).into())
        }
    }

    fn name(&self) -> &str {
        &self.config.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_success() {
        let backend = MockBackend::success("test");

        assert_eq!(backend.name(), "test");

        backend
            .toggle_like(3, &["viewer-1".to_string()])
            .await
            .unwrap();
        assert_eq!(backend.like_call_count(), 1);

        let sent = backend.sent_likes();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], (3, vec!["viewer-1".to_string()]));

        backend.toggle_bookmark(3).await.unwrap();
        assert_eq!(backend.bookmark_call_count(), 1);
        assert_eq!(backend.toggled_bookmarks(), vec![3]);
    }

    #[tokio::test]
    async fn test_mock_like_failure() {
        let backend = MockBackend::like_failure("test", "permission denied");

        let result = backend.toggle_like(3, &[]).await;
        assert!(result.is_err());
        assert_eq!(backend.like_call_count(), 1);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("permission denied"));

        // Nothing recorded as sent on failure
        assert!(backend.sent_likes().is_empty());
    }

    #[tokio::test]
    async fn test_mock_bookmark_failure() {
        let backend = MockBackend::bookmark_failure("test", "quota exceeded");

        let result = backend.toggle_bookmark(9).await;
        assert!(result.is_err());
        assert_eq!(backend.bookmark_call_count(), 1);
        assert!(backend.toggled_bookmarks().is_empty());
    }

    #[tokio::test]
    async fn test_mock_with_delay() {
        let backend = MockBackend::with_delay("test", Duration::from_millis(50));

        let start = std::time::Instant::now();
        backend.toggle_like(1, &[]).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
