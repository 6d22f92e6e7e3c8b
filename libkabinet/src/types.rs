//! Core types for Kabinet

use serde::{Deserialize, Serialize};

/// Identifier of an idea card. Numeric, assigned by the persistence layer.
pub type ItemId = i64;

/// Identifier of a user account, issued by the external identity provider.
pub type UserId = String;

/// The signed-in viewer, as read from the app-wide store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uid: UserId,
    pub display_name: String,
}

/// One entry of an idea card's checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistEntry {
    pub label: String,
    pub done: bool,
}

/// A displayed idea card.
///
/// Cards are created, edited and deleted by their owner through the
/// backend; locally only the `likes` field is ever mutated, and only
/// optimistically through [`crate::CardState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaCard {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub owner_id: UserId,
    pub owner_name: String,
    /// Unix timestamp (seconds).
    pub created_at: i64,
    /// Hidden from other users' feeds when set.
    pub private: bool,
    pub likes: Vec<UserId>,
    pub keywords: Vec<String>,
    pub primary_keyword: Option<String>,
    pub checklist: Vec<ChecklistEntry>,
}

impl IdeaCard {
    /// Create a card with the given id, owner and title; everything else
    /// starts empty.
    pub fn new(id: ItemId, owner_id: UserId, owner_name: String, title: String) -> Self {
        Self {
            id,
            title,
            description: String::new(),
            image_url: None,
            owner_id,
            owner_name,
            created_at: chrono::Utc::now().timestamp(),
            private: false,
            likes: Vec::new(),
            keywords: Vec::new(),
            primary_keyword: None,
            checklist: Vec::new(),
        }
    }
}
