use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Stored documents — owned by the upstream app, read-only here
// ---------------------------------------------------------------------------

/// A like record from the `likes` collection.
///
/// Written by the app when a user taps like; this module only ever reads
/// them. Documents may carry more fields than these — they pass through
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    /// The liked post.
    pub post_id: String,
    /// The user who liked it.
    pub user_id: String,
}

/// A post from the `post` collection (the upstream collection name is
/// singular). Only the owner reference matters to this module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// The post's author — the notification recipient.
    pub user_id: String,
}

/// A user profile from the `users` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Device registration token. Absent when the user never granted
    /// notification permission or logged out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fcm_token: Option<String>,
}

// ---------------------------------------------------------------------------
// LikeCreated — the event delivered to the hook
// ---------------------------------------------------------------------------

/// Creation event for a like record: the new document's id plus its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeCreated {
    pub like_id: String,
    pub post_id: String,
    pub user_id: String,
}

impl LikeCreated {
    pub fn new(
        like_id: impl Into<String>,
        post_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            like_id: like_id.into(),
            post_id: post_id.into(),
            user_id: user_id.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
