use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use pling_docstore::{DocStore, StoreError};

use crate::model::{Like, Post, User};

/// Upstream collection names. `post` really is singular in the source
/// database; do not "fix" it.
pub const POST_COLLECTION: &str = "post";
pub const USERS_COLLECTION: &str = "users";
pub const LIKES_COLLECTION: &str = "likes";

// ---------------------------------------------------------------------------
// Typed read ports — what the notifier depends on
// ---------------------------------------------------------------------------

#[async_trait]
pub trait PostStore: Send + Sync {
    /// Fetch a post by id. `None` means the document does not exist;
    /// a present-but-undecodable document is an error.
    async fn get_post(&self, id: &str) -> Result<Option<Post>, StoreError>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_user(&self, id: &str) -> Result<Option<User>, StoreError>;
}

// ---------------------------------------------------------------------------
// DocRecords — typed access over a raw DocStore
// ---------------------------------------------------------------------------

/// Decodes raw collection documents into the module's models.
///
/// Reads implement [`PostStore`] / [`UserStore`] for the notifier; the
/// `put_*` helpers exist for seeding and tests — production documents are
/// written by the upstream app, never by this module.
pub struct DocRecords {
    docs: Arc<dyn DocStore>,
}

impl DocRecords {
    pub fn new(docs: Arc<dyn DocStore>) -> Self {
        Self { docs }
    }

    pub fn put_post(&self, id: &str, post: &Post) -> Result<(), StoreError> {
        self.put(POST_COLLECTION, id, post)
    }

    pub fn put_user(&self, id: &str, user: &User) -> Result<(), StoreError> {
        self.put(USERS_COLLECTION, id, user)
    }

    pub fn put_like(&self, id: &str, like: &Like) -> Result<(), StoreError> {
        self.put(LIKES_COLLECTION, id, like)
    }

    fn put<T: serde::Serialize>(
        &self,
        collection: &str,
        id: &str,
        doc: &T,
    ) -> Result<(), StoreError> {
        let bytes =
            serde_json::to_vec(doc).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.docs.put(collection, id, &bytes)
    }

    fn get<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<T>, StoreError> {
        match self.docs.get(collection, id)? {
            Some(bytes) => {
                let doc = serde_json::from_slice(&bytes)
                    .map_err(|e| StoreError::Serialization(format!("{collection}/{id}: {e}")))?;
                Ok(Some(doc))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl PostStore for DocRecords {
    async fn get_post(&self, id: &str) -> Result<Option<Post>, StoreError> {
        self.get(POST_COLLECTION, id)
    }
}

#[async_trait]
impl UserStore for DocRecords {
    async fn get_user(&self, id: &str) -> Result<Option<User>, StoreError> {
        self.get(USERS_COLLECTION, id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
