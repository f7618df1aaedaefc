use std::sync::Arc;

use thiserror::Error;

use pling_docstore::StoreError;
use pling_push::{PushError, PushMessage, PushSender};

use crate::model::{LikeCreated, User};
use crate::store::{PostStore, UserStore};

/// Title of every like notification.
const TITLE: &str = "New Like!";
/// Display name when the liker has no username set.
const FALLBACK_NAME: &str = "Someone";

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Terminal result of handling one like-creation event.
///
/// A skip is a normal outcome, not an error: the data simply did not call
/// for a notification by the time we looked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A push was dispatched to the post owner.
    Sent { owner_id: String },
    /// Expected early exit; nothing was sent.
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    PostNotFound,
    LikerNotFound,
    OwnerNotFound,
    NoToken,
    SelfLike,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PostNotFound => "post not found",
            Self::LikerNotFound => "liker not found",
            Self::OwnerNotFound => "owner not found",
            Self::NoToken => "no fcm token",
            Self::SelfLike => "liker and owner are the same user",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unexpected fault while handling an event. The hook logs these and still
/// acknowledges the event; nothing retries.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("store fault: {0}")]
    Store(#[from] StoreError),
    #[error("push fault: {0}")]
    Push(#[from] PushError),
}

// ---------------------------------------------------------------------------
// LikeNotifier
// ---------------------------------------------------------------------------

/// Sends one push notification per like-creation event.
///
/// Holds its collaborators as trait objects so tests (and alternative
/// backends) can substitute them. The notifier itself never logs and never
/// writes to the store; callers decide what to do with the outcome.
pub struct LikeNotifier {
    posts: Arc<dyn PostStore>,
    users: Arc<dyn UserStore>,
    sender: Arc<dyn PushSender>,
}

impl LikeNotifier {
    pub fn new(
        posts: Arc<dyn PostStore>,
        users: Arc<dyn UserStore>,
        sender: Arc<dyn PushSender>,
    ) -> Self {
        Self {
            posts,
            users,
            sender,
        }
    }

    /// Handle one event: look up post, liker and owner, then notify the
    /// owner. At most one send per call; redelivering the same event sends
    /// again.
    pub async fn handle(&self, event: &LikeCreated) -> Result<Outcome, NotifyError> {
        let Some(post) = self.posts.get_post(&event.post_id).await? else {
            return Ok(Outcome::Skipped(SkipReason::PostNotFound));
        };

        let Some(liker) = self.users.get_user(&event.user_id).await? else {
            return Ok(Outcome::Skipped(SkipReason::LikerNotFound));
        };

        let Some(owner) = self.users.get_user(&post.user_id).await? else {
            return Ok(Outcome::Skipped(SkipReason::OwnerNotFound));
        };

        let Some(token) = owner.fcm_token.as_deref() else {
            return Ok(Outcome::Skipped(SkipReason::NoToken));
        };

        // Self-like: the owner liking their own post, or two accounts
        // registered to the same device token.
        if event.user_id == post.user_id || liker.fcm_token.as_deref() == Some(token) {
            return Ok(Outcome::Skipped(SkipReason::SelfLike));
        }

        self.sender
            .send(&like_message(token, &liker, &event.post_id))
            .await?;

        Ok(Outcome::Sent {
            owner_id: post.user_id,
        })
    }
}

/// Build the push message for a like. An empty username falls back the same
/// way a missing one does.
fn like_message(token: &str, liker: &User, post_id: &str) -> PushMessage {
    let username = liker
        .username
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_NAME);

    PushMessage::new(token, TITLE, format!("{username} liked your post!"))
        .with_data("postId", post_id)
        .with_data("type", "like")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::model::Post;

    #[derive(Default)]
    struct FakeDocs {
        posts: HashMap<String, Post>,
        users: HashMap<String, User>,
        fail: bool,
    }

    impl FakeDocs {
        fn post(mut self, id: &str, owner: &str) -> Self {
            self.posts.insert(
                id.into(),
                Post {
                    user_id: owner.into(),
                },
            );
            self
        }

        fn user(mut self, id: &str, username: Option<&str>, token: Option<&str>) -> Self {
            self.users.insert(
                id.into(),
                User {
                    username: username.map(Into::into),
                    fcm_token: token.map(Into::into),
                },
            );
            self
        }
    }

    #[async_trait]
    impl PostStore for FakeDocs {
        async fn get_post(&self, id: &str) -> Result<Option<Post>, StoreError> {
            if self.fail {
                return Err(StoreError::Backend("injected".into()));
            }
            Ok(self.posts.get(id).cloned())
        }
    }

    #[async_trait]
    impl UserStore for FakeDocs {
        async fn get_user(&self, id: &str) -> Result<Option<User>, StoreError> {
            if self.fail {
                return Err(StoreError::Backend("injected".into()));
            }
            Ok(self.users.get(id).cloned())
        }
    }

    #[derive(Default)]
    struct RecordingSender {
        sent: Mutex<Vec<PushMessage>>,
        reject: bool,
    }

    #[async_trait]
    impl PushSender for RecordingSender {
        async fn send(&self, msg: &PushMessage) -> Result<(), PushError> {
            if self.reject {
                return Err(PushError::Rejected {
                    status: 404,
                    body: "UNREGISTERED".into(),
                });
            }
            self.sent.lock().unwrap().push(msg.clone());
            Ok(())
        }
    }

    fn notifier(docs: FakeDocs, sender: RecordingSender) -> (Arc<RecordingSender>, LikeNotifier) {
        let docs = Arc::new(docs);
        let sender = Arc::new(sender);
        let notifier = LikeNotifier::new(docs.clone(), docs, sender.clone());
        (sender, notifier)
    }

    /// p1 owned by "bob" (owner), liked by "alice" (liker), both with tokens.
    fn seeded() -> FakeDocs {
        FakeDocs::default()
            .post("p1", "owner")
            .user("liker", Some("alice"), Some("tok-liker"))
            .user("owner", Some("bob"), Some("tok-owner"))
    }

    fn event() -> LikeCreated {
        LikeCreated::new("l1", "p1", "liker")
    }

    #[tokio::test]
    async fn sends_to_owner_with_exact_message() {
        let (sender, notifier) = notifier(seeded(), RecordingSender::default());

        let outcome = notifier.handle(&event()).await.unwrap();
        assert_eq!(
            outcome,
            Outcome::Sent {
                owner_id: "owner".into()
            }
        );

        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let msg = &sent[0];
        assert_eq!(msg.token, "tok-owner");
        assert_eq!(msg.title, "New Like!");
        assert_eq!(msg.body, "alice liked your post!");
        assert_eq!(msg.data["postId"], "p1");
        assert_eq!(msg.data["type"], "like");
        assert_eq!(msg.data.len(), 2);
    }

    #[tokio::test]
    async fn liker_without_token_still_triggers_send() {
        let docs = seeded().user("liker", Some("alice"), None);
        let (sender, notifier) = notifier(docs, RecordingSender::default());

        let outcome = notifier.handle(&event()).await.unwrap();
        assert!(matches!(outcome, Outcome::Sent { .. }));
        assert_eq!(sender.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_username_falls_back_to_someone() {
        let docs = seeded().user("liker", None, Some("tok-liker"));
        let (sender, notifier) = notifier(docs, RecordingSender::default());

        notifier.handle(&event()).await.unwrap();
        assert_eq!(sender.sent.lock().unwrap()[0].body, "Someone liked your post!");
    }

    #[tokio::test]
    async fn empty_username_falls_back_to_someone() {
        let docs = seeded().user("liker", Some(""), Some("tok-liker"));
        let (sender, notifier) = notifier(docs, RecordingSender::default());

        notifier.handle(&event()).await.unwrap();
        assert_eq!(sender.sent.lock().unwrap()[0].body, "Someone liked your post!");
    }

    #[tokio::test]
    async fn skips_when_post_missing() {
        let (sender, notifier) = notifier(seeded(), RecordingSender::default());

        let outcome = notifier
            .handle(&LikeCreated::new("l1", "no-such-post", "liker"))
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Skipped(SkipReason::PostNotFound));
        assert!(sender.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn skips_when_liker_missing() {
        let (sender, notifier) = notifier(seeded(), RecordingSender::default());

        let outcome = notifier
            .handle(&LikeCreated::new("l1", "p1", "ghost"))
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Skipped(SkipReason::LikerNotFound));
        assert!(sender.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn skips_when_owner_missing() {
        let docs = FakeDocs::default()
            .post("p1", "deleted-owner")
            .user("liker", Some("alice"), Some("tok-liker"));
        let (sender, notifier) = notifier(docs, RecordingSender::default());

        let outcome = notifier.handle(&event()).await.unwrap();
        assert_eq!(outcome, Outcome::Skipped(SkipReason::OwnerNotFound));
        assert!(sender.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn skips_when_owner_has_no_token() {
        let docs = seeded().user("owner", Some("bob"), None);
        let (sender, notifier) = notifier(docs, RecordingSender::default());

        let outcome = notifier.handle(&event()).await.unwrap();
        assert_eq!(outcome, Outcome::Skipped(SkipReason::NoToken));
        assert!(sender.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn skips_own_like_even_without_liker_token() {
        // Owner likes their own post from a fresh install (no token stored
        // on the liker read); the id check must still suppress it.
        let docs = FakeDocs::default()
            .post("p1", "owner")
            .user("owner", Some("bob"), Some("tok-owner"));
        let (sender, notifier) = notifier(docs, RecordingSender::default());

        let outcome = notifier
            .handle(&LikeCreated::new("l1", "p1", "owner"))
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Skipped(SkipReason::SelfLike));
        assert!(sender.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn skips_two_accounts_sharing_one_device() {
        let docs = seeded()
            .user("liker", Some("alice"), Some("shared-tok"))
            .user("owner", Some("bob"), Some("shared-tok"));
        let (sender, notifier) = notifier(docs, RecordingSender::default());

        let outcome = notifier.handle(&event()).await.unwrap();
        assert_eq!(outcome, Outcome::Skipped(SkipReason::SelfLike));
        assert!(sender.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn own_like_with_no_token_reports_no_token() {
        // Token presence is checked before self-like.
        let docs = FakeDocs::default()
            .post("p1", "owner")
            .user("owner", Some("bob"), None);
        let (_, notifier) = notifier(docs, RecordingSender::default());

        let outcome = notifier
            .handle(&LikeCreated::new("l1", "p1", "owner"))
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Skipped(SkipReason::NoToken));
    }

    #[tokio::test]
    async fn store_fault_propagates() {
        let mut docs = seeded();
        docs.fail = true;
        let (sender, notifier) = notifier(docs, RecordingSender::default());

        let err = notifier.handle(&event()).await.unwrap_err();
        assert!(matches!(err, NotifyError::Store(_)));
        assert!(sender.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn push_fault_propagates() {
        let sender = RecordingSender {
            reject: true,
            ..Default::default()
        };
        let (_, notifier) = notifier(seeded(), sender);

        let err = notifier.handle(&event()).await.unwrap_err();
        assert!(matches!(err, NotifyError::Push(_)));
    }

    #[tokio::test]
    async fn redelivery_sends_again() {
        let (sender, notifier) = notifier(seeded(), RecordingSender::default());

        notifier.handle(&event()).await.unwrap();
        notifier.handle(&event()).await.unwrap();
        assert_eq!(sender.sent.lock().unwrap().len(), 2);
    }
}
