use async_trait::async_trait;

use crate::error::PushError;
use crate::message::PushMessage;

/// Delivery backend for push notifications.
///
/// Implementations must treat `send` as fire-and-forget from the caller's
/// point of view: a returned error means this one message was not delivered,
/// never that the sender is unusable.
#[async_trait]
pub trait PushSender: Send + Sync {
    async fn send(&self, msg: &PushMessage) -> Result<(), PushError>;
}
