use async_trait::async_trait;
use tracing::info;

use crate::error::PushError;
use crate::message::PushMessage;
use crate::sender::PushSender;

/// LogSender writes the would-be notification to the log instead of
/// delivering it. The default backend for local development.
pub struct LogSender;

#[async_trait]
impl PushSender for LogSender {
    async fn send(&self, msg: &PushMessage) -> Result<(), PushError> {
        info!(
            token = %msg.token,
            title = %msg.title,
            body = %msg.body,
            "push (log mode, not delivered)"
        );
        Ok(())
    }
}
