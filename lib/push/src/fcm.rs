use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::PushError;
use crate::message::PushMessage;
use crate::sender::PushSender;

const DEFAULT_ENDPOINT: &str = "https://fcm.googleapis.com";

/// FcmSender delivers messages through the FCM HTTP v1 API.
///
/// Authentication uses a pre-minted OAuth bearer token supplied by the
/// operator; token minting/refresh is out of scope here. The endpoint can
/// be overridden to point sends at a proxy or a test server.
pub struct FcmSender {
    client: reqwest::Client,
    project_id: String,
    service_token: String,
    endpoint: String,
}

impl FcmSender {
    pub fn new(project_id: impl Into<String>, service_token: impl Into<String>) -> Self {
        let project_id = project_id.into();
        debug!(project_id = %project_id, "fcm sender initialized");
        Self {
            client: reqwest::Client::new(),
            project_id,
            service_token: service_token.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn send_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/messages:send",
            self.endpoint, self.project_id
        )
    }

    /// Build the HTTP v1 request body for a message.
    fn v1_body(msg: &PushMessage) -> Value {
        let mut message = json!({
            "token": msg.token,
            "notification": {
                "title": msg.title,
                "body": msg.body,
            },
        });
        if !msg.data.is_empty() {
            message["data"] = json!(msg.data);
        }
        json!({ "message": message })
    }
}

#[async_trait]
impl PushSender for FcmSender {
    async fn send(&self, msg: &PushMessage) -> Result<(), PushError> {
        let resp = self
            .client
            .post(self.send_url())
            .bearer_auth(&self.service_token)
            .json(&Self::v1_body(msg))
            .send()
            .await
            .map_err(|e| PushError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PushError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
