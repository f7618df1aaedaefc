use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single push notification addressed to one device token.
///
/// `data` carries opaque key-value pairs the client app uses for routing
/// (e.g. which screen to open); the push service requires string values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushMessage {
    pub token: String,
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub data: HashMap<String, String>,
}

impl PushMessage {
    pub fn new(token: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            title: title.into(),
            body: body.into(),
            data: HashMap::new(),
        }
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_data() {
        let msg = PushMessage::new("tok-1", "Hello", "World")
            .with_data("type", "like")
            .with_data("postId", "p1");

        assert_eq!(msg.token, "tok-1");
        assert_eq!(msg.data.len(), 2);
        assert_eq!(msg.data["type"], "like");
    }

    #[test]
    fn empty_data_is_not_serialized() {
        let msg = PushMessage::new("tok-1", "Hello", "World");
        let json = serde_json::to_value(&msg).unwrap();
        assert!(json.get("data").is_none());
    }
}
