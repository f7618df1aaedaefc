//! Server configuration.
//!
//! A context name resolves to `/etc/pling/<name>.toml`; a path containing
//! `/` or `.` is used directly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Server configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSection,

    pub storage: StorageSection,

    #[serde(default)]
    pub push: PushSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    /// Listen address. Overridable with `--listen`.
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSection {
    /// Directory for the embedded document store.
    pub data_dir: String,
}

/// Push delivery backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PushMode {
    /// Log sends instead of delivering them.
    #[default]
    Log,
    /// Deliver through the FCM HTTP v1 API.
    Fcm,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PushSection {
    #[serde(default)]
    pub mode: PushMode,

    /// FCM project id (required when mode = "fcm").
    #[serde(default)]
    pub project_id: String,

    /// OAuth bearer token for the FCM service account (required when
    /// mode = "fcm").
    #[serde(default)]
    pub service_token: String,

    /// Override the FCM endpoint (proxies, emulators). Empty = default.
    #[serde(default)]
    pub endpoint: String,
}

impl ServerConfig {
    /// Resolve a context name or path to a config file path.
    pub fn resolve_path(name_or_path: &str) -> PathBuf {
        if name_or_path.contains('/') || name_or_path.contains('.') {
            PathBuf::from(name_or_path)
        } else {
            PathBuf::from(format!("/etc/pling/{}.toml", name_or_path))
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Verify server configuration is ready for use.
pub fn verify_config(config: &ServerConfig) -> anyhow::Result<()> {
    if config.storage.data_dir.is_empty() {
        anyhow::bail!("Storage data_dir is empty in configuration.");
    }
    if config.push.mode == PushMode::Fcm {
        if config.push.project_id.is_empty() {
            anyhow::bail!("Push mode is \"fcm\" but project_id is empty in configuration.");
        }
        if config.push.service_token.is_empty() {
            anyhow::bail!("Push mode is \"fcm\" but service_token is empty in configuration.");
        }
    }
    Ok(())
}
