/// Config schema types (server, channels, plugins).
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TernConfig {
    pub server: ServerConfig,
    pub channels: ChannelsConfig,
    pub plugins: PluginsConfig,
}

/// Gateway server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to. Defaults to "127.0.0.1".
    pub bind: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".into(),
            port: 0,
        }
    }
}

/// Channel type → channel settings, e.g. `[channels.telegram]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelsConfig {
    pub entries: HashMap<String, ChannelConfig>,
}

impl ChannelsConfig {
    #[must_use]
    pub fn get(&self, channel: &str) -> Option<&ChannelConfig> {
        self.entries.get(channel)
    }
}

/// Settings for one channel type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    pub enabled: bool,
    /// Account used when a request names none and several are configured.
    pub default_account: Option<String>,
    /// Account id → account settings, e.g. `[channels.telegram.accounts.bot1]`.
    pub accounts: HashMap<String, AccountConfig>,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_account: None,
            accounts: HashMap::new(),
        }
    }
}

/// Settings for one channel account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    /// Provider credential; opaque to the gateway core.
    pub token: Option<String>,
    /// Destination used by implicit-mode resolution when a send names none.
    pub default_to: Option<String>,
}

/// Plugin configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginsConfig {
    /// Bundled plugin ids to load, in load order.
    pub enabled: Vec<String>,
    /// Per-plugin settings, keyed by plugin id.
    pub settings: HashMap<String, serde_json::Value>,
}
