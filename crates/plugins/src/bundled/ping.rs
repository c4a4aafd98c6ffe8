//! `ping` plugin: a liveness probe method for smoke-testing the RPC path.

use std::collections::HashMap;

use crate::api::{LoadedPlugin, PluginContext, handler};

pub const ID: &str = "ping";

pub fn build(_ctx: &PluginContext, _settings: &serde_json::Value) -> LoadedPlugin {
    let mut methods = HashMap::new();
    methods.insert(
        "ping".to_string(),
        handler(|_params| async move { Ok(serde_json::json!({ "pong": true })) }),
    );
    LoadedPlugin {
        id: ID.to_string(),
        methods,
    }
}
