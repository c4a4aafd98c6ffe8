//! `announce` plugin: one RPC method that sends a (optionally prefixed)
//! message out through a channel via the dispatch function.

use std::collections::HashMap;

use tern_protocol::{ErrorShape, error_codes};

use crate::api::{LoadedPlugin, PluginContext, SendMessageParams, handler};

pub const ID: &str = "announce";

pub fn build(ctx: &PluginContext, settings: &serde_json::Value) -> LoadedPlugin {
    let prefix = settings
        .get("prefix")
        .and_then(|v| v.as_str())
        .map(str::to_string);
    let dispatch = ctx.dispatch.clone();

    let mut methods = HashMap::new();
    methods.insert(
        "announce".to_string(),
        handler(move |params| {
            let dispatch = dispatch.clone();
            let prefix = prefix.clone();
            async move {
                let mut req: SendMessageParams = serde_json::from_value(params).map_err(|e| {
                    ErrorShape::new(
                        error_codes::INVALID_REQUEST,
                        format!("invalid announce params: {e}"),
                    )
                })?;
                if let Some(prefix) = prefix {
                    req.message = format!("{prefix} {}", req.message);
                }
                let result = dispatch(req).await;
                serde_json::to_value(&result)
                    .map_err(|e| ErrorShape::new(error_codes::UNAVAILABLE, e.to_string()))
            }
        }),
    );

    LoadedPlugin {
        id: ID.to_string(),
        methods,
    }
}
