use std::collections::{BTreeSet, HashMap};

use tracing::{debug, warn};

use {
    tern_plugins::{GatewayRequestHandler, handler},
    tern_protocol::{ErrorShape, ResponseFrame, error_codes},
};

// ── Method registry ──────────────────────────────────────────────────────────

/// Layered RPC method registry: core handlers first, plugin-contributed
/// handlers second. A plugin can never replace a core method.
pub struct MethodRegistry {
    core: HashMap<String, GatewayRequestHandler>,
    plugins: HashMap<String, GatewayRequestHandler>,
}

impl Default for MethodRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MethodRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::layered(core_gateway_handlers(), HashMap::new())
    }

    /// Build a registry from explicit layers. Core wins on name collision.
    #[must_use]
    pub fn layered(
        core: HashMap<String, GatewayRequestHandler>,
        plugins: HashMap<String, GatewayRequestHandler>,
    ) -> Self {
        Self { core, plugins }
    }

    #[must_use]
    pub fn has_core(&self, method: &str) -> bool {
        self.core.contains_key(method)
    }

    #[must_use]
    pub fn has_plugin_method(&self, method: &str) -> bool {
        self.plugins.contains_key(method)
    }

    pub fn register_plugin_method(
        &mut self,
        method: impl Into<String>,
        handler: GatewayRequestHandler,
    ) {
        self.plugins.insert(method.into(), handler);
    }

    /// Sorted, deduplicated union of core and plugin method names.
    #[must_use]
    pub fn method_names(&self) -> Vec<String> {
        self.core
            .keys()
            .chain(self.plugins.keys())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Names contributed by plugins (after composition).
    #[must_use]
    pub fn plugin_method_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.plugins.keys().cloned().collect();
        names.sort();
        names
    }

    fn lookup(&self, method: &str) -> Option<&GatewayRequestHandler> {
        self.core.get(method).or_else(|| self.plugins.get(method))
    }

    pub async fn dispatch(
        &self,
        request_id: &str,
        method: &str,
        params: serde_json::Value,
    ) -> ResponseFrame {
        let Some(handler) = self.lookup(method) else {
            warn!(method, request_id, "unknown method");
            return ResponseFrame::err(
                request_id,
                ErrorShape::new(
                    error_codes::INVALID_REQUEST,
                    format!("unknown method: {method}"),
                ),
            );
        };

        debug!(method, request_id, "dispatching method");
        match handler(params).await {
            Ok(payload) => {
                debug!(method, request_id, "method ok");
                ResponseFrame::ok(request_id, payload)
            },
            Err(err) => {
                warn!(method, request_id, code = %err.code, msg = %err.message, "method error");
                ResponseFrame::err(request_id, err)
            },
        }
    }
}

/// Methods every gateway exposes regardless of loaded plugins.
#[must_use]
pub fn core_gateway_handlers() -> HashMap<String, GatewayRequestHandler> {
    let mut handlers = HashMap::new();
    handlers.insert(
        "health".to_string(),
        handler(|_params| async move {
            Ok(serde_json::json!({
                "status": "ok",
                "version": env!("CARGO_PKG_VERSION"),
            }))
        }),
    );
    handlers
}
