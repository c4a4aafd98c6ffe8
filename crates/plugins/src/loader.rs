use std::collections::HashMap;

use tern_config::TernConfig;

use crate::{
    api::{Diagnostic, LoadedPlugin, PluginContext, PluginLoadOutcome},
    bundled,
};

/// Turns config into loaded plugins plus load-time diagnostics.
///
/// Loaders never fail the whole pass for a bad plugin entry; per-entry
/// problems become diagnostics. An `Err` from a loader means the pass
/// itself could not run and aborts gateway startup.
pub trait PluginLoader: Send + Sync {
    fn load(&self, cfg: &TernConfig, ctx: &PluginContext) -> anyhow::Result<PluginLoadOutcome>;
}

type PluginFactory = fn(&PluginContext, &serde_json::Value) -> LoadedPlugin;

/// Loads plugins compiled into this binary, by id, in config order.
pub struct BundledPluginLoader {
    catalog: HashMap<&'static str, PluginFactory>,
}

impl Default for BundledPluginLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl BundledPluginLoader {
    #[must_use]
    pub fn new() -> Self {
        let mut catalog: HashMap<&'static str, PluginFactory> = HashMap::new();
        catalog.insert(bundled::ping::ID, bundled::ping::build);
        catalog.insert(bundled::announce::ID, bundled::announce::build);
        Self { catalog }
    }

    /// Ids of all bundled plugins, whether enabled or not.
    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.catalog.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl PluginLoader for BundledPluginLoader {
    fn load(&self, cfg: &TernConfig, ctx: &PluginContext) -> anyhow::Result<PluginLoadOutcome> {
        let mut outcome = PluginLoadOutcome::default();

        for id in &cfg.plugins.enabled {
            match self.catalog.get(id.as_str()) {
                Some(build) => {
                    let settings = cfg
                        .plugins
                        .settings
                        .get(id)
                        .cloned()
                        .unwrap_or(serde_json::Value::Null);
                    outcome.plugins.push(build(ctx, &settings));
                    outcome.diagnostics.push(
                        Diagnostic::info("loaded plugin")
                            .with_plugin(id.clone())
                            .with_source("bundled"),
                    );
                },
                None => {
                    outcome.diagnostics.push(
                        Diagnostic::error(format!("unknown plugin id: {id}"))
                            .with_plugin(id.clone())
                            .with_source("bundled"),
                    );
                },
            }
        }

        Ok(outcome)
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::{DiagnosticLevel, SendMessageResult};

    fn context() -> PluginContext {
        PluginContext {
            dispatch: Arc::new(|_params| {
                Box::pin(async { SendMessageResult::failed("no channels in test") })
            }),
            workspace_dir: std::env::temp_dir(),
        }
    }

    fn config(enabled: &[&str]) -> TernConfig {
        serde_json::from_value(serde_json::json!({
            "plugins": { "enabled": enabled }
        }))
        .unwrap()
    }

    #[test]
    fn loads_enabled_plugins_in_config_order() {
        let outcome = BundledPluginLoader::new()
            .load(&config(&["announce", "ping"]), &context())
            .unwrap();
        let ids: Vec<_> = outcome.plugins.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["announce", "ping"]);
        assert!(
            outcome
                .diagnostics
                .iter()
                .all(|d| d.level == DiagnosticLevel::Info)
        );
    }

    #[test]
    fn unknown_plugin_id_becomes_error_diagnostic() {
        let outcome = BundledPluginLoader::new()
            .load(&config(&["ping", "ghost"]), &context())
            .unwrap();
        assert_eq!(outcome.plugins.len(), 1);
        let diag = outcome
            .diagnostics
            .iter()
            .find(|d| d.level == DiagnosticLevel::Error)
            .unwrap();
        assert!(diag.message.contains("ghost"));
        assert_eq!(diag.plugin.as_deref(), Some("ghost"));
    }

    #[test]
    fn nothing_enabled_loads_nothing() {
        let outcome = BundledPluginLoader::new()
            .load(&TernConfig::default(), &context())
            .unwrap();
        assert!(outcome.plugins.is_empty());
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn catalog_lists_bundled_ids() {
        assert_eq!(BundledPluginLoader::new().ids(), vec!["announce", "ping"]);
    }
}
