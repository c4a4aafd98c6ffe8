//! Plugin composition and the outbound dispatch adapter.
//!
//! `build_dispatch` produces the send function handed to plugins;
//! `compose_plugins` loads plugins and merges their RPC methods into the
//! gateway method registry.

use std::sync::Arc;

use tracing::debug;

use {
    tern_channels::{DeliveryRequest, PayloadDelivery},
    tern_common::{DeliveryOutcome, OutboundPayload},
    tern_config::TernConfig,
    tern_plugins::{
        Diagnostic, DiagnosticLevel, DispatchFn, GatewayLogger, PluginContext, PluginLoader,
        SendMessageParams, SendMessageResult,
    },
    tern_routing::{OutboundRequest, OutboundResolver, ResolveMode},
};

use crate::methods::MethodRegistry;

// ── Dispatch adapter ─────────────────────────────────────────────────────────

/// Config source invoked on every dispatch, so config edits apply to the
/// next send without a restart.
pub type ConfigSource = Arc<dyn Fn() -> TernConfig + Send + Sync>;

/// Collaborators the dispatch adapter closes over.
#[derive(Clone)]
pub struct DispatchDeps {
    pub load_config: ConfigSource,
    pub resolver: Arc<dyn OutboundResolver>,
    pub delivery: Arc<dyn PayloadDelivery>,
}

impl DispatchDeps {
    /// Production wiring: discovered config, config-backed resolution,
    /// delivery over the channel registry.
    #[must_use]
    pub fn standard(delivery: Arc<dyn PayloadDelivery>) -> Self {
        Self {
            load_config: Arc::new(tern_config::discover_and_load),
            resolver: Arc::new(tern_routing::ConfigResolver),
            delivery,
        }
    }
}

/// Build the outbound send function handed to plugins.
///
/// The returned function never fails outright: resolution and delivery
/// errors come back as `ok: false` results so a plugin cannot be crashed
/// by a misconfigured channel.
pub fn build_dispatch(deps: DispatchDeps) -> DispatchFn {
    Arc::new(move |params| {
        let deps = deps.clone();
        Box::pin(async move { dispatch_message(&deps, params).await })
    })
}

async fn dispatch_message(deps: &DispatchDeps, params: SendMessageParams) -> SendMessageResult {
    let cfg = (deps.load_config)();

    let target = match deps.resolver.resolve(
        &cfg,
        OutboundRequest {
            channel: &params.channel,
            account_id: params.account_id.as_deref(),
            to: params.to.as_deref(),
        },
        ResolveMode::Explicit,
    ) {
        Ok(target) => target,
        Err(e) => return SendMessageResult::failed(e.to_string()),
    };

    debug!(
        channel = %target.channel,
        account_id = %target.account_id,
        "dispatching plugin message"
    );

    let payloads = [OutboundPayload::text(params.message.clone())];
    let outcomes = match deps
        .delivery
        .deliver(
            &cfg,
            DeliveryRequest {
                channel: &target.channel,
                account_id: &target.account_id,
                to: &target.to,
                payloads: &payloads,
            },
        )
        .await
    {
        Ok(outcomes) => outcomes,
        Err(e) => return SendMessageResult::failed(e.to_string()),
    };

    // The last per-payload outcome decides the overall result.
    match outcomes.last() {
        None => SendMessageResult::failed("No delivery result"),
        Some(DeliveryOutcome::Failed { error }) => SendMessageResult::failed(error.clone()),
        Some(DeliveryOutcome::Delivered { message_id }) => {
            SendMessageResult::delivered(Some(message_id.clone()))
        },
    }
}

// ── Plugin composition ───────────────────────────────────────────────────────

/// What composition produced, for surfacing in hello/status payloads.
#[derive(Debug)]
pub struct ComposedPlugins {
    pub plugin_methods: Vec<String>,
    pub gateway_methods: Vec<String>,
}

/// Load plugins and merge their methods into the registry.
///
/// Load diagnostics route through `logger`: error level to `error`,
/// every other level to `info`. A loader `Err` propagates to the caller;
/// the gateway must not start with a half-composed method set.
pub fn compose_plugins(
    cfg: &TernConfig,
    loader: &dyn PluginLoader,
    ctx: &PluginContext,
    registry: &mut MethodRegistry,
    logger: &dyn GatewayLogger,
) -> anyhow::Result<ComposedPlugins> {
    let outcome = loader.load(cfg, ctx)?;

    for diag in &outcome.diagnostics {
        log_diagnostic(logger, diag);
    }

    for plugin in outcome.plugins {
        let mut methods: Vec<_> = plugin.methods.into_iter().collect();
        methods.sort_by(|a, b| a.0.cmp(&b.0));
        for (name, handler) in methods {
            if registry.has_core(&name) {
                log_diagnostic(
                    logger,
                    &Diagnostic::info(format!(
                        "plugin method {name} shadows a core method; core wins"
                    ))
                    .with_plugin(plugin.id.clone()),
                );
                continue;
            }
            if registry.has_plugin_method(&name) {
                log_diagnostic(
                    logger,
                    &Diagnostic::error(format!(
                        "duplicate plugin method {name}; keeping the first registration"
                    ))
                    .with_plugin(plugin.id.clone()),
                );
                continue;
            }
            registry.register_plugin_method(name, handler);
        }
    }

    Ok(ComposedPlugins {
        plugin_methods: registry.plugin_method_names(),
        gateway_methods: registry.method_names(),
    })
}

fn log_diagnostic(logger: &dyn GatewayLogger, diag: &Diagnostic) {
    let line = format_diagnostic(diag);
    match diag.level {
        DiagnosticLevel::Error => logger.error(&line),
        DiagnosticLevel::Info | DiagnosticLevel::Warn => logger.info(&line),
    }
}

/// `"[plugins] <message>"` plus `" (plugin=<id>, source=<src>)"` when
/// either detail is present.
#[must_use]
pub fn format_diagnostic(diag: &Diagnostic) -> String {
    let mut details = Vec::new();
    if let Some(plugin) = &diag.plugin {
        details.push(format!("plugin={plugin}"));
    }
    if let Some(source) = &diag.source {
        details.push(format!("source={source}"));
    }
    if details.is_empty() {
        format!("[plugins] {}", diag.message)
    } else {
        format!("[plugins] {} ({})", diag.message, details.join(", "))
    }
}
