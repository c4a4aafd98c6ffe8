//! Types plugins use to talk to the gateway: request handlers, the
//! dispatch function, diagnostics, and the logging facade.

use std::{collections::HashMap, future::Future, pin::Pin, sync::Arc};

use serde::{Deserialize, Serialize};

use tern_protocol::ErrorShape;

// ── Dispatch ─────────────────────────────────────────────────────────────────

/// Parameters for an outbound send initiated by a plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageParams {
    pub channel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    pub message: String,
}

/// What a plugin gets back from a send. Never an Err: dispatch absorbs
/// failures into `ok: false` so a broken channel cannot take a plugin
/// down with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResult {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendMessageResult {
    #[must_use]
    pub fn delivered(message_id: Option<String>) -> Self {
        Self {
            ok: true,
            message_id,
            error: None,
        }
    }

    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            message_id: None,
            error: Some(error.into()),
        }
    }
}

/// Boxed future returned by the dispatch function.
pub type DispatchFuture = Pin<Box<dyn Future<Output = SendMessageResult> + Send>>;

/// Outbound send function handed to plugins at load time.
pub type DispatchFn = Arc<dyn Fn(SendMessageParams) -> DispatchFuture + Send + Sync>;

/// Everything a plugin factory gets to work with.
#[derive(Clone)]
pub struct PluginContext {
    pub dispatch: DispatchFn,
    /// Directory plugins may use for their own files.
    pub workspace_dir: std::path::PathBuf,
}

// ── Request handlers ─────────────────────────────────────────────────────────

/// Boxed future returned by a gateway request handler.
pub type HandlerFuture =
    Pin<Box<dyn Future<Output = Result<serde_json::Value, ErrorShape>> + Send>>;

/// An RPC method handler a plugin contributes to the gateway.
pub type GatewayRequestHandler = Arc<dyn Fn(serde_json::Value) -> HandlerFuture + Send + Sync>;

/// Wrap an async closure into a [`GatewayRequestHandler`].
pub fn handler<F, Fut>(f: F) -> GatewayRequestHandler
where
    F: Fn(serde_json::Value) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<serde_json::Value, ErrorShape>> + Send + 'static,
{
    Arc::new(move |params| Box::pin(f(params)))
}

/// A plugin after loading: its id and the methods it contributes.
pub struct LoadedPlugin {
    pub id: String,
    pub methods: HashMap<String, GatewayRequestHandler>,
}

/// Everything a load pass produced.
#[derive(Default)]
pub struct PluginLoadOutcome {
    pub plugins: Vec<LoadedPlugin>,
    pub diagnostics: Vec<Diagnostic>,
}

// ── Diagnostics ──────────────────────────────────────────────────────────────

/// Severity of a load-time diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Info,
    Warn,
    Error,
}

/// A message produced while loading plugins, surfaced through the
/// gateway logger at composition time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Diagnostic {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Info, message)
    }

    #[must_use]
    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Warn, message)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Error, message)
    }

    fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            plugin: None,
            source: None,
        }
    }

    #[must_use]
    pub fn with_plugin(mut self, plugin: impl Into<String>) -> Self {
        self.plugin = Some(plugin.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

// ── Logging facade ───────────────────────────────────────────────────────────

/// Where composed-plugin diagnostics go. The default routes through
/// `tracing`; tests substitute a capturing implementation.
pub trait GatewayLogger: Send + Sync {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// [`GatewayLogger`] backed by `tracing`.
pub struct TracingLogger;

impl GatewayLogger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
