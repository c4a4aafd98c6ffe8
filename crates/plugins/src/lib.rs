//! Gateway plugin system.
//!
//! Plugins contribute RPC methods to the gateway and send outbound
//! messages through the dispatch function they receive at load time.
//! Bundled plugins are compiled in and enabled via `plugins.enabled`.

pub mod api;
pub mod bundled;
pub mod loader;

pub use {
    api::{
        Diagnostic, DiagnosticLevel, DispatchFn, DispatchFuture, GatewayLogger,
        GatewayRequestHandler, HandlerFuture, LoadedPlugin, PluginContext, PluginLoadOutcome,
        SendMessageParams, SendMessageResult, TracingLogger, handler,
    },
    loader::{BundledPluginLoader, PluginLoader},
};
