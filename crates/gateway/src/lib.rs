//! Gateway core: the RPC method registry, plugin composition, and the
//! outbound dispatch adapter plugins send messages through.

pub mod methods;
pub mod plugins;

pub use {
    methods::{MethodRegistry, core_gateway_handlers},
    plugins::{
        ComposedPlugins, ConfigSource, DispatchDeps, build_dispatch, compose_plugins,
        format_diagnostic,
    },
};
