//! Plugins compiled into the gateway binary, enabled via `plugins.enabled`.

pub mod announce;
pub mod ping;
