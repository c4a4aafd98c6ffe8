//! Configuration loading, schema, and env substitution.
//!
//! Config files: `tern.toml`, `tern.yaml`, or `tern.json`
//! Searched in `./` then `~/.config/tern/`.
//!
//! Supports `${ENV_VAR}` substitution in all string values.

pub mod env_subst;
pub mod loader;
pub mod schema;

pub use {
    loader::{config_dir, discover_and_load, find_or_default_config_path, load_config},
    schema::{
        AccountConfig, ChannelConfig, ChannelsConfig, PluginsConfig, ServerConfig, TernConfig,
    },
};
