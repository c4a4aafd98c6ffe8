//! Channel plugin system.
//!
//! Each messaging platform (Telegram, Slack, ...) implements the
//! ChannelPlugin trait; the registry holds the loaded plugins and the
//! outbound module delivers resolved payloads through them.

pub mod error;
pub mod outbound;
pub mod plugin;
pub mod registry;

pub use {
    error::{Error, Result},
    outbound::{DeliveryRequest, PayloadDelivery, RegistryDelivery},
    plugin::{ChannelOutbound, ChannelPlugin},
    registry::ChannelRegistry,
};
