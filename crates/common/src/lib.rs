//! Shared outbound message types used across all tern crates.

pub mod types;

pub use types::{DeliveryOutcome, OutboundPayload};
