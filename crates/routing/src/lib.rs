//! Resolve outbound send requests to a concrete channel target.
//!
//! Account cascade (precedence):
//! 1. Account named in the request
//! 2. Sole configured account
//! 3. Channel `default_account`
//! 4. `"default"` (channel has no accounts configured)

pub mod error;
pub mod resolve;

pub use {
    error::{Error, Result},
    resolve::{
        ConfigResolver, OutboundRequest, OutboundResolver, ResolveMode, ResolvedTarget,
        resolve_outbound_target,
    },
};
