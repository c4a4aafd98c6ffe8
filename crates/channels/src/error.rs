/// Crate-wide result type for channel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Typed channel errors shared across channel traits.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No plugin is registered for the requested channel type.
    #[error("unknown channel: {channel}")]
    UnknownChannel { channel: String },

    /// The channel exists but is disabled in config.
    #[error("channel disabled: {channel}")]
    ChannelDisabled { channel: String },

    /// The channel plugin does not support outbound sends.
    #[error("channel has no outbound support: {channel}")]
    NoOutbound { channel: String },

    /// A requested account ID is not configured for the channel.
    #[error("unknown channel account: {account_id}")]
    UnknownAccount { account_id: String },

    /// Operation is currently unavailable (not configured/ready).
    #[error("channel operation unavailable: {message}")]
    Unavailable { message: String },
}

impl Error {
    #[must_use]
    pub fn unknown_channel(channel: impl std::fmt::Display) -> Self {
        Self::UnknownChannel {
            channel: channel.to_string(),
        }
    }

    #[must_use]
    pub fn channel_disabled(channel: impl std::fmt::Display) -> Self {
        Self::ChannelDisabled {
            channel: channel.to_string(),
        }
    }

    #[must_use]
    pub fn no_outbound(channel: impl std::fmt::Display) -> Self {
        Self::NoOutbound {
            channel: channel.to_string(),
        }
    }

    #[must_use]
    pub fn unknown_account(account_id: impl std::fmt::Display) -> Self {
        Self::UnknownAccount {
            account_id: account_id.to_string(),
        }
    }

    #[must_use]
    pub fn unavailable(message: impl std::fmt::Display) -> Self {
        Self::Unavailable {
            message: message.to_string(),
        }
    }
}
