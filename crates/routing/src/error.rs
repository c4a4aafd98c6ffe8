#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Explicit resolution got no `to` and there is no fallback to consult.
    #[error("outbound target 'to' required for channel {channel}")]
    MissingTarget { channel: String },

    /// The named account is not configured for this channel.
    #[error("unknown account '{account_id}' for channel {channel}")]
    UnknownAccount { channel: String, account_id: String },

    /// Several accounts are configured and none was named or defaulted.
    #[error("multiple accounts configured for channel {channel}; name one or set default_account")]
    AmbiguousAccount { channel: String },
}

impl Error {
    #[must_use]
    pub fn missing_target(channel: impl Into<String>) -> Self {
        Self::MissingTarget {
            channel: channel.into(),
        }
    }

    #[must_use]
    pub fn unknown_account(channel: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self::UnknownAccount {
            channel: channel.into(),
            account_id: account_id.into(),
        }
    }

    #[must_use]
    pub fn ambiguous_account(channel: impl Into<String>) -> Self {
        Self::AmbiguousAccount {
            channel: channel.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
