use {anyhow::Result, async_trait::async_trait, tern_common::OutboundPayload};

/// Core channel plugin trait. Each messaging platform implements this.
pub trait ChannelPlugin: Send + Sync {
    /// Channel identifier (e.g. "telegram", "slack").
    fn id(&self) -> &str;

    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Get outbound adapter for sending messages.
    fn outbound(&self) -> Option<&dyn ChannelOutbound>;
}

/// Send messages to a channel.
#[async_trait]
pub trait ChannelOutbound: Send + Sync {
    /// Send one payload and return the provider-assigned message id.
    async fn send_payload(
        &self,
        account_id: &str,
        to: &str,
        payload: &OutboundPayload,
    ) -> Result<String>;
}
