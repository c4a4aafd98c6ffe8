use {
    async_trait::async_trait,
    std::sync::Arc,
    tern_common::{DeliveryOutcome, OutboundPayload},
    tern_config::TernConfig,
    tracing::debug,
};

use crate::{
    error::{Error, Result},
    registry::ChannelRegistry,
};

/// One outbound delivery: a resolved target plus the payloads to send.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryRequest<'a> {
    pub channel: &'a str,
    pub account_id: &'a str,
    pub to: &'a str,
    pub payloads: &'a [OutboundPayload],
}

/// Delivers payloads to a resolved outbound target.
///
/// One outcome per payload, in payload order; a failed payload never
/// aborts the rest of the batch.
#[async_trait]
pub trait PayloadDelivery: Send + Sync {
    async fn deliver(
        &self,
        cfg: &TernConfig,
        req: DeliveryRequest<'_>,
    ) -> Result<Vec<DeliveryOutcome>>;
}

/// [`PayloadDelivery`] backed by the channel plugin registry.
pub struct RegistryDelivery {
    registry: Arc<ChannelRegistry>,
}

impl RegistryDelivery {
    #[must_use]
    pub fn new(registry: Arc<ChannelRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl PayloadDelivery for RegistryDelivery {
    async fn deliver(
        &self,
        cfg: &TernConfig,
        req: DeliveryRequest<'_>,
    ) -> Result<Vec<DeliveryOutcome>> {
        if let Some(channel_cfg) = cfg.channels.get(req.channel)
            && !channel_cfg.enabled
        {
            return Err(Error::channel_disabled(req.channel));
        }

        let plugin = self
            .registry
            .get(req.channel)
            .ok_or_else(|| Error::unknown_channel(req.channel))?;
        let outbound = plugin
            .outbound()
            .ok_or_else(|| Error::no_outbound(req.channel))?;

        let mut outcomes = Vec::with_capacity(req.payloads.len());
        for payload in req.payloads {
            match outbound.send_payload(req.account_id, req.to, payload).await {
                Ok(message_id) => {
                    debug!(
                        channel = req.channel,
                        account_id = req.account_id,
                        message_id = %message_id,
                        "payload delivered"
                    );
                    outcomes.push(DeliveryOutcome::delivered(message_id));
                },
                Err(e) => {
                    debug!(
                        channel = req.channel,
                        account_id = req.account_id,
                        error = %e,
                        "payload delivery failed"
                    );
                    outcomes.push(DeliveryOutcome::failed(e.to_string()));
                },
            }
        }
        Ok(outcomes)
    }
}
