use serde::{Deserialize, Serialize};

/// A single outbound message payload.
///
/// Today all payloads are plain text; richer kinds (media, location) hang
/// off the same shape when a channel grows support for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundPayload {
    pub text: String,
}

impl OutboundPayload {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Per-payload result reported by the delivery pipeline.
///
/// Delivery never aborts a batch: each payload gets exactly one outcome,
/// in payload order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeliveryOutcome {
    #[serde(rename_all = "camelCase")]
    Delivered { message_id: String },
    Failed { error: String },
}

impl DeliveryOutcome {
    #[must_use]
    pub fn delivered(message_id: impl Into<String>) -> Self {
        Self::Delivered {
            message_id: message_id.into(),
        }
    }

    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    /// The delivery error, if this outcome is a failure.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            Self::Delivered { .. } => None,
        }
    }

    /// The provider-assigned message id, if delivery succeeded.
    #[must_use]
    pub fn message_id(&self) -> Option<&str> {
        match self {
            Self::Delivered { message_id } => Some(message_id),
            Self::Failed { .. } => None,
        }
    }
}
