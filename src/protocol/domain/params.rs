//! Parameter records exchanged over the transport.

use super::{AgentId, Price};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters describing a request published by a need owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeedParams {
    id: AgentId,
}

impl NeedParams {
    /// Creates need parameters for the given need identifier.
    #[must_use]
    pub const fn new(id: AgentId) -> Self {
        Self { id }
    }

    /// Returns the need identifier, which also keys the need's inbox topic.
    #[must_use]
    pub const fn id(&self) -> &AgentId {
        &self.id
    }
}

/// Parameters of an offer made in response to a need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidParams {
    id: AgentId,
    price: Price,
}

impl BidParams {
    /// Creates bid parameters.
    #[must_use]
    pub const fn new(id: AgentId, price: Price) -> Self {
        Self { id, price }
    }

    /// Returns the bid identifier.
    #[must_use]
    pub const fn id(&self) -> &AgentId {
        &self.id
    }

    /// Returns the offered price.
    #[must_use]
    pub const fn price(&self) -> &Price {
        &self.price
    }
}

/// Free-form point-to-point message contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sender_id: Option<AgentId>,
    #[serde(default)]
    payload: Value,
}

impl MessageParams {
    /// Creates an anonymous message carrying `payload`.
    #[must_use]
    pub const fn new(payload: Value) -> Self {
        Self {
            sender_id: None,
            payload,
        }
    }

    /// Sets the sending agent.
    #[must_use]
    pub fn with_sender(mut self, sender_id: AgentId) -> Self {
        self.sender_id = Some(sender_id);
        self
    }

    /// Returns the sending agent, when one was recorded.
    #[must_use]
    pub const fn sender_id(&self) -> Option<&AgentId> {
        self.sender_id.as_ref()
    }

    /// Returns the message payload.
    #[must_use]
    pub const fn payload(&self) -> &Value {
        &self.payload
    }
}

/// A record as it travels over a topic.
///
/// Bids and messages share a need's inbox, so every record carries a `type`
/// discriminator that consumers use to pick the records they understand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProtocolParams {
    /// A published need.
    Need(NeedParams),
    /// An offer for a need.
    Bid(BidParams),
    /// A point-to-point message.
    Message(MessageParams),
}

impl ProtocolParams {
    /// Returns the wire discriminator of the record.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Need(_) => "need",
            Self::Bid(_) => "bid",
            Self::Message(_) => "message",
        }
    }
}

impl From<NeedParams> for ProtocolParams {
    fn from(params: NeedParams) -> Self {
        Self::Need(params)
    }
}

impl From<BidParams> for ProtocolParams {
    fn from(params: BidParams) -> Self {
        Self::Bid(params)
    }
}

impl From<MessageParams> for ProtocolParams {
    fn from(params: MessageParams) -> Self {
        Self::Message(params)
    }
}
