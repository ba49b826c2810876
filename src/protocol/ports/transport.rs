//! Transport port for topic-based publish and subscribe.

use crate::config::Config;
use crate::protocol::domain::{AgentId, ProtocolParams, TopicId};
use async_trait::async_trait;
use futures::stream::BoxStream;
use std::sync::Arc;
use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Lazy sequence of records arriving on a topic.
///
/// The stream may be infinite. An `Err` item reports a delivery failure;
/// consumers stop at the first one.
pub type ParamsStream = BoxStream<'static, TransportResult<ProtocolParams>>;

/// Pub/sub transport contract consumed by needs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TopicTransport: Send + Sync {
    /// Derives the topic identifier for an entity.
    ///
    /// Must be pure and deterministic: the same entity always maps to the
    /// same topic.
    fn generate_topic_id(&self, entity_id: &AgentId) -> TopicId;

    /// Creates a topic.
    ///
    /// Creating a topic that already exists succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on any infrastructure failure.
    async fn create_topic(&self, topic_id: &TopicId, config: &Config) -> TransportResult<()>;

    /// Publishes a record to a topic.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the record cannot be encoded or the
    /// broker does not accept it.
    async fn send_params(
        &self,
        topic_id: &TopicId,
        params: ProtocolParams,
        config: &Config,
    ) -> TransportResult<()>;

    /// Subscribes to a topic.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the subscription cannot be opened.
    /// Failures after opening are delivered through the stream.
    async fn params_stream(
        &self,
        topic_id: &TopicId,
        config: &Config,
    ) -> TransportResult<ParamsStream>;
}

/// Errors returned by transport adapters.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// No broker is reachable or configured.
    #[error("transport unavailable: {0}")]
    Unavailable(String),

    /// The broker refused an operation on a topic.
    #[error("broker rejected operation on topic {topic_id}: {reason}")]
    Rejected {
        /// Topic the operation targeted.
        topic_id: TopicId,
        /// Reason reported by the broker.
        reason: String,
    },

    /// A record could not be encoded or decoded.
    #[error("record codec error: {0}")]
    Codec(Arc<serde_json::Error>),

    /// Any other infrastructure failure.
    #[error("broker error: {0}")]
    Broker(Arc<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Wraps a record encoding or decoding error.
    pub fn codec(err: serde_json::Error) -> Self {
        Self::Codec(Arc::new(err))
    }

    /// Wraps an infrastructure error.
    pub fn broker(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Broker(Arc::new(err))
    }
}
