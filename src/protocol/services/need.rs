//! Service layer for the request side of the protocol.
//!
//! Provides [`Need`], which creates bids, consumes the bids addressed to it,
//! and exchanges messages with other agents over a [`TopicTransport`].

use crate::config::Config;
use crate::protocol::{
    domain::{AgentId, Bid, BidParams, Message, MessageParams, NeedParams, ProtocolParams, TopicId},
    ports::{TopicTransport, TransportError},
};
use futures::{Stream, StreamExt, future, stream::BoxStream};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Service-level errors for need operations.
#[derive(Debug, Clone, Error)]
pub enum NeedError {
    /// The message would be delivered to the sender's own channel.
    #[error("cannot send a message to your own channel")]
    SelfAddressedMessage,

    /// The reply topic for a bid could not be created.
    #[error("Fail to create a topic: {cause}")]
    TopicCreation {
        /// Transport failure reported by `create_topic`.
        #[source]
        cause: TransportError,
    },

    /// Publishing or subscribing failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Result type for need operations.
pub type NeedResult<T> = Result<T, NeedError>;

/// Live sequence of bids addressed to a need.
pub type BidStream = BoxStream<'static, NeedResult<Bid>>;

/// Live sequence of messages addressed to a need.
pub type MessageStream = BoxStream<'static, NeedResult<Message>>;

/// Request-side agent session.
///
/// A need holds no state beyond its identity, parameters, configuration and
/// transport handle; every operation is an independent interaction with the
/// transport and may be retried by the caller.
pub struct Need<T>
where
    T: TopicTransport,
{
    self_id: AgentId,
    need_params: NeedParams,
    config: Arc<Config>,
    transport: Arc<T>,
}

impl<T> Need<T>
where
    T: TopicTransport,
{
    /// Creates a need session.
    #[must_use]
    pub const fn new(
        self_id: AgentId,
        need_params: NeedParams,
        config: Arc<Config>,
        transport: Arc<T>,
    ) -> Self {
        Self {
            self_id,
            need_params,
            config,
            transport,
        }
    }

    /// Returns the identity of the agent owning this need.
    #[must_use]
    pub const fn self_id(&self) -> &AgentId {
        &self.self_id
    }

    /// Returns the need parameters.
    #[must_use]
    pub const fn need_params(&self) -> &NeedParams {
        &self.need_params
    }

    /// Returns the shared configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Creates a bid on a freshly created reply topic and announces it in
    /// the need's inbox.
    ///
    /// # Errors
    ///
    /// Returns [`NeedError::TopicCreation`] when the reply topic cannot be
    /// created, in which case nothing is published, or
    /// [`NeedError::Transport`] when the announcement cannot be published.
    #[tracing::instrument(
        skip_all,
        fields(self_id = %self.self_id, need_id = %self.need_params.id(), bid_id = %bid_params.id())
    )]
    pub async fn create_bid(&self, bid_params: BidParams) -> NeedResult<Bid> {
        let topic_id = self.transport.generate_topic_id(bid_params.id());

        self.transport
            .create_topic(&topic_id, &self.config)
            .await
            .inspect_err(|err| {
                warn!(topic = %topic_id, error = %err, "bid topic creation failed");
            })
            .map_err(|cause| NeedError::TopicCreation { cause })?;

        self.transport
            .send_params(&self.inbox(), bid_params.clone().into(), &self.config)
            .await
            .inspect_err(|err| warn!(error = %err, "bid announcement failed"))?;

        debug!(topic = %topic_id, "bid created");
        Ok(Bid::new(topic_id, bid_params, Arc::clone(&self.config)))
    }

    /// Subscribes to the bids arriving in the need's inbox.
    ///
    /// Each bid is anchored to this agent's own identity. Other records
    /// sharing the inbox are skipped. The stream ends after the first
    /// delivery error.
    ///
    /// # Errors
    ///
    /// Returns [`NeedError::Transport`] when the subscription cannot be
    /// opened.
    #[tracing::instrument(
        skip_all,
        fields(self_id = %self.self_id, need_id = %self.need_params.id())
    )]
    pub async fn bids(&self) -> NeedResult<BidStream> {
        self.inbound(
            |record| match record {
                ProtocolParams::Bid(params) => Ok(params),
                other => Err(other),
            },
            Bid::new,
        )
        .await
    }

    /// Sends a message to the channel of the agent that published the need.
    ///
    /// # Errors
    ///
    /// Returns [`NeedError::SelfAddressedMessage`] without touching the
    /// transport when this agent owns the target channel, or
    /// [`NeedError::Transport`] when publishing fails.
    #[tracing::instrument(
        skip_all,
        fields(sender = %self.self_id, recipient = %self.need_params.id())
    )]
    pub async fn send_message(&self, message_params: MessageParams) -> NeedResult<()> {
        if self.need_params.id() == &self.self_id {
            warn!("refusing to send a message to own channel");
            return Err(NeedError::SelfAddressedMessage);
        }

        self.transport
            .send_params(&self.inbox(), message_params.into(), &self.config)
            .await
            .inspect_err(|err| warn!(error = %err, "message delivery failed"))?;

        debug!("message sent");
        Ok(())
    }

    /// Subscribes to the messages arriving in the need's inbox.
    ///
    /// Same delivery contract as [`Need::bids`].
    ///
    /// # Errors
    ///
    /// Returns [`NeedError::Transport`] when the subscription cannot be
    /// opened.
    #[tracing::instrument(
        skip_all,
        fields(self_id = %self.self_id, need_id = %self.need_params.id())
    )]
    pub async fn messages(&self) -> NeedResult<MessageStream> {
        self.inbound(
            |record| match record {
                ProtocolParams::Message(params) => Ok(params),
                other => Err(other),
            },
            Message::new,
        )
        .await
    }

    fn inbox(&self) -> TopicId {
        TopicId::from(self.need_params.id())
    }

    async fn inbound<P, E>(
        &self,
        select: fn(ProtocolParams) -> Result<P, ProtocolParams>,
        build: fn(TopicId, P, Arc<Config>) -> E,
    ) -> NeedResult<BoxStream<'static, NeedResult<E>>>
    where
        P: Send + 'static,
        E: Send + 'static,
    {
        let records = self
            .transport
            .params_stream(&self.inbox(), &self.config)
            .await
            .inspect_err(|err| warn!(error = %err, "inbox subscription failed"))?;

        let anchor = TopicId::from(&self.self_id);
        let config = Arc::clone(&self.config);
        let entities = records.filter_map(move |item| {
            let entity = match item {
                Ok(record) => match select(record) {
                    Ok(params) => Some(Ok(build(anchor.clone(), params, Arc::clone(&config)))),
                    Err(skipped) => {
                        debug!(kind = skipped.kind(), "skipping record of another kind");
                        None
                    }
                },
                Err(err) => {
                    warn!(error = %err, "inbox delivery failed");
                    Some(Err(NeedError::Transport(err)))
                }
            };
            future::ready(entity)
        });

        Ok(until_first_error(entities))
    }
}

/// Ends `items` right after the first error it yields.
fn until_first_error<I>(
    items: impl Stream<Item = NeedResult<I>> + Send + 'static,
) -> BoxStream<'static, NeedResult<I>>
where
    I: Send + 'static,
{
    items
        .scan(false, |failed, item| {
            if *failed {
                return future::ready(None);
            }
            *failed = item.is_err();
            future::ready(Some(item))
        })
        .boxed()
}
