//! Offer entity anchored to a topic.

use super::{BidParams, TopicId};
use crate::config::Config;
use std::sync::Arc;

/// An offer bound to the topic it was, or will be, exchanged over.
///
/// Two bids are equal when their topic, parameters and configuration are all
/// equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bid {
    topic_id: TopicId,
    bid_params: BidParams,
    config: Arc<Config>,
}

impl Bid {
    /// Creates a bid value.
    #[must_use]
    pub const fn new(topic_id: TopicId, bid_params: BidParams, config: Arc<Config>) -> Self {
        Self {
            topic_id,
            bid_params,
            config,
        }
    }

    /// Returns the topic the bid is anchored to.
    #[must_use]
    pub const fn topic_id(&self) -> &TopicId {
        &self.topic_id
    }

    /// Returns the offer parameters.
    #[must_use]
    pub const fn bid_params(&self) -> &BidParams {
        &self.bid_params
    }

    /// Returns the configuration the bid was created under.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
