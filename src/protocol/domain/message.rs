//! Message entity anchored to a recipient topic.

use super::{MessageParams, TopicId};
use crate::config::Config;
use std::sync::Arc;

/// A point-to-point message bound to the recipient's topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    topic_id: TopicId,
    message_params: MessageParams,
    config: Arc<Config>,
}

impl Message {
    /// Creates a message value.
    #[must_use]
    pub const fn new(
        topic_id: TopicId,
        message_params: MessageParams,
        config: Arc<Config>,
    ) -> Self {
        Self {
            topic_id,
            message_params,
            config,
        }
    }

    /// Returns the topic the message is anchored to.
    #[must_use]
    pub const fn topic_id(&self) -> &TopicId {
        &self.topic_id
    }

    /// Returns the message contents.
    #[must_use]
    pub const fn message_params(&self) -> &MessageParams {
        &self.message_params
    }

    /// Returns the configuration the message was received under.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
