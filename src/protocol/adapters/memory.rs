//! In-process topic transport.

use crate::config::Config;
use crate::protocol::{
    domain::{AgentId, ProtocolParams, TopicId},
    ports::{ParamsStream, TopicTransport, TransportError, TransportResult},
};
use async_trait::async_trait;
use futures::{StreamExt, stream};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::mpsc;
use tracing::debug;

const TOPIC_PREFIX: &str = "dav-";
const TOPIC_HASH_BYTES: usize = 8;

/// In-memory pub/sub transport.
///
/// Records are JSON-encoded on publish and decoded on delivery, so codec
/// behaviour matches a networked broker. Each topic retains its records and
/// new subscribers receive the retained records before live ones. Suitable
/// for unit and integration tests and for local deterministic flows.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTopicTransport {
    state: Arc<RwLock<InMemoryBrokerState>>,
}

#[derive(Debug, Default)]
struct InMemoryBrokerState {
    topics: HashMap<TopicId, TopicLog>,
    topic_creation_rejection: Option<String>,
    publish_rejection: Option<String>,
}

#[derive(Debug, Default)]
struct TopicLog {
    created: bool,
    records: Vec<String>,
    subscribers: Vec<mpsc::UnboundedSender<String>>,
}

impl InMemoryTopicTransport {
    /// Creates an empty broker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent topic creation fail with `reason`.
    ///
    /// # Errors
    ///
    /// Returns broker errors when lock acquisition fails.
    pub fn reject_topic_creation(&self, reason: impl Into<String>) -> TransportResult<()> {
        let mut state = self.write_state()?;
        state.topic_creation_rejection = Some(reason.into());
        Ok(())
    }

    /// Makes every subsequent publish fail with `reason`.
    ///
    /// # Errors
    ///
    /// Returns broker errors when lock acquisition fails.
    pub fn reject_publishing(&self, reason: impl Into<String>) -> TransportResult<()> {
        let mut state = self.write_state()?;
        state.publish_rejection = Some(reason.into());
        Ok(())
    }

    /// Reports whether the topic has been created or published to.
    ///
    /// Subscribing alone does not create a topic.
    ///
    /// # Errors
    ///
    /// Returns broker errors when lock acquisition fails.
    pub fn topic_exists(&self, topic_id: &TopicId) -> TransportResult<bool> {
        Ok(self
            .read_state()?
            .topics
            .get(topic_id)
            .is_some_and(|log| log.created))
    }

    /// Returns the number of open subscriptions registered on a topic.
    ///
    /// # Errors
    ///
    /// Returns broker errors when lock acquisition fails.
    pub fn subscriber_count(&self, topic_id: &TopicId) -> TransportResult<usize> {
        Ok(self
            .read_state()?
            .topics
            .get(topic_id)
            .map_or(0, |log| log.subscribers.len()))
    }

    /// Returns the records retained on a topic, oldest first.
    ///
    /// # Errors
    ///
    /// Returns broker errors when lock acquisition fails or codec errors when
    /// a retained record cannot be decoded.
    pub fn published(&self, topic_id: &TopicId) -> TransportResult<Vec<ProtocolParams>> {
        let state = self.read_state()?;
        state.topics.get(topic_id).map_or_else(
            || Ok(Vec::new()),
            |log| log.records.iter().map(|record| decode(record)).collect(),
        )
    }

    fn read_state(&self) -> TransportResult<std::sync::RwLockReadGuard<'_, InMemoryBrokerState>> {
        self.state
            .read()
            .map_err(|err| TransportError::broker(std::io::Error::other(err.to_string())))
    }

    fn write_state(
        &self,
    ) -> TransportResult<std::sync::RwLockWriteGuard<'_, InMemoryBrokerState>> {
        self.state
            .write()
            .map_err(|err| TransportError::broker(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl TopicTransport for InMemoryTopicTransport {
    fn generate_topic_id(&self, entity_id: &AgentId) -> TopicId {
        let digest = Sha256::digest(entity_id.as_str().as_bytes());
        let mut name = String::with_capacity(TOPIC_PREFIX.len() + TOPIC_HASH_BYTES * 2);
        name.push_str(TOPIC_PREFIX);
        for byte in digest.iter().take(TOPIC_HASH_BYTES) {
            name.push_str(&format!("{byte:02x}"));
        }
        TopicId::new_unchecked(name)
    }

    async fn create_topic(&self, topic_id: &TopicId, config: &Config) -> TransportResult<()> {
        ensure_reachable(config)?;
        let mut state = self.write_state()?;
        if let Some(reason) = &state.topic_creation_rejection {
            return Err(TransportError::Rejected {
                topic_id: topic_id.clone(),
                reason: reason.clone(),
            });
        }
        state.topics.entry(topic_id.clone()).or_default().created = true;
        debug!(topic = %topic_id, "topic created");
        Ok(())
    }

    async fn send_params(
        &self,
        topic_id: &TopicId,
        params: ProtocolParams,
        config: &Config,
    ) -> TransportResult<()> {
        ensure_reachable(config)?;
        let record = serde_json::to_string(&params).map_err(TransportError::codec)?;

        let mut state = self.write_state()?;
        if let Some(reason) = &state.publish_rejection {
            return Err(TransportError::Rejected {
                topic_id: topic_id.clone(),
                reason: reason.clone(),
            });
        }

        let log = state.topics.entry(topic_id.clone()).or_default();
        log.created = true;
        log.subscribers
            .retain(|subscriber| subscriber.send(record.clone()).is_ok());
        log.records.push(record);
        debug!(
            topic = %topic_id,
            kind = params.kind(),
            subscribers = log.subscribers.len(),
            "record published"
        );
        Ok(())
    }

    async fn params_stream(
        &self,
        topic_id: &TopicId,
        config: &Config,
    ) -> TransportResult<ParamsStream> {
        ensure_reachable(config)?;
        let (sender, receiver) = mpsc::unbounded_channel();

        {
            let mut state = self.write_state()?;
            let log = state.topics.entry(topic_id.clone()).or_default();
            log.subscribers.retain(|subscriber| !subscriber.is_closed());
            for record in &log.records {
                if sender.send(record.clone()).is_err() {
                    break;
                }
            }
            log.subscribers.push(sender);
            debug!(topic = %topic_id, subscribers = log.subscribers.len(), "subscription opened");
        }

        let records = stream::unfold(receiver, |mut rx| async move {
            rx.recv().await.map(|record| (record, rx))
        });
        Ok(records.map(|record| decode(&record)).boxed())
    }
}

fn ensure_reachable(config: &Config) -> TransportResult<()> {
    if config.kafka_seed_urls().is_empty() {
        return Err(TransportError::Unavailable(
            "no broker seed URLs configured".to_owned(),
        ));
    }
    Ok(())
}

fn decode(record: &str) -> TransportResult<ProtocolParams> {
    serde_json::from_str(record).map_err(TransportError::codec)
}
