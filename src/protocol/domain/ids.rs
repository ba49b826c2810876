//! Identifier types for the protocol domain.

use super::ProtocolDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of an agent or of a need published by an agent.
///
/// Identifiers are opaque strings; only surrounding whitespace is removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    /// Creates a validated agent identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolDomainError::EmptyAgentId`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ProtocolDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ProtocolDomainError::EmptyAgentId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AgentId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of a topic on the pub/sub transport.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(String);

impl TopicId {
    /// Creates a validated topic identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolDomainError::EmptyTopicId`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ProtocolDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ProtocolDomainError::EmptyTopicId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Wraps a name produced by a transport's topic generator.
    pub(crate) const fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    /// Returns the topic identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An agent's own channel is keyed by the agent identifier itself.
impl From<&AgentId> for TopicId {
    fn from(agent_id: &AgentId) -> Self {
        Self(agent_id.0.clone())
    }
}

impl AsRef<str> for TopicId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
