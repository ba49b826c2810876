//! Port contracts for the protocol.
//!
//! Ports define infrastructure-agnostic interfaces used by protocol
//! services.

pub mod transport;

pub use transport::{ParamsStream, TopicTransport, TransportError, TransportResult};

#[cfg(test)]
pub use transport::MockTopicTransport;
