//! Adapter implementations for protocol ports.

pub mod memory;

pub use memory::InMemoryTopicTransport;
