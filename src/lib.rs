//! DAV protocol: request/offer messaging for autonomous agents.
//!
//! Agents such as drones publish needs, service providers answer with bids,
//! and both sides exchange point-to-point messages. Every record travels over
//! per-agent topics on a shared pub/sub transport.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Identifiers, parameter records and value entities
//! - **Ports**: The transport contract needs depend on
//! - **Adapters**: Concrete transports (an in-memory broker)
//! - **Services**: The `Need` orchestration
//!
//! # Modules
//!
//! - [`protocol`]: Need, bid and message exchange
//! - [`config`]: Immutable runtime configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod protocol;
pub mod telemetry;
