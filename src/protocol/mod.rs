//! Need, bid and message exchange between marketplace agents.
//!
//! Agents publish and consume records through per-agent topics on a shared
//! pub/sub transport. A need owns an inbox topic keyed by its identifier;
//! bidders reply on topics of their own. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
