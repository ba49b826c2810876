//! Shared fixtures for in-memory exchange tests.

use std::sync::Arc;

use dav_protocol::config::Config;
use dav_protocol::protocol::{
    adapters::InMemoryTopicTransport,
    domain::{AgentId, BidParams, NeedParams, Price, PriceType},
    services::Need,
};
use rstest::fixture;

/// Identifier of the need under test.
pub const NEED_ID: &str = "charging_need_1";

/// Broker plus the configuration every participant shares.
pub struct Marketplace {
    pub transport: Arc<InMemoryTopicTransport>,
    pub config: Arc<Config>,
}

impl Marketplace {
    /// Opens a session for `self_id` on the need under test.
    pub fn need_session(&self, self_id: &str) -> Need<InMemoryTopicTransport> {
        Need::new(
            agent(self_id),
            NeedParams::new(agent(NEED_ID)),
            Arc::clone(&self.config),
            Arc::clone(&self.transport),
        )
    }
}

#[fixture]
pub fn marketplace() -> Marketplace {
    Marketplace {
        transport: Arc::new(InMemoryTopicTransport::new()),
        config: Arc::new(Config::default()),
    }
}

pub fn agent(raw: &str) -> AgentId {
    AgentId::new(raw).expect("valid agent id")
}

pub fn flat_bid(raw_id: &str, amount: &str) -> BidParams {
    BidParams::new(
        agent(raw_id),
        Price::new(amount, PriceType::Flat).expect("valid price"),
    )
}
