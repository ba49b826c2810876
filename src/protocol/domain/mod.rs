//! Domain model for the need/bid/message protocol.
//!
//! Identifiers, parameter records and the value entities built from them.
//! Nothing here performs I/O; transport concerns live behind the
//! [`crate::protocol::ports`] boundary.

mod bid;
mod enums;
mod error;
mod ids;
mod message;
mod params;
mod price;

pub use bid::Bid;
pub use enums::{BlockchainType, ContractType, PriceType};
pub use error::{
    ParseBlockchainTypeError, ParseContractTypeError, ParsePriceTypeError, ProtocolDomainError,
};
pub use ids::{AgentId, TopicId};
pub use message::Message;
pub use params::{BidParams, MessageParams, NeedParams, ProtocolParams};
pub use price::Price;
