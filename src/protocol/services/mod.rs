//! Application services for the protocol.

mod need;

pub use need::{BidStream, MessageStream, Need, NeedError, NeedResult};
