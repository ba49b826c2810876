//! Error types for protocol domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing protocol domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProtocolDomainError {
    /// The agent identifier is empty after trimming.
    #[error("agent identifier must not be empty")]
    EmptyAgentId,

    /// The topic identifier is empty after trimming.
    #[error("topic identifier must not be empty")]
    EmptyTopicId,

    /// The price value is not a non-negative decimal number.
    #[error("price value '{0}' must be a non-negative decimal number")]
    InvalidPriceValue(String),
}

/// Error returned while parsing a price type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown price type: {0}")]
pub struct ParsePriceTypeError(pub String);

/// Error returned while parsing a blockchain network type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown blockchain type: {0}")]
pub struct ParseBlockchainTypeError(pub String);

/// Error returned while parsing a contract name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown contract type: {0}")]
pub struct ParseContractTypeError(pub String);
