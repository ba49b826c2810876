//! Static enumerations shared across the protocol.

use super::{ParseBlockchainTypeError, ParseContractTypeError, ParsePriceTypeError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pricing model of an offered service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceType {
    /// A single fixed amount for the whole service.
    Flat,
}

impl PriceType {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
        }
    }
}

impl fmt::Display for PriceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for PriceType {
    type Error = ParsePriceTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            _ => Err(ParsePriceTypeError(value.to_owned())),
        }
    }
}

/// Blockchain network the agents settle against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockchainType {
    /// Local development chain.
    #[default]
    #[serde(rename = "local")]
    Local,
    /// Public test network.
    #[serde(rename = "ropsten")]
    Test,
    /// Main network.
    #[serde(rename = "main")]
    Main,
}

impl BlockchainType {
    /// Returns the canonical network name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Test => "ropsten",
            Self::Main => "main",
        }
    }
}

impl fmt::Display for BlockchainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for BlockchainType {
    type Error = ParseBlockchainTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "ropsten" => Ok(Self::Test),
            "main" => Ok(Self::Main),
            _ => Err(ParseBlockchainTypeError(value.to_owned())),
        }
    }
}

/// Names of the deployed protocol contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractType {
    /// Agent identity registry.
    Identity,
    /// Protocol token.
    #[serde(rename = "DAVToken")]
    DavToken,
    /// Escrow for a single mission between a need and a bid.
    BasicMission,
}

impl ContractType {
    /// Returns the contract name as deployed.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identity => "Identity",
            Self::DavToken => "DAVToken",
            Self::BasicMission => "BasicMission",
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Contract names are case-sensitive on chain.
impl TryFrom<&str> for ContractType {
    type Error = ParseContractTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "Identity" => Ok(Self::Identity),
            "DAVToken" => Ok(Self::DavToken),
            "BasicMission" => Ok(Self::BasicMission),
            _ => Err(ParseContractTypeError(value.to_owned())),
        }
    }
}
