//! Price attached to a bid.

use super::{PriceType, ProtocolDomainError};
use serde::{Deserialize, Serialize};

/// Amount and pricing model of an offer.
///
/// The amount is kept as the decimal string it was quoted in so that no
/// precision is lost between agents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    value: String,
    #[serde(rename = "type")]
    price_type: PriceType,
}

impl Price {
    /// Creates a validated price.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolDomainError::InvalidPriceValue`] unless the trimmed
    /// value is a run of digits with at most one decimal point.
    pub fn new(
        value: impl Into<String>,
        price_type: PriceType,
    ) -> Result<Self, ProtocolDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if !is_decimal(trimmed) {
            return Err(ProtocolDomainError::InvalidPriceValue(raw));
        }
        Ok(Self {
            value: trimmed.to_owned(),
            price_type,
        })
    }

    /// Returns the quoted amount.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the pricing model.
    #[must_use]
    pub const fn price_type(&self) -> PriceType {
        self.price_type
    }
}

fn is_decimal(value: &str) -> bool {
    let mut parts = value.splitn(2, '.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next();

    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    fraction.map_or_else(
        || !whole.is_empty() && all_digits(whole),
        |frac| !(whole.is_empty() && frac.is_empty()) && all_digits(whole) && all_digits(frac),
    )
}
