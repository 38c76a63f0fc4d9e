//! Coin package catalog types.
//!
//! These are returned by `GET /api/users/getAllCoinPackages` and rendered
//! as cards on the purchase screen.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A purchasable bundle of coins.
///
/// Immutable once fetched. The identifier is opaque and only ever echoed
/// back to the server when buying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinPackage {
    /// Opaque package identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Number of coins credited by this package.
    pub coin: u64,
    /// Discounted price in rupees.
    #[serde(rename = "rateInInr")]
    pub rate_in_inr: Decimal,
    /// Original price, shown struck through.
    pub text: PriceLabel,
}

impl CoinPackage {
    /// Price line shown under the coin amount, e.g. `₹50 only`.
    pub fn price_line(&self) -> String {
        format!("₹{} only", self.rate_in_inr)
    }

    /// Original price line, e.g. `₹100`.
    pub fn original_price_line(&self) -> String {
        format!("₹{}", self.text)
    }
}

/// Original price of a package.
///
/// The server sends either a free-form display string or a number. Strings
/// are kept verbatim even when they look numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceLabel {
    Text(String),
    Amount(Decimal),
}

impl fmt::Display for PriceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceLabel::Amount(amount) => write!(f, "{amount}"),
            PriceLabel::Text(text) => f.write_str(text),
        }
    }
}
