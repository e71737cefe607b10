//! Core data types for NFT sales data.
//!
//! This module defines the fundamental data structures:
//!
//! - [`Symbol`] - Trading symbol/ticker
//! - [`NftSalesRecord`] - One daily NFT-sales observation for one symbol

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A trading symbol/ticker.
///
/// Symbols are automatically uppercased on creation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a new symbol from a string, converting to uppercase.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into().to_uppercase())
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// One daily NFT-sales observation for one symbol.
///
/// A record covers one UTC calendar day of aggregated sales on a blockchain.
/// The source file carries the nominal date of the aggregation day's end, so
/// [`end_time`](Self::end_time) holds that date and
/// [`time`](Self::time) is fixed at exactly one day earlier. The shift is
/// part of the historical alignment of the dataset and must not change.
///
/// `value` mirrors `total_price_usd`, the host convention for the primary
/// numeric value of a record.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use nftsales_core::{NftSalesRecord, Symbol};
/// use rust_decimal::Decimal;
///
/// let record = NftSalesRecord::new(
///     Symbol::new("ETHUSD"),
///     NaiveDate::from_ymd_opt(2020, 10, 7).unwrap(),
///     1000,
///     5,
///     10,
///     Decimal::new(1_000_000, 2), // 10000.00
/// );
/// assert_eq!(record.time, NaiveDate::from_ymd_opt(2020, 10, 6).unwrap());
/// assert_eq!(record.value, record.total_price_usd);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftSalesRecord {
    /// Symbol this record is attached to.
    pub symbol: Symbol,
    /// Start of the coverage interval (`end_time` minus one day).
    pub time: NaiveDate,
    /// The source record's nominal date.
    pub end_time: NaiveDate,
    /// Primary numeric value; mirrors `total_price_usd`.
    pub value: Decimal,
    /// Number of NFT transactions made within this blockchain that day.
    pub total_transactions: u64,
    /// Number of unique NFT buyers within this blockchain that day.
    pub unique_buyers: u64,
    /// Number of unique NFT sellers within this blockchain that day.
    pub unique_sellers: u64,
    /// Total transaction value (in USD) of NFT sales within this blockchain.
    pub total_price_usd: Decimal,
}

impl NftSalesRecord {
    /// Creates a new record from the source date and counts.
    ///
    /// `time` is derived as `end_time` minus one day and `value` mirrors
    /// `total_price_usd`.
    #[must_use]
    pub fn new(
        symbol: Symbol,
        end_time: NaiveDate,
        total_transactions: u64,
        unique_buyers: u64,
        unique_sellers: u64,
        total_price_usd: Decimal,
    ) -> Self {
        Self {
            symbol,
            time: end_time - Duration::days(1),
            end_time,
            value: total_price_usd,
            total_transactions,
            unique_buyers,
            unique_sellers,
            total_price_usd,
        }
    }

    /// Average sale price for the day, or `None` on a zero-transaction day.
    #[must_use]
    pub fn average_sale_price(&self) -> Option<Decimal> {
        self.total_price_usd
            .checked_div(Decimal::from(self.total_transactions))
    }
}

impl fmt::Display for NftSalesRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Transactions {} - Unique Buyers {} - Unique Sellers {} - Sales {}",
            self.symbol,
            self.total_transactions,
            self.unique_buyers,
            self.unique_sellers,
            self.total_price_usd
        )
    }
}
