#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/nftsales/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! CryptoSlam NFT sales data adapter.
//!
//! This crate implements the [`DataAdapter`] and [`SalesDataProvider`] traits
//! from `nftsales-core` for the CryptoSlam daily NFT sales dataset.
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use nftsales_core::{SalesDataProvider, SubscriptionConfig, Symbol};
//! use nftsales_cryptoslam::CryptoSlamProvider;
//!
//! # async fn example() -> nftsales_core::Result<()> {
//! let provider = CryptoSlamProvider::new();
//! let config = SubscriptionConfig::new(Symbol::new("ETHUSD"), "/data");
//!
//! let start = NaiveDate::from_ymd_opt(2020, 10, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2020, 10, 11).unwrap();
//! let history = provider.fetch_history(&config, start, end).await?;
//! println!("Fetched {} records", history.len());
//! # Ok(())
//! # }
//! ```

use std::str::FromStr;

use async_trait::async_trait;
use chrono::NaiveDate;
use nftsales_core::{
    DataAdapter, DataError, DataSource, DataTimeZone, NftSalesRecord, RecordStream, Resolution,
    Result, SalesDataProvider, SubscriptionConfig,
};
use rust_decimal::Decimal;
use tracing::debug;

/// Date pattern of the first CSV column.
const DATE_FORMAT: &str = "%Y%m%d";

/// Column count of the sales files.
const FIELD_COUNT: usize = 5;

/// CryptoSlam NFT sales data adapter.
///
/// One CSV file per symbol holds the symbol's entire daily history; the
/// request date plays no part in source selection. The adapter is stateless,
/// so a single instance can serve any number of subscriptions.
#[derive(Debug, Default)]
pub struct CryptoSlamProvider;

impl CryptoSlamProvider {
    /// Creates a new CryptoSlam adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn parse_count(field: &str, name: &str) -> Result<u64> {
        field
            .parse()
            .map_err(|e| DataError::Parse(format!("invalid {name} '{field}': {e}")))
    }

    fn parse_price(field: &str) -> Result<Decimal> {
        let price = Decimal::from_str(field)
            .map_err(|e| DataError::Parse(format!("invalid totalPriceUSD '{field}': {e}")))?;
        if price.is_sign_negative() {
            return Err(DataError::Parse(format!(
                "negative totalPriceUSD '{field}'"
            )));
        }
        Ok(price)
    }
}

impl DataAdapter for CryptoSlamProvider {
    fn name(&self) -> &str {
        "CryptoSlam NFT Sales"
    }

    fn description(&self) -> &str {
        "Daily NFT sales statistics per blockchain from CryptoSlam: transaction \
         counts, unique buyers and sellers, and total USD sales volume"
    }

    fn default_resolution(&self) -> Resolution {
        Resolution::Daily
    }

    fn supported_resolutions(&self) -> &[Resolution] {
        &[Resolution::Daily]
    }

    fn data_time_zone(&self) -> DataTimeZone {
        DataTimeZone::Utc
    }

    fn is_sparse(&self) -> bool {
        true
    }

    fn requires_mapping(&self) -> bool {
        // Symbols are blockchain labels, not equities subject to renames.
        false
    }
}

#[async_trait]
impl SalesDataProvider for CryptoSlamProvider {
    fn resolve_source(&self, config: &SubscriptionConfig, _date: NaiveDate) -> DataSource {
        DataSource::local_file(
            config
                .data_folder
                .join("alternative")
                .join("cryptoslam")
                .join("nftsales")
                .join(format!("{}.csv", config.symbol.as_str().to_lowercase())),
        )
    }

    fn parse_line(&self, config: &SubscriptionConfig, line: &str) -> Result<NftSalesRecord> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != FIELD_COUNT {
            return Err(DataError::Parse(format!(
                "expected {FIELD_COUNT} comma-separated fields, got {} in '{line}'",
                fields.len()
            )));
        }

        let end_time = NaiveDate::parse_from_str(fields[0], DATE_FORMAT)
            .map_err(|e| DataError::Parse(format!("invalid date '{}': {e}", fields[0])))?;
        let total_transactions = Self::parse_count(fields[1], "totalTransactions")?;
        let unique_buyers = Self::parse_count(fields[2], "uniqueBuyers")?;
        let unique_sellers = Self::parse_count(fields[3], "uniqueSellers")?;
        let total_price_usd = Self::parse_price(fields[4])?;

        Ok(NftSalesRecord::new(
            config.symbol.clone(),
            end_time,
            total_transactions,
            unique_buyers,
            unique_sellers,
            total_price_usd,
        ))
    }

    async fn fetch_history(
        &self,
        config: &SubscriptionConfig,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NftSalesRecord>> {
        if start > end {
            return Err(DataError::InvalidParameter(format!(
                "Start date {start} is after end date {end}"
            )));
        }

        let source = self.resolve_source(config, end);
        let content = match tokio::fs::read_to_string(&source.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Sparse dataset: an absent symbol file is expected.
                debug!(
                    symbol = %config.symbol,
                    path = %source.path.display(),
                    "No sales file for symbol"
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for line in content.lines() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            let record = self.parse_line(config, line)?;
            if record.end_time >= start && record.end_time <= end {
                records.push(record);
            }
        }

        records.sort_by_key(|r| r.end_time);
        debug!(
            symbol = %config.symbol,
            rows = records.len(),
            "Fetched sales history"
        );
        Ok(records)
    }

    async fn subscribe(&self, config: &SubscriptionConfig) -> Result<RecordStream> {
        let records = self
            .fetch_history(config, NaiveDate::MIN, NaiveDate::MAX)
            .await?;
        Ok(Box::pin(futures::stream::iter(records)))
    }
}
