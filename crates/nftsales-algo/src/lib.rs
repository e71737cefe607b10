#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/nftsales/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Example trading strategy driven by NFT sales data.
//!
//! The strategy buys the underlying crypto pair whenever the average NFT
//! sale price rose versus the previous observation and goes to cash
//! otherwise.
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use nftsales::{SalesDataRegistry, SubscriptionConfig, Symbol};
//! use nftsales_algo::backtest;
//!
//! #[tokio::main]
//! async fn main() -> nftsales::Result<()> {
//!     let registry = SalesDataRegistry::new().with_cryptoslam();
//!     let config = SubscriptionConfig::new(Symbol::new("ETHUSD"), "/data");
//!
//!     let weights = backtest(
//!         &registry,
//!         &config,
//!         NaiveDate::from_ymd_opt(2020, 10, 7).unwrap(),
//!         NaiveDate::from_ymd_opt(2020, 10, 11).unwrap(),
//!     ).await?;
//!
//!     for target in weights {
//!         println!("{}: {}", target.date, target.weight);
//!     }
//!     Ok(())
//! }
//! ```

use chrono::NaiveDate;
use nftsales::{NftSalesRecord, Result, SalesDataRegistry, SubscriptionConfig};
use rust_decimal::Decimal;
use tracing::debug;

/// A dated portfolio target emitted by the strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetWeight {
    /// Day the target applies from.
    pub date: NaiveDate,
    /// Fraction of the portfolio to hold in the underlying pair (0 or 1).
    pub weight: Decimal,
}

/// Average-sale-price momentum strategy.
///
/// Holds the underlying pair only while the average NFT sale price keeps
/// rising. The first observation has nothing to compare against and targets
/// cash.
#[derive(Debug, Default)]
pub struct AverageSalePrice {
    last_average: Option<Decimal>,
}

impl AverageSalePrice {
    /// Creates a strategy with no prior observation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one record and returns the target weight, if any.
    ///
    /// Zero-transaction days carry no average sale price and produce no
    /// signal; the previous observation is kept for the next comparison.
    pub fn on_record(&mut self, record: &NftSalesRecord) -> Option<Decimal> {
        let current = record.average_sale_price()?;

        let weight = match self.last_average {
            Some(last) if current > last => Decimal::ONE,
            _ => Decimal::ZERO,
        };
        self.last_average = Some(current);
        Some(weight)
    }
}

/// Runs [`AverageSalePrice`] over the history a registry serves for the
/// subscription, returning one dated target per signalling record.
pub async fn backtest(
    registry: &SalesDataRegistry,
    config: &SubscriptionConfig,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<TargetWeight>> {
    let history = registry.fetch_history(config, start, end).await?;
    debug!(
        symbol = %config.symbol,
        rows = history.len(),
        "History request complete"
    );

    let mut strategy = AverageSalePrice::new();
    Ok(history
        .iter()
        .filter_map(|record| {
            strategy.on_record(record).map(|weight| TargetWeight {
                date: record.end_time,
                weight,
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nftsales::Symbol;
    use rust_decimal_macros::dec;

    fn record(day: u32, total_transactions: u64, total_price_usd: Decimal) -> NftSalesRecord {
        NftSalesRecord::new(
            Symbol::new("ETHUSD"),
            NaiveDate::from_ymd_opt(2020, 10, day).unwrap(),
            total_transactions,
            5,
            10,
            total_price_usd,
        )
    }

    #[test]
    fn test_first_observation_targets_cash() {
        let mut strategy = AverageSalePrice::new();
        assert_eq!(
            strategy.on_record(&record(7, 1000, dec!(10000.00))),
            Some(Decimal::ZERO)
        );
    }

    #[test]
    fn test_rising_average_buys_falling_average_sells() {
        let mut strategy = AverageSalePrice::new();

        // avg 10.00, then 12.00, then 9.00
        assert_eq!(
            strategy.on_record(&record(7, 1000, dec!(10000.00))),
            Some(Decimal::ZERO)
        );
        assert_eq!(
            strategy.on_record(&record(8, 1000, dec!(12000.00))),
            Some(Decimal::ONE)
        );
        assert_eq!(
            strategy.on_record(&record(9, 1000, dec!(9000.00))),
            Some(Decimal::ZERO)
        );
    }

    #[test]
    fn test_zero_transaction_day_is_skipped() {
        let mut strategy = AverageSalePrice::new();

        assert_eq!(
            strategy.on_record(&record(7, 1000, dec!(10000.00))),
            Some(Decimal::ZERO)
        );
        assert_eq!(strategy.on_record(&record(8, 0, dec!(0.00))), None);
        // Comparison resumes against the last real average (10.00).
        assert_eq!(
            strategy.on_record(&record(9, 1000, dec!(11000.00))),
            Some(Decimal::ONE)
        );
    }

    #[tokio::test]
    async fn test_backtest_over_local_files() {
        let dir = tempfile::tempdir().unwrap();
        let sales_dir = dir
            .path()
            .join("alternative")
            .join("cryptoslam")
            .join("nftsales");
        std::fs::create_dir_all(&sales_dir).unwrap();
        std::fs::write(
            sales_dir.join("ethusd.csv"),
            "20201007,1000,5,10,10000.00\n\
             20201008,1000,5,10,12000.00\n\
             20201009,1000,5,10,9000.00\n",
        )
        .unwrap();

        let registry = SalesDataRegistry::new().with_cryptoslam();
        let config = SubscriptionConfig::new(Symbol::new("ETHUSD"), dir.path());

        let weights = backtest(
            &registry,
            &config,
            NaiveDate::from_ymd_opt(2020, 10, 7).unwrap(),
            NaiveDate::from_ymd_opt(2020, 10, 11).unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(
            weights,
            vec![
                TargetWeight {
                    date: NaiveDate::from_ymd_opt(2020, 10, 7).unwrap(),
                    weight: Decimal::ZERO,
                },
                TargetWeight {
                    date: NaiveDate::from_ymd_opt(2020, 10, 8).unwrap(),
                    weight: Decimal::ONE,
                },
                TargetWeight {
                    date: NaiveDate::from_ymd_opt(2020, 10, 9).unwrap(),
                    weight: Decimal::ZERO,
                },
            ]
        );
    }
}
