//! Adapter traits for resolving, parsing and delivering sales data.
//!
//! This module defines the two traits every dataset adapter implements:
//!
//! - [`DataAdapter`] - metadata the host queries when a dataset is added
//! - [`SalesDataProvider`] - source resolution, line parsing and delivery
//!
//! Adapters are stateless and reentrant: every operation is a pure function
//! of the subscription context and its input, so concurrent invocations on
//! different lines or files need no locking.

use async_trait::async_trait;
use chrono::NaiveDate;
use futures::Stream;
use std::fmt::Debug;
use std::pin::Pin;

use crate::{
    error::Result,
    resolution::{DataTimeZone, Resolution},
    subscription::{DataSource, SubscriptionConfig},
    types::NftSalesRecord,
};

/// Stream of records delivered for a live subscription.
pub type RecordStream = Pin<Box<dyn Stream<Item = NftSalesRecord> + Send>>;

/// Base trait for all dataset adapters.
///
/// The host's subscription manager queries these once when a dataset is
/// added and uses the answers to schedule reads and suppress warnings.
pub trait DataAdapter: Send + Sync + Debug {
    /// Returns the name of this dataset (e.g., "CryptoSlam NFT Sales").
    fn name(&self) -> &str;

    /// Returns a description of this dataset.
    fn description(&self) -> &str;

    /// Resolution the dataset delivers at when the subscription does not ask
    /// for one explicitly.
    fn default_resolution(&self) -> Resolution;

    /// Resolutions the dataset can deliver at.
    fn supported_resolutions(&self) -> &[Resolution];

    /// Time zone the dataset's timestamps are anchored to.
    fn data_time_zone(&self) -> DataTimeZone;

    /// Whether gaps in the dataset are expected.
    ///
    /// When true, the host does not warn about missing source files and
    /// adapters report an absent file as an empty history.
    fn is_sparse(&self) -> bool;

    /// Whether the symbol is subject to corporate events (renames,
    /// delistings) that the host must remap before use.
    fn requires_mapping(&self) -> bool;
}

/// Operations for a file-backed NFT sales dataset.
///
/// Implementations are pure over their inputs; they hold no memory across
/// calls.
#[async_trait]
pub trait SalesDataProvider: DataAdapter {
    /// Resolves the source file location for a subscription.
    ///
    /// `date` is the host's request date; datasets that keep all history in
    /// one file per symbol ignore it.
    fn resolve_source(&self, config: &SubscriptionConfig, date: NaiveDate) -> DataSource;

    /// Parses one line of the source file into a record.
    ///
    /// A malformed line fails with [`DataError::Parse`](crate::DataError::Parse);
    /// there is no partial recovery or default substitution.
    fn parse_line(&self, config: &SubscriptionConfig, line: &str) -> Result<NftSalesRecord>;

    /// Returns the records whose `end_time` falls within `[start, end]`.
    ///
    /// For sparse datasets a missing source file yields an empty history.
    async fn fetch_history(
        &self,
        config: &SubscriptionConfig,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NftSalesRecord>>;

    /// Subscribes to record delivery for a symbol.
    ///
    /// Yields the symbol's records in source order as the host pumps them
    /// into the pipeline.
    async fn subscribe(&self, config: &SubscriptionConfig) -> Result<RecordStream>;
}
