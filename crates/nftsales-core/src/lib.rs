#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/nftsales/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core traits and types for NFT sales data adapters.
//!
//! This crate provides the foundational abstractions for delivering daily
//! NFT-sales statistics into a trading engine:
//!
//! - [`DataAdapter`](provider::DataAdapter) - Dataset metadata queried by the host
//! - [`SalesDataProvider`](provider::SalesDataProvider) - Source resolution, parsing and delivery
//! - [`NftSalesRecord`](types::NftSalesRecord) - One daily observation per symbol
//! - [`SubscriptionConfig`](subscription::SubscriptionConfig) - Host subscription context

/// Error types for data operations.
pub mod error;
/// Adapter traits for resolving, parsing and delivering sales data.
pub mod provider;
/// Resolution and time-zone declarations.
pub mod resolution;
/// Subscription context and resolved data sources.
pub mod subscription;
/// Core data types (Symbol, NftSalesRecord).
pub mod types;

// Re-export commonly used items at crate root
pub use error::{DataError, Result};
pub use provider::{DataAdapter, RecordStream, SalesDataProvider};
pub use resolution::{DataTimeZone, Resolution};
pub use subscription::{DataSource, SubscriptionConfig, TransportMedium};
pub use types::{NftSalesRecord, Symbol};
