#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/nftsales/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Unified interface for NFT sales data adapters.
//!
//! This crate re-exports the core types and adapter implementations, and
//! provides a [`SalesDataRegistry`] for managing registered adapters with
//! automatic fallback behavior.
//!
//! # Features
//!
//! - `cryptoslam` - CryptoSlam daily NFT sales adapter

// Core types and traits
pub use nftsales_core::*;

// Adapters
#[cfg(feature = "cryptoslam")]
pub use nftsales_cryptoslam::CryptoSlamProvider;

mod registry;
pub use registry::SalesDataRegistry;
