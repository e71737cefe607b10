//! Subscription context and resolved data sources.
//!
//! The host engine hands every adapter call a [`SubscriptionConfig`]
//! describing the current subscription; adapters answer source-resolution
//! requests with a [`DataSource`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::resolution::Resolution;
use crate::types::Symbol;

/// Host-supplied context for one data subscription.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionConfig {
    /// Symbol the subscription is for.
    pub symbol: Symbol,
    /// Root directory of the data folder.
    pub data_folder: PathBuf,
    /// Requested delivery resolution.
    pub resolution: Resolution,
}

impl SubscriptionConfig {
    /// Creates a daily subscription for a symbol under a data root.
    #[must_use]
    pub fn new(symbol: Symbol, data_folder: impl Into<PathBuf>) -> Self {
        Self {
            symbol,
            data_folder: data_folder.into(),
            resolution: Resolution::Daily,
        }
    }

    /// Sets the requested resolution.
    #[must_use]
    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }
}

/// Transport used to open a resolved data source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportMedium {
    /// A file on the local data folder.
    LocalFile,
    /// A file fetched from a remote store by the host's file-access layer.
    RemoteFile,
}

/// A resolved data source location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    /// Location of the source file.
    pub path: PathBuf,
    /// Transport the host should use to open it.
    pub transport: TransportMedium,
}

impl DataSource {
    /// Creates a local-file data source.
    #[must_use]
    pub fn local_file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            transport: TransportMedium::LocalFile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_defaults_to_daily() {
        let config = SubscriptionConfig::new(Symbol::new("ETHUSD"), "/data");
        assert_eq!(config.resolution, Resolution::Daily);
        assert_eq!(config.data_folder, PathBuf::from("/data"));
    }

    #[test]
    fn test_with_resolution() {
        let config = SubscriptionConfig::new(Symbol::new("ETHUSD"), "/data")
            .with_resolution(Resolution::Minute);
        assert_eq!(config.resolution, Resolution::Minute);
    }

    #[test]
    fn test_local_file_source() {
        let source = DataSource::local_file("/data/ethusd.csv");
        assert_eq!(source.transport, TransportMedium::LocalFile);
        assert_eq!(source.path, PathBuf::from("/data/ethusd.csv"));
    }
}
