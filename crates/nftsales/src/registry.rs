//! Adapter registry for managing multiple sales-data providers with fallback.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, warn};

use nftsales_core::{
    DataError, NftSalesRecord, RecordStream, Result, SalesDataProvider, SubscriptionConfig,
};

/// Registry for managing multiple sales-data providers with automatic fallback.
///
/// The `SalesDataRegistry` holds the adapters a host has wired in and tries
/// them in registration order until one succeeds.
///
/// # Example
///
/// ```rust,ignore
/// use chrono::NaiveDate;
/// use nftsales::{SalesDataRegistry, SubscriptionConfig, Symbol};
///
/// let registry = SalesDataRegistry::new().with_cryptoslam();
/// let config = SubscriptionConfig::new(Symbol::new("ETHUSD"), "/data");
///
/// let history = registry.fetch_history(
///     &config,
///     NaiveDate::from_ymd_opt(2020, 10, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2020, 10, 11).unwrap(),
/// ).await?;
/// ```
#[derive(Default)]
pub struct SalesDataRegistry {
    providers: Vec<Arc<dyn SalesDataProvider>>,
}

impl std::fmt::Debug for SalesDataRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesDataRegistry")
            .field(
                "providers",
                &self.providers.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl SalesDataRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sales-data provider.
    pub fn register(&mut self, provider: Arc<dyn SalesDataProvider>) {
        debug!(provider = provider.name(), "Registering sales provider");
        self.providers.push(provider);
    }

    /// Fetch history for a subscription, trying providers in order until one
    /// succeeds.
    pub async fn fetch_history(
        &self,
        config: &SubscriptionConfig,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NftSalesRecord>> {
        if self.providers.is_empty() {
            return Err(DataError::ProviderNotConfigured(
                "No sales providers registered".to_string(),
            ));
        }

        let mut last_error = None;
        for provider in &self.providers {
            debug!(
                provider = provider.name(),
                symbol = %config.symbol,
                "Fetching sales history"
            );

            match provider.fetch_history(config, start, end).await {
                Ok(records) => return Ok(records),
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "Provider failed, trying next"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| DataError::Other("All providers failed with no error".to_string())))
    }

    /// Subscribe to record delivery, trying providers in order until one
    /// succeeds.
    pub async fn subscribe(&self, config: &SubscriptionConfig) -> Result<RecordStream> {
        if self.providers.is_empty() {
            return Err(DataError::ProviderNotConfigured(
                "No sales providers registered".to_string(),
            ));
        }

        let mut last_error = None;
        for provider in &self.providers {
            debug!(
                provider = provider.name(),
                symbol = %config.symbol,
                "Subscribing to sales records"
            );

            match provider.subscribe(config).await {
                Ok(stream) => return Ok(stream),
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "Provider failed, trying next"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| DataError::Other("All providers failed with no error".to_string())))
    }

    // Builder methods for easy setup with specific adapters

    /// Add the CryptoSlam NFT sales adapter.
    #[cfg(feature = "cryptoslam")]
    #[must_use]
    pub fn with_cryptoslam(mut self) -> Self {
        self.register(Arc::new(nftsales_cryptoslam::CryptoSlamProvider::new()));
        self
    }
}
