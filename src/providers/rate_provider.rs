use async_trait::async_trait;
use std::collections::HashMap;

use super::models::RatePayload;
use super::provider_errors::ProviderError;

/// Source of the latest raw rate table.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn latest_rates(&self) -> Result<RatePayload, ProviderError>;
}

/// Source of human-readable currency names. Best-effort collaborator: a
/// failure here never blocks the rate board.
#[async_trait]
pub trait CurrencyNameProvider: Send + Sync {
    async fn currency_names(&self) -> Result<HashMap<String, String>, ProviderError>;
}
