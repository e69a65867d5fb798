use async_trait::async_trait;
use std::collections::HashMap;

use super::provider_errors::ProviderError;
use super::rate_provider::CurrencyNameProvider;
use crate::constants::CURRENCY_NAMES_URL;

/// HTTP client for the currency display-name endpoint, a flat code-to-name
/// JSON map. No API key required.
pub struct OpenExchangeRatesProvider {
    client: reqwest::Client,
}

impl OpenExchangeRatesProvider {
    pub fn new() -> Self {
        OpenExchangeRatesProvider {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for OpenExchangeRatesProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CurrencyNameProvider for OpenExchangeRatesProvider {
    async fn currency_names(&self) -> Result<HashMap<String, String>, ProviderError> {
        self.client
            .get(CURRENCY_NAMES_URL)
            .send()
            .await?
            .json::<HashMap<String, String>>()
            .await
            .map_err(|e| ProviderError::Parsing(e.to_string()))
    }
}
