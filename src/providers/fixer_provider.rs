use async_trait::async_trait;
use chrono::DateTime;

use super::models::{LatestRatesResponse, RatePayload};
use super::provider_errors::ProviderError;
use super::rate_provider::RateProvider;
use crate::constants::LATEST_RATES_URL;

/// HTTP client for the latest-rates endpoint. Rates come back denominated
/// against the API's own origin currency.
pub struct FixerProvider {
    api_key: String,
    client: reqwest::Client,
}

impl FixerProvider {
    pub fn new(api_key: String) -> Self {
        FixerProvider {
            api_key,
            client: reqwest::Client::new(),
        }
    }

    fn payload_from_response(response: LatestRatesResponse) -> Result<RatePayload, ProviderError> {
        if !response.success {
            let reason = match response.error {
                Some(error) => error.info.unwrap_or_else(|| match error.code {
                    Some(code) => format!("Rate API error code {}", code),
                    None => "Failed to fetch exchange rates".to_string(),
                }),
                None => "Failed to fetch exchange rates".to_string(),
            };
            return Err(ProviderError::Api(reason));
        }

        let as_of = DateTime::from_timestamp(response.timestamp, 0).ok_or_else(|| {
            ProviderError::Parsing(format!("Invalid quote timestamp {}", response.timestamp))
        })?;

        Ok(RatePayload {
            rates: response.rates,
            as_of,
        })
    }
}

#[async_trait]
impl RateProvider for FixerProvider {
    async fn latest_rates(&self) -> Result<RatePayload, ProviderError> {
        let url = format!("{}?access_key={}", LATEST_RATES_URL, self.api_key);

        let response = self
            .client
            .get(&url)
            .send()
            .await?
            .json::<LatestRatesResponse>()
            .await
            .map_err(|e| ProviderError::Parsing(e.to_string()))?;

        Self::payload_from_response(response)
    }
}
