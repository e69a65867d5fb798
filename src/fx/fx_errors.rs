use thiserror::Error;

use crate::providers::ProviderError;

#[derive(Error, Debug)]
pub enum FxError {
    #[error("Failed to fetch exchange rates: {0}")]
    FetchFailed(String),

    #[error("Rate normalization failed: {0}")]
    NormalizationFailed(String),

    #[error("Invalid currency selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid currency code: {0}")]
    InvalidCurrencyCode(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}

impl From<ProviderError> for FxError {
    fn from(err: ProviderError) -> Self {
        FxError::FetchFailed(err.to_string())
    }
}
