use thiserror::Error;

use crate::fx::FxError;
use crate::providers::ProviderError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the rate board
#[derive(Error, Debug)]
pub enum Error {
    #[error("Currency operation failed: {0}")]
    Fx(#[from] FxError),

    #[error("Provider operation failed: {0}")]
    Provider(#[from] ProviderError),
}
