pub mod fixer_provider;
pub mod models;
pub mod open_exchange_rates_provider;
pub mod provider_errors;
pub mod rate_provider;

pub use fixer_provider::FixerProvider;
pub use models::RatePayload;
pub use open_exchange_rates_provider::OpenExchangeRatesProvider;
pub use provider_errors::ProviderError;
pub use rate_provider::{CurrencyNameProvider, RateProvider};
