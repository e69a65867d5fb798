pub mod constants;
pub mod errors;
pub mod fx;
pub mod providers;

pub use fx::{ConversionRequest, ConversionResult, CurrencyCode, FxError, FxService};
pub use providers::{CurrencyNameProvider, ProviderError, RateProvider};
