pub mod currency;
pub mod currency_converter;
pub mod fx_errors;
pub mod fx_model;
pub mod fx_service;
pub mod fx_view;
pub mod rate_normalizer;

pub use currency::CurrencyCode;
pub use currency_converter::{parse_amount, CurrencyConverter};
pub use fx_errors::FxError;
pub use fx_model::{ConversionRequest, ConversionResult, CurrencyNames, RateSnapshot, RateTable};
pub use fx_service::FxService;
pub use fx_view::{ConverterView, RateRow};
