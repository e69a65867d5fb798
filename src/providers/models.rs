use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// Wire shape of the latest-rates endpoint.
#[derive(Deserialize, Debug)]
pub(crate) struct LatestRatesResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<ApiError>,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub rates: HashMap<String, f64>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ApiError {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub info: Option<String>,
}

/// Raw rates quoted against the provider's origin currency, plus the quote
/// time reported upstream.
#[derive(Debug, Clone)]
pub struct RatePayload {
    pub rates: HashMap<String, f64>,
    pub as_of: DateTime<Utc>,
}
