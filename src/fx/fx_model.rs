use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

use super::currency::CurrencyCode;

/// A normalized rate table: "units of the display currency per 1 unit of the
/// keyed currency". Always contains the display currency itself, mapped to 1.
#[derive(Debug, Clone)]
pub struct RateTable {
    display: CurrencyCode,
    rates: HashMap<CurrencyCode, f64>,
}

impl RateTable {
    pub(crate) fn new(display: CurrencyCode, rates: HashMap<CurrencyCode, f64>) -> Self {
        RateTable { display, rates }
    }

    /// The currency all rates in this table are expressed against.
    pub fn display(&self) -> &CurrencyCode {
        &self.display
    }

    pub fn rate(&self, code: &CurrencyCode) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.rates.contains_key(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, f64)> {
        self.rates.iter().map(|(code, rate)| (code, *rate))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// A rate table together with the upstream quote time. Rebuilt wholesale on
/// each successful refresh, never mutated in place.
#[derive(Debug, Clone)]
pub struct RateSnapshot {
    pub table: RateTable,
    pub as_of: DateTime<Utc>,
}

/// Human-readable currency names, keyed by code. Best-effort: codes without a
/// known name display as themselves.
pub type CurrencyNames = HashMap<CurrencyCode, String>;

#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub converted_amount: f64,
    /// Rate of exactly 1 `from` unit expressed in `to` units.
    pub unit_rate: f64,
}
