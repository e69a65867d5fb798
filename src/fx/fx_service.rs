use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use super::currency::CurrencyCode;
use super::currency_converter::CurrencyConverter;
use super::fx_errors::FxError;
use super::fx_model::{ConversionRequest, ConversionResult, CurrencyNames, RateSnapshot};
use super::fx_view::{self, ConverterView, RateRow};
use super::rate_normalizer;
use crate::constants::{DEFAULT_DISPLAY_CURRENCY, DEFAULT_ORIGIN_CURRENCY};
use crate::errors::Result;
use crate::providers::{CurrencyNameProvider, RatePayload, RateProvider};

#[derive(Debug, Clone)]
struct Selection {
    amount: f64,
    from: CurrencyCode,
    to: CurrencyCode,
}

#[derive(Default)]
struct FxState {
    snapshot: Option<RateSnapshot>,
    names: CurrencyNames,
    selection: Option<Selection>,
    last_result: Option<ConversionResult>,
}

/// Owner of all rate-board state: the current snapshot, the name cache and
/// the converter selection. The normalizer and converter stay pure functions
/// over that state.
#[derive(Clone)]
pub struct FxService {
    rate_provider: Arc<dyn RateProvider>,
    name_provider: Arc<dyn CurrencyNameProvider>,
    origin: CurrencyCode,
    display: CurrencyCode,
    state: Arc<RwLock<FxState>>,
    refresh_generation: Arc<AtomicU64>,
}

impl FxService {
    pub fn new(
        rate_provider: Arc<dyn RateProvider>,
        name_provider: Arc<dyn CurrencyNameProvider>,
        origin: CurrencyCode,
        display: CurrencyCode,
    ) -> Self {
        Self {
            rate_provider,
            name_provider,
            origin,
            display,
            state: Arc::new(RwLock::new(FxState::default())),
            refresh_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Builds a service for the stock origin/display pair.
    pub fn with_default_pair(
        rate_provider: Arc<dyn RateProvider>,
        name_provider: Arc<dyn CurrencyNameProvider>,
    ) -> Result<Self> {
        let origin = CurrencyCode::new(DEFAULT_ORIGIN_CURRENCY)?;
        let display = CurrencyCode::new(DEFAULT_DISPLAY_CURRENCY)?;
        Ok(Self::new(rate_provider, name_provider, origin, display))
    }

    fn read_state(&self) -> Result<RwLockReadGuard<'_, FxState>> {
        self.state
            .read()
            .map_err(|e| FxError::CacheError(e.to_string()).into())
    }

    fn write_state(&self) -> Result<RwLockWriteGuard<'_, FxState>> {
        self.state
            .write()
            .map_err(|e| FxError::CacheError(e.to_string()).into())
    }

    /// Fetches the latest rates, normalizes them against the display currency
    /// and commits the new snapshot atomically. The two upstream calls run
    /// sequentially; currency names are only fetched while the name cache is
    /// empty, and a name failure degrades to showing codes.
    ///
    /// Overlapping refreshes are resolved by a generation counter: a response
    /// belonging to a superseded refresh is discarded instead of overwriting
    /// a newer snapshot. On any failure the previous snapshot stays in place.
    pub async fn refresh(&self) -> Result<()> {
        let generation = self.refresh_generation.fetch_add(1, Ordering::SeqCst) + 1;

        let payload = match self.rate_provider.latest_rates().await {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("Failed to fetch exchange rates: {}", e);
                return Err(FxError::from(e).into());
            }
        };

        let raw_rates = Self::validated_rates(&payload);
        let table = rate_normalizer::normalize(&raw_rates, &self.origin, &self.display)?;

        if self.refresh_generation.load(Ordering::SeqCst) != generation {
            log::warn!("Discarding superseded rate response");
            return Ok(());
        }

        let names_missing = {
            let mut state = self.write_state()?;
            state.snapshot = Some(RateSnapshot {
                table,
                as_of: payload.as_of,
            });
            state.names.is_empty()
        };

        if names_missing {
            self.refresh_names().await?;
        }

        Ok(())
    }

    /// Parses the raw payload keys into validated codes, dropping malformed
    /// entries before they can reach any arithmetic.
    fn validated_rates(payload: &RatePayload) -> HashMap<CurrencyCode, f64> {
        let mut rates = HashMap::with_capacity(payload.rates.len());
        for (raw_code, rate) in &payload.rates {
            match CurrencyCode::new(raw_code) {
                Ok(code) => {
                    rates.insert(code, *rate);
                }
                Err(_) => {
                    log::warn!("Skipping malformed currency code {:?} in rate payload", raw_code);
                }
            }
        }
        rates
    }

    async fn refresh_names(&self) -> Result<()> {
        match self.name_provider.currency_names().await {
            Ok(raw_names) => {
                let names: CurrencyNames = raw_names
                    .into_iter()
                    .filter_map(|(code, name)| CurrencyCode::new(&code).ok().map(|c| (c, name)))
                    .collect();
                self.write_state()?.names = names;
            }
            Err(e) => {
                // Best-effort: the board falls back to showing codes.
                log::warn!("Failed to fetch currency names: {}", e);
            }
        }
        Ok(())
    }

    /// Converts against the current snapshot. On success the selection and
    /// result are recorded for the converter panel; on failure the previously
    /// recorded result stays untouched.
    pub fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult> {
        let result = {
            let state = self.read_state()?;
            let snapshot = state.snapshot.as_ref().ok_or_else(|| {
                FxError::InvalidSelection("No exchange rates loaded".to_string())
            })?;
            CurrencyConverter::new(&snapshot.table).convert(request)?
        };

        let mut state = self.write_state()?;
        state.selection = Some(Selection {
            amount: request.amount,
            from: request.from.clone(),
            to: request.to.clone(),
        });
        state.last_result = Some(result);
        Ok(result)
    }

    /// Exchanges the selected from/to currencies and re-runs the conversion
    /// with the recorded amount. A pure selection swap, no re-fetch.
    pub fn swap(&self) -> Result<ConversionResult> {
        let request = {
            let state = self.read_state()?;
            let selection = state.selection.as_ref().ok_or_else(|| {
                FxError::InvalidSelection("No conversion selected".to_string())
            })?;
            ConversionRequest {
                amount: selection.amount,
                from: selection.to.clone(),
                to: selection.from.clone(),
            }
        };
        self.convert(&request)
    }

    /// Sorted rate board rows; empty until the first successful refresh.
    pub fn rate_rows(&self, filter: Option<&str>) -> Result<Vec<RateRow>> {
        let state = self.read_state()?;
        Ok(match &state.snapshot {
            Some(snapshot) => fx_view::rate_rows(&snapshot.table, &state.names, filter),
            None => Vec::new(),
        })
    }

    /// Formatted converter panel for the last successful conversion.
    pub fn converter_view(&self) -> Result<Option<ConverterView>> {
        let state = self.read_state()?;
        Ok(match (&state.selection, &state.last_result) {
            (Some(selection), Some(result)) => Some(fx_view::converter_view(
                selection.amount,
                &selection.from,
                &selection.to,
                result,
            )),
            _ => None,
        })
    }

    pub fn as_of(&self) -> Result<Option<DateTime<Utc>>> {
        Ok(self.read_state()?.snapshot.as_ref().map(|s| s.as_of))
    }

    pub fn display_currency(&self) -> &CurrencyCode {
        &self.display
    }

    pub fn has_rates(&self) -> Result<bool> {
        Ok(self.read_state()?.snapshot.is_some())
    }

    pub fn selection(&self) -> Result<Option<(CurrencyCode, CurrencyCode)>> {
        Ok(self
            .read_state()?
            .selection
            .as_ref()
            .map(|s| (s.from.clone(), s.to.clone())))
    }

    pub fn last_result(&self) -> Result<Option<ConversionResult>> {
        Ok(self.read_state()?.last_result)
    }
}
