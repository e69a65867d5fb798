use std::collections::HashMap;

use super::currency::CurrencyCode;
use super::fx_errors::FxError;
use super::fx_model::RateTable;

/// Re-denominates a raw rate table into units of the display currency.
///
/// `raw_rates[X]` is "units of X per 1 unit of the origin currency". The
/// display currency's own raw rate acts as the pivot: since `raw_rates[D]` is
/// D-per-origin and `raw_rates[X]` is X-per-origin, `raw_rates[D] /
/// raw_rates[X]` is exactly "units of D per 1 unit of X".
pub fn normalize(
    raw_rates: &HashMap<CurrencyCode, f64>,
    origin: &CurrencyCode,
    display: &CurrencyCode,
) -> Result<RateTable, FxError> {
    let pivot = raw_rates.get(display).copied().ok_or_else(|| {
        FxError::NormalizationFailed(format!("No rate available for pivot currency {}", display))
    })?;

    if !pivot.is_finite() || pivot <= 0.0 {
        return Err(FxError::NormalizationFailed(format!(
            "Unusable pivot rate {} for {}",
            pivot, display
        )));
    }

    let mut normalized = HashMap::with_capacity(raw_rates.len() + 1);
    for (code, raw) in raw_rates {
        if !raw.is_finite() || *raw <= 0.0 {
            log::warn!("Skipping {}: unusable raw rate {}", code, raw);
            continue;
        }
        normalized.insert(code.clone(), pivot / *raw);
    }

    // The origin's raw rate is definitionally 1, so the generic rule already
    // yields the pivot; set it explicitly in case the feed omits the origin
    // from its own table.
    normalized.insert(origin.clone(), pivot);
    normalized.insert(display.clone(), 1.0);

    Ok(RateTable::new(display.clone(), normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    fn raw_rates(entries: &[(&str, f64)]) -> HashMap<CurrencyCode, f64> {
        entries.iter().map(|(c, r)| (code(c), *r)).collect()
    }

    #[test]
    fn test_display_currency_maps_to_identity() {
        let raw = raw_rates(&[("INR", 90.0), ("USD", 1.1), ("EUR", 1.0)]);
        let table = normalize(&raw, &code("EUR"), &code("INR")).unwrap();
        assert_eq!(table.rate(&code("INR")), Some(1.0));
        assert_eq!(table.display(), &code("INR"));
    }

    #[test]
    fn test_generic_rule_divides_through_the_pivot() {
        let raw = raw_rates(&[("INR", 90.0), ("USD", 1.1), ("EUR", 1.0), ("GBP", 0.85)]);
        let table = normalize(&raw, &code("EUR"), &code("INR")).unwrap();

        let usd = table.rate(&code("USD")).unwrap();
        assert!((usd - 90.0 / 1.1).abs() < 1e-9);
        let gbp = table.rate(&code("GBP")).unwrap();
        assert!((gbp - 90.0 / 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_origin_rate_equals_pivot() {
        let raw = raw_rates(&[("INR", 90.0), ("USD", 1.1), ("EUR", 1.0)]);
        let table = normalize(&raw, &code("EUR"), &code("INR")).unwrap();
        assert_eq!(table.rate(&code("EUR")), Some(90.0));
    }

    #[test]
    fn test_origin_rate_set_even_when_feed_omits_origin() {
        let raw = raw_rates(&[("INR", 90.0), ("USD", 1.1)]);
        let table = normalize(&raw, &code("EUR"), &code("INR")).unwrap();
        assert_eq!(table.rate(&code("EUR")), Some(90.0));
    }

    #[test]
    fn test_missing_pivot_fails() {
        let raw = raw_rates(&[("USD", 1.1), ("EUR", 1.0)]);
        let result = normalize(&raw, &code("EUR"), &code("INR"));
        assert!(matches!(result, Err(FxError::NormalizationFailed(_))));
    }

    #[test]
    fn test_zero_pivot_fails() {
        let raw = raw_rates(&[("INR", 0.0), ("USD", 1.1)]);
        let result = normalize(&raw, &code("EUR"), &code("INR"));
        assert!(matches!(result, Err(FxError::NormalizationFailed(_))));
    }

    #[test]
    fn test_non_finite_pivot_fails() {
        for bad in [f64::NAN, f64::INFINITY, -1.0] {
            let raw = raw_rates(&[("INR", bad), ("USD", 1.1)]);
            let result = normalize(&raw, &code("EUR"), &code("INR"));
            assert!(matches!(result, Err(FxError::NormalizationFailed(_))));
        }
    }

    #[test]
    fn test_unusable_entries_are_skipped_not_poisoning() {
        let raw = raw_rates(&[("INR", 90.0), ("USD", 1.1), ("XXX", 0.0), ("YYY", f64::NAN)]);
        let table = normalize(&raw, &code("EUR"), &code("INR")).unwrap();

        assert!(!table.contains(&code("XXX")));
        assert!(!table.contains(&code("YYY")));
        for (_, rate) in table.iter() {
            assert!(rate.is_finite() && rate > 0.0);
        }
    }
}
