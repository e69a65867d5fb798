use super::currency::CurrencyCode;
use super::fx_errors::FxError;
use super::fx_model::{ConversionRequest, ConversionResult, RateTable};

/// A calculator for conversions over a normalized rate table.
///
/// Stateless beyond the borrowed table: every call is a pure function of its
/// inputs, so it is safe to invoke repeatedly with no side effects.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyConverter<'a> {
    table: &'a RateTable,
}

impl<'a> CurrencyConverter<'a> {
    pub fn new(table: &'a RateTable) -> Self {
        CurrencyConverter { table }
    }

    fn get_rate(&self, code: &CurrencyCode) -> Result<f64, FxError> {
        self.table.rate(code).ok_or_else(|| {
            FxError::InvalidSelection(format!("No exchange rate available for {}", code))
        })
    }

    /// Rate of exactly 1 `from` unit expressed in `to` units.
    pub fn unit_rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<f64, FxError> {
        let from_rate = self.get_rate(from)?;
        let to_rate = self.get_rate(to)?;
        Ok(from_rate / to_rate)
    }

    pub fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, FxError> {
        if !request.amount.is_finite() || request.amount < 0.0 {
            return Err(FxError::InvalidAmount(format!(
                "Amount must be a finite non-negative number, got {}",
                request.amount
            )));
        }

        let unit_rate = self.unit_rate(&request.from, &request.to)?;
        Ok(ConversionResult {
            converted_amount: request.amount * unit_rate,
            unit_rate,
        })
    }
}

/// Parses free-typed amount input. Empty or non-numeric text counts as zero
/// rather than an error, to keep interactive typing forgiving.
pub fn parse_amount(input: &str) -> f64 {
    input.trim().parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    fn test_table() -> RateTable {
        // INR-denominated: 1 EUR = 90 INR, 1 USD = 90/1.1 INR
        let mut rates = HashMap::new();
        rates.insert(code("INR"), 1.0);
        rates.insert(code("EUR"), 90.0);
        rates.insert(code("USD"), 90.0 / 1.1);
        RateTable::new(code("INR"), rates)
    }

    fn request(amount: f64, from: &str, to: &str) -> ConversionRequest {
        ConversionRequest {
            amount,
            from: code(from),
            to: code(to),
        }
    }

    #[test]
    fn test_direct_conversion() {
        let table = test_table();
        let converter = CurrencyConverter::new(&table);

        let result = converter.convert(&request(100.0, "EUR", "USD")).unwrap();
        assert!((result.converted_amount - 110.0).abs() < 1e-6);
        assert!((result.unit_rate - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_restores_amount() {
        let table = test_table();
        let converter = CurrencyConverter::new(&table);

        let forward = converter.convert(&request(123.45, "USD", "EUR")).unwrap();
        let back = converter
            .convert(&request(forward.converted_amount, "EUR", "USD"))
            .unwrap();
        assert!((back.converted_amount - 123.45).abs() < 1e-9);
    }

    #[test]
    fn test_conversion_is_idempotent() {
        let table = test_table();
        let converter = CurrencyConverter::new(&table);

        let first = converter.convert(&request(42.0, "EUR", "INR")).unwrap();
        let second = converter.convert(&request(42.0, "EUR", "INR")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_amount_converts_to_zero() {
        let table = test_table();
        let converter = CurrencyConverter::new(&table);

        let result = converter.convert(&request(0.0, "USD", "EUR")).unwrap();
        assert_eq!(result.converted_amount, 0.0);
        assert!(result.unit_rate > 0.0);
    }

    #[test]
    fn test_same_currency_is_identity() {
        let table = test_table();
        let converter = CurrencyConverter::new(&table);

        let result = converter.convert(&request(55.5, "USD", "USD")).unwrap();
        assert_eq!(result.converted_amount, 55.5);
        assert_eq!(result.unit_rate, 1.0);
    }

    #[test]
    fn test_unknown_currency_is_rejected() {
        let table = test_table();
        let converter = CurrencyConverter::new(&table);

        let result = converter.convert(&request(10.0, "GBP", "INR"));
        assert!(matches!(result, Err(FxError::InvalidSelection(_))));
    }

    #[test]
    fn test_invalid_amount_is_rejected() {
        let table = test_table();
        let converter = CurrencyConverter::new(&table);

        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let result = converter.convert(&request(bad, "USD", "EUR"));
            assert!(matches!(result, Err(FxError::InvalidAmount(_))));
        }
    }

    #[test]
    fn test_parse_amount_is_forgiving() {
        assert_eq!(parse_amount("12.5"), 12.5);
        assert_eq!(parse_amount(" 7 "), 7.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
    }
}
