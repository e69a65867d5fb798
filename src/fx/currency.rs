use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::fx_errors::FxError;

/// A validated currency code: exactly three ASCII letters, stored uppercase.
///
/// Constructed once at parse time so that malformed codes are rejected before
/// they reach any rate lookup or arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: &str) -> Result<Self, FxError> {
        let trimmed = code.trim();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(FxError::InvalidCurrencyCode(trimmed.to_string()));
        }
        Ok(CurrencyCode(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurrencyCode::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_code_is_uppercased() {
        let code = CurrencyCode::new("usd").unwrap();
        assert_eq!(code.as_str(), "USD");
        assert_eq!(code, CurrencyCode::new("USD").unwrap());
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let code = CurrencyCode::new(" inr ").unwrap();
        assert_eq!(code.as_str(), "INR");
    }

    #[test]
    fn test_malformed_codes_are_rejected() {
        for bad in ["", "EU", "EURO", "E1R", "U$D", "12"] {
            assert!(
                matches!(CurrencyCode::new(bad), Err(FxError::InvalidCurrencyCode(_))),
                "expected rejection for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_from_str_round_trip() {
        let code: CurrencyCode = "gbp".parse().unwrap();
        assert_eq!(code.to_string(), "GBP");
    }
}
