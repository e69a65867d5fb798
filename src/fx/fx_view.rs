use serde::Serialize;

use super::currency::CurrencyCode;
use super::fx_model::{ConversionResult, CurrencyNames, RateTable};
use crate::constants::{AMOUNT_DISPLAY_PRECISION, RATE_DISPLAY_PRECISION};

/// One row of the rate board.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRow {
    pub code: String,
    pub name: String,
    pub rate: String,
}

/// Formatted strings for the converter panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverterView {
    pub amount: String,
    pub converted_amount: String,
    pub rate_line: String,
}

pub fn format_rate(rate: f64) -> String {
    format!("{:.*}", RATE_DISPLAY_PRECISION, rate)
}

pub fn format_amount(amount: f64) -> String {
    format!("{:.*}", AMOUNT_DISPLAY_PRECISION, amount)
}

/// Renders "1 USD = 81.818182 INR".
pub fn format_rate_line(from: &CurrencyCode, rate: f64, to: &CurrencyCode) -> String {
    format!("1 {} = {} {}", from, format_rate(rate), to)
}

/// Builds the sorted rate board rows, optionally filtered by a
/// case-insensitive substring match on code or name.
pub fn rate_rows(table: &RateTable, names: &CurrencyNames, filter: Option<&str>) -> Vec<RateRow> {
    let needle = filter.map(str::to_lowercase);

    let mut rows: Vec<RateRow> = table
        .iter()
        .map(|(code, rate)| {
            let name = names
                .get(code)
                .cloned()
                .unwrap_or_else(|| code.to_string());
            RateRow {
                code: code.to_string(),
                rate: format_rate_line(code, rate, table.display()),
                name,
            }
        })
        .filter(|row| match &needle {
            Some(needle) => {
                row.code.to_lowercase().contains(needle)
                    || row.name.to_lowercase().contains(needle)
            }
            None => true,
        })
        .collect();

    rows.sort_by(|a, b| a.code.cmp(&b.code));
    rows
}

pub fn converter_view(
    amount: f64,
    from: &CurrencyCode,
    to: &CurrencyCode,
    result: &ConversionResult,
) -> ConverterView {
    ConverterView {
        amount: format!("{} {}", format_amount(amount), from),
        converted_amount: format!("{} {}", format_amount(result.converted_amount), to),
        rate_line: format_rate_line(from, result.unit_rate, to),
    }
}
