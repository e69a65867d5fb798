/// Currency the upstream rate API denominates all raw rates against.
pub const DEFAULT_ORIGIN_CURRENCY: &str = "EUR";

/// Default display currency for the rate board.
pub const DEFAULT_DISPLAY_CURRENCY: &str = "INR";

/// Decimal precision for displayed exchange rates
pub const RATE_DISPLAY_PRECISION: usize = 6;

/// Decimal precision for displayed amounts
pub const AMOUNT_DISPLAY_PRECISION: usize = 2;

/// Latest-rates endpoint
pub const LATEST_RATES_URL: &str = "https://data.fixer.io/api/latest";

/// Currency display-name endpoint
pub const CURRENCY_NAMES_URL: &str = "https://openexchangerates.org/api/currencies.json";
